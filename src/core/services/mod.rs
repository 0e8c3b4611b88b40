pub mod api;
pub mod fetch_cache;
pub mod session;
pub mod storage;

pub use api::{ApiClient, ApiError, BoardRemote};
pub use fetch_cache::{ColumnFetch, FetchCache};
pub use session::{Session, TokenClaims};
