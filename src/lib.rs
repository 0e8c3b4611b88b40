//! Browser front end for the Managify project-management service.
//!
//! Client-side rendered Leptos app: login, a dashboard of projects and
//! invites, and a kanban board whose drag-and-drop moves are applied
//! optimistically and rolled back when the server refuses them.

pub mod app;
pub mod config;
pub mod core;
pub mod features;
pub mod pages;
