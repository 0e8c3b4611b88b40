use super::*;
use chrono::TimeZone;

fn at(secs: i64) -> DateTime<Utc> {
    Utc.timestamp_opt(secs, 0).unwrap()
}

#[test]
fn new_cache_has_no_markers() {
    let cache = FetchCache::default();
    assert!(cache.is_empty());
    assert!(!cache.is_fetched("todo"));
    assert!(!cache.is_in_flight("todo"));
}

#[test]
fn claim_is_exclusive() {
    let mut cache = FetchCache::default();
    assert!(cache.claim("todo"));
    assert!(cache.is_in_flight("todo"));
    assert!(!cache.claim("todo"));
}

#[test]
fn failed_column_is_not_claimed_again_until_invalidated() {
    let mut cache = FetchCache::default();
    assert!(cache.claim("todo"));
    cache.mark_failed("todo", at(5));

    assert!(cache.is_failed("todo"));
    assert!(!cache.needs_load("todo"));
    assert!(!cache.claim("todo"));
    assert!(cache.claim_missing(["todo"]).is_empty());

    cache.invalidate("todo");
    assert!(cache.claim("todo"));
}

#[test]
fn fetched_column_is_not_claimed_again() {
    let mut cache = FetchCache::default();
    assert!(cache.claim("todo"));
    cache.mark_fetched("todo", at(100));

    assert!(cache.is_fetched("todo"));
    assert_eq!(cache.fetched_at("todo"), Some(at(100)));
    assert!(!cache.claim("todo"));
}

#[test]
fn failure_does_not_clear_fetched_marker() {
    let mut cache = FetchCache::default();
    cache.mark_fetched("todo", at(1));
    cache.mark_failed("todo", at(2));
    assert!(cache.is_fetched("todo"));
    assert!(!cache.is_failed("todo"));
}

#[test]
fn invalidate_allows_a_fresh_load() {
    let mut cache = FetchCache::default();
    cache.mark_fetched("todo", at(1));
    cache.mark_fetched("doing", at(1));

    cache.invalidate("todo");
    assert!(!cache.is_fetched("todo"));
    assert!(cache.is_fetched("doing"));
    assert_eq!(cache.claim_missing(["todo", "doing"]), vec!["todo".to_string()]);
}

#[test]
fn invalidate_all_clears_everything() {
    let mut cache = FetchCache::default();
    cache.mark_fetched("todo", at(1));
    assert!(cache.claim("doing"));
    cache.invalidate_all();
    assert!(cache.is_empty());
}

#[test]
fn claim_missing_skips_in_flight_and_fetched() {
    let mut cache = FetchCache::default();
    assert!(cache.claim("a"));
    cache.mark_fetched("b", at(1));

    let claimed = cache.claim_missing(["a", "b", "c", "d"]);
    assert_eq!(claimed, vec!["c".to_string(), "d".to_string()]);
    assert!(cache.is_in_flight("c"));
}
