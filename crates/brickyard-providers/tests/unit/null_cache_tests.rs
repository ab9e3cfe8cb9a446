//! Tests for the null cache provider

use brickyard_domain::Error;
use brickyard_providers::cache::NullCache;
use brickyard_providers::CacheProvider;

#[test]
fn test_reads_miss() {
    let cache = NullCache::new();
    assert_eq!(cache.get_raw("key").unwrap(), None);
    assert!(!cache.has("key").unwrap());
}

#[test]
fn test_mutators_report_failure() {
    let cache = NullCache::new();
    assert!(!cache.set_raw("key", b"value", None).unwrap());
    assert!(!cache.delete("key").unwrap());
    assert!(!cache.clear());
    assert!(!cache
        .set_multiple_raw(&[("a", b"1".to_vec())], None)
        .unwrap());
    assert!(!cache.delete_multiple(&["a"]).unwrap());
}

#[test]
fn test_empty_key_is_rejected() {
    let cache = NullCache::new();
    assert!(matches!(cache.has(""), Err(Error::InvalidArgument { .. })));
}
