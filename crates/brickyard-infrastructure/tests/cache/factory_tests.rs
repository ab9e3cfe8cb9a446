//! Cache Factory Tests

use brickyard_infrastructure::cache::{cache_root, create_cache, provider_name_for};
use brickyard_infrastructure::{RuntimeMode, RuntimeSettings};
use tempfile::TempDir;

fn settings(mode: RuntimeMode, cache_dir: Option<&str>) -> RuntimeSettings {
    RuntimeSettings {
        mode,
        cache_dir: cache_dir.map(str::to_string),
        config_dir: None,
    }
}

#[test]
fn test_cache_root_resolution() {
    let root = TempDir::new().unwrap();
    let absolute = TempDir::new().unwrap();

    assert_eq!(cache_root(root.path(), None), root.path().join("cache"));
    assert_eq!(cache_root(root.path(), Some("")), root.path().join("cache"));
    assert_eq!(
        cache_root(root.path(), Some("var/cache")),
        root.path().join("var/cache")
    );
    assert_eq!(
        cache_root(root.path(), absolute.path().to_str()),
        absolute.path()
    );
}

#[test]
fn test_provider_follows_mode() {
    assert_eq!(provider_name_for(RuntimeMode::Production), "filesystem");
    assert_eq!(provider_name_for(RuntimeMode::Development), "memory");
    assert_eq!(provider_name_for(RuntimeMode::Disabled), "null");
}

#[test]
fn test_production_cache_is_persistent() {
    let root = TempDir::new().unwrap();
    let cache = create_cache(&settings(RuntimeMode::Production, None), root.path()).unwrap();

    assert_eq!(cache.provider_name(), "filesystem");
    assert!(cache.set_raw("user:1", b"ann", None).unwrap());
    assert!(root.path().join("cache").join(".cache.info").is_file());

    let reopened = create_cache(&settings(RuntimeMode::Production, None), root.path()).unwrap();
    assert_eq!(reopened.get_raw("user:1").unwrap(), Some(b"ann".to_vec()));
}

#[test]
fn test_production_cache_honours_cache_dir() {
    let root = TempDir::new().unwrap();
    let cache = create_cache(
        &settings(RuntimeMode::Production, Some("tmp/entries")),
        root.path(),
    )
    .unwrap();

    assert!(cache.set_raw("k", b"v", None).unwrap());
    assert!(root.path().join("tmp/entries/.cache.info").is_file());
}

#[test]
fn test_development_cache_is_in_memory() {
    let root = TempDir::new().unwrap();
    let cache = create_cache(&settings(RuntimeMode::Development, None), root.path()).unwrap();

    assert_eq!(cache.provider_name(), "memory");
    assert!(cache.set_raw("k", b"v", None).unwrap());
    assert!(cache.has("k").unwrap());
    assert!(!root.path().join("cache").exists());
}

#[test]
fn test_disabled_cache_stores_nothing() {
    let root = TempDir::new().unwrap();
    let cache = create_cache(&settings(RuntimeMode::Disabled, None), root.path()).unwrap();

    assert_eq!(cache.provider_name(), "null");
    assert!(!cache.set_raw("k", b"v", None).unwrap());
    assert_eq!(cache.get_raw("k").unwrap(), None);
}
