//! FileStore persistence across store instances

use std::sync::Arc;
use std::time::Duration;

use tempfile::TempDir;

use geocoder_model::{Coordinates, Location, ResultSet};
use geocoder_store::{CacheStore, FileStore, ManualClock, MemoryStore};

fn make_results() -> ResultSet {
    ResultSet::new(vec![
        Location::new("fixture", Coordinates::new(38.8976763, -77.0365298))
            .with_street("1600", "Pennsylvania Avenue Northwest")
            .with_locality("Washington")
            .with_country("United States", Some("US")),
        Location::new("fixture", Coordinates::new(38.8977, -77.0366)).with_locality("Washington"),
    ])
}

#[test]
fn test_entries_survive_reopen() {
    let temp_dir = TempDir::new().unwrap();

    {
        let store = FileStore::new(temp_dir.path());
        store.put("geocoder.white-house", &make_results(), Some(Duration::from_secs(3600))).unwrap();
    }

    let store = FileStore::new(temp_dir.path());
    let cached = store.get("geocoder.white-house").unwrap();
    assert_eq!(cached, Some(make_results()));
}

#[test]
fn test_forget_across_instances() {
    let temp_dir = TempDir::new().unwrap();
    {
        let store = FileStore::new(temp_dir.path());
        for i in 0..10 {
            store.put(&format!("geocoder.{}", i), &make_results(), None).unwrap();
        }
        store.put("other.keep", &make_results(), None).unwrap();
    }

    let store = FileStore::new(temp_dir.path());
    assert_eq!(store.forget("geocoder.*").unwrap(), 10);
    assert_eq!(store.stats().unwrap().entries, 1);
    assert!(store.get("other.keep").unwrap().is_some());
}

#[test]
fn test_purge_expired_keeps_live_entries() {
    let temp_dir = TempDir::new().unwrap();
    let clock = ManualClock::default();
    let store = FileStore::with_clock(temp_dir.path(), Arc::new(clock.clone()));

    store.put("geocoder.short", &make_results(), Some(Duration::from_secs(10))).unwrap();
    store.put("geocoder.long", &make_results(), Some(Duration::from_secs(1000))).unwrap();

    clock.advance(Duration::from_secs(11));
    assert_eq!(store.stats().unwrap().expired, 1);
    assert_eq!(store.purge_expired().unwrap(), 1);

    assert!(store.get("geocoder.short").unwrap().is_none());
    assert!(store.get("geocoder.long").unwrap().is_some());
}

#[test]
fn test_stores_are_usable_as_trait_objects() {
    let temp_dir = TempDir::new().unwrap();
    let stores: Vec<Arc<dyn CacheStore>> = vec![
        Arc::new(MemoryStore::new()),
        Arc::new(FileStore::new(temp_dir.path())),
    ];

    for store in &stores {
        store.put("geocoder.x", &make_results(), None).unwrap();
        assert_eq!(store.get("geocoder.x").unwrap(), Some(make_results()));
        assert_eq!(store.forget("geocoder.x").unwrap(), 1);
        assert!(store.get("geocoder.x").unwrap().is_none());
    }
}
