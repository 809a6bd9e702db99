//! Loadout behavior integration tests
//!
//! Drives the public manager API the way the UI and command line do and
//! checks catalog, checked-state and persistence after each step.

use loadout::loadout::{default_catalog, KitId, ZoneId};
use loadout::view::LoadoutView;
use loadout::{
    FileStore, KeyValueStore, LoadoutManager, MemoryStore, NullRenderer, PreservationMode,
    Render,
};

/// Keeps every rendered view so tests can inspect what the UI would show.
#[derive(Default)]
struct Frames(Vec<LoadoutView>);

impl Render for Frames {
    fn render(&mut self, view: &LoadoutView) -> std::io::Result<()> {
        self.0.push(view.clone());
        Ok(())
    }
}

impl Frames {
    fn last(&self) -> &LoadoutView {
        self.0.last().expect("at least one frame")
    }
}

fn manager_with(store: MemoryStore) -> LoadoutManager<MemoryStore> {
    let mut manager = LoadoutManager::new(store, PreservationMode::Positional);
    manager.initialize(&mut NullRenderer).unwrap();
    manager
}

fn assert_aligned<S: KeyValueStore>(manager: &LoadoutManager<S>) {
    for (zone, items) in manager.catalog() {
        assert_eq!(
            manager.checked().get(zone).map(Vec::len),
            Some(items.len()),
            "checked-state misaligned for {zone}"
        );
    }
}

// ============================================================================
// Catalog and kits
// ============================================================================

#[test]
fn test_every_kit_appends_after_defaults() {
    for kit in KitId::ALL {
        let mut manager = manager_with(MemoryStore::new());
        manager.toggle_kit(kit.key(), &mut NullRenderer).unwrap();

        for (zone, items) in kit.contributions() {
            let mut expected: Vec<String> =
                zone.default_items().iter().map(|s| s.to_string()).collect();
            expected.extend(items.iter().map(|s| s.to_string()));
            assert_eq!(manager.catalog()[zone.key()], expected);
        }

        // Zones the kit doesn't declare are untouched
        for (zone, items) in default_catalog() {
            assert_eq!(manager.catalog()[&zone], items);
        }
        assert_aligned(&manager);
    }
}

#[test]
fn test_all_kits_together_stay_aligned() {
    let mut manager = manager_with(MemoryStore::new());
    for kit in KitId::ALL {
        manager.toggle_kit(kit.key(), &mut NullRenderer).unwrap();
    }
    assert_eq!(manager.catalog().len(), ZoneId::ALL.len());
    assert_aligned(&manager);
}

#[test]
fn test_kit_on_then_off_restores_base_lists() {
    let mut manager = manager_with(MemoryStore::new());
    manager.set_item_checked("engine", 0, true, &mut NullRenderer).unwrap();
    manager.toggle_kit("spc_kit", &mut NullRenderer).unwrap();
    manager.toggle_kit("spc_kit", &mut NullRenderer).unwrap();

    assert_eq!(manager.catalog(), &default_catalog());
    assert!(manager.is_checked("engine", 0));
    assert_aligned(&manager);
}

// ============================================================================
// Completion and visibility
// ============================================================================

#[test]
fn test_engine_completes_when_both_items_checked() {
    let mut manager = manager_with(MemoryStore::new());
    let mut frames = Frames::default();

    let engine_complete =
        |frames: &Frames| frames.last().zone(ZoneId::Engine).unwrap().complete;

    manager.set_item_checked("engine", 0, true, &mut frames).unwrap();
    assert!(!engine_complete(&frames));
    manager.set_item_checked("engine", 1, true, &mut frames).unwrap();
    assert!(engine_complete(&frames));
    manager.set_item_checked("engine", 1, false, &mut frames).unwrap();
    assert!(!engine_complete(&frames));
}

#[test]
fn test_ppe_kit_zone_visibility() {
    let mut manager = manager_with(MemoryStore::new());
    let mut frames = Frames::default();

    manager.toggle_kit("spc_kit", &mut frames).unwrap();
    let ppe = frames.last().zone(ZoneId::PpeKit).unwrap().clone();
    assert!(!ppe.visible);
    assert!(!ppe.complete);

    manager.toggle_kit("ppe_kit", &mut frames).unwrap();
    let ppe = frames.last().zone(ZoneId::PpeKit).unwrap();
    assert!(ppe.visible);
    let labels: Vec<&str> = ppe.items.iter().map(|i| i.label.as_str()).collect();
    assert_eq!(labels, ["Helmet", "Glasses", "Gloves", "Boots"]);
    assert!(ppe.items.iter().all(|i| !i.checked));
}

#[test]
fn test_empty_auxiliary_zone_is_never_complete() {
    let manager = manager_with(MemoryStore::new());
    let view = manager.view();
    for zone in view.zones.iter().filter(|z| z.zone.is_auxiliary()) {
        assert!(zone.items.is_empty());
        assert!(!zone.complete);
        assert!(!zone.visible);
    }
}

#[test]
fn test_active_kit_highlight_follows_toggles() {
    let mut manager = manager_with(MemoryStore::new());
    let mut frames = Frames::default();
    manager.toggle_kit("mc4_kit", &mut frames).unwrap();
    manager.toggle_kit("ppe_kit", &mut frames).unwrap();

    let view = frames.last();
    let active: Vec<KitId> = view.kits.iter().filter(|k| k.active).map(|k| k.kit).collect();
    assert_eq!(active, [KitId::Ppe, KitId::Mc4]);
    assert_eq!(view.active_kits, ["mc4_kit", "ppe_kit"]);
}

// ============================================================================
// Reset
// ============================================================================

#[test]
fn test_reset_after_kits_and_checks() {
    let mut manager = manager_with(MemoryStore::new());
    for kit in KitId::ALL {
        manager.toggle_kit(kit.key(), &mut NullRenderer).unwrap();
    }
    for zone in ZoneId::ALL {
        let len = manager.catalog()[zone.key()].len();
        for i in 0..len {
            manager.set_item_checked(zone.key(), i, true, &mut NullRenderer).unwrap();
        }
    }
    assert!(manager.view().zones.iter().all(|z| z.complete));

    manager.reset(&mut NullRenderer).unwrap();
    assert_eq!(manager.catalog(), &default_catalog());
    assert!(manager.active_kits().is_empty());
    assert!(manager.checked().values().flatten().all(|&c| !c));
    assert_aligned(&manager);
}

// ============================================================================
// Positional preservation
// ============================================================================

#[test]
fn test_positional_marks_survive_kit_cycle_in_auxiliary_zone() {
    let mut manager = manager_with(MemoryStore::new());
    manager.toggle_kit("mc4_kit", &mut NullRenderer).unwrap();
    manager.set_item_checked("mc4_kit", 0, true, &mut NullRenderer).unwrap();
    manager.set_item_checked("mc4_kit", 5, true, &mut NullRenderer).unwrap();

    manager.toggle_kit("mc4_kit", &mut NullRenderer).unwrap();
    assert!(!manager.catalog().contains_key("mc4_kit"));

    manager.toggle_kit("mc4_kit", &mut NullRenderer).unwrap();
    assert_eq!(
        manager.checked()["mc4_kit"],
        [true, false, false, false, false, true]
    );
}

#[test]
fn test_kit_cycle_restores_marks_in_every_mode() {
    for mode in [PreservationMode::Positional, PreservationMode::ByLabel] {
        let mut manager = LoadoutManager::new(MemoryStore::new(), mode);
        manager.initialize(&mut NullRenderer).unwrap();
        manager.toggle_kit("ppe_kit", &mut NullRenderer).unwrap();
        manager.set_item_checked("ppe_kit", 1, true, &mut NullRenderer).unwrap();

        manager.toggle_kit("ppe_kit", &mut NullRenderer).unwrap();
        assert_eq!(
            manager.checked().get("ppe_kit").map(Vec::as_slice),
            Some([false, true, false, false].as_slice()),
            "{mode:?}: marks carried while kit is off"
        );

        manager.toggle_kit("ppe_kit", &mut NullRenderer).unwrap();
        assert_eq!(
            manager.checked()["ppe_kit"],
            [false, true, false, false],
            "{mode:?}: marks after re-enable"
        );
        assert_aligned(&manager);
    }
}

// ============================================================================
// Persistence
// ============================================================================

#[test]
fn test_reinitialize_reproduces_state() {
    let mut manager = manager_with(MemoryStore::new());
    manager.toggle_kit("maintenance_kit", &mut NullRenderer).unwrap();
    manager.toggle_kit("ppe_kit", &mut NullRenderer).unwrap();
    manager.set_item_checked("ppe_kit", 2, true, &mut NullRenderer).unwrap();
    manager.set_item_checked("fuel", 0, true, &mut NullRenderer).unwrap();

    let catalog = manager.catalog().clone();
    let checked = manager.checked().clone();
    let kits = manager.active_kits().to_vec();
    let saved = manager.last_saved();

    let reloaded = manager_with(manager.into_store());
    assert_eq!(reloaded.catalog(), &catalog);
    assert_eq!(reloaded.checked(), &checked);
    assert_eq!(reloaded.active_kits(), kits.as_slice());
    // Stored with millisecond precision
    assert_eq!(
        reloaded.last_saved().map(|t| t.timestamp_millis()),
        saved.map(|t| t.timestamp_millis())
    );
}

#[test]
fn test_file_store_roundtrip_across_managers() {
    let tmp = tempfile::tempdir().unwrap();
    {
        let store = FileStore::open(tmp.path()).unwrap();
        let mut manager = LoadoutManager::new(store, PreservationMode::Positional);
        manager.initialize(&mut NullRenderer).unwrap();
        manager.toggle_kit("spc_kit", &mut NullRenderer).unwrap();
        manager.set_item_checked("spc_kit", 3, true, &mut NullRenderer).unwrap();
    }

    for key in ["checked-items", "active-kits", "last-saved"] {
        assert!(tmp.path().join(format!("{key}.json")).is_file(), "{key}");
    }

    let store = FileStore::open(tmp.path()).unwrap();
    let mut manager = LoadoutManager::new(store, PreservationMode::Positional);
    manager.initialize(&mut NullRenderer).unwrap();
    assert_eq!(manager.active_kits(), ["spc_kit"]);
    assert!(manager.is_checked("spc_kit", 3));
    assert!(manager.last_saved().is_some());
}

#[test]
fn test_stored_state_from_older_catalog_is_realigned() {
    // Flags saved against a longer list, plus a zone and kit nobody knows
    let mut store = MemoryStore::new();
    store
        .set(
            "checked-items",
            r#"{"engine": [true, true, true], "glovebox": [true]}"#,
        )
        .unwrap();
    store.set("active-kits", r#"["jetpack"]"#).unwrap();

    let manager = manager_with(store);
    assert_eq!(manager.checked()["engine"], [true, true]);
    assert_eq!(manager.checked()["glovebox"], [true]);
    assert_eq!(manager.active_kits(), ["jetpack"]);
    assert_eq!(manager.catalog(), &default_catalog());
    assert_aligned(&manager);
}

#[test]
fn test_malformed_keys_fall_back_independently() {
    let mut store = MemoryStore::new();
    store.set("checked-items", "not json").unwrap();
    store.set("active-kits", r#"["ppe_kit"]"#).unwrap();

    let manager = manager_with(store);
    assert_eq!(manager.active_kits(), ["ppe_kit"]);
    assert_eq!(manager.checked()["ppe_kit"], [false; 4]);
    assert_aligned(&manager);
}
