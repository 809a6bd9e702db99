//! Loadout state manager: owns catalog, checked-state and active kits.

use super::catalog::{build_catalog, Catalog, CheckedState, KitId};
use super::reconcile::{reconcile, PreservationMode};
use crate::constants::{KEY_ACTIVE_KITS, KEY_CHECKED_ITEMS, KEY_LAST_SAVED};
use crate::error::{LoadoutError, Result};
use crate::store::{load_json_or_default, save_json, KeyValueStore};
use crate::view::{LoadoutView, Render};
use chrono::{DateTime, SecondsFormat, Utc};

/// Every mutating operation rebuilds what it must, persists, then renders,
/// so a rendered frame never shows unsaved state.
pub struct LoadoutManager<S: KeyValueStore> {
    store: S,
    mode: PreservationMode,
    catalog: Catalog,
    checked: CheckedState,
    active_kits: Vec<String>,
    last_saved: Option<DateTime<Utc>>,
}

impl<S: KeyValueStore> LoadoutManager<S> {
    /// Manager with empty state. Call [`initialize`](Self::initialize) to
    /// load from the store.
    pub fn new(store: S, mode: PreservationMode) -> Self {
        Self {
            store,
            mode,
            catalog: Catalog::new(),
            checked: CheckedState::new(),
            active_kits: Vec::new(),
            last_saved: None,
        }
    }

    /// Load persisted state (empty on missing or malformed keys), rebuild the
    /// catalog and render.
    pub fn initialize(&mut self, renderer: &mut dyn Render) -> Result<()> {
        self.checked = load_json_or_default(&self.store, KEY_CHECKED_ITEMS);
        self.active_kits = load_json_or_default(&self.store, KEY_ACTIVE_KITS);
        self.last_saved = load_last_saved(&self.store);

        // Stored flags line up with the catalog they were saved against
        self.catalog = build_catalog(&self.active_kits);
        self.recompute_catalog();

        tracing::info!(
            active_kits = ?self.active_kits,
            zones = self.catalog.len(),
            "loadout initialized"
        );
        self.render(renderer)
    }

    /// Enable `kit_id` if it's off, disable it if it's on.
    ///
    /// Returns whether the kit is active afterwards.
    pub fn toggle_kit(&mut self, kit_id: &str, renderer: &mut dyn Render) -> Result<bool> {
        if KitId::from_key(kit_id).is_none() {
            return Err(LoadoutError::UnknownKit(kit_id.to_string()));
        }

        let now_active = if self.active_kits.iter().any(|k| k == kit_id) {
            self.active_kits.retain(|k| k != kit_id);
            false
        } else {
            self.active_kits.push(kit_id.to_string());
            true
        };
        tracing::info!(kit = kit_id, active = now_active, "kit toggled");

        self.recompute_catalog();
        self.persist()?;
        self.render(renderer)?;
        Ok(now_active)
    }

    /// Set one item's checked flag.
    pub fn set_item_checked(
        &mut self,
        zone: &str,
        index: usize,
        value: bool,
        renderer: &mut dyn Render,
    ) -> Result<()> {
        let len = self
            .catalog
            .get(zone)
            .map(Vec::len)
            .ok_or_else(|| LoadoutError::UnknownZone(zone.to_string()))?;
        if index >= len {
            return Err(LoadoutError::ItemOutOfRange {
                zone: zone.to_string(),
                index,
                len,
            });
        }

        let flags = self.checked.entry(zone.to_string()).or_default();
        if flags.len() < len {
            flags.resize(len, false);
        }
        flags[index] = value;
        tracing::debug!(zone, index, value, "item checked");

        self.persist()?;
        self.render(renderer)
    }

    /// Flip one item's checked flag. Returns the new value.
    pub fn toggle_item(
        &mut self,
        zone: &str,
        index: usize,
        renderer: &mut dyn Render,
    ) -> Result<bool> {
        let value = !self.is_checked(zone, index);
        self.set_item_checked(zone, index, value, renderer)?;
        Ok(value)
    }

    /// Drop every mark and kit, back to the plain default catalog.
    pub fn reset(&mut self, renderer: &mut dyn Render) -> Result<()> {
        self.checked.clear();
        self.active_kits.clear();
        self.recompute_catalog();
        tracing::info!("loadout reset");

        self.persist()?;
        self.render(renderer)
    }

    /// Rebuild the catalog from defaults and active kits, then carry checked
    /// marks over according to the preservation mode.
    fn recompute_catalog(&mut self) {
        let catalog = build_catalog(&self.active_kits);
        self.checked = reconcile(&self.catalog, &self.checked, &catalog, self.mode);
        self.catalog = catalog;
    }

    fn persist(&mut self) -> Result<()> {
        let now = Utc::now();
        save_json(&mut self.store, KEY_CHECKED_ITEMS, &self.checked)?;
        save_json(&mut self.store, KEY_ACTIVE_KITS, &self.active_kits)?;
        save_json(
            &mut self.store,
            KEY_LAST_SAVED,
            &now.to_rfc3339_opts(SecondsFormat::Millis, true),
        )?;
        self.last_saved = Some(now);
        tracing::debug!("state persisted");
        Ok(())
    }

    fn render(&self, renderer: &mut dyn Render) -> Result<()> {
        renderer.render(&self.view())?;
        Ok(())
    }

    pub fn view(&self) -> LoadoutView {
        LoadoutView::build(
            &self.catalog,
            &self.checked,
            &self.active_kits,
            self.last_saved,
        )
    }

    pub fn is_checked(&self, zone: &str, index: usize) -> bool {
        self.checked
            .get(zone)
            .and_then(|flags| flags.get(index))
            .copied()
            .unwrap_or(false)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn checked(&self) -> &CheckedState {
        &self.checked
    }

    pub fn active_kits(&self) -> &[String] {
        &self.active_kits
    }

    pub fn last_saved(&self) -> Option<DateTime<Utc>> {
        self.last_saved
    }

    pub fn mode(&self) -> PreservationMode {
        self.mode
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }
}

fn load_last_saved<S: KeyValueStore>(store: &S) -> Option<DateTime<Utc>> {
    let raw: Option<String> = load_json_or_default(store, KEY_LAST_SAVED);
    let raw = raw?;
    match DateTime::parse_from_rfc3339(&raw) {
        Ok(ts) => Some(ts.with_timezone(&Utc)),
        Err(e) => {
            tracing::warn!(value = %raw, error = %e, "discarding malformed last-saved timestamp");
            None
        }
    }
}
