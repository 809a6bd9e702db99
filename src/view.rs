//! Render snapshot of the loadout and the renderer seam.

use crate::constants::LAST_SAVED_DISPLAY_FORMAT;
use crate::loadout::{Catalog, CheckedState, KitId, ZoneId};
use chrono::{DateTime, Local, Utc};
use std::io::{self, Write};

/// Something that shows the loadout after every change.
pub trait Render {
    fn render(&mut self, view: &LoadoutView) -> io::Result<()>;
}

/// Renderer that discards every frame.
#[derive(Debug, Default)]
pub struct NullRenderer;

impl Render for NullRenderer {
    fn render(&mut self, _view: &LoadoutView) -> io::Result<()> {
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemView {
    pub label: String,
    pub checked: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneView {
    pub zone: ZoneId,
    pub items: Vec<ItemView>,
    pub complete: bool,
    pub visible: bool,
}

impl ZoneView {
    pub fn checked_count(&self) -> usize {
        self.items.iter().filter(|item| item.checked).count()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KitView {
    pub kit: KitId,
    pub active: bool,
}

/// Everything a renderer needs, derived from the manager's state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadoutView {
    /// Every known zone in display order, hidden ones included.
    pub zones: Vec<ZoneView>,
    /// Every kit in toggle order.
    pub kits: Vec<KitView>,
    /// Active kit ids in the order they were enabled.
    pub active_kits: Vec<String>,
    pub last_saved: Option<DateTime<Utc>>,
}

/// A zone is complete when it has items and every one is checked.
///
/// Items without a flag count as unchecked.
pub fn is_zone_complete(items: &[String], checked: &[bool]) -> bool {
    !items.is_empty() && (0..items.len()).all(|i| checked.get(i).copied().unwrap_or(false))
}

/// Auxiliary zones only show while some kit fills them.
pub fn is_zone_visible(zone: ZoneId, items: &[String]) -> bool {
    !zone.is_auxiliary() || !items.is_empty()
}

impl LoadoutView {
    pub fn build(
        catalog: &Catalog,
        checked: &CheckedState,
        active_kits: &[String],
        last_saved: Option<DateTime<Utc>>,
    ) -> Self {
        let zones = ZoneId::ALL
            .iter()
            .map(|&zone| {
                let items = catalog.get(zone.key()).map(Vec::as_slice).unwrap_or(&[]);
                let flags = checked.get(zone.key()).map(Vec::as_slice).unwrap_or(&[]);
                ZoneView {
                    zone,
                    items: items
                        .iter()
                        .enumerate()
                        .map(|(i, label)| ItemView {
                            label: label.clone(),
                            checked: flags.get(i).copied().unwrap_or(false),
                        })
                        .collect(),
                    complete: is_zone_complete(items, flags),
                    visible: is_zone_visible(zone, items),
                }
            })
            .collect();

        let kits = KitId::ALL
            .iter()
            .map(|&kit| KitView {
                kit,
                active: active_kits.iter().any(|k| k == kit.key()),
            })
            .collect();

        Self {
            zones,
            kits,
            active_kits: active_kits.to_vec(),
            last_saved,
        }
    }

    pub fn zone(&self, zone: ZoneId) -> Option<&ZoneView> {
        self.zones.iter().find(|z| z.zone == zone)
    }

    pub fn visible_zones(&self) -> impl Iterator<Item = &ZoneView> {
        self.zones.iter().filter(|z| z.visible)
    }

    /// (complete, visible) zone counts
    pub fn progress(&self) -> (usize, usize) {
        let visible = self.visible_zones().count();
        let complete = self.visible_zones().filter(|z| z.complete).count();
        (complete, visible)
    }

    pub fn last_saved_label(&self) -> String {
        match self.last_saved {
            Some(ts) => format!(
                "Last saved: {}",
                ts.with_timezone(&Local).format(LAST_SAVED_DISPLAY_FORMAT)
            ),
            None => "Not saved yet".to_string(),
        }
    }
}

/// Plain-text report, one block per visible zone.
pub struct TextRenderer<W: Write> {
    out: W,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Render for TextRenderer<W> {
    fn render(&mut self, view: &LoadoutView) -> io::Result<()> {
        let (complete, visible) = view.progress();
        writeln!(self.out, "Loadout: {}/{} zones complete", complete, visible)?;

        let kits: Vec<String> = view
            .kits
            .iter()
            .map(|k| {
                let mark = if k.active { "x" } else { " " };
                format!("[{}] {} ({})", mark, k.kit.name(), k.kit.key())
            })
            .collect();
        writeln!(self.out, "Kits: {}", kits.join("  "))?;
        writeln!(self.out, "{}", view.last_saved_label())?;

        for zone in view.visible_zones() {
            writeln!(self.out)?;
            let mark = if zone.complete { "done" } else { "    " };
            writeln!(
                self.out,
                "[{}] {} ({}) {}/{}",
                mark,
                zone.zone.name(),
                zone.zone.key(),
                zone.checked_count(),
                zone.items.len()
            )?;
            for (i, item) in zone.items.iter().enumerate() {
                let check = if item.checked { "x" } else { " " };
                writeln!(self.out, "  {:>2}. [{}] {}", i, check, item.label)?;
            }
        }
        self.out.flush()
    }
}
