//! Zone and kit definitions, and catalog assembly from the active kits.

use std::collections::BTreeMap;

/// Zone key -> ordered item labels.
pub type Catalog = BTreeMap<String, Vec<String>>;

/// Zone key -> checked flags, positionally aligned with the zone's items.
pub type CheckedState = BTreeMap<String, Vec<bool>>;

/// Truck compartments, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ZoneId {
    FrontTruck,
    BackTruck,
    JobBoxLeft,
    JobBoxRight,
    FrontSeat,
    BackSeat,
    Engine,
    Fuel,
    // Auxiliary zones, only populated by their kit
    PpeKit,
    SpcKit,
    MaintenanceKit,
    Mc4Kit,
}

impl ZoneId {
    pub const ALL: [ZoneId; 12] = [
        ZoneId::FrontTruck,
        ZoneId::BackTruck,
        ZoneId::JobBoxLeft,
        ZoneId::JobBoxRight,
        ZoneId::FrontSeat,
        ZoneId::BackSeat,
        ZoneId::Engine,
        ZoneId::Fuel,
        ZoneId::PpeKit,
        ZoneId::SpcKit,
        ZoneId::MaintenanceKit,
        ZoneId::Mc4Kit,
    ];

    /// Storage key
    pub fn key(&self) -> &'static str {
        match self {
            ZoneId::FrontTruck => "front_truck",
            ZoneId::BackTruck => "back_truck",
            ZoneId::JobBoxLeft => "job_box_1",
            ZoneId::JobBoxRight => "job_box_2",
            ZoneId::FrontSeat => "front_seat",
            ZoneId::BackSeat => "back_seat",
            ZoneId::Engine => "engine",
            ZoneId::Fuel => "fuel",
            ZoneId::PpeKit => "ppe_kit",
            ZoneId::SpcKit => "spc_kit",
            ZoneId::MaintenanceKit => "maintenance_kit",
            ZoneId::Mc4Kit => "mc4_kit",
        }
    }

    /// Display name for UI
    pub fn name(&self) -> &'static str {
        match self {
            ZoneId::FrontTruck => "Front of Truck",
            ZoneId::BackTruck => "Back of Truck",
            ZoneId::JobBoxLeft => "Job Box (Left)",
            ZoneId::JobBoxRight => "Job Box (Right)",
            ZoneId::FrontSeat => "Front Seat",
            ZoneId::BackSeat => "Back Seat",
            ZoneId::Engine => "Engine",
            ZoneId::Fuel => "Fuel",
            ZoneId::PpeKit => "PPE Kit",
            ZoneId::SpcKit => "SPC Kit",
            ZoneId::MaintenanceKit => "Maintenance Kit",
            ZoneId::Mc4Kit => "MC4 Kit",
        }
    }

    pub fn is_auxiliary(&self) -> bool {
        matches!(
            self,
            ZoneId::PpeKit | ZoneId::SpcKit | ZoneId::MaintenanceKit | ZoneId::Mc4Kit
        )
    }

    /// Items present before any kit is enabled. Empty for auxiliary zones.
    pub fn default_items(&self) -> &'static [&'static str] {
        match self {
            ZoneId::FrontTruck => &["Windshield", "Tires", "Lights"],
            ZoneId::BackTruck => &["Lights", "Tires"],
            ZoneId::JobBoxLeft => &[
                "Hot Stick",
                "Screw driver",
                "Zip Ties",
                "Locks",
                "Torque Wrench",
                "8 PVC",
            ],
            ZoneId::JobBoxRight => &["Loto Boxes", "Eye Loops", "Sockets Torque Wrench"],
            ZoneId::FrontSeat => &[
                "Phone",
                "Tablet/Computer",
                "Paperwork",
                "Procedure/Instructions",
                "Keys",
                "Nut Driver",
            ],
            ZoneId::BackSeat => &[
                "Medkit – 40 cal",
                "Kit for Mc4 or other",
                "Drills",
                "Impact drill",
                "Power tools",
            ],
            ZoneId::Engine => &["Oil", "Leaks"],
            ZoneId::Fuel => &["Cap is Closed", "Vehicle Mileage", "Fuel Level"],
            ZoneId::PpeKit | ZoneId::SpcKit | ZoneId::MaintenanceKit | ZoneId::Mc4Kit => &[],
        }
    }

    pub fn from_key(key: &str) -> Option<ZoneId> {
        ZoneId::ALL.iter().copied().find(|zone| zone.key() == key)
    }
}

/// Optional equipment kits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KitId {
    Ppe,
    Spc,
    Maintenance,
    Mc4,
}

impl KitId {
    /// Kit toggle order in the UI
    pub const ALL: [KitId; 4] = [KitId::Ppe, KitId::Spc, KitId::Maintenance, KitId::Mc4];

    pub fn key(&self) -> &'static str {
        match self {
            KitId::Ppe => "ppe_kit",
            KitId::Spc => "spc_kit",
            KitId::Maintenance => "maintenance_kit",
            KitId::Mc4 => "mc4_kit",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            KitId::Ppe => "PPE",
            KitId::Spc => "SPC",
            KitId::Maintenance => "Maintenance",
            KitId::Mc4 => "MC4",
        }
    }

    /// Items this kit appends, per zone, in declaration order.
    pub fn contributions(&self) -> &'static [(ZoneId, &'static [&'static str])] {
        match self {
            KitId::Ppe => &[(ZoneId::PpeKit, &["Helmet", "Glasses", "Gloves", "Boots"])],
            KitId::Spc => &[(
                ZoneId::SpcKit,
                &["Battery", "Row Turner", "Serial", "Cable", "Screw Driver"],
            )],
            KitId::Maintenance => &[(
                ZoneId::MaintenanceKit,
                &[
                    "Leaf blower",
                    "Desiccants",
                    "Brushes",
                    "Paper towels",
                    "Trash bags",
                    "RIV Nut Pieces",
                    "Rags",
                    "Lint free cloth",
                    "Spill Kill",
                    "Putty and Pig mat",
                ],
            )],
            KitId::Mc4 => &[(
                ZoneId::Mc4Kit,
                &[
                    "Male/Female Ends",
                    "Stripper",
                    "Zip ties",
                    "Clamshells",
                    "Plugs",
                    "Tags",
                ],
            )],
        }
    }

    pub fn from_key(key: &str) -> Option<KitId> {
        KitId::ALL.iter().copied().find(|kit| kit.key() == key)
    }
}

/// The no-kit catalog. Auxiliary zones are left out entirely.
pub fn default_catalog() -> Catalog {
    ZoneId::ALL
        .iter()
        .filter(|zone| !zone.default_items().is_empty())
        .map(|zone| {
            let items = zone.default_items().iter().map(|s| s.to_string()).collect();
            (zone.key().to_string(), items)
        })
        .collect()
}

/// Default catalog with each active kit's items appended in active-set order.
///
/// Ids that don't name a kit contribute nothing.
pub fn build_catalog(active_kits: &[String]) -> Catalog {
    let mut catalog = default_catalog();
    for key in active_kits {
        let Some(kit) = KitId::from_key(key) else {
            tracing::warn!(kit = %key, "ignoring unknown kit in active set");
            continue;
        };
        for (zone, items) in kit.contributions() {
            catalog
                .entry(zone.key().to_string())
                .or_default()
                .extend(items.iter().map(|s| s.to_string()));
        }
    }
    catalog
}
