//! ---
//! csel_section: "02-selection-engine"
//! csel_subsection: "module"
//! csel_type: "source"
//! csel_scope: "code"
//! csel_description: "Static cable property tables for radial and ring final circuits."
//! csel_version: "v0.1.0"
//! csel_owner: "tbd"
//! ---
//! Cable property tables.
//!
//! Both tables are `static` data and never change at runtime. The ring table
//! carries the ring-effective ampacity of the two parallel legs and the ring
//! final circuit ceilings (106 m, 32 A class devices).

use serde::{Deserialize, Serialize};
use strum::Display;

use crate::model::{ConductorMaterial, InstallationMethod};

#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash, Display,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum CostTier {
    Low,
    Medium,
    High,
}

#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash, Display,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum AvailabilityTier {
    Common,
    Limited,
    SpecialOrder,
}

#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash, Display,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum ComplexityTier {
    Simple,
    Moderate,
    Complex,
}

/// Tabulated current-carrying capacity (A) per installation method.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct Ampacity {
    pub clipped_direct: f64,
    pub conduit: f64,
    pub trunking: f64,
    pub ducted: f64,
    pub buried_direct: f64,
    pub tray: f64,
    pub overhead: f64,
}

impl Ampacity {
    /// Columns in reference-method order: C, B1, B2, D1, D2, F, E.
    pub const fn from_columns(columns: [f64; 7]) -> Self {
        Self {
            clipped_direct: columns[0],
            conduit: columns[1],
            trunking: columns[2],
            ducted: columns[3],
            buried_direct: columns[4],
            tray: columns[5],
            overhead: columns[6],
        }
    }

    pub fn for_method(&self, method: InstallationMethod) -> f64 {
        match method {
            InstallationMethod::ClippedDirect => self.clipped_direct,
            InstallationMethod::Conduit => self.conduit,
            InstallationMethod::Trunking => self.trunking,
            InstallationMethod::Ducted => self.ducted,
            InstallationMethod::BuriedDirect => self.buried_direct,
            InstallationMethod::Tray => self.tray,
            InstallationMethod::Overhead => self.overhead,
        }
    }

    #[cfg(test)]
    fn values(&self) -> [f64; 7] {
        [
            self.clipped_direct,
            self.conduit,
            self.trunking,
            self.ducted,
            self.buried_direct,
            self.tray,
            self.overhead,
        ]
    }
}

/// Voltage drop in mV per ampere per metre.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct VoltDropPerMetre {
    pub copper: f64,
    pub aluminium: f64,
}

impl VoltDropPerMetre {
    pub fn for_material(&self, material: ConductorMaterial) -> f64 {
        match material {
            ConductorMaterial::Copper => self.copper,
            ConductorMaterial::Aluminium => self.aluminium,
        }
    }
}

/// Conductor resistances at operating temperature, in ohms per km.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct ConductorResistance {
    pub line_ohm_per_km: f64,
    pub cpc_ohm_per_km: f64,
}

impl ConductorResistance {
    pub fn r1_plus_r2_ohm_per_km(&self) -> f64 {
        self.line_ohm_per_km + self.cpc_ohm_per_km
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CableSpecification {
    pub size: &'static str,
    pub size_mm2: f64,
    pub ampacity: Ampacity,
    pub volt_drop_mv_per_am: VoltDropPerMetre,
    pub resistance: ConductorResistance,
    pub cost: CostTier,
    pub availability: AvailabilityTier,
    pub installation_complexity: ComplexityTier,
    pub max_length_m: f64,
    pub min_breaker_a: u32,
    pub max_breaker_a: u32,
}

impl CableSpecification {
    pub fn breaker_range_contains(&self, rating_a: u32) -> bool {
        (self.min_breaker_a..=self.max_breaker_a).contains(&rating_a)
    }
}

/// A named, ordered set of cable sizes.
#[derive(Debug)]
pub struct CableTable {
    name: &'static str,
    entries: &'static [CableSpecification],
}

impl CableTable {
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn get(&self, size: &str) -> Option<&'static CableSpecification> {
        self.entries.iter().find(|entry| entry.size == size)
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static CableSpecification> {
        self.entries.iter()
    }

    pub fn sizes(&self) -> impl Iterator<Item = &'static str> {
        self.entries.iter().map(|entry| entry.size)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Smallest size whose tabulated ampacity for `method` reaches
    /// `required_current_a`, before any derating.
    pub fn smallest_for_current(
        &self,
        method: InstallationMethod,
        required_current_a: f64,
    ) -> Option<&'static CableSpecification> {
        self.entries
            .iter()
            .find(|entry| entry.ampacity.for_method(method) >= required_current_a)
    }
}

impl Serialize for CableTable {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for entry in self.entries {
            map.serialize_entry(entry.size, entry)?;
        }
        map.end()
    }
}

/// Select the general table or the ring final circuit table.
pub fn get_table(is_ring_circuit: bool) -> &'static CableTable {
    if is_ring_circuit {
        &RING_TABLE
    } else {
        &GENERAL_TABLE
    }
}

/// Smallest general-purpose or ring size meeting `required_current_a` for the
/// installation method.
pub fn find_optimal_cable_size(
    method: InstallationMethod,
    required_current_a: f64,
    is_ring_circuit: bool,
) -> Option<&'static CableSpecification> {
    get_table(is_ring_circuit).smallest_for_current(method, required_current_a)
}

use self::AvailabilityTier::{Common, Limited, SpecialOrder};
use self::ComplexityTier::{Complex, Moderate, Simple};
use self::CostTier::{High, Low, Medium};

// ampacity order: clipped, conduit, trunking, ducted, buried, tray, overhead
#[allow(clippy::too_many_arguments)]
const fn cable(
    size: &'static str,
    size_mm2: f64,
    ampacity: [f64; 7],
    volt_drop: [f64; 2],
    resistance: [f64; 2],
    tiers: (CostTier, AvailabilityTier, ComplexityTier),
    max_length_m: f64,
    breaker_a: [u32; 2],
) -> CableSpecification {
    CableSpecification {
        size,
        size_mm2,
        ampacity: Ampacity::from_columns(ampacity),
        volt_drop_mv_per_am: VoltDropPerMetre {
            copper: volt_drop[0],
            aluminium: volt_drop[1],
        },
        resistance: ConductorResistance {
            line_ohm_per_km: resistance[0],
            cpc_ohm_per_km: resistance[1],
        },
        cost: tiers.0,
        availability: tiers.1,
        installation_complexity: tiers.2,
        max_length_m,
        min_breaker_a: breaker_a[0],
        max_breaker_a: breaker_a[1],
    }
}

#[rustfmt::skip]
static GENERAL_ENTRIES: [CableSpecification; 13] = [
    cable("1.0mm²", 1.0, [15.5, 13.5, 13.0, 14.5, 18.0, 17.0, 17.5], [44.0, 70.0], [18.1, 18.1], (Low, Common, Simple), 60.0, [6, 10]),
    cable("1.5mm²", 1.5, [20.0, 17.5, 16.5, 18.0, 22.0, 22.0, 22.5], [29.0, 46.0], [12.1, 12.1], (Low, Common, Simple), 80.0, [6, 16]),
    cable("2.5mm²", 2.5, [27.0, 24.0, 23.0, 24.0, 29.0, 30.0, 30.0], [18.0, 29.0], [7.41, 12.1], (Low, Common, Simple), 100.0, [6, 25]),
    cable("4.0mm²", 4.0, [37.0, 32.0, 30.0, 30.0, 38.0, 40.0, 40.0], [11.0, 18.0], [4.61, 7.41], (Low, Common, Simple), 150.0, [10, 32]),
    cable("6.0mm²", 6.0, [47.0, 41.0, 38.0, 38.0, 47.0, 51.0, 51.0], [7.3, 12.0], [3.08, 4.61], (Medium, Common, Simple), 180.0, [16, 40]),
    cable("10.0mm²", 10.0, [65.0, 57.0, 52.0, 50.0, 63.0, 70.0, 70.0], [4.4, 7.3], [1.83, 3.08], (Medium, Common, Moderate), 220.0, [20, 63]),
    cable("16.0mm²", 16.0, [87.0, 76.0, 69.0, 64.0, 81.0, 94.0, 94.0], [2.8, 4.5], [1.15, 1.83], (Medium, Common, Moderate), 280.0, [32, 80]),
    cable("25.0mm²", 25.0, [114.0, 101.0, 90.0, 82.0, 104.0, 119.0, 131.0], [1.75, 2.9], [0.727, 1.15], (High, Limited, Moderate), 350.0, [50, 100]),
    cable("35.0mm²", 35.0, [141.0, 125.0, 111.0, 98.0, 125.0, 148.0, 162.0], [1.25, 2.1], [0.524, 0.727], (High, Limited, Complex), 400.0, [63, 125]),
    cable("50.0mm²", 50.0, [182.0, 151.0, 133.0, 116.0, 148.0, 180.0, 196.0], [0.93, 1.5], [0.387, 0.524], (High, Limited, Complex), 450.0, [63, 125]),
    cable("70.0mm²", 70.0, [234.0, 192.0, 168.0, 143.0, 183.0, 232.0, 251.0], [0.63, 1.05], [0.268, 0.387], (High, SpecialOrder, Complex), 500.0, [80, 125]),
    cable("95.0mm²", 95.0, [284.0, 232.0, 201.0, 169.0, 216.0, 282.0, 304.0], [0.46, 0.77], [0.193, 0.268], (High, SpecialOrder, Complex), 550.0, [100, 125]),
    cable("120.0mm²", 120.0, [330.0, 269.0, 232.0, 192.0, 246.0, 328.0, 352.0], [0.36, 0.61], [0.153, 0.193], (High, SpecialOrder, Complex), 600.0, [125, 125]),
];

#[rustfmt::skip]
static RING_ENTRIES: [CableSpecification; 2] = [
    cable("2.5mm²", 2.5, [40.0, 36.0, 34.0, 36.0, 43.0, 45.0, 45.0], [18.0, 29.0], [7.41, 12.1], (Low, Common, Simple), 106.0, [32, 32]),
    cable("4.0mm²", 4.0, [55.0, 48.0, 45.0, 45.0, 57.0, 60.0, 60.0], [11.0, 18.0], [4.61, 7.41], (Low, Common, Moderate), 106.0, [32, 40]),
];

static GENERAL_TABLE: CableTable = CableTable {
    name: "general",
    entries: &GENERAL_ENTRIES,
};

static RING_TABLE: CableTable = CableTable {
    name: "ring-final",
    entries: &RING_ENTRIES,
};
