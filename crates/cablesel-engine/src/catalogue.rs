//! ---
//! csel_section: "02-selection-engine"
//! csel_subsection: "module"
//! csel_type: "source"
//! csel_scope: "code"
//! csel_description: "Cable type catalogue: per-type ratings, suitability properties and pricing."
//! csel_version: "v0.1.0"
//! csel_owner: "tbd"
//! ---
//! Cable type catalogue.
//!
//! The general table in [`crate::tables`] describes conductor sizes; this
//! catalogue describes constructions. Each [`CableType`] has a profile with
//! the sizes it is made in, the reference methods it is rated for, its
//! burial, UV and fire properties, and a retail price per metre.

use serde::Serialize;
use strum::Display;

use crate::{
    model::{
        CableType,
        InstallationMethod::{
            self, BuriedDirect, ClippedDirect, Conduit, Ducted, Overhead, Tray, Trunking,
        },
    },
    tables::Ampacity,
};

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum FirePerformance {
    Standard,
    Lsoh,
    FireResistant,
    Mineral,
}

impl FirePerformance {
    /// Keeps circuit integrity during a fire (BS 5839 / BS 5266 duty).
    pub fn maintains_circuit_integrity(&self) -> bool {
        matches!(self, FirePerformance::FireResistant | FirePerformance::Mineral)
    }
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum MechanicalProtection {
    Unprotected,
    Light,
    Medium,
    Heavy,
}

/// Tabulated capacity and retail price of one size of a cable type. A zero
/// capacity means the construction is not rated for that method.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct TypeRating {
    pub size_mm2: f64,
    pub ampacity: Ampacity,
    pub retail_per_m: f64,
}

impl TypeRating {
    fn capacity(&self, method: InstallationMethod) -> Option<f64> {
        let amps = self.ampacity.for_method(method);
        (amps > 0.0).then_some(amps)
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CableTypeProfile {
    pub cable_type: CableType,
    pub name: &'static str,
    pub conductor_temperature_c: u16,
    pub voltage_rating_v: u16,
    pub fire_performance: FirePerformance,
    pub mechanical_protection: MechanicalProtection,
    pub uv_resistant: bool,
    pub direct_burial: bool,
    pub max_practical_size_mm2: f64,
    pub methods: &'static [InstallationMethod],
    pub ratings: &'static [TypeRating],
}

/// Result of [`CableTypeProfile::optimal_size`].
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct TypeSizing {
    pub size_mm2: f64,
    pub capacity_a: f64,
}

/// A cheaper construction offered in the same conductor size.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct CableAlternative {
    pub cable_type: CableType,
    pub size_mm2: f64,
    pub retail_per_m: f64,
    pub savings_per_m: f64,
}

impl CableTypeProfile {
    pub fn rating(&self, size_mm2: f64) -> Option<&TypeRating> {
        self.ratings
            .iter()
            .find(|rating| same_size(rating.size_mm2, size_mm2))
    }

    pub fn is_made_in(&self, size_mm2: f64) -> bool {
        self.rating(size_mm2).is_some()
    }

    pub fn supports_method(&self, method: InstallationMethod) -> bool {
        self.methods.contains(&method)
    }

    /// Made in `size_mm2` and rated for `method`.
    pub fn fits(&self, size_mm2: f64, method: InstallationMethod) -> bool {
        self.supports_method(method) && self.is_made_in(size_mm2)
    }

    /// Tabulated capacity for this construction, if it is rated for `method`.
    pub fn capacity(&self, size_mm2: f64, method: InstallationMethod) -> Option<f64> {
        if !self.supports_method(method) {
            return None;
        }
        self.rating(size_mm2)?.capacity(method)
    }

    /// Smallest size of this construction whose tabulated capacity for
    /// `method` reaches `required_a`.
    pub fn optimal_size(&self, required_a: f64, method: InstallationMethod) -> Option<TypeSizing> {
        if !self.supports_method(method) {
            return None;
        }
        self.ratings.iter().find_map(|rating| {
            rating
                .capacity(method)
                .filter(|capacity| *capacity >= required_a)
                .map(|capacity_a| TypeSizing {
                    size_mm2: rating.size_mm2,
                    capacity_a,
                })
        })
    }

    pub fn price_per_m(&self, size_mm2: f64) -> Option<f64> {
        self.rating(size_mm2).map(|rating| rating.retail_per_m)
    }
}

fn same_size(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

const fn rating(size_mm2: f64, ampacity: [f64; 7], retail_per_m: f64) -> TypeRating {
    TypeRating {
        size_mm2,
        ampacity: Ampacity::from_columns(ampacity),
        retail_per_m,
    }
}

// Columns: C (clipped), B1 (conduit), B2 (trunking), D1 (ducted), D2 (buried),
// F (tray), E (overhead). Prices are retail GBP per metre.

#[rustfmt::skip]
static TWIN_AND_EARTH_RATINGS: [TypeRating; 6] = [
    rating(1.0, [20.0, 13.0, 16.0, 0.0, 0.0, 0.0, 22.0], 1.20),
    rating(1.5, [26.0, 17.0, 20.0, 0.0, 0.0, 0.0, 29.0], 1.45),
    rating(2.5, [36.0, 23.0, 27.0, 0.0, 0.0, 0.0, 39.0], 2.25),
    rating(4.0, [49.0, 30.0, 36.0, 0.0, 0.0, 0.0, 53.0], 3.35),
    rating(6.0, [62.0, 38.0, 46.0, 0.0, 0.0, 0.0, 69.0], 5.25),
    rating(10.0, [85.0, 52.0, 63.0, 0.0, 0.0, 0.0, 94.0], 8.75),
];

#[rustfmt::skip]
static SWA_RATINGS: [TypeRating; 17] = [
    rating(1.5, [32.0, 0.0, 0.0, 25.0, 27.0, 34.0, 36.0], 3.35),
    rating(2.5, [43.0, 0.0, 0.0, 33.0, 36.0, 46.0, 48.0], 4.45),
    rating(4.0, [57.0, 0.0, 0.0, 44.0, 48.0, 61.0, 64.0], 6.35),
    rating(6.0, [73.0, 0.0, 0.0, 56.0, 61.0, 78.0, 82.0], 9.35),
    rating(10.0, [98.0, 0.0, 0.0, 75.0, 81.0, 105.0, 110.0], 14.25),
    rating(16.0, [131.0, 0.0, 0.0, 100.0, 108.0, 140.0, 147.0], 21.65),
    rating(25.0, [168.0, 0.0, 0.0, 128.0, 138.0, 180.0, 189.0], 33.95),
    rating(35.0, [201.0, 0.0, 0.0, 153.0, 165.0, 215.0, 226.0], 47.35),
    rating(50.0, [242.0, 0.0, 0.0, 184.0, 198.0, 259.0, 272.0], 65.95),
    rating(70.0, [310.0, 0.0, 0.0, 236.0, 254.0, 331.0, 348.0], 98.95),
    rating(95.0, [375.0, 0.0, 0.0, 285.0, 307.0, 400.0, 421.0], 132.25),
    rating(120.0, [431.0, 0.0, 0.0, 328.0, 353.0, 460.0, 484.0], 171.35),
    rating(150.0, [491.0, 0.0, 0.0, 374.0, 402.0, 524.0, 551.0], 214.25),
    rating(185.0, [557.0, 0.0, 0.0, 424.0, 456.0, 594.0, 625.0], 266.65),
    rating(240.0, [641.0, 0.0, 0.0, 488.0, 525.0, 684.0, 720.0], 348.15),
    rating(300.0, [738.0, 0.0, 0.0, 562.0, 605.0, 788.0, 829.0], 444.55),
    rating(400.0, [855.0, 0.0, 0.0, 651.0, 701.0, 912.0, 960.0], 581.55),
];

#[rustfmt::skip]
static PVC_SINGLE_RATINGS: [TypeRating; 18] = [
    rating(1.0, [24.0, 16.0, 19.0, 0.0, 0.0, 25.0, 26.0], 0.55),
    rating(1.5, [31.0, 20.0, 24.0, 0.0, 0.0, 32.0, 34.0], 0.65),
    rating(2.5, [42.0, 28.0, 33.0, 0.0, 0.0, 44.0, 46.0], 0.95),
    rating(4.0, [56.0, 37.0, 44.0, 0.0, 0.0, 58.0, 61.0], 1.35),
    rating(6.0, [71.0, 47.0, 56.0, 0.0, 0.0, 74.0, 78.0], 1.95),
    rating(10.0, [96.0, 64.0, 76.0, 0.0, 0.0, 100.0, 105.0], 3.05),
    rating(16.0, [128.0, 85.0, 101.0, 0.0, 0.0, 133.0, 140.0], 4.65),
    rating(25.0, [168.0, 112.0, 133.0, 0.0, 0.0, 175.0, 184.0], 6.95),
    rating(35.0, [207.0, 138.0, 164.0, 0.0, 0.0, 216.0, 227.0], 9.75),
    rating(50.0, [252.0, 168.0, 200.0, 0.0, 0.0, 263.0, 276.0], 13.45),
    rating(70.0, [324.0, 216.0, 257.0, 0.0, 0.0, 338.0, 355.0], 20.35),
    rating(95.0, [393.0, 263.0, 312.0, 0.0, 0.0, 410.0, 431.0], 27.05),
    rating(120.0, [454.0, 304.0, 361.0, 0.0, 0.0, 474.0, 498.0], 34.85),
    rating(150.0, [519.0, 347.0, 412.0, 0.0, 0.0, 542.0, 569.0], 44.05),
    rating(185.0, [593.0, 396.0, 470.0, 0.0, 0.0, 619.0, 650.0], 54.65),
    rating(240.0, [687.0, 459.0, 545.0, 0.0, 0.0, 717.0, 754.0], 71.25),
    rating(300.0, [792.0, 528.0, 627.0, 0.0, 0.0, 826.0, 868.0], 90.65),
    rating(400.0, [918.0, 613.0, 727.0, 0.0, 0.0, 958.0, 1007.0], 118.35),
];

#[rustfmt::skip]
static LSOH_RATINGS: [TypeRating; 16] = [
    rating(1.5, [31.0, 20.0, 24.0, 0.0, 0.0, 32.0, 34.0], 0.95),
    rating(2.5, [42.0, 28.0, 33.0, 0.0, 0.0, 44.0, 46.0], 1.35),
    rating(4.0, [56.0, 37.0, 44.0, 0.0, 0.0, 58.0, 61.0], 1.95),
    rating(6.0, [71.0, 47.0, 56.0, 0.0, 0.0, 74.0, 78.0], 2.75),
    rating(10.0, [96.0, 64.0, 76.0, 0.0, 0.0, 100.0, 105.0], 4.35),
    rating(16.0, [128.0, 85.0, 101.0, 0.0, 0.0, 133.0, 140.0], 6.65),
    rating(25.0, [168.0, 112.0, 133.0, 0.0, 0.0, 175.0, 184.0], 9.95),
    rating(35.0, [207.0, 138.0, 164.0, 0.0, 0.0, 216.0, 227.0], 14.05),
    rating(50.0, [252.0, 168.0, 200.0, 0.0, 0.0, 263.0, 276.0], 19.35),
    rating(70.0, [324.0, 216.0, 257.0, 0.0, 0.0, 338.0, 355.0], 29.25),
    rating(95.0, [393.0, 263.0, 312.0, 0.0, 0.0, 410.0, 431.0], 38.95),
    rating(120.0, [454.0, 304.0, 361.0, 0.0, 0.0, 474.0, 498.0], 50.25),
    rating(150.0, [519.0, 347.0, 412.0, 0.0, 0.0, 542.0, 569.0], 63.45),
    rating(185.0, [593.0, 396.0, 470.0, 0.0, 0.0, 619.0, 650.0], 78.65),
    rating(240.0, [687.0, 459.0, 545.0, 0.0, 0.0, 717.0, 754.0], 102.45),
    rating(300.0, [792.0, 528.0, 627.0, 0.0, 0.0, 826.0, 868.0], 130.45),
];

#[rustfmt::skip]
static FIRE_RESISTANT_RATINGS: [TypeRating; 15] = [
    rating(1.5, [35.0, 23.0, 28.0, 0.0, 0.0, 37.0, 39.0], 5.45),
    rating(2.5, [48.0, 32.0, 38.0, 0.0, 0.0, 50.0, 53.0], 7.95),
    rating(4.0, [64.0, 42.0, 50.0, 0.0, 0.0, 67.0, 70.0], 11.95),
    rating(6.0, [81.0, 54.0, 64.0, 0.0, 0.0, 85.0, 89.0], 18.15),
    rating(10.0, [110.0, 73.0, 87.0, 0.0, 0.0, 115.0, 121.0], 27.45),
    rating(16.0, [147.0, 98.0, 116.0, 0.0, 0.0, 153.0, 161.0], 42.15),
    rating(25.0, [193.0, 128.0, 152.0, 0.0, 0.0, 201.0, 212.0], 64.45),
    rating(35.0, [238.0, 158.0, 188.0, 0.0, 0.0, 248.0, 261.0], 91.65),
    rating(50.0, [290.0, 193.0, 230.0, 0.0, 0.0, 302.0, 318.0], 130.65),
    rating(70.0, [372.0, 248.0, 295.0, 0.0, 0.0, 388.0, 408.0], 195.95),
    rating(95.0, [452.0, 302.0, 359.0, 0.0, 0.0, 471.0, 496.0], 261.85),
    rating(120.0, [522.0, 349.0, 415.0, 0.0, 0.0, 544.0, 573.0], 337.05),
    rating(150.0, [596.0, 398.0, 473.0, 0.0, 0.0, 622.0, 654.0], 418.45),
    rating(185.0, [681.0, 455.0, 540.0, 0.0, 0.0, 711.0, 747.0], 514.85),
    rating(240.0, [790.0, 527.0, 627.0, 0.0, 0.0, 825.0, 867.0], 668.85),
];

#[rustfmt::skip]
static MICC_RATINGS: [TypeRating; 8] = [
    rating(1.0, [28.0, 0.0, 0.0, 0.0, 0.0, 30.0, 32.0], 11.95),
    rating(1.5, [37.0, 0.0, 0.0, 0.0, 0.0, 40.0, 42.0], 14.45),
    rating(2.5, [50.0, 0.0, 0.0, 0.0, 0.0, 54.0, 57.0], 19.55),
    rating(4.0, [68.0, 0.0, 0.0, 0.0, 0.0, 73.0, 77.0], 26.75),
    rating(6.0, [87.0, 0.0, 0.0, 0.0, 0.0, 93.0, 98.0], 35.05),
    rating(10.0, [118.0, 0.0, 0.0, 0.0, 0.0, 127.0, 134.0], 45.75),
    rating(16.0, [157.0, 0.0, 0.0, 0.0, 0.0, 169.0, 178.0], 60.45),
    rating(25.0, [202.0, 0.0, 0.0, 0.0, 0.0, 217.0, 229.0], 79.35),
];

#[rustfmt::skip]
static FLEX_RATINGS: [TypeRating; 10] = [
    rating(1.0, [18.0, 0.0, 0.0, 0.0, 0.0, 0.0, 20.0], 3.95),
    rating(1.5, [23.0, 0.0, 0.0, 0.0, 0.0, 0.0, 26.0], 4.75),
    rating(2.5, [32.0, 0.0, 0.0, 0.0, 0.0, 0.0, 36.0], 6.35),
    rating(4.0, [43.0, 0.0, 0.0, 0.0, 0.0, 0.0, 48.0], 9.35),
    rating(6.0, [55.0, 0.0, 0.0, 0.0, 0.0, 0.0, 62.0], 12.95),
    rating(10.0, [75.0, 0.0, 0.0, 0.0, 0.0, 0.0, 84.0], 19.55),
    rating(16.0, [100.0, 0.0, 0.0, 0.0, 0.0, 0.0, 112.0], 29.35),
    rating(25.0, [128.0, 0.0, 0.0, 0.0, 0.0, 0.0, 144.0], 44.95),
    rating(35.0, [153.0, 0.0, 0.0, 0.0, 0.0, 0.0, 172.0], 61.95),
    rating(50.0, [184.0, 0.0, 0.0, 0.0, 0.0, 0.0, 207.0], 86.05),
];

#[rustfmt::skip]
static NYY_J_RATINGS: [TypeRating; 17] = [
    rating(1.5, [30.0, 0.0, 0.0, 23.0, 25.0, 32.0, 34.0], 2.85),
    rating(2.5, [40.0, 0.0, 0.0, 31.0, 34.0, 43.0, 45.0], 3.75),
    rating(4.0, [54.0, 0.0, 0.0, 42.0, 45.0, 57.0, 60.0], 5.35),
    rating(6.0, [69.0, 0.0, 0.0, 53.0, 58.0, 73.0, 77.0], 7.95),
    rating(10.0, [93.0, 0.0, 0.0, 71.0, 77.0, 99.0, 104.0], 12.05),
    rating(16.0, [124.0, 0.0, 0.0, 95.0, 102.0, 132.0, 139.0], 18.35),
    rating(25.0, [159.0, 0.0, 0.0, 121.0, 131.0, 170.0, 178.0], 28.85),
    rating(35.0, [190.0, 0.0, 0.0, 145.0, 156.0, 203.0, 213.0], 40.25),
    rating(50.0, [229.0, 0.0, 0.0, 174.0, 187.0, 245.0, 257.0], 56.05),
    rating(70.0, [293.0, 0.0, 0.0, 223.0, 240.0, 313.0, 329.0], 84.25),
    rating(95.0, [354.0, 0.0, 0.0, 269.0, 290.0, 378.0, 397.0], 112.55),
    rating(120.0, [407.0, 0.0, 0.0, 310.0, 334.0, 435.0, 457.0], 145.75),
    rating(150.0, [463.0, 0.0, 0.0, 353.0, 380.0, 495.0, 520.0], 182.25),
    rating(185.0, [526.0, 0.0, 0.0, 401.0, 431.0, 562.0, 590.0], 226.85),
    rating(240.0, [605.0, 0.0, 0.0, 461.0, 496.0, 646.0, 679.0], 296.05),
    rating(300.0, [697.0, 0.0, 0.0, 531.0, 571.0, 744.0, 782.0], 378.05),
    rating(400.0, [807.0, 0.0, 0.0, 615.0, 662.0, 862.0, 906.0], 494.55),
];

static CATALOGUE: [CableTypeProfile; 8] = [
    CableTypeProfile {
        cable_type: CableType::TwinAndEarth,
        name: "PVC twin and earth (6242Y)",
        conductor_temperature_c: 70,
        voltage_rating_v: 300,
        fire_performance: FirePerformance::Standard,
        mechanical_protection: MechanicalProtection::Unprotected,
        uv_resistant: false,
        direct_burial: false,
        max_practical_size_mm2: 10.0,
        methods: &[Conduit, Trunking, ClippedDirect],
        ratings: &TWIN_AND_EARTH_RATINGS,
    },
    CableTypeProfile {
        cable_type: CableType::Swa,
        name: "SWA XLPE (6944X)",
        conductor_temperature_c: 90,
        voltage_rating_v: 1000,
        fire_performance: FirePerformance::Standard,
        mechanical_protection: MechanicalProtection::Heavy,
        uv_resistant: true,
        direct_burial: true,
        max_practical_size_mm2: 400.0,
        methods: &[ClippedDirect, Ducted, BuriedDirect, Overhead, Tray],
        ratings: &SWA_RATINGS,
    },
    CableTypeProfile {
        cable_type: CableType::PvcSingle,
        name: "PVC single core (6491X)",
        conductor_temperature_c: 70,
        voltage_rating_v: 600,
        fire_performance: FirePerformance::Standard,
        mechanical_protection: MechanicalProtection::Unprotected,
        uv_resistant: false,
        direct_burial: false,
        max_practical_size_mm2: 400.0,
        methods: &[Conduit, Trunking, ClippedDirect, Overhead, Tray],
        ratings: &PVC_SINGLE_RATINGS,
    },
    CableTypeProfile {
        cable_type: CableType::XlpeLsoh,
        name: "Low smoke zero halogen (NH-VV)",
        conductor_temperature_c: 70,
        voltage_rating_v: 600,
        fire_performance: FirePerformance::Lsoh,
        mechanical_protection: MechanicalProtection::Light,
        uv_resistant: false,
        direct_burial: false,
        max_practical_size_mm2: 300.0,
        methods: &[Conduit, Trunking, ClippedDirect, Overhead, Tray],
        ratings: &LSOH_RATINGS,
    },
    CableTypeProfile {
        cable_type: CableType::FireResistant,
        name: "Fire-resistant (FP200)",
        conductor_temperature_c: 90,
        voltage_rating_v: 300,
        fire_performance: FirePerformance::FireResistant,
        mechanical_protection: MechanicalProtection::Medium,
        uv_resistant: false,
        direct_burial: false,
        max_practical_size_mm2: 240.0,
        methods: &[Conduit, Trunking, ClippedDirect, Overhead, Tray],
        ratings: &FIRE_RESISTANT_RATINGS,
    },
    CableTypeProfile {
        cable_type: CableType::Micc,
        name: "Mineral insulated copper clad (BS 6207)",
        conductor_temperature_c: 90,
        voltage_rating_v: 750,
        fire_performance: FirePerformance::Mineral,
        mechanical_protection: MechanicalProtection::Heavy,
        uv_resistant: true,
        direct_burial: true,
        max_practical_size_mm2: 25.0,
        methods: &[ClippedDirect, Overhead, Tray],
        ratings: &MICC_RATINGS,
    },
    CableTypeProfile {
        cable_type: CableType::Flex,
        name: "H07RN-F rubber flex",
        conductor_temperature_c: 90,
        voltage_rating_v: 450,
        fire_performance: FirePerformance::Standard,
        mechanical_protection: MechanicalProtection::Medium,
        uv_resistant: true,
        direct_burial: false,
        max_practical_size_mm2: 50.0,
        // Portable and temporary supplies only; no fixed-wiring method.
        methods: &[],
        ratings: &FLEX_RATINGS,
    },
    CableTypeProfile {
        cable_type: CableType::NyyJ,
        name: "NYY-J harmonised (BS EN 50525-1)",
        conductor_temperature_c: 90,
        voltage_rating_v: 1000,
        fire_performance: FirePerformance::Standard,
        mechanical_protection: MechanicalProtection::Medium,
        uv_resistant: true,
        direct_burial: true,
        max_practical_size_mm2: 400.0,
        methods: &[ClippedDirect, Ducted, BuriedDirect, Overhead, Tray],
        ratings: &NYY_J_RATINGS,
    },
];

pub fn catalogue() -> &'static [CableTypeProfile] {
    &CATALOGUE
}

pub fn profile(cable_type: CableType) -> &'static CableTypeProfile {
    match cable_type {
        CableType::TwinAndEarth => &CATALOGUE[0],
        CableType::Swa => &CATALOGUE[1],
        CableType::PvcSingle => &CATALOGUE[2],
        CableType::XlpeLsoh => &CATALOGUE[3],
        CableType::FireResistant => &CATALOGUE[4],
        CableType::Micc => &CATALOGUE[5],
        CableType::Flex => &CATALOGUE[6],
        CableType::NyyJ => &CATALOGUE[7],
    }
}

/// Cable types rated for `method`, in catalogue order.
pub fn cables_for_method(method: InstallationMethod) -> Vec<CableType> {
    CATALOGUE
        .iter()
        .filter(|profile| profile.supports_method(method))
        .map(|profile| profile.cable_type)
        .collect()
}

/// Cable types with at least one size whose tabulated capacity for `method`
/// reaches `min_current_a`.
pub fn cables_for_current(min_current_a: f64, method: InstallationMethod) -> Vec<CableType> {
    CATALOGUE
        .iter()
        .filter(|profile| profile.optimal_size(min_current_a, method).is_some())
        .map(|profile| profile.cable_type)
        .collect()
}

/// Cable types that are made in `size_mm2` and rated for `method`.
pub fn cables_fitting(size_mm2: f64, method: InstallationMethod) -> Vec<CableType> {
    CATALOGUE
        .iter()
        .filter(|profile| profile.fits(size_mm2, method))
        .map(|profile| profile.cable_type)
        .collect()
}

/// Other constructions in the same size that cost less than `cable_type` and
/// no more than `max_budget_per_m`, largest saving first. Empty when
/// `cable_type` is not made in `size_mm2`.
pub fn cost_effective_alternatives(
    cable_type: CableType,
    size_mm2: f64,
    max_budget_per_m: f64,
) -> Vec<CableAlternative> {
    let Some(original) = profile(cable_type).price_per_m(size_mm2) else {
        return Vec::new();
    };
    let mut alternatives: Vec<CableAlternative> = CATALOGUE
        .iter()
        .filter_map(|candidate| {
            let retail_per_m = candidate.price_per_m(size_mm2)?;
            (retail_per_m <= max_budget_per_m && retail_per_m < original).then(|| {
                CableAlternative {
                    cable_type: candidate.cable_type,
                    size_mm2,
                    retail_per_m,
                    savings_per_m: original - retail_per_m,
                }
            })
        })
        .collect();
    alternatives.sort_by(|a, b| b.savings_per_m.total_cmp(&a.savings_per_m));
    alternatives
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_cable_type_has_a_profile() {
        for (index, profile) in catalogue().iter().enumerate() {
            assert_eq!(super::profile(profile.cable_type), &CATALOGUE[index]);
        }
        assert_eq!(catalogue().len(), 8);
    }

    #[test]
    fn profile_invariants_hold() {
        for profile in catalogue() {
            let largest = profile.ratings.last().unwrap();
            assert_eq!(largest.size_mm2, profile.max_practical_size_mm2, "{}", profile.name);
            for pair in profile.ratings.windows(2) {
                assert!(pair[0].size_mm2 < pair[1].size_mm2);
                assert!(pair[0].retail_per_m < pair[1].retail_per_m);
            }
            if profile.supports_method(BuriedDirect) {
                assert!(profile.direct_burial, "{}", profile.name);
            }
        }
    }

    #[test]
    fn twin_and_earth_stops_at_ten_and_stays_out_of_the_ground() {
        let twin = profile(CableType::TwinAndEarth);
        assert!(twin.fits(10.0, ClippedDirect));
        assert!(!twin.fits(16.0, ClippedDirect));
        assert!(!twin.fits(2.5, BuriedDirect));
        assert_eq!(twin.capacity(2.5, ClippedDirect), Some(36.0));
        assert_eq!(twin.capacity(2.5, Overhead), None);
        assert_eq!(twin.price_per_m(4.0), Some(3.35));
    }

    #[test]
    fn types_by_method() {
        assert_eq!(
            cables_for_method(BuriedDirect),
            vec![CableType::Swa, CableType::NyyJ]
        );
        let conduit = cables_for_method(Conduit);
        assert!(conduit.contains(&CableType::TwinAndEarth));
        assert!(!conduit.contains(&CableType::Swa));
        assert!(!cables_for_method(ClippedDirect).contains(&CableType::Flex));
    }

    #[test]
    fn types_by_current_rating() {
        assert_eq!(
            cables_for_current(500.0, BuriedDirect),
            vec![CableType::Swa, CableType::NyyJ]
        );
        let clipped = cables_for_current(100.0, ClippedDirect);
        assert!(!clipped.contains(&CableType::TwinAndEarth));
        assert!(clipped.contains(&CableType::Micc));
        assert!(cables_for_current(2000.0, Tray).is_empty());
    }

    #[test]
    fn optimal_size_per_type() {
        let swa = profile(CableType::Swa);
        assert_eq!(
            swa.optimal_size(45.0, ClippedDirect),
            Some(TypeSizing { size_mm2: 4.0, capacity_a: 57.0 })
        );
        assert_eq!(swa.optimal_size(45.0, Conduit), None);
        assert_eq!(profile(CableType::TwinAndEarth).optimal_size(90.0, ClippedDirect), None);
    }

    #[test]
    fn cheaper_alternatives_sorted_by_saving() {
        let alternatives = cost_effective_alternatives(CableType::Swa, 16.0, 20.0);
        let types: Vec<_> = alternatives.iter().map(|a| a.cable_type).collect();
        assert_eq!(
            types,
            vec![CableType::PvcSingle, CableType::XlpeLsoh, CableType::NyyJ]
        );
        assert!((alternatives[0].savings_per_m - 17.0).abs() < 1e-9);
        assert!(alternatives.iter().all(|a| a.retail_per_m <= 20.0));

        assert!(cost_effective_alternatives(CableType::TwinAndEarth, 16.0, 100.0).is_empty());
        assert!(cost_effective_alternatives(CableType::PvcSingle, 16.0, 100.0).is_empty());
    }
}
