//! ---
//! csel_section: "02-selection-engine"
//! csel_subsection: "module"
//! csel_type: "source"
//! csel_scope: "code"
//! csel_description: "Design current, derating, voltage drop, device rating and loop impedance formulas."
//! csel_version: "v0.1.0"
//! csel_owner: "tbd"
//! ---
use serde::{Deserialize, Serialize};

use crate::{
    model::{InstallationContext, InstallationMethod, Phase, ProtectiveDevice, TripCurve},
    tables::CableSpecification,
};

/// Preferred protective device ratings (A).
pub const STANDARD_DEVICE_RATINGS: [u32; 12] = [6, 10, 16, 20, 25, 32, 40, 50, 63, 80, 100, 125];

pub const DERATING_FLOOR: f64 = 0.5;
pub const CONDUIT_LONG_RUN_M: f64 = 100.0;
pub const CONDUIT_LONG_RUN_PENALTY: f64 = 0.95;

/// Required margin of derated capacity over design current.
pub const CURRENT_MARGIN: f64 = 1.1;
/// Conventional tripping ratio I2 / In used for overload coordination.
pub const OVERLOAD_RATIO: f64 = 1.45;

pub const RING_MAX_LENGTH_M: f64 = 106.0;
pub const RING_MAX_LOAD_W: f64 = 7200.0;

pub const SAFETY_CRITICAL_VOLTAGE_DROP_PERCENT: f64 = 3.0;
pub const GENERAL_VOLTAGE_DROP_PERCENT: f64 = 5.0;

const REFERENCE_AMBIENT_C: f64 = 30.0;
const THREE_PHASE_ROW_MIN_V: f64 = 380.0;
const FALLBACK_MAX_ZS_OHM: f64 = 1.15;

// (bucket upper bound °C, correction factor)
const TEMPERATURE_FACTORS: [(f64, f64); 6] = [
    (35.0, 0.94),
    (40.0, 0.87),
    (45.0, 0.79),
    (50.0, 0.71),
    (55.0, 0.61),
    (60.0, 0.50),
];

pub fn design_current(context: &InstallationContext) -> f64 {
    match context.phase {
        Phase::Single => context.total_load_w / context.voltage,
        Phase::Three => {
            context.total_load_w
                / (context.voltage * 3f64.sqrt() * context.power_factor_for_current())
        }
    }
}

/// Ambient temperature correction, bucketed upward to the next 5 °C step.
pub fn temperature_factor(ambient_c: f64) -> f64 {
    if ambient_c <= REFERENCE_AMBIENT_C {
        return 1.0;
    }
    let bucket = ((ambient_c / 5.0).ceil() * 5.0).clamp(35.0, 60.0);
    TEMPERATURE_FACTORS
        .iter()
        .find(|(upper, _)| bucket <= *upper)
        .map(|(_, factor)| *factor)
        .unwrap_or(0.50)
}

/// Combined derating factor, bounded to `[DERATING_FLOOR, 1.0]`.
pub fn derating_factor(context: &InstallationContext) -> f64 {
    let mut factor = temperature_factor(context.ambient_temperature());
    factor *= context.grouping_factor();
    if context.installation_method == InstallationMethod::Conduit
        && context.run_length_m > CONDUIT_LONG_RUN_M
    {
        factor *= CONDUIT_LONG_RUN_PENALTY;
    }
    factor.clamp(DERATING_FLOOR, 1.0)
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct VoltageDrop {
    pub volts: f64,
    pub percent: f64,
}

/// Voltage drop of `spec` over the run. Ring circuits divide the radial figure
/// by four: each leg carries half the current over half the electrical length.
pub fn voltage_drop(
    context: &InstallationContext,
    spec: &CableSpecification,
    is_ring: bool,
) -> VoltageDrop {
    let mv_per_am = spec.volt_drop_mv_per_am.for_material(context.conductor);
    let mut volts = mv_per_am * context.run_length_m * design_current(context) / 1000.0;
    if is_ring {
        volts /= 4.0;
    }
    VoltageDrop {
        volts,
        percent: volts / context.voltage * 100.0,
    }
}

pub fn max_voltage_drop_percent(context: &InstallationContext) -> f64 {
    if context.is_safety_critical() {
        SAFETY_CRITICAL_VOLTAGE_DROP_PERCENT
    } else {
        GENERAL_VOLTAGE_DROP_PERCENT
    }
}

/// Smallest standard rating within `[max(1.1·Ib, min_breaker), min(1.45·Iz, max_breaker)]`.
///
/// When the window holds no standard rating the lower bound is returned; the
/// classifier flags such candidates through their device-compatibility check.
pub fn select_device_rating(
    design_current_a: f64,
    derated_capacity_a: f64,
    spec: &CableSpecification,
) -> u32 {
    let min_rating = ((design_current_a * CURRENT_MARGIN).ceil() as u32).max(spec.min_breaker_a);
    let max_rating =
        ((derated_capacity_a * OVERLOAD_RATIO).floor() as u32).min(spec.max_breaker_a);
    STANDARD_DEVICE_RATINGS
        .iter()
        .copied()
        .find(|rating| (min_rating..=max_rating).contains(rating))
        .unwrap_or(min_rating)
}

/// Maximum earth fault loop impedance for the device family (Table 41.3 style).
pub fn max_zs(device: ProtectiveDevice, voltage: f64) -> f64 {
    let three_phase_row = voltage >= THREE_PHASE_ROW_MIN_V;
    match (device.curve(), three_phase_row) {
        (Some(TripCurve::B), false) => 1.44,
        (Some(TripCurve::B), true) => 0.83,
        (Some(TripCurve::C), false) => 1.15,
        (Some(TripCurve::C), true) => 0.66,
        _ => FALLBACK_MAX_ZS_OHM,
    }
}

/// Ze plus the line and protective conductor resistance of the run.
pub fn estimate_zs(context: &InstallationContext, spec: &CableSpecification, is_ring: bool) -> f64 {
    let mut conductor_ohm =
        spec.resistance.r1_plus_r2_ohm_per_km() * context.run_length_m / 1000.0;
    if is_ring {
        conductor_ohm /= 4.0;
    }
    context.external_impedance() + conductor_ohm
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{model::LoadType, model::SpecialRequirement, tables::get_table};

    fn approx(left: f64, right: f64) -> bool {
        (left - right).abs() < 1e-3
    }

    #[test]
    fn single_phase_design_current() {
        let context = InstallationContext::new(1000.0, 230.0, 20.0);
        assert!(approx(design_current(&context), 4.348));
    }

    #[test]
    fn three_phase_design_current_uses_default_power_factor() {
        let context = InstallationContext::new(15000.0, 400.0, 150.0).with_phase(Phase::Three);
        assert!(approx(design_current(&context), 25.471));
        let explicit = context.with_power_factor(0.85);
        assert!(approx(design_current(&explicit), 25.471));
    }

    #[test]
    fn temperature_buckets_round_up() {
        assert_eq!(temperature_factor(25.0), 1.0);
        assert_eq!(temperature_factor(30.0), 1.0);
        assert_eq!(temperature_factor(31.0), 0.94);
        assert_eq!(temperature_factor(40.0), 0.87);
        assert_eq!(temperature_factor(41.0), 0.79);
        assert_eq!(temperature_factor(60.0), 0.50);
        assert_eq!(temperature_factor(75.0), 0.50);
    }

    #[test]
    fn derating_compounds_and_floors() {
        let context = InstallationContext::new(15000.0, 400.0, 150.0)
            .with_installation_method(InstallationMethod::Conduit)
            .with_ambient_temperature(45.0);
        assert!(approx(derating_factor(&context), 0.7505));

        let severe = context.with_ambient_temperature(55.0).with_grouping_factor(0.5);
        assert_eq!(derating_factor(&severe), DERATING_FLOOR);
    }

    #[test]
    fn short_conduit_runs_are_not_penalised() {
        let context = InstallationContext::new(1000.0, 230.0, 100.0)
            .with_installation_method(InstallationMethod::Conduit);
        assert_eq!(derating_factor(&context), 1.0);
    }

    #[test]
    fn ring_voltage_drop_is_quarter_of_radial() {
        let context = InstallationContext::new(6000.0, 230.0, 90.0);
        let spec = get_table(false).get("2.5mm²").unwrap();
        let radial = voltage_drop(&context, spec, false);
        let ring = voltage_drop(&context, spec, true);
        assert!(approx(ring.volts * 4.0, radial.volts));
        assert!(approx(radial.percent, radial.volts / 230.0 * 100.0));
    }

    #[test]
    fn voltage_drop_limit_policy() {
        let power = InstallationContext::new(1000.0, 230.0, 10.0);
        assert_eq!(max_voltage_drop_percent(&power), 5.0);

        let lighting = power.clone().with_load_type(LoadType::Lighting);
        assert_eq!(max_voltage_drop_percent(&lighting), 3.0);

        let life_safety = power.with_special_requirement(SpecialRequirement::LifeSafety);
        assert_eq!(max_voltage_drop_percent(&life_safety), 3.0);
    }

    #[test]
    fn device_rating_picks_smallest_standard_value() {
        let spec = get_table(false).get("2.5mm²").unwrap();
        assert_eq!(select_device_rating(4.35, 27.0, spec), 6);
        assert_eq!(select_device_rating(17.0, 27.0, spec), 20);
    }

    #[test]
    fn device_rating_falls_back_to_lower_bound() {
        let spec = get_table(false).get("1.0mm²").unwrap();
        // 1.1 × 25 A = 27.5 A is above the 10 A ceiling for 1.0mm²
        assert_eq!(select_device_rating(25.0, 15.5, spec), 28);
    }

    #[test]
    fn max_zs_lookup() {
        assert_eq!(max_zs(ProtectiveDevice::Mcb(TripCurve::B), 230.0), 1.44);
        assert_eq!(max_zs(ProtectiveDevice::Mcb(TripCurve::B), 400.0), 0.83);
        assert_eq!(max_zs(ProtectiveDevice::Rcbo(TripCurve::C), 230.0), 1.15);
        assert_eq!(max_zs(ProtectiveDevice::Mcb(TripCurve::C), 400.0), 0.66);
        assert_eq!(max_zs(ProtectiveDevice::Fuse, 230.0), 1.15);
        assert_eq!(max_zs(ProtectiveDevice::Mcb(TripCurve::D), 230.0), 1.15);
    }

    #[test]
    fn zs_estimate_adds_conductor_resistance() {
        let context = InstallationContext::new(1000.0, 230.0, 50.0)
            .with_earthing(crate::model::EarthingSystem::TnS, Some(0.5));
        let spec = get_table(false).get("2.5mm²").unwrap();
        // (7.41 + 12.1) × 50 / 1000 = 0.9755
        assert!(approx(estimate_zs(&context, spec, false), 1.4755));
        assert!(approx(estimate_zs(&context, spec, true), 0.5 + 0.9755 / 4.0));
    }
}
