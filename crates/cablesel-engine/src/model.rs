//! ---
//! csel_section: "02-selection-engine"
//! csel_subsection: "module"
//! csel_type: "source"
//! csel_scope: "code"
//! csel_description: "Circuit descriptors, installation enums and default resolution."
//! csel_version: "v0.1.0"
//! csel_owner: "tbd"
//! ---
//! Input descriptors consumed by the selection engine.
//!
//! Every optional field has exactly one resolution function on
//! [`InstallationContext`] so the precedence between caller-supplied values
//! and regulatory defaults is visible in one place.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use tracing::warn;
use uuid::Uuid;

use crate::errors::{Result, SelectionError};

pub const DEFAULT_AMBIENT_TEMPERATURE_C: f64 = 30.0;
pub const DEFAULT_GROUPING_FACTOR: f64 = 1.0;
pub const DEFAULT_THREE_PHASE_POWER_FACTOR: f64 = 0.85;

const MIN_AMBIENT_TEMPERATURE_C: f64 = 0.0;
const MAX_AMBIENT_TEMPERATURE_C: f64 = 90.0;

#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default, Display, EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
#[strum(ascii_case_insensitive)]
pub enum Phase {
    #[default]
    Single,
    Three,
}

#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default, Display, EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
#[strum(ascii_case_insensitive)]
pub enum InstallationMethod {
    #[default]
    ClippedDirect,
    Conduit,
    Trunking,
    Ducted,
    BuriedDirect,
    Tray,
    Overhead,
}

impl InstallationMethod {
    /// BS 7671 Appendix 4 reference method the tabulated ampacity is taken from.
    pub fn reference_method(&self) -> &'static str {
        match self {
            InstallationMethod::ClippedDirect => "C",
            InstallationMethod::Conduit => "B1",
            InstallationMethod::Trunking => "B2",
            InstallationMethod::Ducted => "D1",
            InstallationMethod::BuriedDirect => "D2",
            InstallationMethod::Tray => "F",
            InstallationMethod::Overhead => "E",
        }
    }
}

#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default, Display, EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
#[strum(ascii_case_insensitive)]
pub enum LoadType {
    Lighting,
    #[default]
    Power,
    Motor,
    Heating,
    Emergency,
    Other,
}

#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default, Display, EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
#[strum(ascii_case_insensitive)]
pub enum ConductorMaterial {
    #[default]
    Copper,
    Aluminium,
}

#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default, Display, EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
#[strum(ascii_case_insensitive)]
pub enum CableType {
    #[default]
    #[serde(alias = "pvc-twin-earth")]
    TwinAndEarth,
    #[serde(alias = "swa-xlpe")]
    Swa,
    PvcSingle,
    #[serde(alias = "lsoh-cable")]
    XlpeLsoh,
    FireResistant,
    Micc,
    #[serde(alias = "h07rn-f")]
    Flex,
    NyyJ,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Display, EnumString)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
#[strum(ascii_case_insensitive)]
pub enum SpecialRequirement {
    Emergency,
    FireSafety,
    LifeSafety,
    Outdoor,
    HighTemperature,
}

impl SpecialRequirement {
    pub fn is_safety_critical(&self) -> bool {
        matches!(
            self,
            SpecialRequirement::Emergency
                | SpecialRequirement::FireSafety
                | SpecialRequirement::LifeSafety
        )
    }
}

#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default, Display, EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum EarthingSystem {
    #[serde(rename = "tn-s")]
    #[strum(serialize = "tn-s")]
    TnS,
    #[default]
    #[serde(rename = "tn-c-s")]
    #[strum(serialize = "tn-c-s")]
    TnCS,
    #[serde(rename = "tt")]
    #[strum(serialize = "tt")]
    Tt,
}

impl EarthingSystem {
    /// Typical declared external loop impedance Ze for the earthing arrangement.
    pub fn default_ze_ohm(&self) -> f64 {
        match self {
            EarthingSystem::TnS => 0.80,
            EarthingSystem::TnCS => 0.35,
            EarthingSystem::Tt => 21.0,
        }
    }
}

#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
#[strum(ascii_case_insensitive)]
pub enum TripCurve {
    #[default]
    B,
    C,
    D,
}

/// Protective device family, parsed once from free-form descriptors such as
/// `"32A MCB Type C"` or `"rcbo-b"`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(try_from = "String", into = "String")]
pub enum ProtectiveDevice {
    Mcb(TripCurve),
    Rcbo(TripCurve),
    Fuse,
    #[default]
    Unspecified,
}

impl ProtectiveDevice {
    pub fn curve(&self) -> Option<TripCurve> {
        match self {
            ProtectiveDevice::Mcb(curve) | ProtectiveDevice::Rcbo(curve) => Some(*curve),
            ProtectiveDevice::Fuse | ProtectiveDevice::Unspecified => None,
        }
    }
}

impl fmt::Display for ProtectiveDevice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProtectiveDevice::Mcb(curve) => write!(f, "mcb-{curve}"),
            ProtectiveDevice::Rcbo(curve) => write!(f, "rcbo-{curve}"),
            ProtectiveDevice::Fuse => f.write_str("fuse"),
            ProtectiveDevice::Unspecified => f.write_str("unspecified"),
        }
    }
}

/// Fuse standards as they appear in descriptors, either joined (`bs88`) or as
/// a separate number token (`BS 88`).
const FUSE_STANDARDS: [&str; 3] = ["88", "1361", "3036"];

impl FromStr for ProtectiveDevice {
    type Err = SelectionError;

    /// Never fails: a descriptor naming no known device family resolves to
    /// [`ProtectiveDevice::Unspecified`], which takes the fallback Zs limit.
    fn from_str(descriptor: &str) -> Result<Self> {
        let lowered = descriptor.trim().to_ascii_lowercase();
        if lowered.is_empty() || lowered == "unspecified" {
            return Ok(ProtectiveDevice::Unspecified);
        }

        let tokens: Vec<&str> = lowered
            .split(|c: char| !c.is_ascii_alphanumeric())
            .filter(|token| !token.is_empty())
            .collect();
        let curve = tokens.iter().find_map(|token| parse_curve_token(token));
        let has = |keyword: &str| tokens.iter().any(|token| token.contains(keyword));

        if has("rcbo") {
            Ok(ProtectiveDevice::Rcbo(curve.unwrap_or_default()))
        } else if has("mcb") {
            Ok(ProtectiveDevice::Mcb(curve.unwrap_or_default()))
        } else if has("fuse") || has("rewireable") || names_fuse_standard(&tokens) {
            Ok(ProtectiveDevice::Fuse)
        } else if let Some(curve) = curve {
            // A bare curve letter ("type c", "b32") implies a circuit breaker.
            Ok(ProtectiveDevice::Mcb(curve))
        } else {
            warn!(
                descriptor,
                "unrecognised protective device descriptor; using the fallback Zs limit"
            );
            Ok(ProtectiveDevice::Unspecified)
        }
    }
}

fn names_fuse_standard(tokens: &[&str]) -> bool {
    let joined = tokens.iter().any(|token| {
        token
            .strip_prefix("bs")
            .is_some_and(|number| FUSE_STANDARDS.contains(&number))
    });
    let spaced = tokens
        .windows(2)
        .any(|pair| pair[0] == "bs" && FUSE_STANDARDS.contains(&pair[1]));
    joined || spaced
}

fn parse_curve_token(token: &str) -> Option<TripCurve> {
    let letter = match token {
        "b" | "c" | "d" => token.chars().next(),
        _ => {
            let mut chars = token.chars();
            let first = chars.next()?;
            let rest = chars.as_str();
            if matches!(first, 'b' | 'c' | 'd')
                && !rest.is_empty()
                && rest.chars().all(|c| c.is_ascii_digit())
            {
                Some(first)
            } else {
                None
            }
        }
    }?;
    match letter {
        'b' => Some(TripCurve::B),
        'c' => Some(TripCurve::C),
        'd' => Some(TripCurve::D),
        _ => None,
    }
}

impl TryFrom<String> for ProtectiveDevice {
    type Error = SelectionError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<ProtectiveDevice> for String {
    fn from(device: ProtectiveDevice) -> Self {
        device.to_string()
    }
}

/// Design inputs for one circuit ("plan data").
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InstallationContext {
    pub total_load_w: f64,
    pub voltage: f64,
    #[serde(default)]
    pub phase: Phase,
    #[serde(default)]
    pub power_factor: Option<f64>,
    #[serde(default)]
    pub cable_type: CableType,
    #[serde(default)]
    pub conductor: ConductorMaterial,
    pub run_length_m: f64,
    #[serde(default)]
    pub installation_method: InstallationMethod,
    #[serde(default)]
    pub ambient_temperature_c: Option<f64>,
    #[serde(default)]
    pub grouping_factor: Option<f64>,
    #[serde(default)]
    pub protective_device: ProtectiveDevice,
    #[serde(default)]
    pub earthing_system: Option<EarthingSystem>,
    #[serde(default)]
    pub ze_ohm: Option<f64>,
    #[serde(default)]
    pub load_type: LoadType,
    #[serde(default)]
    pub special_requirements: Vec<SpecialRequirement>,
}

impl InstallationContext {
    /// Create a single-phase, clipped-direct power circuit with every optional
    /// field left to its default.
    pub fn new(total_load_w: f64, voltage: f64, run_length_m: f64) -> Self {
        Self {
            total_load_w,
            voltage,
            phase: Phase::default(),
            power_factor: None,
            cable_type: CableType::default(),
            conductor: ConductorMaterial::default(),
            run_length_m,
            installation_method: InstallationMethod::default(),
            ambient_temperature_c: None,
            grouping_factor: None,
            protective_device: ProtectiveDevice::default(),
            earthing_system: None,
            ze_ohm: None,
            load_type: LoadType::default(),
            special_requirements: Vec::new(),
        }
    }

    pub fn with_phase(mut self, phase: Phase) -> Self {
        self.phase = phase;
        self
    }

    pub fn with_power_factor(mut self, power_factor: f64) -> Self {
        self.power_factor = Some(power_factor);
        self
    }

    pub fn with_installation_method(mut self, method: InstallationMethod) -> Self {
        self.installation_method = method;
        self
    }

    pub fn with_ambient_temperature(mut self, celsius: f64) -> Self {
        self.ambient_temperature_c = Some(celsius);
        self
    }

    pub fn with_grouping_factor(mut self, factor: f64) -> Self {
        self.grouping_factor = Some(factor);
        self
    }

    pub fn with_load_type(mut self, load_type: LoadType) -> Self {
        self.load_type = load_type;
        self
    }

    pub fn with_protective_device(mut self, device: ProtectiveDevice) -> Self {
        self.protective_device = device;
        self
    }

    pub fn with_conductor(mut self, conductor: ConductorMaterial) -> Self {
        self.conductor = conductor;
        self
    }

    pub fn with_cable_type(mut self, cable_type: CableType) -> Self {
        self.cable_type = cable_type;
        self
    }

    pub fn with_earthing(mut self, system: EarthingSystem, ze_ohm: Option<f64>) -> Self {
        self.earthing_system = Some(system);
        self.ze_ohm = ze_ohm;
        self
    }

    pub fn with_special_requirement(mut self, requirement: SpecialRequirement) -> Self {
        self.special_requirements.push(requirement);
        self
    }

    /// Power factor used for the three-phase design current.
    pub fn power_factor_for_current(&self) -> f64 {
        self.power_factor.unwrap_or(DEFAULT_THREE_PHASE_POWER_FACTOR)
    }

    pub fn ambient_temperature(&self) -> f64 {
        self.ambient_temperature_c.unwrap_or(DEFAULT_AMBIENT_TEMPERATURE_C)
    }

    pub fn grouping_factor(&self) -> f64 {
        self.grouping_factor.unwrap_or(DEFAULT_GROUPING_FACTOR)
    }

    pub fn earthing_system(&self) -> EarthingSystem {
        self.earthing_system.unwrap_or_default()
    }

    /// Declared Ze, else the typical value for the earthing arrangement.
    pub fn external_impedance(&self) -> f64 {
        self.ze_ohm
            .unwrap_or_else(|| self.earthing_system().default_ze_ohm())
    }

    /// Lighting, emergency and life-safety circuits are held to the tighter
    /// voltage-drop ceiling.
    pub fn is_safety_critical(&self) -> bool {
        matches!(self.load_type, LoadType::Lighting | LoadType::Emergency)
            || self
                .special_requirements
                .iter()
                .any(SpecialRequirement::is_safety_critical)
    }

    pub fn has_requirement(&self, requirement: SpecialRequirement) -> bool {
        self.special_requirements.contains(&requirement)
    }

    /// Reject inputs the calculators cannot give a meaningful answer for.
    pub fn validate(&self) -> Result<()> {
        ensure_positive("voltage", self.voltage)?;
        ensure_positive("run_length_m", self.run_length_m)?;
        if !self.total_load_w.is_finite() || self.total_load_w < 0.0 {
            return Err(SelectionError::invalid(
                "total_load_w",
                format!("load must be a non-negative number, got {}", self.total_load_w),
            ));
        }
        if let Some(power_factor) = self.power_factor {
            ensure_unit_interval("power_factor", power_factor)?;
        }
        if let Some(ambient) = self.ambient_temperature_c {
            ensure_ambient(ambient)?;
        }
        if let Some(grouping) = self.grouping_factor {
            ensure_unit_interval("grouping_factor", grouping)?;
        }
        if let Some(ze) = self.ze_ohm {
            ensure_non_negative("ze_ohm", ze)?;
        }
        Ok(())
    }
}

/// Site-wide conditions shared by every circuit of a batch.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EnvironmentalSettings {
    #[serde(default = "default_ambient")]
    pub ambient_temperature_c: f64,
    #[serde(default = "default_grouping")]
    pub grouping_factor: f64,
    #[serde(default)]
    pub earthing_system: EarthingSystem,
    #[serde(default)]
    pub ze_ohm: Option<f64>,
}

fn default_ambient() -> f64 {
    DEFAULT_AMBIENT_TEMPERATURE_C
}

fn default_grouping() -> f64 {
    DEFAULT_GROUPING_FACTOR
}

impl Default for EnvironmentalSettings {
    fn default() -> Self {
        Self {
            ambient_temperature_c: default_ambient(),
            grouping_factor: default_grouping(),
            earthing_system: EarthingSystem::default(),
            ze_ohm: None,
        }
    }
}

impl EnvironmentalSettings {
    pub fn validate(&self) -> Result<()> {
        ensure_ambient(self.ambient_temperature_c)?;
        ensure_unit_interval("grouping_factor", self.grouping_factor)?;
        if let Some(ze) = self.ze_ohm {
            ensure_non_negative("ze_ohm", ze)?;
        }
        Ok(())
    }
}

/// One circuit of a batch, without the shared environmental conditions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CircuitSpec {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    pub name: String,
    pub total_load_w: f64,
    pub voltage: f64,
    #[serde(default)]
    pub phase: Phase,
    #[serde(default)]
    pub power_factor: Option<f64>,
    #[serde(default)]
    pub cable_type: CableType,
    #[serde(default)]
    pub conductor: ConductorMaterial,
    pub run_length_m: f64,
    #[serde(default)]
    pub installation_method: InstallationMethod,
    #[serde(default)]
    pub protective_device: ProtectiveDevice,
    #[serde(default)]
    pub load_type: LoadType,
    #[serde(default)]
    pub special_requirements: Vec<SpecialRequirement>,
}

impl CircuitSpec {
    pub fn with_environment(&self, environment: &EnvironmentalSettings) -> InstallationContext {
        InstallationContext {
            total_load_w: self.total_load_w,
            voltage: self.voltage,
            phase: self.phase,
            power_factor: self.power_factor,
            cable_type: self.cable_type,
            conductor: self.conductor,
            run_length_m: self.run_length_m,
            installation_method: self.installation_method,
            ambient_temperature_c: Some(environment.ambient_temperature_c),
            grouping_factor: Some(environment.grouping_factor),
            protective_device: self.protective_device,
            earthing_system: Some(environment.earthing_system),
            ze_ohm: environment.ze_ohm,
            load_type: self.load_type,
            special_requirements: self.special_requirements.clone(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(SelectionError::invalid("name", "circuit name must not be empty"));
        }
        self.with_environment(&EnvironmentalSettings::default()).validate()
    }
}

fn ensure_positive(field: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(SelectionError::invalid(
            field,
            format!("must be greater than zero, got {value}"),
        ))
    }
}

fn ensure_non_negative(field: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(SelectionError::invalid(
            field,
            format!("must not be negative, got {value}"),
        ))
    }
}

fn ensure_unit_interval(field: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 && value <= 1.0 {
        Ok(())
    } else {
        Err(SelectionError::invalid(
            field,
            format!("must lie in (0, 1], got {value}"),
        ))
    }
}

fn ensure_ambient(value: f64) -> Result<()> {
    if value.is_finite() && (MIN_AMBIENT_TEMPERATURE_C..=MAX_AMBIENT_TEMPERATURE_C).contains(&value)
    {
        Ok(())
    } else {
        Err(SelectionError::invalid(
            "ambient_temperature_c",
            format!(
                "must lie between {MIN_AMBIENT_TEMPERATURE_C} and {MAX_AMBIENT_TEMPERATURE_C} °C, got {value}"
            ),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_device_descriptors() {
        assert_eq!(
            "32A MCB Type C".parse::<ProtectiveDevice>().unwrap(),
            ProtectiveDevice::Mcb(TripCurve::C)
        );
        assert_eq!(
            "MCB".parse::<ProtectiveDevice>().unwrap(),
            ProtectiveDevice::Mcb(TripCurve::B)
        );
        assert_eq!(
            "rcbo-b".parse::<ProtectiveDevice>().unwrap(),
            ProtectiveDevice::Rcbo(TripCurve::B)
        );
        assert_eq!(
            "C32".parse::<ProtectiveDevice>().unwrap(),
            ProtectiveDevice::Mcb(TripCurve::C)
        );
        assert_eq!(
            "BS88 fuse".parse::<ProtectiveDevice>().unwrap(),
            ProtectiveDevice::Fuse
        );
        assert_eq!(
            "".parse::<ProtectiveDevice>().unwrap(),
            ProtectiveDevice::Unspecified
        );
        assert_eq!(
            "circuit thing".parse::<ProtectiveDevice>().unwrap(),
            ProtectiveDevice::Unspecified
        );
    }

    #[test]
    fn fuse_standards_and_unknown_descriptors() {
        for descriptor in ["BS 3036 rewireable", "BS 88", "bs1361 cartridge", "BS 88-3 HRC"] {
            assert_eq!(
                descriptor.parse::<ProtectiveDevice>().unwrap(),
                ProtectiveDevice::Fuse,
                "{descriptor}"
            );
        }
        for descriptor in ["32A breaker", "isolator", "BS 60898"] {
            assert_eq!(
                descriptor.parse::<ProtectiveDevice>().unwrap(),
                ProtectiveDevice::Unspecified,
                "{descriptor}"
            );
        }
    }

    #[test]
    fn device_display_parses_back() {
        for device in [
            ProtectiveDevice::Mcb(TripCurve::D),
            ProtectiveDevice::Rcbo(TripCurve::C),
            ProtectiveDevice::Fuse,
            ProtectiveDevice::Unspecified,
        ] {
            assert_eq!(device.to_string().parse::<ProtectiveDevice>().unwrap(), device);
        }
    }

    #[test]
    fn context_deserializes_with_defaults() {
        let yaml = r#"
total_load_w: 3000
voltage: 230
run_length_m: 25
protective_device: "MCB type B"
special_requirements: [fire-safety]
"#;
        let context: InstallationContext = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(context.phase, Phase::Single);
        assert_eq!(context.installation_method, InstallationMethod::ClippedDirect);
        assert_eq!(context.protective_device, ProtectiveDevice::Mcb(TripCurve::B));
        assert_eq!(context.ambient_temperature(), 30.0);
        assert_eq!(context.grouping_factor(), 1.0);
        assert!(context.is_safety_critical());
    }

    #[test]
    fn cable_types_accept_catalogue_names() {
        let types: Vec<CableType> =
            serde_yaml::from_str("[pvc-twin-earth, swa-xlpe, nyy-j, micc, h07rn-f]").unwrap();
        assert_eq!(
            types,
            vec![
                CableType::TwinAndEarth,
                CableType::Swa,
                CableType::NyyJ,
                CableType::Micc,
                CableType::Flex
            ]
        );
        assert_eq!(CableType::NyyJ.to_string(), "nyy-j");
        assert_eq!("pvc-single".parse::<CableType>().unwrap(), CableType::PvcSingle);
    }

    #[test]
    fn external_impedance_falls_back_to_earthing_default() {
        let context = InstallationContext::new(1000.0, 230.0, 10.0);
        assert_eq!(context.external_impedance(), 0.35);

        let tns = context.clone().with_earthing(EarthingSystem::TnS, None);
        assert_eq!(tns.external_impedance(), 0.80);

        let declared = context.with_earthing(EarthingSystem::TnS, Some(0.2));
        assert_eq!(declared.external_impedance(), 0.2);
    }

    #[test]
    fn rejects_invalid_context() {
        let zero_voltage = InstallationContext::new(1000.0, 0.0, 10.0);
        assert!(matches!(
            zero_voltage.validate(),
            Err(SelectionError::InvalidInput { field: "voltage", .. })
        ));

        let zero_length = InstallationContext::new(1000.0, 230.0, 0.0);
        assert!(zero_length.validate().is_err());

        let bad_grouping = InstallationContext::new(1000.0, 230.0, 10.0).with_grouping_factor(1.2);
        assert!(bad_grouping.validate().is_err());

        let hot = InstallationContext::new(1000.0, 230.0, 10.0).with_ambient_temperature(120.0);
        assert!(hot.validate().is_err());
    }

    #[test]
    fn circuit_inherits_environment() {
        let circuit = CircuitSpec {
            id: Uuid::new_v4(),
            name: "Kitchen sockets".into(),
            total_load_w: 6000.0,
            voltage: 230.0,
            phase: Phase::Single,
            power_factor: None,
            cable_type: CableType::TwinAndEarth,
            conductor: ConductorMaterial::Copper,
            run_length_m: 60.0,
            installation_method: InstallationMethod::ClippedDirect,
            protective_device: ProtectiveDevice::Mcb(TripCurve::B),
            load_type: LoadType::Power,
            special_requirements: Vec::new(),
        };
        let environment = EnvironmentalSettings {
            ambient_temperature_c: 35.0,
            grouping_factor: 0.8,
            earthing_system: EarthingSystem::TnS,
            ze_ohm: None,
        };
        let context = circuit.with_environment(&environment);
        assert_eq!(context.ambient_temperature(), 35.0);
        assert_eq!(context.grouping_factor(), 0.8);
        assert_eq!(context.external_impedance(), 0.80);
        assert!(context.validate().is_ok());
    }
}
