// ── Domain types ──
//
// Canonical types over the hub's wire models. Conversion from
// `fritzaha_api::devices::DeviceInfo` detects capabilities from the
// presence of the capability child elements in the device list.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use fritzaha_api::devices::DeviceInfo;

// ── Identifier ───────────────────────────────────────────────────────

/// AVM-assigned internal device identifier (e.g. `08761 0485036`).
///
/// Opaque and stable per physical device; may be an actuator id, a
/// template id, or a MAC address. Spaces are significant.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ain(String);

impl Ain {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Ain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Ain {
    fn from(raw: &str) -> Self {
        Self(raw.to_owned())
    }
}

impl From<String> for Ain {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

// ── Capabilities ─────────────────────────────────────────────────────

/// Capability a device advertises in the hub's device list.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Function {
    Alert,
    Switch,
    Powermeter,
    Temperature,
    /// Thermostatic radiator control (`hkr` on the wire).
    #[serde(rename = "hkr")]
    #[strum(serialize = "hkr")]
    RadiatorControl,
}

// ── Device ───────────────────────────────────────────────────────────

/// One home automation device as cached for the session.
#[derive(Debug, Clone, Serialize)]
pub struct Device {
    /// User-assigned display name. Arbitrary Unicode; unique per hub in
    /// practice but not guaranteed -- resolution fails on duplicates.
    pub name: String,
    pub ain: Ain,
    pub functions: Vec<Function>,
    pub product_name: Option<String>,
    /// Whether the device was reachable when the list was fetched.
    pub present: bool,
}

impl Device {
    pub fn has_function(&self, function: Function) -> bool {
        self.functions.contains(&function)
    }
}

impl From<DeviceInfo> for Device {
    fn from(info: DeviceInfo) -> Self {
        let mut functions = Vec::new();
        if info.alert.is_some() {
            functions.push(Function::Alert);
        }
        if info.switch.is_some() {
            functions.push(Function::Switch);
        }
        if info.powermeter.is_some() {
            functions.push(Function::Powermeter);
        }
        if info.temperature.is_some() {
            functions.push(Function::Temperature);
        }
        if info.hkr.is_some() {
            functions.push(Function::RadiatorControl);
        }

        Self {
            name: info.name,
            ain: Ain::from(info.identifier),
            functions,
            product_name: info.product_name,
            present: info.present.as_deref() == Some("1"),
        }
    }
}

// ── Switch state ─────────────────────────────────────────────────────

/// Command accepted by `set_switch_state`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum SwitchCommand {
    On,
    Off,
    Toggle,
}

/// Switch state as reported by the hub. `Unknown` means the hub has not
/// heard from the device (`inval` on the wire).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
pub enum SwitchState {
    On,
    Off,
    Unknown,
}

impl From<Option<bool>> for SwitchState {
    fn from(bit: Option<bool>) -> Self {
        match bit {
            Some(true) => Self::On,
            Some(false) => Self::Off,
            None => Self::Unknown,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::str::FromStr;

    use fritzaha_api::devices::{PowermeterInfo, SwitchInfo, TemperatureInfo};
    use pretty_assertions::assert_eq;

    use super::*;

    fn bare_info(name: &str, ain: &str) -> DeviceInfo {
        DeviceInfo {
            identifier: ain.to_owned(),
            product_name: None,
            manufacturer: None,
            name: name.to_owned(),
            present: Some("1".to_owned()),
            switch: None,
            powermeter: None,
            temperature: None,
            hkr: None,
            alert: None,
        }
    }

    #[test]
    fn capabilities_detected_from_child_elements() {
        let mut info = bare_info("Switch 1", "10002 1000002");
        info.switch = Some(SwitchInfo::default());
        info.powermeter = Some(PowermeterInfo::default());
        info.temperature = Some(TemperatureInfo::default());

        let device = Device::from(info);
        assert!(device.has_function(Function::Switch));
        assert!(device.has_function(Function::Powermeter));
        assert!(device.has_function(Function::Temperature));
        assert!(!device.has_function(Function::RadiatorControl));
        assert!(!device.has_function(Function::Alert));
    }

    #[test]
    fn device_without_capabilities_converts() {
        let device = Device::from(bare_info("Button 1", "10005 1000005"));
        assert!(device.functions.is_empty());
        assert_eq!(device.ain.as_str(), "10005 1000005");
    }

    #[test]
    fn absent_device_not_marked_present() {
        let mut info = bare_info("Contact 1", "10001 1000001");
        info.present = Some("0".to_owned());
        assert!(!Device::from(info).present);
    }

    #[test]
    fn switch_command_parses_case_insensitively() {
        assert_eq!(SwitchCommand::from_str("On").unwrap(), SwitchCommand::On);
        assert_eq!(SwitchCommand::from_str("off").unwrap(), SwitchCommand::Off);
        assert_eq!(
            SwitchCommand::from_str("TOGGLE").unwrap(),
            SwitchCommand::Toggle
        );
        assert!(SwitchCommand::from_str("sideways").is_err());
    }

    #[test]
    fn radiator_control_displays_as_wire_name() {
        assert_eq!(Function::RadiatorControl.to_string(), "hkr");
        assert_eq!(Function::Powermeter.to_string(), "powermeter");
    }
}
