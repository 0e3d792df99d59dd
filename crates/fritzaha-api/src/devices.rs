// Device list endpoint and wire models
//
// `getdevicelistinfos` returns a `<devicelist>` document with one
// `<device>` element per actor. Capabilities show up as child elements
// (`<switch>`, `<powermeter>`, `<temperature>`, `<hkr>`, `<alert>`);
// their numeric fields are kept stringly here because the hub emits empty
// elements for readings it cannot provide. Interpretation happens in
// `fritzaha-core`.

use serde::Deserialize;
use tracing::debug;

use crate::client::AhaClient;
use crate::error::Error;

/// Root of the `getdevicelistinfos` response.
#[derive(Debug, Deserialize)]
#[serde(rename = "devicelist")]
pub struct DeviceList {
    #[serde(rename = "device", default)]
    pub devices: Vec<DeviceInfo>,
}

/// One `<device>` element.
#[derive(Debug, Clone, Deserialize)]
pub struct DeviceInfo {
    /// The AIN, e.g. `08761 0485036`. Stable per physical device.
    #[serde(rename = "@identifier")]
    pub identifier: String,
    #[serde(rename = "@productname", default)]
    pub product_name: Option<String>,
    #[serde(rename = "@manufacturer", default)]
    pub manufacturer: Option<String>,
    /// User-assigned display name; arbitrary Unicode, not guaranteed unique.
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub present: Option<String>,
    #[serde(default)]
    pub switch: Option<SwitchInfo>,
    #[serde(default)]
    pub powermeter: Option<PowermeterInfo>,
    #[serde(default)]
    pub temperature: Option<TemperatureInfo>,
    #[serde(default)]
    pub hkr: Option<HkrInfo>,
    #[serde(default)]
    pub alert: Option<AlertInfo>,
}

/// `<switch>` child of a device.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SwitchInfo {
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub mode: Option<String>,
    #[serde(default)]
    pub lock: Option<String>,
}

/// `<powermeter>` child of a device. Power in mW, energy in Wh.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PowermeterInfo {
    #[serde(default)]
    pub power: Option<String>,
    #[serde(default)]
    pub energy: Option<String>,
}

/// `<temperature>` child of a device. Celsius in tenths of a degree.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TemperatureInfo {
    #[serde(default)]
    pub celsius: Option<String>,
    #[serde(default)]
    pub offset: Option<String>,
}

/// `<hkr>` child of a thermostatic radiator control. Temperatures in
/// half-degrees Celsius.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HkrInfo {
    #[serde(default)]
    pub tist: Option<String>,
    #[serde(default)]
    pub tsoll: Option<String>,
    #[serde(default)]
    pub komfort: Option<String>,
    #[serde(default)]
    pub absenk: Option<String>,
}

/// `<alert>` child of a device. State `0` = no alert, `1` = alert.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AlertInfo {
    #[serde(default)]
    pub state: Option<String>,
}

impl AhaClient {
    /// Fetch information about all home automation devices known to the hub.
    ///
    /// `switchcmd=getdevicelistinfos`
    pub async fn device_list_infos(&self) -> Result<DeviceList, Error> {
        debug!("fetching device list");
        self.command_xml("getdevicelistinfos", None).await
    }

    /// Read the temperature measured by a device, in tenths of a degree
    /// Celsius.
    ///
    /// `switchcmd=gettemperature`
    pub async fn temperature(&self, ain: &str) -> Result<f64, Error> {
        self.command_f64("gettemperature", ain).await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::client::decode_xml;

    const DEVICE_LIST: &str = r#"<devicelist version="1">
        <device identifier="10001 1000001" id="16" functionbitmask="0" fwversion="03.33" manufacturer="AVM" productname="FRITZ!DECT 200">
            <present>1</present>
            <name>Switch 1</name>
            <switch><state>1</state><mode>manuell</mode><lock>0</lock></switch>
            <powermeter><power>10500</power><energy>12345</energy></powermeter>
            <temperature><celsius>215</celsius><offset>0</offset></temperature>
        </device>
        <device identifier="10003 1000003" id="17" functionbitmask="0" fwversion="03.50" manufacturer="AVM" productname="Comet DECT">
            <present>1</present>
            <name>TRV 1</name>
            <temperature><celsius>195</celsius><offset>0</offset></temperature>
            <hkr><tist>39</tist><tsoll>40</tsoll><absenk>32</absenk><komfort>42</komfort></hkr>
        </device>
        <device identifier="10005 1000005" id="18" functionbitmask="0" fwversion="03.50" manufacturer="AVM" productname="FRITZ!DECT 440">
            <present>0</present>
            <name>Button 1</name>
        </device>
    </devicelist>"#;

    #[test]
    fn device_list_parses_capability_children() {
        let list: DeviceList = decode_xml(DEVICE_LIST).unwrap();
        assert_eq!(list.devices.len(), 3);

        let switch = &list.devices[0];
        assert_eq!(switch.identifier, "10001 1000001");
        assert_eq!(switch.name, "Switch 1");
        assert!(switch.switch.is_some());
        assert!(switch.powermeter.is_some());
        assert!(switch.hkr.is_none());
        assert_eq!(
            switch.powermeter.as_ref().unwrap().power.as_deref(),
            Some("10500")
        );

        let trv = &list.devices[1];
        assert!(trv.switch.is_none());
        assert_eq!(trv.hkr.as_ref().unwrap().tsoll.as_deref(), Some("40"));

        // A device with no recognized capabilities still parses.
        let button = &list.devices[2];
        assert!(button.switch.is_none());
        assert!(button.hkr.is_none());
        assert_eq!(button.present.as_deref(), Some("0"));
    }

    #[test]
    fn empty_device_list_parses() {
        let list: DeviceList = decode_xml(r#"<devicelist version="1"></devicelist>"#).unwrap();
        assert!(list.devices.is_empty());
    }
}
