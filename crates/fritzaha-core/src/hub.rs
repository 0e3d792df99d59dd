// ── Session adapter ──
//
// `Hub` holds one authenticated session against the home automation
// interface. Opening a session performs the challenge/response login and
// fetches the device list once; the name→AIN mapping is cached for the
// session's lifetime. Every operation is a single request/response
// exchange -- no retries, no background refresh.
//
// The adapter is not designed for concurrent use: session lifecycle
// methods take `&mut self`, and callers sharing a `Hub` must serialize
// access themselves.

use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

use fritzaha_api::transport::{TlsMode, TransportConfig};
use fritzaha_api::AhaClient;

use crate::config::{HubConfig, TlsVerification};
use crate::error::CoreError;
use crate::model::{Ain, Device, Function, SwitchCommand, SwitchState};
use crate::units::{self, SourceScale, TemperatureUnit};

/// One session against a home automation hub.
pub struct Hub {
    config: HubConfig,
    session: Option<OpenSession>,
}

struct OpenSession {
    client: AhaClient,
    /// Device list as fetched at session open. Read-only for the
    /// session's lifetime.
    devices: Vec<Device>,
    opened_at: DateTime<Utc>,
}

impl Hub {
    /// Create a hub handle from configuration. Does NOT connect --
    /// call [`open_session()`](Self::open_session) to authenticate.
    pub fn new(config: HubConfig) -> Self {
        Self {
            config,
            session: None,
        }
    }

    /// Access the hub configuration.
    pub fn config(&self) -> &HubConfig {
        &self.config
    }

    // ── Session lifecycle ────────────────────────────────────────────

    /// Open a session: challenge/response login, then one device-list
    /// fetch to build the name→AIN cache.
    ///
    /// Re-invocation replaces any prior session; the old token is
    /// invalidated at the hub on a best-effort basis.
    pub async fn open_session(&mut self) -> Result<(), CoreError> {
        if let Some(old) = self.session.take() {
            warn!("session was already open; replacing it");
            if let Err(e) = old.client.logout().await {
                warn!(error = %e, "logout of replaced session failed (non-fatal)");
            }
        }

        let transport = build_transport(&self.config);
        let client = AhaClient::new(self.config.url.clone(), &transport)?;

        client
            .login(&self.config.username, &self.config.password)
            .await?;
        debug!("session authentication successful");

        let list = client.device_list_infos().await?;
        let devices: Vec<Device> = list.devices.into_iter().map(Device::from).collect();

        info!(devices = devices.len(), "session opened");
        self.session = Some(OpenSession {
            client,
            devices,
            opened_at: Utc::now(),
        });
        Ok(())
    }

    /// Close the session, invalidating the token at the hub.
    ///
    /// No-op if no session is open. A hub that cannot be reached during
    /// close is logged and otherwise ignored -- the local session state
    /// is discarded either way.
    pub async fn close_session(&mut self) {
        let Some(session) = self.session.take() else {
            debug!("no open session to close");
            return;
        };

        if let Err(e) = session.client.logout().await {
            warn!(error = %e, "logout failed (non-fatal)");
        }
        debug!("session closed");
    }

    /// Whether a session is currently open.
    pub fn is_session_open(&self) -> bool {
        self.session.is_some()
    }

    /// The current session id, if a session is open.
    pub fn session_id(&self) -> Option<String> {
        self.session.as_ref().and_then(|s| s.client.session_id())
    }

    /// When the current session was opened.
    pub fn opened_at(&self) -> Option<DateTime<Utc>> {
        self.session.as_ref().map(|s| s.opened_at)
    }

    fn session(&self) -> Result<&OpenSession, CoreError> {
        self.session.as_ref().ok_or(CoreError::SessionNotOpen)
    }

    // ── Name resolution ──────────────────────────────────────────────

    /// Resolve a display name to the device's AIN via the cached mapping.
    ///
    /// Fails with [`CoreError::UnknownDevice`] when the name is absent
    /// and [`CoreError::AmbiguousName`] when several devices share it --
    /// never falls back to a stale or default value.
    pub fn get_ain(&self, name: &str) -> Result<Ain, CoreError> {
        Ok(self.resolve(name)?.ain.clone())
    }

    fn resolve(&self, name: &str) -> Result<&Device, CoreError> {
        resolve_name(&self.session()?.devices, name)
    }

    /// Resolve a name and require the switch capability.
    fn resolve_switch(&self, name: &str) -> Result<&Device, CoreError> {
        let device = self.resolve(name)?;
        if !device.has_function(Function::Switch) {
            return Err(CoreError::DeviceNotSwitch {
                name: name.to_owned(),
            });
        }
        Ok(device)
    }

    // ── Listings ─────────────────────────────────────────────────────

    /// The cached device mapping as a listing.
    pub fn get_all_devices(&self) -> Result<&[Device], CoreError> {
        Ok(&self.session()?.devices)
    }

    /// Cached devices that have the switch capability.
    pub fn get_all_switches(&self) -> Result<Vec<Device>, CoreError> {
        self.filtered(Function::Switch)
    }

    /// Cached devices that are thermostatic radiator controls.
    pub fn get_all_radiator_controls(&self) -> Result<Vec<Device>, CoreError> {
        self.filtered(Function::RadiatorControl)
    }

    /// Cached devices that have the alert capability.
    pub fn get_all_alerts(&self) -> Result<Vec<Device>, CoreError> {
        self.filtered(Function::Alert)
    }

    fn filtered(&self, function: Function) -> Result<Vec<Device>, CoreError> {
        Ok(self
            .session()?
            .devices
            .iter()
            .filter(|d| d.has_function(function))
            .cloned()
            .collect())
    }

    // ── Switch operations ────────────────────────────────────────────

    /// Set a switch on, off, or toggled. Returns the state the hub
    /// reports back. Each invocation issues an independent hub command.
    pub async fn set_switch_state(
        &self,
        name: &str,
        command: SwitchCommand,
    ) -> Result<SwitchState, CoreError> {
        let session = self.session()?;
        let device = self.resolve_switch(name)?;
        let ain = device.ain.as_str();

        let state = match command {
            SwitchCommand::On => session.client.set_switch_on(ain).await?,
            SwitchCommand::Off => session.client.set_switch_off(ain).await?,
            SwitchCommand::Toggle => session.client.set_switch_toggle(ain).await?,
        };
        Ok(SwitchState::from(Some(state)))
    }

    /// Current state of a switch (`Unknown` when the hub has not heard
    /// from the device).
    pub async fn get_switch_state(&self, name: &str) -> Result<SwitchState, CoreError> {
        let session = self.session()?;
        let device = self.resolve_switch(name)?;
        let state = session.client.switch_state(device.ain.as_str()).await?;
        Ok(SwitchState::from(state))
    }

    /// Whether the switch is currently connected to the hub.
    pub async fn is_switch_present(&self, name: &str) -> Result<bool, CoreError> {
        let session = self.session()?;
        let device = self.resolve_switch(name)?;
        Ok(session.client.switch_present(device.ain.as_str()).await?)
    }

    /// Power currently drawn through the switch, in mW.
    pub async fn get_switch_power(&self, name: &str) -> Result<f64, CoreError> {
        let session = self.session()?;
        let device = self.resolve(name)?;
        Ok(session.client.switch_power(device.ain.as_str()).await?)
    }

    /// Energy drawn through the switch since commissioning or the last
    /// statistics reset, in Wh.
    pub async fn get_switch_energy(&self, name: &str) -> Result<f64, CoreError> {
        let session = self.session()?;
        let device = self.resolve(name)?;
        Ok(session.client.switch_energy(device.ain.as_str()).await?)
    }

    // ── Temperature ──────────────────────────────────────────────────

    /// Temperature measured by the device, converted from the hub's
    /// tenths-of-a-degree reading to the requested unit.
    pub async fn get_temperature(
        &self,
        name: &str,
        unit: TemperatureUnit,
    ) -> Result<f64, CoreError> {
        let session = self.session()?;
        let device = self.resolve(name)?;
        let raw = session.client.temperature(device.ain.as_str()).await?;
        Ok(units::convert(raw, SourceScale::Decidegrees, unit))
    }

    // ── Radiator control ─────────────────────────────────────────────

    /// Target temperature the radiator is set to reach.
    pub async fn get_radiator_control_setpoint(
        &self,
        name: &str,
        unit: TemperatureUnit,
    ) -> Result<f64, CoreError> {
        self.read_hkr(name, unit, HkrField::Setpoint).await
    }

    /// Configured comfort temperature.
    pub async fn get_radiator_control_comfort(
        &self,
        name: &str,
        unit: TemperatureUnit,
    ) -> Result<f64, CoreError> {
        self.read_hkr(name, unit, HkrField::Comfort).await
    }

    /// Configured economy (setback) temperature.
    pub async fn get_radiator_control_economy(
        &self,
        name: &str,
        unit: TemperatureUnit,
    ) -> Result<f64, CoreError> {
        self.read_hkr(name, unit, HkrField::Economy).await
    }

    /// Set the radiator target temperature. The hub can take up to 15
    /// minutes to propagate the change.
    pub async fn set_radiator_control_setpoint(
        &self,
        name: &str,
        value: f64,
        unit: TemperatureUnit,
    ) -> Result<(), CoreError> {
        let session = self.session()?;
        let device = self.resolve(name)?;
        let half_degrees = units::to_half_degrees(value, unit);
        session
            .client
            .set_hkr_target(device.ain.as_str(), half_degrees)
            .await?;
        Ok(())
    }

    async fn read_hkr(
        &self,
        name: &str,
        unit: TemperatureUnit,
        field: HkrField,
    ) -> Result<f64, CoreError> {
        let session = self.session()?;
        let device = self.resolve(name)?;
        let ain = device.ain.as_str();
        let raw = match field {
            HkrField::Setpoint => session.client.hkr_target(ain).await?,
            HkrField::Comfort => session.client.hkr_comfort(ain).await?,
            HkrField::Economy => session.client.hkr_economy(ain).await?,
        };
        Ok(units::convert(raw, SourceScale::Halfdegrees, unit))
    }

    // ── Alert ────────────────────────────────────────────────────────

    /// Current alert state of a device.
    ///
    /// Alert state is volatile, so this re-fetches the device list
    /// instead of trusting the session cache.
    pub async fn get_alert_state(&self, name: &str) -> Result<bool, CoreError> {
        let session = self.session()?;
        let list = session.client.device_list_infos().await?;

        let matches: Vec<_> = list
            .devices
            .iter()
            .filter(|d| d.name == name && d.alert.is_some())
            .collect();

        let info = match matches.as_slice() {
            [] => {
                return Err(CoreError::UnknownDevice {
                    name: name.to_owned(),
                });
            }
            [single] => single,
            _ => {
                return Err(CoreError::AmbiguousName {
                    name: name.to_owned(),
                    count: matches.len(),
                });
            }
        };

        let state = info
            .alert
            .as_ref()
            .and_then(|a| a.state.as_deref())
            .unwrap_or_default();
        match state {
            "0" => Ok(false),
            "1" => Ok(true),
            other => Err(CoreError::HubProtocol {
                message: format!("unexpected alert state {other:?} for {name:?}"),
                status: None,
            }),
        }
    }

    // ── Passthrough ──────────────────────────────────────────────────

    /// Send a raw `switchcmd` for operations without a typed wrapper.
    /// Returns the trimmed plaintext response body.
    pub async fn send_direct_command(
        &self,
        command: &str,
        ain: Option<&str>,
        param: Option<&str>,
    ) -> Result<String, CoreError> {
        let session = self.session()?;
        Ok(session.client.send_command(command, ain, param).await?)
    }

    // ── One-shot convenience ─────────────────────────────────────────

    /// One-shot: open a session, run the closure, close the session.
    ///
    /// The session is closed even when the closure fails; its error wins
    /// over any logout noise (which is logged, not returned).
    pub async fn oneshot<T, F>(config: HubConfig, f: F) -> Result<T, CoreError>
    where
        F: AsyncFnOnce(&Hub) -> Result<T, CoreError>,
    {
        let mut hub = Hub::new(config);
        hub.open_session().await?;
        let result = f(&hub).await;
        hub.close_session().await;
        result
    }
}

// ── Helpers ──────────────────────────────────────────────────────────

/// Resolve a display name against a device listing.
fn resolve_name<'a>(devices: &'a [Device], name: &str) -> Result<&'a Device, CoreError> {
    let mut matches = devices.iter().filter(|d| d.name == name);
    let Some(first) = matches.next() else {
        return Err(CoreError::UnknownDevice {
            name: name.to_owned(),
        });
    };
    let extra = matches.count();
    if extra > 0 {
        return Err(CoreError::AmbiguousName {
            name: name.to_owned(),
            count: extra + 1,
        });
    }
    Ok(first)
}

/// Build a [`TransportConfig`] from the hub configuration.
fn build_transport(config: &HubConfig) -> TransportConfig {
    TransportConfig {
        tls: match &config.tls {
            TlsVerification::SystemDefaults => TlsMode::System,
            TlsVerification::CustomCa(path) => TlsMode::CustomCa(path.clone()),
            TlsVerification::DangerAcceptInvalid => TlsMode::DangerAcceptInvalid,
        },
        timeout: config.timeout,
    }
}

enum HkrField {
    Setpoint,
    Comfort,
    Economy,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn device(name: &str, ain: &str) -> Device {
        Device {
            name: name.to_owned(),
            ain: Ain::from(ain),
            functions: Vec::new(),
            product_name: None,
            present: true,
        }
    }

    #[test]
    fn resolve_finds_device_by_name() {
        let devices = vec![
            device("small green button", "42"),
            device("big red button", "007"),
        ];
        let found = resolve_name(&devices, "big red button").unwrap();
        assert_eq!(found.ain.as_str(), "007");
    }

    #[test]
    fn resolve_fails_on_empty_list() {
        let result = resolve_name(&[], "big red button");
        assert!(matches!(result, Err(CoreError::UnknownDevice { .. })));
    }

    #[test]
    fn resolve_fails_on_wrong_devices() {
        let devices = vec![device("small green button", "42")];
        match resolve_name(&devices, "big red button") {
            Err(CoreError::UnknownDevice { name }) => assert_eq!(name, "big red button"),
            other => panic!("expected UnknownDevice, got: {other:?}"),
        }
    }

    #[test]
    fn resolve_fails_on_duplicate_names() {
        let devices = vec![
            device("Lamp", "10001 1000001"),
            device("Heater", "10002 1000002"),
            device("Lamp", "10003 1000003"),
        ];
        match resolve_name(&devices, "Lamp") {
            Err(CoreError::AmbiguousName { name, count }) => {
                assert_eq!(name, "Lamp");
                assert_eq!(count, 2);
            }
            other => panic!("expected AmbiguousName, got: {other:?}"),
        }
    }

    #[test]
    fn operations_require_open_session() {
        let hub = Hub::new(HubConfig::default());
        assert!(!hub.is_session_open());
        assert!(matches!(
            hub.get_ain("Lamp"),
            Err(CoreError::SessionNotOpen)
        ));
        assert!(matches!(
            hub.get_all_devices(),
            Err(CoreError::SessionNotOpen)
        ));
    }
}
