// Switch endpoints
//
// State commands return the new state as a single `0`/`1` bit;
// `getswitchstate` can additionally report `inval` when the hub has not
// heard from the device.

use tracing::debug;

use crate::client::AhaClient;
use crate::error::Error;

impl AhaClient {
    /// Switch a socket on. Returns the state reported back by the hub.
    ///
    /// `switchcmd=setswitchon`
    pub async fn set_switch_on(&self, ain: &str) -> Result<bool, Error> {
        debug!(ain, "switching on");
        self.command_bit("setswitchon", ain).await
    }

    /// Switch a socket off. Returns the state reported back by the hub.
    ///
    /// `switchcmd=setswitchoff`
    pub async fn set_switch_off(&self, ain: &str) -> Result<bool, Error> {
        debug!(ain, "switching off");
        self.command_bit("setswitchoff", ain).await
    }

    /// Toggle a socket. Returns the state reported back by the hub.
    ///
    /// `switchcmd=setswitchtoggle`
    pub async fn set_switch_toggle(&self, ain: &str) -> Result<bool, Error> {
        debug!(ain, "toggling");
        self.command_bit("setswitchtoggle", ain).await
    }

    /// Read the current switch state. `None` means the hub reported
    /// `inval` (device state unknown).
    ///
    /// `switchcmd=getswitchstate`
    pub async fn switch_state(&self, ain: &str) -> Result<Option<bool>, Error> {
        let body = self.send_command("getswitchstate", Some(ain), None).await?;
        match body.as_str() {
            "0" => Ok(Some(false)),
            "1" => Ok(Some(true)),
            "inval" => Ok(None),
            _ => Err(Error::InvalidValue {
                command: "getswitchstate".to_owned(),
                raw: body,
            }),
        }
    }

    /// Whether the switch is currently connected to the hub.
    ///
    /// `switchcmd=getswitchpresent`
    pub async fn switch_present(&self, ain: &str) -> Result<bool, Error> {
        self.command_bit("getswitchpresent", ain).await
    }

    /// Power currently drawn through the switch, in mW.
    ///
    /// `switchcmd=getswitchpower`
    pub async fn switch_power(&self, ain: &str) -> Result<f64, Error> {
        self.command_f64("getswitchpower", ain).await
    }

    /// Energy drawn through the switch since commissioning or the last
    /// statistics reset, in Wh.
    ///
    /// `switchcmd=getswitchenergy`
    pub async fn switch_energy(&self, ain: &str) -> Result<f64, Error> {
        self.command_f64("getswitchenergy", ain).await
    }
}
