// Thermostatic radiator control (HKR) endpoints
//
// All HKR temperatures are carried in half-degrees Celsius on the wire.
// The target read can report the special values 253 (permanently off) and
// 254 (permanently on); they pass through numerically.

use tracing::debug;

use crate::client::AhaClient;
use crate::error::Error;

impl AhaClient {
    /// Target temperature the radiator is set to reach, in half-degrees.
    ///
    /// `switchcmd=gethkrtsoll`
    pub async fn hkr_target(&self, ain: &str) -> Result<f64, Error> {
        self.command_f64("gethkrtsoll", ain).await
    }

    /// Configured comfort temperature, in half-degrees.
    ///
    /// `switchcmd=gethkrkomfort`
    pub async fn hkr_comfort(&self, ain: &str) -> Result<f64, Error> {
        self.command_f64("gethkrkomfort", ain).await
    }

    /// Configured economy (setback) temperature, in half-degrees.
    ///
    /// `switchcmd=gethkrabsenk`
    pub async fn hkr_economy(&self, ain: &str) -> Result<f64, Error> {
        self.command_f64("gethkrabsenk", ain).await
    }

    /// Set the target temperature, in half-degrees.
    ///
    /// The hub can take up to 15 minutes to propagate the change to the
    /// device.
    ///
    /// `switchcmd=sethkrtsoll&param={half_degrees}`
    pub async fn set_hkr_target(&self, ain: &str, half_degrees: f64) -> Result<(), Error> {
        #[allow(clippy::cast_possible_truncation)]
        let param = (half_degrees.round() as i64).to_string();
        debug!(ain, param, "setting radiator target");
        self.send_command("sethkrtsoll", Some(ain), Some(&param))
            .await?;
        Ok(())
    }
}
