//! Thermostatic radiator control handlers.

use fritzaha_core::{Hub, HubConfig};

use crate::cli::{GlobalOpts, RadiatorArgs, RadiatorCommand};
use crate::error::CliError;
use crate::output;

use super::to_core_unit;

pub async fn handle(
    config: HubConfig,
    args: RadiatorArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        RadiatorCommand::Setpoint { name, unit } => {
            let unit = to_core_unit(unit);
            let value = Hub::oneshot(config, async move |hub| {
                hub.get_radiator_control_setpoint(&name, unit).await
            })
            .await?;
            print_reading(value, global);
            Ok(())
        }

        RadiatorCommand::Comfort { name, unit } => {
            let unit = to_core_unit(unit);
            let value = Hub::oneshot(config, async move |hub| {
                hub.get_radiator_control_comfort(&name, unit).await
            })
            .await?;
            print_reading(value, global);
            Ok(())
        }

        RadiatorCommand::Economy { name, unit } => {
            let unit = to_core_unit(unit);
            let value = Hub::oneshot(config, async move |hub| {
                hub.get_radiator_control_economy(&name, unit).await
            })
            .await?;
            print_reading(value, global);
            Ok(())
        }

        RadiatorCommand::SetSetpoint { name, value, unit } => {
            let unit = to_core_unit(unit);
            Hub::oneshot(config, async move |hub| {
                hub.set_radiator_control_setpoint(&name, value, unit).await
            })
            .await?;
            if !global.quiet {
                // Propagation to the device can take up to 15 minutes.
                eprintln!("Radiator setpoint updated");
            }
            Ok(())
        }
    }
}

fn print_reading(value: f64, global: &GlobalOpts) {
    let value = output::round_reading(value);
    output::print_output(&output::render_value(&global.output, &value), global.quiet);
}
