//! Temperature and alert sensor handlers.

use fritzaha_core::{Hub, HubConfig};

use crate::cli::{AlertArgs, AlertCommand, GlobalOpts, Unit};
use crate::error::CliError;
use crate::output;

use super::to_core_unit;

pub async fn handle_temperature(
    config: HubConfig,
    name: &str,
    unit: Unit,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let unit = to_core_unit(unit);
    let value =
        Hub::oneshot(config, async move |hub| hub.get_temperature(name, unit).await).await?;

    let value = output::round_reading(value);
    output::print_output(&output::render_value(&global.output, &value), global.quiet);
    Ok(())
}

pub async fn handle_alert(
    config: HubConfig,
    args: AlertArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        AlertCommand::State { name } => {
            let state =
                Hub::oneshot(config, async move |hub| hub.get_alert_state(&name).await).await?;
            output::print_output(&output::render_value(&global.output, &state), global.quiet);
            Ok(())
        }
    }
}
