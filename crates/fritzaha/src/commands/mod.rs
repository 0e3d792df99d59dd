//! Command handlers, one module per operation group.
//!
//! Every handler runs through [`Hub::oneshot`]: open a session, perform
//! the operation, close the session. Nothing survives the invocation.

pub mod devices;
pub mod radiator;
pub mod raw;
pub mod sensors;
pub mod switch;

use fritzaha_core::{HubConfig, TemperatureUnit};

use crate::cli::{Command, GlobalOpts, Unit};
use crate::error::CliError;

pub async fn dispatch(
    cmd: Command,
    config: HubConfig,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match cmd {
        Command::Devices(args) => devices::handle(config, args, global).await,
        Command::Ain { name } => devices::handle_ain(config, &name, global).await,
        Command::Switch(args) => switch::handle(config, args, global).await,
        Command::Temperature { name, unit } => {
            sensors::handle_temperature(config, &name, unit, global).await
        }
        Command::Alert(args) => sensors::handle_alert(config, args, global).await,
        Command::Radiator(args) => radiator::handle(config, args, global).await,
        Command::Raw {
            command,
            ain,
            param,
        } => raw::handle(config, &command, ain.as_deref(), param.as_deref(), global).await,
        Command::Completions(_) => unreachable!("completions handled before dispatch"),
    }
}

/// Map the CLI unit flag to the core unit type.
pub(crate) fn to_core_unit(unit: Unit) -> TemperatureUnit {
    match unit {
        Unit::Celsius => TemperatureUnit::Celsius,
        Unit::Fahrenheit => TemperatureUnit::Fahrenheit,
        Unit::Kelvin => TemperatureUnit::Kelvin,
    }
}
