//! Switch command handlers.

use owo_colors::OwoColorize;

use fritzaha_core::{Hub, HubConfig, SwitchCommand as CoreSwitchCommand, SwitchState};

use crate::cli::{GlobalOpts, OutputFormat, SwitchArgs, SwitchCommand, SwitchTarget};
use crate::error::CliError;
use crate::output;

pub async fn handle(
    config: HubConfig,
    args: SwitchArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        SwitchCommand::Set { name, state } => {
            let command = to_core_command(state);
            let new_state =
                Hub::oneshot(config, async move |hub| {
                    hub.set_switch_state(&name, command).await
                })
                .await?;
            print_state(new_state, global);
            Ok(())
        }

        SwitchCommand::State { name } => {
            let state =
                Hub::oneshot(config, async move |hub| hub.get_switch_state(&name).await).await?;
            print_state(state, global);
            Ok(())
        }

        SwitchCommand::Present { name } => {
            let present =
                Hub::oneshot(config, async move |hub| hub.is_switch_present(&name).await).await?;
            output::print_output(&output::render_value(&global.output, &present), global.quiet);
            Ok(())
        }

        SwitchCommand::Power { name } => {
            let power =
                Hub::oneshot(config, async move |hub| hub.get_switch_power(&name).await).await?;
            let power = output::round_reading(power);
            output::print_output(&output::render_value(&global.output, &power), global.quiet);
            Ok(())
        }

        SwitchCommand::Energy { name } => {
            let energy =
                Hub::oneshot(config, async move |hub| hub.get_switch_energy(&name).await).await?;
            let energy = output::round_reading(energy);
            output::print_output(&output::render_value(&global.output, &energy), global.quiet);
            Ok(())
        }
    }
}

fn to_core_command(target: SwitchTarget) -> CoreSwitchCommand {
    match target {
        SwitchTarget::On => CoreSwitchCommand::On,
        SwitchTarget::Off => CoreSwitchCommand::Off,
        SwitchTarget::Toggle => CoreSwitchCommand::Toggle,
    }
}

/// Print a switch state, colored in interactive table output.
fn print_state(state: SwitchState, global: &GlobalOpts) {
    let rendered = output::render_value(&global.output, &state);
    let rendered = if matches!(global.output, OutputFormat::Table)
        && output::should_color(&global.color)
    {
        match state {
            SwitchState::On => rendered.green().to_string(),
            SwitchState::Off => rendered.red().to_string(),
            SwitchState::Unknown => rendered.yellow().to_string(),
        }
    } else {
        rendered
    };
    output::print_output(&rendered, global.quiet);
}
