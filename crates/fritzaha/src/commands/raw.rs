//! Raw `switchcmd` passthrough.
//!
//! Escape hatch for hub commands without a typed wrapper, and the way to
//! address a device by AIN when duplicate names make resolution fail.

use fritzaha_core::{Hub, HubConfig};

use crate::cli::GlobalOpts;
use crate::error::CliError;
use crate::output;

pub async fn handle(
    config: HubConfig,
    command: &str,
    ain: Option<&str>,
    param: Option<&str>,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let body = Hub::oneshot(config, async move |hub| {
        hub.send_direct_command(command, ain, param).await
    })
    .await?;

    output::print_output(&output::render_value(&global.output, &body), global.quiet);
    Ok(())
}
