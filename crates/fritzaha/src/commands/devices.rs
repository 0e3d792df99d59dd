//! Device listing and AIN resolution handlers.

use tabled::Tabled;

use fritzaha_core::{Device, Hub, HubConfig};

use crate::cli::{DevicesArgs, DevicesCommand, GlobalOpts};
use crate::error::CliError;
use crate::output;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct DeviceRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "AIN")]
    ain: String,
    #[tabled(rename = "Product")]
    product: String,
    #[tabled(rename = "Functions")]
    functions: String,
    #[tabled(rename = "Present")]
    present: String,
}

impl From<&Device> for DeviceRow {
    fn from(d: &Device) -> Self {
        Self {
            name: d.name.clone(),
            ain: d.ain.to_string(),
            product: d.product_name.clone().unwrap_or_default(),
            functions: d
                .functions
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(" "),
            present: if d.present { "yes" } else { "no" }.into(),
        }
    }
}

// ── Handlers ────────────────────────────────────────────────────────

pub async fn handle(
    config: HubConfig,
    args: DevicesArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let devices = Hub::oneshot(config, async move |hub| {
        Ok(match args.command {
            DevicesCommand::List => hub.get_all_devices()?.to_vec(),
            DevicesCommand::Switches => hub.get_all_switches()?,
            DevicesCommand::Radiators => hub.get_all_radiator_controls()?,
            DevicesCommand::Alerts => hub.get_all_alerts()?,
        })
    })
    .await?;

    let out = output::render_list(&global.output, &devices, |d| DeviceRow::from(d), |d| d.name.clone());
    output::print_output(&out, global.quiet);
    Ok(())
}

pub async fn handle_ain(
    config: HubConfig,
    name: &str,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let ain = Hub::oneshot(config, async move |hub| hub.get_ain(name)).await?;

    output::print_output(&output::render_value(&global.output, &ain), global.quiet);
    Ok(())
}
