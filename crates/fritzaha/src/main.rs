mod cli;
mod commands;
mod error;
mod output;

use clap::Parser;
use secrecy::SecretString;
use tracing_subscriber::EnvFilter;

use fritzaha_core::{HubConfig, TlsVerification};

use crate::cli::{Cli, Command};
use crate::error::CliError;

#[tokio::main]
async fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup tracing based on verbosity
    init_tracing(cli.global.verbose);

    // Dispatch and handle errors with proper exit codes
    if let Err(err) = run(cli).await {
        let code = err.exit_code();
        eprintln!("{:?}", miette::Report::new(err));
        std::process::exit(code);
    }
}

fn init_tracing(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .init();
}

async fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        // Shell completions generation -- no hub contact needed
        Command::Completions(args) => {
            use clap::CommandFactory;
            use clap_complete::generate;

            let mut cmd = Cli::command();
            generate(args.shell, &mut cmd, "fritzaha", &mut std::io::stdout());
            Ok(())
        }

        // All other commands open a session for the duration of the call
        cmd => {
            let config = build_hub_config(&cli.global)?;

            tracing::debug!(command = ?cmd, "dispatching command");
            commands::dispatch(cmd, config, &cli.global).await
        }
    }
}

/// Build a `HubConfig` from the global CLI flags / env vars.
///
/// Credentials are supplied per invocation only -- there is no config
/// file and nothing is persisted. A missing password is prompted for.
fn build_hub_config(global: &cli::GlobalOpts) -> Result<HubConfig, CliError> {
    let url: url::Url = global.url.parse().map_err(|_| CliError::Validation {
        field: "url".into(),
        reason: format!("invalid URL: {}", global.url),
    })?;

    let password = match &global.password {
        Some(p) => SecretString::from(p.clone()),
        None => {
            let prompt = format!("Password for {}@{url}: ", global.username);
            SecretString::from(rpassword::prompt_password(prompt)?)
        }
    };

    let tls = if let Some(ref path) = global.ca_cert {
        TlsVerification::CustomCa(path.clone())
    } else if global.insecure {
        TlsVerification::DangerAcceptInvalid
    } else {
        TlsVerification::SystemDefaults
    };

    Ok(HubConfig {
        url,
        username: global.username.clone(),
        password,
        tls,
        timeout: std::time::Duration::from_secs(global.timeout),
    })
}
