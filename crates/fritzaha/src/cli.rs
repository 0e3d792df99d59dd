//! Clap derive structures for the `fritzaha` CLI.
//!
//! Defines the complete command tree, global flags, and shared types.
//! Must stay free of dependencies beyond clap + clap_complete -- the
//! build script includes this file by path to generate man pages.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// fritzaha -- FRITZ!Box home automation from the command line
#[derive(Debug, Parser)]
#[command(
    name = "fritzaha",
    version,
    about = "Control FRITZ!Box home automation devices from the command line",
    long_about = "A CLI for the AVM home automation HTTP interface.\n\n\
        Each invocation opens a session, runs one operation, and closes the\n\
        session again -- nothing is persisted between runs. Devices are\n\
        addressed by their display name as configured on the hub.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Hub URL
    #[arg(
        long,
        short = 'u',
        env = "FRITZAHA_URL",
        default_value = "http://fritz.box",
        global = true
    )]
    pub url: String,

    /// Login username
    #[arg(
        long,
        short = 'n',
        env = "FRITZAHA_USERNAME",
        default_value = "admin",
        global = true
    )]
    pub username: String,

    /// Login password (prompted for when omitted)
    #[arg(long, short = 'p', env = "FRITZAHA_PASSWORD", global = true, hide_env = true)]
    pub password: Option<String>,

    /// Output format
    #[arg(
        long,
        short = 'o',
        env = "FRITZAHA_OUTPUT",
        default_value = "table",
        global = true
    )]
    pub output: OutputFormat,

    /// When to use color output
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorMode,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Accept the hub's self-signed TLS certificate
    #[arg(long, short = 'k', env = "FRITZAHA_INSECURE", global = true)]
    pub insecure: bool,

    /// Verify TLS against a custom CA certificate (PEM)
    #[arg(long, env = "FRITZAHA_CA_CERT", global = true)]
    pub ca_cert: Option<PathBuf>,

    /// Request timeout in seconds
    #[arg(long, env = "FRITZAHA_TIMEOUT", default_value = "30", global = true)]
    pub timeout: u64,
}

// ── Output & Color Enums ─────────────────────────────────────────────

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
    /// Plain text, one value per line (scripting)
    Plain,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum ColorMode {
    /// Auto-detect (color if terminal is interactive)
    Auto,
    /// Always emit color codes
    Always,
    /// Never emit color codes
    Never,
}

/// Temperature unit for sensor and radiator reads.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Unit {
    Celsius,
    Fahrenheit,
    Kelvin,
}

/// Target state for `switch set`.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum SwitchTarget {
    On,
    Off,
    Toggle,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List devices known to the hub
    #[command(alias = "dev", alias = "d")]
    Devices(DevicesArgs),

    /// Resolve a device name to its AIN
    Ain {
        /// Device display name
        name: String,
    },

    /// Switch sockets on/off and read their meters
    #[command(alias = "sw")]
    Switch(SwitchArgs),

    /// Read a device's temperature sensor
    #[command(alias = "temp")]
    Temperature {
        /// Device display name
        name: String,

        /// Unit to report the temperature in
        #[arg(long, short = 'U', default_value = "celsius")]
        unit: Unit,
    },

    /// Read and set thermostatic radiator controls
    #[command(alias = "trv")]
    Radiator(RadiatorArgs),

    /// Read alert sensors
    Alert(AlertArgs),

    /// Send a raw switchcmd to the hub
    Raw {
        /// Command name, e.g. `getswitchname`
        command: String,

        /// Device AIN to address
        #[arg(long)]
        ain: Option<String>,

        /// Extra `param` value some commands take
        #[arg(long)]
        param: Option<String>,
    },

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// ── Devices ──────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct DevicesArgs {
    #[command(subcommand)]
    pub command: DevicesCommand,
}

#[derive(Debug, Subcommand)]
pub enum DevicesCommand {
    /// All devices from the session's device list
    #[command(alias = "ls")]
    List,
    /// Only devices with the switch capability
    Switches,
    /// Only thermostatic radiator controls
    Radiators,
    /// Only devices with the alert capability
    Alerts,
}

// ── Switch ───────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct SwitchArgs {
    #[command(subcommand)]
    pub command: SwitchCommand,
}

#[derive(Debug, Subcommand)]
pub enum SwitchCommand {
    /// Set a switch on, off, or toggled
    Set {
        /// Device display name
        name: String,
        /// Target state
        state: SwitchTarget,
    },
    /// Current switch state
    State {
        /// Device display name
        name: String,
    },
    /// Whether the switch is connected to the hub
    Present {
        /// Device display name
        name: String,
    },
    /// Power currently drawn, in mW
    Power {
        /// Device display name
        name: String,
    },
    /// Energy drawn since commissioning or statistics reset, in Wh
    Energy {
        /// Device display name
        name: String,
    },
}

// ── Radiator ─────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct RadiatorArgs {
    #[command(subcommand)]
    pub command: RadiatorCommand,
}

#[derive(Debug, Subcommand)]
pub enum RadiatorCommand {
    /// Target temperature the radiator is set to reach
    Setpoint {
        /// Device display name
        name: String,
        /// Unit to report the temperature in
        #[arg(long, short = 'U', default_value = "celsius")]
        unit: Unit,
    },
    /// Configured comfort temperature
    Comfort {
        /// Device display name
        name: String,
        /// Unit to report the temperature in
        #[arg(long, short = 'U', default_value = "celsius")]
        unit: Unit,
    },
    /// Configured economy (setback) temperature
    Economy {
        /// Device display name
        name: String,
        /// Unit to report the temperature in
        #[arg(long, short = 'U', default_value = "celsius")]
        unit: Unit,
    },
    /// Set the target temperature
    SetSetpoint {
        /// Device display name
        name: String,
        /// Temperature value
        value: f64,
        /// Unit the value is given in
        #[arg(long, short = 'U', default_value = "celsius")]
        unit: Unit,
    },
}

// ── Alert ────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct AlertArgs {
    #[command(subcommand)]
    pub command: AlertCommand,
}

#[derive(Debug, Subcommand)]
pub enum AlertCommand {
    /// Current alert state
    State {
        /// Device display name
        name: String,
    },
}

// ── Completions ──────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}
