//! CLI error types with miette diagnostics.
//!
//! Maps `CoreError` variants into user-facing errors with actionable help text.

use miette::Diagnostic;
use thiserror::Error;

use fritzaha_core::CoreError;

/// Exit codes, one per failure class.
pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const AUTH: i32 = 3;
    pub const NOT_FOUND: i32 = 4;
    pub const CAPABILITY: i32 = 5;
    pub const AMBIGUOUS: i32 = 6;
    pub const CONNECTION: i32 = 7;
    pub const TIMEOUT: i32 = 8;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Connection ───────────────────────────────────────────────────

    #[error("Could not connect to hub at {url}")]
    #[diagnostic(
        code(fritzaha::connection_failed),
        help(
            "Check that the hub is reachable from this network.\n\
             URL: {url}\n\
             The default http://fritz.box only resolves on the hub's own LAN."
        )
    )]
    ConnectionFailed {
        url: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Request timed out")]
    #[diagnostic(
        code(fritzaha::timeout),
        help("Increase --timeout or check hub responsiveness.")
    )]
    Timeout,

    // ── Authentication ───────────────────────────────────────────────

    #[error("Authentication failed")]
    #[diagnostic(
        code(fritzaha::auth_failed),
        help(
            "Verify username and password.\n\
             The account also needs home automation permissions\n\
             (System > FRITZ!Box Users on the hub).\n\
             {detail}"
        )
    )]
    AuthFailed { detail: String },

    // ── Devices ──────────────────────────────────────────────────────

    #[error("Device '{name}' not found")]
    #[diagnostic(
        code(fritzaha::device_not_found),
        help("Run: fritzaha devices list to see available devices")
    )]
    DeviceNotFound { name: String },

    #[error("{count} devices share the name '{name}'")]
    #[diagnostic(
        code(fritzaha::ambiguous_name),
        help(
            "Rename the duplicates on the hub, or address the device by AIN\n\
             directly: fritzaha raw <switchcmd> --ain <ain>"
        )
    )]
    AmbiguousName { name: String, count: usize },

    #[error("Device '{name}' is not a switch")]
    #[diagnostic(
        code(fritzaha::not_a_switch),
        help("Run: fritzaha devices switches to see switchable devices")
    )]
    NotASwitch { name: String },

    // ── Hub protocol ─────────────────────────────────────────────────

    #[error("Hub error: {message}")]
    #[diagnostic(code(fritzaha::hub_error))]
    HubError { message: String },

    // ── Validation ───────────────────────────────────────────────────

    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(fritzaha::validation))]
    Validation { field: String, reason: String },

    // ── IO ───────────────────────────────────────────────────────────

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ConnectionFailed { .. } => exit_code::CONNECTION,
            Self::Timeout => exit_code::TIMEOUT,
            Self::AuthFailed { .. } => exit_code::AUTH,
            Self::DeviceNotFound { .. } => exit_code::NOT_FOUND,
            Self::AmbiguousName { .. } => exit_code::AMBIGUOUS,
            Self::NotASwitch { .. } => exit_code::CAPABILITY,
            Self::Validation { .. } => exit_code::USAGE,
            _ => exit_code::GENERAL,
        }
    }
}

// ── CoreError → CliError mapping ─────────────────────────────────────

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ConnectionFailed { url, reason } => CliError::ConnectionFailed {
                url,
                source: reason.into(),
            },

            CoreError::AuthenticationFailed { message } => {
                CliError::AuthFailed { detail: message }
            }

            CoreError::Timeout => CliError::Timeout,

            CoreError::UnknownDevice { name } => CliError::DeviceNotFound { name },

            CoreError::AmbiguousName { name, count } => CliError::AmbiguousName { name, count },

            CoreError::DeviceNotSwitch { name } => CliError::NotASwitch { name },

            CoreError::HubProtocol { message, status } => CliError::HubError {
                message: match status {
                    Some(s) => format!("{message} (HTTP {s})"),
                    None => message,
                },
            },

            // The CLI always opens a session before dispatching, so this
            // only shows up if core grows a new call path.
            CoreError::SessionNotOpen => CliError::HubError {
                message: "no open session".into(),
            },

            CoreError::Config { message } => CliError::Validation {
                field: "config".into(),
                reason: message,
            },
        }
    }
}
