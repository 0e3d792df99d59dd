// ── Core error types ──
//
// User-facing errors from fritzaha-core. Consumers never see HTTP status
// codes or XML parse failures directly -- the `From<fritzaha_api::Error>`
// impl translates transport-layer errors into domain-appropriate
// variants. Hub-reported error codes are preserved on `HubProtocol`.

use thiserror::Error;

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Connection errors ────────────────────────────────────────────
    #[error("Cannot connect to hub at {url}: {reason}")]
    ConnectionFailed { url: String, reason: String },

    #[error("Authentication failed: {message}")]
    AuthenticationFailed { message: String },

    #[error("No open session")]
    SessionNotOpen,

    #[error("Hub request timed out")]
    Timeout,

    // ── Resolution errors ────────────────────────────────────────────
    #[error("Device not found: {name:?}")]
    UnknownDevice { name: String },

    #[error("{count} devices share the name {name:?}")]
    AmbiguousName { name: String, count: usize },

    // ── Capability errors ────────────────────────────────────────────
    #[error("Device {name:?} is not a switch")]
    DeviceNotSwitch { name: String },

    // ── Protocol errors ──────────────────────────────────────────────
    /// Unexpected response shape or a hub-reported error, carrying the
    /// raw HTTP status when the hub supplied one.
    #[error("Hub protocol error: {message}")]
    HubProtocol {
        message: String,
        status: Option<u16>,
    },

    // ── Configuration errors ─────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },
}

// ── Conversion from transport-layer errors ───────────────────────────

impl From<fritzaha_api::Error> for CoreError {
    fn from(err: fritzaha_api::Error) -> Self {
        match err {
            fritzaha_api::Error::Authentication { message } => {
                CoreError::AuthenticationFailed { message }
            }
            fritzaha_api::Error::SessionExpired => CoreError::AuthenticationFailed {
                message: "session rejected by hub -- re-authentication required".into(),
            },
            fritzaha_api::Error::NoSession => CoreError::SessionNotOpen,
            fritzaha_api::Error::Transport(ref e) => {
                if e.is_timeout() {
                    CoreError::Timeout
                } else if e.is_connect() {
                    CoreError::ConnectionFailed {
                        url: e
                            .url()
                            .map(|u| u.to_string())
                            .unwrap_or_else(|| "<unknown>".into()),
                        reason: e.to_string(),
                    }
                } else {
                    CoreError::HubProtocol {
                        message: e.to_string(),
                        status: e.status().map(|s| s.as_u16()),
                    }
                }
            }
            fritzaha_api::Error::InvalidUrl(e) => CoreError::Config {
                message: format!("Invalid URL: {e}"),
            },
            fritzaha_api::Error::Tls(msg) => CoreError::ConnectionFailed {
                url: String::new(),
                reason: format!("TLS error: {msg}"),
            },
            fritzaha_api::Error::BadRequest { command } => CoreError::HubProtocol {
                message: format!("hub rejected command {command:?}"),
                status: Some(400),
            },
            fritzaha_api::Error::HubStatus { status, body } => CoreError::HubProtocol {
                message: body,
                status: Some(status),
            },
            fritzaha_api::Error::InvalidValue { command, raw } => CoreError::HubProtocol {
                message: format!("invalid value {raw:?} for {command}"),
                status: None,
            },
            fritzaha_api::Error::Xml { message, body: _ } => CoreError::HubProtocol {
                message: format!("malformed XML response: {message}"),
                status: None,
            },
        }
    }
}
