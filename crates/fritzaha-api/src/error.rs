use thiserror::Error;

/// Top-level error type for the `fritzaha-api` crate.
///
/// Covers every failure mode across the AHA surface: authentication,
/// transport, hub-reported status codes, and response decoding.
/// `fritzaha-core` maps these into user-facing diagnostics.
#[derive(Debug, Error)]
pub enum Error {
    // ── Authentication ──────────────────────────────────────────────
    /// Login failed (wrong credentials, login temporarily blocked, etc.)
    #[error("Authentication failed: {message}")]
    Authentication { message: String },

    /// The hub rejected the session id (expired, logged out elsewhere,
    /// or the account lacks home-automation rights). HTTP 403.
    #[error("Session rejected by hub -- re-authentication required")]
    SessionExpired,

    /// An authenticated call was made before `login`.
    #[error("No open session -- call login first")]
    NoSession,

    // ── Transport ───────────────────────────────────────────────────
    /// HTTP transport error (connection refused, DNS failure, timeout, etc.)
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// TLS configuration error.
    #[error("TLS error: {0}")]
    Tls(String),

    // ── Hub protocol ────────────────────────────────────────────────
    /// The hub did not recognize the command or its parameters. HTTP 400.
    #[error("Hub rejected command {command:?} (HTTP 400)")]
    BadRequest { command: String },

    /// Any other non-success status from the hub, carrying the raw code.
    #[error("Hub error (HTTP {status}): {body}")]
    HubStatus { status: u16, body: String },

    /// A numeric read returned something unparseable (e.g. `inval`).
    #[error("Hub returned invalid value {raw:?} for command {command:?}")]
    InvalidValue { command: String, raw: String },

    // ── Data ────────────────────────────────────────────────────────
    /// XML deserialization failed, with the raw body for debugging.
    #[error("XML decoding error: {message}")]
    Xml { message: String, body: String },
}

impl Error {
    /// Returns `true` if this error indicates the session is no longer
    /// valid and re-authentication might resolve it.
    pub fn is_auth_expired(&self) -> bool {
        matches!(
            self,
            Self::Authentication { .. } | Self::SessionExpired | Self::NoSession
        )
    }

    /// The raw HTTP status reported by the hub, if this is a hub-side error.
    pub fn hub_status(&self) -> Option<u16> {
        match self {
            Self::BadRequest { .. } => Some(400),
            Self::SessionExpired => Some(403),
            Self::HubStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}
