// ── Runtime connection configuration ──
//
// These types describe *how* to reach the hub. They carry credential data
// and connection tuning, but never touch disk. The CLI (or any other
// consumer) constructs a `HubConfig` and hands it in; credentials are
// supplied at call time only.

use secrecy::SecretString;
use url::Url;

/// TLS verification strategy.
#[derive(Debug, Clone, Default)]
pub enum TlsVerification {
    /// System CA store (strict).
    SystemDefaults,
    /// Custom CA certificate file.
    CustomCa(std::path::PathBuf),
    /// Skip verification. Default -- hubs ship a self-signed certificate,
    /// and plain-http LAN access is unaffected either way.
    #[default]
    DangerAcceptInvalid,
}

impl PartialEq for TlsVerification {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::SystemDefaults, Self::SystemDefaults) => true,
            (Self::CustomCa(a), Self::CustomCa(b)) => a == b,
            (Self::DangerAcceptInvalid, Self::DangerAcceptInvalid) => true,
            _ => false,
        }
    }
}

impl Eq for TlsVerification {}

/// Configuration for one hub session.
#[derive(Debug, Clone)]
pub struct HubConfig {
    /// Hub base URL (e.g. `http://fritz.box`).
    pub url: Url,
    /// Login username.
    pub username: String,
    /// Login password.
    pub password: SecretString,
    /// TLS verification strategy.
    pub tls: TlsVerification,
    /// Request timeout.
    pub timeout: std::time::Duration,
}

impl Default for HubConfig {
    fn default() -> Self {
        Self {
            url: "http://fritz.box".parse().expect("valid default URL"),
            username: "admin".into(),
            password: SecretString::from(String::new()),
            tls: TlsVerification::default(),
            timeout: std::time::Duration::from_secs(30),
        }
    }
}
