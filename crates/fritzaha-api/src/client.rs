// AHA HTTP client
//
// Wraps `reqwest::Client` with FRITZ!Box-specific URL construction, session
// id handling, and response decoding. Endpoint families (devices, switch,
// radiator control) are implemented as inherent methods via separate files
// to keep this module focused on transport mechanics.

use std::sync::RwLock;

use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::error::Error;
use crate::transport::TransportConfig;

/// Login endpoint path, relative to the hub base URL.
pub(crate) const LOGIN_PATH: &str = "login_sid.lua";
/// Home automation command endpoint path.
pub(crate) const AHA_PATH: &str = "webservices/homeautoswitch.lua";

/// Raw HTTP client for the hub's home automation interface.
///
/// Handles `switchcmd` URL construction, session id injection, and the
/// hub's status-code conventions (400 = unknown command or AIN, 403 =
/// invalid session). Callers deal in AINs; name resolution lives a layer
/// above in `fritzaha-core`.
pub struct AhaClient {
    http: reqwest::Client,
    base_url: Url,
    /// Session id issued by the login endpoint. `None` until `login`
    /// succeeds; replaced wholesale on re-login.
    sid: RwLock<Option<String>>,
}

impl AhaClient {
    /// Create a new client from a `TransportConfig`.
    ///
    /// The `base_url` is the hub root (e.g. `http://fritz.box` or
    /// `https://192.168.178.1`). No request is made until `login`.
    pub fn new(base_url: Url, transport: &TransportConfig) -> Result<Self, Error> {
        let http = transport.build_client()?;
        Ok(Self {
            http,
            base_url,
            sid: RwLock::new(None),
        })
    }

    /// Create a client with a pre-built `reqwest::Client`.
    ///
    /// Use this when the defaults are fine (tests, mostly).
    pub fn with_client(http: reqwest::Client, base_url: Url) -> Self {
        Self {
            http,
            base_url,
            sid: RwLock::new(None),
        }
    }

    /// The underlying HTTP client (for the login flow, which builds its
    /// own requests against the login endpoint).
    pub(crate) fn http(&self) -> &reqwest::Client {
        &self.http
    }

    /// The hub base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    // ── Session id management ─────────────────────────────────────────

    /// The current session id, if a login has succeeded.
    pub fn session_id(&self) -> Option<String> {
        self.sid.read().expect("sid lock poisoned").clone()
    }

    pub(crate) fn set_session_id(&self, sid: Option<String>) {
        *self.sid.write().expect("sid lock poisoned") = sid;
    }

    fn require_session_id(&self) -> Result<String, Error> {
        self.session_id().ok_or(Error::NoSession)
    }

    // ── URL builders ─────────────────────────────────────────────────

    /// Build a full URL for an endpoint path under the hub base URL.
    pub(crate) fn endpoint_url(&self, path: &str) -> Url {
        let base = self.base_url.as_str().trim_end_matches('/');
        Url::parse(&format!("{base}/{path}")).expect("invalid endpoint URL")
    }

    // ── Request helpers ──────────────────────────────────────────────

    /// Send a `switchcmd` and return the trimmed plaintext body.
    ///
    /// `GET webservices/homeautoswitch.lua?switchcmd={command}&sid=…[&ain=…][&param=…]`
    pub async fn send_command(
        &self,
        command: &str,
        ain: Option<&str>,
        param: Option<&str>,
    ) -> Result<String, Error> {
        let sid = self.require_session_id()?;
        let url = self.endpoint_url(AHA_PATH);
        debug!(command, ain, "GET {}", url);

        let mut query: Vec<(&str, &str)> = vec![("switchcmd", command), ("sid", &sid)];
        if let Some(ain) = ain {
            query.push(("ain", ain));
        }
        if let Some(param) = param {
            query.push(("param", param));
        }

        let resp = self
            .http
            .get(url)
            .query(&query)
            .send()
            .await
            .map_err(Error::Transport)?;

        let body = read_body(resp, command).await?;
        Ok(body.trim().to_owned())
    }

    /// Send a `switchcmd` whose response body is an XML document.
    pub(crate) async fn command_xml<T: DeserializeOwned>(
        &self,
        command: &str,
        ain: Option<&str>,
    ) -> Result<T, Error> {
        let body = self.send_command(command, ain, None).await?;
        decode_xml(&body)
    }

    /// Send a `switchcmd` and parse the body as a number.
    ///
    /// The hub reports `inval` for readings it cannot provide; that (and
    /// any other unparseable body) surfaces as `Error::InvalidValue`.
    pub(crate) async fn command_f64(&self, command: &str, ain: &str) -> Result<f64, Error> {
        let body = self.send_command(command, Some(ain), None).await?;
        body.parse().map_err(|_| Error::InvalidValue {
            command: command.to_owned(),
            raw: body,
        })
    }

    /// Send a `switchcmd` whose body is a single `0`/`1` bit.
    pub(crate) async fn command_bit(&self, command: &str, ain: &str) -> Result<bool, Error> {
        let body = self.send_command(command, Some(ain), None).await?;
        match body.as_str() {
            "0" => Ok(false),
            "1" => Ok(true),
            _ => Err(Error::InvalidValue {
                command: command.to_owned(),
                raw: body,
            }),
        }
    }
}

// ── Response decoding ────────────────────────────────────────────────

/// Map the hub's status conventions, returning the body on success.
///
/// 403 means the session id is invalid or the account lacks home
/// automation rights; 400 means the hub did not recognize the command or
/// its parameters. Everything else non-2xx carries the raw status.
pub(crate) async fn read_body(resp: reqwest::Response, command: &str) -> Result<String, Error> {
    let status = resp.status();

    if status == reqwest::StatusCode::FORBIDDEN {
        return Err(Error::SessionExpired);
    }

    if status == reqwest::StatusCode::BAD_REQUEST {
        return Err(Error::BadRequest {
            command: command.to_owned(),
        });
    }

    if !status.is_success() {
        let body = resp.text().await.unwrap_or_default();
        return Err(Error::HubStatus {
            status: status.as_u16(),
            body: truncate(&body, 200).to_owned(),
        });
    }

    resp.text().await.map_err(Error::Transport)
}

/// Decode an XML body, keeping the raw text around for debugging.
pub(crate) fn decode_xml<T: DeserializeOwned>(body: &str) -> Result<T, Error> {
    quick_xml::de::from_str(body).map_err(|e| Error::Xml {
        message: e.to_string(),
        body: body.to_owned(),
    })
}

/// Truncate to at most `max` bytes without splitting a character.
fn truncate(s: &str, max: usize) -> &str {
    if s.len() <= max {
        return s;
    }
    let mut end = max;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}
