// fritzaha-core: the session adapter over fritzaha-api.
//
// Holds one authenticated hub session, caches the name→AIN mapping for
// the session's lifetime, and exposes the home automation operations as
// typed methods. Consumers never see raw wire values -- units are
// converted on the way out and hub errors arrive as `CoreError`.

pub mod config;
pub mod error;
pub mod hub;
pub mod model;
pub mod units;

pub use config::{HubConfig, TlsVerification};
pub use error::CoreError;
pub use hub::Hub;
pub use model::{Ain, Device, Function, SwitchCommand, SwitchState};
pub use units::TemperatureUnit;
