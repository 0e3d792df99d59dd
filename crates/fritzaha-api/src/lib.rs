// fritzaha-api: Async Rust client for the FRITZ!Box home automation HTTP interface (AHA)

pub mod client;
pub mod devices;
pub mod error;
pub mod session;
pub mod transport;

mod hkr;
mod switch;

pub use client::AhaClient;
pub use error::Error;
pub use session::NO_SESSION;
