#[macro_use]
extern crate log;

use std::time::Duration;

use encore_result::{create_error, Error};
use lazy_static::lazy_static;
use reqwest::Client;

pub mod openweather;
pub mod spotify;
pub mod ticketmaster;
pub mod youtube;

lazy_static! {
    /// Shared client for upstream requests
    ///
    /// Upstream calls are bounded so a hung provider fails the request
    /// instead of hanging the caller.
    static ref CLIENT: Client = reqwest::Client::builder()
        .user_agent(concat!("encore/", env!("CARGO_PKG_VERSION")))
        .timeout(Duration::from_secs(10))
        .connect_timeout(Duration::from_secs(5))
        .build()
        .expect("reqwest Client");
}

/// Translate a failed request into an upstream error
pub(crate) fn request_error(provider: &'static str, error: reqwest::Error) -> Error {
    warn!("{provider} request failed: {error}");

    create_error!(UpstreamUnavailable {
        provider: provider.to_string(),
        status: error.status().map(|status| status.as_u16()),
    })
}

/// Translate a non-success upstream status, forwarding the status code
pub(crate) fn status_error(provider: &'static str, status: reqwest::StatusCode) -> Error {
    warn!("{provider} returned status {status}");

    create_error!(UpstreamUnavailable {
        provider: provider.to_string(),
        status: Some(status.as_u16()),
    })
}

/// Translate an upstream payload we could not make sense of
pub(crate) fn decode_error(provider: &'static str, error: reqwest::Error) -> Error {
    warn!("{provider} returned a malformed payload: {error}");

    create_error!(UpstreamUnavailable {
        provider: provider.to_string(),
        status: None,
    })
}
