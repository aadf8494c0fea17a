use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::blocking::Client;

pub const DEFAULT_TIMEOUT_SECS: u64 = 15;

/// Blocking client used for the page fetch. Built once by the caller and passed down.
pub fn build_http_client(timeout: Duration) -> Result<Client> {
    Client::builder()
        .timeout(timeout)
        .build()
        .context("failed to build http client")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_with_custom_timeout() {
        assert!(build_http_client(Duration::from_secs(1)).is_ok());
        assert!(build_http_client(Duration::from_secs(DEFAULT_TIMEOUT_SECS)).is_ok());
    }
}
