// SPDX-FileCopyrightText: 2026 Quire Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `quire status` command implementation.
//!
//! Queries the gateway's health endpoint. A gateway that cannot be reached
//! is reported as not running rather than as an error.

use std::time::Duration;

use quire_config::QuireConfig;
use quire_core::QuireError;
use serde::{Deserialize, Serialize};

/// Health endpoint response from the gateway.
#[derive(Debug, Deserialize)]
struct HealthResponse {
    status: String,
    uptime_secs: u64,
}

/// Structured status output for `--json` mode.
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub running: bool,
    pub status: String,
    pub uptime_secs: Option<u64>,
    pub address: String,
}

/// Renders seconds as `1d 2h 3m`, dropping leading zero units.
fn format_uptime(secs: u64) -> String {
    let (days, hours, minutes) = (secs / 86_400, (secs % 86_400) / 3_600, (secs % 3_600) / 60);
    match (days, hours) {
        (0, 0) => format!("{minutes}m"),
        (0, _) => format!("{hours}h {minutes}m"),
        _ => format!("{days}d {hours}h {minutes}m"),
    }
}

async fn fetch_status(address: &str) -> Result<StatusResponse, QuireError> {
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(5))
        .build()
        .map_err(|e| QuireError::Internal(format!("failed to build HTTP client: {e}")))?;

    let url = format!("http://{address}/health");
    let health = match client.get(&url).send().await {
        Ok(response) => response.json::<HealthResponse>().await.ok(),
        Err(e) => {
            tracing::debug!(error = %e, url, "gateway unreachable");
            None
        }
    };

    Ok(match health {
        Some(health) => StatusResponse {
            running: true,
            status: health.status,
            uptime_secs: Some(health.uptime_secs),
            address: address.to_string(),
        },
        None => StatusResponse {
            running: false,
            status: "not running".to_string(),
            uptime_secs: None,
            address: address.to_string(),
        },
    })
}

/// Runs the `quire status` command.
pub async fn run_status(config: &QuireConfig, json: bool) -> Result<(), QuireError> {
    let address = format!("{}:{}", config.server.host, config.server.port);
    let status = fetch_status(&address).await?;

    if json {
        let rendered = serde_json::to_string_pretty(&status)
            .map_err(|e| QuireError::Internal(format!("failed to encode status: {e}")))?;
        println!("{rendered}");
    } else if let Some(uptime) = status.uptime_secs {
        println!("quire at {}: {} (up {})", status.address, status.status, format_uptime(uptime));
    } else {
        println!("quire at {}: {}", status.address, status.status);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    #[test]
    fn uptime_formatting() {
        assert_eq!(format_uptime(59), "0m");
        assert_eq!(format_uptime(3_720), "1h 2m");
        assert_eq!(format_uptime(90_061), "1d 1h 1m");
    }

    #[tokio::test]
    async fn reports_running_gateway() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/health"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"status": "ok", "uptime_secs": 42})),
            )
            .mount(&server)
            .await;

        let address = server.address().to_string();
        let status = fetch_status(&address).await.unwrap();
        assert!(status.running);
        assert_eq!(status.uptime_secs, Some(42));
    }

    #[tokio::test]
    async fn unreachable_gateway_is_not_running() {
        let status = fetch_status("127.0.0.1:1").await.unwrap();
        assert!(!status.running);
        assert_eq!(status.status, "not running");
    }
}
