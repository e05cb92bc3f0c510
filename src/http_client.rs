use std::time::Duration;

use reqwest::{Client, ClientBuilder};

/// Build the probe client. Traffic is HEAD-only against a single host, so
/// connections are pooled aggressively and redirects are followed the way a
/// browser would (the status we classify is the one after redirects).
pub fn create_probe_client(timeout_secs: u64) -> anyhow::Result<Client> {
    let client = ClientBuilder::new()
        // Connection pooling - every probe hits the same host
        .pool_max_idle_per_host(32)
        .pool_idle_timeout(Some(Duration::from_secs(90)))
        .tcp_keepalive(Some(Duration::from_secs(60)))
        .tcp_nodelay(true)

        // Timeouts
        .timeout(Duration::from_secs(timeout_secs))
        .connect_timeout(Duration::from_secs(5))

        // TLS
        .use_rustls_tls()
        .danger_accept_invalid_certs(true)

        // Redirects
        .redirect(reqwest::redirect::Policy::limited(5))

        // User agent
        .user_agent("Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36")
        .build()?;
    Ok(client)
}
