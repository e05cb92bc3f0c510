use std::time::Duration;

use reqwest::Client;

/// Classification of one existence probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// The server completed the exchange with a 2xx code.
    Success(u16),
    /// The server completed the exchange with any other code.
    NotFound(u16),
    /// Connect, DNS or timeout failure; the address could not be checked.
    Unreachable,
}

impl ProbeOutcome {
    /// Status code of the probe when it counts as a discovery. Only an
    /// exact 200 qualifies; redirects and 403s are not treated as hits.
    pub fn finding_status(self) -> Option<u16> {
        match self {
            ProbeOutcome::Success(200) => Some(200),
            _ => None,
        }
    }

    /// Status code of any completed exchange, 4xx/5xx included.
    pub fn status(self) -> Option<u16> {
        match self {
            ProbeOutcome::Success(code) | ProbeOutcome::NotFound(code) => Some(code),
            ProbeOutcome::Unreachable => None,
        }
    }
}

/// Check whether a resolved address exists with a single HEAD request (no
/// body transfer). Transport errors never escape this function: connection
/// refusals, DNS failures and timeouts all collapse to `Unreachable`. No
/// retries; one failed attempt is final for the address.
pub async fn probe_url(client: &Client, url: &str, timeout_secs: u64) -> ProbeOutcome {
    let resp = tokio::time::timeout(
        Duration::from_secs(timeout_secs),
        client.head(url).send(),
    )
    .await;

    match resp {
        Ok(Ok(response)) => {
            let code = response.status().as_u16();
            if (200..300).contains(&code) {
                ProbeOutcome::Success(code)
            } else {
                ProbeOutcome::NotFound(code)
            }
        }
        Ok(Err(e)) => {
            tracing::debug!("probe failed for {}: {}", url, e);
            ProbeOutcome::Unreachable
        }
        Err(_) => {
            tracing::debug!("probe timed out for {}", url);
            ProbeOutcome::Unreachable
        }
    }
}
