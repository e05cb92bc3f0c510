use std::time::Duration;

/// Runtime knobs for one crawl.
#[derive(Debug, Clone)]
pub struct CrawlConfig {
    /// Worker pool size.
    pub threads: usize,
    /// Pause each worker takes after every fresh probe.
    pub delay: Duration,
    /// HTTP timeout for a single probe, in seconds.
    pub timeout_secs: u64,
}

impl Default for CrawlConfig {
    fn default() -> Self {
        Self {
            threads: 10,
            delay: Duration::from_secs(1),
            timeout_secs: 10,
        }
    }
}
