pub mod http_probe;

pub use http_probe::probe_url;
pub use http_probe::ProbeOutcome;
