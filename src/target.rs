use anyhow::Context;
use url::Url;

/// Parse the user-supplied base address, assuming http:// when no scheme
/// was given.
pub fn normalize_base_url(raw: &str) -> anyhow::Result<Url> {
    let with_scheme = if raw.starts_with("http://") || raw.starts_with("https://") {
        raw.to_string()
    } else {
        format!("http://{}", raw)
    };
    Url::parse(&with_scheme).with_context(|| format!("invalid target URL: {}", raw))
}

/// Join a candidate onto the base (RFC 3986 semantics). The joined string is
/// the unit of deduplication and the address handed to the probe.
pub fn resolve(base: &Url, candidate: &str) -> Option<String> {
    base.join(candidate).ok().map(|url| url.to_string())
}
