use std::fs;
use std::path::Path;

use crate::crawl::collector::Finding;

/// Write discoveries as flat text: a header line, then one address per line
/// in discovery order.
pub fn write_findings(path: &Path, findings: &[Finding]) -> anyhow::Result<()> {
    let mut lines = Vec::with_capacity(findings.len() + 1);
    lines.push("Found directories:".to_string());
    for finding in findings {
        lines.push(finding.url.clone());
    }
    fs::write(path, lines.join("\n"))?;
    Ok(())
}
