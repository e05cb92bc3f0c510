use std::path::Path;

use anyhow::Context;

/// Common directory names probed when the user supplies no wordlist file.
pub fn default_wordlist() -> Vec<String> {
    [
        "admin", "backup", "bin", "config", "data", "database", "doc", "docs",
        "download", "ftp", "files", "images", "img", "include", "inc", "js",
        "lib", "log", "logs", "media", "old", "secret", "secure", "src",
        "static", "temp", "test", "tmp", "upload", "uploads", "var", "web",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

/// Load candidates from a newline-delimited file. Lines are trimmed and
/// blank lines dropped. A read failure here is fatal to the crawl.
pub fn load_wordlist(path: &Path) -> anyhow::Result<Vec<String>> {
    let data = std::fs::read_to_string(path)
        .with_context(|| format!("could not read wordlist file {}", path.display()))?;
    Ok(data
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect())
}

/// Expand every name into its bare and trailing-slash forms. Servers often
/// answer the two differently; candidates that end up resolving to the same
/// address are collapsed later by the dedup ledger.
pub fn expand_candidates(words: &[String]) -> Vec<String> {
    let mut out = Vec::with_capacity(words.len() * 2);
    for word in words {
        out.push(word.clone());
        out.push(format!("{}/", word));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_list_covers_common_names() {
        let words = default_wordlist();
        assert_eq!(words.len(), 32);
        assert!(words.iter().any(|w| w == "admin"));
        assert!(words.iter().any(|w| w == "backup"));
    }

    #[test]
    fn expansion_doubles_every_word() {
        let words = vec!["admin".to_string(), "logs".to_string()];
        let expanded = expand_candidates(&words);
        assert_eq!(
            expanded,
            vec!["admin", "admin/", "logs", "logs/"]
        );
    }

    #[test]
    fn wordlist_file_is_trimmed_and_blanks_dropped() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "  admin  ").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "backup").unwrap();
        writeln!(file, "   ").unwrap();

        let words = load_wordlist(file.path()).unwrap();
        assert_eq!(words, vec!["admin", "backup"]);
    }

    #[test]
    fn missing_wordlist_file_is_an_error() {
        let err = load_wordlist(Path::new("/no/such/wordlist.txt")).unwrap_err();
        assert!(err.to_string().contains("wordlist"));
    }
}
