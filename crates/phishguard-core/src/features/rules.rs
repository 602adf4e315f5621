use serde::{Deserialize, Serialize};

/// Thresholds and lists behind the lexical signals (`[signals]` in config.toml).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SignalRules {
    /// URLs longer than this many characters are flagged as too long.
    pub long_url_length: usize,
    /// More hyphens than this are flagged.
    pub many_hyphens: usize,
    /// More dots than this count as multiple subdomains.
    pub max_dots: usize,
    /// Substrings identifying link-shortening services.
    pub shorteners: Vec<String>,
}

impl Default for SignalRules {
    fn default() -> Self {
        Self {
            long_url_length: 75,
            many_hyphens: 3,
            max_dots: 2,
            shorteners: ["bit.ly", "goo.gl", "tinyurl", "ow.ly"]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}

impl SignalRules {
    pub fn is_shortened(&self, url: &str) -> bool {
        self.shorteners.iter().any(|s| url.contains(s.as_str()))
    }
}
