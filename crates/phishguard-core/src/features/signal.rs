//! The seven lexical signals, in feature-vector order.

use serde::Serialize;

use super::FEATURE_COUNT;

/// One lexical check on a URL. The discriminant is the signal's position in
/// the feature vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Signal {
    /// Character count of the URL.
    Length = 0,
    /// URL contains `@`.
    HasAt = 1,
    /// Number of `-` characters.
    HyphenCount = 2,
    /// URL does not start with `https`.
    NotHttps = 3,
    /// More dots than the configured maximum.
    ManySubdomains = 4,
    /// An IPv4 literal follows the scheme.
    IpHost = 5,
    /// URL contains a known link-shortener domain.
    Shortener = 6,
}

impl Signal {
    /// All signals in feature-vector order.
    pub const ALL: [Signal; FEATURE_COUNT] = [
        Signal::Length,
        Signal::HasAt,
        Signal::HyphenCount,
        Signal::NotHttps,
        Signal::ManySubdomains,
        Signal::IpHost,
        Signal::Shortener,
    ];

    /// Position of this signal in a [`super::FeatureVector`].
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            Signal::Length => "length",
            Signal::HasAt => "has_at",
            Signal::HyphenCount => "hyphen_count",
            Signal::NotHttps => "not_https",
            Signal::ManySubdomains => "many_subdomains",
            Signal::IpHost => "ip_host",
            Signal::Shortener => "shortener",
        }
    }

    /// Human-readable warning shown when this signal's explanation rule fires.
    pub fn warning(self) -> &'static str {
        match self {
            Signal::Length => "URL length is too long.",
            Signal::HasAt => "URL contains '@' symbol.",
            Signal::HyphenCount => "URL contains many hyphens.",
            Signal::NotHttps => "URL does not use HTTPS.",
            Signal::ManySubdomains => "URL contains multiple subdomains.",
            Signal::IpHost => "URL contains an IP address.",
            Signal::Shortener => "URL uses a shortening service.",
        }
    }
}

impl std::fmt::Display for Signal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_is_in_index_order() {
        for (i, signal) in Signal::ALL.iter().enumerate() {
            assert_eq!(signal.index(), i);
        }
    }

    #[test]
    fn names_are_unique() {
        let mut names: Vec<_> = Signal::ALL.iter().map(|s| s.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), FEATURE_COUNT);
    }
}
