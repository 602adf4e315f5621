//! Lexical URL features.
//!
//! A URL maps to a fixed, ordered vector of seven signals (see [`Signal`]).
//! The same evaluation decides which explanation rules fire, so the model
//! input and the warnings shown to the user come from one place.

mod rules;
mod signal;

use once_cell::sync::Lazy;
use regex::Regex;

pub use rules::SignalRules;
pub use signal::Signal;

/// Number of features per URL.
pub const FEATURE_COUNT: usize = 7;

static IP_HOST: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"https?://\d+\.\d+\.\d+\.\d+").expect("Invalid regex pattern"));

/// Ordered feature values for one URL. Flags are 0.0 or 1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureVector([f64; FEATURE_COUNT]);

impl FeatureVector {
    pub fn new(values: [f64; FEATURE_COUNT]) -> Self {
        Self(values)
    }

    pub fn values(&self) -> &[f64; FEATURE_COUNT] {
        &self.0
    }

    pub fn get(&self, signal: Signal) -> f64 {
        self.0[signal.index()]
    }

    /// Values paired with their signal, in order.
    pub fn named(&self) -> impl Iterator<Item = (Signal, f64)> + '_ {
        Signal::ALL.iter().map(move |&s| (s, self.get(s)))
    }
}

/// Result of running every signal check on a URL.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    pub features: FeatureVector,
    /// Signals whose explanation rule fired, in feature order.
    pub fired: Vec<Signal>,
}

impl Evaluation {
    pub fn warnings(&self) -> Vec<&'static str> {
        self.fired.iter().map(|s| s.warning()).collect()
    }
}

fn flag(b: bool) -> f64 {
    if b {
        1.0
    } else {
        0.0
    }
}

/// Evaluates all signals for `url` under `rules`.
///
/// Never fails: empty or malformed input yields degenerate values (length 0,
/// no flags set besides `not_https`).
pub fn evaluate(url: &str, rules: &SignalRules) -> Evaluation {
    let length = url.chars().count();
    let has_at = url.contains('@');
    let hyphens = url.matches('-').count();
    let not_https = !url.starts_with("https");
    let many_subdomains = url.matches('.').count() > rules.max_dots;
    let ip_host = IP_HOST.is_match(url);
    let shortener = rules.is_shortened(url);

    let features = FeatureVector([
        length as f64,
        flag(has_at),
        hyphens as f64,
        flag(not_https),
        flag(many_subdomains),
        flag(ip_host),
        flag(shortener),
    ]);

    let checks = [
        (Signal::Length, length > rules.long_url_length),
        (Signal::HasAt, has_at),
        (Signal::HyphenCount, hyphens > rules.many_hyphens),
        (Signal::NotHttps, not_https),
        (Signal::ManySubdomains, many_subdomains),
        (Signal::IpHost, ip_host),
        (Signal::Shortener, shortener),
    ];
    let fired = checks
        .into_iter()
        .filter_map(|(signal, hit)| hit.then_some(signal))
        .collect();

    Evaluation { features, fired }
}

/// Feature vector for `url` under the default rules.
pub fn extract_features(url: &str) -> FeatureVector {
    evaluate(url, &SignalRules::default()).features
}
