//! Source-trust heuristics.

use crate::constants::{FACTCHECK_TITLE_WEIGHT, TRUSTED_SOURCE_WEIGHT, WIRE_SERVICE_WEIGHT};

/// Outlets counted as trusted when they appear anywhere in a result link.
///
/// Matching is raw substring containment against the URL string, not host
/// parsing: "bbc.com" inside a path segment also counts. Kept that way on
/// purpose; the verdict thresholds were tuned against this matching.
pub const TRUSTED_SOURCES: &[&str] = &[
    "bbc.com",
    "reuters.com",
    "apnews.com",
    "snopes.com",
    "theguardian.com",
    "nytimes.com",
    "washingtonpost.com",
    "bbc.co.uk",
    "cnn.com",
    "forbes.com",
    "npr.org",
    "wsj.com",
    "time.com",
    "usatoday.com",
    "bloomberg.com",
    "thehill.com",
    "guardian.co.uk",
    "huffpost.com",
    "independent.co.uk",
    "scientificamerican.com",
    "wired.com",
    "nationalgeographic.com",
    "marketwatch.com",
    "businessinsider.com",
    "abcnews.go.com",
    "news.yahoo.com",
    "theverge.com",
    "techcrunch.com",
    "theatlantic.com",
    "axios.com",
    "cnbc.com",
    "newsweek.com",
    "latimes.com",
    "thetimes.co.uk",
    "sky.com",
    "reuters.uk",
    "thehindu.com",
    "straitstimes.com",
    "foreignpolicy.com",
    "dw.com",
    "indianexpress.com",
    "dailymail.co.uk",
    "smh.com.au",
    "mint.com",
    "livemint.com",
];

/// Returns `true` if `link` contains any allowlisted outlet substring.
pub fn is_trusted_source(link: &str) -> bool {
    TRUSTED_SOURCES.iter().any(|source| link.contains(source))
}

/// Hand-tuned credibility score for a single result, in `[0.0, 1.0]`.
///
/// The wire-service bonus stacks with the allowlist bonus (a plain BBC link
/// scores 0.8), and the factcheck bonus inspects the result title rather
/// than the link.
pub fn credibility_score(link: &str, title: &str) -> f32 {
    let mut score = 0.0;

    if is_trusted_source(link) {
        score += TRUSTED_SOURCE_WEIGHT;
    }

    if link.contains("bbc") || link.contains("reuters") {
        score += WIRE_SERVICE_WEIGHT;
    }

    if title.to_lowercase().contains("factcheck") {
        score += FACTCHECK_TITLE_WEIGHT;
    }

    score
}
