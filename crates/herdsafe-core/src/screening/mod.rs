//! Banned-substance screening for prescribed drug names.
//!
//! A name is flagged when it contains a banned substance outright, or when it
//! is a close misspelling of one (combined Jaro-Winkler/Levenshtein
//! similarity).

use serde::{Deserialize, Serialize};
use strsim::{jaro_winkler, normalized_levenshtein};

/// Substances prohibited in food-producing animals.
pub const BANNED_DRUGS: [&str; 5] = [
    "Chloramphenicol",
    "Nitrofurans",
    "Nitroimidazoles",
    "Phenylbutazone",
    "Stilbenes",
];

/// Minimum combined similarity for a fuzzy hit.
const FUZZY_THRESHOLD: f64 = 0.85;

/// A screening hit against the banned-substance table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BannedHit {
    /// The banned substance that matched
    pub banned: String,
    /// Similarity score (1.0 for a direct substring match)
    pub similarity: f64,
    /// Whether the match was a direct substring hit
    pub exact: bool,
}

/// Screen a drug name against the banned table.
///
/// Returns the strongest hit, or `None` if the name is clean. Matching is
/// case-insensitive; substring containment in either direction counts as
/// exact.
pub fn screen(name: &str) -> Option<BannedHit> {
    let query = name.trim().to_lowercase();
    if query.is_empty() {
        return None;
    }

    let mut best: Option<BannedHit> = None;
    for banned in BANNED_DRUGS {
        let banned_lower = banned.to_lowercase();

        if query.contains(&banned_lower) || banned_lower.contains(&query) {
            return Some(BannedHit {
                banned: banned.to_string(),
                similarity: 1.0,
                exact: true,
            });
        }

        let similarity = fuzzy_match(&query, &banned_lower);
        if similarity >= FUZZY_THRESHOLD
            && best.as_ref().map_or(true, |b| similarity > b.similarity)
        {
            best = Some(BannedHit {
                banned: banned.to_string(),
                similarity,
                exact: false,
            });
        }
    }

    best
}

/// Compute fuzzy string similarity using combined metrics.
fn fuzzy_match(a: &str, b: &str) -> f64 {
    // Jaro-Winkler handles typos, Levenshtein overall similarity; weight
    // Jaro-Winkler more heavily for its prefix sensitivity.
    let jw = jaro_winkler(a, b);
    let lev = normalized_levenshtein(a, b);

    jw * 0.6 + lev * 0.4
}
