use crate::processor::GameRecord;
use std::collections::HashSet;
use strsim::sorensen_dice;
use tracing::debug;

/// Dice's coefficient over character bigrams, whitespace ignored.
/// 1.0 for identical strings, 0.0 when no bigram is shared.
pub fn similarity(query: &str, title: &str) -> f64 {
    sorensen_dice(query, title)
}

/// Picks the candidate whose title is closest to `query`.
///
/// A lone candidate wins unconditionally. Records sharing a title collapse
/// to the first one, and among equal top scores the earliest candidate wins.
pub fn best_match<'a>(query: &str, candidates: &'a [GameRecord]) -> Option<&'a GameRecord> {
    match candidates {
        [] => return None,
        [only] => return Some(only),
        _ => {}
    }

    let mut seen = HashSet::with_capacity(candidates.len());
    let mut best: Option<(&GameRecord, f64)> = None;

    for candidate in candidates {
        if !seen.insert(candidate.title.as_str()) {
            continue;
        }

        let score = similarity(query, &candidate.title);
        debug!("'{}' vs '{}': {:.3}", query, candidate.title, score);

        if best.map_or(true, |(_, top)| score > top) {
            best = Some((candidate, score));
        }
    }

    best.map(|(record, _)| record)
}
