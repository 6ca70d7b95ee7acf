//! Fuzzy matching over the cached catalog.
//!
//! Ranking policy lives entirely in this module: the UI hands the current
//! query and the catalog in, and gets parallel index/score vectors back.

use frizbee::{Config, match_indices, match_list};

use crate::catalog::AppRow;

/// Dataset size above which frizbee's prefilter pays for itself.
pub const PREFILTER_ENABLE_THRESHOLD: usize = 1_000;

/// Maximum number of rows handed to the results table.
pub const MAX_RENDERED_RESULTS: usize = 2_000;

/// Builds fuzzy matching options for the provided query and dataset size.
#[must_use]
pub fn config_for_query(query: &str, dataset_len: usize) -> Config {
    let mut config = Config {
        prefilter: dataset_len >= PREFILTER_ENABLE_THRESHOLD,
        ..Config::default()
    };

    let length = query.chars().count();
    let mut allowed_typos: u16 = match length {
        0 => 0,
        1 => 0,
        2..=4 => 1,
        5..=7 => 2,
        8..=12 => 3,
        _ => 4,
    };
    if let Ok(max_reasonable) = u16::try_from(length.saturating_sub(1)) {
        allowed_typos = allowed_typos.min(max_reasonable);
    }
    config.max_typos = Some(allowed_typos);
    config.sort = false;

    config
}

/// Rank catalog entries against `query`, keyed by each record's name.
///
/// Returns parallel index/score vectors ordered by descending score with the
/// catalog index as tie-break. An empty or whitespace-only query matches the
/// whole catalog in catalog order with zero scores.
#[must_use]
pub fn rank_names(query: &str, catalog: &[AppRow]) -> (Vec<usize>, Vec<u16>) {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        let limit = catalog.len().min(MAX_RENDERED_RESULTS);
        return ((0..limit).collect(), vec![0; limit]);
    }

    let config = config_for_query(trimmed, catalog.len());
    let haystacks: Vec<&str> = catalog.iter().map(|app| app.search_key()).collect();
    let mut ranked: Vec<(usize, u16)> = match_list(trimmed, &haystacks, &config)
        .into_iter()
        .filter(|entry| entry.score > 0)
        .map(|entry| (entry.index as usize, entry.score))
        .collect();
    ranked.sort_unstable_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    ranked.truncate(MAX_RENDERED_RESULTS);

    let mut indices = Vec::with_capacity(ranked.len());
    let mut scores = Vec::with_capacity(ranked.len());
    for (index, score) in ranked {
        indices.push(index);
        scores.push(score);
    }
    (indices, scores)
}

/// Create match indices for highlighting `text` against `needle`.
#[must_use]
pub fn highlight_for(needle: &str, config: &Config, text: &str) -> Option<Vec<usize>> {
    if text.is_empty() || needle.is_empty() {
        return None;
    }
    match_indices(needle, text, config).map(|m| m.indices)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_catalog() -> Vec<AppRow> {
        vec![
            AppRow::new("alpha", "/a"),
            AppRow::new("beta", "/b"),
            AppRow::new("gamma", "/g"),
        ]
    }

    #[test]
    fn empty_query_returns_the_catalog_in_order() {
        let catalog = sample_catalog();
        let (indices, scores) = rank_names("", &catalog);
        assert_eq!(indices, vec![0, 1, 2]);
        assert_eq!(scores, vec![0, 0, 0]);

        let (indices, _) = rank_names("   ", &catalog);
        assert_eq!(indices, vec![0, 1, 2]);
    }

    #[test]
    fn query_narrows_to_matching_names() {
        let catalog = sample_catalog();
        let (indices, scores) = rank_names("alp", &catalog);
        assert_eq!(indices, vec![0]);
        assert_eq!(scores.len(), 1);
        assert!(scores[0] > 0);
    }

    #[test]
    fn ranking_never_mutates_the_catalog() {
        let catalog = sample_catalog();
        let before = catalog.clone();
        let (indices, _) = rank_names("a", &catalog);
        assert_eq!(catalog, before);
        assert!(indices.iter().all(|&index| index < catalog.len()));
    }

    #[test]
    fn typo_budget_grows_with_query_length() {
        assert_eq!(config_for_query("a", 10).max_typos, Some(0));
        assert_eq!(config_for_query("abc", 10).max_typos, Some(1));
        assert_eq!(config_for_query("abcdef", 10).max_typos, Some(2));
    }

    #[test]
    fn prefilter_tracks_dataset_size() {
        assert!(config_for_query("query", PREFILTER_ENABLE_THRESHOLD).prefilter);
        assert!(!config_for_query("query", PREFILTER_ENABLE_THRESHOLD - 1).prefilter);
    }

    #[test]
    fn highlight_skips_empty_inputs() {
        let config = config_for_query("al", 3);
        assert!(highlight_for("", &config, "alpha").is_none());
        assert!(highlight_for("al", &config, "").is_none());
        let indices = highlight_for("al", &config, "alpha").unwrap();
        assert!(!indices.is_empty());
        assert!(indices.iter().all(|&index| index < "alpha".len()));
    }
}
