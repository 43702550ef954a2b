//! Grouped-sum aggregation for the two chart series.

use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDate;

use board_core::models::{CategorySeries, TrendSeries};

/// Sum values by date. Keys come out strictly ascending; duplicate dates are
/// merged by summation.
pub fn sum_by_date(pairs: &[(NaiveDate, f64)]) -> TrendSeries {
    // BTreeMap keeps the keys sorted for free.
    let mut map: BTreeMap<NaiveDate, f64> = BTreeMap::new();
    for (date, value) in pairs {
        *map.entry(*date).or_insert(0.0) += value;
    }
    TrendSeries {
        points: map.into_iter().collect(),
    }
}

/// Sum values by category, ordered descending by summed value.
///
/// Accumulation happens in first-appearance order and the final sort is
/// `Vec::sort_by`, which is stable: categories with equal sums keep their
/// input relative order.
pub fn sum_by_category(pairs: &[(String, f64)]) -> CategorySeries {
    let mut order: Vec<String> = Vec::new();
    let mut sums: HashMap<String, f64> = HashMap::new();

    for (key, value) in pairs {
        if !sums.contains_key(key) {
            order.push(key.clone());
        }
        *sums.entry(key.clone()).or_insert(0.0) += value;
    }

    let mut points: Vec<(String, f64)> = order
        .into_iter()
        .map(|key| {
            let sum = sums[&key];
            (key, sum)
        })
        .collect();

    points.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

    CategorySeries { points }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    // ── sum_by_date ───────────────────────────────────────────────────────────

    #[test]
    fn test_trend_groups_and_sums_duplicates() {
        let pairs = vec![
            (date("2024-01-15"), 100.0),
            (date("2024-01-15"), 50.0),
            (date("2024-01-16"), 25.0),
        ];
        let series = sum_by_date(&pairs);

        assert_eq!(series.points.len(), 2);
        assert_eq!(series.points[0], (date("2024-01-15"), 150.0));
        assert_eq!(series.points[1], (date("2024-01-16"), 25.0));
    }

    #[test]
    fn test_trend_keys_strictly_ascending() {
        let pairs = vec![
            (date("2024-03-01"), 1.0),
            (date("2024-01-01"), 2.0),
            (date("2024-02-01"), 3.0),
            (date("2024-01-01"), 4.0),
        ];
        let series = sum_by_date(&pairs);

        let keys: Vec<NaiveDate> = series.points.iter().map(|(d, _)| *d).collect();
        assert_eq!(
            keys,
            vec![date("2024-01-01"), date("2024-02-01"), date("2024-03-01")]
        );
        // No duplicate keys survive.
        let mut deduped = keys.clone();
        deduped.dedup();
        assert_eq!(deduped, keys);
    }

    #[test]
    fn test_trend_empty() {
        let series = sum_by_date(&[]);
        assert!(series.is_empty());
        assert_eq!(series.total(), 0.0);
    }

    #[test]
    fn test_trend_total_matches_input_sum() {
        let pairs = vec![
            (date("2024-01-15"), 10.0),
            (date("2024-01-16"), 20.5),
            (date("2024-01-15"), 0.5),
        ];
        let series = sum_by_date(&pairs);
        assert!((series.total() - 31.0).abs() < 1e-9);
    }

    // ── sum_by_category ───────────────────────────────────────────────────────

    #[test]
    fn test_category_descending_by_sum() {
        let pairs = vec![
            ("A".to_string(), 30.0),
            ("B".to_string(), 10.0),
            ("C".to_string(), 20.0),
        ];
        let series = sum_by_category(&pairs);

        assert_eq!(
            series.points,
            vec![
                ("A".to_string(), 30.0),
                ("C".to_string(), 20.0),
                ("B".to_string(), 10.0),
            ]
        );
    }

    #[test]
    fn test_category_merges_repeated_keys() {
        let pairs = vec![
            ("Toys".to_string(), 5.0),
            ("Games".to_string(), 2.0),
            ("Toys".to_string(), 5.0),
        ];
        let series = sum_by_category(&pairs);

        assert_eq!(series.points[0], ("Toys".to_string(), 10.0));
        assert_eq!(series.points[1], ("Games".to_string(), 2.0));
    }

    #[test]
    fn test_category_ties_keep_input_order() {
        let pairs = vec![
            ("Zeta".to_string(), 10.0),
            ("Alpha".to_string(), 10.0),
            ("Mid".to_string(), 10.0),
        ];
        let series = sum_by_category(&pairs);

        let keys: Vec<&str> = series.points.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["Zeta", "Alpha", "Mid"]);
    }

    #[test]
    fn test_category_empty() {
        let series = sum_by_category(&[]);
        assert!(series.is_empty());
    }

    #[test]
    fn test_category_deterministic_across_runs() {
        let pairs = vec![
            ("A".to_string(), 1.0),
            ("B".to_string(), 1.0),
            ("C".to_string(), 2.0),
        ];
        let first = sum_by_category(&pairs);
        let second = sum_by_category(&pairs);
        assert_eq!(first, second);
    }
}
