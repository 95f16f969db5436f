use std::collections::BTreeMap;

use crate::models::mood::score_of;
use crate::models::{MonthlySeries, MoodLog, YearMonth};

/// Upper bound on non-blank x-axis labels before sampling kicks in.
pub const MAX_LABELS: usize = 10;

/// Build the chart series and score distribution for one month.
///
/// Entries are matched on the `YYYY-MM` prefix of their key and taken in
/// ascending key order. Keys are not validated here: a malformed key
/// yields a best-effort label and an unknown symbol scores 0.
pub fn compute(mood_log: &MoodLog, year: i32, month: u32) -> MonthlySeries {
    let prefix = YearMonth { year, month }.prefix();

    // BTreeMap iteration is already ascending by key.
    let entries: Vec<(&String, &String)> = mood_log
        .iter()
        .filter(|(date, _)| date.starts_with(&prefix))
        .collect();

    let n = entries.len();
    if n == 0 {
        return MonthlySeries::default();
    }

    let step = n.div_ceil(MAX_LABELS).max(1);

    let labels = entries
        .iter()
        .enumerate()
        .map(|(i, (date, _))| {
            if i % step == 0 {
                day_label(date)
            } else {
                String::new()
            }
        })
        .collect();

    let values: Vec<i32> = entries.iter().map(|(_, symbol)| score_of(symbol)).collect();

    let mut counts: BTreeMap<i32, usize> = BTreeMap::new();
    for value in &values {
        *counts.entry(*value).or_insert(0) += 1;
    }

    // Each bucket is rounded on its own (half away from zero), so the
    // total can drift from 100 by up to one point per bucket.
    let percentages = counts
        .into_iter()
        .map(|(value, count)| {
            let pct = (count as f64 / n as f64 * 100.0).round() as u32;
            (value, pct)
        })
        .collect();

    MonthlySeries {
        labels,
        values,
        percentages,
    }
}

/// Day-of-month of a date key without zero padding ("2024-03-05" → "5").
///
/// Reads the leading integer from the ninth character onward, ignoring
/// whatever follows it. Keys with no digits there label as "NaN".
fn day_label(date: &str) -> String {
    let rest: String = date.chars().skip(8).collect();
    let rest = rest.trim_start();

    let (negative, digits_start) = match rest.chars().next() {
        Some('-') => (true, &rest[1..]),
        Some('+') => (false, &rest[1..]),
        _ => (false, rest),
    };

    let digits: String = digits_start
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    if digits.is_empty() {
        return "NaN".to_string();
    }

    let trimmed = digits.trim_start_matches('0');
    if trimmed.is_empty() {
        "0".to_string()
    } else if negative {
        format!("-{}", trimmed)
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn log(entries: &[(&str, &str)]) -> MoodLog {
        entries
            .iter()
            .map(|(d, m)| (d.to_string(), m.to_string()))
            .collect()
    }

    fn full_month(days: u32) -> MoodLog {
        (1..=days)
            .map(|d| (format!("2024-03-{:02}", d), "🙂".to_string()))
            .collect()
    }

    fn percent_total(series: &MonthlySeries) -> u32 {
        series.percentages.values().sum()
    }

    fn visible_labels(series: &MonthlySeries) -> usize {
        series.labels.iter().filter(|l| !l.is_empty()).count()
    }

    #[test]
    fn three_days_in_march() {
        let moods = log(&[
            ("2024-03-01", "😀"),
            ("2024-03-02", "😐"),
            ("2024-03-15", "😢"),
        ]);
        let series = compute(&moods, 2024, 3);

        assert_eq!(series.values, vec![5, 3, 1]);
        assert_eq!(series.labels, vec!["1", "2", "15"]);
        assert_eq!(
            series.percentages,
            BTreeMap::from([(5, 33), (3, 33), (1, 33)])
        );
        assert_eq!(percent_total(&series), 99);
    }

    #[test]
    fn unknown_symbol_scores_zero() {
        let moods = log(&[("2024-03-05", "🤔")]);
        let series = compute(&moods, 2024, 3);

        assert_eq!(series.values, vec![0]);
        assert_eq!(series.labels, vec!["5"]);
        assert_eq!(series.percentages, BTreeMap::from([(0, 100)]));
    }

    #[test]
    fn empty_month_yields_empty_series() {
        let moods = log(&[("2024-02-10", "😀")]);
        let series = compute(&moods, 2024, 3);

        assert!(series.labels.is_empty());
        assert!(series.values.is_empty());
        assert!(series.percentages.is_empty());
        assert_eq!(compute(&MoodLog::new(), 2024, 3), MonthlySeries::default());
    }

    #[test]
    fn neighbouring_months_are_excluded() {
        let moods = log(&[
            ("2024-02-28", "😢"),
            ("2024-02-29", "😢"),
            ("2024-03-10", "😀"),
            ("2024-04-01", "😢"),
            ("2023-03-10", "😢"),
        ]);
        let series = compute(&moods, 2024, 3);

        assert_eq!(series.values, vec![5]);
        assert_eq!(series.labels, vec!["10"]);
    }

    #[test]
    fn entries_come_out_in_date_order() {
        let moods = log(&[
            ("2024-03-20", "😢"),
            ("2024-03-02", "😀"),
            ("2024-03-11", "😐"),
        ]);
        let series = compute(&moods, 2024, 3);

        assert_eq!(series.labels, vec!["2", "11", "20"]);
        assert_eq!(series.values, vec![5, 3, 1]);
    }

    #[test]
    fn up_to_ten_days_keeps_every_label() {
        let series = compute(&full_month(10), 2024, 3);
        assert_eq!(visible_labels(&series), 10);
        assert!(series.labels.iter().all(|l| !l.is_empty()));
    }

    #[test]
    fn eleven_days_samples_every_other_label() {
        let series = compute(&full_month(11), 2024, 3);

        assert_eq!(series.values.len(), 11);
        assert_eq!(series.labels.len(), 11);
        assert_eq!(
            series.labels,
            vec!["1", "", "3", "", "5", "", "7", "", "9", "", "11"]
        );
    }

    #[test]
    fn sampling_keeps_ceil_n_over_step_labels() {
        for n in 1..=31u32 {
            let series = compute(&full_month(n), 2024, 3);
            let n = n as usize;
            let step = n.div_ceil(MAX_LABELS).max(1);

            assert_eq!(series.labels.len(), n);
            assert_eq!(series.values.len(), n);
            assert_eq!(visible_labels(&series), n.div_ceil(step), "n = {}", n);
            assert_eq!(series.labels[0], "1");
        }
    }

    #[test]
    fn thirty_one_days_uses_step_four() {
        let series = compute(&full_month(31), 2024, 3);
        let kept: Vec<&str> = series
            .labels
            .iter()
            .filter(|l| !l.is_empty())
            .map(|l| l.as_str())
            .collect();
        assert_eq!(kept, vec!["1", "5", "9", "13", "17", "21", "25", "29"]);
    }

    #[test]
    fn percentage_drift_is_bounded_by_bucket_count() {
        let symbols = ["😀", "🙂", "😐", "😔", "😢", "🤔"];
        for n in 1..=31u32 {
            let moods: MoodLog = (1..=n)
                .map(|d| {
                    let symbol = symbols[(d as usize * 7) % symbols.len()];
                    (format!("2024-03-{:02}", d), symbol.to_string())
                })
                .collect();
            let series = compute(&moods, 2024, 3);
            let buckets = series.percentages.len() as i64;
            let drift = (percent_total(&series) as i64 - 100).abs();
            assert!(drift <= buckets, "n = {}, drift = {}", n, drift);
        }
    }

    #[test]
    fn halves_round_away_from_zero() {
        // 1 of 8 days is exactly 12.5%.
        let mut moods = full_month(7);
        moods.insert("2024-03-08".to_string(), "😀".to_string());
        let series = compute(&moods, 2024, 3);

        assert_eq!(series.percentages.get(&5), Some(&13));
        assert_eq!(series.percentages.get(&4), Some(&88));
    }

    #[test]
    fn compute_is_idempotent() {
        let moods = log(&[("2024-03-01", "😀"), ("2024-03-09", "😔")]);
        assert_eq!(compute(&moods, 2024, 3), compute(&moods, 2024, 3));
    }

    #[test]
    fn malformed_keys_are_tolerated() {
        let moods = log(&[("2024-03-", "😀"), ("2024-03-7x", "🙂"), ("2024-03-00", "😐")]);
        let series = compute(&moods, 2024, 3);

        assert_eq!(series.labels, vec!["NaN", "0", "7"]);
        assert_eq!(series.values, vec![5, 3, 4]);
    }

    #[test]
    fn day_labels_drop_zero_padding() {
        assert_eq!(day_label("2024-03-05"), "5");
        assert_eq!(day_label("2024-03-31"), "31");
        assert_eq!(day_label("2024-03-10"), "10");
    }
}
