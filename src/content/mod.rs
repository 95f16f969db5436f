pub mod challenges;
pub mod phrases;

use chrono::{DateTime, Datelike, NaiveDate, Utc};

pub use challenges::CHALLENGES;
pub use phrases::PHRASES;

/// Motivational phrase for `date`, rotating by day of year.
pub fn daily_phrase(date: NaiveDate) -> &'static str {
    PHRASES[date.ordinal() as usize % PHRASES.len()]
}

/// Index of today's creative challenge: whole days since `start`,
/// held on the last challenge once the list runs out.
pub fn challenge_index(start: DateTime<Utc>, now: DateTime<Utc>) -> usize {
    let days = (now - start).num_days().max(0) as usize;
    days.min(CHALLENGES.len() - 1)
}

pub fn daily_challenge(start: DateTime<Utc>, now: DateTime<Utc>) -> (usize, &'static str) {
    let idx = challenge_index(start, now);
    (idx, CHALLENGES[idx])
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    #[test]
    fn phrase_rotates_by_day_of_year() {
        let jan1 = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let jan2 = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
        assert_eq!(daily_phrase(jan1), PHRASES[1 % PHRASES.len()]);
        assert_eq!(daily_phrase(jan2), PHRASES[2 % PHRASES.len()]);
        assert_ne!(daily_phrase(jan1), daily_phrase(jan2));
    }

    #[test]
    fn challenge_counts_whole_days() {
        let start = Utc.with_ymd_and_hms(2024, 3, 1, 20, 0, 0).unwrap();
        assert_eq!(challenge_index(start, start), 0);
        assert_eq!(challenge_index(start, start + Duration::hours(23)), 0);
        assert_eq!(challenge_index(start, start + Duration::hours(25)), 1);
        assert_eq!(challenge_index(start, start + Duration::days(9)), 9);
    }

    #[test]
    fn challenge_is_clamped() {
        let start = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap();
        let far = start + Duration::days(10_000);
        assert_eq!(challenge_index(start, far), CHALLENGES.len() - 1);
        assert_eq!(challenge_index(start, start - Duration::days(3)), 0);

        let (idx, text) = daily_challenge(start, far);
        assert_eq!(text, CHALLENGES[idx]);
    }
}
