use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Chart-ready view of one month of moods. Derived, never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlySeries {
    /// Day-of-month labels, blanked where sampling drops them.
    pub labels: Vec<String>,
    /// One score per logged day, in date order.
    pub values: Vec<i32>,
    /// Score → whole percent of logged days.
    pub percentages: BTreeMap<i32, u32>,
}

impl MonthlySeries {
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn average(&self) -> Option<f64> {
        if self.values.is_empty() {
            None
        } else {
            Some(self.values.iter().sum::<i32>() as f64 / self.values.len() as f64)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn average_of_empty_series_is_none() {
        assert_eq!(MonthlySeries::default().average(), None);
    }

    #[test]
    fn average_of_logged_days() {
        let series = MonthlySeries {
            labels: vec!["1".into(), "".into()],
            values: vec![5, 2],
            percentages: BTreeMap::from([(5, 50), (2, 50)]),
        };
        assert_eq!(series.average(), Some(3.5));
    }
}
