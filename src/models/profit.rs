use serde::{Deserialize, Serialize};

use crate::utils::float_rounder;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfitPerNight {
    pub avg_night: f64,
    pub min_night: f64,
    pub max_night: f64,
}

impl ProfitPerNight {
    /// Every figure is rounded to two decimals on the way in
    pub fn new(avg: f64, min: f64, max: f64) -> Self {
        Self {
            avg_night: float_rounder::to_nearest(avg),
            min_night: float_rounder::to_nearest(min),
            max_night: float_rounder::to_nearest(max),
        }
    }
}

/// Outcome of the maximize operation: selected request ids in selection order,
/// their summed profit and the per-night figures of the selection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MaximizeProfit {
    pub request_ids: Vec<String>,
    pub total_profit: i64,
    #[serde(flatten)]
    pub profit_per_night: ProfitPerNight,
}

impl MaximizeProfit {
    pub fn new(request_ids: Vec<String>, total_profit: i64, profit_per_night: ProfitPerNight) -> Self {
        Self {
            request_ids,
            total_profit,
            profit_per_night,
        }
    }
}

/// Integer profit; fractional units are truncated, never rounded
pub fn profit(selling_rate: i32, margin: i32) -> i64 {
    (selling_rate as i64 * margin as i64) / 100
}

/// Profit per night, computed from the raw inputs rather than from [`profit`]
/// so truncation does not leak into the statistics
pub fn profit_per_night(selling_rate: i32, margin: i32, nights: i32) -> f64 {
    (selling_rate as f64 * margin as f64 / 100.0) / nights as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_profit_truncates() {
        assert_eq!(profit(200, 20), 40);
        assert_eq!(profit(50, 5), 2);
        assert_eq!(profit(156, 5), 7);
        assert_eq!(profit(231, 12), 27);
        assert_eq!(profit(i32::MAX, 100), i32::MAX as i64);
    }

    #[test]
    fn test_profit_per_night() {
        assert_eq!(profit_per_night(200, 20, 5), 8.0);
        assert_eq!(profit_per_night(50, 20, 1), 10.0);
        // 7.8 / 4, not the truncated 7 / 4
        assert_eq!(profit_per_night(156, 5, 4), 1.95);
    }

    #[test]
    fn test_profit_per_night_rounds() {
        let got = ProfitPerNight::new(8.289999, 7.999, 8.5849);
        assert_eq!(got, ProfitPerNight { avg_night: 8.29, min_night: 8.0, max_night: 8.58 });
    }

    #[test]
    fn test_maximize_profit_flattens_stats() {
        let got = MaximizeProfit::new(
            vec!["A".to_string(), "C".to_string()],
            140,
            ProfitPerNight::new(7.0, 4.0, 10.0),
        );

        assert_eq!(
            serde_json::to_value(got).unwrap(),
            json!({
                "request_ids": ["A", "C"],
                "total_profit": 140,
                "avg_night": 7.0,
                "min_night": 4.0,
                "max_night": 10.0
            })
        );
    }
}
