use std::fmt;

use serde::{Deserialize, Serialize};

/// Direction of a month-over-month change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Trend {
    #[serde(rename = "increment")]
    Increment,
    #[serde(rename = "decrement")]
    Decrement,
    #[serde(rename = "no change")]
    NoChange,
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Trend::Increment => "increment",
            Trend::Decrement => "decrement",
            Trend::NoChange => "no change",
        };
        f.write_str(label)
    }
}

/// Trend plus magnitude. `percentage` is never negative; direction lives in `trend`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrendResult {
    pub trend: Trend,
    pub percentage: f64,
}

impl TrendResult {
    fn no_change() -> Self {
        Self {
            trend: Trend::NoChange,
            percentage: 0.0,
        }
    }
}

/// Month-over-month trend between two counts.
///
/// A zero baseline is special-cased: anything above zero counts as a 100%
/// increment, zero to zero is no change.
pub fn calculate_trend_percentage(count_this_month: u64, count_last_month: u64) -> TrendResult {
    if count_last_month == 0 {
        return if count_this_month == 0 {
            TrendResult::no_change()
        } else {
            TrendResult {
                trend: Trend::Increment,
                percentage: 100.0,
            }
        };
    }

    // Subtract in integers before converting
    let percentage =
        count_this_month.abs_diff(count_last_month) as f64 / count_last_month as f64 * 100.0;

    match count_this_month.cmp(&count_last_month) {
        std::cmp::Ordering::Greater => TrendResult {
            trend: Trend::Increment,
            percentage,
        },
        std::cmp::Ordering::Less => TrendResult {
            trend: Trend::Decrement,
            percentage,
        },
        std::cmp::Ordering::Equal => TrendResult::no_change(),
    }
}
