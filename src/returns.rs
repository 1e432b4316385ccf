// Synthetic index returns for the demo chart
//
// The product page plots "returns over time" for each index. There is no
// data pipeline behind it: every series is a cumulative sum of standard
// normal draws over a fixed monthly date range, regenerated on demand.

use chrono::{Months, NaiveDate};
use rand::Rng;
use rand_distr::StandardNormal;
use serde::{Deserialize, Serialize};

use crate::indices::IndexRegistry;

/// First month of the charted range (inclusive)
pub const SERIES_START: (i32, u32) = (2020, 1);

/// First month past the charted range (exclusive)
pub const SERIES_END: (i32, u32) = (2025, 1);

// ============================================================================
// SERIES TYPES
// ============================================================================

/// One charted point: month start date and cumulative return value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReturnPoint {
    pub date: NaiveDate,
    pub value: f64,
}

/// A full synthetic return series for one index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReturnSeries {
    pub index_name: String,
    pub points: Vec<ReturnPoint>,
}

// ============================================================================
// GENERATION
// ============================================================================

/// Monthly date axis shared by every series: 2020-01 up to but not
/// including 2025-01, one point per month start.
pub fn month_range() -> Vec<NaiveDate> {
    let start = NaiveDate::from_ymd_opt(SERIES_START.0, SERIES_START.1, 1)
        .expect("series start is a valid date");
    let end = NaiveDate::from_ymd_opt(SERIES_END.0, SERIES_END.1, 1)
        .expect("series end is a valid date");

    let mut dates = Vec::new();
    let mut current = start;
    while current < end {
        dates.push(current);
        current = current
            .checked_add_months(Months::new(1))
            .expect("month axis stays in range");
    }
    dates
}

/// Generate one synthetic series: cumulative sum of standard normal draws
pub fn generate_series<R: Rng>(index_name: &str, rng: &mut R) -> ReturnSeries {
    let mut cumulative = 0.0;
    let points = month_range()
        .into_iter()
        .map(|date| {
            let step: f64 = rng.sample(StandardNormal);
            cumulative += step;
            ReturnPoint {
                date,
                value: cumulative,
            }
        })
        .collect();

    ReturnSeries {
        index_name: index_name.to_string(),
        points,
    }
}

/// Generate a series for every index in the registry, in registry order
pub fn generate_all<R: Rng>(registry: &IndexRegistry, rng: &mut R) -> Vec<ReturnSeries> {
    registry
        .names()
        .into_iter()
        .map(|name| generate_series(name, rng))
        .collect()
}

// ============================================================================
// TESTS
// ============================================================================
