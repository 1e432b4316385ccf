// Allocation calculator - the one real computation in the product
//
// Given a recognized index name and an investment amount, splits the amount
// across the profile's instruments by their fixed weights. Pure function:
// no I/O, no state, same inputs always give the same outputs.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::indices::IndexRegistry;

// ============================================================================
// ERRORS
// ============================================================================

/// Caller errors from the allocation calculator.
///
/// Both are surfaced to the caller as-is, never defaulted away.
#[derive(Debug, Clone, PartialEq)]
pub enum AllocationError {
    /// The selected index name is not in the recognized set
    UnknownIndex(String),

    /// The investment amount is negative
    InvalidAmount(f64),
}

impl fmt::Display for AllocationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AllocationError::UnknownIndex(name) => {
                write!(f, "unknown index: {:?}", name)
            }
            AllocationError::InvalidAmount(amount) => {
                write!(f, "invalid investment amount: {}", amount)
            }
        }
    }
}

impl std::error::Error for AllocationError {}

// ============================================================================
// REQUEST / RESULT
// ============================================================================

/// A single allocation request: which index, how much money.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationRequest {
    pub index_name: String,
    pub amount: f64,
}

impl AllocationRequest {
    pub fn new(index_name: &str, amount: f64) -> Self {
        AllocationRequest {
            index_name: index_name.to_string(),
            amount,
        }
    }
}

/// Monetary amount assigned to one instrument.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationLine {
    pub code: String,
    pub amount: f64,
}

/// Result of one allocation: per-instrument amounts in profile order.
///
/// Amounts are kept at full precision; the display layer may truncate to two
/// decimals but the stored values are never rounded here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationResult {
    pub index_name: String,
    pub total_amount: f64,
    pub lines: Vec<AllocationLine>,
}

impl AllocationResult {
    /// Amount allocated to a given instrument code
    pub fn amount_for(&self, code: &str) -> Option<f64> {
        self.lines
            .iter()
            .find(|l| l.code == code)
            .map(|l| l.amount)
    }

    /// Sum of all allocated amounts
    pub fn allocated_total(&self) -> f64 {
        self.lines.iter().map(|l| l.amount).sum()
    }
}

// ============================================================================
// CALCULATOR
// ============================================================================

/// Compute the per-instrument allocation for `index_name` and `amount`.
///
/// For every (code, weight) in the matching profile, the allocated amount is
/// `amount * weight`. Lines come back in the profile's definition order.
///
/// Errors with [`AllocationError::UnknownIndex`] when the name is not in the
/// registry and [`AllocationError::InvalidAmount`] when the amount is
/// negative. A zero amount is valid and yields an all-zero result.
pub fn compute(
    index_name: &str,
    amount: f64,
    profiles: &IndexRegistry,
) -> Result<AllocationResult, AllocationError> {
    if amount < 0.0 {
        return Err(AllocationError::InvalidAmount(amount));
    }

    let profile = profiles
        .find_by_name(index_name)
        .ok_or_else(|| AllocationError::UnknownIndex(index_name.to_string()))?;

    let lines = profile
        .weights
        .iter()
        .map(|w| AllocationLine {
            code: w.code.clone(),
            amount: amount * w.weight,
        })
        .collect();

    Ok(AllocationResult {
        index_name: profile.name.clone(),
        total_amount: amount,
        lines,
    })
}

/// Convenience wrapper taking an [`AllocationRequest`]
pub fn compute_request(
    request: &AllocationRequest,
    profiles: &IndexRegistry,
) -> Result<AllocationResult, AllocationError> {
    compute(&request.index_name, request.amount, profiles)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indices::{IndexProfile, InstrumentWeight};

    const EPS: f64 = 1e-9;

    /// Registry with one three-instrument profile for focused scenarios
    fn small_registry() -> IndexRegistry {
        let mut registry = IndexRegistry::new();
        registry.push_for_tests(IndexProfile {
            name: "Mini Index".to_string(),
            description: "Three-contract test profile.".to_string(),
            tracking_error: 0.0,
            trading_costs: 0.0,
            weights: vec![
                InstrumentWeight::new("CO1", 0.10),
                InstrumentWeight::new("ES1", 0.20),
                InstrumentWeight::new("RX1", 0.70),
            ],
        });
        registry
    }

    #[test]
    fn test_concrete_three_contract_scenario() {
        let registry = small_registry();

        let result = compute("Mini Index", 1000.0, &registry).unwrap();

        assert_eq!(result.lines.len(), 3);
        assert!((result.amount_for("CO1").unwrap() - 100.0).abs() < EPS);
        assert!((result.amount_for("ES1").unwrap() - 200.0).abs() < EPS);
        assert!((result.amount_for("RX1").unwrap() - 700.0).abs() < EPS);
    }

    #[test]
    fn test_unknown_index_is_rejected() {
        let registry = IndexRegistry::new();

        let err = compute("Nonexistent Index", 1000.0, &registry).unwrap_err();
        assert_eq!(
            err,
            AllocationError::UnknownIndex("Nonexistent Index".to_string())
        );
    }

    #[test]
    fn test_negative_amount_is_rejected() {
        let registry = IndexRegistry::new();

        let err = compute("MSCI World AC", -50.0, &registry).unwrap_err();
        assert_eq!(err, AllocationError::InvalidAmount(-50.0));
    }

    #[test]
    fn test_negative_amount_checked_before_index_lookup() {
        let registry = IndexRegistry::new();

        // Both inputs invalid: the amount error wins
        let err = compute("Nonexistent Index", -1.0, &registry).unwrap_err();
        assert_eq!(err, AllocationError::InvalidAmount(-1.0));
    }

    #[test]
    fn test_zero_amount_yields_all_zero_result() {
        let registry = IndexRegistry::new();

        for name in registry.names() {
            let result = compute(name, 0.0, &registry).unwrap();
            assert_eq!(result.lines.len(), 10);
            for line in &result.lines {
                assert_eq!(line.amount, 0.0, "{} {}", name, line.code);
            }
        }
    }

    #[test]
    fn test_allocated_total_matches_amount_times_weight_sum() {
        let registry = IndexRegistry::new();

        for name in registry.names() {
            let profile = registry.find_by_name(name).unwrap();
            let result = compute(name, 12_345.67, &registry).unwrap();

            let expected = 12_345.67 * profile.total_weight();
            assert!(
                (result.allocated_total() - expected).abs() < 1e-6,
                "{}: {} vs {}",
                name,
                result.allocated_total(),
                expected
            );
        }
    }

    #[test]
    fn test_compute_is_deterministic() {
        let registry = IndexRegistry::new();

        let first = compute("HFRX Index", 777.77, &registry).unwrap();
        let second = compute("HFRX Index", 777.77, &registry).unwrap();

        // Bit-identical, not just approximately equal
        assert_eq!(first, second);
    }

    #[test]
    fn test_scaling_invariance() {
        let registry = IndexRegistry::new();

        let base = compute("Monster Index 1", 250.0, &registry).unwrap();
        let scaled = compute("Monster Index 1", 4.0 * 250.0, &registry).unwrap();

        for (b, s) in base.lines.iter().zip(scaled.lines.iter()) {
            assert_eq!(b.code, s.code);
            assert!((s.amount - 4.0 * b.amount).abs() < EPS);
        }
    }

    #[test]
    fn test_lines_follow_profile_order() {
        let registry = IndexRegistry::new();
        let profile = registry.find_by_name("BB Global Bond Agg").unwrap();

        let result = compute("BB Global Bond Agg", 500.0, &registry).unwrap();

        let result_codes: Vec<&str> = result.lines.iter().map(|l| l.code.as_str()).collect();
        let profile_codes: Vec<&str> =
            profile.weights.iter().map(|w| w.code.as_str()).collect();
        assert_eq!(result_codes, profile_codes);
    }

    #[test]
    fn test_full_precision_is_preserved() {
        let registry = small_registry();

        // 0.1 * 333.33 is not representable exactly in two decimals;
        // the result must carry the raw product
        let result = compute("Mini Index", 333.33, &registry).unwrap();
        assert_eq!(result.amount_for("CO1").unwrap(), 333.33 * 0.10);
    }

    #[test]
    fn test_compute_request_wrapper() {
        let registry = IndexRegistry::new();
        let request = AllocationRequest::new("MSCI World AC", 1000.0);

        let result = compute_request(&request, &registry).unwrap();
        assert!((result.amount_for("ES1").unwrap() - 200.0).abs() < EPS);
        assert!((result.amount_for("NQ1").unwrap() - 150.0).abs() < EPS);
    }

    #[test]
    fn test_result_serializes_in_profile_order() {
        let registry = small_registry();
        let result = compute("Mini Index", 1000.0, &registry).unwrap();

        // The API hands this straight to the page, so the JSON must keep
        // the profile's line order
        let json = serde_json::to_string(&result).unwrap();
        let co1 = json.find("CO1").unwrap();
        let es1 = json.find("ES1").unwrap();
        let rx1 = json.find("RX1").unwrap();
        assert!(co1 < es1);
        assert!(es1 < rx1);
    }

    #[test]
    fn test_error_display() {
        let unknown = AllocationError::UnknownIndex("Nope".to_string());
        assert_eq!(unknown.to_string(), "unknown index: \"Nope\"");

        let invalid = AllocationError::InvalidAmount(-50.0);
        assert_eq!(invalid.to_string(), "invalid investment amount: -50");
    }
}
