// Index profiles - the benchmarks the product claims to replicate
//
// Each profile carries the marketing description, the display-only
// replication figures (tracking error, trading costs) and the fixed
// per-instrument weights used by the allocation calculator.
//
// Everything here is hard-coded at startup and never mutated. Weights for
// a profile do not have to sum to 1 (leverage is allowed).

use serde::{Deserialize, Serialize};

// ============================================================================
// WEIGHTS
// ============================================================================

/// One (instrument code, weight) entry of a replication portfolio.
///
/// Stored as a vector entry rather than a map key so the profile keeps its
/// definition order, which the demo page mirrors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstrumentWeight {
    pub code: String,
    pub weight: f64,
}

impl InstrumentWeight {
    pub fn new(code: &str, weight: f64) -> Self {
        InstrumentWeight {
            code: code.to_string(),
            weight,
        }
    }
}

// ============================================================================
// INDEX PROFILE
// ============================================================================

/// A replicable index: name, marketing copy, headline figures and the fixed
/// instrument weights of its replication portfolio.
///
/// Tracking error and trading costs are display-only constants carried over
/// from the product copy; nothing in this crate computes them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexProfile {
    pub name: String,
    pub description: String,
    pub tracking_error: f64,
    pub trading_costs: f64,
    pub weights: Vec<InstrumentWeight>,
}

impl IndexProfile {
    /// Weight for a given instrument code, if the profile holds it
    pub fn weight_for(&self, code: &str) -> Option<f64> {
        self.weights
            .iter()
            .find(|w| w.code == code)
            .map(|w| w.weight)
    }

    /// Sum of all weights (can exceed 1.0 for leveraged profiles)
    pub fn total_weight(&self) -> f64 {
        self.weights.iter().map(|w| w.weight).sum()
    }
}

// ============================================================================
// INDEX REGISTRY
// ============================================================================

/// Registry of the 5 recognized indices.
///
/// This is the closed set the selection boundary validates against; any name
/// outside it is rejected before the calculator runs.
pub struct IndexRegistry {
    profiles: Vec<IndexProfile>,
}

impl IndexRegistry {
    /// Create the registry with the 5 known indices
    pub fn new() -> Self {
        IndexRegistry {
            profiles: vec![
                IndexProfile {
                    name: "MSCI World AC".to_string(),
                    description: "In order to replicate the MSCI World AC, we utilize a diversified portfolio of futures contracts across various asset classes.".to_string(),
                    tracking_error: 1.23,
                    trading_costs: 0.45,
                    weights: vec![
                        InstrumentWeight::new("RX1", 0.10),
                        InstrumentWeight::new("CO1", 0.05),
                        InstrumentWeight::new("DU1", 0.10),
                        InstrumentWeight::new("ES1", 0.20),
                        InstrumentWeight::new("GC1", 0.05),
                        InstrumentWeight::new("NQ1", 0.15),
                        InstrumentWeight::new("TP1", 0.05),
                        InstrumentWeight::new("TU2", 0.10),
                        InstrumentWeight::new("TY1", 0.10),
                        InstrumentWeight::new("VG1", 0.10),
                    ],
                },
                IndexProfile {
                    name: "BB Global Bond Agg".to_string(),
                    description: "To replicate the BB Global Bond Agg index, we focus on fixed-income futures, ensuring a stable and low-risk investment.".to_string(),
                    tracking_error: 0.89,
                    trading_costs: 0.32,
                    weights: vec![
                        InstrumentWeight::new("RX1", 0.25),
                        InstrumentWeight::new("CO1", 0.05),
                        InstrumentWeight::new("DU1", 0.25),
                        InstrumentWeight::new("ES1", 0.05),
                        InstrumentWeight::new("GC1", 0.05),
                        InstrumentWeight::new("NQ1", 0.05),
                        InstrumentWeight::new("TP1", 0.05),
                        InstrumentWeight::new("TU2", 0.15),
                        InstrumentWeight::new("TY1", 0.10),
                        InstrumentWeight::new("VG1", 0.05),
                    ],
                },
                IndexProfile {
                    name: "HFRX Index".to_string(),
                    description: "Replicating the HFRX Index involves a sophisticated strategy using long and short positions in a variety of futures contracts.".to_string(),
                    tracking_error: 1.78,
                    trading_costs: 0.67,
                    weights: vec![
                        InstrumentWeight::new("RX1", 0.10),
                        InstrumentWeight::new("CO1", 0.10),
                        InstrumentWeight::new("DU1", 0.10),
                        InstrumentWeight::new("ES1", 0.15),
                        InstrumentWeight::new("GC1", 0.10),
                        InstrumentWeight::new("NQ1", 0.10),
                        InstrumentWeight::new("TP1", 0.10),
                        InstrumentWeight::new("TU2", 0.10),
                        InstrumentWeight::new("TY1", 0.10),
                        InstrumentWeight::new("VG1", 0.05),
                    ],
                },
                IndexProfile {
                    name: "Monster Index 1".to_string(),
                    description: "The Monster Index 1 is a comprehensive blend of equities, bonds, and alternative investments, replicated using a mix of futures contracts with weights [0.3, 0.2, 0.5].".to_string(),
                    tracking_error: 2.34,
                    trading_costs: 0.89,
                    weights: vec![
                        InstrumentWeight::new("RX1", 0.15),
                        InstrumentWeight::new("CO1", 0.10),
                        InstrumentWeight::new("DU1", 0.10),
                        InstrumentWeight::new("ES1", 0.10),
                        InstrumentWeight::new("GC1", 0.10),
                        InstrumentWeight::new("NQ1", 0.10),
                        InstrumentWeight::new("TP1", 0.05),
                        InstrumentWeight::new("TU2", 0.10),
                        InstrumentWeight::new("TY1", 0.10),
                        InstrumentWeight::new("VG1", 0.10),
                    ],
                },
                IndexProfile {
                    name: "Monster Index 2".to_string(),
                    description: "The Monster Index 2 is another blend of equities, bonds, and alternative investments, replicated using a mix of futures contracts with weights [0.4, 0.1, 0.5].".to_string(),
                    tracking_error: 2.50,
                    trading_costs: 0.95,
                    weights: vec![
                        InstrumentWeight::new("RX1", 0.20),
                        InstrumentWeight::new("CO1", 0.05),
                        InstrumentWeight::new("DU1", 0.15),
                        InstrumentWeight::new("ES1", 0.10),
                        InstrumentWeight::new("GC1", 0.05),
                        InstrumentWeight::new("NQ1", 0.10),
                        InstrumentWeight::new("TP1", 0.05),
                        InstrumentWeight::new("TU2", 0.10),
                        InstrumentWeight::new("TY1", 0.10),
                        InstrumentWeight::new("VG1", 0.10),
                    ],
                },
            ],
        }
    }

    /// All profiles in definition order
    pub fn all(&self) -> &[IndexProfile] {
        &self.profiles
    }

    /// Names of all recognized indices, in definition order
    pub fn names(&self) -> Vec<&str> {
        self.profiles.iter().map(|p| p.name.as_str()).collect()
    }

    /// Find a profile by index name (exact match)
    pub fn find_by_name(&self, name: &str) -> Option<&IndexProfile> {
        self.profiles.iter().find(|p| p.name == name)
    }

    /// Whether a name belongs to the recognized index set
    pub fn contains(&self, name: &str) -> bool {
        self.find_by_name(name).is_some()
    }

    /// Number of registered indices
    pub fn count(&self) -> usize {
        self.profiles.len()
    }

    /// Test-only hook to extend the closed set with a synthetic profile
    #[cfg(test)]
    pub(crate) fn push_for_tests(&mut self, profile: IndexProfile) {
        self.profiles.push(profile);
    }
}

impl Default for IndexRegistry {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_has_five_indices() {
        let registry = IndexRegistry::new();

        assert_eq!(registry.count(), 5);
        assert_eq!(
            registry.names(),
            vec![
                "MSCI World AC",
                "BB Global Bond Agg",
                "HFRX Index",
                "Monster Index 1",
                "Monster Index 2",
            ]
        );
    }

    #[test]
    fn test_every_profile_weights_all_ten_contracts() {
        let registry = IndexRegistry::new();

        for profile in registry.all() {
            assert_eq!(profile.weights.len(), 10, "profile {}", profile.name);
            for w in &profile.weights {
                assert!(w.weight >= 0.0, "{} {}", profile.name, w.code);
            }
        }
    }

    #[test]
    fn test_find_by_name() {
        let registry = IndexRegistry::new();

        let hfrx = registry.find_by_name("HFRX Index");
        assert!(hfrx.is_some());
        assert_eq!(hfrx.unwrap().tracking_error, 1.78);

        assert!(registry.find_by_name("hfrx index").is_none());
        assert!(registry.find_by_name("Nonexistent Index").is_none());
    }

    #[test]
    fn test_weight_for() {
        let registry = IndexRegistry::new();
        let msci = registry.find_by_name("MSCI World AC").unwrap();

        assert_eq!(msci.weight_for("ES1"), Some(0.20));
        assert_eq!(msci.weight_for("GC1"), Some(0.05));
        assert_eq!(msci.weight_for("ZZ9"), None);
    }

    #[test]
    fn test_total_weight() {
        let registry = IndexRegistry::new();

        let msci = registry.find_by_name("MSCI World AC").unwrap();
        assert!((msci.total_weight() - 1.0).abs() < 1e-9);

        // The bond profile is slightly levered, so the sum exceeds 1
        let bond = registry.find_by_name("BB Global Bond Agg").unwrap();
        assert!((bond.total_weight() - 1.05).abs() < 1e-9);
    }

    #[test]
    fn test_weights_keep_definition_order() {
        let registry = IndexRegistry::new();
        let monster = registry.find_by_name("Monster Index 2").unwrap();

        let codes: Vec<&str> = monster.weights.iter().map(|w| w.code.as_str()).collect();
        assert_eq!(
            codes,
            vec!["RX1", "CO1", "DU1", "ES1", "GC1", "NQ1", "TP1", "TU2", "TY1", "VG1"]
        );
    }
}
