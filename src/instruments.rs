// Instrument catalog - the futures contracts used as replication building blocks
//
// Ten contracts, defined once at startup, immutable afterwards.
// Codes follow the Bloomberg-style front-month convention (RX1, ES1, ...).

use serde::{Deserialize, Serialize};

// ============================================================================
// INSTRUMENT
// ============================================================================

/// A tradable futures contract identified by a short code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instrument {
    /// Short contract code, e.g. "RX1"
    pub code: String,

    /// Human-readable description shown on the demo page
    pub description: String,
}

impl Instrument {
    pub fn new(code: &str, description: &str) -> Self {
        Instrument {
            code: code.to_string(),
            description: description.to_string(),
        }
    }
}

// ============================================================================
// INSTRUMENT REGISTRY
// ============================================================================

/// Registry of all futures contracts the replication portfolios draw from.
///
/// Built once at startup from static definitions and read-only thereafter,
/// so no interior locking is needed.
pub struct InstrumentRegistry {
    instruments: Vec<Instrument>,
}

impl InstrumentRegistry {
    /// Create the registry with the 10 known contracts
    pub fn new() -> Self {
        InstrumentRegistry {
            instruments: vec![
                Instrument::new(
                    "RX1",
                    "Fixed-income security issued by the Federal Republic of Germany.",
                ),
                Instrument::new(
                    "CO1",
                    "Price of Brent crude oil in the financial markets.",
                ),
                Instrument::new(
                    "DU1",
                    "The German 2-year government bond, known as the \"Schatz.\"",
                ),
                Instrument::new(
                    "ES1",
                    "It represents a broad-based stock market index of 500 large companies listed on U.S. stock exchanges.",
                ),
                Instrument::new("GC1", "Price of gold."),
                Instrument::new("NQ1", "The Nasdaq 100 index."),
                Instrument::new("TP1", "It's associated with the Topix index."),
                Instrument::new("TU2", "It refers to the 2-year US Treasury bond."),
                Instrument::new("TY1", "10-years US Treasury bond."),
                Instrument::new("VG1", "Euro Stoxx 50 index."),
            ],
        }
    }

    /// All instruments in definition order
    pub fn all(&self) -> &[Instrument] {
        &self.instruments
    }

    /// Find an instrument by its code (exact match)
    pub fn find_by_code(&self, code: &str) -> Option<&Instrument> {
        self.instruments.iter().find(|i| i.code == code)
    }

    /// Whether a code belongs to the known contract set
    pub fn contains(&self, code: &str) -> bool {
        self.find_by_code(code).is_some()
    }

    /// Number of registered instruments
    pub fn count(&self) -> usize {
        self.instruments.len()
    }
}

impl Default for InstrumentRegistry {
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
    fn test_registry_has_ten_contracts() {
        let registry = InstrumentRegistry::new();
        assert_eq!(registry.count(), 10);
    }

    #[test]
    fn test_definition_order_is_stable() {
        let registry = InstrumentRegistry::new();
        let codes: Vec<&str> = registry.all().iter().map(|i| i.code.as_str()).collect();

        assert_eq!(
            codes,
            vec!["RX1", "CO1", "DU1", "ES1", "GC1", "NQ1", "TP1", "TU2", "TY1", "VG1"]
        );
    }

    #[test]
    fn test_find_by_code() {
        let registry = InstrumentRegistry::new();

        let gold = registry.find_by_code("GC1");
        assert!(gold.is_some());
        assert_eq!(gold.unwrap().description, "Price of gold.");

        // Lookup is exact, not case-insensitive
        assert!(registry.find_by_code("gc1").is_none());
        assert!(registry.find_by_code("ZZ9").is_none());
    }

    #[test]
    fn test_contains() {
        let registry = InstrumentRegistry::new();

        assert!(registry.contains("ES1"));
        assert!(registry.contains("TU2"));
        assert!(!registry.contains("ES2"));
        assert!(!registry.contains(""));
    }
}
