// ReplicaPro - Core Library
// Index replication demo: static instrument/index catalogs, the allocation
// calculator, and synthetic return series for the chart.
// Exposed for use by the CLI demo, the API server, and tests.

pub mod allocation;
pub mod indices;
pub mod instruments;
pub mod returns;

// Re-export commonly used types
pub use allocation::{
    compute, compute_request, AllocationError, AllocationLine, AllocationRequest,
    AllocationResult,
};
pub use indices::{IndexProfile, IndexRegistry, InstrumentWeight};
pub use instruments::{Instrument, InstrumentRegistry};
pub use returns::{generate_all, generate_series, month_range, ReturnPoint, ReturnSeries};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
