//! Contains the record storage primitives: MemoryCollection and SpilledPartial

/// Defines MemoryCollection and assorted functions
pub mod memory;

/// Defines SpilledPartial, on-disk storage for partial aggregations
pub mod spill;
