//! Centralized limits and thresholds for the synthesizer.
//!
//! Centralizing these values prevents duplicate definitions with
//! inconsistent values and documents the rationale for each limit.

/// Maximum number of levels walked when collecting a type's member surface or
/// building a host's inherited-member index.
///
/// Base chains are finite in any well-formed symbol model; a walk that
/// exceeds this bound means the model handed us a cycle or a chain with no
/// reachable root. That is the one malformed-input condition that aborts
/// synthesis for the affected host type (and only that host type).
pub const MAX_BASE_CHAIN_DEPTH: usize = 256;
