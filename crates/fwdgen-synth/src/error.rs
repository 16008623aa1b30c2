//! Error type for the synthesis engine.
//!
//! Almost nothing here is fatal: unsupported constructs, override-illegal
//! candidates, and unresolvable source-member types all become inline
//! comments in the output. The only error that aborts a host type is a base
//! chain with no reachable root - and it aborts exactly that host type.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SynthError {
    /// Walking a base chain exceeded
    /// [`limits::MAX_BASE_CHAIN_DEPTH`](fwdgen_model::limits::MAX_BASE_CHAIN_DEPTH):
    /// the symbol model handed us a cycle or a chain with no reachable root.
    BaseChainTooDeep { type_name: String },
}

impl fmt::Display for SynthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SynthError::BaseChainTooDeep { type_name } => {
                write!(f, "base type chain of '{type_name}' has no reachable root")
            }
        }
    }
}

impl std::error::Error for SynthError {}
