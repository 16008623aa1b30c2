//! Synthesis engine for the fwdgen delegation synthesizer.
//!
//! Given a host type and its delegation-marked source members, this crate
//! collects the member surface of each source member's type, resolves the
//! attached forwarding directives into a candidate set, decides override
//! legality and overload deduplication against the host's inheritance chain,
//! and drives the emitter to one aggregate declaration body per host type.
//!
//! The engine is a pure function of its inputs: the read-only
//! [`TypeArena`](fwdgen_model::TypeArena) snapshot, the host type, and its
//! source members. It holds no state across runs; callers may process
//! independent host types in parallel.

pub mod error;
pub use error::SynthError;

pub mod collector;
pub use collector::{collect_surface, is_eligible};

pub mod resolver;
pub use resolver::{Candidate, resolve_directives};

pub mod analyzer;
pub use analyzer::{Outcome, analyze};

pub mod synthesize;
pub use synthesize::{build_inherited_index, synthesize, synthesize_all};

#[cfg(test)]
mod tests;
