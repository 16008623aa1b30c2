//! Conflict & Override Analyzer.
//!
//! Decides, per candidate, whether it is a duplicate of something already
//! forwarded on this host and whether it may legally carry `override`.
//! A blind `override` would either fail to compile or silently change
//! dispatch semantics when signatures disagree, so every failed legality
//! check downgrades to a plain declaration plus an explanatory note.

use fwdgen_model::{Member, SignatureKey};
use rustc_hash::{FxHashMap, FxHashSet};

use crate::resolver::Candidate;

/// Analyzer verdict for one candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Identical signature already forwarded on this host.
    Skip,
    Forward {
        is_override: bool,
        /// Explanatory comment to emit before the declaration when an
        /// override was requested by name but turned out to be illegal.
        note: Option<String>,
    },
}

impl Outcome {
    fn forward(is_override: bool) -> Outcome {
        Outcome::Forward {
            is_override,
            note: None,
        }
    }

    fn downgrade(note: String) -> Outcome {
        Outcome::Forward {
            is_override: false,
            note: Some(note),
        }
    }
}

/// Decide the fate of `candidate` against the host's inherited-member index
/// and the set of signatures already forwarded for this host type.
pub fn analyze(
    candidate: &Candidate<'_>,
    source_is_static: bool,
    host_index: &FxHashMap<String, &Member>,
    already_forwarded: &FxHashSet<SignatureKey>,
) -> Outcome {
    let member = candidate.member;

    if already_forwarded.contains(&member.signature_key()) {
        return Outcome::Skip;
    }

    let Some(existing) = host_index.get(&member.name) else {
        return Outcome::forward(false);
    };

    // Statics never participate in override resolution.
    if source_is_static {
        return Outcome::forward(false);
    }

    if existing.is_method() != member.is_method() {
        return Outcome::downgrade(format!(
            "'{}' exists on the host's base type as a different member kind; forwarded without 'override'",
            member.name
        ));
    }

    if !existing.is_override_capable() {
        return Outcome::downgrade(format!(
            "'{}' on the host's base type is neither virtual nor an override; forwarded without 'override'",
            member.name
        ));
    }

    if member.is_method() && existing.param_types() != member.param_types() {
        return Outcome::downgrade(format!(
            "'{}' does not match the base type's parameter signature; forwarded without 'override'",
            member.name
        ));
    }

    Outcome::forward(true)
}
