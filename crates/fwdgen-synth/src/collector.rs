//! Member Surface Collector.
//!
//! Walks a type and its base chain (most-derived outward) and returns every
//! eligible member in declaration order. Duplicate names across levels are
//! kept - overload deduplication is the analyzer's job, where the first
//! occurrence wins.

use fwdgen_model::limits::MAX_BASE_CHAIN_DEPTH;
use fwdgen_model::{Accessibility, Member, MemberKind, MethodSubkind, TypeArena, TypeId};

use crate::error::SynthError;

/// Whether a member may ever be forwarded: non-static, public, and for
/// methods an ordinary callable (not an accessor, constructor, or operator).
pub fn is_eligible(member: &Member) -> bool {
    if member.is_static() || member.accessibility != Accessibility::Public {
        return false;
    }
    match &member.kind {
        MemberKind::Method { subkind, .. } => *subkind == MethodSubkind::Ordinary,
        MemberKind::Property { .. } => true,
    }
}

/// Collect the eligible member surface of `type_id`, own members first, then
/// each base level in order. The walk is an explicit bounded loop; exceeding
/// the bound means the base chain has no reachable root.
pub fn collect_surface(arena: &TypeArena, type_id: TypeId) -> Result<Vec<&Member>, SynthError> {
    let mut surface = Vec::new();
    let mut current = Some(type_id);
    let mut depth = 0usize;

    while let Some(id) = current {
        depth += 1;
        if depth > MAX_BASE_CHAIN_DEPTH {
            let type_name = arena.get(type_id).map(|def| def.name.clone()).unwrap_or_default();
            return Err(SynthError::BaseChainTooDeep { type_name });
        }
        let Some(def) = arena.get(id) else {
            break;
        };
        surface.extend(def.members.iter().filter(|member| is_eligible(member)));
        current = def.base;
    }

    Ok(surface)
}
