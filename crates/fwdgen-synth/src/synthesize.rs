//! Synthesis Orchestrator.
//!
//! Drives collector, resolver, analyzer, and emitter over every source
//! member of a host type, in declaration order, and assembles one aggregate
//! declaration body. The `already_forwarded` set spans the whole host type:
//! later source members are deduplicated against earlier ones' output.
//!
//! One bad source member (unresolvable or malformed declared type) becomes a
//! localized inline comment and must not suppress forwarding for the others.

use fwdgen_emit::{GeneratedUnit, HostBuilder};
use fwdgen_model::limits::MAX_BASE_CHAIN_DEPTH;
use fwdgen_model::{HostType, Member, SignatureKey, SourceMember, TypeArena};
use rustc_hash::{FxHashMap, FxHashSet};
use tracing::{debug, trace};

use crate::analyzer::{Outcome, analyze};
use crate::collector::collect_surface;
use crate::error::SynthError;
use crate::resolver::resolve_directives;

/// Members visible from the host's base type chain, by name; the first hit
/// walking from the most-derived base outward wins. Used only to decide
/// override legality, never to trigger forwarding.
pub fn build_inherited_index<'a>(
    arena: &'a TypeArena,
    host: &HostType,
) -> Result<FxHashMap<String, &'a Member>, SynthError> {
    let mut index: FxHashMap<String, &'a Member> = FxHashMap::default();
    let mut current = host.base;
    let mut depth = 0usize;

    while let Some(id) = current {
        depth += 1;
        if depth > MAX_BASE_CHAIN_DEPTH {
            return Err(SynthError::BaseChainTooDeep {
                type_name: host.name.clone(),
            });
        }
        let Some(def) = arena.get(id) else {
            break;
        };
        for member in &def.members {
            index.entry(member.name.clone()).or_insert(member);
        }
        current = def.base;
    }

    Ok(index)
}

/// Synthesize the aggregate delegation body for one host type.
///
/// Returns `Ok(None)` when the host has no source members to process. The
/// only `Err` is a host base chain with no reachable root; failures scoped to
/// a single source member are reported as inline comments instead.
pub fn synthesize(
    arena: &TypeArena,
    host: &HostType,
    source_members: &[SourceMember],
) -> Result<Option<GeneratedUnit>, SynthError> {
    if source_members.is_empty() {
        return Ok(None);
    }
    debug!(host = %host.name, source_members = source_members.len(), "synthesizing delegation members");

    let host_index = build_inherited_index(arena, host)?;
    let mut builder = HostBuilder::new(host);
    let mut already_forwarded: FxHashSet<SignatureKey> = FxHashSet::default();

    for source in source_members {
        let Some(type_id) = arena.resolve(&source.declared_type) else {
            builder.push_comment(&format!(
                "could not resolve type '{}' of source member '{}'; skipped",
                source.declared_type, source.name
            ));
            continue;
        };
        let surface = match collect_surface(arena, type_id) {
            Ok(surface) => surface,
            Err(err) => {
                builder.push_comment(&format!(
                    "could not collect members of '{}' for source member '{}': {err}; skipped",
                    source.declared_type, source.name
                ));
                continue;
            }
        };

        for candidate in resolve_directives(source, &surface) {
            match analyze(&candidate, source.is_static, &host_index, &already_forwarded) {
                Outcome::Skip => {
                    trace!(member = %candidate.member.name, source = %source.name, "duplicate signature, skipped");
                }
                Outcome::Forward { is_override, note } => {
                    if let Some(note) = note {
                        builder.push_comment(&note);
                    }
                    already_forwarded.insert(candidate.member.signature_key());
                    if candidate.member.is_method() {
                        builder.forward_method(candidate.member, &source.name, source.is_static, is_override);
                    } else {
                        builder.forward_property(
                            candidate.member,
                            &source.name,
                            source.is_static,
                            is_override,
                            candidate.include_setter,
                        );
                    }
                }
            }
        }
    }

    Ok(Some(builder.finish()))
}

/// Convenience driver over independent host types. Each host is its own pure
/// synthesis; a failing host yields its error in place and leaves the others
/// unaffected.
pub fn synthesize_all(
    arena: &TypeArena,
    requests: &[(HostType, Vec<SourceMember>)],
) -> Vec<Result<Option<GeneratedUnit>, SynthError>> {
    requests
        .iter()
        .map(|(host, source_members)| synthesize(arena, host, source_members))
        .collect()
}
