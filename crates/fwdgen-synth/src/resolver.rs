//! Directive Resolver.
//!
//! Partitions a collected member surface into the candidates a source
//! member's directives actually request. Whitelists match by name, so every
//! overload sharing a whitelisted name is selected; an empty whitelist means
//! "everything eligible minus the built-in blacklist".

use fwdgen_model::{Directive, Member, SignatureKey, SourceMember};
use indexmap::IndexMap;
use indexmap::map::Entry;
use tracing::trace;

/// One member requested for forwarding. `include_setter` only matters for
/// properties and is the OR of every contributing directive's setter flag.
#[derive(Debug, Clone, Copy)]
pub struct Candidate<'a> {
    pub member: &'a Member,
    pub include_setter: bool,
}

/// Resolve every directive on `source` against `surface` and union the
/// results. A member selected by several directives stays a single candidate;
/// first-occurrence order is preserved.
pub fn resolve_directives<'a>(source: &SourceMember, surface: &[&'a Member]) -> Vec<Candidate<'a>> {
    let mut selected: IndexMap<SignatureKey, Candidate<'a>> = IndexMap::new();

    for directive in &source.directives {
        let include_setter = matches!(
            directive,
            Directive::ForwardProperties {
                include_setter: true,
                ..
            }
        );
        for &member in surface {
            let requested = (member.is_method() && directive.requests_methods())
                || (member.is_property() && directive.requests_properties());
            if !requested || !directive.selects(&member.name) {
                continue;
            }
            match selected.entry(member.signature_key()) {
                Entry::Occupied(mut entry) => {
                    entry.get_mut().include_setter |= include_setter;
                }
                Entry::Vacant(entry) => {
                    entry.insert(Candidate {
                        member,
                        include_setter,
                    });
                }
            }
        }
    }

    trace!(
        source = %source.name,
        surface = surface.len(),
        candidates = selected.len(),
        "resolved forwarding directives"
    );
    selected.into_values().collect()
}
