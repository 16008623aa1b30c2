//! Forwarding directives and source members.
//!
//! The discovery layer resolves the forwarding annotations on a host type
//! once and hands the core plain directive values; no reflection happens
//! inside the synthesizer.

use serde::{Deserialize, Serialize};

/// Member names that are never forwarded when a directive carries no explicit
/// whitelist. An explicit whitelist bypasses this list.
pub const MEMBER_NAME_BLACKLIST: &[&str] = &["GetType"];

/// One forwarding request attached to a source member.
///
/// `names` is the optional whitelist: empty means "all eligible members,
/// minus [`MEMBER_NAME_BLACKLIST`]". Whitelists match by name, so every
/// overload sharing a whitelisted name is selected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Directive {
    /// Forward both methods and properties.
    ForwardAll { names: Vec<String> },
    /// Forward methods only.
    ForwardMethods { names: Vec<String> },
    /// Forward properties only, optionally with their setters.
    ForwardProperties { include_setter: bool, names: Vec<String> },
}

impl Directive {
    pub fn forward_all(names: &[&str]) -> Self {
        Directive::ForwardAll {
            names: names.iter().map(|n| n.to_string()).collect(),
        }
    }

    pub fn forward_methods(names: &[&str]) -> Self {
        Directive::ForwardMethods {
            names: names.iter().map(|n| n.to_string()).collect(),
        }
    }

    pub fn forward_properties(include_setter: bool, names: &[&str]) -> Self {
        Directive::ForwardProperties {
            include_setter,
            names: names.iter().map(|n| n.to_string()).collect(),
        }
    }

    pub fn requests_methods(&self) -> bool {
        matches!(self, Directive::ForwardAll { .. } | Directive::ForwardMethods { .. })
    }

    pub fn requests_properties(&self) -> bool {
        matches!(self, Directive::ForwardAll { .. } | Directive::ForwardProperties { .. })
    }

    pub fn whitelist(&self) -> &[String] {
        match self {
            Directive::ForwardAll { names }
            | Directive::ForwardMethods { names }
            | Directive::ForwardProperties { names, .. } => names,
        }
    }

    /// Whether this directive selects the given member name.
    pub fn selects(&self, name: &str) -> bool {
        let whitelist = self.whitelist();
        if whitelist.is_empty() {
            !MEMBER_NAME_BLACKLIST.contains(&name)
        } else {
            whitelist.iter().any(|n| n == name)
        }
    }
}

/// A host-owned field or property marked for delegation. Its name becomes the
/// receiver expression in generated bodies; its declared type's surface is
/// what gets forwarded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceMember {
    pub name: String,
    /// Name of the declared type, resolved against the arena at synthesis time.
    pub declared_type: String,
    pub is_static: bool,
    pub directives: Vec<Directive>,
}

impl SourceMember {
    pub fn new(name: impl Into<String>, declared_type: impl Into<String>, directives: Vec<Directive>) -> Self {
        SourceMember {
            name: name.into(),
            declared_type: declared_type.into(),
            is_static: false,
            directives,
        }
    }

    pub fn new_static(name: impl Into<String>, declared_type: impl Into<String>, directives: Vec<Directive>) -> Self {
        SourceMember {
            is_static: true,
            ..SourceMember::new(name, declared_type, directives)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_whitelist_excludes_blacklisted_names() {
        let directive = Directive::forward_all(&[]);
        assert!(directive.selects("Foo"));
        assert!(!directive.selects("GetType"));
    }

    #[test]
    fn test_explicit_whitelist_overrides_blacklist() {
        let directive = Directive::forward_methods(&["GetType"]);
        assert!(directive.selects("GetType"));
        assert!(!directive.selects("Foo"));
    }

    #[test]
    fn test_directive_kind_partition() {
        assert!(Directive::forward_all(&[]).requests_methods());
        assert!(Directive::forward_all(&[]).requests_properties());
        assert!(!Directive::forward_methods(&[]).requests_properties());
        assert!(!Directive::forward_properties(true, &[]).requests_methods());
    }
}
