//! Member surface entries.
//!
//! A [`Member`] describes one method or property on a type, exactly as the
//! external symbol model reports it: name, accessibility, static/virtual
//! flags, parameter list with default-value literals, generic parameters,
//! return or value type. The synthesizer consumes these read-only.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Declared accessibility of a member, in decreasing visibility order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Accessibility {
    Public,
    Internal,
    Protected,
    Private,
}

impl Accessibility {
    /// Keyword rendering used in emitted declarations.
    pub fn keyword(self) -> &'static str {
        match self {
            Accessibility::Public => "public",
            Accessibility::Internal => "internal",
            Accessibility::Protected => "protected",
            Accessibility::Private => "private",
        }
    }
}

bitflags! {
    /// Modifier flags reported by the symbol model for a member.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    pub struct MemberFlags: u8 {
        const STATIC = 1 << 0;
        /// Declared `virtual` - may be overridden by derived types.
        const VIRTUAL = 1 << 1;
        /// Itself an `override` of a base member (still override-capable).
        const OVERRIDE = 1 << 2;
        const HAS_GETTER = 1 << 3;
        /// Property is an indexer. Indexers are never forwarded.
        const INDEXER = 1 << 4;
    }
}

/// Distinguishes ordinary callable methods from compiler-synthesized ones.
/// Only `Ordinary` methods are ever forwarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MethodSubkind {
    Ordinary,
    Constructor,
    /// `get_X`/`set_X` accessor methods backing a property.
    PropertyAccessor,
    Operator,
}

/// One formal parameter, with an optional default-value literal rendered
/// verbatim into generated declarations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Param {
    pub ty: String,
    pub name: String,
    pub default_value: Option<String>,
}

impl Param {
    pub fn new(ty: impl Into<String>, name: impl Into<String>) -> Self {
        Param {
            ty: ty.into(),
            name: name.into(),
            default_value: None,
        }
    }

    pub fn with_default(ty: impl Into<String>, name: impl Into<String>, default_value: impl Into<String>) -> Self {
        Param {
            ty: ty.into(),
            name: name.into(),
            default_value: Some(default_value.into()),
        }
    }
}

/// Kind-specific payload of a surface entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MemberKind {
    Method {
        subkind: MethodSubkind,
        /// `None` means the method returns void.
        return_type: Option<String>,
        params: SmallVec<[Param; 4]>,
        generic_params: Vec<String>,
    },
    Property {
        value_type: String,
        /// `None` means the property has no setter.
        setter_accessibility: Option<Accessibility>,
    },
}

/// One entry of a type's member surface, as reported by the symbol model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub name: String,
    pub accessibility: Accessibility,
    pub flags: MemberFlags,
    pub kind: MemberKind,
}

impl Member {
    /// An ordinary public instance method.
    pub fn method(name: impl Into<String>, return_type: Option<&str>, params: Vec<Param>) -> Self {
        Member {
            name: name.into(),
            accessibility: Accessibility::Public,
            flags: MemberFlags::empty(),
            kind: MemberKind::Method {
                subkind: MethodSubkind::Ordinary,
                return_type: return_type.map(str::to_string),
                params: params.into_iter().collect(),
                generic_params: Vec::new(),
            },
        }
    }

    /// A public read-only property.
    pub fn property(name: impl Into<String>, value_type: impl Into<String>) -> Self {
        Member {
            name: name.into(),
            accessibility: Accessibility::Public,
            flags: MemberFlags::HAS_GETTER,
            kind: MemberKind::Property {
                value_type: value_type.into(),
                setter_accessibility: None,
            },
        }
    }

    /// A public property with a setter of the given accessibility.
    pub fn property_with_setter(
        name: impl Into<String>,
        value_type: impl Into<String>,
        setter: Accessibility,
    ) -> Self {
        Member {
            name: name.into(),
            accessibility: Accessibility::Public,
            flags: MemberFlags::HAS_GETTER,
            kind: MemberKind::Property {
                value_type: value_type.into(),
                setter_accessibility: Some(setter),
            },
        }
    }

    pub fn with_flags(mut self, flags: MemberFlags) -> Self {
        self.flags |= flags;
        self
    }

    pub fn with_accessibility(mut self, accessibility: Accessibility) -> Self {
        self.accessibility = accessibility;
        self
    }

    pub fn with_generic_params(mut self, names: &[&str]) -> Self {
        if let MemberKind::Method { generic_params, .. } = &mut self.kind {
            *generic_params = names.iter().map(|n| n.to_string()).collect();
        }
        self
    }

    pub fn with_subkind(mut self, sub: MethodSubkind) -> Self {
        if let MemberKind::Method { subkind, .. } = &mut self.kind {
            *subkind = sub;
        }
        self
    }

    pub fn is_method(&self) -> bool {
        matches!(self.kind, MemberKind::Method { .. })
    }

    pub fn is_property(&self) -> bool {
        matches!(self.kind, MemberKind::Property { .. })
    }

    pub fn is_static(&self) -> bool {
        self.flags.contains(MemberFlags::STATIC)
    }

    pub fn is_indexer(&self) -> bool {
        self.flags.contains(MemberFlags::INDEXER)
    }

    /// Whether an `override` of this member is legal at all.
    pub fn is_override_capable(&self) -> bool {
        self.flags.intersects(MemberFlags::VIRTUAL | MemberFlags::OVERRIDE)
    }

    /// Ordered parameter types, empty for properties.
    pub fn param_types(&self) -> Vec<String> {
        match &self.kind {
            MemberKind::Method { params, .. } => params.iter().map(|p| p.ty.clone()).collect(),
            MemberKind::Property { .. } => Vec::new(),
        }
    }

    /// The key under which this member is deduplicated per host type.
    pub fn signature_key(&self) -> SignatureKey {
        match &self.kind {
            MemberKind::Method {
                return_type, params, ..
            } => SignatureKey::Method {
                name: self.name.clone(),
                param_types: params.iter().map(|p| p.ty.clone()).collect(),
                return_type: return_type.clone(),
            },
            MemberKind::Property { .. } => SignatureKey::Property {
                name: self.name.clone(),
            },
        }
    }
}

/// Deduplication key: name + ordered parameter types + return type for
/// methods, name alone for properties. Two candidates with the same key are
/// forwarded at most once per host type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SignatureKey {
    Method {
        name: String,
        param_types: Vec<String>,
        return_type: Option<String>,
    },
    Property {
        name: String,
    },
}
