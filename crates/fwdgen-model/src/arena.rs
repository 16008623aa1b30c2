//! The symbol-model snapshot.
//!
//! The discovery layer flattens whatever toolchain symbol model it sits on
//! into a [`TypeArena`]: one [`TypeDef`] per type, base links as `TypeId`s,
//! member surfaces as plain [`Member`] lists. The synthesizer only reads it.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::member::Member;

/// Index of a type definition in a [`TypeArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TypeId(pub u32);

/// Declaration kind of a type, used for the `partial <kind>` wrapper line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TypeKind {
    Class,
    Struct,
    Record,
}

impl TypeKind {
    pub fn keyword(self) -> &'static str {
        match self {
            TypeKind::Class => "class",
            TypeKind::Struct => "struct",
            TypeKind::Record => "record",
        }
    }
}

/// One type definition: name, base link, and declared member surface.
/// `members` holds only the type's own declarations; inherited members are
/// reached through `base`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeDef {
    pub name: String,
    pub kind: TypeKind,
    pub base: Option<TypeId>,
    pub members: Vec<Member>,
}

/// A host type receiving generated delegating members.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HostType {
    pub name: String,
    pub kind: TypeKind,
    pub namespace: Option<String>,
    /// Base type, if any - the root of the inherited-member index used for
    /// override-legality decisions.
    pub base: Option<TypeId>,
}

impl HostType {
    pub fn new(name: impl Into<String>) -> Self {
        HostType {
            name: name.into(),
            kind: TypeKind::Class,
            namespace: None,
            base: None,
        }
    }

    pub fn with_namespace(mut self, ns: impl Into<String>) -> Self {
        self.namespace = Some(ns.into());
        self
    }

    pub fn with_base(mut self, base: TypeId) -> Self {
        self.base = Some(base);
        self
    }
}

/// Read-only store of type definitions for one synthesis run.
#[derive(Debug, Default, Clone)]
pub struct TypeArena {
    types: Vec<TypeDef>,
    by_name: FxHashMap<String, TypeId>,
}

impl TypeArena {
    pub fn new() -> Self {
        TypeArena::default()
    }

    /// Register a type definition. Later registrations shadow earlier ones of
    /// the same name in `resolve`, matching symbol-model shadowing.
    pub fn add(&mut self, def: TypeDef) -> TypeId {
        let id = TypeId(self.types.len() as u32);
        self.by_name.insert(def.name.clone(), id);
        self.types.push(def);
        id
    }

    /// Register a type with no base and the given members.
    pub fn add_type(&mut self, name: impl Into<String>, members: Vec<Member>) -> TypeId {
        self.add(TypeDef {
            name: name.into(),
            kind: TypeKind::Class,
            base: None,
            members,
        })
    }

    /// Register a type deriving from `base`.
    pub fn add_derived(&mut self, name: impl Into<String>, base: TypeId, members: Vec<Member>) -> TypeId {
        self.add(TypeDef {
            name: name.into(),
            kind: TypeKind::Class,
            base: Some(base),
            members,
        })
    }

    pub fn get(&self, id: TypeId) -> Option<&TypeDef> {
        self.types.get(id.0 as usize)
    }

    /// Resolve a declared-type name to its definition.
    pub fn resolve(&self, name: &str) -> Option<TypeId> {
        self.by_name.get(name).copied()
    }

    pub fn base_of(&self, id: TypeId) -> Option<TypeId> {
        self.get(id).and_then(|def| def.base)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}
