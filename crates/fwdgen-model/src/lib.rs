//! Shared data types for the fwdgen delegation synthesizer.
//!
//! This crate provides the foundational types used across all fwdgen crates:
//! - Member surface descriptions (`Member`, `MemberKind`, `Param`, `MemberFlags`)
//! - Forwarding directives and source members (`Directive`, `SourceMember`)
//! - The read-only symbol-model snapshot (`TypeArena`, `TypeId`, `TypeDef`, `HostType`)
//! - Signature keys for overload deduplication (`SignatureKey`)
//! - Centralized limits and thresholds
//!
//! Everything here is plain data: the discovery layer populates it once per
//! synthesis run and the core never mutates it.

// Member surface entries and signature keys
pub mod member;
pub use member::{Accessibility, Member, MemberFlags, MemberKind, MethodSubkind, Param, SignatureKey};

// Forwarding directives attached to source members
pub mod directive;
pub use directive::{Directive, SourceMember, MEMBER_NAME_BLACKLIST};

// Symbol-model snapshot - type definitions, base links, host types
pub mod arena;
pub use arena::{HostType, TypeArena, TypeDef, TypeId, TypeKind};

// Centralized limits and thresholds
pub mod limits;
