//! Declaration emission for the fwdgen delegation synthesizer.
//!
//! Turns resolved, conflict-checked forwarding candidates into declaration
//! text:
//!
//! ```text
//! #nullable enable
//! namespace Demo;
//! partial class A{
//!     public string Foo(){
//!         return b.Foo();
//!     }
//!     public string Bar => b.Bar;
//! }
//! ```
//!
//! Emission is purely textual. Nothing here validates that the output
//! compiles; the synthesizer upstream guarantees the candidates are sane and
//! downgrades anything override-illegal before it reaches this crate.

pub mod source_writer;
pub use source_writer::SourceWriter;

pub mod method_builder;
pub use method_builder::MethodBuilder;

pub mod host_builder;
pub use host_builder::{GeneratedUnit, HostBuilder};
