//! Aggregate extension body for one host type.
//!
//! A [`HostBuilder`] opens the host wrapper (nullable pragma, namespace line,
//! `partial <kind> <name>{`), appends delegating member declarations and
//! inline comments in encounter order, and closes the wrapper. The result is
//! one [`GeneratedUnit`] per host type, keyed by the host type's name and
//! suitable for handing to the output sink as-is.

use fwdgen_model::{Accessibility, HostType, Member, MemberKind};
use tracing::trace;

use crate::method_builder::MethodBuilder;
use crate::source_writer::SourceWriter;

/// One aggregate declaration body, keyed by host type name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedUnit {
    pub type_name: String,
    pub body: String,
}

pub struct HostBuilder {
    writer: SourceWriter,
    type_name: String,
}

impl HostBuilder {
    pub fn new(host: &HostType) -> Self {
        let mut writer = SourceWriter::with_capacity(4096);
        writer.write_text_line("#nullable enable");
        if let Some(ns) = &host.namespace {
            writer.write_text_line(&format!("namespace {ns};"));
        }
        writer.write_text_line(&format!("partial {} {}{{", host.kind.keyword(), host.name));
        writer.increase_indent();
        HostBuilder {
            writer,
            type_name: host.name.clone(),
        }
    }

    /// Emit an inline `// ...` comment line (placeholders, downgrade notes,
    /// localized failures).
    pub fn push_comment(&mut self, text: &str) {
        self.writer.write("// ");
        self.writer.write_text_line(text);
    }

    /// Emit a delegating method declaration calling
    /// `<receiver>.<name>(<bare parameter names>)`.
    pub fn forward_method(&mut self, member: &Member, receiver: &str, receiver_is_static: bool, is_override: bool) {
        let MemberKind::Method {
            return_type,
            params,
            generic_params,
            ..
        } = &member.kind
        else {
            return;
        };
        trace!(member = %member.name, receiver, is_override, "emitting forwarded method");

        let mut builder = MethodBuilder::new(&member.name, return_type.as_deref());
        builder.set_accessibility(member.accessibility);
        if receiver_is_static {
            builder.set_static();
        }
        if is_override {
            builder.set_override();
        }
        for param in params {
            builder.add_param(param);
        }
        for generic in generic_params {
            builder.add_generic_param(generic);
        }

        let args: Vec<&str> = params.iter().map(|p| p.name.as_str()).collect();
        let call = MethodBuilder::call_expr(receiver, &member.name, &args);
        if return_type.is_some() {
            builder.push_return(call);
        } else {
            builder.push_statement(call);
        }
        builder.render_into(&mut self.writer);
    }

    /// Emit a delegating property declaration reading (and optionally
    /// writing) `<receiver>.<name>`. Indexers get a placeholder comment.
    pub fn forward_property(
        &mut self,
        member: &Member,
        receiver: &str,
        receiver_is_static: bool,
        is_override: bool,
        include_setter: bool,
    ) {
        let MemberKind::Property {
            value_type,
            setter_accessibility,
        } = &member.kind
        else {
            return;
        };

        if member.is_indexer() {
            self.push_comment(&format!(
                "indexers are not supported; no forwarding emitted from '{receiver}'"
            ));
            return;
        }
        trace!(member = %member.name, receiver, is_override, include_setter, "emitting forwarded property");

        let mut modifiers = String::from(member.accessibility.keyword());
        if is_override {
            modifiers.push_str(" override");
        } else if receiver_is_static {
            modifiers.push_str(" static");
        }

        let setter_reachable = matches!(
            setter_accessibility,
            Some(Accessibility::Public) | Some(Accessibility::Internal)
        );
        let name = &member.name;
        if include_setter && setter_reachable {
            self.writer.write_text_line(&format!(
                "{modifiers} {value_type} {name} {{ get => {receiver}.{name}; set => {receiver}.{name} = value; }}"
            ));
        } else {
            self.writer
                .write_text_line(&format!("{modifiers} {value_type} {name} => {receiver}.{name};"));
        }
    }

    pub fn finish(mut self) -> GeneratedUnit {
        self.writer.decrease_indent();
        self.writer.write("}");
        GeneratedUnit {
            type_name: self.type_name,
            body: self.writer.finish(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fwdgen_model::TypeKind;

    fn host() -> HostType {
        HostType::new("A").with_namespace("Demo")
    }

    #[test]
    fn test_wrapper_header_and_close() {
        let unit = HostBuilder::new(&host()).finish();
        assert_eq!(unit.type_name, "A");
        assert_eq!(unit.body, "#nullable enable\nnamespace Demo;\npartial class A{\n}");
    }

    #[test]
    fn test_struct_host_kind_keyword() {
        let mut h = host();
        h.kind = TypeKind::Struct;
        let unit = HostBuilder::new(&h).finish();
        assert!(unit.body.contains("partial struct A{"));
    }

    #[test]
    fn test_property_with_reachable_setter() {
        let mut b = HostBuilder::new(&host());
        let member = Member::property_with_setter("Bar", "string", Accessibility::Public);
        b.forward_property(&member, "b", false, false, true);
        let unit = b.finish();
        assert!(
            unit.body
                .contains("public string Bar { get => b.Bar; set => b.Bar = value; }")
        );
    }

    #[test]
    fn test_property_setter_omitted_when_private() {
        let mut b = HostBuilder::new(&host());
        let member = Member::property_with_setter("Bar", "string", Accessibility::Private);
        b.forward_property(&member, "b", false, false, true);
        let unit = b.finish();
        assert!(unit.body.contains("public string Bar => b.Bar;"));
        assert!(!unit.body.contains("set =>"));
    }

    #[test]
    fn test_indexer_placeholder_comment() {
        use fwdgen_model::MemberFlags;
        let mut b = HostBuilder::new(&host());
        let member = Member::property("Item", "string").with_flags(MemberFlags::INDEXER);
        b.forward_property(&member, "b", false, false, false);
        let unit = b.finish();
        assert!(unit.body.contains("// indexers are not supported"));
        assert!(!unit.body.contains("=> b.Item"));
    }
}
