//! Builder for one delegating method declaration.
//!
//! Renders the modifier list, signature, and a pass-through body:
//!
//! ```text
//! public int Foo(string s, uint n = 8){
//!     return b.Foo(s, n);
//! }
//! ```
//!
//! `override` is mutually exclusive with `static`/`virtual` in the rendered
//! modifier list; when both are requested, `override` takes precedence.

use fwdgen_model::{Accessibility, Param};

use crate::source_writer::SourceWriter;

#[derive(Debug)]
pub struct MethodBuilder {
    accessibility: &'static str,
    return_type: String,
    name: String,
    is_static: bool,
    is_virtual: bool,
    is_override: bool,
    params: Vec<String>,
    generic_params: Vec<String>,
    body: Vec<String>,
}

impl MethodBuilder {
    /// `return_type: None` renders as `void`.
    pub fn new(name: impl Into<String>, return_type: Option<&str>) -> Self {
        MethodBuilder {
            accessibility: Accessibility::Private.keyword(),
            return_type: return_type.unwrap_or("void").to_string(),
            name: name.into(),
            is_static: false,
            is_virtual: false,
            is_override: false,
            params: Vec::new(),
            generic_params: Vec::new(),
            body: Vec::new(),
        }
    }

    pub fn set_accessibility(&mut self, accessibility: Accessibility) -> &mut Self {
        self.accessibility = accessibility.keyword();
        self
    }

    pub fn set_static(&mut self) -> &mut Self {
        self.is_static = true;
        self
    }

    pub fn set_virtual(&mut self) -> &mut Self {
        self.is_virtual = true;
        self
    }

    pub fn set_override(&mut self) -> &mut Self {
        self.is_override = true;
        self
    }

    pub fn add_param(&mut self, param: &Param) -> &mut Self {
        match &param.default_value {
            Some(default) => self
                .params
                .push(format!("{} {} = {}", param.ty, param.name, default)),
            None => self.params.push(format!("{} {}", param.ty, param.name)),
        }
        self
    }

    pub fn add_generic_param(&mut self, name: &str) -> &mut Self {
        self.generic_params.push(name.to_string());
        self
    }

    /// Append a bare statement to the body (a `;` is added).
    pub fn push_statement(&mut self, statement: impl Into<String>) -> &mut Self {
        self.body.push(format!("{};", statement.into()));
        self
    }

    /// Append a `return <expr>;` statement to the body.
    pub fn push_return(&mut self, expr: impl Into<String>) -> &mut Self {
        self.body.push(format!("return {};", expr.into()));
        self
    }

    /// The pass-through call expression `receiver.Name(arg, ...)`.
    pub fn call_expr(receiver: &str, name: &str, args: &[&str]) -> String {
        format!("{receiver}.{name}({})", args.join(", "))
    }

    pub fn render_into(&self, w: &mut SourceWriter) {
        w.write(self.accessibility);
        if self.is_override {
            w.write(" override");
        } else {
            if self.is_static {
                w.write(" static");
            }
            if self.is_virtual {
                w.write(" virtual");
            }
        }
        w.write_space();
        w.write(&self.return_type);
        w.write_space();
        w.write(&self.name);
        if !self.generic_params.is_empty() {
            w.write("<");
            w.write(&self.generic_params.join(", "));
            w.write(">");
        }
        w.write("(");
        w.write(&self.params.join(", "));
        w.write("){");
        w.write_line();
        w.increase_indent();
        for statement in &self.body {
            w.write_text_line(statement);
        }
        w.decrease_indent();
        w.write_text_line("}");
    }
}
