//! `ir::Ty` → TypeScript declaration text.
use crate::ir::Ty;

// ————————————————————————————————————————————————————————————————————————————
// SETTINGS
// ————————————————————————————————————————————————————————————————————————————

/// Indentation unit, repeated once per nesting level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Indent {
    Tab,
    FourSpaces,
    #[default]
    TwoSpaces,
}

/// Header syntax of an emitted declaration. Field content is identical
/// between the two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputKind {
    /// `interface Name { ... }`
    #[default]
    Interface,
    /// `type Name = { ... }`
    TypeAlias,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Style {
    pub indent: Indent,
    pub kind: OutputKind,
}

impl Indent {
    pub fn unit(self) -> &'static str {
        match self {
            Indent::Tab => "\t",
            Indent::FourSpaces => "    ",
            Indent::TwoSpaces => "  ",
        }
    }
    fn pad(self, level: usize) -> String {
        self.unit().repeat(level)
    }
}

// ————————————————————————————————————————————————————————————————————————————
// TYPE EXPRESSIONS
// ————————————————————————————————————————————————————————————————————————————

/// Render a type expression whose opening token sits at nesting `depth`.
pub fn render_type(ty: &Ty, depth: usize, indent: Indent) -> String {
    let mut out = String::new();
    write_type(&mut out, ty, depth, indent);
    out
}

fn write_type(out: &mut String, ty: &Ty, depth: usize, indent: Indent) {
    use crate::inference::{RED_ZONE, STACK_CHUNK};
    stacker::maybe_grow(RED_ZONE, STACK_CHUNK, || write_type_inner(out, ty, depth, indent))
}

fn write_type_inner(out: &mut String, ty: &Ty, depth: usize, indent: Indent) {
    match ty {
        Ty::Any => out.push_str("any"),
        Ty::String => out.push_str("string"),
        Ty::Number => out.push_str("number"),
        Ty::Boolean => out.push_str("boolean"),
        Ty::Array(item) => {
            // element keeps the array's depth
            write_type(out, item, depth, indent);
            out.push_str("[]");
        }
        Ty::Object { fields } => {
            out.push_str("{\n");
            for (i, field) in fields.iter().enumerate() {
                if i > 0 {
                    out.push('\n');
                }
                out.push_str(&indent.pad(depth + 1));
                out.push_str(&field.name);
                out.push_str(": ");
                write_type(out, &field.ty, depth + 1, indent);
                out.push(';');
            }
            out.push('\n');
            out.push_str(&indent.pad(depth));
            out.push('}');
        }
    }
}

// ————————————————————————————————————————————————————————————————————————————
// DECLARATIONS
// ————————————————————————————————————————————————————————————————————————————

/// Accumulates top-level declarations, separated by a blank line.
#[derive(Debug, Default)]
pub struct Codegen {
    style: Style,
    out: String,
}

impl Codegen {
    pub fn new(style: Style) -> Self {
        Self { style, out: String::new() }
    }

    /// Emit `name` as a declaration of `ty`.
    ///
    /// Object bodies honor the configured [`OutputKind`]. Anything else can
    /// only be written as an alias, so it always becomes `type Name = T;`.
    pub fn emit(&mut self, ty: &Ty, name: &str) {
        self.separate();
        self.push_declaration(ty, name);
    }

    /// Emit a root array as `<name>Item` plus `type <name> = <name>Item[];`.
    ///
    /// Interfaces put the item first with a blank line before the alias.
    /// Aliases lead with the array alias, item directly on the next line.
    pub fn emit_root_array(&mut self, item: &Ty, name: &str) {
        let item_name = format!("{name}Item");
        self.separate();
        match self.style.kind {
            OutputKind::Interface => {
                self.push_declaration(item, &item_name);
                self.out.push_str("\n\n");
                self.push_array_alias(name, &item_name);
            }
            OutputKind::TypeAlias => {
                self.push_array_alias(name, &item_name);
                self.out.push('\n');
                self.push_declaration(item, &item_name);
            }
        }
    }

    pub fn into_string(self) -> String {
        self.out
    }

    fn push_declaration(&mut self, ty: &Ty, name: &str) {
        let body = render_type(ty, 0, self.style.indent);
        let decl = match (ty.is_object(), self.style.kind) {
            (true, OutputKind::Interface) => format!("interface {name} {body}"),
            (true, OutputKind::TypeAlias) => format!("type {name} = {body}"),
            (false, _) => format!("type {name} = {body};"),
        };
        self.out.push_str(&decl);
    }

    fn push_array_alias(&mut self, name: &str, item: &str) {
        self.out.push_str(&format!("type {name} = {item}[];"));
    }

    fn separate(&mut self) {
        if !self.out.is_empty() {
            self.out.push_str("\n\n");
        }
    }
}
