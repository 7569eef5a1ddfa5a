//! One sample file in, one block of declaration text out.
//!
//! resolve → read → parse → name → infer → format. Nothing is shared
//! between calls.
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::codegen::{Codegen, Style};
use crate::error::{Error, Result};
use crate::inference;
use crate::naming::declaration_name;

/// Produce the declaration block for the JSON file at `path`.
pub fn process(path: &Path, style: &Style) -> Result<String> {
    let full_path = resolve(path)?;
    let source = std::fs::read_to_string(&full_path).map_err(|source| Error::Read {
        path: full_path.clone(),
        source,
    })?;
    let json_value = crate::path_de::from_str_with_path::<Value>(&source)
        .map_err(|message| Error::Parse { path: full_path.clone(), message })?;
    Ok(generate(&declaration_name(path), &json_value, style))
}

/// Declaration text for an already parsed document.
///
/// A non-empty root array is described by its first element as
/// `<Name>Item` next to `type <Name> = <Name>Item[];`. Every other root,
/// the empty array included, becomes a single declaration.
pub fn generate(name: &str, root: &Value, style: &Style) -> String {
    let mut cg = Codegen::new(*style);
    match root.as_array().and_then(|xs| xs.first()) {
        Some(first) => cg.emit_root_array(&inference::infer(first), name),
        None => cg.emit(&inference::infer(root), name),
    }
    cg.into_string()
}

fn resolve(path: &Path) -> Result<PathBuf> {
    let not_found = |path: PathBuf| Error::FileNotFound { path };
    let full_path = match std::path::absolute(path) {
        Ok(p) => p,
        // only an empty path gets here
        Err(_) => return Err(not_found(path.to_path_buf())),
    };
    if !full_path.exists() {
        return Err(not_found(full_path));
    }
    Ok(full_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codegen::{Indent, OutputKind};
    use serde_json::json;

    const ALIAS: Style = Style { indent: Indent::TwoSpaces, kind: OutputKind::TypeAlias };
    const IFACE: Style = Style { indent: Indent::TwoSpaces, kind: OutputKind::Interface };

    #[test]
    fn flat_object_round_trip() {
        let v = json!({"a": 1, "b": "x", "c": true});
        assert_eq!(generate("Name", &v, &ALIAS), "type Name = {\n  a: number;\n  b: string;\n  c: boolean;\n}");
        assert_eq!(generate("Name", &v, &IFACE), "interface Name {\n  a: number;\n  b: string;\n  c: boolean;\n}");
    }

    #[test]
    fn root_array_is_wrapped_in_an_item() {
        let v = json!([{"id": 1}, {"id": 2}]);
        assert_eq!(
            generate("Users", &v, &IFACE),
            "interface UsersItem {\n  id: number;\n}\n\ntype Users = UsersItem[];"
        );
        assert_eq!(
            generate("Users", &v, &ALIAS),
            "type Users = UsersItem[];\ntype UsersItem = {\n  id: number;\n}"
        );
    }

    #[test]
    fn root_array_item_ignores_later_elements() {
        let v = json!([{"id": 1}, {"name": "x", "id": "2"}]);
        let out = generate("Users", &v, &IFACE);
        assert!(out.contains("id: number;"));
        assert!(!out.contains("name"));
    }

    #[test]
    fn root_array_of_scalars_aliases_the_item() {
        let v = json!([1, 2, 3]);
        assert_eq!(generate("Ids", &v, &IFACE), "type IdsItem = number;\n\ntype Ids = IdsItem[];");
        assert_eq!(generate("Ids", &v, &ALIAS), "type Ids = IdsItem[];\ntype IdsItem = number;");
    }

    #[test]
    fn empty_root_array_has_no_item() {
        assert_eq!(generate("Empty", &json!([]), &IFACE), "type Empty = any[];");
    }

    #[test]
    fn scalar_and_null_roots() {
        assert_eq!(generate("Version", &json!("1.0"), &IFACE), "type Version = string;");
        assert_eq!(generate("Nothing", &Value::Null, &ALIAS), "type Nothing = any;");
    }

    #[test]
    fn empty_name_is_left_alone() {
        assert_eq!(generate("", &json!({"a": 1}), &ALIAS), "type  = {\n  a: number;\n}");
    }

    #[test]
    fn missing_file_reports_absolute_path() {
        let err = process(Path::new("definitely/not/here.json"), &IFACE).unwrap_err();
        let Error::FileNotFound { path } = &err else {
            panic!("unexpected error: {err}");
        };
        assert!(path.is_absolute());
        assert!(path.ends_with("definitely/not/here.json"));
        assert!(err.to_string().starts_with("File not found: "));
    }

    #[test]
    fn empty_path_is_not_found() {
        let err = process(Path::new(""), &IFACE).unwrap_err();
        assert!(matches!(err, Error::FileNotFound { .. }));
    }
}
