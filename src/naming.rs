use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;

static NON_ALNUM: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-zA-Z0-9]").unwrap());

/// Declaration name for a sample file.
///
/// Drops the last extension, deletes everything outside `[A-Za-z0-9]` and
/// uppercases the first remaining character. Nothing else is checked: a
/// leading digit survives, and a name made only of other characters comes
/// out empty.
pub fn declaration_name(path: &Path) -> String {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy())
        .unwrap_or_default();
    capitalize(&NON_ALNUM.replace_all(&stem, ""))
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}
