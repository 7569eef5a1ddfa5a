use serde::de::DeserializeOwned;

/// Deserialize with JSON-path context in error messages.
///
/// Nesting depth is not capped: serde_json's recursion limit is off and the
/// stack grows on demand while descending.
pub fn from_str_with_path<T: DeserializeOwned>(src: &str) -> Result<T, String> {
    let de = &mut serde_json::Deserializer::from_str(src);
    de.disable_recursion_limit();
    let stacked = serde_stacker::Deserializer::new(&mut *de);
    let value = serde_path_to_error::deserialize::<_, T>(stacked).map_err(describe)?;
    // reject trailing garbage the way `serde_json::from_str` does
    de.end().map_err(|err| err.to_string())?;
    Ok(value)
}

fn describe(err: serde_path_to_error::Error<serde_json::Error>) -> String {
    let path = err.path().to_string();
    let inner = err.into_inner();
    if path == "." {
        inner.to_string()
    } else {
        format!("at JSON path {path} → {inner}")
    }
}
