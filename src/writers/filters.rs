//! Template filters shared by the page and map templates.

use serde::Serialize;

/// Serialize a value as JSON that can sit inside a `<script>` element
pub fn script_json<T: Serialize>(value: T) -> askama::Result<String> {
    let json = serde_json::to_string(&value).map_err(|e| askama::Error::Custom(Box::new(e)))?;
    Ok(json.replace("</", "<\\/"))
}
