//! JSON-with-comments preprocessing.
//!
//! Configuration files are hand edited, so they carry `//` and `/* */`
//! comments and the occasional trailing comma. Both are blanked out here so
//! the result parses as plain JSON. String literals are left alone.

use json_comments::{CommentSettings, strip_comments_in_place};

use crate::loaders::LoadResult;

/// Strips comments and trailing commas from `input`.
///
/// Removed text is replaced by whitespace, so parser errors still point at
/// the right line and column.
///
/// ```
/// # use attachment_content::strip_jsonc;
/// let raw = "{ \"Url\": \"http://x\", // note\n \"Multiplier\": 1.5, }";
/// let value: serde_json::Value = serde_json::from_str(&strip_jsonc(raw).unwrap()).unwrap();
/// assert_eq!(value["Url"], "http://x");
/// ```
pub fn strip_jsonc(input: &str) -> LoadResult<String> {
    let mut stripped = input.to_owned();
    strip_comments_in_place(&mut stripped, CommentSettings::c_style(), true)
        .map_err(|e| anyhow::anyhow!("Failed to strip comments: {}", e))?;
    Ok(stripped)
}
