use crate::errors::ApiError;

/// Renders `?k=v&...` from ordered pairs, skipping absent values.
///
/// Keys and values are percent-encoded; pairs keep the caller's order, so the
/// same inputs always produce the same string. Returns an empty string when no
/// pair has a value.
pub fn build_query(params: &[(&str, Option<String>)]) -> Result<String, ApiError> {
    let encoded =
        serde_urlencoded::to_string(params).map_err(|err| ApiError::Encode(err.to_string()))?;
    if encoded.is_empty() {
        return Ok(String::new());
    }
    Ok(format!("?{}", encoded))
}
