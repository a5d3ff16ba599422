//! Marketing API error payload parsing.

use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    errors: Vec<ApiErrorObject>,
}

#[derive(Debug, Default, Deserialize)]
struct ApiErrorObject {
    #[serde(default)]
    meta: Option<ApiErrorMeta>,
}

#[derive(Debug, Default, Deserialize)]
struct ApiErrorMeta {
    #[serde(default)]
    duplicate_profile_id: Option<String>,
}

/// Pull the duplicate-profile id out of a conflict response body.
///
/// The payload is parsed leniently: a body that is not JSON, or JSON without
/// the expected shape, simply yields `None` — extraction failure is not an
/// error in itself.
pub fn extract_duplicate_profile_id(body: &str) -> Option<String> {
    let parsed: ApiErrorBody = serde_json::from_str(body).ok()?;
    parsed
        .errors
        .into_iter()
        .filter_map(|e| e.meta)
        .find_map(|meta| meta.duplicate_profile_id)
}
