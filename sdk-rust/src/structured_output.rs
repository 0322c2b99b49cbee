use crate::{GenerationResult, MalformedOutputError};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// Isolate and parse the JSON object embedded in raw model output.
///
/// Code-fence markers are removed, then the text between the first `{` and
/// the last `}` (inclusive) is parsed. This is a single best-effort pass: a
/// stray `}` after the real object (e.g. in trailing prose) makes the parse
/// fail rather than being skipped.
pub fn extract_json_object(raw: &str) -> GenerationResult<Map<String, Value>> {
    let clean = raw.replace("```json", "").replace("```", "");
    let clean = clean.trim();

    let (Some(start), Some(end)) = (clean.find('{'), clean.rfind('}')) else {
        return Err(MalformedOutputError::NoJsonObject.into());
    };
    if end < start {
        return Err(MalformedOutputError::NoJsonObject.into());
    }

    serde_json::from_str(&clean[start..=end])
        .map_err(|error| MalformedOutputError::InvalidJson(error).into())
}

/// Convert an extracted object into a typed value.
pub fn decode_object<T: DeserializeOwned>(object: Map<String, Value>) -> GenerationResult<T> {
    serde_json::from_value(Value::Object(object))
        .map_err(|error| MalformedOutputError::UnexpectedShape(error).into())
}
