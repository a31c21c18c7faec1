// Shared prompt constants and response-schema building blocks.
// Each service that needs model calls defines its own prompts alongside it.
// This file contains cross-cutting fragments.

use serde_json::{json, Value};

/// System instruction fragment that enforces JSON-only output.
pub const JSON_ONLY_SYSTEM: &str = "You MUST respond with valid JSON only, \
    matching the response schema exactly. \
    Do NOT include any text outside the JSON value. \
    Do NOT use markdown code fences.";

/// Audience instruction shared by every career-guidance prompt.
pub const AUDIENCE_INSTRUCTION: &str = "\
    The user is a student or early-career professional in India exploring career options. \
    Keep language clear, encouraging, and free of jargon.";

pub fn string_schema() -> Value {
    json!({ "type": "STRING" })
}

pub fn number_schema() -> Value {
    json!({ "type": "NUMBER" })
}

pub fn string_array_schema() -> Value {
    json!({ "type": "ARRAY", "items": string_schema() })
}

pub fn array_of(items: Value) -> Value {
    json!({ "type": "ARRAY", "items": items })
}

/// Builds an OBJECT schema; every property named in `required` must be present.
pub fn object_schema(properties: &[(&str, Value)], required: &[&str]) -> Value {
    let properties: serde_json::Map<String, Value> = properties
        .iter()
        .map(|(name, schema)| (name.to_string(), schema.clone()))
        .collect();
    json!({
        "type": "OBJECT",
        "properties": properties,
        "required": required,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_object_schema_lists_properties_and_required() {
        let schema = object_schema(
            &[("name", string_schema()), ("tags", string_array_schema())],
            &["name"],
        );
        assert_eq!(schema["type"], "OBJECT");
        assert_eq!(schema["properties"]["tags"]["items"]["type"], "STRING");
        assert_eq!(schema["required"], json!(["name"]));
    }
}
