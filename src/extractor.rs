use regex::Regex;
use serde_json::{json, Value};
use std::sync::LazyLock;

static FENCE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)```json\s*(.+?)```").expect("fence pattern is valid"));

/// Parse arbitrary model output into JSON, best effort. Tries a fenced
/// ```json block, then the first balanced `{...}` object, then the whole
/// input, and finally falls back to a `{"raw_output": ...}` sentinel.
/// Total: never panics, never returns an error.
pub fn extract_json(text: &str) -> Value {
    if let Some(value) = fenced_json_block(text) {
        return value;
    }
    if let Some(candidate) = first_object(text) {
        if let Ok(value) = serde_json::from_str(candidate) {
            return value;
        }
    }
    if let Ok(value) = serde_json::from_str(text.trim()) {
        return value;
    }
    json!({ "raw_output": text })
}

fn fenced_json_block(text: &str) -> Option<Value> {
    let captures = FENCE_RE.captures(text)?;
    serde_json::from_str(captures.get(1)?.as_str().trim()).ok()
}

/// Slice from the first `{` to the brace that balances it, skipping braces
/// inside string literals.
fn first_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, ch) in text[start..].char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match ch {
            '\\' if in_string => escaped = true,
            '"' => in_string = !in_string,
            '{' if !in_string => depth += 1,
            '}' if !in_string => {
                depth -= 1;
                if depth == 0 {
                    return Some(&text[start..start + offset + 1]);
                }
            }
            _ => {}
        }
    }
    None
}
