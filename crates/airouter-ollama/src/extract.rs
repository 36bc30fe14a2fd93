// SPDX-FileCopyrightText: 2026 airouter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! JSON object extraction from free-form model output.
//!
//! Small local models often wrap the requested JSON in prose or a code
//! fence. The whole text is tried first; otherwise the first brace-balanced
//! `{...}` region is parsed. Braces inside string literals do not count.

use serde_json::Value;

/// Extract a JSON object from `text`, or `None` if there is none.
pub fn extract_json_object(text: &str) -> Option<Value> {
    let trimmed = text.trim();
    if let Ok(value @ Value::Object(_)) = serde_json::from_str::<Value>(trimmed) {
        return Some(value);
    }

    let region = first_balanced_object(trimmed)?;
    match serde_json::from_str::<Value>(region) {
        Ok(value @ Value::Object(_)) => Some(value),
        _ => None,
    }
}

/// The first `{...}` slice whose braces balance, skipping string contents.
fn first_balanced_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, ch) in text[start..].char_indices() {
        if in_string {
            match ch {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match ch {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&text[start..=start + offset]);
                }
            }
            _ => {}
        }
    }

    None
}
