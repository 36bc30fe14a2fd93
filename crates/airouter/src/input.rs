// SPDX-FileCopyrightText: 2026 airouter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Reading JSON documents from a file path or stdin.

use std::io::Read;
use std::path::Path;

use airouter_core::RouterError;
use serde::de::DeserializeOwned;

/// Read `source` as text. `-` means stdin.
pub fn read_source(source: &str) -> Result<String, RouterError> {
    if source == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .map_err(|e| RouterError::Internal(format!("failed to read stdin: {e}")))?;
        return Ok(buf);
    }

    std::fs::read_to_string(Path::new(source))
        .map_err(|e| RouterError::Internal(format!("failed to read {source}: {e}")))
}

/// Read and deserialize a JSON document from `source`.
pub fn read_json<T: DeserializeOwned>(source: &str) -> Result<T, RouterError> {
    let text = read_source(source)?;
    parse_json(&text, source)
}

fn parse_json<T: DeserializeOwned>(text: &str, source: &str) -> Result<T, RouterError> {
    serde_json::from_str(text)
        .map_err(|e| RouterError::Internal(format!("invalid JSON in {source}: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use airouter_core::Policy;
    use std::io::Write;

    #[test]
    fn reads_policy_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"allowPaid": true, "preferProvider": "gemini"}}"#).unwrap();
        let policy: Policy = read_json(file.path().to_str().unwrap()).unwrap();
        assert!(policy.allow_paid);
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = read_source("/nonexistent/airouter/task.json").unwrap_err();
        assert!(err.to_string().contains("failed to read"));
    }

    #[test]
    fn malformed_json_names_source() {
        let err = parse_json::<Policy>("{", "task.json").unwrap_err();
        assert!(err.to_string().contains("task.json"));
    }
}
