//! Diff generation for audit logging

use serde_json::Value;

/// Generate a human-readable diff between two JSON values
///
/// Only top-level field changes are listed.
pub fn generate_diff(before: &Value, after: &Value) -> Option<String> {
    match (before, after) {
        (Value::Object(before_obj), Value::Object(after_obj)) => {
            let mut changes = Vec::new();

            for (key, before_val) in before_obj {
                match after_obj.get(key) {
                    Some(after_val) if before_val != after_val => changes.push(format!(
                        "{}: {} -> {}",
                        key,
                        format_value(before_val),
                        format_value(after_val)
                    )),
                    Some(_) => {}
                    None => changes.push(format!(
                        "{}: {} -> (removed)",
                        key,
                        format_value(before_val)
                    )),
                }
            }

            for (key, after_val) in after_obj {
                if !before_obj.contains_key(key) {
                    changes.push(format!("{}: (added) -> {}", key, format_value(after_val)));
                }
            }

            if changes.is_empty() {
                None
            } else {
                Some(changes.join(", "))
            }
        }
        _ if before != after => Some(format!(
            "{} -> {}",
            format_value(before),
            format_value(after)
        )),
        _ => None,
    }
}

fn format_value(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => {
            // Truncate on char boundaries; labels are often CJK
            if s.chars().count() > 50 {
                let head: String = s.chars().take(47).collect();
                format!("\"{}...\"", head)
            } else {
                format!("\"{}\"", s)
            }
        }
        Value::Array(arr) => format!("[{} items]", arr.len()),
        Value::Object(obj) => format!("{{{} fields}}", obj.len()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_amount_change() {
        let before = json!({"id": 1, "amount": 5000});
        let after = json!({"id": 1, "amount": 6000});

        let diff = generate_diff(&before, &after).unwrap();
        assert_eq!(diff, "amount: 5000 -> 6000");
    }

    #[test]
    fn test_added_and_removed_fields() {
        let before = json!({"category": "娛樂", "old": true});
        let after = json!({"category": "娛樂", "new": 1});

        let diff = generate_diff(&before, &after).unwrap();
        assert!(diff.contains("old: true -> (removed)"));
        assert!(diff.contains("new: (added) -> 1"));
    }

    #[test]
    fn test_no_changes() {
        let value = json!({"category": "其他"});
        assert!(generate_diff(&value, &value).is_none());
    }

    #[test]
    fn test_scalar_change() {
        assert_eq!(
            generate_diff(&json!("飲食"), &json!("其他")).unwrap(),
            "\"飲食\" -> \"其他\""
        );
    }

    #[test]
    fn test_long_cjk_string_truncation() {
        let long = "飲".repeat(80);
        let diff = generate_diff(&json!({"description": long}), &json!({"description": ""}))
            .unwrap();
        assert!(diff.contains("...\""));
    }
}
