use tracing::{debug, warn};

/// Pull the JSON array literal assigned to `name` out of a script body.
///
/// The page template emits assignments shaped like `data["games"]=[{...},{...}];`.
/// Returns an empty string when there is no such assignment; the decoder reports that.
pub fn extract(script: &str, name: &str) -> String {
    let pattern = format!("{name}\"]=");
    let mut from = 0;
    while let Some(rel) = script[from..].find(&pattern) {
        let start = from + rel + pattern.len();
        from = start;
        if !script[start..].starts_with("[{") {
            continue;
        }
        if let Some(end) = balanced_end(script, start) {
            debug!(dataset = name, len = end - start, "extracted array literal");
            return script[start..end].to_string();
        }
        if let Some(end) = terminator_end(script, start) {
            warn!(dataset = name, "array literal never balanced; cut at statement terminator");
            return script[start..end].to_string();
        }
    }
    warn!(dataset = name, "no array literal assigned");
    String::new()
}

/// Byte offset one past the bracket that closes the one at `start`.
/// Brackets inside string literals are ignored; a mismatched closer means the literal
/// is not balanced.
fn balanced_end(text: &str, start: usize) -> Option<usize> {
    let mut closers: Vec<u8> = Vec::new();
    let mut in_string = false;
    let mut escaped = false;

    for (i, &b) in text.as_bytes()[start..].iter().enumerate() {
        if in_string {
            match b {
                _ if escaped => escaped = false,
                b'\\' => escaped = true,
                b'"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match b {
            b'"' => in_string = true,
            b'[' => closers.push(b']'),
            b'{' => closers.push(b'}'),
            b']' | b'}' => {
                if closers.pop()? != b {
                    return None;
                }
                if closers.is_empty() {
                    return Some(start + i + 1);
                }
            }
            _ => {}
        }
    }
    None
}

/// The last `}]` before the next `;` (or end of text).
fn terminator_end(text: &str, start: usize) -> Option<usize> {
    let stmt = &text[start..];
    let stmt = match stmt.find(';') {
        Some(semi) => &stmt[..semi],
        None => stmt,
    };
    let close = stmt.rfind("}]")?;
    Some(start + close + 2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn balanced_skips_brackets_in_strings() {
        let text = r#"[{"a":"x]}y"},{"b":[1,2]}];"#;
        assert_eq!(balanced_end(text, 0), Some(text.len() - 1));
    }

    #[test]
    fn balanced_handles_escaped_quotes() {
        let text = r#"[{"a":"say \"}]\" twice"}]"#;
        assert_eq!(balanced_end(text, 0), Some(text.len()));
    }

    #[test]
    fn unbalanced_returns_none() {
        assert_eq!(balanced_end(r#"[{"a":1}"#, 0), None);
        assert_eq!(balanced_end(r#"[{"a":1}}]"#, 0), None);
    }

    #[test]
    fn terminator_cut_uses_last_closer_before_semicolon() {
        let text = r#"[{"a":1}],[{"b":2}]; x=[{}]"#;
        assert_eq!(terminator_end(text, 0), Some(19));
    }

    #[test]
    fn terminator_cut_needs_closer() {
        assert_eq!(terminator_end("[{ broken;", 0), None);
    }
}
