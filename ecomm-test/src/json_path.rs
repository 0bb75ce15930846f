//! Tiny JSON path language for response assertions.
//!
//! `items[1].name`, `items.len()`, `[0].id` and `meta.count` are supported.
//! A path that leads nowhere resolves to `null`.

use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathToken {
    Field(String),
    Index(usize),
    Len,
}

/// Split `path` into tokens.
///
/// # Panics
///
/// On an unclosed bracket or a non-numeric index; a malformed path is a bug in the test.
pub fn tokenize_path(path: &str) -> Vec<PathToken> {
    let mut tokens = Vec::new();
    for segment in path.split('.').filter(|s| !s.is_empty()) {
        if segment == "len()" || segment == "size()" {
            tokens.push(PathToken::Len);
            continue;
        }
        let (field, mut rest) = segment.split_at(segment.find('[').unwrap_or(segment.len()));
        if !field.is_empty() {
            tokens.push(PathToken::Field(field.to_string()));
        }
        while let Some(inner) = rest.strip_prefix('[') {
            let end = inner
                .find(']')
                .unwrap_or_else(|| panic!("unclosed bracket in JSON path {path:?}"));
            let index = inner[..end]
                .parse()
                .unwrap_or_else(|_| panic!("non-numeric index {:?} in JSON path {path:?}", &inner[..end]));
            tokens.push(PathToken::Index(index));
            rest = &inner[end + 1..];
        }
    }
    tokens
}

/// Resolve `path` against `root`.
///
/// # Panics
///
/// When `len()` is applied to a number, bool or null.
pub fn resolve_path(root: &Value, path: &str) -> Value {
    let mut current = root;
    for token in tokenize_path(path) {
        let next = match (&token, current) {
            (PathToken::Field(name), Value::Object(map)) => map.get(name),
            (PathToken::Index(i), Value::Array(items)) => items.get(*i),
            (PathToken::Len, Value::Array(items)) => return Value::from(items.len()),
            (PathToken::Len, Value::Object(map)) => return Value::from(map.len()),
            (PathToken::Len, Value::String(s)) => return Value::from(s.chars().count()),
            (PathToken::Len, other) => panic!("len() applied to non-collection {other} in path {path:?}"),
            _ => None,
        };
        match next {
            Some(value) => current = value,
            None => return Value::Null,
        }
    }
    current.clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn tokenizes_fields_indices_and_len() {
        assert_eq!(
            tokenize_path("orders[0].items.len()"),
            vec![
                PathToken::Field("orders".into()),
                PathToken::Index(0),
                PathToken::Field("items".into()),
                PathToken::Len,
            ]
        );
        assert_eq!(tokenize_path("[1][2]"), vec![PathToken::Index(1), PathToken::Index(2)]);
    }

    #[test]
    #[should_panic(expected = "unclosed bracket")]
    fn unclosed_bracket_panics() {
        tokenize_path("items[0");
    }

    #[test]
    fn len_stops_resolution() {
        let v = json!({"items": [1, 2, 3]});
        assert_eq!(resolve_path(&v, "items.len()"), json!(3));
    }
}
