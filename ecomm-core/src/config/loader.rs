use std::collections::HashMap;
use std::path::Path;

use super::value::ConfigValue;
use super::ConfigError;

/// Parse `path` and merge its flattened keys into `values`. A missing file is skipped.
pub(crate) fn load_yaml_file(
    path: &Path,
    values: &mut HashMap<String, ConfigValue>,
) -> Result<bool, ConfigError> {
    if !path.exists() {
        return Ok(false);
    }
    let content = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::Load(format!("{}: {e}", path.display())))?;
    load_yaml_str(&content, values)
        .map_err(|e| ConfigError::Load(format!("{}: {e}", path.display())))?;
    Ok(true)
}

pub(crate) fn load_yaml_str(
    content: &str,
    values: &mut HashMap<String, ConfigValue>,
) -> Result<(), ConfigError> {
    let yaml: serde_yaml::Value =
        serde_yaml::from_str(content).map_err(|e| ConfigError::Load(e.to_string()))?;
    flatten_yaml("", &yaml, values);
    Ok(())
}

/// Flatten a YAML tree into dot-separated keys.
///
/// Sequences are stored whole under their key and element-wise as `key.0`, `key.1`, ...
pub(crate) fn flatten_yaml(
    prefix: &str,
    value: &serde_yaml::Value,
    out: &mut HashMap<String, ConfigValue>,
) {
    match value {
        serde_yaml::Value::Mapping(map) => {
            for (k, v) in map {
                let segment = match k {
                    serde_yaml::Value::String(s) => s.clone(),
                    serde_yaml::Value::Number(n) => n.to_string(),
                    serde_yaml::Value::Bool(b) => b.to_string(),
                    other => format!("{other:?}"),
                };
                let full_key = if prefix.is_empty() {
                    segment
                } else {
                    format!("{prefix}.{segment}")
                };
                flatten_yaml(&full_key, v, out);
            }
        }
        serde_yaml::Value::Sequence(seq) if !prefix.is_empty() => {
            out.insert(prefix.to_string(), ConfigValue::from_yaml(value));
            for (i, item) in seq.iter().enumerate() {
                flatten_yaml(&format!("{prefix}.{i}"), item, out);
            }
        }
        leaf if !prefix.is_empty() => {
            out.insert(prefix.to_string(), ConfigValue::from_yaml(leaf));
        }
        _ => {}
    }
}

/// Canonical form used to match environment variables against YAML keys:
/// lowercase, with `_` and `-` both read as the `.` separator.
pub(crate) fn normalize_key(key: &str) -> String {
    key.to_ascii_lowercase().replace(['_', '-'], ".")
}

/// Overlay `vars` onto `values`.
///
/// `SERVER_REQUEST_TIMEOUT_MS` replaces an existing `server.request-timeout-ms`;
/// a variable with no matching key is stored under its normalized form.
pub(crate) fn overlay_env(
    values: &mut HashMap<String, ConfigValue>,
    vars: impl IntoIterator<Item = (String, String)>,
) {
    let mut by_normal: HashMap<String, String> = values
        .keys()
        .map(|k| (normalize_key(k), k.clone()))
        .collect();

    for (name, raw) in vars {
        let normal = normalize_key(&name);
        let key = by_normal
            .entry(normal.clone())
            .or_insert_with(|| normal)
            .clone();
        values.insert(key, ConfigValue::String(raw));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_var_replaces_hyphenated_yaml_key() {
        let mut values = HashMap::new();
        load_yaml_str("server:\n  request-timeout-ms: 5000\n", &mut values).unwrap();

        overlay_env(
            &mut values,
            [("SERVER_REQUEST_TIMEOUT_MS".to_string(), "250".to_string())],
        );

        assert_eq!(
            values.get("server.request-timeout-ms"),
            Some(&ConfigValue::String("250".into()))
        );
        assert!(!values.contains_key("server.request.timeout.ms"));
    }

    #[test]
    fn unknown_env_var_is_stored_normalized() {
        let mut values = HashMap::new();
        overlay_env(&mut values, [("DATABASE_URL".to_string(), "sqlite::memory:".to_string())]);
        assert!(values.contains_key("database.url"));
    }

    #[test]
    fn sequences_are_indexed() {
        let mut values = HashMap::new();
        load_yaml_str("tags: [a, b]\n", &mut values).unwrap();
        assert_eq!(values.get("tags.1"), Some(&ConfigValue::String("b".into())));
        assert!(matches!(values.get("tags"), Some(ConfigValue::List(items)) if items.len() == 2));
    }
}
