//! Get/set of scalar string values on one YAML mapping node.
//!
//! These are thin views: all state lives in the shared document tree, and a
//! set mutates the tree in place. Nothing here touches the filesystem —
//! persistence happens when the owning config's `write` is called.
//!
//! Lookups are a linear scan in file order. A missing or empty entry falls
//! back to a per-key documented default; only `git_protocol` has a non-empty
//! one today.

use serde_yaml::{Mapping, Value};

const DEFAULT_GIT_PROTOCOL: &str = "https";

/// Find the value node paired with `key`, scanning entries in file order.
pub(crate) fn find_entry<'a>(map: &'a Mapping, key: &str) -> Option<&'a Value> {
    map.iter()
        .find(|(k, _)| k.as_str() == Some(key))
        .map(|(_, v)| v)
}

pub(crate) fn find_entry_mut<'a>(map: &'a mut Mapping, key: &str) -> Option<&'a mut Value> {
    map.iter_mut()
        .find(|(k, _)| k.as_str() == Some(key))
        .map(|(_, v)| v)
}

/// Render a scalar node as a string. Mappings and sequences have no string
/// form and read as unset.
pub(crate) fn scalar_str(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Get `key`'s scalar value. Absent or empty entries yield the key's
/// default; this never reports a missing key to the caller.
pub(crate) fn get_string_value(map: &Mapping, key: &str) -> String {
    match find_entry(map, key).and_then(scalar_str) {
        Some(value) if !value.is_empty() => value,
        _ => default_for(key).to_string(),
    }
}

/// Set `key` to `value`. An existing value node is overwritten in place; a
/// new key is appended after all existing entries, leaving their order
/// untouched.
pub(crate) fn set_string_value(map: &mut Mapping, key: &str, value: &str) {
    match find_entry_mut(map, key) {
        Some(node) => *node = Value::String(value.to_string()),
        None => {
            map.insert(
                Value::String(key.to_string()),
                Value::String(value.to_string()),
            );
        }
    }
}

/// The documented built-in default for a key.
fn default_for(key: &str) -> &'static str {
    // only one setting has a non-empty default right now
    match key {
        "git_protocol" => DEFAULT_GIT_PROTOCOL,
        _ => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_map(doc: &str) -> Mapping {
        match serde_yaml::from_str(doc).unwrap() {
            Value::Mapping(map) => map,
            other => panic!("expected a mapping, got {other:?}"),
        }
    }

    #[test]
    fn get_existing_value() {
        let map = parse_map("editor: ed\npager: less\n");
        assert_eq!(get_string_value(&map, "editor"), "ed");
    }

    #[test]
    fn get_missing_key_returns_empty() {
        let map = parse_map("editor: ed\n");
        assert_eq!(get_string_value(&map, "nonexistent"), "");
    }

    #[test]
    fn get_missing_git_protocol_returns_builtin_default() {
        let map = parse_map("editor: ed\n");
        assert_eq!(get_string_value(&map, "git_protocol"), "https");
    }

    #[test]
    fn get_empty_value_falls_back_to_default() {
        let map = parse_map("git_protocol: ''\neditor: ''\n");
        assert_eq!(get_string_value(&map, "git_protocol"), "https");
        assert_eq!(get_string_value(&map, "editor"), "");
    }

    #[test]
    fn get_renders_non_string_scalars() {
        let map = parse_map("timeout: 30\nprompt: true\n");
        assert_eq!(get_string_value(&map, "timeout"), "30");
        assert_eq!(get_string_value(&map, "prompt"), "true");
    }

    #[test]
    fn get_mapping_value_reads_as_unset() {
        let map = parse_map("aliases:\n  co: checkout\n");
        assert_eq!(get_string_value(&map, "aliases"), "");
    }

    #[test]
    fn set_overwrites_in_place() {
        let mut map = parse_map("editor: ed\npager: less\n");
        set_string_value(&mut map, "editor", "vim");
        assert_eq!(get_string_value(&map, "editor"), "vim");
        assert_eq!(get_string_value(&map, "pager"), "less");
    }

    #[test]
    fn set_new_key_appends_without_disturbing_order() {
        let mut map = parse_map("zeta: 1\nalpha: 2\n");
        set_string_value(&mut map, "editor", "vim");

        let keys: Vec<&str> = map.iter().filter_map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, ["zeta", "alpha", "editor"]);
    }

    #[test]
    fn set_then_get_round_trips() {
        let mut map = Mapping::new();
        set_string_value(&mut map, "editor", "vim");
        assert_eq!(get_string_value(&map, "editor"), "vim");
    }

    #[test]
    fn find_entry_is_exact_match() {
        let map = parse_map("Editor: ed\n");
        assert!(find_entry(&map, "editor").is_none());
        assert!(find_entry(&map, "Editor").is_some());
    }
}
