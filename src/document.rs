//! Document parsing and format detection.
//!
//! Parsing is a pure function of the byte content: it builds the generic
//! YAML tree and checks the root shape, but assigns no meaning to keys.
//! `serde_yaml`'s `Mapping` preserves insertion order, so the tree can be
//! mutated and re-serialized without shuffling the user's file.
//!
//! Two on-disk shapes exist, auto-detected from the root mapping's keys:
//!
//! - **Current** — a top-level `hosts` key maps host names to credential
//!   lists; other top-level keys are plain settings.
//! - **Legacy** — no `hosts` key. Reads yield nothing and the first write
//!   migrates the file (see [`migrate`](crate::migrate)).

use serde_yaml::{Mapping, Value};

use crate::error::ConfigError;

/// Which on-disk shape a parsed document has.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// Multi-host schema keyed under a top-level `hosts` mapping.
    Current,
    /// Pre-multi-host schema with no `hosts` key.
    Legacy,
}

/// Decode raw bytes into the root mapping.
///
/// Fails with [`ConfigError::Parse`] on malformed YAML,
/// [`ConfigError::MalformedConfig`] on an empty document, and
/// [`ConfigError::NotTopLevelMap`] when the root is not a mapping.
pub(crate) fn parse_document(data: &[u8]) -> Result<Mapping, ConfigError> {
    let root: Value =
        serde_yaml::from_slice(data).map_err(|source| ConfigError::Parse { source })?;

    match root {
        Value::Mapping(map) => Ok(map),
        Value::Null => Err(ConfigError::MalformedConfig),
        _ => Err(ConfigError::NotTopLevelMap),
    }
}

/// Scan the root mapping's keys: any key literally equal to `hosts` selects
/// the current format, even if its value turns out to be malformed (that is
/// deferred to host resolution).
pub(crate) fn detect_format(root: &Mapping) -> Format {
    let is_current = root
        .iter()
        .any(|(key, _)| key.as_str() == Some("hosts"));
    if is_current {
        Format::Current
    } else {
        Format::Legacy
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::test::{CURRENT_DOC, LEGACY_DOC};

    #[test]
    fn parses_a_top_level_mapping() {
        let root = parse_document(CURRENT_DOC.as_bytes()).unwrap();
        assert_eq!(root.len(), 2);
    }

    #[test]
    fn empty_document_is_malformed() {
        let err = parse_document(b"").unwrap_err();
        assert!(matches!(err, ConfigError::MalformedConfig));
        assert_eq!(err.to_string(), "malformed config");
    }

    #[test]
    fn non_mapping_root_is_rejected() {
        let err = parse_document(b"- a\n- b\n").unwrap_err();
        assert!(matches!(err, ConfigError::NotTopLevelMap));
        assert_eq!(err.to_string(), "expected a top level map");
    }

    #[test]
    fn broken_syntax_is_a_parse_error() {
        let err = parse_document(b"hosts: [\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn document_with_hosts_key_is_current() {
        let root = parse_document(CURRENT_DOC.as_bytes()).unwrap();
        assert_eq!(detect_format(&root), Format::Current);
    }

    #[test]
    fn document_without_hosts_key_is_legacy() {
        let root = parse_document(LEGACY_DOC.as_bytes()).unwrap();
        assert_eq!(detect_format(&root), Format::Legacy);
    }

    #[test]
    fn malformed_hosts_value_still_selects_current() {
        let root = parse_document(b"hosts: just-a-string\n").unwrap();
        assert_eq!(detect_format(&root), Format::Current);
    }

    #[test]
    fn parse_preserves_key_order() {
        let root = parse_document(b"zeta: 1\nalpha: 2\nmiddle: 3\n").unwrap();
        let keys: Vec<&str> = root.iter().filter_map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, ["zeta", "alpha", "middle"]);
    }
}
