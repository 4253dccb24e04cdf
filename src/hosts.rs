//! Per-host credential resolution.
//!
//! The `hosts` mapping pairs each host name with a sequence of auth entries
//! (user + oauth token). Several accounts per host are representable; only
//! the first entry is consulted for reads and writes today.
//!
//! The parsed list is a snapshot for lookup and display. Value reads and
//! writes go back through the document tree (see [`config`](crate::config))
//! so in-memory edits stay visible.

use serde_yaml::{Mapping, Value};

use crate::error::ConfigError;
use crate::map;

/// The host consulted when the caller names none.
pub const DEFAULT_HOST: &str = "github.com";

/// One credential set: user identifier and opaque token, each optional.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthConfig {
    pub user: Option<String>,
    pub token: Option<String>,
}

/// The resolved settings for one host name, in file order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    pub host: String,
    pub auths: Vec<AuthConfig>,
}

/// Walk a `hosts` mapping into an ordered host list.
///
/// Each host-name key must pair with a non-empty sequence of auth mappings;
/// anything else is [`ConfigError::MalformedHosts`]. Entries whose key is
/// empty (or not a scalar) are skipped as trailing artifacts.
pub(crate) fn parse_hosts(hosts: &Mapping) -> Result<Vec<HostConfig>, ConfigError> {
    let mut configs = Vec::new();

    for (key, value) in hosts {
        let Some(host) = map::scalar_str(key) else {
            continue;
        };
        if host.is_empty() {
            continue;
        }

        let auths_root = value.as_sequence().ok_or(ConfigError::MalformedHosts)?;
        if auths_root.is_empty() {
            return Err(ConfigError::MalformedHosts);
        }

        let auths = auths_root
            .iter()
            .map(parse_auth)
            .collect::<Result<Vec<_>, _>>()?;

        configs.push(HostConfig { host, auths });
    }

    Ok(configs)
}

fn parse_auth(node: &Value) -> Result<AuthConfig, ConfigError> {
    let auth = node.as_mapping().ok_or(ConfigError::MalformedHosts)?;
    Ok(AuthConfig {
        user: map::find_entry(auth, "user").and_then(map::scalar_str),
        token: map::find_entry(auth, "oauth_token").and_then(map::scalar_str),
    })
}

/// Exact, case-sensitive lookup by host name.
pub(crate) fn host_by_name<'a>(
    hosts: &'a [HostConfig],
    hostname: &str,
) -> Result<&'a HostConfig, ConfigError> {
    hosts
        .iter()
        .find(|hc| hc.host == hostname)
        .ok_or_else(|| ConfigError::HostNotFound {
            hostname: hostname.to_string(),
        })
}
