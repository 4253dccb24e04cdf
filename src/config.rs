//! The config facade: one entry point for reading and writing settings,
//! regardless of which on-disk format the file was found in.
//!
//! A [`Config`] is constructed once per invocation from the file (or fresh,
//! on first run), mutated in memory by `set` calls, and flushed back with at
//! most one `write`. It exclusively owns the document tree; the host list is
//! parsed lazily and cached for the instance's lifetime. Values read and
//! written through hosts resolve into the same tree, so an un-flushed `set`
//! is immediately visible to `get`.
//!
//! Format differences are hidden: on a legacy file, `get` yields nothing and
//! the first `set` migrates the file on disk, then performs the requested
//! mutation and its own write (see [`migrate`](crate::migrate)).

use std::path::{Path, PathBuf};

use serde_yaml::{Mapping, Value};

use crate::document::{self, Format};
use crate::error::ConfigError;
use crate::file::{self, Disk, ReadFile};
use crate::hosts::{self, DEFAULT_HOST, HostConfig};
use crate::map;
use crate::migrate;

pub struct Config {
    path: PathBuf,
    reader: Box<dyn ReadFile>,
    root: Mapping,
    format: Format,
    hosts: Option<Vec<HostConfig>>,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("path", &self.path)
            .field("root", &self.root)
            .field("format", &self.format)
            .field("hosts", &self.hosts)
            .finish_non_exhaustive()
    }
}

impl Config {
    /// Parse the config file at `path` from disk.
    pub fn from_file(path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        Self::from_file_with(Box::new(Disk), path)
    }

    /// Like [`from_file`](Self::from_file), reading bytes through an
    /// explicit capability.
    pub fn from_file_with(
        reader: Box<dyn ReadFile>,
        path: impl Into<PathBuf>,
    ) -> Result<Self, ConfigError> {
        let path = path.into();
        let data = file::read_config(reader.as_ref(), &path)?;
        let root = document::parse_document(&data)?;
        let format = document::detect_format(&root);
        Ok(Self {
            path,
            reader,
            root,
            format,
            hosts: None,
        })
    }

    /// Parse the file at `path`, or start a fresh current-format document if
    /// it does not exist yet. Other errors still surface.
    pub fn load_or_init(path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let path = path.into();
        match Self::from_file(&path) {
            Ok(config) => Ok(config),
            Err(ConfigError::DoesNotExist { .. }) => Ok(Self::new(path)),
            Err(err) => Err(err),
        }
    }

    /// A fresh in-memory current-format document bound to `path`.
    ///
    /// The root is seeded with an empty `hosts` mapping so the written file
    /// is detected as current format when re-read.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let mut root = Mapping::new();
        root.insert(
            Value::String("hosts".to_string()),
            Value::Mapping(Mapping::new()),
        );
        Self {
            path: path.into(),
            reader: Box::new(Disk),
            root,
            format: Format::Current,
            hosts: None,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn format(&self) -> Format {
        self.format
    }

    /// Read `key`, from the root section when `hostname` is empty, otherwise
    /// from the named host's first credential entry. Unset keys read as
    /// their documented default (empty for all but `git_protocol`). On a
    /// legacy document every read yields the empty string.
    pub fn get(&mut self, hostname: &str, key: &str) -> Result<String, ConfigError> {
        if self.format == Format::Legacy {
            return Ok(String::new());
        }
        if hostname.is_empty() {
            return Ok(map::get_string_value(&self.root, key));
        }

        self.config_for_host(hostname)?;
        let auth = self
            .first_auth_map(hostname)
            .ok_or(ConfigError::MalformedHosts)?;
        Ok(map::get_string_value(auth, key))
    }

    /// Set `key` to `value`, in the root section or the named host's first
    /// credential entry. In-memory only: nothing persists until
    /// [`write`](Self::write). On a legacy document this instead migrates
    /// the file and then applies (and persists) the mutation.
    pub fn set(&mut self, hostname: &str, key: &str, value: &str) -> Result<(), ConfigError> {
        if self.format == Format::Legacy {
            return self.migrate_and_set(hostname, key, value);
        }
        if hostname.is_empty() {
            map::set_string_value(&mut self.root, key, value);
            return Ok(());
        }

        self.config_for_host(hostname)?;
        let auth = self
            .first_auth_map_mut(hostname)
            .ok_or(ConfigError::MalformedHosts)?;
        map::set_string_value(auth, key, value);
        Ok(())
    }

    /// Ordered root-level scalar entries, for listing.
    pub fn entries(&self) -> Vec<(String, String)> {
        self.root
            .iter()
            .filter_map(|(k, v)| Some((map::scalar_str(k)?, map::scalar_str(v)?)))
            .collect()
    }

    /// The per-host entries in file order, parsed once and cached.
    ///
    /// On a legacy document the root mapping itself plays the role of the
    /// `hosts` mapping, matching how such files were laid out.
    pub fn hosts(&mut self) -> Result<&[HostConfig], ConfigError> {
        if self.hosts.is_none() {
            let parsed = match self.format {
                Format::Current => {
                    let entry = map::find_entry(&self.root, "hosts")
                        .and_then(Value::as_mapping)
                        .ok_or(ConfigError::MalformedHosts)?;
                    hosts::parse_hosts(entry)?
                }
                Format::Legacy => hosts::parse_hosts(&self.root)?,
            };
            self.hosts = Some(parsed);
        }
        Ok(self.hosts.as_deref().unwrap_or_default())
    }

    /// Exact-match lookup of one host's entry.
    pub fn config_for_host(&mut self, hostname: &str) -> Result<&HostConfig, ConfigError> {
        hosts::host_by_name(self.hosts()?, hostname)
    }

    /// The entry for the built-in default host.
    pub fn default_host_config(&mut self) -> Result<&HostConfig, ConfigError> {
        self.config_for_host(DEFAULT_HOST)
    }

    /// Serialize the whole in-memory tree and overwrite the config file.
    ///
    /// # Panics
    ///
    /// Panics on a still-legacy config: its first `set` migrates and writes,
    /// so reaching here means the caller skipped `set` entirely.
    pub fn write(&self) -> Result<(), ConfigError> {
        if self.format == Format::Legacy {
            panic!("write on a legacy config; set performs the migration write");
        }
        let marshalled = serde_yaml::to_string(&self.root)
            .map_err(|source| ConfigError::Serialize { source })?;
        file::write_config(&self.path, marshalled.as_bytes())
    }

    /// Migrate the on-disk legacy file, adopt the re-parsed tree, then run
    /// the requested mutation through the current-format path and persist.
    fn migrate_and_set(
        &mut self,
        hostname: &str,
        key: &str,
        value: &str,
    ) -> Result<(), ConfigError> {
        let root = migrate::migrate_file(self.reader.as_ref(), &self.path)?;
        self.format = document::detect_format(&root);
        self.root = root;
        self.hosts = None;

        self.set(hostname, key, value)?;
        self.write()
    }

    fn first_auth_map(&self, hostname: &str) -> Option<&Mapping> {
        let hosts = map::find_entry(&self.root, "hosts")?.as_mapping()?;
        let auths = map::find_entry(hosts, hostname)?.as_sequence()?;
        auths.first()?.as_mapping()
    }

    fn first_auth_map_mut(&mut self, hostname: &str) -> Option<&mut Mapping> {
        let hosts = map::find_entry_mut(&mut self.root, "hosts")?.as_mapping_mut()?;
        let auths = map::find_entry_mut(hosts, hostname)?.as_sequence_mut()?;
        auths.first_mut()?.as_mapping_mut()
    }
}
