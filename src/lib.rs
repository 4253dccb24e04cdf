//! Host-aware, self-migrating YAML configuration for CLI tools.
//!
//! Hostfig persists user settings and per-host authentication credentials
//! in a single human-editable YAML document, and transparently migrates an
//! older single-host file layout into the newer multi-host one on the first
//! write — no data loss, no user intervention.
//!
//! ```ignore
//! let mut config = hostfig::Config::from_file(path)?;
//! let editor = config.get("", "editor")?;              // root-level setting
//! let token = config.get("github.com", "oauth_token")?; // per-host credential
//! config.set("", "editor", "vim")?;
//! config.write()?;
//! ```
//!
//! # The document
//!
//! The file is one top-level YAML mapping. A `hosts` key groups per-host
//! credential entries; every other top-level key is a plain setting:
//!
//! ```text
//! hosts:
//!   github.com:
//!   - user: monalisa
//!     oauth_token: OTOKEN
//! editor: vim
//! ```
//!
//! The parsed tree preserves key order, and edits mutate it in place, so a
//! `write` re-serializes the user's file without reshuffling it. Hand-added
//! keys hostfig doesn't know about survive untouched.
//!
//! # Two formats, one surface
//!
//! Files written before the multi-host layout have no `hosts` key. Such a
//! *legacy* file behaves like an empty config for reads; its first `set`
//! rewrites the file in the current format (keeping a `.bak` of the
//! original) and then applies the mutation. Callers never branch on the
//! format: [`Config`] exposes the same get/set/hosts/write surface for both.
//!
//! # Lifecycle and concurrency
//!
//! One [`Config`] per process invocation: construct from the file, mutate in
//! memory, flush once with [`write`](Config::write). All I/O is blocking and
//! unsynchronized — two concurrent invocations against the same file race,
//! and the last writer wins. That matches the tool this crate serves and is
//! not mitigated here.
//!
//! # Errors
//!
//! All fallible operations return [`ConfigError`]. A missing file is its own
//! variant so callers can treat it as a first run; unset keys are not errors
//! (they read as a documented default, empty for all but `git_protocol`).

pub mod error;
pub mod paths;

mod config;
mod document;
mod file;
mod hosts;
mod map;
mod migrate;

#[cfg(test)]
mod fixtures;

pub use config::Config;
pub use document::Format;
pub use error::ConfigError;
pub use file::{Disk, ReadFile};
pub use hosts::{AuthConfig, DEFAULT_HOST, HostConfig};
