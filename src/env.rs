//! Process-environment abstraction.
//!
//! Resolution behavior depends entirely on environment variables (GOPATH in
//! particular), so every operation takes an [`Env`] instead of reading the
//! real process environment directly. Tests and embedding callers supply a
//! [`MapEnv`]; production callers pass [`OsEnv`].

use std::collections::BTreeMap;
use std::env;

pub trait Env {
    /// Value of a single variable, or `None` when unset.
    fn getenv(&self, key: &str) -> Option<String>;

    /// The full environment as `KEY=VALUE` entries, suitable for handing to
    /// a child process verbatim.
    fn environ(&self) -> Vec<String>;
}

/// The real process environment.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsEnv;

impl Env for OsEnv {
    fn getenv(&self, key: &str) -> Option<String> {
        env::var(key).ok()
    }

    fn environ(&self) -> Vec<String> {
        env::vars().map(|(key, value)| format!("{key}={value}")).collect()
    }
}

/// In-memory environment double.
#[derive(Debug, Default, Clone)]
pub struct MapEnv {
    vars: BTreeMap<String, String>,
}

impl MapEnv {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.vars.insert(key.into(), value.into());
    }
}

impl Env for MapEnv {
    fn getenv(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }

    fn environ(&self) -> Vec<String> {
        self.vars
            .iter()
            .map(|(key, value)| format!("{key}={value}"))
            .collect()
    }
}

/// Splits `KEY=VALUE` entries back into pairs, skipping malformed ones.
pub(crate) fn environ_pairs(environ: &[String]) -> impl Iterator<Item = (&str, &str)> {
    environ.iter().filter_map(|entry| entry.split_once('='))
}
