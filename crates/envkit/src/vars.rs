//! Collections of environment variables.
//!
//! Responsibilities:
//! - Provide `Vars`, a name-to-value map with sorted listing and rendering.
//! - Apply a collection to an environment in one call.
//! - Read all, or a named subset, of the variables of an environment.
//!
//! Invariants:
//! - Names are unique; `names()` and `Display` are sorted by name.
//! - `set` stops at the first failure and does not roll back entries already applied.

use std::collections::BTreeMap;
use std::collections::btree_map;
use std::fmt;

use thiserror::Error;

use crate::env::{Environment, ProcessEnv};
use crate::error::EnvError;

/// Errors from applying a [`Vars`] collection.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VarsError {
    #[error("failed to set environment variable {name}: {source}")]
    Set {
        name: String,
        #[source]
        source: EnvError,
    },
}

/// A map of environment variable names to values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vars(BTreeMap<String, String>);

impl Vars {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a variable, returning the previous value for `name`.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.0.insert(name.into(), value.into())
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, String> {
        self.0.iter()
    }

    /// Returns the variable names in sorted order.
    pub fn names(&self) -> Vec<&str> {
        self.0.keys().map(String::as_str).collect()
    }

    /// Applies every variable to the process environment.
    pub fn set(&self) -> Result<(), VarsError> {
        self.set_in(&ProcessEnv)
    }

    /// Applies every variable to `env`, stopping at the first failure.
    pub fn set_in<E: Environment + ?Sized>(&self, env: &E) -> Result<(), VarsError> {
        for (name, value) in &self.0 {
            env.set(name, value).map_err(|source| VarsError::Set {
                name: name.clone(),
                source,
            })?;
        }
        Ok(())
    }
}

/// Renders `[NAME1="v1",NAME2="v2"]`, sorted by name; an empty collection renders `[]`.
impl fmt::Display for Vars {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, (name, value)) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{name}=\"{value}\"")?;
        }
        f.write_str("]")
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Vars {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl<K: Into<String>, V: Into<String>, const N: usize> From<[(K, V); N]> for Vars {
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

impl From<BTreeMap<String, String>> for Vars {
    fn from(map: BTreeMap<String, String>) -> Self {
        Self(map)
    }
}

impl From<Vars> for BTreeMap<String, String> {
    fn from(vars: Vars) -> Self {
        vars.0
    }
}

impl IntoIterator for Vars {
    type Item = (String, String);
    type IntoIter = btree_map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Vars {
    type Item = (&'a String, &'a String);
    type IntoIter = btree_map::Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Reads process variables into a [`Vars`].
///
/// With no names every variable is returned; otherwise only the named
/// variables that are set.
pub fn get_vars<I, S>(names: I) -> Vars
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    get_vars_from(&ProcessEnv, names)
}

/// Reads variables of `env` into a [`Vars`]; see [`get_vars`].
pub fn get_vars_from<E, I, S>(env: &E, names: I) -> Vars
where
    E: Environment + ?Sized,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut names = names.into_iter().peekable();
    if names.peek().is_none() {
        return env.vars().into_iter().collect();
    }
    names
        .filter_map(|name| {
            let name = name.as_ref();
            env.lookup(name).map(|value| (name.to_string(), value))
        })
        .collect()
}
