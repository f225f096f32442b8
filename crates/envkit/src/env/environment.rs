use std::ffi::{OsStr, OsString};

use crate::error::EnvError;

/// Narrow capability over a process-style environment table.
///
/// The parser, loader, collection and snapshot types are generic over this
/// trait so they can run against [`ProcessEnv`](super::ProcessEnv) in
/// production and an in-memory table in tests. All methods take `&self`;
/// implementations that hold state use interior mutability.
///
/// # Thread Safety
///
/// Does **not** require `Send + Sync`, and no implementation provides
/// locking. Callers sharing an environment between threads serialize access
/// themselves.
pub trait Environment {
    /// Returns the value of `name`, or `None` if it is not set.
    fn lookup(&self, name: &str) -> Option<String>;

    /// Sets `name` to `value`, creating the variable if needed.
    fn set(&self, name: &str, value: &str) -> Result<(), EnvError>;

    /// Removes `name`. Removing a variable that is not set is not an error.
    fn unset(&self, name: &str) -> Result<(), EnvError>;

    /// Returns every variable as `(name, value)` pairs.
    fn vars(&self) -> Vec<(String, String)>;

    /// Returns the raw value of `name`, including values that are not valid
    /// Unicode.
    fn lookup_os(&self, name: &str) -> Option<OsString> {
        self.lookup(name).map(OsString::from)
    }

    /// Returns every variable as raw pairs, including entries that are not
    /// valid Unicode.
    fn vars_os(&self) -> Vec<(OsString, OsString)> {
        self.vars()
            .into_iter()
            .map(|(name, value)| (name.into(), value.into()))
            .collect()
    }

    /// Sets `name` to the raw `value`.
    ///
    /// The default implementation accepts only valid Unicode.
    fn set_os(&self, name: &OsStr, value: &OsStr) -> Result<(), EnvError> {
        let Some(name_str) = name.to_str() else {
            return Err(EnvError::InvalidName {
                name: name.to_string_lossy().into_owned(),
                reason: "name is not valid Unicode",
            });
        };
        let Some(value) = value.to_str() else {
            return Err(EnvError::InvalidValue {
                name: name_str.to_string(),
                reason: "value is not valid Unicode",
            });
        };
        self.set(name_str, value)
    }

    /// Returns the value of `name`, or an empty string if it is not set.
    ///
    /// Use [`lookup`](Self::lookup) to tell an unset variable from one set to
    /// an empty string.
    fn get(&self, name: &str) -> String {
        self.lookup(name).unwrap_or_default()
    }

    /// Removes every variable.
    fn clear(&self) -> Result<(), EnvError> {
        for (name, _) in self.vars() {
            self.unset(&name)?;
        }
        Ok(())
    }
}

impl<E: Environment + ?Sized> Environment for &E {
    fn lookup(&self, name: &str) -> Option<String> {
        (**self).lookup(name)
    }

    fn set(&self, name: &str, value: &str) -> Result<(), EnvError> {
        (**self).set(name, value)
    }

    fn unset(&self, name: &str) -> Result<(), EnvError> {
        (**self).unset(name)
    }

    fn vars(&self) -> Vec<(String, String)> {
        (**self).vars()
    }

    fn lookup_os(&self, name: &str) -> Option<OsString> {
        (**self).lookup_os(name)
    }

    fn vars_os(&self) -> Vec<(OsString, OsString)> {
        (**self).vars_os()
    }

    fn set_os(&self, name: &OsStr, value: &OsStr) -> Result<(), EnvError> {
        (**self).set_os(name, value)
    }

    fn get(&self, name: &str) -> String {
        (**self).get(name)
    }

    fn clear(&self) -> Result<(), EnvError> {
        (**self).clear()
    }
}

/// Why `name` cannot be used as a variable name on any host, if it cannot.
///
/// Works on encoded bytes so raw OS names are checked the same way.
fn name_problem(name: &[u8]) -> Option<&'static str> {
    if name.is_empty() {
        Some("name is empty")
    } else if name.contains(&b'=') {
        Some("name contains '='")
    } else if name.contains(&0) {
        Some("name contains a NUL character")
    } else {
        None
    }
}

/// Checks that `name` can be used as a variable name on any host.
pub(crate) fn validate_name(name: &str) -> Result<(), EnvError> {
    match name_problem(name.as_bytes()) {
        Some(reason) => Err(EnvError::InvalidName {
            name: name.to_string(),
            reason,
        }),
        None => Ok(()),
    }
}

pub(crate) fn validate_os_name(name: &OsStr) -> Result<(), EnvError> {
    match name_problem(name.as_encoded_bytes()) {
        Some(reason) => Err(EnvError::InvalidName {
            name: name.to_string_lossy().into_owned(),
            reason,
        }),
        None => Ok(()),
    }
}

/// Checks that `value` can be stored for `name`.
pub(crate) fn validate_value(name: &str, value: &str) -> Result<(), EnvError> {
    validate_os_value(OsStr::new(name), OsStr::new(value))
}

pub(crate) fn validate_os_value(name: &OsStr, value: &OsStr) -> Result<(), EnvError> {
    if value.as_encoded_bytes().contains(&0) {
        return Err(EnvError::InvalidValue {
            name: name.to_string_lossy().into_owned(),
            reason: "value contains a NUL character",
        });
    }
    Ok(())
}
