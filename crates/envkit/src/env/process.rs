use std::env;
use std::ffi::{OsStr, OsString};

use super::Environment;
use super::environment::{validate_name, validate_os_name, validate_os_value, validate_value};
use crate::error::EnvError;

/// Zero-sized type that delegates to the process environment table.
///
/// The `String` view (`lookup`, `vars`) never alters data: a value that is
/// not valid Unicode reads as unset, and such entries are left out of
/// `vars`. The raw view (`lookup_os`, `vars_os`, `set_os`) sees every entry
/// byte for byte. Mutations validate their input and report [`EnvError`]
/// where the standard library would panic.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl Environment for ProcessEnv {
    fn lookup(&self, name: &str) -> Option<String> {
        validate_name(name).ok()?;
        env::var(name).ok()
    }

    fn set(&self, name: &str, value: &str) -> Result<(), EnvError> {
        validate_name(name)?;
        validate_value(name, value)?;
        // SAFETY: the process environment is shared mutable state; callers
        // must not read or write it from other threads concurrently.
        unsafe { env::set_var(name, value) };
        Ok(())
    }

    fn unset(&self, name: &str) -> Result<(), EnvError> {
        validate_name(name)?;
        // SAFETY: see `set`.
        unsafe { env::remove_var(name) };
        Ok(())
    }

    fn vars(&self) -> Vec<(String, String)> {
        self.vars_os()
            .into_iter()
            .filter_map(|(name, value)| Some((name.into_string().ok()?, value.into_string().ok()?)))
            .collect()
    }

    fn lookup_os(&self, name: &str) -> Option<OsString> {
        validate_name(name).ok()?;
        env::var_os(name)
    }

    /// Lists every variable whose name could be set again.
    ///
    /// Hosts may list pseudo-variables (e.g. `=C:` on Windows) that cannot be
    /// set or removed by name; those are skipped here and by `clear`.
    fn vars_os(&self) -> Vec<(OsString, OsString)> {
        env::vars_os()
            .filter(|(name, _)| validate_os_name(name).is_ok())
            .collect()
    }

    fn set_os(&self, name: &OsStr, value: &OsStr) -> Result<(), EnvError> {
        validate_os_name(name)?;
        validate_os_value(name, value)?;
        // SAFETY: see `set`.
        unsafe { env::set_var(name, value) };
        Ok(())
    }

    fn clear(&self) -> Result<(), EnvError> {
        for (name, _) in self.vars_os() {
            // SAFETY: see `set`.
            unsafe { env::remove_var(&name) };
        }
        Ok(())
    }
}

/// Returns the value of the process variable `name`, or an empty string if it is not set.
pub fn get(name: &str) -> String {
    ProcessEnv.get(name)
}

/// Returns the value of the process variable `name`, or `None` if it is not set.
pub fn lookup(name: &str) -> Option<String> {
    ProcessEnv.lookup(name)
}

/// Sets the process variable `name` to `value`.
pub fn set(name: &str, value: &str) -> Result<(), EnvError> {
    ProcessEnv.set(name, value)
}

/// Removes each named process variable, stopping at the first failure.
///
/// Names that are not set are ignored.
pub fn unset<I, S>(names: I) -> Result<(), EnvError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    for name in names {
        ProcessEnv.unset(name.as_ref())?;
    }
    Ok(())
}

/// Removes every process variable.
pub fn clear() -> Result<(), EnvError> {
    ProcessEnv.clear()
}
