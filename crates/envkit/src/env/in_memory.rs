use std::cell::RefCell;
use std::collections::BTreeMap;

use super::Environment;
use super::environment::{validate_name, validate_value};
use crate::error::EnvError;

/// Won't touch the global process environment.
///
/// Uses `RefCell` for interior mutability so every method takes `&self`,
/// consistent with [`MemFs`](crate::fs::MemFs). Applies the same name and
/// value validation as [`ProcessEnv`](super::ProcessEnv).
#[derive(Debug, Default)]
pub struct InMemoryEnv {
    vars: RefCell<BTreeMap<String, String>>,
}

impl InMemoryEnv {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an environment holding `vars`, bypassing validation.
    pub fn with_vars<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            vars: RefCell::new(
                vars.into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.vars.borrow().contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.vars.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.borrow().is_empty()
    }
}

impl Environment for InMemoryEnv {
    fn lookup(&self, name: &str) -> Option<String> {
        self.vars.borrow().get(name).cloned()
    }

    fn set(&self, name: &str, value: &str) -> Result<(), EnvError> {
        validate_name(name)?;
        validate_value(name, value)?;
        self.vars
            .borrow_mut()
            .insert(name.to_string(), value.to_string());
        Ok(())
    }

    fn unset(&self, name: &str) -> Result<(), EnvError> {
        validate_name(name)?;
        self.vars.borrow_mut().remove(name);
        Ok(())
    }

    fn vars(&self) -> Vec<(String, String)> {
        self.vars
            .borrow()
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    fn clear(&self) -> Result<(), EnvError> {
        self.vars.borrow_mut().clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_memory_env_set_and_get() {
        let env = InMemoryEnv::new();
        env.set("TEST_VAR", "test_value").unwrap();

        assert_eq!(env.lookup("TEST_VAR").as_deref(), Some("test_value"));
        assert_eq!(env.get("TEST_VAR"), "test_value");
    }

    #[test]
    fn test_in_memory_env_not_present() {
        let env = InMemoryEnv::new();

        assert_eq!(env.lookup("NONEXISTENT"), None);
        assert_eq!(env.get("NONEXISTENT"), "");
    }

    #[test]
    fn test_in_memory_env_unset_and_clear() {
        let env = InMemoryEnv::with_vars([("A", "1"), ("B", "2"), ("C", "3")]);

        env.unset("A").unwrap();
        env.unset("NOT_SET").unwrap();
        assert!(!env.contains("A"));
        assert_eq!(env.len(), 2);

        env.clear().unwrap();
        assert!(env.is_empty());
    }

    #[test]
    fn test_in_memory_env_vars_are_sorted_by_name() {
        let env = InMemoryEnv::with_vars([("B", "2"), ("A", "1")]);

        assert_eq!(
            env.vars(),
            vec![
                ("A".to_string(), "1".to_string()),
                ("B".to_string(), "2".to_string())
            ]
        );
    }

    #[test]
    fn test_in_memory_env_rejects_invalid_names() {
        let env = InMemoryEnv::new();

        assert!(env.set("", "x").is_err());
        assert!(env.set("A=B", "x").is_err());
        assert!(env.is_empty());
    }

    #[test]
    fn test_generic_function_with_in_memory_env() {
        fn get_value_or_default<E: Environment>(env: &E, key: &str, default: &str) -> String {
            env.lookup(key).unwrap_or_else(|| default.to_string())
        }

        let env = InMemoryEnv::with_vars([("DATABASE_URL", "postgres://test")]);
        assert_eq!(
            get_value_or_default(&env, "DATABASE_URL", "default"),
            "postgres://test"
        );
        assert_eq!(get_value_or_default(&env, "MISSING", "default"), "default");
    }
}
