use std::collections::{BTreeMap, HashMap};
use std::env::VarError;

/// A read-only source of named string values
pub trait Environment {
    /// Look up `name`, returning `None` when it is unset or empty
    fn lookup(&self, name: &str) -> Option<String>;
}

/// The ambient process environment
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnvironment;

impl Environment for ProcessEnvironment {
    fn lookup(&self, name: &str) -> Option<String> {
        match std::env::var(name) {
            Ok(value) => present(value),
            Err(VarError::NotPresent) => None,
            Err(VarError::NotUnicode(_)) => {
                log::debug!("{name} is set but not valid unicode, treating as missing");
                None
            }
        }
    }
}

impl Environment for HashMap<String, String> {
    fn lookup(&self, name: &str) -> Option<String> {
        self.get(name).cloned().and_then(present)
    }
}

impl Environment for BTreeMap<String, String> {
    fn lookup(&self, name: &str) -> Option<String> {
        self.get(name).cloned().and_then(present)
    }
}

impl<E: Environment + ?Sized> Environment for &E {
    fn lookup(&self, name: &str) -> Option<String> {
        (**self).lookup(name)
    }
}

/// Empty values count as unset
pub fn present(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}
