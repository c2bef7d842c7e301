use std::collections::HashMap;

/// Read-only membership view of an [`Environment`].
///
/// The parser disambiguates a bare word (variable reference versus numeric
/// literal) by asking whether the name is currently defined. That is the only
/// capability it needs, so it receives this narrow view instead of the full
/// read/write store.
pub trait VariableLookup {
    /// Returns whether `name` currently holds a value.
    fn is_defined(&self, name: &str) -> bool;
}

/// The mutable name-to-value store representing program variables.
///
/// An environment lives for the lifetime of one interpreter instance and
/// persists across lines. Assignments overwrite; nothing is ever removed.
#[derive(Debug, Default)]
pub struct Environment {
    variables: HashMap<String, f64>,
}

impl Environment {
    /// Creates an empty environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current value of `name`, if it has one.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<f64> {
        self.variables.get(name).copied()
    }

    /// Stores `value` under `name`, overwriting any previous value.
    pub fn set(&mut self, name: &str, value: f64) {
        self.variables.insert(name.to_owned(), value);
    }
}

impl VariableLookup for Environment {
    fn is_defined(&self, name: &str) -> bool {
        self.variables.contains_key(name)
    }
}
