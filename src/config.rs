use smol_str::SmolStr;

use crate::dialect::{Dialect, HasDialect};

/// Construction-time settings of a [`crate::Builder`].
///
/// `prefix` replaces the `table.` qualifier marker wherever it appears in a
/// table name or a filtered fragment.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Config {
    pub dialect: Dialect,
    pub prefix: SmolStr,
}

impl Config {
    pub fn new(dialect: Dialect) -> Self {
        Self {
            dialect,
            prefix: SmolStr::default(),
        }
    }

    pub fn of<D: HasDialect>() -> Self {
        Self::new(D::DIALECT)
    }

    pub fn prefix<T>(mut self, prefix: T) -> Self
    where
        T: Into<SmolStr>,
    {
        self.prefix = prefix.into();
        self
    }
}
