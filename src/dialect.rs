//! SQL dialects and the options controlling how a tree is rendered.

use core::fmt::{self, Display};
use core::str::FromStr;

/// Default number of spaces used to indent the column list of `CREATE TABLE`.
pub const DEFAULT_INDENT: usize = 2;

/// Default bound on how deeply nested a tree may be before rendering gives up.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// A SQL text rendering target.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "testing", derive(arbitrary::Arbitrary))]
pub enum Dialect {
    /// Dialect-agnostic rendering.
    #[default]
    Default,
    /// MySQL.
    MySql,
    /// Apache Hive.
    Hive,
    /// IBM DB2.
    Db2,
    /// Microsoft SQL Server.
    SqlServer,
}

impl Dialect {
    /// All dialects, in declaration order.
    pub const ALL: [Dialect; 5] = [
        Dialect::Default,
        Dialect::MySql,
        Dialect::Hive,
        Dialect::Db2,
        Dialect::SqlServer,
    ];

    /// Returns the display name of the dialect.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Dialect::Default => "DEFAULT",
            Dialect::MySql => "MySQL",
            Dialect::Hive => "Hive",
            Dialect::Db2 => "DB2",
            Dialect::SqlServer => "SQL Server",
        }
    }
}

impl Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a dialect name is not recognised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("Unknown SQL dialect name")]
pub struct UnknownDialect;

impl FromStr for Dialect {
    type Err = UnknownDialect;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let matches = |name: &str| s.eq_ignore_ascii_case(name);
        if matches("default") {
            Ok(Dialect::Default)
        } else if matches("mysql") {
            Ok(Dialect::MySql)
        } else if matches("hive") {
            Ok(Dialect::Hive)
        } else if matches("db2") {
            Ok(Dialect::Db2)
        } else if matches("sqlserver") || matches("sql_server") || matches("sql server") {
            Ok(Dialect::SqlServer)
        } else {
            Err(UnknownDialect)
        }
    }
}

/// Options for a single render call.
///
/// # Example
///
/// ```
/// use metasequoia_ast::{Dialect, RenderOptions};
///
/// let options = RenderOptions::new(Dialect::MySql).with_indent(4);
/// assert_eq!(options.dialect, Dialect::MySql);
/// assert_eq!(options.indent, 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RenderOptions {
    /// The target dialect.
    pub dialect: Dialect,
    /// Spaces used to indent `CREATE TABLE` column and key lines.
    pub indent: usize,
    /// Maximum nesting depth of expressions and subqueries.
    pub max_depth: usize,
}

impl RenderOptions {
    /// Creates options for the given dialect with default indentation and depth bound.
    #[must_use]
    pub const fn new(dialect: Dialect) -> Self {
        Self {
            dialect,
            indent: DEFAULT_INDENT,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Sets the `CREATE TABLE` indentation width.
    #[must_use]
    pub const fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    /// Sets the maximum nesting depth.
    #[must_use]
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self::new(Dialect::Default)
    }
}

impl From<Dialect> for RenderOptions {
    fn from(dialect: Dialect) -> Self {
        Self::new(dialect)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_dialect_names() {
        assert_eq!("mysql".parse(), Ok(Dialect::MySql));
        assert_eq!("HIVE".parse(), Ok(Dialect::Hive));
        assert_eq!(" Db2 ".parse(), Ok(Dialect::Db2));
        assert_eq!("sql_server".parse(), Ok(Dialect::SqlServer));
        assert_eq!("SqlServer".parse(), Ok(Dialect::SqlServer));
        assert_eq!("default".parse(), Ok(Dialect::Default));
        assert_eq!("oracle".parse::<Dialect>(), Err(UnknownDialect));
    }

    #[test]
    fn test_default_options() {
        let options = RenderOptions::default();
        assert_eq!(options.dialect, Dialect::Default);
        assert_eq!(options.indent, DEFAULT_INDENT);
        assert_eq!(options.max_depth, DEFAULT_MAX_DEPTH);
        assert_eq!(RenderOptions::from(Dialect::Hive).dialect, Dialect::Hive);
    }
}
