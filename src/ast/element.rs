//! Element nodes: fixed building blocks that are not expressions.

use alloc::string::String;
use alloc::vec::Vec;

use crate::ast::expression::Expression;
use crate::catalog::CastDataType;

/// A possibly schema-qualified table name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "testing", derive(arbitrary::Arbitrary))]
pub struct TableName {
    /// Schema (database) name.
    pub schema: Option<String>,
    /// Table name.
    pub table: String,
}

impl TableName {
    /// Creates an unqualified table name.
    #[must_use]
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            schema: None,
            table: table.into(),
        }
    }

    /// Creates a schema-qualified table name.
    #[must_use]
    pub fn qualified(schema: impl Into<String>, table: impl Into<String>) -> Self {
        Self {
            schema: Some(schema.into()),
            table: table.into(),
        }
    }
}

/// A possibly schema-qualified function name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "testing", derive(arbitrary::Arbitrary))]
pub struct FunctionName {
    /// Schema the function lives in.
    pub schema: Option<String>,
    /// Function name.
    pub name: String,
}

impl FunctionName {
    /// Creates an unqualified function name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            schema: None,
            name: name.into(),
        }
    }
}

/// `AS name`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "testing", derive(arbitrary::Arbitrary))]
pub struct Alias {
    /// The alias.
    pub name: String,
}

impl Alias {
    /// Creates an alias.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// `AS a, b, c`, as used by Hive `LATERAL VIEW` with multi-column functions.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "testing", derive(arbitrary::Arbitrary))]
pub struct MultiAlias {
    /// The aliases, in order.
    pub names: Vec<String>,
}

impl MultiAlias {
    /// Creates a multi-name alias.
    #[must_use]
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }
}

/// The target type of a `CAST` call.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "testing", derive(arbitrary::Arbitrary))]
pub struct CastType {
    /// Whether the type is preceded by `SIGNED`.
    pub signed: bool,
    /// The target type.
    pub data_type: CastDataType,
    /// Type parameters, e.g. precision and scale.
    pub params: Option<Vec<u32>>,
}

impl CastType {
    /// Creates a parameterless cast target.
    #[must_use]
    pub fn new(data_type: CastDataType) -> Self {
        Self {
            signed: false,
            data_type,
            params: None,
        }
    }
}

/// `name=value`, as used by `SET` and `TBLPROPERTIES`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "testing", derive(arbitrary::Arbitrary))]
pub struct ConfigString {
    /// Configuration key.
    pub name: String,
    /// Configuration value, verbatim.
    pub value: String,
}

impl ConfigString {
    /// Creates a configuration entry.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// `PARTITION (...)`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "testing", derive(arbitrary::Arbitrary))]
pub struct PartitionExpression {
    /// Partition specifications, usually `col = value` comparisons.
    pub partitions: Vec<Expression>,
}

/// A declared column type such as `VARCHAR(255)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "testing", derive(arbitrary::Arbitrary))]
pub struct ColumnType {
    /// Type name as written.
    pub name: String,
    /// Type parameters, if any were written.
    pub params: Option<Vec<Expression>>,
}

impl ColumnType {
    /// Type names that keep their parameters under Hive.
    pub const HIVE_PARAMETERIZED: [&'static str; 3] = ["DECIMAL", "VARCHAR", "CHAR"];

    /// Creates a parameterless column type.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            params: None,
        }
    }

    /// Creates a column type with parameters.
    #[must_use]
    pub fn with_params(name: impl Into<String>, params: Vec<Expression>) -> Self {
        Self {
            name: name.into(),
            params: Some(params),
        }
    }

    /// Whether Hive keeps the parameters of this type.
    #[must_use]
    pub fn hive_keeps_params(&self) -> bool {
        Self::HIVE_PARAMETERIZED
            .iter()
            .any(|name| self.name.eq_ignore_ascii_case(name))
    }
}
