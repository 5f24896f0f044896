//! Closed keyword and operator sets used by the syntax tree.
//!
//! Each enumeration knows its canonical spelling and which dialects can
//! express it. Availability is only checked when a tree is rendered, so one
//! tree can be rendered for several dialects without being rebuilt.

use core::fmt::{self, Display};

use crate::dialect::Dialect;

/// A closed keyword or operator value with a fixed spelling.
pub trait Keyword: Copy {
    /// The canonical SQL spelling.
    fn keyword(&self) -> &'static str;

    /// Whether the given dialect can express this value.
    fn is_supported_by(&self, dialect: Dialect) -> bool {
        let _ = dialect;
        true
    }
}

/// An optional trailing `supported_by |value, dialect| { .. }` overrides
/// [`Keyword::is_supported_by`].
macro_rules! keyword_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $keyword:literal, )+
        }
        $( supported_by |$value:ident, $dialect:ident| $supported:block )?
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "testing", derive(arbitrary::Arbitrary))]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
        }

        impl $name {
            /// Every value of the enumeration, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// The canonical SQL spelling.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $( $name::$variant => $keyword, )+
                }
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl Keyword for $name {
            fn keyword(&self) -> &'static str {
                self.as_str()
            }

            $(
                fn is_supported_by(&self, $dialect: Dialect) -> bool {
                    let $value = *self;
                    $supported
                }
            )?
        }
    };
}

keyword_enum! {
    /// How rows are written by an `INSERT` statement.
    #[derive(Default)]
    InsertType {
        /// `INSERT INTO`
        #[default]
        InsertInto => "INSERT INTO",
        /// `INSERT IGNORE INTO` (MySQL)
        InsertIgnoreInto => "INSERT IGNORE INTO",
        /// `INSERT OVERWRITE` (Hive)
        InsertOverwrite => "INSERT OVERWRITE",
        /// `REPLACE INTO` (MySQL)
        ReplaceInto => "REPLACE INTO",
    }
}

keyword_enum! {
    /// The join keyword introducing a `JOIN` clause.
    JoinType {
        /// `JOIN`
        Join => "JOIN",
        /// `INNER JOIN`
        InnerJoin => "INNER JOIN",
        /// `LEFT JOIN`
        LeftJoin => "LEFT JOIN",
        /// `LEFT OUTER JOIN`
        LeftOuterJoin => "LEFT OUTER JOIN",
        /// `RIGHT JOIN`
        RightJoin => "RIGHT JOIN",
        /// `RIGHT OUTER JOIN`
        RightOuterJoin => "RIGHT OUTER JOIN",
        /// `FULL JOIN`
        FullJoin => "FULL JOIN",
        /// `FULL OUTER JOIN`
        FullOuterJoin => "FULL OUTER JOIN",
        /// `CROSS JOIN`
        CrossJoin => "CROSS JOIN",
        /// `LEFT SEMI JOIN` (Hive)
        LeftSemiJoin => "LEFT SEMI JOIN",
    }
}

keyword_enum! {
    /// Sort direction of an `ORDER BY` / `SORT BY` column.
    #[derive(Default)]
    OrderType {
        /// `ASC`
        #[default]
        Asc => "ASC",
        /// `DESC`
        Desc => "DESC",
    }
}

keyword_enum! {
    /// Set operator combining two `SELECT` statements.
    UnionType {
        /// `UNION`
        Union => "UNION",
        /// `UNION ALL`
        UnionAll => "UNION ALL",
        /// `UNION DISTINCT`
        UnionDistinct => "UNION DISTINCT",
        /// `EXCEPT`
        Except => "EXCEPT",
        /// `INTERSECT`
        Intersect => "INTERSECT",
    }
}

keyword_enum! {
    /// Comparison operators.
    CompareOperator {
        /// `=`
        Equal => "=",
        /// `<=>`
        NullSafeEqual => "<=>",
        /// `!=`
        NotEqual => "!=",
        /// `<>`
        LessOrGreater => "<>",
        /// `<`
        Less => "<",
        /// `<=`
        LessOrEqual => "<=",
        /// `>`
        Greater => ">",
        /// `>=`
        GreaterOrEqual => ">=",
    }
}

keyword_enum! {
    /// Arithmetic, bitwise and string operators.
    ComputeOperator {
        /// `+`
        Plus => "+",
        /// `-`
        Minus => "-",
        /// `*`
        Multiply => "*",
        /// `/`
        Divide => "/",
        /// `%`
        Mod => "%",
        /// `DIV`
        Div => "DIV",
        /// `&`
        BitAnd => "&",
        /// `|`
        BitOr => "|",
        /// `^`
        BitXor => "^",
        /// `<<`
        ShiftLeft => "<<",
        /// `>>`
        ShiftRight => ">>",
        /// `~`
        BitNot => "~",
        /// `||`
        Concat => "||",
    }
    supported_by |operator, dialect| {
        match operator {
            ComputeOperator::Mod => matches!(
                dialect,
                Dialect::Default | Dialect::MySql | Dialect::SqlServer | Dialect::Hive
            ),
            _ => true,
        }
    }
}

keyword_enum! {
    /// Boolean connectives.
    LogicalOperator {
        /// `AND`
        And => "AND",
        /// `OR`
        Or => "OR",
        /// `NOT`
        Not => "NOT",
        /// `XOR`
        Xor => "XOR",
    }
}

keyword_enum! {
    /// Target types accepted by `CAST`.
    CastDataType {
        /// `BINARY`
        Binary => "BINARY",
        /// `CHAR`
        Char => "CHAR",
        /// `DATE`
        Date => "DATE",
        /// `DATETIME`
        Datetime => "DATETIME",
        /// `DECIMAL`
        Decimal => "DECIMAL",
        /// `DOUBLE`
        Double => "DOUBLE",
        /// `FLOAT`
        Float => "FLOAT",
        /// `JSON`
        Json => "JSON",
        /// `NCHAR`
        Nchar => "NCHAR",
        /// `REAL`
        Real => "REAL",
        /// `SIGNED`
        Signed => "SIGNED",
        /// `TIME`
        Time => "TIME",
        /// `TIMESTAMP`
        Timestamp => "TIMESTAMP",
        /// `UNSIGNED`
        Unsigned => "UNSIGNED",
        /// `YEAR`
        Year => "YEAR",
        /// `INT`
        Int => "INT",
        /// `INTEGER`
        Integer => "INTEGER",
        /// `BIGINT`
        Bigint => "BIGINT",
        /// `BOOLEAN`
        Boolean => "BOOLEAN",
        /// `STRING` (Hive)
        String => "STRING",
        /// `VARCHAR`
        Varchar => "VARCHAR",
    }
}

keyword_enum! {
    /// Kind of a window frame bound.
    WindowRowType {
        /// `PRECEDING`
        Preceding => "PRECEDING",
        /// `FOLLOWING`
        Following => "FOLLOWING",
        /// `CURRENT ROW`
        CurrentRow => "CURRENT ROW",
    }
}

keyword_enum! {
    /// Storage mode of a generated column.
    GeneratedColumnSaveMode {
        /// `VIRTUAL`
        Virtual => "VIRTUAL",
        /// `STORED`
        Stored => "STORED",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn test_keyword_spellings() {
        assert_eq!(JoinType::LeftOuterJoin.keyword(), "LEFT OUTER JOIN");
        assert_eq!(InsertType::InsertOverwrite.to_string(), "INSERT OVERWRITE");
        assert_eq!(CompareOperator::LessOrGreater.keyword(), "<>");
        assert_eq!(WindowRowType::CurrentRow.keyword(), "CURRENT ROW");
        assert_eq!(UnionType::UnionAll.keyword(), "UNION ALL");
    }

    #[test]
    fn test_modulo_availability() {
        for dialect in Dialect::ALL {
            let expected = dialect != Dialect::Db2;
            assert_eq!(ComputeOperator::Mod.is_supported_by(dialect), expected);
        }
    }

    #[test]
    fn test_other_operators_available_everywhere() {
        for op in ComputeOperator::ALL.iter().filter(|op| **op != ComputeOperator::Mod) {
            assert!(Dialect::ALL.iter().all(|d| op.is_supported_by(*d)));
        }
        assert!(Dialect::ALL.iter().all(|d| LogicalOperator::Xor.is_supported_by(*d)));
    }

    #[test]
    fn test_defaults() {
        assert_eq!(OrderType::default(), OrderType::Asc);
        assert_eq!(InsertType::default(), InsertType::InsertInto);
    }

    #[test]
    fn test_every_value_has_a_keyword() {
        assert!(CastDataType::ALL.iter().all(|t| t.keyword() == t.as_str()));
        assert!(GeneratedColumnSaveMode::ALL.iter().all(|m| !m.keyword().is_empty()));
        assert_eq!(LogicalOperator::Xor.keyword(), "XOR");
        assert!(Dialect::ALL.iter().all(|d| JoinType::LeftSemiJoin.is_supported_by(*d)));
    }
}
