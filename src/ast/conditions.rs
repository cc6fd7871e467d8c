use serde::{Deserialize, Serialize};

use crate::ast::Value;

/// A single boolean condition within a where, having, or join-on list.
///
/// The `is_or` flag on a condition describes how it connects to the
/// condition *before* it; the first rendered condition of a list never
/// shows its connector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ConditionClause {
    /// Trusted SQL fragment emitted verbatim, with its own bindings.
    Raw {
        sql: String,
        #[serde(default)]
        bindings: Vec<Value>,
        #[serde(default)]
        is_or: bool,
    },
    /// `column <operator> ?` against a bound value.
    Basic {
        column: String,
        operator: String,
        value: Value,
        #[serde(default)]
        is_or: bool,
    },
    /// Parenthesized nested condition list.
    Group {
        conditions: Vec<ConditionClause>,
        #[serde(default)]
        is_or: bool,
    },
    /// `first <operator> second` between two columns; nothing is bound.
    ColumnCompare {
        first: String,
        operator: String,
        second: String,
        #[serde(default)]
        is_or: bool,
    },
    /// `column IS NULL` / `column IS NOT NULL`.
    Null {
        column: String,
        #[serde(default)]
        negated: bool,
        #[serde(default)]
        is_or: bool,
    },
    /// `column IN (?, …)` / `column NOT IN (?, …)`.
    In {
        column: String,
        values: Vec<Value>,
        #[serde(default)]
        negated: bool,
        #[serde(default)]
        is_or: bool,
    },
}

impl ConditionClause {
    /// Whether this condition connects with OR to the one before it.
    pub fn is_or(&self) -> bool {
        match self {
            ConditionClause::Raw { is_or, .. }
            | ConditionClause::Basic { is_or, .. }
            | ConditionClause::Group { is_or, .. }
            | ConditionClause::ColumnCompare { is_or, .. }
            | ConditionClause::Null { is_or, .. }
            | ConditionClause::In { is_or, .. } => *is_or,
        }
    }
}
