use serde::{Deserialize, Serialize};

use crate::ast::{ConditionClause, JoinKind};

/// An explicit join against another table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JoinClause {
    pub table: String,
    pub kind: JoinKind,
    /// ON conditions; the first one's connector is never rendered.
    #[serde(default)]
    pub on: Vec<ConditionClause>,
}

/// Maps a path segment name to a key column name.
///
/// Plain fn pointers keep clauses `Clone` and comparable; serde skips
/// them, so a deserialized deep join falls back to the compiler's
/// naming convention.
pub type KeyFn = fn(&str) -> String;

/// A dotted-path join marker, e.g. `"Author.Books"`.
///
/// The compiler's deep-join pass rewrites each marker into a chain of
/// explicit [`JoinClause`]s anchored at the base query's alias, deriving
/// key names from `source_key`/`target_key` when set and from the
/// compiler's convention otherwise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeepJoinClause {
    pub path: String,
    pub kind: JoinKind,
    #[serde(skip)]
    pub source_key: Option<KeyFn>,
    #[serde(skip)]
    pub target_key: Option<KeyFn>,
}

impl DeepJoinClause {
    pub fn new(path: impl Into<String>, kind: JoinKind) -> Self {
        Self { path: path.into(), kind, source_key: None, target_key: None }
    }
}
