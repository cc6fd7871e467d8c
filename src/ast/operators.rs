use serde::{Deserialize, Serialize};

/// The statement shape a query compiles to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatementKind {
    /// SELECT query
    Select,
    /// INSERT query
    Insert,
    /// UPDATE query
    Update,
    /// DELETE query
    Delete,
}

impl StatementKind {
    /// Lowercase statement name, used in error messages.
    pub fn name(&self) -> &'static str {
        match self {
            StatementKind::Select => "select",
            StatementKind::Insert => "insert",
            StatementKind::Update => "update",
            StatementKind::Delete => "delete",
        }
    }
}

/// Join types supported by the join and deep-join clauses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JoinKind {
    Inner,
    Left,
    Right,
    Cross,
}

impl JoinKind {
    pub fn keyword(&self) -> &'static str {
        match self {
            JoinKind::Inner => "INNER JOIN",
            JoinKind::Left => "LEFT JOIN",
            JoinKind::Right => "RIGHT JOIN",
            JoinKind::Cross => "CROSS JOIN",
        }
    }
}

/// Sort direction for order-by columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortOrder {
    Asc,
    Desc,
}

/// Set operations chaining a second query onto a select.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CombineOp {
    Union,
    UnionAll,
    Intersect,
    Except,
}

impl CombineOp {
    pub fn keyword(&self) -> &'static str {
        match self {
            CombineOp::Union => "UNION",
            CombineOp::UnionAll => "UNION ALL",
            CombineOp::Intersect => "INTERSECT",
            CombineOp::Except => "EXCEPT",
        }
    }
}
