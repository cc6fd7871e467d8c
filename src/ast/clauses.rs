use serde::{Deserialize, Serialize};

use crate::ast::{CombineOp, ConditionClause, DeepJoinClause, JoinClause, Query, SortOrder, Value};

/// One typed element of a query's clause sequence.
///
/// The variant set is closed: every variant has a matching compiler, so
/// per-clause dispatch is an exhaustive match rather than a by-name lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Clause {
    From(FromClause),
    Join(JoinClause),
    DeepJoin(DeepJoinClause),
    Where(ConditionClause),
    Having(ConditionClause),
    GroupBy(GroupByClause),
    OrderBy(OrderByClause),
    Select(SelectClause),
    Aggregate(AggregateClause),
    Insert(InsertClause),
    Update(UpdateClause),
    Limit(i64),
    Offset(i64),
    Cte(CteClause),
    Combine(CombineClause),
    Lock(LockClause),
}

impl Clause {
    /// Component name this clause belongs to, used in diagnostics.
    pub fn component(&self) -> &'static str {
        match self {
            Clause::From(_) => "from",
            Clause::Join(_) => "join",
            Clause::DeepJoin(_) => "deep join",
            Clause::Where(_) => "where",
            Clause::Having(_) => "having",
            Clause::GroupBy(_) => "group by",
            Clause::OrderBy(_) => "order by",
            Clause::Select(_) => "select",
            Clause::Aggregate(_) => "aggregate",
            Clause::Insert(_) => "insert",
            Clause::Update(_) => "update",
            Clause::Limit(_) => "limit",
            Clause::Offset(_) => "offset",
            Clause::Cte(_) => "cte",
            Clause::Combine(_) => "combine",
            Clause::Lock(_) => "lock",
        }
    }
}

/// The query's source: a trusted raw expression, a compiled sub-query, or a
/// named table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FromClause {
    Raw(String),
    Subquery(Box<Query>),
    Table(String),
}

impl FromClause {
    pub fn variant(&self) -> &'static str {
        match self {
            FromClause::Raw(_) => "raw",
            FromClause::Subquery(_) => "sub-query",
            FromClause::Table(_) => "named table",
        }
    }
}

/// One select-list entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SelectClause {
    Named(String),
    Raw(String),
}

/// `SELECT <FUNC>(<cols>) AS <alias>`; the rendered alias is the
/// lower-cased function name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateClause {
    pub function: String,
    pub columns: Vec<String>,
}

/// Values for an insert, either literal rows or a source select.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum InsertClause {
    Values { columns: Vec<String>, values: Vec<Value> },
    Select(Box<Query>),
}

/// SET assignments for an update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateClause {
    pub pairs: Vec<(String, Value)>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GroupByClause {
    Column(String),
    Raw(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum OrderByClause {
    Column { column: String, order: SortOrder },
    Raw(String),
    /// Orders by the dialect's random() spelling.
    Random,
}

/// A named common table expression; the alias is mandatory by construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CteClause {
    Raw { alias: String, sql: String },
    Subquery { alias: String, query: Box<Query> },
}

impl CteClause {
    pub fn alias(&self) -> &str {
        match self {
            CteClause::Raw { alias, .. } | CteClause::Subquery { alias, .. } => alias,
        }
    }
}

/// A set operation chaining another select onto this one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombineClause {
    pub op: CombineOp,
    pub query: Box<Query>,
}

/// Row locking request, rendered by the dialect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LockClause {
    ForUpdate,
    Share,
}
