pub mod clauses;
pub mod conditions;
pub mod joins;
pub mod operators;
pub mod query;
pub mod values;

pub use self::clauses::{
    AggregateClause, Clause, CombineClause, CteClause, FromClause, GroupByClause, InsertClause,
    LockClause, OrderByClause, SelectClause, UpdateClause,
};
pub use self::conditions::ConditionClause;
pub use self::joins::{DeepJoinClause, JoinClause, KeyFn};
pub use self::operators::{CombineOp, JoinKind, SortOrder, StatementKind};
pub use self::query::{EngineScope, Query, QueryClause};
pub use self::values::Value;
