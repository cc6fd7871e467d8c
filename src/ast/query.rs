use serde::{Deserialize, Serialize};

use crate::ast::{
    AggregateClause, Clause, FromClause, InsertClause, LockClause, StatementKind, UpdateClause,
};

/// Restricts a clause to one dialect, or applies it everywhere.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngineScope {
    /// Applies under every dialect.
    Wildcard,
    /// Applies only when compiling for the named engine tag.
    Engine(String),
}

impl EngineScope {
    pub fn matches(&self, engine: &str) -> bool {
        match self {
            EngineScope::Wildcard => true,
            EngineScope::Engine(tag) => tag == engine,
        }
    }
}

/// One entry of a query's ordered clause sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryClause {
    pub scope: EngineScope,
    pub clause: Clause,
}

/// The engine-agnostic representation of a query: a declared intent plus an
/// ordered sequence of scoped clauses.
///
/// A `Query` is built and mutated by a fluent builder; the compiler reads it
/// immutably and returns a fresh [`crate::compiler::SqlResult`]. Order within
/// a component is significant and survives compilation verbatim, except that
/// deep-join markers are expanded in place by the compiler's rewrite pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Query {
    pub kind: StatementKind,
    pub clauses: Vec<QueryClause>,
    #[serde(default)]
    pub distinct: bool,
    /// Alias when this query is used as a sub-query source, and the anchor
    /// for deep-join chains.
    #[serde(default)]
    pub alias: Option<String>,
}

impl Query {
    pub fn new(kind: StatementKind) -> Self {
        Self { kind, clauses: Vec::new(), distinct: false, alias: None }
    }

    pub fn select() -> Self {
        Self::new(StatementKind::Select)
    }

    pub fn insert() -> Self {
        Self::new(StatementKind::Insert)
    }

    pub fn update() -> Self {
        Self::new(StatementKind::Update)
    }

    pub fn delete() -> Self {
        Self::new(StatementKind::Delete)
    }

    /// Append a clause that applies under every dialect.
    pub fn push(&mut self, clause: Clause) -> &mut Self {
        self.clauses.push(QueryClause { scope: EngineScope::Wildcard, clause });
        self
    }

    /// Append a clause restricted to one engine tag.
    pub fn push_for(&mut self, engine: impl Into<String>, clause: Clause) -> &mut Self {
        self.clauses.push(QueryClause {
            scope: EngineScope::Engine(engine.into()),
            clause,
        });
        self
    }

    /// Clauses visible to the given engine, in sequence order.
    pub fn clauses_for<'a>(&'a self, engine: &'a str) -> impl Iterator<Item = &'a Clause> {
        self.clauses
            .iter()
            .filter(move |qc| qc.scope.matches(engine))
            .map(|qc| &qc.clause)
    }

    /// The single effective entry for a component, preferring an
    /// engine-scoped clause over a wildcard one.
    fn single<'a, T>(
        &'a self,
        engine: &str,
        pick: impl Fn(&'a Clause) -> Option<&'a T>,
    ) -> Option<&'a T>
    where
        T: ?Sized,
    {
        let mut wildcard = None;
        for qc in &self.clauses {
            let Some(found) = pick(&qc.clause) else { continue };
            match &qc.scope {
                EngineScope::Engine(tag) if tag == engine => return Some(found),
                EngineScope::Wildcard if wildcard.is_none() => wildcard = Some(found),
                _ => {}
            }
        }
        wildcard
    }

    pub fn from_clause(&self, engine: &str) -> Option<&FromClause> {
        self.single(engine, |c| match c {
            Clause::From(f) => Some(f),
            _ => None,
        })
    }

    pub fn insert_clause(&self, engine: &str) -> Option<&InsertClause> {
        self.single(engine, |c| match c {
            Clause::Insert(i) => Some(i),
            _ => None,
        })
    }

    pub fn update_clause(&self, engine: &str) -> Option<&UpdateClause> {
        self.single(engine, |c| match c {
            Clause::Update(u) => Some(u),
            _ => None,
        })
    }

    pub fn aggregate(&self, engine: &str) -> Option<&AggregateClause> {
        self.single(engine, |c| match c {
            Clause::Aggregate(a) => Some(a),
            _ => None,
        })
    }

    pub fn limit(&self, engine: &str) -> Option<i64> {
        self.single(engine, |c| match c {
            Clause::Limit(n) => Some(n),
            _ => None,
        })
        .copied()
    }

    pub fn lock_clause(&self, engine: &str) -> Option<&LockClause> {
        self.single(engine, |c| match c {
            Clause::Lock(lock) => Some(lock),
            _ => None,
        })
    }

    pub fn offset(&self, engine: &str) -> Option<i64> {
        self.single(engine, |c| match c {
            Clause::Offset(n) => Some(n),
            _ => None,
        })
        .copied()
    }
}
