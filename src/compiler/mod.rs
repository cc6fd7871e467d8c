//! The compilation pipeline: clause sequence in, dialect SQL + bindings out.

pub mod bindings;
pub mod components;
pub mod conditions;
pub mod deep_join;
pub mod dialect;
pub mod statements;
pub mod table;
pub mod wrapper;

#[cfg(test)]
mod tests;

use crate::ast::{Clause, CteClause, Query, StatementKind, Value};
use crate::error::CompileError;

use bindings::Bindings;
pub use deep_join::JoinConvention;
pub use dialect::{AnsiDialect, Dialect, MySqlDialect};
pub use table::compile_table_expression;

/// Immutable pair of compiled text and ordered bindings.
///
/// Bindings contain only values from clauses whose engine scope matched the
/// compiling dialect or the wildcard, in left-to-right placeholder order.
#[derive(Debug, Clone, PartialEq)]
pub struct SqlResult {
    pub sql: String,
    pub bindings: Vec<Value>,
}

/// Compiles queries for one dialect.
///
/// State is fixed at construction (dialect configuration plus the deep-join
/// naming convention) and shared read-only, so one `Compiler` can serve
/// independent queries from multiple threads.
pub struct Compiler {
    dialect: Box<dyn Dialect>,
    convention: JoinConvention,
}

impl Compiler {
    pub fn new(dialect: Box<dyn Dialect>) -> Self {
        Self { dialect, convention: JoinConvention::default() }
    }

    pub fn with_convention(mut self, convention: JoinConvention) -> Self {
        self.convention = convention;
        self
    }

    pub fn dialect(&self) -> &dyn Dialect {
        self.dialect.as_ref()
    }

    pub fn engine(&self) -> &'static str {
        self.dialect.engine()
    }

    pub(crate) fn convention(&self) -> &JoinConvention {
        &self.convention
    }

    /// Compile a fully built query into SQL text plus ordered bindings.
    ///
    /// Either a complete [`SqlResult`] comes back or a [`CompileError`];
    /// there is no partially compiled output. The query itself is read
    /// immutably; deep-join markers are expanded into a fresh clause
    /// sequence, never in place.
    pub fn compile(&self, query: &Query) -> Result<SqlResult, CompileError> {
        let mut bindings = Bindings::new();
        let sql = self.compile_query(query, &mut bindings)?;
        Ok(SqlResult { sql, bindings: bindings.into_values() })
    }

    /// Full pipeline for one query: deep-join rewrite, CTE prefix, then the
    /// statement builder for the declared intent. Sub-queries re-enter here
    /// with the shared bindings accumulator, which keeps bindings aligned
    /// with placeholder order across nesting.
    pub(crate) fn compile_query(
        &self,
        query: &Query,
        bindings: &mut Bindings,
    ) -> Result<String, CompileError> {
        let expanded = deep_join::expand(self, query)?;
        let query = expanded.as_ref().unwrap_or(query);

        let prefix = self.compile_ctes(query, bindings)?;
        let body = match query.kind {
            StatementKind::Select => statements::select::build_select(self, query, bindings)?,
            StatementKind::Insert => statements::insert::build_insert(self, query, bindings)?,
            StatementKind::Update => statements::update::build_update(self, query, bindings)?,
            StatementKind::Delete => statements::delete::build_delete(self, query, bindings)?,
        };

        Ok(format!("{}{}", prefix, body))
    }

    /// `WITH <alias> AS (<body>), … ` prefix, or an empty string when the
    /// query declares no CTEs. Compiled before the statement body so CTE
    /// bindings come first.
    fn compile_ctes(
        &self,
        query: &Query,
        bindings: &mut Bindings,
    ) -> Result<String, CompileError> {
        let mut parts = Vec::new();
        for clause in query.clauses_for(self.engine()) {
            let Clause::Cte(cte) = clause else { continue };
            let body = match cte {
                CteClause::Raw { sql, .. } => wrapper::raw(sql),
                CteClause::Subquery { query: inner, .. } => {
                    self.compile_query(inner, bindings)?
                }
            };
            parts.push(format!(
                "{} AS ({})",
                wrapper::wrap(self.dialect(), cte.alias()),
                body
            ));
        }
        if parts.is_empty() {
            Ok(String::new())
        } else {
            Ok(format!("WITH {} ", parts.join(", ")))
        }
    }
}
