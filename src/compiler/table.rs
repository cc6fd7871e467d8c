//! Table-expression resolution.

use crate::ast::{Clause, FromClause, Query};
use crate::error::CompileError;

use super::bindings::Bindings;
use super::wrapper;
use super::Compiler;

/// Resolve any clause expected to be a from clause.
///
/// The assembler itself only hands this a `From`; dialect packages driving
/// the resolver directly get the variant guard.
pub fn compile_table_expression(
    compiler: &Compiler,
    clause: &Clause,
    bindings: &mut Bindings,
) -> Result<String, CompileError> {
    match clause {
        Clause::From(from) => compile_from_expression(compiler, from, bindings),
        other => Err(CompileError::UnrecognizedClauseVariant {
            variant: other.component(),
            context: "TableExpression",
        }),
    }
}

/// Resolve a from clause into SQL text.
pub(crate) fn compile_from_expression(
    compiler: &Compiler,
    from: &FromClause,
    bindings: &mut Bindings,
) -> Result<String, CompileError> {
    Ok(match from {
        FromClause::Raw(expr) => wrapper::raw(expr),
        FromClause::Subquery(query) => {
            let inner = compiler.compile_query(query, bindings)?;
            match &query.alias {
                Some(alias) => {
                    format!("({}) AS {}", inner, wrapper::wrap(compiler.dialect(), alias))
                }
                None => format!("({})", inner),
            }
        }
        FromClause::Table(name) => wrapper::wrap(compiler.dialect(), name),
    })
}

/// Insert/update/delete targets must be declared and must be named tables.
pub(crate) fn require_table(
    compiler: &Compiler,
    query: &Query,
    statement: &'static str,
) -> Result<String, CompileError> {
    let from = query
        .from_clause(compiler.engine())
        .ok_or(CompileError::MissingTargetTable { statement })?;
    match from {
        FromClause::Table(name) => Ok(wrapper::wrap(compiler.dialect(), name)),
        other => Err(CompileError::InvalidTableExpression {
            statement,
            found: other.variant(),
        }),
    }
}
