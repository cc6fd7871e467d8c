//! INSERT assembly.

use crate::ast::{InsertClause, Query};
use crate::error::CompileError;

use super::super::bindings::Bindings;
use super::super::table::require_table;
use super::super::Compiler;

pub(crate) fn build_insert(
    compiler: &Compiler,
    query: &Query,
    bindings: &mut Bindings,
) -> Result<String, CompileError> {
    let table = require_table(compiler, query, "insert")?;
    let mut sql = format!("INSERT INTO {}", table);

    match query.insert_clause(compiler.engine()) {
        Some(InsertClause::Values { columns, values }) => {
            if !columns.is_empty() {
                sql.push_str(&format!(" ({})", columns.join(", ")));
            }
            if !values.is_empty() {
                let placeholders = bindings.parameterize(compiler.dialect(), values);
                sql.push_str(&format!(" VALUES ({})", placeholders));
            }
        }
        Some(InsertClause::Select(source)) => {
            sql.push(' ');
            sql.push_str(&compiler.compile_query(source, bindings)?);
        }
        None => {}
    }

    Ok(sql)
}
