//! UPDATE assembly.

use crate::ast::Query;
use crate::error::CompileError;

use super::super::bindings::Bindings;
use super::super::components;
use super::super::table::require_table;
use super::super::wrapper;
use super::super::Compiler;

pub(crate) fn build_update(
    compiler: &Compiler,
    query: &Query,
    bindings: &mut Bindings,
) -> Result<String, CompileError> {
    let table = require_table(compiler, query, "update")?;
    let dialect = compiler.dialect();
    let mut sql = format!("UPDATE {}", table);

    if let Some(update) = query.update_clause(compiler.engine()) {
        let sets: Vec<String> = update
            .pairs
            .iter()
            .map(|(col, value)| {
                format!(
                    "{} = {}",
                    wrapper::wrap(dialect, col),
                    bindings.parameter(dialect, value)
                )
            })
            .collect();
        if !sets.is_empty() {
            sql.push_str(&format!(" SET {}", sets.join(", ")));
        }
    }

    if let Some(wheres) = components::compile_wheres(compiler, query, bindings)? {
        sql.push(' ');
        sql.push_str(&wheres);
    }

    Ok(sql)
}
