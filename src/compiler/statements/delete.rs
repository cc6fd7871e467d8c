//! DELETE assembly.

use crate::ast::Query;
use crate::error::CompileError;

use super::super::bindings::Bindings;
use super::super::components;
use super::super::table::require_table;
use super::super::Compiler;

pub(crate) fn build_delete(
    compiler: &Compiler,
    query: &Query,
    bindings: &mut Bindings,
) -> Result<String, CompileError> {
    let table = require_table(compiler, query, "delete")?;
    let mut sql = format!("DELETE FROM {}", table);

    if let Some(wheres) = components::compile_wheres(compiler, query, bindings)? {
        sql.push(' ');
        sql.push_str(&wheres);
    }

    Ok(sql)
}
