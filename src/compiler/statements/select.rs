//! SELECT assembly.

use crate::ast::Query;
use crate::error::CompileError;

use super::super::bindings::Bindings;
use super::super::components;
use super::super::Compiler;

/// Run every component compiler in the fixed select order and join the
/// non-absent fragments with single spaces.
pub(crate) fn build_select(
    compiler: &Compiler,
    query: &Query,
    bindings: &mut Bindings,
) -> Result<String, CompileError> {
    let fragments = [
        components::compile_aggregate(compiler, query),
        components::compile_columns(compiler, query),
        components::compile_from(compiler, query, bindings)?,
        components::compile_joins(compiler, query, bindings)?,
        components::compile_wheres(compiler, query, bindings)?,
        components::compile_group_by(compiler, query),
        components::compile_having(compiler, query, bindings)?,
        components::compile_order(compiler, query),
        components::compile_limit(compiler, query, bindings),
        components::compile_offset(compiler, query, bindings),
        components::compile_combines(compiler, query, bindings)?,
        components::compile_lock(compiler, query),
    ];
    Ok(fragments.into_iter().flatten().collect::<Vec<_>>().join(" "))
}
