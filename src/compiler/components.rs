//! One compiler per SQL component.
//!
//! Each returns `Option<String>`: `None` is the absence marker the
//! assembler skips without adding whitespace, and a returned fragment is
//! never empty.

use crate::ast::{
    Clause, ConditionClause, GroupByClause, OrderByClause, Query, SelectClause, SortOrder, Value,
};
use crate::error::CompileError;

use super::bindings::Bindings;
use super::conditions::{compile_condition, compile_conditions, connector};
use super::table::compile_from_expression;
use super::wrapper;
use super::Compiler;

/// Select list. Defers entirely to the aggregate compiler when an aggregate
/// clause is present; defaults to `*` when no columns were declared.
pub(crate) fn compile_columns(compiler: &Compiler, query: &Query) -> Option<String> {
    let engine = compiler.engine();
    if query.aggregate(engine).is_some() {
        return None;
    }
    let dialect = compiler.dialect();
    let cols: Vec<String> = query
        .clauses_for(engine)
        .filter_map(|c| match c {
            Clause::Select(SelectClause::Named(name)) => Some(wrapper::wrap(dialect, name)),
            Clause::Select(SelectClause::Raw(expr)) => Some(wrapper::raw(expr)),
            _ => None,
        })
        .collect();
    let list = if cols.is_empty() { "*".to_string() } else { cols.join(", ") };
    let distinct = if query.distinct { "DISTINCT " } else { "" };
    Some(format!("SELECT {}{}", distinct, list))
}

/// `SELECT <FUNC>(<cols>) AS <alias>`; DISTINCT goes inside the call, never
/// at statement level, and never around `*`.
pub(crate) fn compile_aggregate(compiler: &Compiler, query: &Query) -> Option<String> {
    let agg = query.aggregate(compiler.engine())?;
    let dialect = compiler.dialect();
    let is_star = agg.columns.len() == 1 && agg.columns[0] == "*";
    let cols = if is_star {
        "*".to_string()
    } else {
        wrapper::wrap_many(dialect, &agg.columns)
    };
    let body = if query.distinct && !is_star {
        format!("DISTINCT {}", cols)
    } else {
        cols
    };
    Some(format!(
        "SELECT {}({}) AS {}",
        agg.function.to_uppercase(),
        body,
        wrapper::wrap(dialect, &agg.function.to_lowercase())
    ))
}

pub(crate) fn compile_from(
    compiler: &Compiler,
    query: &Query,
    bindings: &mut Bindings,
) -> Result<Option<String>, CompileError> {
    let Some(from) = query.from_clause(compiler.engine()) else {
        return Ok(None);
    };
    let expr = compile_from_expression(compiler, from, bindings)?;
    Ok(Some(format!("FROM {}", expr)))
}

pub(crate) fn compile_joins(
    compiler: &Compiler,
    query: &Query,
    bindings: &mut Bindings,
) -> Result<Option<String>, CompileError> {
    let dialect = compiler.dialect();
    let mut parts = Vec::new();
    for clause in query.clauses_for(compiler.engine()) {
        let Clause::Join(join) = clause else { continue };
        let table = wrapper::wrap(dialect, &join.table);
        let on: Vec<&ConditionClause> = join.on.iter().collect();
        let on_sql = compile_conditions(compiler, &on, bindings)?;
        if on_sql.is_empty() {
            parts.push(format!("{} {}", join.kind.keyword(), table));
        } else {
            parts.push(format!("{} {} ON {}", join.kind.keyword(), table, on_sql));
        }
    }
    Ok((!parts.is_empty()).then(|| parts.join(" ")))
}

pub(crate) fn compile_wheres(
    compiler: &Compiler,
    query: &Query,
    bindings: &mut Bindings,
) -> Result<Option<String>, CompileError> {
    let conds: Vec<&ConditionClause> = query
        .clauses_for(compiler.engine())
        .filter_map(|c| match c {
            Clause::Where(cond) => Some(cond),
            _ => None,
        })
        .collect();
    let flat = compile_conditions(compiler, &conds, bindings)?;
    Ok((!flat.is_empty()).then(|| format!("WHERE {}", flat)))
}

pub(crate) fn compile_group_by(compiler: &Compiler, query: &Query) -> Option<String> {
    let dialect = compiler.dialect();
    let cols: Vec<String> = query
        .clauses_for(compiler.engine())
        .filter_map(|c| match c {
            Clause::GroupBy(GroupByClause::Column(name)) => Some(wrapper::wrap(dialect, name)),
            Clause::GroupBy(GroupByClause::Raw(expr)) => Some(wrapper::raw(expr)),
            _ => None,
        })
        .collect();
    (!cols.is_empty()).then(|| format!("GROUP BY {}", cols.join(", ")))
}

/// Having repeats the HAVING keyword per condition: the first fragment is
/// `HAVING <cond>`, every later one `<connector> HAVING <cond>`. Replicated
/// source behavior, kept verbatim.
pub(crate) fn compile_having(
    compiler: &Compiler,
    query: &Query,
    bindings: &mut Bindings,
) -> Result<Option<String>, CompileError> {
    let mut out = String::new();
    for clause in query.clauses_for(compiler.engine()) {
        let Clause::Having(cond) = clause else { continue };
        let fragment = compile_condition(compiler, cond, bindings)?;
        if fragment.is_empty() {
            continue;
        }
        if !out.is_empty() {
            out.push_str(connector(cond));
        }
        out.push_str("HAVING ");
        out.push_str(&fragment);
    }
    Ok((!out.is_empty()).then_some(out))
}

pub(crate) fn compile_order(compiler: &Compiler, query: &Query) -> Option<String> {
    let dialect = compiler.dialect();
    let parts: Vec<String> = query
        .clauses_for(compiler.engine())
        .filter_map(|c| match c {
            Clause::OrderBy(OrderByClause::Column { column, order }) => {
                let col = wrapper::wrap(dialect, column);
                // Ascending renders no suffix.
                Some(match order {
                    SortOrder::Asc => col,
                    SortOrder::Desc => format!("{} DESC", col),
                })
            }
            Clause::OrderBy(OrderByClause::Raw(expr)) => Some(wrapper::raw(expr)),
            Clause::OrderBy(OrderByClause::Random) => Some(dialect.fn_random().to_string()),
            _ => None,
        })
        .collect();
    (!parts.is_empty()).then(|| format!("ORDER BY {}", parts.join(", ")))
}

pub(crate) fn compile_limit(
    compiler: &Compiler,
    query: &Query,
    bindings: &mut Bindings,
) -> Option<String> {
    let n = query.limit(compiler.engine())?;
    if n <= 0 {
        return None;
    }
    bindings.push(Value::Int(n));
    Some(compiler.dialect().limit_fragment())
}

pub(crate) fn compile_offset(
    compiler: &Compiler,
    query: &Query,
    bindings: &mut Bindings,
) -> Option<String> {
    let n = query.offset(compiler.engine())?;
    if n <= 0 {
        return None;
    }
    bindings.push(Value::Int(n));
    Some(compiler.dialect().offset_fragment())
}

pub(crate) fn compile_combines(
    compiler: &Compiler,
    query: &Query,
    bindings: &mut Bindings,
) -> Result<Option<String>, CompileError> {
    let mut parts = Vec::new();
    for clause in query.clauses_for(compiler.engine()) {
        let Clause::Combine(combine) = clause else { continue };
        let inner = compiler.compile_query(&combine.query, bindings)?;
        parts.push(format!("{} {}", combine.op.keyword(), inner));
    }
    Ok((!parts.is_empty()).then(|| parts.join(" ")))
}

pub(crate) fn compile_lock(compiler: &Compiler, query: &Query) -> Option<String> {
    let lock = query.lock_clause(compiler.engine())?;
    Some(compiler.dialect().compile_lock(lock))
}
