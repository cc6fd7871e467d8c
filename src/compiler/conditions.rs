//! Boolean-condition flattening.

use crate::ast::ConditionClause;
use crate::error::CompileError;

use super::bindings::Bindings;
use super::wrapper;
use super::Compiler;

/// Flatten an ordered condition list into one boolean expression.
///
/// The first non-empty fragment never carries a connector; every later one
/// is prefixed with `OR` or `AND` from its own flag. Conditions compiling to
/// nothing are skipped without disturbing the connectors of what follows.
/// An empty list flattens to an empty string; `WHERE`/`HAVING` prefixes are
/// the caller's concern.
pub(crate) fn compile_conditions(
    compiler: &Compiler,
    conditions: &[&ConditionClause],
    bindings: &mut Bindings,
) -> Result<String, CompileError> {
    let mut out = String::new();
    for cond in conditions {
        let fragment = compile_condition(compiler, cond, bindings)?;
        if fragment.is_empty() {
            continue;
        }
        if !out.is_empty() {
            out.push_str(connector(cond));
        }
        out.push_str(&fragment);
    }
    Ok(out)
}

pub(crate) fn connector(cond: &ConditionClause) -> &'static str {
    if cond.is_or() { " OR " } else { " AND " }
}

/// Compile a single condition to a connector-less fragment.
pub(crate) fn compile_condition(
    compiler: &Compiler,
    cond: &ConditionClause,
    bindings: &mut Bindings,
) -> Result<String, CompileError> {
    let dialect = compiler.dialect();
    Ok(match cond {
        ConditionClause::Raw { sql, bindings: values, .. } => {
            // An empty fragment is skipped by the caller, so its values must
            // not reach the bindings list either.
            if !sql.is_empty() {
                bindings.extend(values.iter().cloned());
            }
            wrapper::raw(sql)
        }
        ConditionClause::Basic { column, operator, value, .. } => format!(
            "{} {} {}",
            wrapper::wrap(dialect, column),
            operator,
            bindings.parameter(dialect, value)
        ),
        ConditionClause::Group { conditions, .. } => {
            let inner: Vec<&ConditionClause> = conditions.iter().collect();
            let flat = compile_conditions(compiler, &inner, bindings)?;
            if flat.is_empty() {
                String::new()
            } else {
                format!("({})", flat)
            }
        }
        ConditionClause::ColumnCompare { first, operator, second, .. } => format!(
            "{} {} {}",
            wrapper::wrap(dialect, first),
            operator,
            wrapper::wrap(dialect, second)
        ),
        ConditionClause::Null { column, negated, .. } => {
            let not = if *negated { "NOT " } else { "" };
            format!("{} IS {}NULL", wrapper::wrap(dialect, column), not)
        }
        ConditionClause::In { column, values, negated, .. } => {
            if values.is_empty() {
                // NOT IN () is vacuously true, IN () can never match.
                if *negated {
                    String::new()
                } else {
                    "0 = 1".to_string()
                }
            } else {
                let not = if *negated { "NOT " } else { "" };
                format!(
                    "{} {}IN ({})",
                    wrapper::wrap(dialect, column),
                    not,
                    bindings.parameterize(dialect, values)
                )
            }
        }
    })
}
