//! Deep-join expansion: rewrites dotted-path markers into explicit joins.

use serde::{Deserialize, Serialize};

use crate::ast::{Clause, ConditionClause, DeepJoinClause, JoinClause, Query, QueryClause};
use crate::error::CompileError;

use super::Compiler;

/// Foreign-key naming convention anchoring deep-join chains.
///
/// The source-side key is the singularized target segment plus `key_suffix`;
/// the target-side key is always `target_key`. With the defaults, a path
/// segment `Books` joins on `source.BookId = Books.Id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JoinConvention {
    pub key_suffix: String,
    pub target_key: String,
}

impl Default for JoinConvention {
    fn default() -> Self {
        Self {
            key_suffix: "Id".to_string(),
            target_key: "Id".to_string(),
        }
    }
}

impl JoinConvention {
    pub fn source_key(&self, segment: &str) -> String {
        format!("{}{}", singular(segment), self.key_suffix)
    }

    pub fn target_key(&self, _segment: &str) -> String {
        self.target_key.clone()
    }
}

/// Strips exactly one trailing `s`.
fn singular(name: &str) -> &str {
    name.strip_suffix('s').unwrap_or(name)
}

/// Expand every deep-join marker the active engine would compile.
///
/// Returns `None` when the query carries no markers. Otherwise builds a new
/// clause sequence with each marker replaced, at its own position, by its
/// join chain; the input query is never touched, so the pass cannot
/// double-expand.
pub(crate) fn expand(
    compiler: &Compiler,
    query: &Query,
) -> Result<Option<Query>, CompileError> {
    let engine = compiler.engine();
    let has_marker = query
        .clauses
        .iter()
        .any(|qc| matches!(qc.clause, Clause::DeepJoin(_)) && qc.scope.matches(engine));
    if !has_marker {
        return Ok(None);
    }

    let mut clauses = Vec::with_capacity(query.clauses.len());
    for qc in &query.clauses {
        match &qc.clause {
            Clause::DeepJoin(marker) if qc.scope.matches(engine) => {
                for join in expand_marker(compiler, query, marker)? {
                    clauses.push(QueryClause {
                        scope: qc.scope.clone(),
                        clause: Clause::Join(join),
                    });
                }
            }
            _ => clauses.push(qc.clone()),
        }
    }

    let mut expanded = query.clone();
    expanded.clauses = clauses;
    Ok(Some(expanded))
}

fn expand_marker(
    compiler: &Compiler,
    query: &Query,
    marker: &DeepJoinClause,
) -> Result<Vec<JoinClause>, CompileError> {
    // Every synthesized join references the base query's alias.
    let alias = query.alias.as_deref().ok_or_else(|| CompileError::MissingBaseAlias {
        path: marker.path.clone(),
    })?;
    let convention = compiler.convention();

    let segments: Vec<&str> = marker.path.split('.').filter(|s| !s.is_empty()).collect();
    let mut joins = Vec::with_capacity(segments.len());
    let mut source = alias;
    for segment in segments {
        let source_key = match marker.source_key {
            Some(f) => f(segment),
            None => convention.source_key(segment),
        };
        let target_key = match marker.target_key {
            Some(f) => f(segment),
            None => convention.target_key(segment),
        };
        joins.push(JoinClause {
            table: segment.to_string(),
            kind: marker.kind,
            on: vec![ConditionClause::ColumnCompare {
                first: format!("{}.{}", source, source_key),
                operator: "=".to_string(),
                second: format!("{}.{}", segment, target_key),
                is_or: false,
            }],
        });
        source = segment;
    }
    Ok(joins)
}
