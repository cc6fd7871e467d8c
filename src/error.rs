use thiserror::Error;

/// Errors raised while compiling a query.
///
/// All of these are precondition failures detected synchronously; the
/// compiler never returns partially assembled SQL alongside one of them.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CompileError {
    /// An insert/update/delete was compiled with no from clause at all.
    #[error("no target table declared for {statement} statement")]
    MissingTargetTable { statement: &'static str },

    /// The from clause exists but is not a named table where one is
    /// structurally required (insert/update/delete targets).
    #[error("{statement} statement requires a named table, found a {found} expression")]
    InvalidTableExpression {
        statement: &'static str,
        found: &'static str,
    },

    /// A clause variant reached a compiler that has no rendering for it.
    #[error("no compiler for clause variant '{variant}' in {context}")]
    UnrecognizedClauseVariant {
        variant: &'static str,
        context: &'static str,
    },

    /// A deep join needs the base query's alias to anchor the join chain.
    #[error("deep join over '{path}' requires the base query to carry an alias")]
    MissingBaseAlias { path: String },
}
