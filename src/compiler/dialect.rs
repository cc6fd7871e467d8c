use crate::ast::LockClause;

/// The overridable hook surface of the compiler.
///
/// A dialect is a configuration object, not a pipeline: every method has a
/// default body, and a target engine overrides only the behaviors that
/// differ (quote pair, pagination shape, locking, built-in spellings). The
/// statement assembler never changes per dialect.
pub trait Dialect: Send + Sync {
    /// Tag matched against clause engine scopes.
    fn engine(&self) -> &'static str;

    fn open_quote(&self) -> char {
        '"'
    }

    fn close_quote(&self) -> char {
        '"'
    }

    /// Quote a single identifier segment, doubling embedded closing quotes.
    fn quote(&self, name: &str) -> String {
        let close = self.close_quote();
        let escaped = name.replace(close, &format!("{close}{close}"));
        format!("{}{}{}", self.open_quote(), escaped, close)
    }

    /// Positional parameter placeholder.
    fn placeholder(&self) -> String {
        "?".to_string()
    }

    /// Pagination fragments; the limit/offset value itself is bound.
    fn limit_fragment(&self) -> String {
        format!("LIMIT {}", self.placeholder())
    }

    fn offset_fragment(&self) -> String {
        format!("OFFSET {}", self.placeholder())
    }

    fn compile_lock(&self, lock: &LockClause) -> String {
        match lock {
            LockClause::ForUpdate => "FOR UPDATE".to_string(),
            LockClause::Share => "FOR SHARE".to_string(),
        }
    }

    fn fn_random(&self) -> &'static str {
        "RANDOM()"
    }

    fn fn_lower(&self) -> &'static str {
        "LOWER"
    }

    fn fn_upper(&self) -> &'static str {
        "UPPER"
    }
}

/// Baseline ANSI configuration; every hook keeps its default.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnsiDialect;

impl Dialect for AnsiDialect {
    fn engine(&self) -> &'static str {
        "ansi"
    }
}

/// MySQL configuration: backtick quoting, its own share-lock and random()
/// spellings.
#[derive(Debug, Clone, Copy, Default)]
pub struct MySqlDialect;

impl Dialect for MySqlDialect {
    fn engine(&self) -> &'static str {
        "mysql"
    }

    fn open_quote(&self) -> char {
        '`'
    }

    fn close_quote(&self) -> char {
        '`'
    }

    fn compile_lock(&self, lock: &LockClause) -> String {
        match lock {
            LockClause::ForUpdate => "FOR UPDATE".to_string(),
            LockClause::Share => "LOCK IN SHARE MODE".to_string(),
        }
    }

    fn fn_random(&self) -> &'static str {
        "RAND()"
    }
}
