//! Dialect override and engine-scope tests.

use crate::ast::*;
use crate::compiler::{AnsiDialect, Compiler, MySqlDialect, SqlResult};

fn compile_mysql(query: &Query) -> SqlResult {
    Compiler::new(Box::new(MySqlDialect)).compile(query).unwrap()
}

fn basic(column: &str, operator: &str, value: impl Into<Value>) -> ConditionClause {
    ConditionClause::Basic {
        column: column.to_string(),
        operator: operator.to_string(),
        value: value.into(),
        is_or: false,
    }
}

#[test]
fn test_mysql_backtick_quoting() {
    let mut q = Query::select();
    q.push(Clause::From(FromClause::Table("users".into())));
    q.push(Clause::Select(SelectClause::Named("id".into())));
    assert_eq!(compile_mysql(&q).sql, "SELECT `id` FROM `users`");
}

#[test]
fn test_mysql_share_lock() {
    let mut q = Query::select();
    q.push(Clause::From(FromClause::Table("jobs".into())));
    q.push(Clause::Lock(LockClause::Share));
    assert_eq!(compile_mysql(&q).sql, "SELECT * FROM `jobs` LOCK IN SHARE MODE");
}

#[test]
fn test_mysql_random() {
    let mut q = Query::select();
    q.push(Clause::From(FromClause::Table("users".into())));
    q.push(Clause::OrderBy(OrderByClause::Random));
    assert_eq!(compile_mysql(&q).sql, "SELECT * FROM `users` ORDER BY RAND()");
}

#[test]
fn test_scoped_clauses_filtered_by_engine() {
    let mut q = Query::select();
    q.push(Clause::From(FromClause::Table("users".into())));
    q.push(Clause::Where(basic("shared", "=", "wildcard")));
    q.push_for("ansi", Clause::Where(basic("ansi_only", "=", "ansi")));
    q.push_for("mysql", Clause::Where(basic("mysql_only", "=", "mysql")));

    let result = compile_mysql(&q);
    assert_eq!(
        result.sql,
        "SELECT * FROM `users` WHERE `shared` = ? AND `mysql_only` = ?"
    );
    assert_eq!(
        result.bindings,
        vec![Value::String("wildcard".into()), Value::String("mysql".into())]
    );
}

#[test]
fn test_engine_scoped_from_preferred_over_wildcard() {
    let mut q = Query::select();
    q.push(Clause::From(FromClause::Table("users".into())));
    q.push_for("mysql", Clause::From(FromClause::Table("users_mysql".into())));

    assert_eq!(compile_mysql(&q).sql, "SELECT * FROM `users_mysql`");
    let ansi = Compiler::new(Box::new(AnsiDialect)).compile(&q).unwrap();
    assert_eq!(ansi.sql, "SELECT * FROM \"users\"");
}

#[test]
fn test_engine_scoped_lock_preferred_over_wildcard() {
    let mut q = Query::select();
    q.push(Clause::From(FromClause::Table("jobs".into())));
    q.push(Clause::Lock(LockClause::ForUpdate));
    q.push_for("mysql", Clause::Lock(LockClause::Share));

    assert_eq!(compile_mysql(&q).sql, "SELECT * FROM `jobs` LOCK IN SHARE MODE");
    let ansi = Compiler::new(Box::new(AnsiDialect)).compile(&q).unwrap();
    assert_eq!(ansi.sql, "SELECT * FROM \"jobs\" FOR UPDATE");
}

#[test]
fn test_scoped_limit() {
    let mut q = Query::select();
    q.push(Clause::From(FromClause::Table("users".into())));
    q.push_for("mysql", Clause::Limit(5));

    assert_eq!(compile_mysql(&q).sql, "SELECT * FROM `users` LIMIT ?");
    let ansi = Compiler::new(Box::new(AnsiDialect)).compile(&q).unwrap();
    assert_eq!(ansi.sql, "SELECT * FROM \"users\"");
    assert!(ansi.bindings.is_empty());
}
