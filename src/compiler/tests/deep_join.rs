//! Deep-join expansion tests.

use crate::ast::*;
use crate::compiler::{AnsiDialect, Compiler, JoinConvention, SqlResult};
use crate::error::CompileError;

fn compile(query: &Query) -> SqlResult {
    Compiler::new(Box::new(AnsiDialect)).compile(query).unwrap()
}

fn base_query(alias: Option<&str>) -> Query {
    let mut q = Query::select();
    q.alias = alias.map(|a| a.to_string());
    q.push(Clause::From(FromClause::Table("Accounts".into())));
    q
}

#[test]
fn test_default_convention_chain() {
    let mut q = base_query(Some("A"));
    q.push(Clause::DeepJoin(DeepJoinClause::new("Author.Books", JoinKind::Inner)));
    assert_eq!(
        compile(&q).sql,
        "SELECT * FROM \"Accounts\" \
         INNER JOIN \"Author\" ON \"A\".\"AuthorId\" = \"Author\".\"Id\" \
         INNER JOIN \"Books\" ON \"Author\".\"BookId\" = \"Books\".\"Id\""
    );
}

#[test]
fn test_single_segment_path() {
    let mut q = base_query(Some("A"));
    q.push(Clause::DeepJoin(DeepJoinClause::new("Author", JoinKind::Left)));
    assert_eq!(
        compile(&q).sql,
        "SELECT * FROM \"Accounts\" LEFT JOIN \"Author\" ON \"A\".\"AuthorId\" = \"Author\".\"Id\""
    );
}

#[test]
fn test_chain_inserted_at_marker_position() {
    let mut q = base_query(Some("A"));
    q.push(Clause::Join(JoinClause {
        table: "posts".into(),
        kind: JoinKind::Inner,
        on: vec![],
    }));
    q.push(Clause::DeepJoin(DeepJoinClause::new("Author.Books", JoinKind::Inner)));
    q.push(Clause::Join(JoinClause {
        table: "comments".into(),
        kind: JoinKind::Inner,
        on: vec![],
    }));
    let sql = compile(&q).sql;
    let posts = sql.find("\"posts\"").unwrap();
    let author = sql.find("\"Author\"").unwrap();
    let books = sql.find("\"Books\"").unwrap();
    let comments = sql.find("\"comments\"").unwrap();
    assert!(posts < author && author < books && books < comments);
}

#[test]
fn test_custom_key_functions() {
    fn source_key(segment: &str) -> String {
        format!("{}_key", segment.to_lowercase())
    }
    fn target_key(_segment: &str) -> String {
        "pk".to_string()
    }

    let mut q = base_query(Some("A"));
    let mut marker = DeepJoinClause::new("Author", JoinKind::Inner);
    marker.source_key = Some(source_key);
    marker.target_key = Some(target_key);
    q.push(Clause::DeepJoin(marker));
    assert_eq!(
        compile(&q).sql,
        "SELECT * FROM \"Accounts\" INNER JOIN \"Author\" ON \"A\".\"author_key\" = \"Author\".\"pk\""
    );
}

#[test]
fn test_custom_convention() {
    let compiler = Compiler::new(Box::new(AnsiDialect)).with_convention(JoinConvention {
        key_suffix: "_id".into(),
        target_key: "id".into(),
    });
    let mut q = base_query(Some("a"));
    q.push(Clause::DeepJoin(DeepJoinClause::new("authors", JoinKind::Inner)));
    assert_eq!(
        compiler.compile(&q).unwrap().sql,
        "SELECT * FROM \"Accounts\" INNER JOIN \"authors\" ON \"a\".\"author_id\" = \"authors\".\"id\""
    );
}

#[test]
fn test_missing_base_alias_fails() {
    let mut q = base_query(None);
    q.push(Clause::DeepJoin(DeepJoinClause::new("Author.Books", JoinKind::Inner)));
    let err = Compiler::new(Box::new(AnsiDialect)).compile(&q).unwrap_err();
    assert_eq!(err, CompileError::MissingBaseAlias { path: "Author.Books".into() });
}

#[test]
fn test_input_query_is_not_mutated() {
    let mut q = base_query(Some("A"));
    q.push(Clause::DeepJoin(DeepJoinClause::new("Author.Books", JoinKind::Inner)));
    let before = q.clone();
    compile(&q);
    assert_eq!(q, before);
    assert!(q
        .clauses
        .iter()
        .any(|qc| matches!(qc.clause, Clause::DeepJoin(_))));
}
