//! Compiler test modules.
//!
//! Tests are organized by category:
//! - `core`: statement assembly for SELECT, INSERT, UPDATE, DELETE
//! - `components`: individual component compilers (aggregate, CTE, …)
//! - `deep_join`: dotted-path join expansion
//! - `dialects`: dialect overrides and engine-scope filtering

mod deep_join;
mod dialects;
