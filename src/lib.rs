pub mod ast;
pub mod compiler;
pub mod error;

pub use compiler::{AnsiDialect, Compiler, Dialect, MySqlDialect, SqlResult};

pub mod prelude {
    pub use crate::ast::*;
    pub use crate::compiler::{AnsiDialect, Compiler, Dialect, MySqlDialect, SqlResult};
    pub use crate::error::CompileError;
}
