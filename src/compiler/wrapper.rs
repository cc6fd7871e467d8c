//! Identifier wrapping. Pure string transforms, no bindings involved.

use super::dialect::Dialect;

/// Quote an identifier for the dialect.
///
/// `*` and parenthesized expressions pass through untouched, `expr as alias`
/// forms are split and both sides wrapped, and dotted names are quoted one
/// segment at a time (a `*` segment stays bare, as in `u.*`).
pub fn wrap(dialect: &dyn Dialect, ident: &str) -> String {
    let ident = ident.trim();
    if ident == "*" || ident.starts_with('(') {
        return ident.to_string();
    }
    if let Some((expr, alias)) = split_alias(ident) {
        return format!("{} AS {}", wrap(dialect, expr), wrap(dialect, alias));
    }
    ident
        .split('.')
        .map(|segment| {
            if segment == "*" {
                "*".to_string()
            } else {
                dialect.quote(segment)
            }
        })
        .collect::<Vec<_>>()
        .join(".")
}

/// Wrap a list of identifiers and comma-join them.
pub fn wrap_many(dialect: &dyn Dialect, idents: &[String]) -> String {
    idents
        .iter()
        .map(|i| wrap(dialect, i))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Trusted raw fragments are emitted verbatim.
pub fn raw(expr: &str) -> String {
    expr.to_string()
}

fn split_alias(ident: &str) -> Option<(&str, &str)> {
    let pos = ident
        .as_bytes()
        .windows(4)
        .rposition(|w| w.eq_ignore_ascii_case(b" as "))?;
    Some((ident[..pos].trim(), ident[pos + 4..].trim()))
}
