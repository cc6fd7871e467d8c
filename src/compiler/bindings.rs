use crate::ast::Value;

use super::dialect::Dialect;

/// Ordered accumulator for bound values.
///
/// Values are appended in emission order, so the finished list lines up with
/// the left-to-right placeholders of the compiled text. Placeholder count
/// always equals value count.
#[derive(Debug, Default)]
pub struct Bindings {
    values: Vec<Value>,
}

impl Bindings {
    pub fn new() -> Self {
        Self { values: Vec::new() }
    }

    pub fn push(&mut self, value: Value) {
        self.values.push(value);
    }

    pub fn extend(&mut self, values: impl IntoIterator<Item = Value>) {
        self.values.extend(values);
    }

    /// Bind one value and return its placeholder.
    pub fn parameter(&mut self, dialect: &dyn Dialect, value: &Value) -> String {
        self.values.push(value.clone());
        dialect.placeholder()
    }

    /// Bind a list of values; one placeholder per value, comma-joined.
    pub fn parameterize(&mut self, dialect: &dyn Dialect, values: &[Value]) -> String {
        values
            .iter()
            .map(|v| self.parameter(dialect, v))
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn into_values(self) -> Vec<Value> {
        self.values
    }
}
