//! Coercion of loosely typed form values into request fields.
//!
//! Browsers and scripts post numbers as strings and the odd array where a
//! string belongs. A value of the wrong JSON type is recorded against its
//! field instead of failing the whole body, so validation still reports
//! every other field in the same response.

use serde_json::Value;

use crate::errors::FieldViolation;

#[derive(Debug, Default)]
pub(crate) struct Coercion {
    violations: Vec<FieldViolation>,
}

impl Coercion {
    /// Numbers pass through; numeric strings are parsed. Blank strings count
    /// as missing.
    pub(crate) fn number(&mut self, field: &str, value: Option<Value>) -> Option<f64> {
        match value? {
            Value::Number(number) => number.as_f64(),
            Value::String(text) if text.trim().is_empty() => None,
            Value::String(text) => match text.trim().parse::<f64>() {
                Ok(number) => Some(number),
                Err(_) => self.mismatch(field, "must be a number"),
            },
            Value::Null => None,
            Value::Bool(_) | Value::Array(_) | Value::Object(_) => {
                self.mismatch(field, "must be a number")
            }
        }
    }

    pub(crate) fn text(&mut self, field: &str, value: Option<Value>) -> Option<String> {
        match value? {
            Value::String(text) => Some(text),
            Value::Number(number) => Some(number.to_string()),
            Value::Bool(flag) => Some(flag.to_string()),
            Value::Null => None,
            Value::Array(_) | Value::Object(_) => self.mismatch(field, "must be text"),
        }
    }

    /// Any unusable entry rejects the whole list so that validation does not
    /// also complain about it being short or empty.
    pub(crate) fn text_list(&mut self, field: &str, value: Option<Value>) -> Option<Vec<String>> {
        let items = match value? {
            Value::Array(items) => items,
            Value::Null => return None,
            Value::String(_) | Value::Number(_) | Value::Bool(_) | Value::Object(_) => {
                return self.mismatch(field, "must be a list of text values");
            }
        };

        let mut entries = Vec::with_capacity(items.len());
        let mut rejected = false;
        for (index, item) in items.into_iter().enumerate() {
            match item {
                Value::String(text) => entries.push(text),
                Value::Number(number) => entries.push(number.to_string()),
                Value::Null | Value::Bool(_) | Value::Array(_) | Value::Object(_) => {
                    self.violations.push(FieldViolation::new(
                        field,
                        format!("{field}[{index}] must be text"),
                    ));
                    rejected = true;
                }
            }
        }

        if rejected {
            None
        } else {
            Some(entries)
        }
    }

    pub(crate) fn into_violations(self) -> Vec<FieldViolation> {
        self.violations
    }

    fn mismatch<T>(&mut self, field: &str, expectation: &str) -> Option<T> {
        self.violations.push(FieldViolation::new(field, format!("{field} {expectation}")));
        None
    }
}
