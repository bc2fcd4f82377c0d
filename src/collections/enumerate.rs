use crate::utils::error::{HelperError, Result};
use serde_json::Value;
use std::any::Any;
use std::iter::FusedIterator;
use std::slice;

/// Forward-only cursor over a slice. A fresh call to [`enumerate`] starts a
/// fresh traversal.
#[derive(Debug, Clone)]
pub struct Enumerate<'a, T> {
    inner: slice::Iter<'a, T>,
}

impl<'a, T> Iterator for Enumerate<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for Enumerate<'_, T> {}

impl<T> FusedIterator for Enumerate<'_, T> {}

pub fn enumerate<T>(items: &[T]) -> Enumerate<'_, T> {
    Enumerate { inner: items.iter() }
}

/// Yields every element as `&dyn Any`, for callers that only know the
/// element type at runtime.
pub fn enumerate_erased<'a, T: Any>(items: &'a [T]) -> impl Iterator<Item = &'a dyn Any> + 'a {
    items.iter().map(|item| item as &'a dyn Any)
}

/// Like [`enumerate_erased`] but looks through the box, so
/// `downcast_ref` sees the stored value rather than the `Box` itself.
pub fn enumerate_boxed<'a>(items: &'a [Box<dyn Any>]) -> impl Iterator<Item = &'a dyn Any> + 'a {
    items.iter().map(|item| &**item as &'a dyn Any)
}

pub fn enumerate_json(value: &Value) -> Result<Enumerate<'_, Value>> {
    match value {
        Value::Array(items) => Ok(enumerate(items)),
        other => Err(HelperError::NotAnArray {
            found: json_kind(other).to_string(),
        }),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
