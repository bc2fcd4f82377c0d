use tracing::trace;

/// Returns the element at `index` if `0 <= index < items.len()`.
pub fn element_at<T>(items: &[T], index: i64) -> Option<&T> {
    usize::try_from(index).ok().and_then(|i| items.get(i))
}

/// Returns a copy of the element at `index`, or `default` when the index is
/// out of range. Out of range is not an error.
pub fn element_at_or<T: Clone>(items: &[T], index: i64, default: T) -> T {
    match element_at(items, index) {
        Some(item) => item.clone(),
        None => {
            trace!(index, len = items.len(), "Index out of range, using default");
            default
        }
    }
}

pub fn element_at_or_default<T: Clone + Default>(items: &[T], index: i64) -> T {
    element_at_or(items, index, T::default())
}

pub trait SliceHelpers<T> {
    fn element_at(&self, index: i64) -> Option<&T>;

    fn element_at_or(&self, index: i64, default: T) -> T
    where
        T: Clone;

    fn element_at_or_default(&self, index: i64) -> T
    where
        T: Clone + Default;
}

impl<T> SliceHelpers<T> for [T] {
    fn element_at(&self, index: i64) -> Option<&T> {
        element_at(self, index)
    }

    fn element_at_or(&self, index: i64, default: T) -> T
    where
        T: Clone,
    {
        element_at_or(self, index, default)
    }

    fn element_at_or_default(&self, index: i64) -> T
    where
        T: Clone + Default,
    {
        element_at_or_default(self, index)
    }
}
