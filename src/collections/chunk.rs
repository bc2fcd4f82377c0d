use crate::utils::error::Result;
use crate::utils::validation::{validate_positive_number, validate_signed_size};
use std::iter::{Fuse, FusedIterator};
use tracing::{debug, warn};

/// Lazy adapter yielding consecutive groups of at most `group_size` items.
///
/// Only one group is buffered at a time, so unbounded sources work.
#[derive(Debug, Clone)]
pub struct Groups<I> {
    iter: Fuse<I>,
    group_size: usize,
}

impl<I> Groups<I> {
    pub fn group_size(&self) -> usize {
        self.group_size
    }
}

impl<I: Iterator> Iterator for Groups<I> {
    type Item = Vec<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        let group: Vec<I::Item> = self.iter.by_ref().take(self.group_size).collect();
        if group.is_empty() {
            None
        } else {
            Some(group)
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.iter.size_hint();
        (
            lower.div_ceil(self.group_size),
            upper.map(|upper| upper.div_ceil(self.group_size)),
        )
    }
}

impl<I: Iterator> FusedIterator for Groups<I> {}

/// Splits `source` into groups where element `i` lands in group
/// `i / group_size`. Fails with `InvalidArgument` when `group_size` is zero.
pub fn break_into_groups<I: IntoIterator>(source: I, group_size: usize) -> Result<Groups<I::IntoIter>> {
    if let Err(err) = validate_positive_number("group_size", group_size, 1) {
        warn!(group_size, "Rejected grouping request");
        return Err(err);
    }

    debug!(group_size, "Breaking sequence into groups");
    Ok(Groups {
        iter: source.into_iter().fuse(),
        group_size,
    })
}

pub fn break_into_groups_signed<I: IntoIterator>(source: I, group_size: i64) -> Result<Groups<I::IntoIter>> {
    let group_size = validate_signed_size("group_size", group_size).inspect_err(|_| {
        warn!(group_size, "Rejected grouping request");
    })?;
    break_into_groups(source, group_size)
}

/// Number of groups `len` elements produce: `ceil(len / group_size)`.
pub fn group_count(len: usize, group_size: usize) -> Result<usize> {
    validate_positive_number("group_size", group_size, 1)?;
    Ok(len.div_ceil(group_size))
}

pub trait IteratorHelpers: Iterator + Sized {
    fn break_into_groups(self, group_size: usize) -> Result<Groups<Self>> {
        break_into_groups(self, group_size)
    }
}

impl<I: Iterator> IteratorHelpers for I {}
