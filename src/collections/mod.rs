pub mod chunk;
pub mod enumerate;
pub mod lookup;

pub use chunk::{break_into_groups, break_into_groups_signed, group_count, Groups, IteratorHelpers};
pub use enumerate::{enumerate, enumerate_boxed, enumerate_erased, enumerate_json, Enumerate};
pub use lookup::{element_at, element_at_or, element_at_or_default, SliceHelpers};
