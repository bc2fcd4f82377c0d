pub mod collections;
pub mod config;
pub mod utils;

pub use collections::{
    break_into_groups, break_into_groups_signed, element_at, element_at_or, element_at_or_default,
    enumerate, enumerate_boxed, enumerate_erased, enumerate_json, group_count, Enumerate, Groups,
    IteratorHelpers, SliceHelpers,
};
pub use config::{GroupingConfig, HelpersConfig, LoggingConfig};
pub use utils::error::{HelperError, Result};
pub use utils::logger::{init_json_logger, init_logger};
