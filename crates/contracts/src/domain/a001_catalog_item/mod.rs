pub mod aggregate;
pub mod catalog;
pub mod partition;

pub use aggregate::{CategoryRef, Item};
pub use catalog::{builtin_catalog, load_catalog, parse_catalog};
pub use partition::{partition_items, CategoryGroup, ItemOwner, PartitionedItems};
