//! In-memory asset storage
//!
//! The served directory is read once at startup into an [`AssetTable`].
//! After [`AssetTableBuilder::finish`] the table has no mutating methods, so
//! request handlers share it freely without locks.

mod indexer;
mod table;

pub use indexer::{index_directory, route_for};
pub use table::{Asset, AssetTable, AssetTableBuilder, INDEX_SUFFIX};
