// Application state module
// Everything a request handler reads; built once, never written afterwards

use super::types::Config;
use crate::assets::AssetTable;

/// Application state
///
/// Shared between connections behind an `Arc`. The asset table is only
/// reachable through `&AssetTable`, which has no mutating methods.
#[derive(Debug)]
pub struct AppState {
    pub config: Config,
    assets: AssetTable,
}

impl AppState {
    pub fn new(config: Config, assets: AssetTable) -> Self {
        Self { config, assets }
    }

    pub const fn assets(&self) -> &AssetTable {
        &self.assets
    }
}
