//! Application state.

use crate::assets::AssetManifest;
use crate::config::Config;
use crate::intl::CatalogSource;
use crate::routes::RouteTable;

/// Process-wide state shared by every request handler.
///
/// Built once at startup and kept behind an `Arc`; everything in it is
/// immutable for the life of the process. Per-request state lives in
/// [`crate::store::Store`], never here.
pub struct AppState {
    pub config: Config,
    pub assets: AssetManifest,
    pub source: Box<dyn CatalogSource>,
    pub routes: RouteTable,
}

impl AppState {
    /// State with the application's default route table.
    pub fn new(config: Config, assets: AssetManifest, source: Box<dyn CatalogSource>) -> Self {
        Self::with_routes(config, assets, source, RouteTable::app_default())
    }

    /// State with an explicit route table.
    pub fn with_routes(
        config: Config,
        assets: AssetManifest,
        source: Box<dyn CatalogSource>,
        routes: RouteTable,
    ) -> Self {
        Self {
            config,
            assets,
            source,
            routes,
        }
    }
}
