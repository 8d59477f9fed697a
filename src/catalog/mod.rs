//! Static game catalogs
//!
//! Read-only lookup tables loaded once at game start: operations (player and
//! rival variants), the technology tree, countries, global events and the
//! starting-resources table.

pub mod agencies;
pub mod countries;
pub mod events;
pub mod loader;
pub mod operations;
pub mod tech;

use std::path::Path;

use crate::core::error::Result;

pub use agencies::{StartingResources, StartingResourcesTable};
pub use countries::CountryCatalog;
pub use events::{EventCatalog, EventTarget, GlobalEvent};
pub use loader::{load_catalogs, parse_catalogs, CatalogSources};
pub use operations::{OperationCatalog, OperationDef, DEFAULT_VISIBILITY_INCREASE};
pub use tech::{TechTree, Technology};

/// Every static table the simulation reads
#[derive(Debug, Clone)]
pub struct Catalogs {
    pub player_operations: OperationCatalog,
    pub rival_operations: OperationCatalog,
    pub tech_tree: TechTree,
    pub countries: CountryCatalog,
    pub events: EventCatalog,
    pub starting_resources: StartingResourcesTable,
}

impl Catalogs {
    /// Catalogs shipped with the crate
    pub fn builtin() -> Result<Self> {
        parse_catalogs(CatalogSources::builtin())
    }

    /// Load catalogs from a data directory
    pub fn load_dir(dir: &Path) -> Result<Self> {
        load_catalogs(dir)
    }
}
