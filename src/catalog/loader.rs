//! Load static catalogs from TOML files
//!
//! A data directory holds five files: `operations.toml`, `tech_tree.toml`,
//! `countries.toml`, `events.toml` and `agencies.toml`. The same files are
//! embedded in the binary as the built-in catalogs.

use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::catalog::agencies::{StartingResources, StartingResourcesTable};
use crate::catalog::countries::CountryCatalog;
use crate::catalog::events::{EventCatalog, GlobalEvent};
use crate::catalog::operations::{OperationCatalog, OperationDef};
use crate::catalog::tech::{TechTree, Technology};
use crate::catalog::Catalogs;
use crate::core::error::{DeepStateError, Result};
use crate::core::types::Agency;
use crate::state::Country;

pub const OPERATIONS_FILE: &str = "operations.toml";
pub const TECH_TREE_FILE: &str = "tech_tree.toml";
pub const COUNTRIES_FILE: &str = "countries.toml";
pub const EVENTS_FILE: &str = "events.toml";
pub const AGENCIES_FILE: &str = "agencies.toml";

const BUILTIN_OPERATIONS: &str = include_str!("../../data/operations.toml");
const BUILTIN_TECH_TREE: &str = include_str!("../../data/tech_tree.toml");
const BUILTIN_COUNTRIES: &str = include_str!("../../data/countries.toml");
const BUILTIN_EVENTS: &str = include_str!("../../data/events.toml");
const BUILTIN_AGENCIES: &str = include_str!("../../data/agencies.toml");

#[derive(Deserialize)]
struct OperationsFile {
    player: Vec<OperationDef>,
    rival: Vec<OperationDef>,
}

#[derive(Deserialize)]
struct TechTreeFile {
    #[serde(default)]
    technology: Vec<Technology>,
}

#[derive(Deserialize)]
struct CountriesFile {
    country: Vec<Country>,
}

#[derive(Deserialize)]
struct EventsFile {
    #[serde(default)]
    event: Vec<GlobalEvent>,
}

/// Raw TOML text for each catalog file
#[derive(Debug, Clone, Copy)]
pub struct CatalogSources<'a> {
    pub operations: &'a str,
    pub tech_tree: &'a str,
    pub countries: &'a str,
    pub events: &'a str,
    pub agencies: &'a str,
}

impl CatalogSources<'static> {
    pub fn builtin() -> Self {
        Self {
            operations: BUILTIN_OPERATIONS,
            tech_tree: BUILTIN_TECH_TREE,
            countries: BUILTIN_COUNTRIES,
            events: BUILTIN_EVENTS,
            agencies: BUILTIN_AGENCIES,
        }
    }
}

/// Parse and validate every catalog
pub fn parse_catalogs(sources: CatalogSources<'_>) -> Result<Catalogs> {
    let operations: OperationsFile = parse_file(OPERATIONS_FILE, sources.operations)?;
    let tech: TechTreeFile = parse_file(TECH_TREE_FILE, sources.tech_tree)?;
    let countries: CountriesFile = parse_file(COUNTRIES_FILE, sources.countries)?;
    let events: EventsFile = parse_file(EVENTS_FILE, sources.events)?;
    let agencies: BTreeMap<Agency, StartingResources> = parse_file(AGENCIES_FILE, sources.agencies)?;

    let catalogs = Catalogs {
        player_operations: OperationCatalog::new(operations.player)?,
        rival_operations: OperationCatalog::new(operations.rival)?,
        tech_tree: TechTree::new(tech.technology)?,
        countries: CountryCatalog::new(countries.country)?,
        events: EventCatalog::new(events.event)?,
        starting_resources: StartingResourcesTable::new(agencies),
    };

    tracing::debug!(
        player_operations = catalogs.player_operations.len(),
        rival_operations = catalogs.rival_operations.len(),
        technologies = catalogs.tech_tree.len(),
        countries = catalogs.countries.len(),
        events = catalogs.events.len(),
        "catalogs loaded"
    );

    Ok(catalogs)
}

/// Load every catalog file from `dir`
pub fn load_catalogs(dir: &Path) -> Result<Catalogs> {
    let read = |name: &str| {
        fs::read_to_string(dir.join(name)).map_err(|e| {
            tracing::error!("failed to read {}: {}", dir.join(name).display(), e);
            DeepStateError::IoError(e)
        })
    };

    let operations = read(OPERATIONS_FILE)?;
    let tech_tree = read(TECH_TREE_FILE)?;
    let countries = read(COUNTRIES_FILE)?;
    let events = read(EVENTS_FILE)?;
    let agencies = read(AGENCIES_FILE)?;

    parse_catalogs(CatalogSources {
        operations: &operations,
        tech_tree: &tech_tree,
        countries: &countries,
        events: &events,
        agencies: &agencies,
    })
}

fn parse_file<T: for<'de> Deserialize<'de>>(file: &str, content: &str) -> Result<T> {
    toml::from_str(content)
        .map_err(|e| DeepStateError::InvalidCatalog(format!("{}: {}", file, e)))
}
