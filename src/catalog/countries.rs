//! Country catalog used to seed a new game

use serde::{Deserialize, Serialize};

use crate::core::error::{DeepStateError, Result};
use crate::state::Country;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CountryCatalog {
    countries: Vec<Country>,
}

impl CountryCatalog {
    pub fn new(countries: Vec<Country>) -> Result<Self> {
        if countries.is_empty() {
            return Err(DeepStateError::InvalidCatalog("no countries defined".into()));
        }
        for (idx, country) in countries.iter().enumerate() {
            if countries[..idx].iter().any(|other| other.name == country.name) {
                return Err(DeepStateError::InvalidCatalog(format!(
                    "duplicate country '{}'",
                    country.name
                )));
            }
        }
        Ok(Self { countries })
    }

    pub fn iter(&self) -> impl Iterator<Item = &Country> {
        self.countries.iter()
    }

    pub fn len(&self) -> usize {
        self.countries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }

    /// Fresh copies for a new game
    pub fn to_vec(&self) -> Vec<Country> {
        self.countries.clone()
    }
}
