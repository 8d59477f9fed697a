//! Technology tree

use serde::{Deserialize, Serialize};

use crate::core::error::{DeepStateError, Result};

/// A one-time unlock that lowers its researcher's visibility
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Technology {
    pub name: String,
    /// Research points required
    pub cost: u32,
    /// Visibility removed on completion (floored at 0)
    pub visibility_reduction: u32,
}

/// Technologies in catalog order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TechTree {
    technologies: Vec<Technology>,
}

impl TechTree {
    pub fn new(technologies: Vec<Technology>) -> Result<Self> {
        for (idx, tech) in technologies.iter().enumerate() {
            if technologies[..idx].iter().any(|other| other.name == tech.name) {
                return Err(DeepStateError::InvalidCatalog(format!(
                    "duplicate technology '{}'",
                    tech.name
                )));
            }
        }
        Ok(Self { technologies })
    }

    pub fn get(&self, name: &str) -> Option<&Technology> {
        self.technologies.iter().find(|t| t.name == name)
    }

    pub fn require(&self, name: &str) -> Result<&Technology> {
        self.get(name)
            .ok_or_else(|| DeepStateError::UnknownTechnology(name.to_string()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Technology> {
        self.technologies.iter()
    }

    /// Technologies not yet in `researched`, in catalog order
    pub fn unresearched<'a, 'b>(
        &'a self,
        researched: &'b [String],
    ) -> impl Iterator<Item = &'a Technology> + 'b
    where
        'a: 'b,
    {
        self.technologies
            .iter()
            .filter(move |t| !researched.iter().any(|name| *name == t.name))
    }

    pub fn len(&self) -> usize {
        self.technologies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.technologies.is_empty()
    }
}
