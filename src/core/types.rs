//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::core::error::DeepStateError;

/// Turn counter (the game starts on turn 1)
pub type Turn = u32;

/// The four intelligence agencies.
///
/// Declaration order is CIA, Mossad, MSS, FSB. Every iteration over agencies
/// and every influence tie-break follows this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Agency {
    #[serde(rename = "CIA")]
    Cia,
    #[serde(rename = "Mossad")]
    Mossad,
    #[serde(rename = "MSS")]
    Mss,
    #[serde(rename = "FSB")]
    Fsb,
}

impl Agency {
    pub const ALL: [Agency; 4] = [Agency::Cia, Agency::Mossad, Agency::Mss, Agency::Fsb];

    /// Canonical display name
    pub fn name(&self) -> &'static str {
        match self {
            Agency::Cia => "CIA",
            Agency::Mossad => "Mossad",
            Agency::Mss => "MSS",
            Agency::Fsb => "FSB",
        }
    }

    /// Country the agency serves
    pub fn homeland(&self) -> &'static str {
        match self {
            Agency::Cia => "USA",
            Agency::Mossad => "Israel",
            Agency::Mss => "China",
            Agency::Fsb => "Russia",
        }
    }

    /// Every agency except `self`, in declaration order
    pub fn others(self) -> impl Iterator<Item = Agency> {
        Agency::ALL.into_iter().filter(move |a| *a != self)
    }
}

impl fmt::Display for Agency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Agency {
    type Err = DeepStateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Agency::ALL
            .into_iter()
            .find(|a| a.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| DeepStateError::UnknownAgency(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_agency_order() {
        assert!(Agency::Cia < Agency::Mossad);
        assert!(Agency::Mossad < Agency::Mss);
        assert!(Agency::Mss < Agency::Fsb);
    }

    #[test]
    fn test_agency_from_str() {
        assert_eq!("cia".parse::<Agency>().unwrap(), Agency::Cia);
        assert_eq!("Mossad".parse::<Agency>().unwrap(), Agency::Mossad);
        assert_eq!(" MSS ".parse::<Agency>().unwrap(), Agency::Mss);
        assert!("KGB".parse::<Agency>().is_err());
    }

    #[test]
    fn test_others_excludes_self() {
        let others: Vec<Agency> = Agency::Mss.others().collect();
        assert_eq!(others, vec![Agency::Cia, Agency::Mossad, Agency::Fsb]);
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&Agency::Fsb).unwrap();
        assert_eq!(json, "\"FSB\"");
        let back: Agency = serde_json::from_str("\"Mossad\"").unwrap();
        assert_eq!(back, Agency::Mossad);
    }
}
