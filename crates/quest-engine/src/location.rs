//! Building-code resolution.
//!
//! Room strings in the export look like `EIT 1015`: a building code, then a
//! room number. The code is looked up in a [`BuildingTable`] that the caller
//! supplies, so a different campus only needs a different table.

use std::collections::BTreeMap;

use crate::error::{Result, ScheduleError};
use crate::types::UNKNOWN;

/// Built-in table for the University of Waterloo main campus.
const WATERLOO: &[(&str, &str)] = &[
    ("AL", "Arts Lecture Hall (AL)"),
    ("BMH", "B.C. Matthews Hall (BMH)"),
    ("CGR", "Conrad Grebel University College (CGR)"),
    ("CIF", "Columbia Icefield (CIF)"),
    ("CPH", "Carl A. Pollock Hall (CPH)"),
    ("DC", "William G. Davis Computer Research Centre (DC)"),
    ("DWE", "Douglas Wright Engineering Building (DWE)"),
    ("E2", "Engineering 2 (E2)"),
    ("E3", "Engineering 3 (E3)"),
    ("E5", "Engineering 5 (E5)"),
    ("E6", "Engineering 6 (E6)"),
    ("E7", "Engineering 7 (E7)"),
    ("EIT", "Centre for Environmental & Information Technology (EIT)"),
    ("ESC", "Earth Sciences & Chemistry (ESC)"),
    ("EV1", "Environment 1 (EV1)"),
    ("EV2", "Environment 2 (EV2)"),
    ("EV3", "Environment 3 (EV3)"),
    ("FED", "Federation Hall (FED)"),
    ("GH", "Graduate House (GH)"),
    ("GSC", "General Services Complex (GSC)"),
    ("HH", "J.G. Hagey Hall of the Humanities (HH)"),
    ("HS", "Health Services (HS)"),
    ("LIB", "Dana Porter Library (LIB)"),
    ("M3", "Mathematics 3 (M3)"),
    ("MC", "Mathematics & Computer Building (MC)"),
    ("MHR", "Minota Hagey Residence (MHR)"),
    ("ML", "Modern Languages (ML)"),
    ("OPT", "School of Optometry and Vision Science (OPT)"),
    ("PAC", "Physical Activities Complex (PAC)"),
    ("PAS", "Psychology, Anthropology, and Sociology (PAS)"),
    ("PHY", "Physics (PHY)"),
    ("PSE", "Pearl Sullivan Engineering Building (PSE)"),
    ("QNC", "Mike & Ophelia Lazaridis Quantum-Nano Centre (QNC)"),
    ("RCH", "J.R. Coutts Engineering Lecture Hall (RCH)"),
    ("REN", "Renison University College (REN)"),
    ("SLC", "Student Life Centre (SLC)"),
    ("STC", "Science Teaching Complex (STC)"),
    ("TH", "Tatham Centre (TH)"),
    ("UWP", "University of Waterloo Place (UWP)"),
    ("V1", "Village 1 (V1)"),
    ("WEM", "William M. Tatham Centre (WEM)"),
];

/// Immutable building code → display name map.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildingTable {
    names: BTreeMap<String, String>,
}

impl BuildingTable {
    /// The built-in University of Waterloo table.
    pub fn waterloo() -> Self {
        WATERLOO
            .iter()
            .map(|(code, name)| (code.to_string(), name.to_string()))
            .collect()
    }

    /// Load a table from a JSON object of `"CODE": "Display Name"` pairs.
    ///
    /// # Errors
    /// Returns `ScheduleError::BuildingTable` if the input is not a JSON object
    /// of strings, or if a code is empty or contains whitespace (such a code
    /// could never match the first token of a room string).
    pub fn from_json(json: &str) -> Result<Self> {
        let names: BTreeMap<String, String> =
            serde_json::from_str(json).map_err(|e| ScheduleError::BuildingTable(e.to_string()))?;

        if let Some(code) = names
            .keys()
            .find(|code| code.is_empty() || code.contains(char::is_whitespace))
        {
            return Err(ScheduleError::BuildingTable(format!(
                "invalid building code {:?}",
                code
            )));
        }

        Ok(Self { names })
    }

    pub fn get(&self, code: &str) -> Option<&str> {
        self.names.get(code).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl FromIterator<(String, String)> for BuildingTable {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().collect(),
        }
    }
}

/// Maps a raw room string to its display form.
#[derive(Debug, Clone, Copy)]
pub struct LocationResolver<'a> {
    table: &'a BuildingTable,
    keep_room: bool,
}

impl<'a> LocationResolver<'a> {
    /// `keep_room` controls whether the room number survives substitution:
    /// `EIT 1015` becomes `Centre for ... (EIT) 1015` when set, and just
    /// `Centre for ... (EIT)` otherwise.
    pub fn new(table: &'a BuildingTable, keep_room: bool) -> Self {
        Self { table, keep_room }
    }

    /// Resolve the building code at the front of `raw`.
    ///
    /// Unknown codes pass through unchanged; an empty room string resolves to
    /// the unknown marker.
    pub fn resolve(&self, raw: &str) -> String {
        let mut tokens = raw.split_whitespace();
        let Some(code) = tokens.next() else {
            return UNKNOWN.to_string();
        };

        match self.table.get(code) {
            Some(name) if self.keep_room => {
                let room = tokens.collect::<Vec<_>>().join(" ");
                if room.is_empty() {
                    name.to_string()
                } else {
                    format!("{} {}", name, room)
                }
            }
            Some(name) => name.to_string(),
            None => raw.trim().to_string(),
        }
    }
}
