//! Branch Model
//!
//! Branch → Section → Table, as returned by `GET branches` with
//! `include=sections,sections.tables`.

use serde::{Deserialize, Serialize};

/// Table entity (桌台)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    pub id: String,
    pub name: String,
    pub accepts_reservations: bool,
}

/// Section entity (区域：大厅、露台、包厢等)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub id: String,
    pub name: String,
    /// Missing when the server did not embed `sections.tables`
    #[serde(default)]
    pub tables: Vec<Table>,
}

impl Section {
    /// Number of tables in this section that accept reservations
    pub fn reservable_table_count(&self) -> usize {
        self.tables.iter().filter(|t| t.accepts_reservations).count()
    }
}

/// Branch entity (门店)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Branch {
    pub id: String,
    pub name: String,
    pub reference: String,
    pub accepts_reservations: bool,
    /// Reservation slot length, in minutes
    pub reservation_duration: u32,
    #[serde(default)]
    pub sections: Vec<Section>,
}

impl Branch {
    /// Total reservable tables across all sections
    pub fn reservable_table_count(&self) -> usize {
        self.sections.iter().map(Section::reservable_table_count).sum()
    }
}

/// Update branch payload
///
/// Only the fields listed here can be changed through `PUT branches/{id}`.
/// `id` and `sections` are owned by the server and replaced only by a fetch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BranchUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accepts_reservations: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reservation_duration: Option<u32>,
}

impl BranchUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    /// `{ "accepts_reservations": true }`
    pub fn enable_reservations() -> Self {
        Self::new().accepts_reservations(true)
    }

    /// `{ "accepts_reservations": false }`
    pub fn disable_reservations() -> Self {
        Self::new().accepts_reservations(false)
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn reference(mut self, reference: impl Into<String>) -> Self {
        self.reference = Some(reference.into());
        self
    }

    pub fn accepts_reservations(mut self, accepts: bool) -> Self {
        self.accepts_reservations = Some(accepts);
        self
    }

    pub fn reservation_duration(mut self, minutes: u32) -> Self {
        self.reservation_duration = Some(minutes);
        self
    }

    /// True when no field is set
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.reference.is_none()
            && self.accepts_reservations.is_none()
            && self.reservation_duration.is_none()
    }

    /// Shallow merge into a cached branch; unset fields are left alone.
    pub fn apply_to(&self, branch: &mut Branch) {
        if let Some(name) = &self.name {
            branch.name = name.clone();
        }
        if let Some(reference) = &self.reference {
            branch.reference = reference.clone();
        }
        if let Some(accepts) = self.accepts_reservations {
            branch.accepts_reservations = accepts;
        }
        if let Some(minutes) = self.reservation_duration {
            branch.reservation_duration = minutes;
        }
    }
}
