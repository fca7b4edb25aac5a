//! Catalog data types
//!
//! The `/activities` endpoint returns a JSON object keyed by activity name.
//! `ActivityCatalog` keeps the keys in the order the server sent them, which
//! is the order cards and selector options are rendered in.

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A single activity as reported by the server
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ActivityRecord {
    /// Activity name. Carried as the map key on the wire.
    #[serde(skip)]
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    /// Participant emails in server order
    #[serde(default)]
    pub participants: Vec<String>,
}

impl ActivityRecord {
    /// Create a record with an empty roster
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        schedule: impl Into<String>,
        max_participants: u32,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            schedule: schedule.into(),
            max_participants,
            participants: Vec::new(),
        }
    }

    /// Builder method: add a participant
    pub fn participant(mut self, email: impl Into<String>) -> Self {
        self.participants.push(email.into());
        self
    }

    /// Number of registered participants
    pub fn participant_count(&self) -> usize {
        self.participants.len()
    }

    /// Capacity counter in `current/max` form
    pub fn capacity_label(&self) -> String {
        format!("{}/{}", self.participants.len(), self.max_participants)
    }
}

/// Mapping from activity name to record, in server order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivityCatalog {
    entries: Vec<ActivityRecord>,
}

impl ActivityCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record, replacing any record with the same name in place
    pub fn insert(&mut self, record: ActivityRecord) {
        match self.entries.iter_mut().find(|r| r.name == record.name) {
            Some(existing) => *existing = record,
            None => self.entries.push(record),
        }
    }

    /// Builder method: insert a record
    pub fn with(mut self, record: ActivityRecord) -> Self {
        self.insert(record);
        self
    }

    /// Look up an activity by name
    pub fn get(&self, name: &str) -> Option<&ActivityRecord> {
        self.entries.iter().find(|r| r.name == name)
    }

    /// Mutable lookup by name
    pub fn get_mut(&mut self, name: &str) -> Option<&mut ActivityRecord> {
        self.entries.iter_mut().find(|r| r.name == name)
    }

    /// Iterate records in server order
    pub fn iter(&self) -> impl Iterator<Item = &ActivityRecord> {
        self.entries.iter()
    }

    /// Activity names in server order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|r| r.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for ActivityCatalog {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for record in &self.entries {
            map.serialize_entry(&record.name, record)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for ActivityCatalog {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(CatalogVisitor)
    }
}

struct CatalogVisitor;

impl<'de> Visitor<'de> for CatalogVisitor {
    type Value = ActivityCatalog;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map of activity name to activity details")
    }

    fn visit_map<M: MapAccess<'de>>(self, mut access: M) -> Result<Self::Value, M::Error> {
        let mut catalog = ActivityCatalog {
            entries: Vec::with_capacity(access.size_hint().unwrap_or(0)),
        };

        while let Some((name, mut record)) = access.next_entry::<String, ActivityRecord>()? {
            record.name = name;
            catalog.insert(record);
        }

        Ok(catalog)
    }
}
