//! Render Model
//!
//! What the board shows, independent of where it is shown. Each refresh
//! builds a complete [`BoardView`] off-screen and hands it to the surface in
//! one piece, so a surface never displays half of one catalog and half of
//! another.

use crate::catalog::{ActivityCatalog, ActivityRecord};

/// Text of the roster placeholder
pub const NO_PARTICIPANTS: &str = "No participants yet";

/// Everything the activities region can show
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardView {
    /// Nothing fetched yet
    Loading,
    /// The last fetch failed; only this notice is shown
    Failed(String),
    /// A rendered catalog
    Catalog(CatalogView),
}

impl BoardView {
    /// Rendered catalog, if any
    pub fn catalog(&self) -> Option<&CatalogView> {
        match self {
            BoardView::Catalog(view) => Some(view),
            _ => None,
        }
    }
}

/// Cards plus the options mirrored into the signup form's selector
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogView {
    pub cards: Vec<ActivityCard>,
    pub options: Vec<String>,
}

impl CatalogView {
    /// Build the full view of a catalog, in server order
    pub fn from_catalog(catalog: &ActivityCatalog) -> Self {
        let cards: Vec<ActivityCard> = catalog.iter().map(ActivityCard::from_record).collect();
        let options = catalog.names().map(str::to_string).collect();
        Self { cards, options }
    }

    pub fn card(&self, name: &str) -> Option<&ActivityCard> {
        self.cards.iter().find(|c| c.name == name)
    }
}

/// One activity card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityCard {
    pub name: String,
    pub description: String,
    pub schedule: String,
    /// `current/max`
    pub capacity: String,
    pub participant_count: usize,
    pub roster: Vec<RosterEntry>,
}

impl ActivityCard {
    pub fn from_record(record: &ActivityRecord) -> Self {
        let roster = if record.participants.is_empty() {
            vec![RosterEntry::Placeholder]
        } else {
            record
                .participants
                .iter()
                .map(|email| RosterEntry::Participant {
                    email: email.clone(),
                })
                .collect()
        };

        Self {
            name: record.name.clone(),
            description: record.description.clone(),
            schedule: record.schedule.clone(),
            capacity: record.capacity_label(),
            participant_count: record.participant_count(),
            roster,
        }
    }

    /// Emails shown in the roster, skipping the placeholder
    pub fn emails(&self) -> impl Iterator<Item = &str> {
        self.roster.iter().filter_map(|entry| match entry {
            RosterEntry::Participant { email } => Some(email.as_str()),
            RosterEntry::Placeholder => None,
        })
    }
}

/// A roster row
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RosterEntry {
    /// A participant, rendered with an unregister control
    Participant { email: String },
    /// Shown alone when nobody is registered
    Placeholder,
}

/// Inline message under the signup form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormMessage {
    /// Increases with every message shown; used to hide only the message a
    /// timer was started for
    pub id: u64,
    pub kind: MessageKind,
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Error,
}

impl MessageKind {
    /// CSS class name used by the browser host
    pub fn class_name(self) -> &'static str {
        match self {
            MessageKind::Success => "success",
            MessageKind::Error => "error",
        }
    }
}
