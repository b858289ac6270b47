//! Event submission record and the form fields that build it

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A new event as sent to `/api/add-event`.
///
/// Every field is a string and travels exactly as entered. The only
/// non-empty initial values are the mode (`Offline`) and the fee (`0`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventSubmission {
    pub name_of_event: String,
    pub event_domain: String,
    pub date_of_event: String,
    pub description_insights: String,
    pub time_of_event: String,
    pub faculty_coordinators: String,
    pub student_coordinators: String,
    pub venue: String,
    pub mode_of_event: String,
    pub registration_fee: String,
    pub speakers: String,
    pub perks: String,
    pub collaboration: String,
}

impl Default for EventSubmission {
    fn default() -> Self {
        Self {
            name_of_event: String::new(),
            event_domain: String::new(),
            date_of_event: String::new(),
            description_insights: String::new(),
            time_of_event: String::new(),
            faculty_coordinators: String::new(),
            student_coordinators: String::new(),
            venue: String::new(),
            mode_of_event: EventMode::Offline.as_str().to_string(),
            registration_fee: "0".to_string(),
            speakers: String::new(),
            perks: String::new(),
            collaboration: String::new(),
        }
    }
}

impl EventSubmission {
    /// Current value of a field
    pub fn get(&self, field: EventField) -> &str {
        match field {
            EventField::Name => &self.name_of_event,
            EventField::Domain => &self.event_domain,
            EventField::Date => &self.date_of_event,
            EventField::Time => &self.time_of_event,
            EventField::Venue => &self.venue,
            EventField::Mode => &self.mode_of_event,
            EventField::Fee => &self.registration_fee,
            EventField::Collaboration => &self.collaboration,
            EventField::FacultyCoordinators => &self.faculty_coordinators,
            EventField::StudentCoordinators => &self.student_coordinators,
            EventField::Speakers => &self.speakers,
            EventField::Description => &self.description_insights,
            EventField::Perks => &self.perks,
        }
    }

    /// Replace a field's value verbatim
    pub fn set(&mut self, field: EventField, value: impl Into<String>) {
        let slot = match field {
            EventField::Name => &mut self.name_of_event,
            EventField::Domain => &mut self.event_domain,
            EventField::Date => &mut self.date_of_event,
            EventField::Time => &mut self.time_of_event,
            EventField::Venue => &mut self.venue,
            EventField::Mode => &mut self.mode_of_event,
            EventField::Fee => &mut self.registration_fee,
            EventField::Collaboration => &mut self.collaboration,
            EventField::FacultyCoordinators => &mut self.faculty_coordinators,
            EventField::StudentCoordinators => &mut self.student_coordinators,
            EventField::Speakers => &mut self.speakers,
            EventField::Description => &mut self.description_insights,
            EventField::Perks => &mut self.perks,
        };
        *slot = value.into();
    }
}

/// One input of the admin form, identified by its wire name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventField {
    Name,
    Domain,
    Date,
    Time,
    Venue,
    Mode,
    Fee,
    Collaboration,
    FacultyCoordinators,
    StudentCoordinators,
    Speakers,
    Description,
    Perks,
}

/// How a field is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Text,
    Date,
    Number,
    Select,
    TextArea,
}

/// Form sections, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventSection {
    CoreDetails,
    Logistics,
    People,
    Content,
}

impl EventSection {
    pub const ALL: [EventSection; 4] = [
        EventSection::CoreDetails,
        EventSection::Logistics,
        EventSection::People,
        EventSection::Content,
    ];

    pub fn title(self) -> &'static str {
        match self {
            EventSection::CoreDetails => "Core Details",
            EventSection::Logistics => "Logistics",
            EventSection::People => "People",
            EventSection::Content => "Content (For AI)",
        }
    }

    /// Fields of this section, in display order
    pub fn fields(self) -> impl Iterator<Item = EventField> {
        EventField::ALL
            .into_iter()
            .filter(move |f| f.section() == self)
    }
}

impl EventField {
    /// Every field, in display order
    pub const ALL: [EventField; 13] = [
        EventField::Name,
        EventField::Domain,
        EventField::Date,
        EventField::Time,
        EventField::Venue,
        EventField::Mode,
        EventField::Fee,
        EventField::Collaboration,
        EventField::FacultyCoordinators,
        EventField::StudentCoordinators,
        EventField::Speakers,
        EventField::Description,
        EventField::Perks,
    ];

    /// JSON key and HTML `name` attribute
    pub fn name(self) -> &'static str {
        match self {
            EventField::Name => "name_of_event",
            EventField::Domain => "event_domain",
            EventField::Date => "date_of_event",
            EventField::Time => "time_of_event",
            EventField::Venue => "venue",
            EventField::Mode => "mode_of_event",
            EventField::Fee => "registration_fee",
            EventField::Collaboration => "collaboration",
            EventField::FacultyCoordinators => "faculty_coordinators",
            EventField::StudentCoordinators => "student_coordinators",
            EventField::Speakers => "speakers",
            EventField::Description => "description_insights",
            EventField::Perks => "perks",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.name() == name)
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            EventField::Name => "Event Name",
            EventField::Domain => "Domain (AI/ML)",
            EventField::Date => "Date",
            EventField::Time => "Time",
            EventField::Venue => "Venue",
            EventField::Mode => "Mode",
            EventField::Fee => "Registration Fee",
            EventField::Collaboration => "Collaboration",
            EventField::FacultyCoordinators => "Faculty Coordinators",
            EventField::StudentCoordinators => "Student Coordinators",
            EventField::Speakers => "Speakers",
            EventField::Description => "Description & insights",
            EventField::Perks => "Perks",
        }
    }

    pub fn is_required(self) -> bool {
        matches!(
            self,
            EventField::Name | EventField::Domain | EventField::Date | EventField::Description
        )
    }

    pub fn input_kind(self) -> InputKind {
        match self {
            EventField::Date => InputKind::Date,
            EventField::Fee => InputKind::Number,
            EventField::Mode => InputKind::Select,
            EventField::Description | EventField::Perks => InputKind::TextArea,
            _ => InputKind::Text,
        }
    }

    /// Spans both form columns
    pub fn full_width(self) -> bool {
        matches!(
            self,
            EventField::Speakers | EventField::Description | EventField::Perks
        )
    }

    pub fn section(self) -> EventSection {
        match self {
            EventField::Name | EventField::Domain | EventField::Date | EventField::Time => {
                EventSection::CoreDetails
            }
            EventField::Venue | EventField::Mode | EventField::Fee | EventField::Collaboration => {
                EventSection::Logistics
            }
            EventField::FacultyCoordinators
            | EventField::StudentCoordinators
            | EventField::Speakers => EventSection::People,
            EventField::Description | EventField::Perks => EventSection::Content,
        }
    }
}

impl fmt::Display for EventField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// How the event is held
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EventMode {
    #[default]
    Offline,
    Online,
    Hybrid,
}

impl EventMode {
    pub const ALL: [EventMode; 3] = [EventMode::Offline, EventMode::Online, EventMode::Hybrid];

    pub fn as_str(self) -> &'static str {
        match self {
            EventMode::Offline => "Offline",
            EventMode::Online => "Online",
            EventMode::Hybrid => "Hybrid",
        }
    }
}

impl fmt::Display for EventMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EventMode::ALL
            .into_iter()
            .find(|m| m.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown mode '{}' (expected offline, online or hybrid)", s))
    }
}
