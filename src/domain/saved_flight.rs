// Saved flight domain model and validation
use super::flight::FlightEnrichment;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub const MAX_NOTES_CHARS: usize = 500;
pub const DEFAULT_CALLSIGN: &str = "Unknown";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Priority {
    #[default]
    Low,
    Medium,
    High,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            _ => Err(ValidationError::UnknownPriority(s.to_string())),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("notes exceed 500 characters ({0})")]
    NotesTooLong(usize),
    #[error("unknown priority {0:?}, expected low, medium or high")]
    UnknownPriority(String),
}

/// Raw saved-flight fields as submitted by a form or assembled by quick-add.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SavedFlightDraft {
    pub callsign: Option<String>,
    pub flight_iata: Option<String>,
    pub airline: Option<String>,
    pub departure_airport: Option<String>,
    pub departure_iata: Option<String>,
    pub arrival_airport: Option<String>,
    pub arrival_iata: Option<String>,
    pub status: Option<String>,
    pub notes: Option<String>,
    pub priority: Option<String>,
}

impl SavedFlightDraft {
    /// Fill the lookup-derived fields from a flight search hit.
    pub fn enrich(&mut self, enrichment: FlightEnrichment) {
        self.flight_iata = Some(enrichment.flight_iata);
        self.airline = Some(enrichment.airline);
        self.departure_airport = Some(enrichment.departure_airport);
        self.departure_iata = Some(enrichment.departure_iata);
        self.arrival_airport = Some(enrichment.arrival_airport);
        self.arrival_iata = Some(enrichment.arrival_iata);
        self.status = Some(enrichment.status);
    }
}

/// Validated saved flight, not yet persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSavedFlight {
    pub callsign: String,
    pub flight_iata: Option<String>,
    pub airline: Option<String>,
    pub departure_airport: Option<String>,
    pub departure_iata: Option<String>,
    pub arrival_airport: Option<String>,
    pub arrival_iata: Option<String>,
    pub status: Option<String>,
    pub notes: Option<String>,
    pub priority: Priority,
}

fn trimmed(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn code(value: Option<String>) -> Option<String> {
    trimmed(value).map(|v| v.to_uppercase())
}

/// Canonical callsign: trimmed and uppercased, "Unknown" when blank.
pub fn normalize_callsign(raw: Option<&str>) -> String {
    raw.map(|c| c.trim().to_uppercase())
        .filter(|c| !c.is_empty())
        .unwrap_or_else(|| DEFAULT_CALLSIGN.to_string())
}

impl NewSavedFlight {
    pub fn from_draft(draft: SavedFlightDraft) -> Result<Self, ValidationError> {
        let notes = trimmed(draft.notes);
        if let Some(n) = &notes {
            let len = n.chars().count();
            if len > MAX_NOTES_CHARS {
                return Err(ValidationError::NotesTooLong(len));
            }
        }

        let priority = match draft.priority.as_deref() {
            Some(p) => p.parse()?,
            None => Priority::default(),
        };

        Ok(Self {
            callsign: normalize_callsign(draft.callsign.as_deref()),
            flight_iata: code(draft.flight_iata),
            airline: trimmed(draft.airline),
            departure_airport: trimmed(draft.departure_airport),
            departure_iata: code(draft.departure_iata),
            arrival_airport: trimmed(draft.arrival_airport),
            arrival_iata: code(draft.arrival_iata),
            status: trimmed(draft.status),
            notes,
            priority,
        })
    }
}

/// Persisted saved flight. Identity and timestamp come from storage.
#[derive(Debug, Clone, PartialEq)]
pub struct SavedFlight {
    pub id: String,
    pub flight: NewSavedFlight,
    pub saved_at: DateTime<Utc>,
}
