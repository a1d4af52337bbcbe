//! Guest RSVPs and stay/travel logistics

use chrono::NaiveTime;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{RoomId, RsvpId, TransportId};

/// RSVP state for an invited guest or household
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum, Default)]
#[serde(rename_all = "lowercase")]
pub enum RsvpStatus {
    #[default]
    Pending,
    Attending,
    Declined,
}

impl fmt::Display for RsvpStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RsvpStatus::Pending => write!(f, "Pending"),
            RsvpStatus::Attending => write!(f, "Attending"),
            RsvpStatus::Declined => write!(f, "Declined"),
        }
    }
}

/// An invited guest or household and their response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rsvp {
    /// Unique identifier
    pub id: RsvpId,

    /// Guest or household name
    pub guest_name: String,

    /// Contact phone
    #[serde(default)]
    pub phone: String,

    /// Response state
    #[serde(default)]
    pub status: RsvpStatus,

    /// Number of people covered by this response
    #[serde(default = "default_party_size")]
    pub party_size: u32,

    /// Free-form note (dietary needs, arrival details)
    #[serde(default)]
    pub note: String,
}

fn default_party_size() -> u32 {
    1
}

impl Rsvp {
    /// Create a new pending RSVP
    pub fn new(guest_name: impl Into<String>, party_size: u32) -> Self {
        Self {
            id: RsvpId::new(),
            guest_name: guest_name.into(),
            phone: String::new(),
            status: RsvpStatus::Pending,
            party_size,
            note: String::new(),
        }
    }
}

/// A hotel room assignment for out-of-town guests
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    /// Unique identifier
    pub id: RoomId,

    /// Hotel name
    pub hotel: String,

    /// Room number or block label
    pub room_number: String,

    /// Names of assigned occupants
    #[serde(default)]
    pub occupants: Vec<String>,

    /// Free-form note
    #[serde(default)]
    pub notes: String,
}

impl Room {
    /// Create a new unassigned room
    pub fn new(hotel: impl Into<String>, room_number: impl Into<String>) -> Self {
        Self {
            id: RoomId::new(),
            hotel: hotel.into(),
            room_number: room_number.into(),
            occupants: Vec::new(),
            notes: String::new(),
        }
    }
}

/// A vehicle leg for moving guests between venues
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transport {
    /// Unique identifier
    pub id: TransportId,

    /// Vehicle description (e.g., "Tempo Traveller 1")
    pub vehicle: String,

    /// Seating capacity
    pub capacity: u32,

    /// Route description (e.g., "Hotel → Venue")
    pub route: String,

    /// Scheduled pickup time
    pub pickup: NaiveTime,
}

impl Transport {
    /// Create a new transport leg
    pub fn new(
        vehicle: impl Into<String>,
        capacity: u32,
        route: impl Into<String>,
        pickup: NaiveTime,
    ) -> Self {
        Self {
            id: TransportId::new(),
            vehicle: vehicle.into(),
            capacity,
            route: route.into(),
            pickup,
        }
    }
}
