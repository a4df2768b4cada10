//! Room inventory entities.

use serde::{Deserialize, Serialize};
use std::fmt;

use dormhub_core::types::RoomId;

/// Occupancy state of a room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoomStatus {
    /// Has free beds.
    Available,
    /// Every bed is taken.
    Occupied,
    /// Out of service.
    Maintenance,
    /// Held for an incoming tenant.
    Reserved,
}

impl fmt::Display for RoomStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Available => "Available",
            Self::Occupied => "Occupied",
            Self::Maintenance => "Maintenance",
            Self::Reserved => "Reserved",
        };
        write!(f, "{s}")
    }
}

/// A room in the dormitory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    /// Unique room identifier.
    pub id: RoomId,
    /// Door number, e.g. `"204B"`.
    pub room_number: String,
    /// Floor the room is on.
    #[serde(default)]
    pub floor: Option<i32>,
    /// Number of beds.
    pub capacity: u32,
    /// Number of beds taken.
    #[serde(default)]
    pub occupied: u32,
    /// Monthly rent per bed.
    #[serde(default)]
    pub monthly_rent: f64,
    /// Occupancy state.
    pub status: RoomStatus,
}

impl Room {
    /// Beds still free, never negative.
    pub fn vacancies(&self) -> u32 {
        self.capacity.saturating_sub(self.occupied)
    }
}

/// Body for creating or updating a room.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomInput {
    /// Door number.
    pub room_number: String,
    /// Floor the room is on.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub floor: Option<i32>,
    /// Number of beds.
    pub capacity: u32,
    /// Monthly rent per bed.
    pub monthly_rent: f64,
    /// Occupancy state; the backend defaults to `Available`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<RoomStatus>,
}
