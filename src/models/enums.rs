//! Shared domain enums
//!
//! Equipment locations and statuses are closed sets; their display strings
//! are fixed and used verbatim in storage, chat replies and callback
//! payloads.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// ---------------------------------------------------------------------------
// Location
// ---------------------------------------------------------------------------

/// Physical locations equipment can live in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum Location {
    #[serde(rename = "Room 3.333")]
    Room3333,
    #[serde(rename = "Engineering Room")]
    EngineeringRoom,
    #[serde(rename = "Co-working Zone")]
    CoWorkingZone,
    #[serde(rename = "Production Zone")]
    ProductionZone,
    #[serde(rename = "Repair Workshop")]
    RepairWorkshop,
    #[serde(rename = "Inner Courtyard")]
    InnerCourtyard,
}

impl Location {
    /// Every location, in the order keyboards present them
    pub const ALL: [Location; 6] = [
        Location::Room3333,
        Location::EngineeringRoom,
        Location::CoWorkingZone,
        Location::ProductionZone,
        Location::RepairWorkshop,
        Location::InnerCourtyard,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Location::Room3333 => "Room 3.333",
            Location::EngineeringRoom => "Engineering Room",
            Location::CoWorkingZone => "Co-working Zone",
            Location::ProductionZone => "Production Zone",
            Location::RepairWorkshop => "Repair Workshop",
            Location::InnerCourtyard => "Inner Courtyard",
        }
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Location {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Location::ALL
            .iter()
            .find(|location| location.as_str() == s)
            .copied()
            .ok_or_else(|| format!("Unknown location: {}", s))
    }
}

// ---------------------------------------------------------------------------
// EquipmentStatus
// ---------------------------------------------------------------------------

/// Equipment availability
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum EquipmentStatus {
    Available,
    Occupied,
}

impl EquipmentStatus {
    pub const ALL: [EquipmentStatus; 2] = [EquipmentStatus::Available, EquipmentStatus::Occupied];

    pub fn as_str(&self) -> &'static str {
        match self {
            EquipmentStatus::Available => "Available",
            EquipmentStatus::Occupied => "Occupied",
        }
    }
}

impl std::fmt::Display for EquipmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for EquipmentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Available" => Ok(EquipmentStatus::Available),
            "Occupied" => Ok(EquipmentStatus::Occupied),
            _ => Err(format!("Unknown status: {}", s)),
        }
    }
}
