//! Command and callback parsing
//!
//! Callback payloads carry an equipment id and, for confirmations, a
//! location or status name. Ids and names arrive as raw strings and are
//! validated here, before anything reaches storage.

use std::str::FromStr;

use crate::{
    error::{AppError, AppResult},
    models::enums::{EquipmentStatus, Location},
};

/// Bot commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Start,
    Equipment,
    My,
    Movements,
    Help,
}

impl Command {
    /// Parse a message text into a command. A `@botname` suffix and
    /// anything after the command word are ignored.
    pub fn parse(text: &str) -> Option<Command> {
        let word = text.trim().split_whitespace().next()?;
        let word = word.split('@').next().unwrap_or(word);
        match word {
            "/start" => Some(Command::Start),
            "/equipment" => Some(Command::Equipment),
            "/my" => Some(Command::My),
            "/movements" => Some(Command::Movements),
            "/help" => Some(Command::Help),
            _ => None,
        }
    }
}

/// Parsed callback payloads
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallbackAction {
    /// Ask where to move a unit
    Move { equipment_id: i32 },
    /// Confirmed destination
    MoveTo { equipment_id: i32, location: Location },
    /// Ask for a unit's new status
    Status { equipment_id: i32 },
    /// Confirmed status
    SetStatus {
        equipment_id: i32,
        status: EquipmentStatus,
    },
}

impl CallbackAction {
    /// Parse raw callback data. Longer prefixes are tried first since
    /// `move_to_` also starts with `move_`.
    pub fn parse(data: &str) -> AppResult<CallbackAction> {
        if let Some(rest) = data.strip_prefix("move_to_") {
            let (equipment_id, location) = split_id_value(rest)?;
            let location = Location::from_str(location).map_err(AppError::InvalidValue)?;
            return Ok(CallbackAction::MoveTo {
                equipment_id,
                location,
            });
        }
        if let Some(rest) = data.strip_prefix("move_") {
            return Ok(CallbackAction::Move {
                equipment_id: parse_id(rest)?,
            });
        }
        if let Some(rest) = data.strip_prefix("set_status_") {
            let (equipment_id, status) = split_id_value(rest)?;
            let status = EquipmentStatus::from_str(status).map_err(AppError::InvalidValue)?;
            return Ok(CallbackAction::SetStatus {
                equipment_id,
                status,
            });
        }
        if let Some(rest) = data.strip_prefix("status_") {
            return Ok(CallbackAction::Status {
                equipment_id: parse_id(rest)?,
            });
        }
        Err(AppError::BadRequest(format!("Unknown callback: {}", data)))
    }

    /// Callback payload that parses back to this action
    pub fn data(&self) -> String {
        match self {
            CallbackAction::Move { equipment_id } => format!("move_{}", equipment_id),
            CallbackAction::MoveTo {
                equipment_id,
                location,
            } => format!("move_to_{}_{}", equipment_id, location),
            CallbackAction::Status { equipment_id } => format!("status_{}", equipment_id),
            CallbackAction::SetStatus {
                equipment_id,
                status,
            } => format!("set_status_{}_{}", equipment_id, status),
        }
    }
}

fn parse_id(raw: &str) -> AppResult<i32> {
    raw.parse()
        .map_err(|_| AppError::BadRequest(format!("Invalid equipment id: {}", raw)))
}

fn split_id_value(rest: &str) -> AppResult<(i32, &str)> {
    let (id, value) = rest
        .split_once('_')
        .ok_or_else(|| AppError::BadRequest(format!("Malformed callback payload: {}", rest)))?;
    Ok((parse_id(id)?, value))
}
