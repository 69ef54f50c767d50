//! Reply rendering
//!
//! Message texts and inline keyboards. The public card deliberately omits
//! location, status and contact details; anonymous viewers only learn what
//! a unit is and whom to ask for it.

use crate::models::{
    employee::Employee,
    enums::{EquipmentStatus, Location},
    equipment::Equipment,
    movement::MovementLogEntry,
};

use super::{parse::CallbackAction, Button, Reply};

/// Inventory card shown to registered employees
pub fn equipment_card(equipment: &Equipment, responsible: Option<&Employee>) -> Reply {
    let mut text = format!(
        "Name: {}\nDescription: {}\nLocation: {}\nStatus: {}\n",
        equipment.name,
        equipment.description.as_deref().unwrap_or("-"),
        equipment.location,
        equipment.status,
    );
    match responsible {
        Some(employee) => {
            text.push_str(&format!(
                "Responsible: {}\nContact: @{}\nPhone: {}\nMail: {}",
                employee.full_name(),
                employee.telegram_username,
                employee.contact_number,
                employee.email,
            ));
        }
        None => text.push_str("Responsible: no responsible person"),
    }

    // Occupied units stay where they are until someone frees them up
    let mut row = Vec::new();
    if equipment.status == EquipmentStatus::Available {
        row.push(Button {
            label: "Move equipment".to_string(),
            data: CallbackAction::Move {
                equipment_id: equipment.id,
            }
            .data(),
        });
    }
    row.push(Button {
        label: "Change status".to_string(),
        data: CallbackAction::Status {
            equipment_id: equipment.id,
        }
        .data(),
    });

    Reply::with_keyboard(text, vec![row])
}

/// Restricted card for anonymous viewers
pub fn public_card(equipment: &Equipment, responsible: Option<&Employee>) -> Reply {
    let mut text = format!(
        "Name: {}\nDescription: {}\n",
        equipment.name,
        equipment.description.as_deref().unwrap_or("-"),
    );
    match responsible {
        Some(employee) => {
            text.push_str(&format!(
                "Responsible: {}\nContact: @{}",
                employee.full_name(),
                employee.telegram_username,
            ));
        }
        None => text.push_str("Responsible: no responsible person"),
    }
    Reply::text(text)
}

/// Destination picker, locations in rows of three
pub fn location_keyboard(equipment_id: i32) -> Vec<Vec<Button>> {
    Location::ALL
        .chunks(3)
        .map(|row| {
            row.iter()
                .map(|location| Button {
                    label: location.to_string(),
                    data: CallbackAction::MoveTo {
                        equipment_id,
                        location: *location,
                    }
                    .data(),
                })
                .collect()
        })
        .collect()
}

/// Status picker, one row
pub fn status_keyboard(equipment_id: i32) -> Vec<Vec<Button>> {
    vec![EquipmentStatus::ALL
        .iter()
        .map(|status| Button {
            label: status.to_string(),
            data: CallbackAction::SetStatus {
                equipment_id,
                status: *status,
            }
            .data(),
        })
        .collect()]
}

/// Full movement log
pub fn movement_log(entries: &[MovementLogEntry]) -> Reply {
    if entries.is_empty() {
        return Reply::text("No equipment movements recorded yet.");
    }
    let mut text = String::from("Equipment movement log\n\n");
    for entry in entries {
        text.push_str(&format!(
            "Equipment: {}\nMoved from {}\nto {}\nDate: {}\n\n",
            entry.equipment_name,
            entry.movement.from_location,
            entry.movement.to_location,
            entry.movement.movement_date.format("%Y-%m-%d %H:%M"),
        ));
    }
    Reply::text(text.trim_end().to_string())
}

pub fn greeting() -> Reply {
    Reply::text(
        "Hi! I am the equipment tracking bot. Use commands to look up equipment information. /help",
    )
}

pub fn help() -> Reply {
    Reply::text(
        "Available commands:\n\
         /start - Greeting\n\
         /equipment - Equipment list\n\
         /my - Equipment assigned to you\n\
         /movements - Equipment movement log\n\
         /help - Show this help",
    )
}

pub fn unknown_command() -> Reply {
    Reply::text("I do not know that command. /help lists what I can do.")
}

pub fn registered_only() -> Reply {
    Reply::text("This command is available to registered employees only.")
}
