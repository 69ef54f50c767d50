//! Update dispatching
//!
//! Routes parsed updates to the directory and transition services. Business
//! failures come back to the user as chat messages; only storage faults
//! escape as errors, so the transport sees a 5xx instead of a misleading
//! success.

use crate::{
    error::{AppError, AppResult},
    services::{directory::ViewerListing, Services},
};

use super::{
    parse::{CallbackAction, Command},
    render, ChatUpdate, Reply,
};

/// Chat gateway over the core services
#[derive(Clone)]
pub struct Gateway {
    services: Services,
}

impl Gateway {
    pub fn new(services: Services) -> Self {
        Self { services }
    }

    /// Handle one chat update and produce the replies to render
    pub async fn handle(&self, update: &ChatUpdate) -> AppResult<Vec<Reply>> {
        if let Some(text) = &update.text {
            return match Command::parse(text) {
                Some(command) => recover(self.handle_command(update, command).await),
                None => Ok(vec![render::unknown_command()]),
            };
        }
        if let Some(data) = &update.callback_data {
            let result = match CallbackAction::parse(data) {
                Ok(action) => self.handle_action(action).await,
                Err(err) => Err(err),
            };
            return recover(result);
        }
        Ok(vec![render::unknown_command()])
    }

    async fn handle_command(&self, update: &ChatUpdate, command: Command) -> AppResult<Vec<Reply>> {
        match command {
            Command::Start => Ok(vec![render::greeting()]),
            Command::Help => Ok(vec![render::help()]),
            Command::Equipment => self.list_equipment(update.chat_id).await,
            Command::My => self.list_my_equipment(update.chat_id).await,
            Command::Movements => self.list_movements(update.chat_id).await,
        }
    }

    async fn list_equipment(&self, chat_id: i64) -> AppResult<Vec<Reply>> {
        match self.services.directory.list_for_viewer(chat_id).await? {
            ViewerListing::Registered { equipment, .. } => {
                let mut replies = vec![Reply::text("Here is the equipment list")];
                for item in &equipment {
                    let responsible = self.services.directory.responsible_for(item.id).await?;
                    replies.push(render::equipment_card(item, responsible.as_ref()));
                }
                Ok(replies)
            }
            ViewerListing::Public { equipment } => {
                let mut replies = vec![Reply::text("Here is the available equipment")];
                for item in &equipment {
                    let responsible = self.services.directory.responsible_for(item.id).await?;
                    replies.push(render::public_card(item, responsible.as_ref()));
                }
                Ok(replies)
            }
        }
    }

    async fn list_my_equipment(&self, chat_id: i64) -> AppResult<Vec<Reply>> {
        let Some(employee) = self.services.directory.viewer(chat_id).await? else {
            return Ok(vec![render::registered_only()]);
        };
        let equipment = self.services.directory.assigned_to(employee.id).await?;
        if equipment.is_empty() {
            return Ok(vec![Reply::text("No equipment is assigned to you.")]);
        }
        let mut replies = vec![Reply::text("Equipment assigned to you:")];
        for item in &equipment {
            replies.push(render::equipment_card(item, Some(&employee)));
        }
        Ok(replies)
    }

    async fn list_movements(&self, chat_id: i64) -> AppResult<Vec<Reply>> {
        if self.services.directory.viewer(chat_id).await?.is_none() {
            return Ok(vec![render::registered_only()]);
        }
        let entries = self.services.directory.movement_log().await?;
        Ok(vec![render::movement_log(&entries)])
    }

    async fn handle_action(&self, action: CallbackAction) -> AppResult<Vec<Reply>> {
        match action {
            CallbackAction::Move { equipment_id } => {
                let equipment = self.services.directory.equipment(equipment_id).await?;
                Ok(vec![Reply::with_keyboard(
                    format!("Choose a new location for {}:", equipment.name),
                    render::location_keyboard(equipment.id),
                )])
            }
            CallbackAction::MoveTo {
                equipment_id,
                location,
            } => {
                let movement = self.services.transitions.relocate(equipment_id, location).await?;
                Ok(vec![Reply::text(format!(
                    "Equipment moved to {}.",
                    movement.to_location
                ))])
            }
            CallbackAction::Status { equipment_id } => {
                let equipment = self.services.directory.equipment(equipment_id).await?;
                Ok(vec![Reply::with_keyboard(
                    format!("Choose the new status for {}:", equipment.name),
                    render::status_keyboard(equipment.id),
                )])
            }
            CallbackAction::SetStatus {
                equipment_id,
                status,
            } => {
                self.services.transitions.change_status(equipment_id, status).await?;
                Ok(vec![Reply::text(format!("Status updated to {}.", status))])
            }
        }
    }
}

/// Turn business failures into user-visible replies; let storage and
/// internal faults propagate.
fn recover(result: AppResult<Vec<Reply>>) -> AppResult<Vec<Reply>> {
    match result {
        Ok(replies) => Ok(replies),
        Err(
            err @ (AppError::NotFound(_)
            | AppError::InvalidValue(_)
            | AppError::UpdateFailed(_)
            | AppError::BadRequest(_)),
        ) => Ok(vec![Reply::text(format!("Sorry, that did not work. {}", err))]),
        Err(other) => Err(other),
    }
}
