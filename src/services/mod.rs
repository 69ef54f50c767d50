//! Business logic services

pub mod directory;
pub mod transitions;

use crate::repository::Repository;

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub directory: directory::DirectoryService,
    pub transitions: transitions::TransitionService,
    pub repository: Repository,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository) -> Self {
        Self {
            directory: directory::DirectoryService::new(repository.clone()),
            transitions: transitions::TransitionService::new(repository.clone()),
            repository,
        }
    }
}
