//! Group registration and lookup

use std::sync::Arc;

use tracing::{debug, info};

use crate::application::ApplicationResult;
use crate::domain::{validate_group, DomainError, Group};
use crate::infrastructure::traits::GroupStore;

/// Service for creating and querying groups.
pub struct GroupService {
    store: Arc<dyn GroupStore>,
}

impl GroupService {
    /// Create a new group service.
    pub fn new(store: Arc<dyn GroupStore>) -> Self {
        Self { store }
    }

    /// All registered groups, in insertion order.
    pub fn get_groups(&self) -> ApplicationResult<Vec<Group>> {
        Ok(self.store.load_groups()?)
    }

    /// Look up a group by name. `None` if no such group exists.
    pub fn get_group_by_name(&self, name: &str) -> ApplicationResult<Option<Group>> {
        debug!("get_group_by_name: name={}", name);
        Ok(self.store.get_group_by_name(name)?)
    }

    /// Validate and persist a new group.
    ///
    /// # Errors
    /// - `DomainError::InvalidGroup` with every violated rule; nothing is persisted
    /// - `DomainError::GroupAlreadyExists` if the name is taken
    /// - store errors, unchanged
    pub fn add_group(&self, candidate: Group) -> ApplicationResult<()> {
        let errors = validate_group(&candidate);
        if !errors.is_empty() {
            debug!("add_group: rejected {:?}: {:?}", candidate.name, errors);
            return Err(DomainError::InvalidGroup(errors).into());
        }

        if self.store.get_group_by_name(&candidate.name)?.is_some() {
            return Err(DomainError::GroupAlreadyExists(candidate.name).into());
        }

        info!(
            "add_group: name={} members={}",
            candidate.name,
            candidate.members.len()
        );
        self.store.add_group(candidate)?;
        Ok(())
    }

    /// Remove every group.
    pub fn clear(&self) -> ApplicationResult<()> {
        Ok(self.store.clear()?)
    }
}
