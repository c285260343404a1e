//! Persistence of the active organization/project selection.

use std::sync::{Arc, Mutex};

use crate::error::SessionError;
use crate::session::{ContextFile, SessionStore};

/// Key/value slot for the active organization and project ids.
///
/// Setting a value to `None` removes it.
pub trait ContextStore: Send + Sync {
    fn active_organization(&self) -> Option<String>;
    fn active_project(&self) -> Option<String>;

    /// # Errors
    ///
    /// Returns `SessionError::Store` if the value cannot be persisted.
    fn set_active_organization(&self, id: Option<&str>) -> Result<(), SessionError>;

    /// # Errors
    ///
    /// Returns `SessionError::Store` if the value cannot be persisted.
    fn set_active_project(&self, id: Option<&str>) -> Result<(), SessionError>;
}

impl ContextStore for SessionStore {
    fn active_organization(&self) -> Option<String> {
        self.read_context().active_organization
    }

    fn active_project(&self) -> Option<String> {
        self.read_context().active_project
    }

    fn set_active_organization(&self, id: Option<&str>) -> Result<(), SessionError> {
        let mut context = self.read_context();
        context.active_organization = id.map(str::to_string);
        self.write_context(&context)
    }

    fn set_active_project(&self, id: Option<&str>) -> Result<(), SessionError> {
        let mut context = self.read_context();
        context.active_project = id.map(str::to_string);
        self.write_context(&context)
    }
}

impl<T: ContextStore + ?Sized> ContextStore for Arc<T> {
    fn active_organization(&self) -> Option<String> {
        (**self).active_organization()
    }

    fn active_project(&self) -> Option<String> {
        (**self).active_project()
    }

    fn set_active_organization(&self, id: Option<&str>) -> Result<(), SessionError> {
        (**self).set_active_organization(id)
    }

    fn set_active_project(&self, id: Option<&str>) -> Result<(), SessionError> {
        (**self).set_active_project(id)
    }
}

/// In-process context store, for tests and one-shot runs.
#[derive(Debug, Default)]
pub struct MemoryContextStore {
    inner: Mutex<ContextFile>,
}

impl MemoryContextStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_selection(organization: Option<&str>, project: Option<&str>) -> Self {
        Self {
            inner: Mutex::new(ContextFile {
                active_organization: organization.map(str::to_string),
                active_project: project.map(str::to_string),
            }),
        }
    }

    fn read(&self) -> ContextFile {
        self.inner
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone()
    }

    fn update(&self, f: impl FnOnce(&mut ContextFile)) {
        let mut guard = self
            .inner
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        f(&mut guard);
    }
}

impl ContextStore for MemoryContextStore {
    fn active_organization(&self) -> Option<String> {
        self.read().active_organization
    }

    fn active_project(&self) -> Option<String> {
        self.read().active_project
    }

    fn set_active_organization(&self, id: Option<&str>) -> Result<(), SessionError> {
        self.update(|c| c.active_organization = id.map(str::to_string));
        Ok(())
    }

    fn set_active_project(&self, id: Option<&str>) -> Result<(), SessionError> {
        self.update(|c| c.active_project = id.map(str::to_string));
        Ok(())
    }
}
