use std::sync::Mutex;
use uuid::Uuid;

use crate::models::errors::SamplerError;

/// Record of registered callbacks that will be notified of session events.
pub(crate) struct ListenerSet<T> {
    entries: Mutex<Vec<(Uuid, Box<dyn Fn(&T) + Send + Sync>)>>,
}

impl<T> ListenerSet<T> {
    pub(crate) fn new() -> Self {
        Self {
            entries: Mutex::new(Vec::new()),
        }
    }

    /// Registers a callback and returns its id.
    pub(crate) fn register<F>(&self, listener: F) -> Uuid
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        let id = Uuid::new_v4();
        let mut entries = self.entries.lock().unwrap();
        entries.push((id, Box::new(listener)));
        id
    }

    /// Unregisters the callback with the given id.
    ///
    /// Returns `ListenerNotFound` if no id matches a registered callback.
    pub(crate) fn unregister(&self, id: Uuid) -> Result<(), SamplerError> {
        let mut entries = self.entries.lock().unwrap();
        if let Some(pos) = entries.iter().position(|(entry_id, _)| *entry_id == id) {
            let _ = entries.remove(pos);
            return Ok(());
        }
        Err(SamplerError::ListenerNotFound(format!(
            "Listener with id {} not found",
            id
        )))
    }

    /// Calls each registered callback with the provided event.
    pub(crate) fn notify(&self, event: &T) {
        let entries = self.entries.lock().unwrap();
        for (_, listener) in entries.iter() {
            listener(event);
        }
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }
}
