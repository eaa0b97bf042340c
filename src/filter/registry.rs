// Named filter registry.
//
// A plain name -> function map owned by one MessageFilter. It lives in its
// own field, so registered names never shadow the filter's own methods.

use indexmap::IndexMap;
use tracing::debug;

use crate::error::{Result, SieveError};
use crate::message::Message;

/// A registered filter: takes a message plus string arguments, returns a new message.
pub type NamedFilter = Box<dyn Fn(&Message, &[&str]) -> Result<Message>>;

#[derive(Default)]
pub struct FilterRegistry {
    filters: IndexMap<String, NamedFilter>,
}

impl FilterRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `filter` under `name`, replacing any previous entry.
    /// Blank names are rejected.
    pub fn insert<F>(&mut self, name: impl Into<String>, filter: F) -> Result<()>
    where
        F: Fn(&Message, &[&str]) -> Result<Message> + 'static,
    {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(SieveError::Configuration(
                "filter name must not be blank".to_string(),
            ));
        }
        self.insert_unchecked(name, filter);
        Ok(())
    }

    /// Register one of the crate's own transforms, whose names are known non-blank.
    pub(crate) fn insert_builtin<F>(&mut self, name: &'static str, filter: F)
    where
        F: Fn(&Message, &[&str]) -> Result<Message> + 'static,
    {
        self.insert_unchecked(name.to_string(), filter);
    }

    fn insert_unchecked<F>(&mut self, name: String, filter: F)
    where
        F: Fn(&Message, &[&str]) -> Result<Message> + 'static,
    {
        if self.filters.insert(name.clone(), Box::new(filter)).is_some() {
            debug!(name = %name, "Replaced registered filter");
        }
    }

    /// Remove a filter. Unknown names are ignored.
    pub fn remove(&mut self, name: &str) -> bool {
        self.filters.shift_remove(name).is_some()
    }

    pub fn get(&self, name: &str) -> Option<&NamedFilter> {
        self.filters.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.filters.contains_key(name)
    }

    /// Registered names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.filters.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    pub fn apply(&self, name: &str, message: &Message, args: &[&str]) -> Result<Message> {
        let filter = self
            .get(name)
            .ok_or_else(|| SieveError::UnknownFilter(name.to_string()))?;
        filter(message, args)
    }
}

impl std::fmt::Debug for FilterRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.filters.keys()).finish()
    }
}
