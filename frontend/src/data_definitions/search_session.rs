//! Last-write-wins bookkeeping for in-flight searches.
//!
//! Every search begins with a ticket for its normalized filters. A response is only applied
//! while its ticket's filters are still the latest ones requested; anything older is dropped.

use std::cell::{Cell, RefCell};

use dioxus::logger::tracing;

use common::search_query::SearchFilters;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTicket {
    filters: SearchFilters,
    sequence: u64,
}

impl SearchTicket {
    pub fn filters(&self) -> &SearchFilters {
        &self.filters
    }
}

#[derive(Debug, Default)]
pub struct SearchSession {
    current: RefCell<Option<SearchFilters>>,
    issued: Cell<u64>,
}

impl SearchSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&self, filters: &SearchFilters) -> SearchTicket {
        let filters = filters.normalized();
        let sequence = self.issued.get() + 1;
        self.issued.set(sequence);
        *self.current.borrow_mut() = Some(filters.clone());
        SearchTicket { filters, sequence }
    }

    pub fn is_current(&self, ticket: &SearchTicket) -> bool {
        self.current.borrow().as_ref() == Some(&ticket.filters)
    }

    /// Hands back `response` if `ticket` is still current, else discards it.
    pub fn finish<T>(&self, ticket: &SearchTicket, response: T) -> Option<T> {
        if self.is_current(ticket) {
            Some(response)
        } else {
            tracing::debug!("discarding stale search response #{} of {}", ticket.sequence, self.issued.get());
            None
        }
    }
}
