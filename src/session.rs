//! Session state tracking.
//!
//! The engine owns session lifecycle; the client only threads the latest
//! session object through. Each statement must see the state (active
//! database, transaction context) left behind by the previous statement
//! on the same connection, so losing or merging an update silently
//! corrupts results.

use crate::protocol::{QueryResponse, SessionState};

/// Tracks the server-assigned session across statements on one connection.
///
/// Replacement semantics only: a response's session object, when present
/// and non-empty, replaces the tracked state wholesale. Responses without
/// a session leave the state untouched — absence means "no update", never
/// "reset".
#[derive(Debug, Clone, Default)]
pub struct SessionTracker {
    current: Option<SessionState>,
}

impl SessionTracker {
    /// Creates a tracker with no session, the state at connection start.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the active session state, if any.
    pub fn current(&self) -> Option<&SessionState> {
        self.current.as_ref()
    }

    /// Applies the session carried by a response, if any.
    ///
    /// Empty session objects are ignored as well; the engine sends them
    /// on transient pages without meaning "clear".
    pub fn update(&mut self, response: &QueryResponse) {
        if let Some(session) = &response.session {
            if !session.is_empty() {
                self.current = Some(session.clone());
            }
        }
    }

    /// Clears the tracked state, as on disconnect.
    pub fn reset(&mut self) {
        self.current = None;
    }
}
