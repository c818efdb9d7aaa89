use tracing::{debug, info};

use crate::events::CirculationEvent;

/// Trait for circulation change observation
pub trait CirculationObserver {
    /// Called after a change has been applied
    fn on_event(&self, event: &CirculationEvent);
}

/// Logs every change at debug level
#[derive(Debug)]
pub struct TransitionLogger;

impl CirculationObserver for TransitionLogger {
    fn on_event(&self, event: &CirculationEvent) {
        match event {
            CirculationEvent::BookAdded(isbn) => debug!(%isbn, "book added"),
            CirculationEvent::BookRemoved(isbn) => debug!(%isbn, "book removed"),
            CirculationEvent::PatronAdded(patron) => debug!(%patron, "patron added"),
            CirculationEvent::Issued { patron, isbn } => debug!(%patron, %isbn, "book issued"),
            CirculationEvent::Returned { patron, isbn } => debug!(%patron, %isbn, "book returned"),
            CirculationEvent::Requested { patron, isbn } => {
                debug!(%patron, %isbn, "book requested");
            }
            CirculationEvent::Fulfilled { patron, isbn } => {
                debug!(%patron, %isbn, "request fulfilled");
            }
        }
    }
}

/// Announces changes a patron would want to hear about
#[derive(Debug)]
pub struct NotificationService;

impl CirculationObserver for NotificationService {
    fn on_event(&self, event: &CirculationEvent) {
        match event {
            CirculationEvent::Returned { isbn, .. } => {
                info!(%isbn, "book has been returned");
            }
            CirculationEvent::Fulfilled { patron, isbn } => {
                info!(%patron, %isbn, "requested book is now available, fulfilling request");
            }
            _ => {}
        }
    }
}
