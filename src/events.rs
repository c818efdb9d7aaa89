use serde::{Deserialize, Serialize};

use crate::{book::Isbn, patron::PatronId};

/// Changes the desk reports to its observers
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum CirculationEvent {
    /// A book was added to the catalog
    BookAdded(Isbn),
    /// A book was removed from the catalog
    BookRemoved(Isbn),
    /// A patron was registered
    PatronAdded(PatronId),
    /// A book left the shelf
    Issued {
        /// Patron named on the issue
        patron: PatronId,
        /// ISBN issued
        isbn: Isbn,
    },
    /// The most recent loan was closed
    Returned {
        /// Patron returning
        patron: PatronId,
        /// ISBN returned
        isbn: Isbn,
    },
    /// A request joined the queue
    Requested {
        /// Patron requesting
        patron: PatronId,
        /// ISBN requested
        isbn: Isbn,
    },
    /// A queued request was moved onto the loan stack
    Fulfilled {
        /// Patron whose request was fulfilled
        patron: PatronId,
        /// ISBN fulfilled
        isbn: Isbn,
    },
}
