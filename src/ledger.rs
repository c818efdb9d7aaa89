//! Open loans and pending requests.
//!
//! Loans form a stack: only the most recent one can be returned. Requests form
//! a queue that drains into the loan stack while the stack is smaller than the
//! catalog. Both hold copies of catalog entries, not references, so a record
//! can go stale relative to the catalog.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::{
    book::{Book, Isbn},
    catalog::Catalog,
    error::{CirculationError, CirculationResult},
    patron::PatronId,
    roster::Roster,
};

/// Copy of a book taken when it was issued (or when a request was fulfilled)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct BorrowRecord {
    /// Snapshot of the catalog entry
    pub book: Book,
    /// Patron the loan was made for
    pub patron: PatronId,
}

/// Copy of a circulating book taken when a patron asked for it
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RequestRecord {
    /// Snapshot of the catalog entry
    pub book: Book,
    /// Patron who filed the request
    pub patron: PatronId,
}

/// Receipt for a successful issue
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issued {
    /// Patron named on the issue
    pub patron: PatronId,
    /// ISBN that left the shelf
    pub isbn: Isbn,
    /// Whether the patron was on the roster and had the loan counted
    pub patron_counted: bool,
}

/// Receipt for a successful return
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Returned {
    /// Patron whose count was decremented
    pub patron: PatronId,
    /// The popped record, marked available
    pub record: BorrowRecord,
}

/// Receipt for a queued request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Requested {
    /// Patron who filed the request
    pub patron: PatronId,
    /// ISBN requested
    pub isbn: Isbn,
    /// Number of requests ahead of this one
    pub ahead: usize,
}

/// A request moved from the queue onto the loan stack
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fulfilled {
    /// The record as pushed onto the history
    pub record: BorrowRecord,
}

/// Loan stack and request queue
#[derive(Debug, Clone, Default)]
pub struct CirculationLedger {
    /// Open loans, most recent last
    history: Vec<BorrowRecord>,
    /// Requests waiting on circulating books, oldest first
    pending: VecDeque<RequestRecord>,
}

impl CirculationLedger {
    /// Create a ledger with no loans or requests
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue the first shelved copy of `isbn` to `patron`.
    ///
    /// The patron is not validated: an unknown id leaves the roster untouched
    /// and the issue still succeeds.
    ///
    /// # Errors
    ///
    /// Returns `CirculationError::NotAvailable` if no shelved copy exists
    pub fn issue(
        &mut self,
        catalog: &mut Catalog,
        roster: &mut Roster,
        patron: PatronId,
        isbn: &str,
    ) -> CirculationResult<Issued> {
        let book = catalog
            .find_available_mut(isbn)
            .ok_or_else(|| CirculationError::NotAvailable { isbn: isbn.into() })?;

        self.history.push(BorrowRecord { book: book.clone(), patron });
        book.is_available = false;

        let patron_counted = roster.increment_borrowed(patron);
        Ok(Issued { patron, isbn: isbn.into(), patron_counted })
    }

    /// Close the most recent loan if it is for `isbn`.
    ///
    /// The catalog entry is left as it is; only the popped record is marked
    /// available.
    ///
    /// # Errors
    ///
    /// Returns `CirculationError::OrderViolation` if the history is empty or
    /// its top is a different ISBN. Returns `CirculationError::PatronMismatch`
    /// if the record was popped but `patron` had no loan to take off; the pop
    /// is not undone.
    pub fn return_book(
        &mut self,
        roster: &mut Roster,
        patron: PatronId,
        isbn: &str,
    ) -> CirculationResult<Returned> {
        let top = self.top().map(|record| record.book.isbn.clone());
        if top.as_ref().is_none_or(|top| top != isbn) {
            return Err(CirculationError::OrderViolation { isbn: isbn.into(), top });
        }

        let Some(mut record) = self.history.pop() else {
            return Err(CirculationError::OrderViolation { isbn: isbn.into(), top: None });
        };
        record.book.is_available = true;

        if roster.decrement_borrowed(patron) {
            Ok(Returned { patron, record })
        } else {
            Err(CirculationError::PatronMismatch { patron, isbn: record.book.isbn })
        }
    }

    /// Queue a request for a copy of `isbn` that is currently circulating.
    ///
    /// # Errors
    ///
    /// Returns `CirculationError::NotAvailable` if there is no circulating
    /// copy, either because one is shelved or because the ISBN is unknown
    pub fn request_book(
        &mut self,
        catalog: &Catalog,
        patron: PatronId,
        isbn: &str,
    ) -> CirculationResult<Requested> {
        let book = catalog
            .find_unavailable(isbn)
            .ok_or_else(|| CirculationError::NotAvailable { isbn: isbn.into() })?;

        let ahead = self.pending.len();
        self.pending.push_back(RequestRecord { book: book.clone(), patron });
        Ok(Requested { patron, isbn: isbn.into(), ahead })
    }

    /// Move requests onto the loan stack, oldest first, while the stack is
    /// smaller than the catalog.
    ///
    /// Fulfilled records are forced available. The catalog is not consulted
    /// beyond its size.
    pub fn fulfill_requests(&mut self, catalog: &Catalog) -> Vec<Fulfilled> {
        let mut fulfilled = Vec::new();
        while self.history.len() < catalog.len() {
            let Some(request) = self.pending.pop_front() else {
                break;
            };
            let mut book = request.book;
            book.is_available = true;
            let record = BorrowRecord { book, patron: request.patron };
            self.history.push(record.clone());
            fulfilled.push(Fulfilled { record });
        }
        fulfilled
    }

    /// Most recent open loan
    #[must_use]
    pub fn top(&self) -> Option<&BorrowRecord> {
        self.history.last()
    }

    /// Open loans, oldest first
    #[must_use]
    pub fn history(&self) -> &[BorrowRecord] {
        &self.history
    }

    /// Waiting requests, oldest first
    #[must_use]
    pub fn pending(&self) -> &VecDeque<RequestRecord> {
        &self.pending
    }
}
