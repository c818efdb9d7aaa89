use std::fmt;

use crate::{
    book::Book,
    catalog::Catalog,
    config::SeedConfig,
    error::CirculationResult,
    events::CirculationEvent,
    ledger::{CirculationLedger, Fulfilled, Issued, Requested, Returned},
    observers::{CirculationObserver, NotificationService, TransitionLogger},
    patron::{Patron, PatronId},
    roster::Roster,
};

/// One circulation desk: catalog, roster and ledger driven together
pub struct Library {
    /// Books known to the desk
    catalog: Catalog,
    /// Registered patrons
    roster: Roster,
    /// Open loans and pending requests
    ledger: CirculationLedger,
    /// Registered change observers
    observers: Vec<Box<dyn CirculationObserver>>,
}

// Manual implementation of Debug for Library
impl fmt::Debug for Library {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Library")
            .field("catalog", &self.catalog)
            .field("roster", &self.roster)
            .field("ledger", &self.ledger)
            .field("observers_count", &self.observers.len())
            .finish()
    }
}

impl Default for Library {
    fn default() -> Self {
        Self::from_seed(&SeedConfig::default())
    }
}

impl Library {
    /// Create a desk with nothing in it and no observers
    #[must_use]
    pub fn empty() -> Self {
        Self {
            catalog: Catalog::new(),
            roster: Roster::new(),
            ledger: CirculationLedger::new(),
            observers: Vec::new(),
        }
    }

    /// Create a desk stocked from `seed`. Seeding does not notify observers.
    #[must_use]
    pub fn from_seed(seed: &SeedConfig) -> Self {
        let mut library = Self::empty();
        for book in &seed.books {
            library.catalog.add(&book.title, &book.author, &book.isbn);
        }
        for patron in &seed.patrons {
            library.roster.add(&patron.name, patron.id);
        }
        library
    }

    /// Register the standard logging and notification observers
    #[must_use]
    pub fn with_standard_observers(mut self) -> Self {
        self.register_observer(Box::new(TransitionLogger));
        self.register_observer(Box::new(NotificationService));
        self
    }

    /// Register an observer to be notified of changes
    pub fn register_observer(&mut self, observer: Box<dyn CirculationObserver>) {
        self.observers.push(observer);
    }

    /// Tell every observer about `event`
    fn notify(&self, event: &CirculationEvent) {
        for observer in &self.observers {
            observer.on_event(event);
        }
    }

    /// Add a shelved book to the catalog
    pub fn add_book(&mut self, title: &str, author: &str, isbn: &str) -> Book {
        let book = self.catalog.add(title, author, isbn);
        self.notify(&CirculationEvent::BookAdded(book.isbn.clone()));
        book
    }

    /// Remove the first catalog entry for `isbn`
    ///
    /// # Errors
    ///
    /// Returns `CirculationError::NotFound` if the ISBN is not in the catalog
    pub fn remove_book(&mut self, isbn: &str) -> CirculationResult<Book> {
        let book = self.catalog.remove(isbn)?;
        self.notify(&CirculationEvent::BookRemoved(book.isbn.clone()));
        Ok(book)
    }

    /// Register a patron
    pub fn add_patron(&mut self, name: &str, id: PatronId) -> Patron {
        let patron = self.roster.add(name, id);
        self.notify(&CirculationEvent::PatronAdded(patron.id));
        patron
    }

    /// Issue a shelved copy of `isbn` to `patron`
    ///
    /// # Errors
    ///
    /// Returns `CirculationError::NotAvailable` if no copy is shelved
    pub fn issue_book(&mut self, patron: PatronId, isbn: &str) -> CirculationResult<Issued> {
        let issued = self.ledger.issue(&mut self.catalog, &mut self.roster, patron, isbn)?;
        self.notify(&CirculationEvent::Issued { patron, isbn: issued.isbn.clone() });
        Ok(issued)
    }

    /// Return the most recently issued book
    ///
    /// # Errors
    ///
    /// Returns `CirculationError::OrderViolation` if `isbn` is not the most
    /// recent loan and `CirculationError::PatronMismatch` if the patron has
    /// no loan to take off
    pub fn return_book(&mut self, patron: PatronId, isbn: &str) -> CirculationResult<Returned> {
        let returned = self.ledger.return_book(&mut self.roster, patron, isbn)?;
        self.notify(&CirculationEvent::Returned {
            patron,
            isbn: returned.record.book.isbn.clone(),
        });
        Ok(returned)
    }

    /// Queue a request for a circulating copy of `isbn`
    ///
    /// # Errors
    ///
    /// Returns `CirculationError::NotAvailable` if no copy is circulating
    pub fn request_book(&mut self, patron: PatronId, isbn: &str) -> CirculationResult<Requested> {
        let requested = self.ledger.request_book(&self.catalog, patron, isbn)?;
        self.notify(&CirculationEvent::Requested { patron, isbn: requested.isbn.clone() });
        Ok(requested)
    }

    /// Drain pending requests onto the loan stack
    pub fn process_requests(&mut self) -> Vec<Fulfilled> {
        let fulfilled = self.ledger.fulfill_requests(&self.catalog);
        for item in &fulfilled {
            self.notify(&CirculationEvent::Fulfilled {
                patron: item.record.patron,
                isbn: item.record.book.isbn.clone(),
            });
        }
        fulfilled
    }

    /// The catalog
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The roster
    #[must_use]
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// The ledger
    #[must_use]
    pub fn ledger(&self) -> &CirculationLedger {
        &self.ledger
    }
}
