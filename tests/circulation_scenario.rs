use circulation_desk::{CirculationError, Library, PatronId};

const ORWELL: &str = "978-0-452-28423-4";

fn borrowed(library: &Library, patron: u32) -> Option<u32> {
    library.roster().find(PatronId(patron)).map(|p| p.books_borrowed)
}

#[test]
fn test_issue_conflict_return_and_double_return() {
    let mut library = Library::default();
    assert_eq!(library.catalog().len(), 3);

    let issued = library.issue_book(PatronId(1), ORWELL);
    assert!(issued.is_ok());
    assert_eq!(borrowed(&library, 1), Some(1));
    assert_eq!(library.ledger().history().len(), 1);

    assert_eq!(
        library.issue_book(PatronId(2), ORWELL).map(|_| ()),
        Err(CirculationError::NotAvailable { isbn: ORWELL.into() })
    );

    let returned = library.return_book(PatronId(1), ORWELL);
    assert!(matches!(returned, Ok(ref r) if r.record.book.is_available));
    assert_eq!(borrowed(&library, 1), Some(0));
    assert!(library.ledger().history().is_empty());

    assert!(matches!(
        library.return_book(PatronId(1), ORWELL),
        Err(CirculationError::OrderViolation { top: None, .. })
    ));
}

#[test]
fn test_lifo_law() {
    let mut library = Library::default();
    let a = "978-0-316-76948-0";
    let b = "978-0-06-112008-4";
    assert!(library.issue_book(PatronId(1), a).is_ok());
    assert!(library.issue_book(PatronId(2), b).is_ok());

    assert!(matches!(
        library.return_book(PatronId(1), a),
        Err(CirculationError::OrderViolation { .. })
    ));
    assert!(library.return_book(PatronId(2), b).is_ok());
    assert!(library.return_book(PatronId(1), a).is_ok());
}

#[test]
fn test_request_then_fulfill() {
    let mut library = Library::default();
    assert!(matches!(
        library.request_book(PatronId(2), ORWELL),
        Err(CirculationError::NotAvailable { .. })
    ));

    assert!(library.issue_book(PatronId(1), ORWELL).is_ok());
    assert!(library.request_book(PatronId(2), ORWELL).is_ok());
    assert_eq!(library.ledger().pending().len(), 1);

    let fulfilled = library.process_requests();
    assert_eq!(fulfilled.len(), 1);
    assert!(library.ledger().pending().is_empty());
    assert!(matches!(library.ledger().top(), Some(r) if r.book.is_available && r.book.isbn == ORWELL));
}

#[test]
fn test_remove_book() {
    let mut library = Library::default();
    assert!(matches!(
        library.remove_book("978-1-234-56789-7"),
        Err(CirculationError::NotFound { .. })
    ));
    assert!(library.issue_book(PatronId(1), ORWELL).is_ok());
    assert!(library.remove_book(ORWELL).is_ok());
    assert_eq!(library.catalog().len(), 2);
}
