use crate::{book::ShelfState, catalog::Catalog, error::CirculationError};

/// Helper function to set up a catalog with two titles
fn setup_catalog() -> Catalog {
    let mut catalog = Catalog::new();
    catalog.add("Dune", "Frank Herbert", "978-0-441-17271-9");
    catalog.add("Neuromancer", "William Gibson", "978-0-441-56959-5");
    catalog
}

#[test]
fn test_added_books_start_shelved() {
    assert!(Catalog::new().is_empty());
    let catalog = setup_catalog();
    assert_eq!(catalog.len(), 2);
    assert!(catalog.list().iter().all(|book| book.is_available));
    assert!(catalog.list().iter().all(|book| book.shelf_state() == ShelfState::Shelved));
}

#[test]
fn test_list_keeps_insertion_order() {
    let catalog = setup_catalog();
    let titles: Vec<&str> = catalog.list().iter().map(|book| book.title.as_str()).collect();
    assert_eq!(titles, ["Dune", "Neuromancer"]);
}

#[test]
fn test_duplicate_isbns_coexist() {
    let mut catalog = setup_catalog();
    catalog.add("Dune (second copy)", "Frank Herbert", "978-0-441-17271-9");
    assert_eq!(catalog.len(), 3);

    // Only the first copy is removed
    let removed = catalog.remove("978-0-441-17271-9");
    assert!(matches!(removed, Ok(ref book) if book.title == "Dune"));
    assert!(catalog.find_available("978-0-441-17271-9").is_some());
}

#[test]
fn test_remove_unknown_isbn_is_not_found() {
    let mut catalog = setup_catalog();
    let result = catalog.remove("000-0-000-00000-0");
    assert_eq!(result, Err(CirculationError::NotFound { isbn: "000-0-000-00000-0".into() }));
    assert_eq!(catalog.len(), 2);
}

#[test]
fn test_find_respects_availability() {
    let mut catalog = setup_catalog();
    assert!(catalog.find_available("978-0-441-56959-5").is_some());
    assert!(catalog.find_unavailable("978-0-441-56959-5").is_none());

    if let Some(book) = catalog.find_available_mut("978-0-441-56959-5") {
        book.is_available = false;
    }

    assert!(catalog.find_available("978-0-441-56959-5").is_none());
    assert!(
        matches!(catalog.find_unavailable("978-0-441-56959-5"), Some(book) if book.shelf_state() == ShelfState::Circulating)
    );
}

#[test]
fn test_remove_ignores_circulation_state() {
    let mut catalog = setup_catalog();
    if let Some(book) = catalog.find_available_mut("978-0-441-17271-9") {
        book.is_available = false;
    }
    assert!(catalog.remove("978-0-441-17271-9").is_ok());
    assert_eq!(catalog.len(), 1);
}
