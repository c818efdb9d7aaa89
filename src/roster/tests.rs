use crate::{patron::PatronId, roster::Roster};

/// Helper function to set up the two default patrons
fn setup_roster() -> Roster {
    let mut roster = Roster::new();
    roster.add("John Doe", PatronId(1));
    roster.add("Jane Smith", PatronId(2));
    roster
}

/// Current loan count, or `None` for an unknown patron
fn borrowed(roster: &Roster, id: u32) -> Option<u32> {
    roster.find(PatronId(id)).map(|patron| patron.books_borrowed)
}

#[test]
fn test_find_by_id() {
    let roster = setup_roster();
    assert!(matches!(roster.find(PatronId(2)), Some(patron) if patron.name == "Jane Smith"));
    assert!(roster.find(PatronId(3)).is_none());
    assert_eq!(roster.len(), 2);
    assert!(!roster.is_empty());
}

#[test]
fn test_increment_and_decrement() {
    let mut roster = setup_roster();
    assert!(roster.increment_borrowed(PatronId(1)));
    assert!(roster.increment_borrowed(PatronId(1)));
    assert_eq!(borrowed(&roster, 1), Some(2));

    assert!(roster.decrement_borrowed(PatronId(1)));
    assert_eq!(borrowed(&roster, 1), Some(1));
    assert_eq!(borrowed(&roster, 2), Some(0));
}

#[test]
fn test_decrement_never_goes_below_zero() {
    let mut roster = setup_roster();
    assert!(!roster.decrement_borrowed(PatronId(2)));
    assert_eq!(borrowed(&roster, 2), Some(0));
}

#[test]
fn test_unknown_patron_changes_nothing() {
    let mut roster = setup_roster();
    assert!(!roster.increment_borrowed(PatronId(42)));
    assert!(!roster.decrement_borrowed(PatronId(42)));
    assert!(roster.list().iter().all(|patron| patron.books_borrowed == 0));
}

#[test]
fn test_increment_stops_at_first_match() {
    let mut roster = setup_roster();
    roster.add("John Doe Jr.", PatronId(1));
    assert!(roster.increment_borrowed(PatronId(1)));

    let counts: Vec<u32> = roster.list().iter().map(|patron| patron.books_borrowed).collect();
    assert_eq!(counts, [1, 0, 0]);
}
