use std::fmt::Write as _;

use crate::{
    book::Book,
    catalog::Catalog,
    ledger::{BorrowRecord, CirculationLedger},
    roster::Roster,
};

/// Horizontal rule used by the catalog table
const RULE: &str = "-----------------------------------------------------------";

/// Text renderings of desk state for the console
#[derive(Debug)]
pub struct DeskView;

impl DeskView {
    /// Render the catalog as an ISBN / Title table
    #[must_use]
    pub fn catalog_table(catalog: &Catalog) -> String {
        let mut out = String::from("\n*** Library Catalog ***\n");
        let _ = writeln!(out, "{RULE}");
        let _ = writeln!(out, "| {:<17} | {:<24} | {:<10} |", "ISBN", "Title", "Status");
        let _ = writeln!(out, "{RULE}");
        for book in catalog.list() {
            let _ = writeln!(out, "{}", Self::catalog_row(book));
        }
        let _ = writeln!(out, "{RULE}");
        out
    }

    /// One row of the catalog table; long titles push the row wider
    fn catalog_row(book: &Book) -> String {
        format!("| {:<17} | {:<24} | {:<10} |", book.isbn, book.title, book.shelf_state().label())
    }

    /// Render open loans, most recent first
    #[must_use]
    pub fn history_table(ledger: &CirculationLedger) -> String {
        if ledger.history().is_empty() {
            return "No books are on loan.".to_string();
        }

        let mut table = String::from("| # | ISBN | Title | Patron |\n");
        table.push_str("|---|------|-------|--------|\n");
        for (depth, record) in ledger.history().iter().rev().enumerate() {
            Self::push_record_row(&mut table, depth, record);
        }
        table
    }

    /// Render waiting requests, oldest first
    #[must_use]
    pub fn pending_table(ledger: &CirculationLedger) -> String {
        if ledger.pending().is_empty() {
            return "No requests are waiting.".to_string();
        }

        let mut table = String::from("| # | ISBN | Title | Patron |\n");
        table.push_str("|---|------|-------|--------|\n");
        for (i, request) in ledger.pending().iter().enumerate() {
            let _ = writeln!(
                table,
                "| {} | {} | {} | {} |",
                i.saturating_add(1),
                request.book.isbn,
                request.book.title,
                request.patron
            );
        }
        table
    }

    /// Append one loan row
    fn push_record_row(table: &mut String, depth: usize, record: &BorrowRecord) {
        let _ = writeln!(
            table,
            "| {} | {} | {} | {} |",
            depth.saturating_add(1),
            record.book.isbn,
            record.book.title,
            record.patron
        );
    }

    /// Render registered patrons with their loan counts
    #[must_use]
    pub fn roster_table(roster: &Roster) -> String {
        let mut table = String::from("| ID | Name | Borrowed |\n");
        table.push_str("|----|------|----------|\n");
        for patron in roster.list() {
            let _ = writeln!(table, "| {} | {} | {} |", patron.id, patron.name, patron.books_borrowed);
        }
        table
    }
}

#[cfg(test)]
mod tests {
    use super::DeskView;
    use crate::library::Library;

    #[test]
    fn test_catalog_table_lists_every_book() {
        let library = Library::default();
        let table = DeskView::catalog_table(library.catalog());
        assert!(table.contains("978-0-316-76948-0"));
        assert!(table.contains("To Kill a Mockingbird"));
        assert!(table.contains("1984"));
        assert_eq!(table.matches("shelved").count(), 3);
    }

    #[test]
    fn test_history_table_puts_latest_loan_first() {
        let mut library = Library::default();
        assert!(library.issue_book(crate::patron::PatronId(1), "978-0-316-76948-0").is_ok());
        assert!(library.issue_book(crate::patron::PatronId(2), "978-0-06-112008-4").is_ok());

        let table = DeskView::history_table(library.ledger());
        let latest = table.find("978-0-06-112008-4");
        let earliest = table.find("978-0-316-76948-0");
        assert!(latest.is_some() && earliest.is_some());
        assert!(latest < earliest);
    }

    #[test]
    fn test_empty_tables_say_so() {
        let library = Library::default();
        assert_eq!(DeskView::history_table(library.ledger()), "No books are on loan.");
        assert_eq!(DeskView::pending_table(library.ledger()), "No requests are waiting.");
    }
}
