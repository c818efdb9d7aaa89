use std::{
    io::{self, BufRead, Write},
    path::PathBuf,
};

use circulation_desk::{
    CirculationError, DeskView, Library, PatronId, SeedConfig, telemetry,
};
use clap::Parser;
use colored::Colorize;

/// Console circulation desk for a single library
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// JSON file with the books and patrons to start with
    #[arg(long)]
    seed: Option<PathBuf>,

    /// Raise log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

/// Menu entries as shown to the operator
const MENU: &str = "\nLibrary Management System
1. Display Books
2. Add Book
3. Remove Book
4. Issue Book
5. Return Book
6. Request Book
7. Process Book Requests
8. Add Patron
9. Show Loans and Requests
0. Exit";

/// Line-oriented console the menu reads from
struct Console<R> {
    /// Source of operator input
    input: R,
}

impl<R: BufRead> Console<R> {
    /// Print `label` and read one trimmed line; `None` on end of input
    fn prompt(&mut self, label: &str) -> Option<String> {
        print!("{label}");
        if io::stdout().flush().is_err() {
            return None;
        }
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(line.trim().to_string()),
        }
    }

    /// Prompt until a patron ID parses; `None` on end of input
    fn prompt_patron(&mut self) -> Option<PatronId> {
        loop {
            let raw = self.prompt("Enter patron ID: ")?;
            match raw.parse::<u32>() {
                Ok(id) => return Some(PatronId(id)),
                Err(_) => println!("{}", "Patron ID must be a non-negative number.".red()),
            }
        }
    }
}

/// Print a failure the way the desk phrases it
fn report_error(err: &CirculationError) {
    println!("{}", format!("Error: {err}.").red());
}

/// Print a success line
fn report_ok(message: &str) {
    println!("{}", message.green());
}

/// Run one menu choice; returns `None` when input ran out mid-prompt
fn dispatch<R: BufRead>(library: &mut Library, console: &mut Console<R>, choice: u32) -> Option<()> {
    match choice {
        1 => print!("{}", DeskView::catalog_table(library.catalog())),
        2 => {
            println!("Enter book details:");
            let title = console.prompt("Title: ")?;
            let author = console.prompt("Author: ")?;
            let isbn = console.prompt("ISBN: ")?;
            let book = library.add_book(&title, &author, &isbn);
            report_ok(&format!("Book with ISBN {} added to the library.", book.isbn));
        }
        3 => {
            let isbn = console.prompt("Enter ISBN of the book to remove: ")?;
            match library.remove_book(&isbn) {
                Ok(book) => {
                    report_ok(&format!("Book with ISBN {} removed from the library.", book.isbn));
                }
                Err(err) => report_error(&err),
            }
        }
        4 => {
            let patron = console.prompt_patron()?;
            let isbn = console.prompt("Enter ISBN of the book to issue: ")?;
            match library.issue_book(patron, &isbn) {
                Ok(issued) => report_ok(&format!(
                    "Book with ISBN {} issued to patron ID {}.",
                    issued.isbn, issued.patron
                )),
                Err(err) => report_error(&err),
            }
        }
        5 => {
            let patron = console.prompt_patron()?;
            let isbn = console.prompt("Enter ISBN of the book to return: ")?;
            match library.return_book(patron, &isbn) {
                Ok(returned) => report_ok(&format!(
                    "Book with ISBN {} returned by patron ID {}.",
                    returned.record.book.isbn, returned.patron
                )),
                Err(err) => report_error(&err),
            }
        }
        6 => {
            let patron = console.prompt_patron()?;
            let isbn = console.prompt("Enter ISBN of the requested book: ")?;
            match library.request_book(patron, &isbn) {
                Ok(requested) => report_ok(&format!(
                    "Book with ISBN {} requested by patron ID {}.",
                    requested.isbn, requested.patron
                )),
                Err(CirculationError::NotAvailable { isbn }) => println!(
                    "{}",
                    format!("Book with ISBN {isbn} is either available or not found in the library.")
                        .red()
                ),
                Err(err) => report_error(&err),
            }
        }
        7 => {
            let fulfilled = library.process_requests();
            if fulfilled.is_empty() {
                println!("No requests could be fulfilled.");
            }
            for item in fulfilled {
                report_ok(&format!(
                    "Book with ISBN {} is now available. Fulfilling request.",
                    item.record.book.isbn
                ));
            }
        }
        8 => {
            let name = console.prompt("Name: ")?;
            let id = console.prompt_patron()?;
            let patron = library.add_patron(&name, id);
            report_ok(&format!("Patron {} registered with ID {}.", patron.name, patron.id));
        }
        9 => {
            println!("{}", "Loans (most recent first):".bold());
            println!("{}", DeskView::history_table(library.ledger()));
            println!("{}", "Requests (oldest first):".bold());
            println!("{}", DeskView::pending_table(library.ledger()));
            println!("{}", "Patrons:".bold());
            print!("{}", DeskView::roster_table(library.roster()));
        }
        _ => println!("{}", "Invalid choice. Please enter a valid option.".yellow()),
    }
    Some(())
}

fn main() {
    let args = Args::parse();

    if args.no_color {
        colored::control::set_override(false);
    }
    telemetry::init(args.verbose, !args.no_color);

    let seed = match args.seed.as_deref().map(SeedConfig::from_file).transpose() {
        Ok(seed) => seed.unwrap_or_default(),
        Err(err) => {
            tracing::error!(error = %err, "could not load seed, starting with the default catalog");
            SeedConfig::default()
        }
    };
    let mut library = Library::from_seed(&seed).with_standard_observers();
    tracing::info!(
        books = library.catalog().len(),
        patrons = library.roster().len(),
        "circulation desk ready"
    );

    let stdin = io::stdin();
    let mut console = Console { input: stdin.lock() };

    loop {
        println!("{MENU}");
        let Some(raw) = console.prompt("Enter your choice: ") else {
            break;
        };
        let Ok(choice) = raw.parse::<u32>() else {
            println!("{}", "Invalid choice. Please enter a valid option.".yellow());
            continue;
        };
        if choice == 0 {
            println!("{}", "Goodbye.".green().bold());
            break;
        }
        if dispatch(&mut library, &mut console, choice).is_none() {
            break;
        }
    }
}
