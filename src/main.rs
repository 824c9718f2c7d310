//! Stock Control - CSV-backed clothing inventory
//!
//! Thin command-line shell over the stock_control library: collects raw
//! input, invokes one operation, prints the result. All window/menu concerns
//! of earlier incarnations are gone; this shell only talks to the library.

use std::io::{BufRead, Write};

use clap::{Parser, Subcommand};
use stock_control::{
    format_item_list, AddItemInput, Session, SimilarName, StockError, StockStore,
};

/// Clothing stock control over a CSV stock file
#[derive(Parser, Debug)]
#[command(name = "stock_control")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the stock CSV file
    #[arg(short, long, default_value = "stock.csv")]
    file: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Add a new stock item
    Add {
        /// Item name
        #[arg(long)]
        name: String,
        /// Size (XS, S, M, L, XL)
        #[arg(long)]
        size: String,
        /// Price per copy
        #[arg(long)]
        price: String,
        /// Number of copies
        #[arg(long)]
        quantity: String,
        /// Skip the similar-item confirmation and always add as a new item
        #[arg(long, default_value_t = false)]
        assume_new: bool,
    },
    /// Add or sell copies of an existing item
    Adjust {
        #[arg(long)]
        name: String,
        #[arg(long)]
        size: String,
        /// "Add Copies" or "Sell Copies"
        #[arg(long)]
        operation: String,
        #[arg(long)]
        quantity: String,
    },
    /// Set a new price for an existing item
    SetPrice {
        #[arg(long)]
        name: String,
        #[arg(long)]
        size: String,
        #[arg(long)]
        price: String,
    },
    /// List all available items
    List,
    /// Search items by name (case-insensitive substring)
    Search {
        term: String,
    },
}

fn main() {
    // Initialize logger. Set RUST_LOG environment variable to control log level.
    // Examples: RUST_LOG=info, RUST_LOG=warn, RUST_LOG=stock_control=debug
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let mut session = Session::new(StockStore::new(&args.file));

    if let Err(e) = run(&mut session, args.command) {
        log::error!("Operation failed: {e}");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(session: &mut Session, command: Command) -> Result<(), StockError> {
    match command {
        Command::Add {
            name,
            size,
            price,
            quantity,
            assume_new,
        } => {
            let input = AddItemInput {
                name,
                size,
                price,
                quantity,
            };
            let confirm = |similar: &SimilarName| {
                if assume_new {
                    false
                } else {
                    prompt_yes_no(&format!(
                        "An item with a similar name '{}' and this size already exists \
                         (similarity {}). Did you mean this item? [y/N] ",
                        similar.name, similar.score
                    ))
                }
            };
            let item = session.add_item(&input, confirm)?;
            println!("Added new stock item: {} ({}).", item.name, item.size);
        }
        Command::Adjust {
            name,
            size,
            operation,
            quantity,
        } => {
            let new_quantity = session.adjust_quantity(&name, &size, &operation, &quantity)?;
            println!(
                "Updated quantity for {} ({}). New quantity: {}.",
                name, size, new_quantity
            );
        }
        Command::SetPrice { name, size, price } => {
            let new_price = session.set_price(&name, &size, &price)?;
            println!("Updated price for {} ({}) to ${}.", name, size, new_price);
        }
        Command::List => {
            let items = session.list_available()?;
            if items.is_empty() {
                println!("No available items in stock.");
            } else {
                print!("{}", format_item_list(&items));
            }
        }
        Command::Search { term } => {
            let items = session.search(&term)?;
            if items.is_empty() {
                println!("No matching items found.");
            } else {
                print!("{}", format_item_list(&items));
            }
        }
    }
    Ok(())
}

/// Asks a yes/no question on stdin; anything but y/yes counts as no.
fn prompt_yes_no(question: &str) -> bool {
    print!("{question}");
    let _ = std::io::stdout().flush();

    let mut answer = String::new();
    if std::io::stdin().lock().read_line(&mut answer).is_err() {
        return false;
    }
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}
