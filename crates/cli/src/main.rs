//! Clementine CLI - Cart walkthrough and document validation tools.
//!
//! # Usage
//!
//! ```bash
//! # Run the scripted cart walkthrough
//! clem cart demo
//!
//! # Validate a product JSON document against the schema
//! clem product validate ./product.json
//! ```
//!
//! # Commands
//!
//! - `cart demo` - Exercise the cart store end to end with seeded products
//! - `product validate` - Check a product document's schema constraints

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "clem")]
#[command(author, version, about = "Clementine CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Exercise the cart store
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
    /// Work with product documents
    Product {
        #[command(subcommand)]
        action: ProductAction,
    },
}

#[derive(Subcommand)]
enum CartAction {
    /// Run a scripted add/increment/decrement/remove/clear walkthrough
    Demo,
}

#[derive(Subcommand)]
enum ProductAction {
    /// Validate a product JSON document
    Validate {
        /// Path to the product JSON file
        file: PathBuf,
    },
}

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(&cli);

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    match &cli.command {
        Commands::Cart { action } => match action {
            CartAction::Demo => commands::cart::demo()?,
        },
        Commands::Product { action } => match action {
            ProductAction::Validate { file } => commands::product::validate(file)?,
        },
    }
    Ok(())
}
