//! PurpleShop CLI - Catalog and admin data inspection tools.
//!
//! # Usage
//!
//! ```bash
//! # List catalog products, optionally filtered and sorted
//! purple-cli catalog list --search camera --category photography --in-stock --sort price-low
//!
//! # List categories with product counts
//! purple-cli catalog categories
//!
//! # Show admin dashboard statistics for the seed records
//! purple-cli admin stats
//!
//! # Check an add-product form without saving it
//! purple-cli admin validate --name "Desk Lamp" --category Furniture --price 39.99 --stock 10 --description "LED lamp"
//! ```
//!
//! Output goes through `tracing`; set `RUST_LOG` to adjust verbosity.

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

use purple_shop_core::Category;
use purple_shop_core::admin::ProductForm;
use purple_shop_core::catalog::SortKey;

mod commands;

#[derive(Parser)]
#[command(name = "purple-cli")]
#[command(author, version, about = "PurpleShop CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Inspect the storefront catalog
    Catalog {
        #[command(subcommand)]
        action: CatalogAction,
    },
    /// Inspect the admin records
    Admin {
        #[command(subcommand)]
        action: AdminAction,
    },
}

#[derive(Subcommand)]
enum CatalogAction {
    /// List products through the product browser's filter and sort
    List {
        /// Case-insensitive text matched against name or category
        #[arg(short, long, default_value = "")]
        search: String,

        /// Only show this category
        #[arg(short, long)]
        category: Option<Category>,

        /// Hide out-of-stock products
        #[arg(long)]
        in_stock: bool,

        /// Sort key (featured, price-low, price-high, rating, name, newest)
        #[arg(long, default_value = "featured")]
        sort: SortKey,
    },
    /// List categories with product counts
    Categories,
}

#[derive(Subcommand)]
enum AdminAction {
    /// Show dashboard statistics and top products
    Stats,
    /// Validate an add-product form without saving it
    Validate {
        #[arg(long, default_value = "")]
        name: String,

        #[arg(long, default_value = "")]
        category: String,

        #[arg(long, default_value = "")]
        price: String,

        #[arg(long, default_value = "")]
        stock: String,

        #[arg(long, default_value = "")]
        description: String,
    },
}

fn main() {
    // Load .env file if present so RUST_LOG can live there
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_target(false)
        .without_time()
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), commands::CommandError> {
    match cli.command {
        Commands::Catalog { action } => match action {
            CatalogAction::List {
                search,
                category,
                in_stock,
                sort,
            } => commands::catalog::list(&search, category, in_stock, sort),
            CatalogAction::Categories => commands::catalog::categories(),
        },
        Commands::Admin { action } => match action {
            AdminAction::Stats => commands::admin::stats(),
            AdminAction::Validate {
                name,
                category,
                price,
                stock,
                description,
            } => commands::admin::validate(&ProductForm {
                name,
                category,
                price,
                stock,
                description,
            })?,
        },
    }
    Ok(())
}
