//! JWT Pizza CLI - Order pizza and manage franchises from the terminal.
//!
//! # Usage
//!
//! ```bash
//! # Log in (the session token is kept in PIZZA_TOKEN_FILE)
//! pizza login -e d@jwt.com -p a
//!
//! # Browse and order
//! pizza menu
//! pizza order --franchise 2 --store 4 --item 1 --item 2
//! pizza verify <jwt>
//!
//! # Franchise administration
//! pizza franchise list --name Lota
//! pizza user list --all
//! pizza store create --franchise 2 --name Provo
//!
//! # API documentation
//! pizza docs --factory
//! ```
//!
//! # Commands
//!
//! - `login`, `register`, `logout`, `whoami`, `update-user` - Session
//! - `menu`, `order`, `orders`, `verify` - Ordering
//! - `franchise`, `store` - Franchise administration
//! - `user` - User administration
//! - `docs` - Endpoint listings
//!
//! Results are printed to stdout as JSON; logs go to stderr.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::sync::Arc;

use clap::{Args, Parser, Subcommand};
use jwt_pizza_client::{ClientConfig, FileTokenStore, PizzaClient, Session};
use sentry::integrations::tracing as sentry_tracing;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod error;

use error::CliError;

#[derive(Parser)]
#[command(name = "pizza")]
#[command(author, version, about = "JWT Pizza from the command line")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Log in and keep the session token
    Login {
        /// Account email address
        #[arg(short, long)]
        email: String,

        /// Account password
        #[arg(short, long)]
        password: String,
    },
    /// Create a diner account and log in
    Register {
        /// Display name
        #[arg(short, long)]
        name: String,

        /// Account email address
        #[arg(short, long)]
        email: String,

        /// Account password
        #[arg(short, long)]
        password: String,
    },
    /// Log out and forget the session token
    Logout,
    /// Show the logged-in user
    Whoami,
    /// Change the logged-in user's profile
    UpdateUser {
        /// New display name
        #[arg(short, long)]
        name: Option<String>,

        /// New email address
        #[arg(short, long)]
        email: Option<String>,

        /// New password
        #[arg(short, long)]
        password: Option<String>,
    },
    /// Show the menu
    Menu,
    /// Order pizza
    Order {
        /// Franchise to order from
        #[arg(short, long)]
        franchise: String,

        /// Store to order from
        #[arg(short, long)]
        store: String,

        /// Menu item ID; repeat for several pizzas
        #[arg(short, long = "item", required = true)]
        items: Vec<String>,
    },
    /// Show your order history
    Orders,
    /// Verify an order token with the pizza factory
    Verify {
        /// Order JWT
        jwt: String,
    },
    /// Manage franchises
    Franchise {
        #[command(subcommand)]
        action: FranchiseAction,
    },
    /// Manage stores
    Store {
        #[command(subcommand)]
        action: StoreAction,
    },
    /// Manage users (admin only)
    User {
        #[command(subcommand)]
        action: UserAction,
    },
    /// List API endpoints
    Docs {
        /// List the pizza factory's endpoints instead of the service's
        #[arg(long)]
        factory: bool,
    },
}

#[derive(Subcommand)]
enum FranchiseAction {
    /// Franchises you administer
    Mine,
    /// All franchises
    List(PageArgs),
    /// Create a franchise (admin only)
    Create {
        /// Franchise name
        #[arg(short, long)]
        name: String,

        /// Email of a franchisee to administer it; repeatable
        #[arg(short, long = "admin")]
        admins: Vec<String>,
    },
    /// Close a franchise and all its stores (admin only)
    Close {
        /// Franchise ID
        id: String,
    },
}

#[derive(Subcommand)]
enum StoreAction {
    /// Open a store
    Create {
        /// Franchise ID
        #[arg(short, long)]
        franchise: String,

        /// Store name
        #[arg(short, long)]
        name: String,
    },
    /// Close a store
    Close {
        /// Franchise ID
        #[arg(short, long)]
        franchise: String,

        /// Store ID
        #[arg(short, long)]
        store: String,
    },
}

#[derive(Subcommand)]
enum UserAction {
    /// List users
    List(PageArgs),
    /// Delete a user
    Delete {
        /// User ID
        id: String,
    },
}

/// Paging options shared by listings.
#[derive(Args)]
struct PageArgs {
    /// Zero-based page number
    #[arg(long, default_value_t = 0)]
    page: u32,

    /// Entries per page
    #[arg(long, default_value_t = 10)]
    limit: u32,

    /// Name filter (`*` matches all)
    #[arg(long, default_value = "*")]
    name: String,

    /// Keep fetching pages from `--page` on while the service reports more
    #[arg(long)]
    all: bool,
}

/// Start Sentry when `SENTRY_DSN` is set. Events flush when the guard drops.
fn init_sentry() -> Option<sentry::ClientInitGuard> {
    let dsn = std::env::var("SENTRY_DSN").ok().filter(|v| !v.is_empty())?;

    let guard = sentry::init((
        dsn.as_str(),
        sentry::ClientOptions {
            release: sentry::release_name!(),
            attach_stacktrace: true,
            ..Default::default()
        },
    ));

    Some(guard)
}

/// Errors become Sentry events; warnings and info become breadcrumbs.
fn sentry_event_filter(metadata: &tracing::Metadata<'_>) -> sentry_tracing::EventFilter {
    match *metadata.level() {
        tracing::Level::ERROR => sentry_tracing::EventFilter::Event,
        tracing::Level::WARN | tracing::Level::INFO => sentry_tracing::EventFilter::Breadcrumb,
        _ => sentry_tracing::EventFilter::Ignore,
    }
}

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();

    // Before the subscriber, so the Sentry layer has a client to report to
    let sentry_guard = init_sentry();

    // Logs go to stderr so stdout stays machine-readable
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "jwt_pizza_cli=info,jwt_pizza_client=info".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(sentry_tracing::layer().event_filter(sentry_event_filter))
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        tracing::error!("Command failed: {e}");
        // Flush queued events before exiting
        drop(sentry_guard);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let config = ClientConfig::from_env()?;
    let tokens = Arc::new(FileTokenStore::new(&config.token_path));
    let mut session = Session::new(PizzaClient::new(&config, tokens)?);

    match cli.command {
        Commands::Login { email, password } => {
            commands::auth::login(&mut session, &email, password).await?;
        }
        Commands::Register {
            name,
            email,
            password,
        } => commands::auth::register(&mut session, &name, &email, password).await?,
        Commands::Logout => commands::auth::logout(&mut session).await?,
        Commands::Whoami => commands::auth::whoami(&mut session).await?,
        Commands::UpdateUser {
            name,
            email,
            password,
        } => commands::auth::update_user(&mut session, name, email, password).await?,
        Commands::Menu => commands::orders::menu(&session).await?,
        Commands::Order {
            franchise,
            store,
            items,
        } => commands::orders::order(&mut session, &franchise, &store, &items).await?,
        Commands::Orders => commands::orders::history(&mut session).await?,
        Commands::Verify { jwt } => commands::orders::verify(&session, &jwt).await?,
        Commands::Franchise { action } => match action {
            FranchiseAction::Mine => commands::franchises::mine(&mut session).await?,
            FranchiseAction::List(page) => {
                let all = page.all;
                commands::franchises::list(&session, page.into(), all).await?;
            }
            FranchiseAction::Create { name, admins } => {
                commands::franchises::create(&mut session, &name, &admins).await?;
            }
            FranchiseAction::Close { id } => {
                commands::franchises::close(&mut session, &id).await?;
            }
        },
        Commands::Store { action } => match action {
            StoreAction::Create { franchise, name } => {
                commands::franchises::create_store(&mut session, &franchise, &name).await?;
            }
            StoreAction::Close { franchise, store } => {
                commands::franchises::close_store(&mut session, &franchise, &store).await?;
            }
        },
        Commands::User { action } => match action {
            UserAction::List(page) => {
                let all = page.all;
                commands::users::list(&mut session, page.into(), all).await?;
            }
            UserAction::Delete { id } => commands::users::delete(&mut session, &id).await?,
        },
        Commands::Docs { factory } => commands::docs::list(&session, factory).await?,
    }
    Ok(())
}

impl From<PageArgs> for jwt_pizza_core::PageRequest {
    fn from(args: PageArgs) -> Self {
        Self::new(args.limit).page(args.page).name(args.name)
    }
}
