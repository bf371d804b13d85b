use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use model::entities::user::Role;
use sea_orm::{ActiveEnum, Iterable};

pub mod commands;

use crate::config::{AdminSeed, ServeSettings};
use commands::{create_user, init_database, serve};

#[derive(Parser)]
#[command(name = "furniture-crm")]
#[command(about = "Furniture workshop order book: web server and administration tools")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the web server
    Serve {
        /// Database URL
        ///
        /// Examples:
        ///   SQLite file: sqlite://furniture.db?mode=rwc
        ///   SQLite in memory: sqlite::memory:
        #[arg(short, long, env = "DATABASE_URL", default_value = "sqlite://furniture.db?mode=rwc")]
        database_url: String,

        /// Bind address for the web server
        ///
        /// Format: IP:PORT (e.g., 0.0.0.0:3000, 127.0.0.1:8080)
        #[arg(short, long, env = "BIND_ADDRESS", default_value = "0.0.0.0:3000")]
        bind_address: String,

        /// Drop and recreate every table on start-up
        ///
        /// On by default: the order book is a demo store and does not survive a
        /// restart. Pass `--ephemeral false` to keep data and only apply pending
        /// migrations.
        #[arg(long, env = "EPHEMERAL", default_value_t = true, action = ArgAction::Set)]
        ephemeral: bool,

        /// Username of an ADMIN account created at start-up if missing
        #[arg(long, env = "ADMIN_USERNAME", requires = "admin_password")]
        admin_username: Option<String>,

        /// Password of the start-up ADMIN account
        #[arg(long, env = "ADMIN_PASSWORD", hide_env_values = true, requires = "admin_username")]
        admin_password: Option<String>,
    },
    /// Initialize the database using migrations
    InitDb {
        /// Database URL
        #[arg(short, long, env = "DATABASE_URL")]
        database_url: String,
    },
    /// Create a staff account that can sign in to the back office
    ///
    /// Only useful against a persistent database: an ephemeral server wipes
    /// all users when it starts.
    CreateUser {
        /// Database URL
        #[arg(short, long, env = "DATABASE_URL")]
        database_url: String,

        #[arg(short, long)]
        username: String,

        #[arg(short, long)]
        password: String,

        /// One of ADMIN, MANAGER, WORKER
        #[arg(short, long, default_value = "WORKER", value_parser = parse_role)]
        role: Role,
    },
}

/// Case-insensitive role label parser for the command line.
fn parse_role(raw: &str) -> Result<Role, String> {
    Role::iter()
        .find(|role| role.to_value().eq_ignore_ascii_case(raw))
        .ok_or_else(|| format!("unknown role '{}', expected ADMIN, MANAGER or WORKER", raw))
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command {
            Commands::Serve {
                database_url,
                bind_address,
                ephemeral,
                admin_username,
                admin_password,
            } => {
                let admin = admin_username
                    .zip(admin_password)
                    .map(|(username, password)| AdminSeed { username, password });
                let settings = ServeSettings {
                    database_url,
                    bind_address,
                    ephemeral,
                    admin,
                };
                serve(&settings).await?;
            }
            Commands::InitDb { database_url } => {
                init_database(&database_url).await?;
            }
            Commands::CreateUser {
                database_url,
                username,
                password,
                role,
            } => {
                create_user(&database_url, &username, &password, role).await?;
            }
        }
        Ok(())
    }
}
