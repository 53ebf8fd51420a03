//! Inkstream CLI
//!
//! Thin wrapper around inkstream-core for command-line usage.
//!
//! ## Usage
//!
//! ```bash
//! # Log in (stores the session locally)
//! inkstream login love@example.com
//!
//! # Show the current identity and profile
//! inkstream whoami
//!
//! # List active posts
//! inkstream posts list
//!
//! # Read a post with its comments
//! inkstream posts show <post_id>
//!
//! # Log out
//! inkstream logout
//! ```

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use inkstream_core::{Client, ServiceConfig};
use tokio::io::AsyncBufReadExt;

/// Inkstream - social blogging client
#[derive(Parser)]
#[command(name = "inkstream")]
#[command(version = "0.1.0")]
#[command(about = "Inkstream - a social blogging client for the terminal")]
struct Cli {
    /// Data directory for local storage
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Remote service endpoint, overriding INKSTREAM_ENDPOINT
    #[arg(short, long)]
    endpoint: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Log in with email and password
    Login {
        /// Account email
        email: String,
        /// Password (prompted on stdin when omitted)
        password: Option<String>,
    },
    /// Terminate the current session
    Logout,
    /// Show the current identity and profile
    Whoami,
    /// Post operations
    Posts {
        #[command(subcommand)]
        command: PostsCommand,
    },
}

#[derive(Subcommand)]
enum PostsCommand {
    /// List active posts
    List,
    /// Show a post and its comments
    Show {
        /// Post document id
        id: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    let data_dir = cli.data_dir.unwrap_or_else(|| {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("inkstream")
    });

    let mut config = ServiceConfig::from_env()?;
    if let Some(endpoint) = cli.endpoint {
        config = config.with_endpoint(endpoint);
    }

    let client = Client::new(config, &data_dir).context("failed to open local storage")?;

    match cli.command {
        Command::Login { email, password } => {
            let password = match password {
                Some(password) => password,
                None => prompt_password().await?,
            };
            client.session.login(&email, &password).await?;
            let state = client.session.state();
            match state.profile {
                Some(profile) => println!("Logged in as {} (@{})", profile.name, profile.username),
                None => println!("Logged in as {}", email),
            }
        }

        Command::Logout => {
            client.session.initialize().await;
            client.session.logout().await;
            println!("Logged out");
        }

        Command::Whoami => {
            client.session.initialize().await;
            let state = client.session.state();
            if !state.is_authenticated() {
                println!("Not logged in");
                return Ok(());
            }
            if let Some(identity) = state.identity {
                println!("Identity: {} <{}>", identity.name, identity.email);
            }
            match state.profile {
                Some(profile) => {
                    println!("Profile:  @{} ({})", profile.username, profile.id);
                    if !profile.bio.is_empty() {
                        println!("Bio:      {}", profile.bio);
                    }
                }
                None => println!("Profile:  none"),
            }
        }

        Command::Posts { command } => match command {
            PostsCommand::List => {
                client.session.initialize().await;
                let posts = client.posts.list_active().await?;
                if posts.is_empty() {
                    println!("No posts");
                    return Ok(());
                }
                for post in posts {
                    let age = post
                        .created_at
                        .map(|t| t.format("%Y-%m-%d").to_string())
                        .unwrap_or_default();
                    println!("{}  {}  ({} likes)  {}", post.id, post.title, post.likes.len(), age);
                }
            }
            PostsCommand::Show { id } => {
                client.session.initialize().await;
                let Some(post) = client.posts.get(&id).await? else {
                    bail!("post {} not found", id);
                };
                println!("# {}", post.title);
                println!();
                println!("{}", post.content);
                println!();
                let comments = client.comments.list_for_post(&post.id).await?;
                println!("-- {} comment(s)", comments.len());
                for comment in comments {
                    println!("[{}] {}", comment.author_name, comment.content);
                }
            }
        },
    }

    Ok(())
}

/// Read a password from the next stdin line.
async fn prompt_password() -> Result<String> {
    println!("Password:");
    let mut lines = tokio::io::BufReader::new(tokio::io::stdin()).lines();
    let line = lines
        .next_line()
        .await?
        .context("no password provided on stdin")?;
    Ok(line.trim().to_string())
}
