use anyhow::Result;
use clap::{Parser, Subcommand};
use std::sync::Arc;
use studio::navigation::CliNavigator;
use studio_auth::{SessionGate, SessionStorage, Settings};

mod content;
mod public;
mod session;

pub(crate) type Gate = SessionGate<Box<dyn SessionStorage>, CliNavigator>;

#[derive(Debug, Parser)]
#[command(name = "studio", about = "Studio site and dashboard console", long_about = None)]
pub(crate) struct Cli {
    /// Root of the studio API, overrides the configured `api_url`
    #[arg(long, global = true, env = "STUDIO_API_URL")]
    api_url: Option<String>,

    /// Mirror log output to stderr
    #[arg(short, long, global = true)]
    pub(crate) verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    Login(session::LoginArgs),
    Logout,
    Whoami,
    ResetPassword(session::ResetPasswordArgs),
    Projects(content::ProjectsCommand),
    Categories(content::CategoriesCommand),
    Reels(content::ReelsCommand),
    Gallery(public::GalleryArgs),
    Contact(public::ContactArgs),
    Classify(public::ClassifyArgs),
}

impl Cli {
    pub(crate) async fn run(self) -> Result<()> {
        match self.command {
            // Classification needs neither configuration nor a session
            Commands::Classify(args) => public::classify(args),
            command => run_with_session(self.api_url, command).await,
        }
    }
}

async fn run_with_session(api_url: Option<String>, command: Commands) -> Result<()> {
    let mut settings = Settings::new()?;
    if let Some(api_url) = api_url {
        settings.api_url = api_url;
    }
    tracing::debug!(api_url = %settings.api_url, "Settings loaded");

    let gate = Arc::new(studio_auth::connect(&settings, CliNavigator::new()).await?);

    match command {
        Commands::Login(args) => session::login(&gate, args).await,
        Commands::Logout => session::logout(&gate),
        Commands::Whoami => session::whoami(&gate),
        Commands::ResetPassword(args) => session::reset_password(&gate, args).await,
        Commands::Projects(command) => content::projects(gate, command).await,
        Commands::Categories(command) => content::categories(gate, command).await,
        Commands::Reels(command) => content::reels(gate, command).await,
        Commands::Gallery(args) => public::gallery(gate, args).await,
        Commands::Contact(args) => public::contact(gate, args).await,
        Commands::Classify(args) => public::classify(args),
    }
}
