use super::Gate;
use anyhow::Result;
use chrono::{Datelike, Local};
use clap::{Args, Subcommand};
use std::sync::Arc;
use studio::dashboard::{self, Dashboard};

#[derive(Debug, Args)]
pub(crate) struct ProjectsCommand {
    #[command(subcommand)]
    command: ProjectsSubcommand,
}

#[derive(Debug, Subcommand)]
enum ProjectsSubcommand {
    /// List projects, optionally matching a search term
    List {
        #[arg(long)]
        search: Option<String>,
    },
    Delete {
        id: String,
    },
}

#[derive(Debug, Args)]
pub(crate) struct CategoriesCommand {
    #[command(subcommand)]
    command: RecordSubcommand,
}

#[derive(Debug, Args)]
pub(crate) struct ReelsCommand {
    #[command(subcommand)]
    command: RecordSubcommand,
}

#[derive(Debug, Subcommand)]
enum RecordSubcommand {
    List,
    Delete { id: String },
}

pub(crate) async fn projects(gate: Arc<Gate>, command: ProjectsCommand) -> Result<()> {
    let dashboard = Dashboard::new(gate);

    match command.command {
        ProjectsSubcommand::List { search } => {
            let projects = dashboard.projects().await?;
            let query = search.unwrap_or_default();
            let stats = dashboard::project_stats(&projects, &query, Local::now().year());

            for project in dashboard::search_projects(&projects, &query) {
                let year = project.year.map(|y| y.to_string()).unwrap_or_default();
                println!(
                    "{}  {:>4}  {}  [{}]  {}",
                    project.id,
                    year,
                    project.title,
                    dashboard::category_label(project),
                    project.video().provider
                );
            }
            println!(
                "{} total, {} this year, {} shown",
                stats.total, stats.this_year, stats.matching
            );
        }
        ProjectsSubcommand::Delete { id } => {
            dashboard.delete_project(id.as_str()).await?;
            println!("Project {} deleted", id);
        }
    }

    Ok(())
}

pub(crate) async fn categories(gate: Arc<Gate>, command: CategoriesCommand) -> Result<()> {
    let dashboard = Dashboard::new(gate);

    match command.command {
        RecordSubcommand::List => {
            for category in dashboard.categories().await? {
                match category.description.as_deref().filter(|d| !d.is_empty()) {
                    Some(description) => {
                        println!("{}  {}  {}", category.id, category.name, description)
                    }
                    None => println!("{}  {}", category.id, category.name),
                }
            }
        }
        RecordSubcommand::Delete { id } => {
            dashboard.delete_category(id.as_str()).await?;
            println!("Category {} deleted", id);
        }
    }

    Ok(())
}

pub(crate) async fn reels(gate: Arc<Gate>, command: ReelsCommand) -> Result<()> {
    let dashboard = Dashboard::new(gate);

    match command.command {
        RecordSubcommand::List => {
            for reel in dashboard.reels().await? {
                let video = reel.video();
                let playable = if video.is_playable() { "" } else { "  (no player)" };
                println!(
                    "{}  {}  {}  {}{}",
                    reel.id, reel.status, reel.title, video.provider, playable
                );
            }
        }
        RecordSubcommand::Delete { id } => {
            dashboard.delete_reel(id.as_str()).await?;
            println!("Reel {} deleted", id);
        }
    }

    Ok(())
}
