use super::Gate;
use anyhow::Result;
use clap::Args;
use std::sync::Arc;
use studio::site::Site;
use studio_api::endpoints::{contact::ContactSubmission, ObjectId};
use studio_api::video;

#[derive(Debug, Args)]
pub(crate) struct GalleryArgs {
    /// Only show projects of this category id
    #[arg(long)]
    category: Option<String>,
}

#[derive(Debug, Args)]
pub(crate) struct ContactArgs {
    #[arg(long)]
    name: String,

    #[arg(long)]
    email: String,

    #[arg(long)]
    phone: String,

    /// What the enquiry is about
    #[arg(long)]
    enquiry: String,

    #[arg(long)]
    message: String,
}

#[derive(Debug, Args)]
pub(crate) struct ClassifyArgs {
    url: String,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,
}

pub(crate) async fn gallery(gate: Arc<Gate>, args: GalleryArgs) -> Result<()> {
    let gallery = Site::new(gate).gallery().await?;

    for tab in gallery.tabs() {
        println!("{} ({})", tab.label, tab.count);
    }
    println!();

    let category = args.category.map(ObjectId::from);
    for project in gallery.projects(category.as_ref()) {
        let year = project.year.map(|y| y.to_string()).unwrap_or_default();
        let embed = project.video().embed_url.unwrap_or_default();
        println!("{:>4}  {}  {}", year, project.title, embed);
    }

    Ok(())
}

pub(crate) async fn contact(gate: Arc<Gate>, args: ContactArgs) -> Result<()> {
    let submission = ContactSubmission {
        name: args.name,
        email: args.email,
        phone: args.phone,
        enquiry_for: args.enquiry,
        message: args.message,
    };

    let message = Site::new(gate).submit_contact(submission).await?;
    println!("{}", message);
    Ok(())
}

pub(crate) fn classify(args: ClassifyArgs) -> Result<()> {
    let reference = video::classify(&args.url);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&reference)?);
        return Ok(());
    }

    println!("provider: {}", reference.provider);
    println!("id:       {}", reference.video_id.as_deref().unwrap_or("-"));
    println!("embed:    {}", reference.embed_url.as_deref().unwrap_or("-"));
    Ok(())
}
