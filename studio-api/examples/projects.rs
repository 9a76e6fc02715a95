use studio_api::{Client, Request, StudioApiError};

#[tokio::main]
pub async fn main() -> Result<(), StudioApiError> {
    let client = Client::default();

    let projects = client.send(Request::projects().list()).await?.into_items();
    for project in projects {
        println!("{} ({})", project.title, project.video().provider);
    }
    Ok(())
}
