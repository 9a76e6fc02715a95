//! Admin dashboard operations. Every call goes through the session gate with
//! the signed-in user's token.

use crate::error::StudioError;
use crate::validators::{self, ProjectForm};
use chrono::{Datelike, Local};
use std::sync::Arc;
use studio_api::endpoints::{
    categories::Category,
    projects::{CategoryRef, Project},
    reels::{Reel, SaveReel},
    ObjectId,
};
use studio_api::{video, ApiEnvelope, Request};
use studio_auth::{Navigator, SessionGate, SessionStorage};

pub const UNCATEGORIZED: &str = "Uncategorized";

/// Counts shown above the project table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectStats {
    pub total: usize,
    pub this_year: usize,
    pub matching: usize,
}

#[derive(Debug, Clone, Default)]
pub struct Overview {
    pub projects: Vec<Project>,
    pub categories: Vec<Category>,
    pub reels: Vec<Reel>,
}

pub struct Dashboard<S: SessionStorage, N: Navigator> {
    gate: Arc<SessionGate<S, N>>,
}

impl<S: SessionStorage, N: Navigator> Dashboard<S, N> {
    pub fn new(gate: Arc<SessionGate<S, N>>) -> Self {
        Self { gate }
    }

    pub fn gate(&self) -> &SessionGate<S, N> {
        &self.gate
    }

    pub async fn projects(&self) -> Result<Vec<Project>, StudioError> {
        let response = self.gate.authenticated(Request::projects().list()).await?;
        Ok(items("projects", response))
    }

    pub async fn categories(&self) -> Result<Vec<Category>, StudioError> {
        let response = self.gate.authenticated(Request::categories().list()).await?;
        Ok(items("categories", response))
    }

    pub async fn reels(&self) -> Result<Vec<Reel>, StudioError> {
        let response = self.gate.authenticated(Request::reels().list()).await?;
        Ok(items("reels", response))
    }

    /// Projects, categories and reels fetched together.
    pub async fn overview(&self) -> Result<Overview, StudioError> {
        let (projects, categories, reels) =
            tokio::try_join!(self.projects(), self.categories(), self.reels())?;

        Ok(Overview {
            projects,
            categories,
            reels,
        })
    }

    /// Create a project, or update `existing` when given.
    ///
    /// Returns the stored project when the backend echoes it back.
    pub async fn save_project(
        &self,
        existing: Option<&ObjectId>,
        form: &ProjectForm,
        categories: &[Category],
    ) -> Result<Option<Project>, StudioError> {
        let payload = validators::build_project(form, categories, Local::now().year())?;

        let response = match existing {
            Some(id) => {
                tracing::info!(project_id = %id, "Updating project");
                self.gate
                    .authenticated(Request::projects().update(id.clone(), payload))
                    .await?
            }
            None => {
                tracing::info!(title = %payload.title, "Creating project");
                self.gate
                    .authenticated(Request::projects().create(payload))
                    .await?
            }
        };

        Ok(response.into_data())
    }

    pub async fn delete_project(&self, id: impl Into<ObjectId>) -> Result<(), StudioError> {
        let id = id.into();
        self.gate
            .authenticated(Request::projects().delete(id.clone()))
            .await?;
        tracing::info!(project_id = %id, "Project deleted");
        Ok(())
    }

    pub async fn save_category(
        &self,
        existing: Option<&ObjectId>,
        name: &str,
        description: &str,
    ) -> Result<Option<Category>, StudioError> {
        let payload = validators::build_category(name, description)?;

        let response = match existing {
            Some(id) => {
                self.gate
                    .authenticated(Request::categories().update(id.clone(), payload))
                    .await?
            }
            None => {
                self.gate
                    .authenticated(Request::categories().create(payload))
                    .await?
            }
        };

        Ok(response.into_data())
    }

    pub async fn delete_category(&self, id: impl Into<ObjectId>) -> Result<(), StudioError> {
        let id = id.into();
        self.gate
            .authenticated(Request::categories().delete(id.clone()))
            .await?;
        tracing::info!(category_id = %id, "Category deleted");
        Ok(())
    }

    pub async fn save_reel(
        &self,
        existing: Option<&ObjectId>,
        form: &SaveReel,
    ) -> Result<Option<Reel>, StudioError> {
        let payload = validators::build_reel(form)?;
        // Saved anyway; the public reel list skips it.
        if !video::classify(&payload.video_link).is_playable() {
            tracing::warn!(video_link = %payload.video_link, "Reel link is not a playable video");
        }

        let response = match existing {
            Some(id) => {
                self.gate
                    .authenticated(Request::reels().update(id.clone(), payload))
                    .await?
            }
            None => self.gate.authenticated(Request::reels().create(payload)).await?,
        };

        Ok(response.into_data())
    }

    pub async fn delete_reel(&self, id: impl Into<ObjectId>) -> Result<(), StudioError> {
        let id = id.into();
        self.gate
            .authenticated(Request::reels().delete(id.clone()))
            .await?;
        tracing::info!(reel_id = %id, "Reel deleted");
        Ok(())
    }
}

fn items<T>(what: &'static str, response: ApiEnvelope<Vec<T>>) -> Vec<T> {
    if let Some(reason) = response.malformed_reason() {
        tracing::warn!(resource = what, %reason, "Unexpected list response, showing nothing");
    }
    response.into_items()
}

/// Label for a project's category: the populated name, else the raw id.
pub fn category_label(project: &Project) -> &str {
    match &project.category {
        Some(CategoryRef::Populated { name, .. }) if !name.is_empty() => name,
        Some(CategoryRef::Id(id)) if !id.as_str().is_empty() => id.as_str(),
        _ => UNCATEGORIZED,
    }
}

/// Projects whose title, client or category label contains `query`, ignoring case.
pub fn search_projects<'a>(projects: &'a [Project], query: &str) -> Vec<&'a Project> {
    let query = query.to_lowercase();
    projects
        .iter()
        .filter(|p| {
            p.title.to_lowercase().contains(&query)
                || p.client.to_lowercase().contains(&query)
                || category_label(p).to_lowercase().contains(&query)
        })
        .collect()
}

pub fn project_stats(projects: &[Project], query: &str, current_year: i32) -> ProjectStats {
    ProjectStats {
        total: projects.len(),
        this_year: projects
            .iter()
            .filter(|p| p.year == Some(current_year))
            .count(),
        matching: search_projects(projects, query).len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn projects() -> Vec<Project> {
        serde_json::from_value(json!([
            {"_id": "p1", "title": "Night Chase", "client": "Nebula Films",
             "category": {"_id": "c1", "name": "CG"}, "year": 2025},
            {"_id": "p2", "title": "Deep Blue", "client": "Oceanic",
             "category": "c2", "year": 2024},
            {"_id": "p3", "title": "Untitled", "client": "Studio", "year": 2025}
        ]))
        .unwrap()
    }

    #[test]
    fn test_category_label() {
        let projects = projects();
        assert_eq!(category_label(&projects[0]), "CG");
        assert_eq!(category_label(&projects[1]), "c2");
        assert_eq!(category_label(&projects[2]), UNCATEGORIZED);
    }

    #[test]
    fn test_search_matches_title_client_and_category() {
        let projects = projects();

        let titles = |query: &str| -> Vec<String> {
            search_projects(&projects, query)
                .into_iter()
                .map(|p| p.title.clone())
                .collect()
        };

        assert_eq!(titles("night"), vec!["Night Chase"]);
        assert_eq!(titles("OCEANIC"), vec!["Deep Blue"]);
        assert_eq!(titles("cg"), vec!["Night Chase"]);
        assert_eq!(titles("uncategorized"), vec!["Untitled"]);
        assert_eq!(titles("").len(), 3);
    }

    #[test]
    fn test_project_stats() {
        let stats = project_stats(&projects(), "blue", 2025);
        assert_eq!(
            stats,
            ProjectStats {
                total: 3,
                this_year: 2,
                matching: 1,
            }
        );
    }
}
