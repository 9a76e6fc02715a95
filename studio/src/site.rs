//! Public site data. Nothing here sends credentials.

use crate::error::StudioError;
use crate::validators;
use itertools::Itertools;
use std::cmp::Reverse;
use std::collections::HashMap;
use std::sync::Arc;
use studio_api::endpoints::{
    categories::Category, contact::ContactSubmission, projects::Project, reels::Reel, ObjectId,
};
use studio_api::{ApiEnvelope, Request};
use studio_auth::{Navigator, SessionGate, SessionStorage};

pub const ALL_WORK: &str = "ALL WORK";
pub const CONTACT_SENT: &str = "Message sent successfully.";

/// A gallery filter tab. `category` is `None` for the all-work tab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryTab {
    pub category: Option<ObjectId>,
    pub label: String,
    pub count: usize,
}

/// Projects and categories as loaded for the work gallery.
#[derive(Debug, Clone, Default)]
pub struct Gallery {
    projects: Vec<Project>,
    categories: Vec<Category>,
}

impl Gallery {
    pub fn new(projects: Vec<Project>, categories: Vec<Category>) -> Self {
        Self {
            projects,
            categories,
        }
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// The all-work tab, then one tab per category that has projects, in
    /// category order.
    pub fn tabs(&self) -> Vec<GalleryTab> {
        let counts: HashMap<&ObjectId, usize> =
            self.projects.iter().filter_map(Project::category_id).counts();

        let all = GalleryTab {
            category: None,
            label: ALL_WORK.to_string(),
            count: self.projects.len(),
        };

        std::iter::once(all)
            .chain(self.categories.iter().filter_map(|category| {
                let count = counts.get(&category.id).copied().unwrap_or(0);
                (count > 0).then(|| GalleryTab {
                    category: Some(category.id.clone()),
                    label: category.name.to_uppercase(),
                    count,
                })
            }))
            .collect()
    }

    /// Projects under a tab, newest year first. Projects without a year sort last.
    pub fn projects(&self, category: Option<&ObjectId>) -> Vec<&Project> {
        self.projects
            .iter()
            .filter(|p| category.is_none() || p.category_id() == category)
            .sorted_by_key(|p| Reverse(p.year.unwrap_or(0)))
            .collect()
    }
}

pub struct Site<S: SessionStorage, N: Navigator> {
    gate: Arc<SessionGate<S, N>>,
}

impl<S: SessionStorage, N: Navigator> Site<S, N> {
    pub fn new(gate: Arc<SessionGate<S, N>>) -> Self {
        Self { gate }
    }

    /// Load projects and categories concurrently. Either failing fails both.
    pub async fn gallery(&self) -> Result<Gallery, StudioError> {
        let (projects, categories) = tokio::try_join!(
            self.gate.public(Request::projects().list()),
            self.gate.public(Request::categories().list()),
        )?;

        Ok(Gallery::new(projects.into_items(), categories.into_items()))
    }

    pub async fn projects_in(&self, category: impl Into<ObjectId>) -> Result<Vec<Project>, StudioError> {
        let response = self
            .gate
            .public(Request::projects().by_category(category))
            .await?;
        Ok(response.into_items())
    }

    /// Published reels whose link resolves to an embeddable video.
    pub async fn reels(&self) -> Result<Vec<Reel>, StudioError> {
        let reels = self.gate.public(Request::reels().list()).await?.into_items();
        let total = reels.len();

        let playable: Vec<Reel> = reels
            .into_iter()
            .filter(|reel| reel.video().is_playable())
            .collect();

        if playable.len() < total {
            tracing::debug!(
                skipped = total - playable.len(),
                "Skipping reels without a playable link"
            );
        }
        Ok(playable)
    }

    pub async fn reel(&self, id: impl Into<ObjectId>) -> Result<Reel, StudioError> {
        match self.gate.public(Request::reels().get(id)).await? {
            ApiEnvelope::Enveloped(reel) | ApiEnvelope::Bare(reel) => Ok(reel),
            ApiEnvelope::Malformed(reason) => {
                tracing::warn!(%reason, "Unexpected reel response");
                Err(StudioError::Malformed("reel"))
            }
        }
    }

    /// Validate and send a contact enquiry.
    pub async fn submit_contact(&self, submission: ContactSubmission) -> Result<&'static str, StudioError> {
        validators::validate_contact(&submission)?;

        self.gate
            .public(Request::contact().submit(submission))
            .await?;
        tracing::info!("Contact enquiry sent");

        Ok(CONTACT_SENT)
    }
}
