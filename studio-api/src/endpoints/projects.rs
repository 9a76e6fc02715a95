use super::ObjectId;
use crate::envelope::{Acknowledgement, ApiEnvelope};
use crate::macros::setter;
use crate::video::{self, VideoReference};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use tower_api_client::{Method, Request, RequestData};

// Common

/// A project's category, either as a bare id or populated by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CategoryRef {
    Populated {
        #[serde(rename = "_id")]
        id: ObjectId,
        name: String,
    },
    Id(ObjectId),
}

impl CategoryRef {
    pub fn id(&self) -> &ObjectId {
        match self {
            Self::Populated { id, .. } | Self::Id(id) => id,
        }
    }

    /// Name when populated.
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Populated { name, .. } => Some(name),
            Self::Id(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub title: String,
    #[serde(default)]
    pub client: String,
    pub category: Option<CategoryRef>,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub thumbnail: String,
    #[serde(default)]
    pub video_url: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Project {
    pub fn video(&self) -> VideoReference {
        video::classify(&self.video_url)
    }

    pub fn category_id(&self) -> Option<&ObjectId> {
        self.category.as_ref().map(CategoryRef::id)
    }
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveProject {
    pub title: String,
    pub client: String,
    pub category: ObjectId,
    pub year: i32,
    pub thumbnail: String,
    pub video_url: String,
    pub description: String,
    pub tags: Vec<String>,
}

// Requests

#[derive(Default, Debug, Clone, Serialize)]
pub struct ListProjects;

impl Request for ListProjects {
    type Data = ();
    type Response = ProjectsResponse;

    fn endpoint(&self) -> Cow<'_, str> {
        "/projects".into()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ListProjectsByCategory {
    category_id: ObjectId,
}

impl ListProjectsByCategory {
    pub fn new(category_id: ObjectId) -> Self {
        Self { category_id }
    }
}

impl Request for ListProjectsByCategory {
    type Data = ();
    type Response = ProjectsResponse;

    fn endpoint(&self) -> Cow<'_, str> {
        format!("/projects/category/{}", self.category_id).into()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct GetProject {
    project_id: ObjectId,
}

impl GetProject {
    pub fn new(project_id: ObjectId) -> Self {
        Self { project_id }
    }
}

impl Request for GetProject {
    type Data = ();
    type Response = ProjectResponse;

    fn endpoint(&self) -> Cow<'_, str> {
        format!("/projects/{}", self.project_id).into()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CreateProject {
    project: SaveProject,
}

impl CreateProject {
    pub fn new(project: SaveProject) -> Self {
        Self { project }
    }

    setter!(project.title: String);
    setter!(project.client: String);
    setter!(project.category: ObjectId);
    setter!(project.year: i32);
    setter!(project.thumbnail: String);
    setter!(project.video_url: String);
    setter!(project.description: String);
    setter!(project.tags: Vec<String>);
}

impl Request for CreateProject {
    type Data = SaveProject;
    type Response = ProjectResponse;
    const METHOD: Method = Method::POST;

    fn endpoint(&self) -> Cow<'_, str> {
        "/projects".into()
    }

    fn data(&self) -> RequestData<&Self::Data> {
        RequestData::Json(&self.project)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct UpdateProject {
    project_id: ObjectId,
    project: SaveProject,
}

impl UpdateProject {
    pub fn new(project_id: ObjectId, project: SaveProject) -> Self {
        Self {
            project_id,
            project,
        }
    }
}

impl Request for UpdateProject {
    type Data = SaveProject;
    type Response = ProjectResponse;
    const METHOD: Method = Method::PUT;

    fn endpoint(&self) -> Cow<'_, str> {
        format!("/projects/{}", self.project_id).into()
    }

    fn data(&self) -> RequestData<&Self::Data> {
        RequestData::Json(&self.project)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DeleteProject {
    project_id: ObjectId,
}

impl DeleteProject {
    pub fn new(project_id: ObjectId) -> Self {
        Self { project_id }
    }
}

impl Request for DeleteProject {
    type Data = ();
    type Response = Acknowledgement;
    const METHOD: Method = Method::DELETE;

    fn endpoint(&self) -> Cow<'_, str> {
        format!("/projects/{}", self.project_id).into()
    }
}

// Responses

pub type ProjectsResponse = ApiEnvelope<Vec<Project>>;
pub type ProjectResponse = ApiEnvelope<Project>;
