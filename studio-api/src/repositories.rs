use crate::endpoints::{
    ObjectId,
    categories::{
        CreateCategory, DeleteCategory, GetCategory, ListCategories, SaveCategory, UpdateCategory,
    },
    contact::{ContactSubmission, SubmitContact},
    projects::{
        CreateProject, DeleteProject, GetProject, ListProjects, ListProjectsByCategory,
        SaveProject, UpdateProject,
    },
    reels::{CreateReel, DeleteReel, GetReel, ListReels, SaveReel, UpdateReel},
};

#[derive(Default)]
pub struct ProjectRepository;

impl ProjectRepository {
    pub fn new() -> Self {
        Self
    }

    pub fn list(&self) -> ListProjects {
        ListProjects
    }

    pub fn by_category(&self, category_id: impl Into<ObjectId>) -> ListProjectsByCategory {
        ListProjectsByCategory::new(category_id.into())
    }

    pub fn get(&self, project_id: impl Into<ObjectId>) -> GetProject {
        GetProject::new(project_id.into())
    }

    pub fn create(&self, project: SaveProject) -> CreateProject {
        CreateProject::new(project)
    }

    pub fn update(&self, project_id: impl Into<ObjectId>, project: SaveProject) -> UpdateProject {
        UpdateProject::new(project_id.into(), project)
    }

    pub fn delete(&self, project_id: impl Into<ObjectId>) -> DeleteProject {
        DeleteProject::new(project_id.into())
    }
}

#[derive(Default)]
pub struct CategoryRepository;

impl CategoryRepository {
    pub fn new() -> Self {
        Self
    }

    pub fn list(&self) -> ListCategories {
        ListCategories
    }

    pub fn get(&self, category_id: impl Into<ObjectId>) -> GetCategory {
        GetCategory::new(category_id.into())
    }

    pub fn create(&self, category: SaveCategory) -> CreateCategory {
        CreateCategory::new(category)
    }

    pub fn update(
        &self,
        category_id: impl Into<ObjectId>,
        category: SaveCategory,
    ) -> UpdateCategory {
        UpdateCategory::new(category_id.into(), category)
    }

    pub fn delete(&self, category_id: impl Into<ObjectId>) -> DeleteCategory {
        DeleteCategory::new(category_id.into())
    }
}

#[derive(Default)]
pub struct ReelRepository;

impl ReelRepository {
    pub fn new() -> Self {
        Self
    }

    pub fn list(&self) -> ListReels {
        ListReels
    }

    pub fn get(&self, reel_id: impl Into<ObjectId>) -> GetReel {
        GetReel::new(reel_id.into())
    }

    pub fn create(&self, reel: SaveReel) -> CreateReel {
        CreateReel::new(reel)
    }

    pub fn update(&self, reel_id: impl Into<ObjectId>, reel: SaveReel) -> UpdateReel {
        UpdateReel::new(reel_id.into(), reel)
    }

    pub fn delete(&self, reel_id: impl Into<ObjectId>) -> DeleteReel {
        DeleteReel::new(reel_id.into())
    }
}

pub struct ContactRepository;

impl ContactRepository {
    pub fn new() -> Self {
        Self {}
    }

    pub fn submit(&self, submission: ContactSubmission) -> SubmitContact {
        SubmitContact::new(submission)
    }
}
