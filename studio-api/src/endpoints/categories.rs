use super::ObjectId;
use crate::envelope::{Acknowledgement, ApiEnvelope};
use crate::macros::setter;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use tower_api_client::{Method, Request, RequestData};

// Common

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaveCategory {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl SaveCategory {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
        }
    }
}

impl From<&Category> for SaveCategory {
    fn from(category: &Category) -> Self {
        Self {
            name: category.name.clone(),
            description: category.description.clone(),
        }
    }
}

// Requests

#[derive(Default, Debug, Clone, Serialize)]
pub struct ListCategories;

impl Request for ListCategories {
    type Data = ();
    type Response = CategoriesResponse;

    fn endpoint(&self) -> Cow<'_, str> {
        "/categories".into()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct GetCategory {
    category_id: ObjectId,
}

impl GetCategory {
    pub fn new(category_id: ObjectId) -> Self {
        Self { category_id }
    }
}

impl Request for GetCategory {
    type Data = ();
    type Response = CategoryResponse;

    fn endpoint(&self) -> Cow<'_, str> {
        format!("/categories/{}", self.category_id).into()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CreateCategory {
    category: SaveCategory,
}

impl CreateCategory {
    pub fn new(category: SaveCategory) -> Self {
        Self { category }
    }

    setter!(category.name: String);
    setter!(opt category.description: String);
}

impl Request for CreateCategory {
    type Data = SaveCategory;
    type Response = CategoryResponse;
    const METHOD: Method = Method::POST;

    fn endpoint(&self) -> Cow<'_, str> {
        "/categories".into()
    }

    fn data(&self) -> RequestData<&Self::Data> {
        RequestData::Json(&self.category)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct UpdateCategory {
    category_id: ObjectId,
    category: SaveCategory,
}

impl UpdateCategory {
    pub fn new(category_id: ObjectId, category: SaveCategory) -> Self {
        Self {
            category_id,
            category,
        }
    }

    setter!(category.name: String);
    setter!(opt category.description: String);
}

impl Request for UpdateCategory {
    type Data = SaveCategory;
    type Response = CategoryResponse;
    const METHOD: Method = Method::PUT;

    fn endpoint(&self) -> Cow<'_, str> {
        format!("/categories/{}", self.category_id).into()
    }

    fn data(&self) -> RequestData<&Self::Data> {
        RequestData::Json(&self.category)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DeleteCategory {
    category_id: ObjectId,
}

impl DeleteCategory {
    pub fn new(category_id: ObjectId) -> Self {
        Self { category_id }
    }
}

impl Request for DeleteCategory {
    type Data = ();
    type Response = Acknowledgement;
    const METHOD: Method = Method::DELETE;

    fn endpoint(&self) -> Cow<'_, str> {
        format!("/categories/{}", self.category_id).into()
    }
}

// Responses

pub type CategoriesResponse = ApiEnvelope<Vec<Category>>;
pub type CategoryResponse = ApiEnvelope<Category>;
