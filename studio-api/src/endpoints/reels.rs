use super::ObjectId;
use crate::envelope::{Acknowledgement, ApiEnvelope};
use crate::macros::setter;
use crate::video::{self, VideoReference};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use tower_api_client::{Method, Request, RequestData};

// Common

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reel {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub thumbnail: String,
    #[serde(default)]
    pub video_link: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Reel {
    pub fn video(&self) -> VideoReference {
        video::classify(&self.video_link)
    }
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveReel {
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub thumbnail: String,
    pub video_link: String,
}

impl From<&Reel> for SaveReel {
    fn from(reel: &Reel) -> Self {
        Self {
            title: reel.title.clone(),
            subtitle: reel.subtitle.clone(),
            description: reel.description.clone(),
            thumbnail: reel.thumbnail.clone(),
            video_link: reel.video_link.clone(),
        }
    }
}

// Requests

#[derive(Default, Debug, Clone, Serialize)]
pub struct ListReels;

impl Request for ListReels {
    type Data = ();
    type Response = ReelsResponse;

    fn endpoint(&self) -> Cow<'_, str> {
        "/reels".into()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct GetReel {
    reel_id: ObjectId,
}

impl GetReel {
    pub fn new(reel_id: ObjectId) -> Self {
        Self { reel_id }
    }
}

impl Request for GetReel {
    type Data = ();
    type Response = ReelResponse;

    fn endpoint(&self) -> Cow<'_, str> {
        format!("/reels/{}", self.reel_id).into()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CreateReel {
    reel: SaveReel,
}

impl CreateReel {
    pub fn new(reel: SaveReel) -> Self {
        Self { reel }
    }

    setter!(reel.title: String);
    setter!(reel.subtitle: String);
    setter!(reel.description: String);
    setter!(reel.thumbnail: String);
    setter!(reel.video_link: String);
}

impl Request for CreateReel {
    type Data = SaveReel;
    type Response = ReelResponse;
    const METHOD: Method = Method::POST;

    fn endpoint(&self) -> Cow<'_, str> {
        "/reels".into()
    }

    fn data(&self) -> RequestData<&Self::Data> {
        RequestData::Json(&self.reel)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct UpdateReel {
    reel_id: ObjectId,
    reel: SaveReel,
}

impl UpdateReel {
    pub fn new(reel_id: ObjectId, reel: SaveReel) -> Self {
        Self { reel_id, reel }
    }
}

impl Request for UpdateReel {
    type Data = SaveReel;
    type Response = ReelResponse;
    const METHOD: Method = Method::PUT;

    fn endpoint(&self) -> Cow<'_, str> {
        format!("/reels/{}", self.reel_id).into()
    }

    fn data(&self) -> RequestData<&Self::Data> {
        RequestData::Json(&self.reel)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DeleteReel {
    reel_id: ObjectId,
}

impl DeleteReel {
    pub fn new(reel_id: ObjectId) -> Self {
        Self { reel_id }
    }
}

impl Request for DeleteReel {
    type Data = ();
    type Response = Acknowledgement;
    const METHOD: Method = Method::DELETE;

    fn endpoint(&self) -> Cow<'_, str> {
        format!("/reels/{}", self.reel_id).into()
    }
}

// Responses

pub type ReelsResponse = ApiEnvelope<Vec<Reel>>;
pub type ReelResponse = ApiEnvelope<Reel>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::video::VideoProvider;

    #[test]
    fn test_reel_wire_format() {
        let reel: Reel = serde_json::from_str(
            r#"{"_id":"r1","title":"Showreel 2024","subtitle":"VFX","description":"",
                "thumbnail":"t.jpg","videoLink":"https://youtu.be/dQw4w9WgXcQ","status":"active"}"#,
        )
        .unwrap();

        assert_eq!(reel.video().provider, VideoProvider::YouTube);
        assert_eq!(reel.video().video_id.as_deref(), Some("dQw4w9WgXcQ"));
        assert_eq!(SaveReel::from(&reel).video_link, reel.video_link);
    }

    #[test]
    fn test_create_reel_builder() {
        let request = CreateReel::new(SaveReel::default())
            .title("Showreel")
            .video_link("https://vimeo.com/1");
        let body = serde_json::to_value(&request.reel).unwrap();
        assert_eq!(body["videoLink"], "https://vimeo.com/1");
        assert_eq!(request.endpoint(), "/reels");
    }
}
