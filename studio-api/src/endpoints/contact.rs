use crate::envelope::Acknowledgement;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use tower_api_client::{Method, Request, RequestData};

/// Enquiry sent from the public contact form.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub enquiry_for: String,
    pub message: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SubmitContact {
    submission: ContactSubmission,
}

impl SubmitContact {
    pub fn new(submission: ContactSubmission) -> Self {
        Self { submission }
    }
}

impl Request for SubmitContact {
    type Data = ContactSubmission;
    type Response = Acknowledgement;
    const METHOD: Method = Method::POST;

    fn endpoint(&self) -> Cow<'_, str> {
        "/contact".into()
    }

    fn data(&self) -> RequestData<&Self::Data> {
        RequestData::Json(&self.submission)
    }
}
