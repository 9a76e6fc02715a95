use itertools::Itertools;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;
use std::fmt;
use studio_api::endpoints::{
    categories::{Category, SaveCategory},
    contact::ContactSubmission,
    projects::{Project, SaveProject},
    reels::SaveReel,
    ObjectId,
};

static NAME_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-zA-Z\s]+$").expect("valid regex"));
static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid regex"));
static PHONE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9+\-\s()]+$").expect("valid regex"));

pub const MIN_YEAR: i32 = 1900;
pub const MESSAGE_MIN_CHARS: usize = 10;
pub const MESSAGE_MAX_CHARS: usize = 1000;

/// Field-level validation failures, keyed by the field's wire name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors {
    errors: BTreeMap<&'static str, String>,
}

impl FormErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
        // First failure per field wins
        self.errors.entry(field).or_insert_with(|| message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.errors.iter().map(|(field, msg)| (*field, msg.as_str()))
    }

    fn into_result<T>(self, value: T) -> Result<T, FormErrors> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for FormErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.iter()
                .map(|(field, msg)| format!("{}: {}", field, msg))
                .join("; ")
        )
    }
}

impl std::error::Error for FormErrors {}

// Contact form

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Phone,
    EnquiryFor,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 5] = [
        ContactField::Name,
        ContactField::Email,
        ContactField::Phone,
        ContactField::EnquiryFor,
        ContactField::Message,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Phone => "phone",
            ContactField::EnquiryFor => "enquiryFor",
            ContactField::Message => "message",
        }
    }

    fn value<'a>(&self, submission: &'a ContactSubmission) -> &'a str {
        match self {
            ContactField::Name => &submission.name,
            ContactField::Email => &submission.email,
            ContactField::Phone => &submission.phone,
            ContactField::EnquiryFor => &submission.enquiry_for,
            ContactField::Message => &submission.message,
        }
    }
}

/// Check a single contact field, returning the message to show next to it.
pub fn validate_contact_field(field: ContactField, value: &str) -> Option<&'static str> {
    let trimmed = value.trim();

    match field {
        ContactField::Name => {
            if trimmed.is_empty() {
                return Some("Name is required");
            }
            if trimmed.chars().count() < 2 {
                return Some("Name must be at least 2 characters");
            }
            if !NAME_RE.is_match(value) {
                return Some("Name can only contain letters");
            }
        }
        ContactField::Email => {
            if trimmed.is_empty() {
                return Some("Email is required");
            }
            if !EMAIL_RE.is_match(value) {
                return Some("Please enter a valid email address");
            }
        }
        ContactField::Phone => {
            if trimmed.is_empty() {
                return Some("Phone is required");
            }
            if !PHONE_RE.is_match(value) {
                return Some("Please enter a valid phone number");
            }
            if value.chars().filter(char::is_ascii_digit).count() < 10 {
                return Some("Phone number must be at least 10 digits");
            }
        }
        ContactField::EnquiryFor => {
            if trimmed.is_empty() {
                return Some("Please specify what the enquiry is for");
            }
        }
        ContactField::Message => {
            if trimmed.is_empty() {
                return Some("Message is required");
            }
            let chars = trimmed.chars().count();
            if chars < MESSAGE_MIN_CHARS {
                return Some("Message must be at least 10 characters");
            }
            if chars > MESSAGE_MAX_CHARS {
                return Some("Message must not exceed 1000 characters");
            }
        }
    }

    None
}

/// Validate every contact field. The submission is sent as entered.
pub fn validate_contact(submission: &ContactSubmission) -> Result<(), FormErrors> {
    let mut errors = FormErrors::new();
    for field in ContactField::ALL {
        if let Some(message) = validate_contact_field(field, field.value(submission)) {
            errors.add(field.key(), message);
        }
    }
    errors.into_result(())
}

// Project form

/// Raw project form input, as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectForm {
    pub title: String,
    pub client: String,
    pub category: String,
    pub year: String,
    pub thumbnail: String,
    pub video_url: String,
    pub description: String,
    /// Comma separated.
    pub tags: String,
}

impl From<&Project> for ProjectForm {
    fn from(project: &Project) -> Self {
        Self {
            title: project.title.clone(),
            client: project.client.clone(),
            category: project
                .category_id()
                .map(|id| id.to_string())
                .unwrap_or_default(),
            year: project.year.map(|y| y.to_string()).unwrap_or_default(),
            thumbnail: project.thumbnail.clone(),
            video_url: project.video_url.clone(),
            description: project.description.clone(),
            tags: project.tags.join(", "),
        }
    }
}

/// Split comma separated tags, dropping blanks.
pub fn split_tags(tags: &str) -> Vec<String> {
    tags.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(String::from)
        .collect()
}

fn require(errors: &mut FormErrors, field: &'static str, label: &str, value: &str) -> String {
    let value = value.trim();
    if value.is_empty() {
        errors.add(field, format!("{} is required", label));
    }
    value.to_string()
}

/// Validate and build a project payload from form input.
///
/// `current_year` bounds the year field at five years ahead.
pub fn build_project(
    form: &ProjectForm,
    categories: &[Category],
    current_year: i32,
) -> Result<SaveProject, FormErrors> {
    let mut errors = FormErrors::new();

    if categories.is_empty() {
        errors.add("category", "Please create at least one category first");
        return Err(errors);
    }

    let title = require(&mut errors, "title", "Title", &form.title);
    let client = require(&mut errors, "client", "Client", &form.client);
    let category = require(&mut errors, "category", "Category", &form.category);
    if !category.is_empty() && !categories.iter().any(|c| c.id == category.as_str()) {
        errors.add("category", "Please select a valid category");
    }

    let max_year = current_year + 5;
    let year = match form.year.trim().parse::<i32>() {
        Ok(year) if (MIN_YEAR..=max_year).contains(&year) => year,
        Ok(_) => {
            errors.add(
                "year",
                format!("Year must be between {} and {}", MIN_YEAR, max_year),
            );
            0
        }
        Err(_) => {
            errors.add("year", "Year must be a number");
            0
        }
    };

    let thumbnail = require(&mut errors, "thumbnail", "Thumbnail", &form.thumbnail);
    let video_url = require(&mut errors, "videoUrl", "Video URL", &form.video_url);
    let description = require(&mut errors, "description", "Description", &form.description);

    let tags = split_tags(&form.tags);
    if tags.is_empty() {
        errors.add("tags", "At least one tag is required");
    }

    errors.into_result(SaveProject {
        title,
        client,
        category: ObjectId::new(category),
        year,
        thumbnail,
        video_url,
        description,
        tags,
    })
}

// Reel and category forms

/// Validate a reel payload; every field is required and trimmed.
pub fn build_reel(form: &SaveReel) -> Result<SaveReel, FormErrors> {
    let mut errors = FormErrors::new();

    let reel = SaveReel {
        title: require(&mut errors, "title", "Title", &form.title),
        subtitle: require(&mut errors, "subtitle", "Subtitle", &form.subtitle),
        description: require(&mut errors, "description", "Description", &form.description),
        thumbnail: require(&mut errors, "thumbnail", "Thumbnail", &form.thumbnail),
        video_link: require(&mut errors, "videoLink", "Video link", &form.video_link),
    };

    errors.into_result(reel)
}

pub fn build_category(name: &str, description: &str) -> Result<SaveCategory, FormErrors> {
    let mut errors = FormErrors::new();
    let name = require(&mut errors, "name", "Name", name);

    let description = description.trim();
    let category = SaveCategory {
        name,
        description: (!description.is_empty()).then(|| description.to_string()),
    };

    errors.into_result(category)
}
