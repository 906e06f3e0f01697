use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;

use super::profile_fields::{present, ProfileFields};

//
// ──────────────────────────────────────────────────────────
// Violations and errors
// ──────────────────────────────────────────────────────────
//

/// A single rejected input field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    pub field: String,
    pub message: String,
}

impl FieldViolation {
    pub fn required(field: &str) -> Self {
        Self {
            field: field.to_string(),
            message: format!("{} is required", field),
        }
    }

    pub fn invalid_date(field: &str) -> Self {
        Self {
            field: field.to_string(),
            message: format!("{} must be a date in YYYY-MM-DD format", field),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProfileError {
    #[error("no entry with id {0}")]
    EntryNotFound(Uuid),

    #[error("invalid entry ({} field(s) rejected)", .0.len())]
    Invalid(Vec<FieldViolation>),
}

//
// ──────────────────────────────────────────────────────────
// Social links
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLinks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub youtube: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facebook: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
}

impl SocialLinks {
    pub fn is_empty(&self) -> bool {
        self.youtube.is_none()
            && self.facebook.is_none()
            && self.twitter.is_none()
            && self.instagram.is_none()
            && self.linkedin.is_none()
    }
}

fn merge_present<T>(slot: &mut Option<T>, value: Option<T>) {
    if value.is_some() {
        *slot = value;
    }
}

//
// ──────────────────────────────────────────────────────────
// Sub-entries
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Experience {
    pub id: Uuid,
    pub title: String,
    pub company: String,
    pub location: Option<String>,
    pub from: NaiveDate,
    pub to: Option<NaiveDate>,
    #[serde(default)]
    pub current: bool,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Education {
    pub id: Uuid,
    pub school: String,
    pub degree: String,
    pub field: String,
    pub from: NaiveDate,
    pub to: Option<NaiveDate>,
    #[serde(default)]
    pub current: bool,
    pub description: Option<String>,
}

/// Unvalidated experience input. Dates arrive as `YYYY-MM-DD` text.
#[derive(Debug, Clone, Default)]
pub struct NewExperience {
    pub title: String,
    pub company: String,
    pub location: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
    pub current: bool,
    pub description: Option<String>,
}

/// Unvalidated education input.
#[derive(Debug, Clone, Default)]
pub struct NewEducation {
    pub school: String,
    pub degree: String,
    pub field: String,
    pub from: Option<String>,
    pub to: Option<String>,
    pub current: bool,
    pub description: Option<String>,
}

trait Entry {
    fn id(&self) -> Uuid;
}

impl Entry for Experience {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Entry for Education {
    fn id(&self) -> Uuid {
        self.id
    }
}

fn require_text(field: &str, value: &str, violations: &mut Vec<FieldViolation>) {
    if value.trim().is_empty() {
        violations.push(FieldViolation::required(field));
    }
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}

fn require_date(
    field: &str,
    value: Option<&str>,
    violations: &mut Vec<FieldViolation>,
) -> Option<NaiveDate> {
    match value.map(str::trim).filter(|v| !v.is_empty()) {
        None => {
            violations.push(FieldViolation::required(field));
            None
        }
        Some(raw) => {
            let parsed = parse_date(raw);
            if parsed.is_none() {
                violations.push(FieldViolation::invalid_date(field));
            }
            parsed
        }
    }
}

fn optional_date(
    field: &str,
    value: Option<&str>,
    violations: &mut Vec<FieldViolation>,
) -> Option<NaiveDate> {
    let raw = value.map(str::trim).filter(|v| !v.is_empty())?;
    let parsed = parse_date(raw);
    if parsed.is_none() {
        violations.push(FieldViolation::invalid_date(field));
    }
    parsed
}

type CheckedDates = (NaiveDate, Option<NaiveDate>);

impl NewExperience {
    pub fn validate(&self) -> Vec<FieldViolation> {
        self.check().err().unwrap_or_default()
    }

    fn check(&self) -> Result<CheckedDates, Vec<FieldViolation>> {
        let mut violations = Vec::new();
        require_text("title", &self.title, &mut violations);
        require_text("company", &self.company, &mut violations);
        let from = require_date("from", self.from.as_deref(), &mut violations);
        let to = optional_date("to", self.to.as_deref(), &mut violations);

        match from {
            Some(from) if violations.is_empty() => Ok((from, to)),
            _ => Err(violations),
        }
    }

    fn into_experience(self, id: Uuid) -> Result<Experience, ProfileError> {
        let (from, to) = self.check().map_err(ProfileError::Invalid)?;
        Ok(Experience {
            id,
            title: self.title,
            company: self.company,
            location: present(self.location),
            from,
            to,
            current: self.current,
            description: present(self.description),
        })
    }
}

impl NewEducation {
    pub fn validate(&self) -> Vec<FieldViolation> {
        self.check().err().unwrap_or_default()
    }

    fn check(&self) -> Result<CheckedDates, Vec<FieldViolation>> {
        let mut violations = Vec::new();
        require_text("school", &self.school, &mut violations);
        require_text("degree", &self.degree, &mut violations);
        require_text("field", &self.field, &mut violations);
        let from = require_date("from", self.from.as_deref(), &mut violations);
        let to = optional_date("to", self.to.as_deref(), &mut violations);

        match from {
            Some(from) if violations.is_empty() => Ok((from, to)),
            _ => Err(violations),
        }
    }

    fn into_education(self, id: Uuid) -> Result<Education, ProfileError> {
        let (from, to) = self.check().map_err(ProfileError::Invalid)?;
        Ok(Education {
            id,
            school: self.school,
            degree: self.degree,
            field: self.field,
            from,
            to,
            current: self.current,
            description: present(self.description),
        })
    }
}

//
// ──────────────────────────────────────────────────────────
// Profile aggregate
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub id: Uuid,
    pub owner: UserId,
    pub company: Option<String>,
    pub website: Option<String>,
    pub location: Option<String>,
    pub bio: Option<String>,
    pub status: Option<String>,
    pub github_username: Option<String>,
    pub skills: Vec<String>,
    pub social: SocialLinks,
    /// Most recently added first.
    pub experience: Vec<Experience>,
    /// Most recently added first.
    pub education: Vec<Education>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Profile {
    pub fn new(owner: UserId) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            owner,
            company: None,
            website: None,
            location: None,
            bio: None,
            status: None,
            github_username: None,
            skills: Vec::new(),
            social: SocialLinks::default(),
            experience: Vec::new(),
            education: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Copies the present fields over the stored ones. Absent fields keep
    /// their previous values; sub-entries are never touched here. Any social
    /// link in `fields` replaces the whole stored `social` record.
    pub fn apply_fields(&mut self, fields: ProfileFields) {
        merge_present(&mut self.company, fields.company);
        merge_present(&mut self.website, fields.website);
        merge_present(&mut self.location, fields.location);
        merge_present(&mut self.bio, fields.bio);
        merge_present(&mut self.status, fields.status);
        merge_present(&mut self.github_username, fields.github_username);
        if let Some(skills) = fields.skills {
            self.skills = skills;
        }
        if !fields.social.is_empty() {
            self.social = fields.social;
        }
        self.touch();
    }

    pub fn add_experience(&mut self, new: NewExperience) -> Result<&Experience, ProfileError> {
        let entry = new.into_experience(fresh_id(&self.experience))?;
        self.experience.insert(0, entry);
        self.touch();
        Ok(&self.experience[0])
    }

    pub fn remove_experience(&mut self, id: Uuid) -> Result<Experience, ProfileError> {
        let removed = remove_entry(&mut self.experience, id)?;
        self.touch();
        Ok(removed)
    }

    pub fn add_education(&mut self, new: NewEducation) -> Result<&Education, ProfileError> {
        let entry = new.into_education(fresh_id(&self.education))?;
        self.education.insert(0, entry);
        self.touch();
        Ok(&self.education[0])
    }

    pub fn remove_education(&mut self, id: Uuid) -> Result<Education, ProfileError> {
        let removed = remove_entry(&mut self.education, id)?;
        self.touch();
        Ok(removed)
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

fn fresh_id<T: Entry>(entries: &[T]) -> Uuid {
    loop {
        let id = Uuid::new_v4();
        if entries.iter().all(|e| e.id() != id) {
            return id;
        }
    }
}

fn remove_entry<T: Entry>(entries: &mut Vec<T>, id: Uuid) -> Result<T, ProfileError> {
    let position = entries
        .iter()
        .position(|e| e.id() == id)
        .ok_or(ProfileError::EntryNotFound(id))?;
    Ok(entries.remove(position))
}
