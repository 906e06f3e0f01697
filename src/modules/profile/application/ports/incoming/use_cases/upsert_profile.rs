use async_trait::async_trait;

use super::ProfileUseCaseError;
use crate::auth::application::domain::entities::UserId;
use crate::profile::domain::profile_fields::{parse_skills, present};
use crate::profile::domain::{FieldViolation, Profile, ProfileFields, SocialLinks};

//
// ──────────────────────────────────────────────────────────
// Command
// ──────────────────────────────────────────────────────────
//

/// Raw upsert input. `skills` is the comma separated form.
#[derive(Debug, Clone, Default)]
pub struct UpsertProfileCommand {
    pub company: Option<String>,
    pub website: Option<String>,
    pub location: Option<String>,
    pub bio: Option<String>,
    pub status: Option<String>,
    pub github_username: Option<String>,
    pub skills: Option<String>,
    pub youtube: Option<String>,
    pub facebook: Option<String>,
    pub twitter: Option<String>,
    pub instagram: Option<String>,
    pub linkedin: Option<String>,
}

impl UpsertProfileCommand {
    /// `status` and `skills` must be present.
    pub fn validate(&self) -> Vec<FieldViolation> {
        let mut violations = Vec::new();

        if present(self.status.clone()).is_none() {
            violations.push(FieldViolation::required("status"));
        }

        let has_skills = self
            .skills
            .as_deref()
            .map(|raw| !parse_skills(raw).is_empty())
            .unwrap_or(false);
        if !has_skills {
            violations.push(FieldViolation::required("skills"));
        }

        violations
    }

    pub fn into_fields(self) -> ProfileFields {
        ProfileFields {
            company: present(self.company),
            website: present(self.website),
            location: present(self.location),
            bio: present(self.bio),
            status: present(self.status),
            github_username: present(self.github_username),
            skills: self
                .skills
                .as_deref()
                .map(parse_skills)
                .filter(|skills| !skills.is_empty()),
            social: SocialLinks {
                youtube: present(self.youtube),
                facebook: present(self.facebook),
                twitter: present(self.twitter),
                instagram: present(self.instagram),
                linkedin: present(self.linkedin),
            },
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Use case trait
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait UpsertProfileUseCase: Send + Sync {
    async fn execute(
        &self,
        owner: UserId,
        command: UpsertProfileCommand,
    ) -> Result<Profile, ProfileUseCaseError>;
}
