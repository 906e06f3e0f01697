pub mod entities;
pub mod profile_fields;

pub use entities::{
    Education, Experience, FieldViolation, NewEducation, NewExperience, Profile, ProfileError,
    SocialLinks,
};
pub use profile_fields::ProfileFields;
