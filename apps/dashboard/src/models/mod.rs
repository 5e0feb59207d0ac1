pub mod profile;

pub use profile::{
    EducationEntry, ExperienceEntry, PersonalInfo, ProfileData, ProfilePatch, ProfileRecord,
    ResumeInfo, SkillEntry, Stats,
};
