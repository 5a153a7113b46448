pub mod api;
pub mod content;
pub mod models;

pub use api::{ChatReply, ChatRequest, ContactMessage, Credentials, StatusMessage, TokenResponse};
pub use content::{Content, Document, ListOrder};
pub use models::{
    Achievement, AchievementPatch, Education, EducationPatch, Experience, ExperiencePatch, Project,
    ProjectPatch, Skill, SkillPatch,
};
