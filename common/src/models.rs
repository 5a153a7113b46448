use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::content::{overwrite, Content, ListOrder};

fn hash_link() -> String {
    "#".to_string()
}

fn blue_cyan_gradient() -> String {
    "from-blue-500/10 to-cyan-500/10".to_string()
}

// --- Project ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[cfg_attr(feature = "ts_export", derive(ts_rs::TS), ts(export))]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(default)]
    #[validate(length(min = 1, code = "required"))]
    pub title: String,
    #[serde(default)]
    #[validate(length(min = 1, code = "required"))]
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default = "hash_link")]
    pub code_link: String,
    #[serde(default = "hash_link")]
    pub demo_link: String,
    /// Icon component names, e.g. `FaReact`.
    #[serde(default)]
    pub icons: Vec<String>,
    #[serde(default = "blue_cyan_gradient")]
    pub gradient: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProjectPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub demo_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icons: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gradient: Option<String>,
}

impl Content for Project {
    type Patch = ProjectPatch;

    const COLLECTION: &'static str = "projects";
    const LABEL: &'static str = "Project";
    const ORDER: ListOrder = ListOrder::NewestFirst;

    fn apply(&mut self, patch: ProjectPatch) {
        overwrite(&mut self.title, patch.title);
        overwrite(&mut self.description, patch.description);
        overwrite(&mut self.tags, patch.tags);
        overwrite(&mut self.code_link, patch.code_link);
        overwrite(&mut self.demo_link, patch.demo_link);
        overwrite(&mut self.icons, patch.icons);
        overwrite(&mut self.gradient, patch.gradient);
    }
}

// --- Skill ---

fn frontend_category() -> String {
    "Frontend".to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[cfg_attr(feature = "ts_export", derive(ts_rs::TS), ts(export))]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    #[serde(default)]
    #[validate(length(min = 1, code = "required"))]
    pub name: String,
    #[serde(default = "frontend_category")]
    pub category: String,
    #[serde(default)]
    #[validate(length(min = 1, code = "required"))]
    pub icon: String,
    /// Brand colour as a CSS value, e.g. `#61DAFB`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SkillPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl Content for Skill {
    type Patch = SkillPatch;

    const COLLECTION: &'static str = "skills";
    const LABEL: &'static str = "Skill";
    const ORDER: ListOrder = ListOrder::Insertion;

    fn apply(&mut self, patch: SkillPatch) {
        overwrite(&mut self.name, patch.name);
        overwrite(&mut self.category, patch.category);
        overwrite(&mut self.icon, patch.icon);
        overwrite(&mut self.color, patch.color.map(Some));
    }
}

// --- Experience ---

fn briefcase_icon() -> String {
    "Briefcase".to_string()
}

fn blue_indigo_gradient() -> String {
    "from-blue-500/10 to-indigo-500/10".to_string()
}

fn blue_600_text() -> String {
    "text-blue-600".to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[cfg_attr(feature = "ts_export", derive(ts_rs::TS), ts(export))]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    /// Job title.
    #[serde(default)]
    #[validate(length(min = 1, code = "required"))]
    pub title: String,
    #[serde(default)]
    #[validate(length(min = 1, code = "required"))]
    pub company: String,
    /// Free-form period, e.g. `Aug 2025 – Present`.
    #[serde(default)]
    #[validate(length(min = 1, code = "required"))]
    pub period: String,
    #[serde(default)]
    #[validate(length(min = 1, code = "required"))]
    pub location: String,
    #[serde(default)]
    #[validate(length(min = 1, code = "required"))]
    pub description: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default = "briefcase_icon")]
    pub icon: String,
    #[serde(default = "blue_indigo_gradient")]
    pub gradient: String,
    #[serde(default = "blue_600_text")]
    pub icon_color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub certificate_link: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExperiencePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skills: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gradient: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub certificate_link: Option<String>,
}

impl Content for Experience {
    type Patch = ExperiencePatch;

    const COLLECTION: &'static str = "experience";
    const LABEL: &'static str = "Experience";
    const ORDER: ListOrder = ListOrder::NewestFirst;

    fn apply(&mut self, patch: ExperiencePatch) {
        overwrite(&mut self.title, patch.title);
        overwrite(&mut self.company, patch.company);
        overwrite(&mut self.period, patch.period);
        overwrite(&mut self.location, patch.location);
        overwrite(&mut self.description, patch.description);
        overwrite(&mut self.skills, patch.skills);
        overwrite(&mut self.icon, patch.icon);
        overwrite(&mut self.gradient, patch.gradient);
        overwrite(&mut self.icon_color, patch.icon_color);
        overwrite(&mut self.certificate_link, patch.certificate_link.map(Some));
    }
}

// --- Education ---

fn graduation_cap_icon() -> String {
    "GraduationCap".to_string()
}

fn blue_500_text() -> String {
    "text-blue-500".to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[cfg_attr(feature = "ts_export", derive(ts_rs::TS), ts(export))]
#[serde(rename_all = "camelCase")]
pub struct Education {
    #[serde(default)]
    #[validate(length(min = 1, code = "required"))]
    pub degree: String,
    #[serde(default)]
    #[validate(length(min = 1, code = "required"))]
    pub institute: String,
    #[serde(default)]
    #[validate(length(min = 1, code = "required"))]
    pub location: String,
    #[serde(default)]
    #[validate(length(min = 1, code = "required"))]
    pub year: String,
    /// Grade as displayed, e.g. `9.60 CGPA` or `88.11%`.
    #[serde(default)]
    #[validate(length(min = 1, code = "required"))]
    pub score: String,
    #[serde(default)]
    #[validate(length(min = 1, code = "required"))]
    pub description: String,
    #[serde(default = "graduation_cap_icon")]
    pub icon: String,
    #[serde(default = "blue_cyan_gradient")]
    pub gradient: String,
    #[serde(default = "blue_500_text")]
    pub icon_color: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EducationPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub degree: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub institute: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gradient: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_color: Option<String>,
}

impl Content for Education {
    type Patch = EducationPatch;

    const COLLECTION: &'static str = "education";
    const LABEL: &'static str = "Education";
    const ORDER: ListOrder = ListOrder::NewestFirst;

    fn apply(&mut self, patch: EducationPatch) {
        overwrite(&mut self.degree, patch.degree);
        overwrite(&mut self.institute, patch.institute);
        overwrite(&mut self.location, patch.location);
        overwrite(&mut self.year, patch.year);
        overwrite(&mut self.score, patch.score);
        overwrite(&mut self.description, patch.description);
        overwrite(&mut self.icon, patch.icon);
        overwrite(&mut self.gradient, patch.gradient);
        overwrite(&mut self.icon_color, patch.icon_color);
    }
}

// --- Achievement ---

fn certification_category() -> String {
    "Certification".to_string()
}

fn award_icon() -> String {
    "Award".to_string()
}

fn primary_color() -> String {
    "primary".to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[cfg_attr(feature = "ts_export", derive(ts_rs::TS), ts(export))]
#[serde(rename_all = "camelCase")]
pub struct Achievement {
    #[serde(default)]
    #[validate(length(min = 1, code = "required"))]
    pub title: String,
    #[serde(default)]
    #[validate(length(min = 1, code = "required"))]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,
    /// Certification, Competition, ...
    #[serde(default = "certification_category")]
    pub category: String,
    #[serde(default = "award_icon")]
    pub icon: String,
    /// Theme colour name, `primary` or `secondary`.
    #[serde(default = "primary_color")]
    pub color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub certificate_link: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AchievementPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub certificate_link: Option<String>,
}

impl Content for Achievement {
    type Patch = AchievementPatch;

    const COLLECTION: &'static str = "achievements";
    const LABEL: &'static str = "Achievement";
    const ORDER: ListOrder = ListOrder::Insertion;

    fn apply(&mut self, patch: AchievementPatch) {
        overwrite(&mut self.title, patch.title);
        overwrite(&mut self.description, patch.description);
        overwrite(&mut self.organization, patch.organization.map(Some));
        overwrite(&mut self.category, patch.category);
        overwrite(&mut self.icon, patch.icon);
        overwrite(&mut self.color, patch.color);
        overwrite(&mut self.certificate_link, patch.certificate_link.map(Some));
    }
}
