use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use axum_extra::extract::WithRejection;
use common::{
    Achievement, ChatReply, ChatRequest, Document, Education, Experience, Project, Skill,
};
use serde::Serialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::{
    completion::CompletionError,
    error::AppError,
    store::{Store, StoreError},
    web_server::AppState,
};

pub const MISSING_KEY_REPLY: &str = "API Key (OPENROUTER_API_KEY) is missing on the server.";
pub const FALLBACK_REPLY: &str =
    "Sorry, I'm having trouble connecting to the brain right now. Please try again later.";

#[derive(Debug, Error)]
pub enum ChatError {
    #[error("no completion API key configured")]
    MissingApiKey,

    #[error(transparent)]
    Invalid(#[from] ValidationErrors),

    #[error("failed to load chat context: {0}")]
    Store(#[from] StoreError),

    #[error("failed to encode chat context: {0}")]
    Encode(#[from] serde_json::Error),

    #[error(transparent)]
    Completion(#[from] CompletionError),
}

impl IntoResponse for ChatError {
    fn into_response(self) -> Response {
        let reply = match self {
            ChatError::MissingApiKey => {
                tracing::error!("Chat request received but no completion API key is configured");
                MISSING_KEY_REPLY
            }
            ChatError::Invalid(errors) => return AppError::ValidationError(errors).into_response(),
            other => {
                tracing::error!("Chat failed: {}", other);
                FALLBACK_REPLY
            }
        };

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ChatReply {
                reply: reply.to_string(),
            }),
        )
            .into_response()
    }
}

/// Everything the assistant may talk about.
pub struct ChatContext {
    pub projects: Vec<Document<Project>>,
    pub skills: Vec<Document<Skill>>,
    pub experience: Vec<Document<Experience>>,
    pub education: Vec<Document<Education>>,
    pub achievements: Vec<Document<Achievement>>,
}

impl ChatContext {
    pub async fn load(store: &Store) -> Result<Self, StoreError> {
        let (projects, skills, experience, education, achievements) = tokio::try_join!(
            store.list::<Project>(),
            store.list::<Skill>(),
            store.list::<Experience>(),
            store.list::<Education>(),
            store.list::<Achievement>(),
        )?;

        Ok(Self {
            projects,
            skills,
            experience,
            education,
            achievements,
        })
    }
}

// Projections of each collection down to what the prompt needs.

#[derive(Serialize)]
struct ProjectFacts<'a> {
    title: &'a str,
    description: &'a str,
    tags: &'a [String],
}

#[derive(Serialize)]
struct SkillFacts<'a> {
    name: &'a str,
    category: &'a str,
}

#[derive(Serialize)]
struct ExperienceFacts<'a> {
    title: &'a str,
    company: &'a str,
    period: &'a str,
    description: &'a str,
}

#[derive(Serialize)]
struct EducationFacts<'a> {
    degree: &'a str,
    institute: &'a str,
    year: &'a str,
    score: &'a str,
}

#[derive(Serialize)]
struct AchievementFacts<'a> {
    title: &'a str,
    description: &'a str,
}

/// Builds the system prompt that grounds the assistant in the stored content.
pub fn build_system_prompt(owner: &str, context: &ChatContext) -> Result<String, serde_json::Error> {
    let skills = serde_json::to_string(
        &context
            .skills
            .iter()
            .map(|d| SkillFacts {
                name: &d.fields.name,
                category: &d.fields.category,
            })
            .collect::<Vec<_>>(),
    )?;
    let experience = serde_json::to_string(
        &context
            .experience
            .iter()
            .map(|d| ExperienceFacts {
                title: &d.fields.title,
                company: &d.fields.company,
                period: &d.fields.period,
                description: &d.fields.description,
            })
            .collect::<Vec<_>>(),
    )?;
    let projects = serde_json::to_string(
        &context
            .projects
            .iter()
            .map(|d| ProjectFacts {
                title: &d.fields.title,
                description: &d.fields.description,
                tags: &d.fields.tags,
            })
            .collect::<Vec<_>>(),
    )?;
    let education = serde_json::to_string(
        &context
            .education
            .iter()
            .map(|d| EducationFacts {
                degree: &d.fields.degree,
                institute: &d.fields.institute,
                year: &d.fields.year,
                score: &d.fields.score,
            })
            .collect::<Vec<_>>(),
    )?;
    let achievements = serde_json::to_string(
        &context
            .achievements
            .iter()
            .map(|d| AchievementFacts {
                title: &d.fields.title,
                description: &d.fields.description,
            })
            .collect::<Vec<_>>(),
    )?;

    Ok(format!(
        "You are an AI assistant for {owner}'s Portfolio website.\n\
         Your role is to answer questions about {owner} based on the following data.\n\
         Be polite, professional, and helpful. Answer in the first person (as if you are {owner}'s digital assistant).\n\
         \n\
         **Skills:** {skills}\n\
         **Experience:** {experience}\n\
         **Projects:** {projects}\n\
         **Education:** {education}\n\
         **Achievements:** {achievements}\n\
         \n\
         Rules:\n\
         - If the user asks something not in the data, say you don't have that information.\n\
         - Keep answers concise.\n\
         - Encourage them to use the Contact form for business inquiries.\n"
    ))
}

/// ## Ask the portfolio assistant
#[utoipa::path(
    post,
    path = "/api/chat",
    tag = "chat",
    request_body = ChatRequest,
    responses(
        (status = 200, description = "Assistant reply", body = ChatReply),
        (status = 400, description = "Empty message"),
        (status = 500, description = "Missing API key or provider failure", body = ChatReply),
    )
)]
pub async fn chat(
    State(state): State<AppState>,
    WithRejection(Json(payload), _): WithRejection<Json<ChatRequest>, AppError>,
) -> Result<Json<ChatReply>, ChatError> {
    let api_key = state
        .completions
        .api_key()
        .ok_or(ChatError::MissingApiKey)?;
    payload.validate()?;

    let context = ChatContext::load(&state.store).await?;
    let system_prompt = build_system_prompt(&state.completions.config().owner_name, &context)?;

    let reply = state
        .completions
        .complete(api_key, &system_prompt, &payload.message)
        .await?;

    Ok(Json(ChatReply { reply }))
}
