use common::{
    Achievement, AchievementPatch, ChatReply, ChatRequest, ContactMessage, Content, Credentials,
    Education, EducationPatch, Experience, ExperiencePatch, Project, ProjectPatch, Skill,
    SkillPatch, StatusMessage, TokenResponse,
};
use utoipa::{
    openapi::{
        path::{HttpMethod, OperationBuilder, ParameterBuilder, ParameterIn},
        security::{HttpAuthScheme, HttpBuilder, SecurityRequirement, SecurityScheme},
        Paths, Required, ResponseBuilder,
    },
    Modify, OpenApi,
};

use crate::{auth, chat, mailer, web_server};

#[derive(OpenApi)]
#[openapi(
    paths(
        auth::register,
        auth::login,
        chat::chat,
        mailer::send_email,
        web_server::health,
    ),
    components(schemas(
        Credentials,
        TokenResponse,
        StatusMessage,
        ChatRequest,
        ChatReply,
        ContactMessage,
        Project,
        ProjectPatch,
        Skill,
        SkillPatch,
        Experience,
        ExperiencePatch,
        Education,
        EducationPatch,
        Achievement,
        AchievementPatch,
    )),
    modifiers(&BearerAuth, &ContentPaths),
    tags(
        (name = "auth", description = "Admin login"),
        (name = "content", description = "Portfolio content collections"),
        (name = "chat", description = "Portfolio assistant"),
        (name = "contact", description = "Contact form"),
    )
)]
pub struct ApiDoc;

struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

/// The content routes are generic over the collection, so their operations are
/// described here instead of with `#[utoipa::path]`.
struct ContentPaths;

impl Modify for ContentPaths {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        add_collection::<Project>(&mut openapi.paths);
        add_collection::<Skill>(&mut openapi.paths);
        add_collection::<Experience>(&mut openapi.paths);
        add_collection::<Education>(&mut openapi.paths);
        add_collection::<Achievement>(&mut openapi.paths);
    }
}

fn operation(summary: String, secured: bool) -> OperationBuilder {
    let builder = OperationBuilder::new()
        .tags(Some(vec!["content".to_string()]))
        .summary(Some(summary));
    if secured {
        builder.security(SecurityRequirement::new("bearer_auth", Vec::<String>::new()))
    } else {
        builder
    }
}

fn id_parameter() -> ParameterBuilder {
    ParameterBuilder::new()
        .name("id")
        .parameter_in(ParameterIn::Path)
        .required(Required::True)
        .description(Some("Document id"))
}

fn add_collection<T: Content>(paths: &mut Paths) {
    let collection = format!("/api/{}", T::COLLECTION);
    let item = format!("{collection}/{{id}}");
    let label = T::LABEL;

    paths.add_path_operation(
        &collection,
        vec![HttpMethod::Get],
        operation(format!("List {}", T::COLLECTION), false)
            .response("200", ResponseBuilder::new().description(format!("All {label} documents"))),
    );
    paths.add_path_operation(
        &collection,
        vec![HttpMethod::Post],
        operation(format!("Create a {label}"), true)
            .response("201", ResponseBuilder::new().description(format!("The stored {label}")))
            .response("400", ResponseBuilder::new().description("Missing required fields"))
            .response("401", ResponseBuilder::new().description("Missing or invalid token")),
    );
    paths.add_path_operation(
        &item,
        vec![HttpMethod::Put],
        operation(format!("Update a {label}"), true)
            .parameter(id_parameter())
            .response("200", ResponseBuilder::new().description(format!("The updated {label}")))
            .response("400", ResponseBuilder::new().description("Update leaves a required field empty"))
            .response("401", ResponseBuilder::new().description("Missing or invalid token"))
            .response("404", ResponseBuilder::new().description(format!("{label} not found"))),
    );
    paths.add_path_operation(
        &item,
        vec![HttpMethod::Delete],
        operation(format!("Delete a {label}"), true)
            .parameter(id_parameter())
            .response("200", ResponseBuilder::new().description(format!("{label} removed")))
            .response("401", ResponseBuilder::new().description("Missing or invalid token"))
            .response("404", ResponseBuilder::new().description(format!("{label} not found"))),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_generic_content_routes() {
        let doc = ApiDoc::openapi();
        let json = serde_json::to_value(&doc).unwrap();
        let paths = &json["paths"];

        assert!(paths["/api/projects"]["get"].is_object());
        assert!(paths["/api/projects"]["post"].is_object());
        assert!(paths["/api/skills/{id}"]["put"].is_object());
        assert!(paths["/api/achievements/{id}"]["delete"].is_object());
        assert!(paths["/api/auth/login"]["post"].is_object());
        assert!(json["components"]["securitySchemes"]["bearer_auth"].is_object());
    }
}
