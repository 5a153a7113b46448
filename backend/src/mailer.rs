use std::sync::Arc;

use async_trait::async_trait;
use axum::{extract::State, http::StatusCode, Json};
use axum_extra::extract::WithRejection;
use common::ContactMessage;
use lettre::{
    message::{Mailbox, MultiPart},
    transport::smtp::authentication::Credentials,
    Address, AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};
use thiserror::Error;
use validator::Validate;

use crate::{config::MailConfig, error::AppError, web_server::AppState};

pub const SENT: &str = "Email sent successfully";
pub const FAILED: &str = "Error sending email";

#[derive(Debug, Error)]
pub enum MailError {
    #[error("mail is not configured")]
    NotConfigured,

    #[error("invalid address: {0}")]
    Address(#[from] lettre::address::AddressError),

    #[error("failed to build message: {0}")]
    Build(#[from] lettre::error::Error),

    #[error("SMTP delivery failed: {0}")]
    Smtp(#[from] lettre::transport::smtp::Error),
}

/// Delivers contact form submissions to the site owner.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, message: &ContactMessage) -> Result<(), MailError>;
}

pub fn subject(message: &ContactMessage) -> String {
    format!("Portfolio Contact from {}", message.name)
}

pub fn render_text(message: &ContactMessage) -> String {
    format!(
        "Name: {}\nEmail: {}\n\nMessage:\n{}",
        message.name, message.email, message.message
    )
}

pub fn render_html(message: &ContactMessage) -> String {
    format!(
        "<h3>New Contact from Portfolio</h3>\n\
         <p><strong>Name:</strong> {}</p>\n\
         <p><strong>Email:</strong> {}</p>\n\
         <p><strong>Message:</strong></p>\n\
         <p>{}</p>",
        escape_html(&message.name),
        escape_html(&message.email),
        escape_html(&message.message).replace('\n', "<br>"),
    )
}

fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

/// Sends through an authenticated SMTP relay.
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
    inbox: Mailbox,
}

impl SmtpMailer {
    /// `Ok(None)` when no SMTP credentials are configured.
    pub fn from_config(config: &MailConfig) -> Result<Option<Self>, MailError> {
        let (Some(username), Some(password)) = (&config.username, &config.password) else {
            return Ok(None);
        };
        let inbox = config.owner_inbox.as_deref().unwrap_or(username);

        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(&config.smtp_host)?
            .credentials(Credentials::new(username.clone(), password.clone()))
            .build();

        Ok(Some(Self {
            transport,
            from: Mailbox::new(Some("Portfolio".to_string()), username.parse::<Address>()?),
            inbox: Mailbox::new(None, inbox.parse::<Address>()?),
        }))
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, message: &ContactMessage) -> Result<(), MailError> {
        let reply_to = Mailbox::new(
            Some(message.name.clone()),
            message.email.parse::<Address>()?,
        );

        let email = Message::builder()
            .from(self.from.clone())
            .reply_to(reply_to)
            .to(self.inbox.clone())
            .subject(subject(message))
            .multipart(MultiPart::alternative_plain_html(
                render_text(message),
                render_html(message),
            ))?;

        let response = self.transport.send(email).await?;
        tracing::info!("Email sent: {:?}", response.code());
        Ok(())
    }
}

/// Builds the configured mailer, or `None` (with a warning) when mail is not set up.
pub fn from_config(config: &MailConfig) -> Result<Option<Arc<dyn Mailer>>, MailError> {
    let mailer = SmtpMailer::from_config(config)?;
    if mailer.is_none() {
        tracing::warn!("Mail credentials not set; /send-email will fail until they are");
    }
    Ok(mailer.map(|m| Arc::new(m) as Arc<dyn Mailer>))
}

/// ## Send a contact form message to the site owner
#[utoipa::path(
    post,
    path = "/send-email",
    tag = "contact",
    request_body = ContactMessage,
    responses(
        (status = 200, description = "Email sent successfully", body = String, content_type = "text/plain"),
        (status = 400, description = "Missing name, message or a malformed email"),
        (status = 500, description = "Error sending email", body = String, content_type = "text/plain"),
    )
)]
pub async fn send_email(
    State(state): State<AppState>,
    WithRejection(Json(payload), _): WithRejection<Json<ContactMessage>, AppError>,
) -> Result<(StatusCode, &'static str), AppError> {
    payload.validate()?;

    let result = match &state.mailer {
        Some(mailer) => mailer.send(&payload).await,
        None => Err(MailError::NotConfigured),
    };

    match result {
        Ok(()) => Ok((StatusCode::OK, SENT)),
        Err(e) => {
            tracing::error!("Failed to send contact email: {}", e);
            Ok((StatusCode::INTERNAL_SERVER_ERROR, FAILED))
        }
    }
}
