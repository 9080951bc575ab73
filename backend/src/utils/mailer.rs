use futures::future::BoxFuture;
use futures::FutureExt;
use lettre::message::{header::ContentType, Mailbox};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use crate::config::mail_config::{MailConfig, SmtpSecurity};
use crate::handlers::email_dtos::SendEmailRequest;
use crate::utils::email_template::render_update_email;

#[derive(Debug, thiserror::Error)]
pub enum MailError {
    #[error("invalid address {address}: {reason}")]
    InvalidAddress { address: String, reason: String },
    #[error("failed to build message: {0}")]
    Build(String),
    #[error("transport error: {0}")]
    Transport(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct OutgoingEmail {
    pub to: String,
    pub subject: String,
    pub html: String,
}

/// Delivers a rendered email. The SMTP implementation is the only one
/// in production; tests swap in a mock.
#[cfg_attr(test, mockall::automock)]
pub trait Mailer: Send + Sync {
    fn send(&self, email: OutgoingEmail) -> BoxFuture<'static, Result<(), MailError>>;
}

pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
}

impl SmtpMailer {
    pub fn new(config: &MailConfig) -> Result<Self, MailError> {
        let from = format!("{} <{}>", config.from_name, config.from_address)
            .parse::<Mailbox>()
            .map_err(|e| MailError::InvalidAddress {
                address: config.from_address.clone(),
                reason: e.to_string(),
            })?;

        let builder = match config.security {
            SmtpSecurity::Tls => AsyncSmtpTransport::<Tokio1Executor>::relay(&config.smtp_host)
                .map_err(|e| MailError::Transport(e.to_string()))?,
            SmtpSecurity::StartTls => {
                AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.smtp_host)
                    .map_err(|e| MailError::Transport(e.to_string()))?
            }
            SmtpSecurity::Plain => {
                AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&config.smtp_host)
            }
        };

        let transport = builder
            .port(config.smtp_port)
            .credentials(Credentials::new(
                config.smtp_username.clone(),
                config.smtp_password.clone(),
            ))
            .build();

        Ok(SmtpMailer { transport, from })
    }

    fn build_message(&self, email: &OutgoingEmail) -> Result<Message, MailError> {
        let to = email
            .to
            .parse::<Mailbox>()
            .map_err(|e| MailError::InvalidAddress {
                address: email.to.clone(),
                reason: e.to_string(),
            })?;

        Message::builder()
            .from(self.from.clone())
            .to(to)
            .subject(email.subject.clone())
            .header(ContentType::TEXT_HTML)
            .body(email.html.clone())
            .map_err(|e| MailError::Build(e.to_string()))
    }
}

impl Mailer for SmtpMailer {
    fn send(&self, email: OutgoingEmail) -> BoxFuture<'static, Result<(), MailError>> {
        let message = self.build_message(&email);
        let transport = self.transport.clone();
        async move {
            let message = message?;
            transport
                .send(message)
                .await
                .map_err(|e| MailError::Transport(e.to_string()))?;
            Ok(())
        }
        .boxed()
    }
}

pub fn compose_update_email(request: &SendEmailRequest, year: i32) -> OutgoingEmail {
    OutgoingEmail {
        to: request.to.clone(),
        subject: request.subject.clone(),
        html: render_update_email(&request.data, year),
    }
}

/// Renders the update email for `request` and hands it to `mailer`.
/// Failures are logged here and returned to the caller unchanged.
pub async fn send_update_email(
    mailer: &dyn Mailer,
    request: &SendEmailRequest,
) -> Result<(), MailError> {
    use chrono::Datelike;

    let email = compose_update_email(request, chrono::Utc::now().year());
    match mailer.send(email).await {
        Ok(()) => {
            tracing::info!("Email sent successfully to {}", request.to);
            Ok(())
        }
        Err(e) => {
            tracing::error!("Error sending email to {}: {}", request.to, e);
            Err(e)
        }
    }
}
