//! Contact-form mail relay for Quill.
//!
//! Wraps a lettre SMTP transport and formats contact submissions into a
//! plain-text notification addressed to the site owner, with `Reply-To`
//! set to the submitter so answering works from any mail client.

use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use tracing::info;

/// Error from mail construction or delivery.
#[derive(Debug, thiserror::Error)]
pub enum MailError {
    /// An address failed to parse.
    #[error("invalid email address: {0}")]
    Address(#[from] lettre::address::AddressError),

    /// The message could not be built.
    #[error("failed to build message: {0}")]
    Message(#[from] lettre::error::Error),

    /// SMTP transport failure.
    #[error("SMTP error: {0}")]
    Transport(#[from] lettre::transport::smtp::Error),
}

/// Contact-form mail relay.
pub struct Mailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from_address: String,
    to_address: String,
}

impl Mailer {
    /// Create a relay for the given SMTP endpoint.
    ///
    /// `encryption` controls the transport mode:
    /// - `"starttls"` (default): opportunistic STARTTLS, usually port 587
    /// - `"tls"`: implicit TLS (SMTPS), usually port 465
    /// - `"none"`: unencrypted, local development only
    ///
    /// The connection itself is lazy; construction only fails when the
    /// relay host cannot be resolved into transport parameters.
    ///
    /// # Errors
    ///
    /// Returns [`MailError::Transport`] when the relay cannot be configured.
    pub fn new(
        smtp_host: &str,
        smtp_port: u16,
        username: Option<&str>,
        password: Option<&str>,
        encryption: &str,
        from_address: String,
        to_address: String,
    ) -> Result<Self, MailError> {
        let mut builder = match encryption {
            "tls" => AsyncSmtpTransport::<Tokio1Executor>::relay(smtp_host)?.port(smtp_port),
            "none" => {
                AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(smtp_host).port(smtp_port)
            }
            _ => {
                AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(smtp_host)?.port(smtp_port)
            }
        };

        if let (Some(user), Some(pass)) = (username, password) {
            builder = builder.credentials(Credentials::new(user.to_owned(), pass.to_owned()));
        }

        Ok(Self {
            transport: builder.build(),
            from_address,
            to_address,
        })
    }

    /// Relay one contact-form submission to the site owner.
    ///
    /// # Errors
    ///
    /// Returns [`MailError`] when an address is invalid or delivery fails.
    pub async fn send_contact(
        &self,
        name: &str,
        email: &str,
        message: &str,
    ) -> Result<(), MailError> {
        let body = format!("Name: {name}\nEmail: {email}\n\nMessage:\n{message}");

        let mail = Message::builder()
            .from(self.from_address.parse()?)
            .to(self.to_address.parse()?)
            .reply_to(email.parse()?)
            .subject(format!("New contact form submission from {name}"))
            .header(ContentType::TEXT_PLAIN)
            .body(body)?;

        self.transport.send(mail).await?;
        info!("Relayed contact submission from {}", email);

        Ok(())
    }
}
