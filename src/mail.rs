use crate::config::MailSettings;
use crate::export::{render_document, DocumentFormat};
use crate::summary::{MailBody, Summary, SummaryRenderer};
use lettre::message::header::ContentType;
use lettre::message::{Attachment, Mailbox, MultiPart, SinglePart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DeliveryError {
    #[error("invalid address {address:?}: {reason}")]
    InvalidAddress { address: String, reason: String },
    #[error("could not build document: {0}")]
    Document(#[from] anyhow::Error),
    #[error("could not build email: {0}")]
    Build(String),
    #[error("SMTP relay error: {0}")]
    Transport(#[from] lettre::transport::smtp::Error),
}

/// Destination du récapitulatif par mail.
pub trait Mailer {
    fn deliver(&self, to: &str, summary: &Summary, format: DocumentFormat) -> Result<(), DeliveryError>;
}

/// Envoi via un relais SMTP (hôte, port, identifiants : configuration).
pub struct SmtpMailer {
    from: Mailbox,
    transport: SmtpTransport,
}

impl SmtpMailer {
    pub fn new(settings: &MailSettings) -> Result<Self, DeliveryError> {
        let from = parse_mailbox(&settings.from)?;
        let mut builder = SmtpTransport::relay(&settings.host)?.port(settings.port);
        if let (Some(user), Some(pass)) = (&settings.username, &settings.password) {
            builder = builder.credentials(Credentials::new(user.clone(), pass.clone()));
        }
        Ok(Self {
            from,
            transport: builder.build(),
        })
    }
}

impl Mailer for SmtpMailer {
    fn deliver(&self, to: &str, summary: &Summary, format: DocumentFormat) -> Result<(), DeliveryError> {
        let message = build_message(&self.from, to, summary, format)?;
        self.transport.send(&message)?;
        tracing::info!(to, reference = %summary.reference, "summary emailed");
        Ok(())
    }
}

/// Construit le mail : corps texte + document en pièce jointe.
pub fn build_message(
    from: &Mailbox,
    to: &str,
    summary: &Summary,
    format: DocumentFormat,
) -> Result<Message, DeliveryError> {
    let to = parse_mailbox(to)?;
    let document = render_document(summary, format)?;
    let content_type =
        ContentType::parse(format.mime_type()).map_err(|e| DeliveryError::Build(e.to_string()))?;

    Message::builder()
        .from(from.clone())
        .to(to)
        .subject(format!(
            "Last working day: {}",
            summary.last_working_day.format("%Y-%m-%d")
        ))
        .multipart(
            MultiPart::mixed()
                .singlepart(SinglePart::plain(MailBody.render(summary)))
                .singlepart(Attachment::new(format.file_name()).body(document, content_type)),
        )
        .map_err(|e| DeliveryError::Build(e.to_string()))
}

fn parse_mailbox(raw: &str) -> Result<Mailbox, DeliveryError> {
    raw.trim()
        .parse::<Mailbox>()
        .map_err(|e| DeliveryError::InvalidAddress {
            address: raw.to_string(),
            reason: e.to_string(),
        })
}
