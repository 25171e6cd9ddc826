//! # Contact Subcommand
//!
//! `folio contact --name N --email E --message M`

use std::io::Write;

use clap::Args;
use folio_core::{ContactField, PortfolioApi};
use folio_state::{ContactFormController, SubmitOutcome};

/// Arguments for the contact subcommand.
#[derive(Args, Debug)]
pub struct ContactArgs {
    /// Sender name.
    #[arg(long)]
    pub name: String,

    /// Sender email address.
    #[arg(long)]
    pub email: String,

    /// Message body.
    #[arg(long)]
    pub message: String,
}

/// Submit the contact form and print the banner.
///
/// Returns an error when the submission is not attempted or not accepted,
/// so the process exits non-zero.
pub async fn run<A: PortfolioApi>(
    args: &ContactArgs,
    api: A,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let controller = ContactFormController::new(api);
    controller.update_field(ContactField::Name, args.name.as_str());
    controller.update_field(ContactField::Email, args.email.as_str());
    controller.update_field(ContactField::Message, args.message.as_str());

    match controller.submit().await {
        SubmitOutcome::Succeeded(text) => {
            writeln!(out, "{text}")?;
            Ok(())
        }
        SubmitOutcome::Failed(text) => anyhow::bail!(text),
        SubmitOutcome::Incomplete(missing) => {
            let names: Vec<String> = missing.iter().map(ToString::to_string).collect();
            anyhow::bail!("missing required fields: {}", names.join(", "))
        }
        SubmitOutcome::Ignored => anyhow::bail!("a submission is already in progress"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::{ApiError, ContactForm, ContactReply, Project};

    struct FixedApi(Result<ContactReply, ApiError>);

    impl PortfolioApi for FixedApi {
        async fn fetch_projects(&self) -> Result<Vec<Project>, ApiError> {
            Ok(Vec::new())
        }

        async fn send_contact_message(&self, _: &ContactForm) -> Result<ContactReply, ApiError> {
            self.0.clone()
        }
    }

    fn ada() -> ContactArgs {
        ContactArgs {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            message: "Hi".into(),
        }
    }

    #[tokio::test]
    async fn prints_server_reply() {
        let mut buf = Vec::new();
        run(&ada(), FixedApi(Ok(ContactReply::with_message("Thanks!"))), &mut buf)
            .await
            .unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "Thanks!\n");
    }

    #[tokio::test]
    async fn failure_is_an_error() {
        let mut buf = Vec::new();
        let err = run(&ada(), FixedApi(Err(ApiError::SendMessage)), &mut buf)
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Failed to send message");
        assert!(buf.is_empty());
    }

    #[tokio::test]
    async fn empty_field_is_reported_without_sending() {
        let mut args = ada();
        args.email.clear();
        let err = run(&args, FixedApi(Ok(ContactReply::default())), &mut Vec::new())
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "missing required fields: email");
    }
}
