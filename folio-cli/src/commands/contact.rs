//! Contact form check from the command line

use anyhow::{bail, Context, Result};
use clap::Parser;
use folio_core::contact::{ContactForm, SubmitOutcome};
use serde_json::json;
use tracing::info;

use super::Session;

#[derive(Parser, Debug)]
pub struct ContactArgs {
    /// Sender name
    #[arg(long, default_value = "")]
    pub name: String,

    /// Sender email
    #[arg(long, default_value = "")]
    pub email: String,

    /// Message body
    #[arg(long, default_value = "")]
    pub message: String,

    /// Emit the validation result as JSON
    #[arg(long)]
    pub json: bool,
}

/// Validate the submission. Prints the acknowledgment on success; otherwise
/// the error lines, and the command fails.
pub fn run_contact(args: ContactArgs, session: &Session) -> Result<()> {
    let mut form = ContactForm::new(args.name, args.email, args.message);
    let outcome = form.submit(session.locale);

    if args.json {
        let value = match &outcome {
            SubmitOutcome::Sent { acknowledgment } => json!({
                "valid": true,
                "message": acknowledgment,
            }),
            SubmitOutcome::Rejected(result) => json!({
                "valid": false,
                "failures": result.failures(),
                "errors": result.error_lines(),
            }),
        };
        let text = serde_json::to_string_pretty(&value).context("Failed to serialize result")?;
        println!("{text}");
    }

    match outcome {
        SubmitOutcome::Sent { acknowledgment } => {
            info!(locale = %session.locale, "contact form accepted");
            if !args.json {
                println!("{acknowledgment}");
            }
            Ok(())
        }
        SubmitOutcome::Rejected(result) => {
            if args.json {
                bail!("contact form rejected");
            }
            bail!("{}", result.summary());
        }
    }
}
