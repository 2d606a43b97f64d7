//! Error display for the CLI.

use colored::Colorize;

use shelfmark_client::ClientError;

/// Print an error in a user-friendly format.
pub fn print_error(err: &anyhow::Error) {
    eprintln!("{} {}", "Error:".red().bold(), err);

    // Check for specific error types and provide hints
    if let Some(client_err) = err.downcast_ref::<ClientError>() {
        match client_err {
            ClientError::Invalid(errors) => {
                for error in errors {
                    eprintln!("  {} {}", "-".dimmed(), error);
                }
                eprintln!(
                    "\n{}",
                    "Hint: fix the listed elements, then save or mint again.".yellow()
                );
            }
            ClientError::Api { status, .. } if *status == 401 => {
                eprintln!(
                    "\n{}",
                    "Hint: Run `shelfmark auth set-token <token>` to authenticate.".yellow()
                );
            }
            ClientError::Api { status, .. } if *status == 403 => {
                eprintln!(
                    "\n{}",
                    "Hint: You may not have permission for this inventory.".yellow()
                );
            }
            ClientError::Api { .. } if client_err.is_not_found() => {
                eprintln!(
                    "\n{}",
                    "Hint: This inventory has no custom identifier format yet.".yellow()
                );
            }
            ClientError::Api {
                request_id: Some(request_id),
                ..
            } => {
                eprintln!("\nRequest ID: {}", request_id);
            }
            ClientError::Network(_) => {
                eprintln!(
                    "\n{}",
                    "Hint: Check your network connection and API endpoint.".yellow()
                );
            }
            _ => {}
        }
    }
}
