//! Terminal output for the `bongochat` binary: a spinner while the request is
//! in flight and coloured result lines.

use console::Style;
use indicatif::{ProgressBar, ProgressStyle};

use bongochat::{AiResponse, AiServiceError};

/// Spinner shown while a generation call is outstanding.
pub struct RequestProgress {
    pb: ProgressBar,
}

impl RequestProgress {
    pub fn start(model: &str, visible: bool) -> Self {
        let pb = if visible {
            ProgressBar::new_spinner()
        } else {
            ProgressBar::hidden()
        };
        let style = ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner());
        pb.set_style(style);
        pb.set_message(format!("Asking {model}..."));
        pb.enable_steady_tick(std::time::Duration::from_millis(100));
        Self { pb }
    }

    pub fn finish(&self) {
        self.pb.finish_and_clear();
    }
}

pub fn print_response(response: &AiResponse, json: bool) -> serde_json::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(response)?);
        return Ok(());
    }

    match response.error() {
        None => println!(
            "{} {}",
            Style::new().green().bold().apply_to("AI Response:"),
            response.content()
        ),
        Some(error) => println!(
            "{} {error}",
            Style::new()
                .yellow()
                .bold()
                .apply_to(format!("Service error ({}):", response.status_code()))
        ),
    }
    Ok(())
}

pub fn print_error(err: &AiServiceError) {
    eprintln!(
        "{} {}",
        Style::new().red().bold().apply_to("Error occurred:"),
        err.message()
    );
}
