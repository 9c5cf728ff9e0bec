use anyhow::{Context, Result};

use crate::app::App;
use crate::render::terminal;
use crate::OutputFormat;

pub fn run(app: &App, format: &OutputFormat, use_color: bool) -> Result<()> {
    let mut session = app.open_session();
    let previous = session.score();
    session.reset_score().context("Failed to save score")?;
    let status = session.status();

    match format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "previousScore": previous,
                "status": status,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            println!("Score reset (was {}).", previous);
            println!("{}", terminal::render_status(&status, use_color));
        }
    }

    Ok(())
}
