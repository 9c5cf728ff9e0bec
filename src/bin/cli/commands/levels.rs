use anyhow::Result;

use kana_lib::quiz::Level;

use crate::app::App;
use crate::render::terminal;
use crate::OutputFormat;

pub fn run(app: &App, format: &OutputFormat, use_color: bool) -> Result<()> {
    let engine = &app.engine;
    let catalog = engine.catalog();
    let thresholds = &engine.config().thresholds;
    let current = app.open_session().status().level;

    match format {
        OutputFormat::Json => {
            let mut output = Vec::new();
            for (idx, threshold) in thresholds.iter().enumerate() {
                let level = Level::new(idx + 1);
                let tokens: Vec<_> = catalog
                    .tokens_at(level)
                    .iter()
                    .map(|t| {
                        serde_json::json!({
                            "romaji": t.as_str(),
                            "glyph": catalog.glyph(t),
                        })
                    })
                    .collect();
                output.push(serde_json::json!({
                    "level": level,
                    "threshold": threshold,
                    "isCurrent": level == current,
                    "tokens": tokens,
                }));
            }
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            for (idx, threshold) in thresholds.iter().enumerate() {
                let level = Level::new(idx + 1);
                println!(
                    "{}",
                    terminal::render_level(catalog, level, *threshold, level == current, use_color)
                );
            }
        }
    }

    Ok(())
}
