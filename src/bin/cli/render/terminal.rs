use kana_lib::quiz::{Catalog, Level, ScoreStatus};

/// ANSI color codes
#[allow(dead_code)]
pub struct Color;

#[allow(dead_code)]
impl Color {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const MAGENTA: &str = "\x1b[35m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GRAY: &str = "\x1b[90m";
}

fn paint(text: &str, color: &str, use_color: bool) -> String {
    if use_color {
        format!("{}{}{}", color, text, Color::RESET)
    } else {
        text.to_string()
    }
}

/// Text progress bar, `width` cells wide
pub fn progress_bar(percent: f64, width: usize) -> String {
    let filled = ((percent.clamp(0.0, 100.0) / 100.0) * width as f64).round() as usize;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(width - filled))
}

/// Render the score summary shown by `status` and `reset`
pub fn render_status(status: &ScoreStatus, use_color: bool) -> String {
    let score_color = if status.score > 0 { Color::GREEN } else { Color::RESET };
    let mut lines = vec![
        format!("Points: {}", paint(&status.score.to_string(), score_color, use_color)),
        format!("Penalty per mistake: {} points", status.penalty_preview),
    ];

    let mut level_line = format!("Level: {} of {}", status.level, status.max_level);
    if status.mixed_mode {
        level_line.push(' ');
        level_line.push_str(&paint("(Mixed mode)", Color::MAGENTA, use_color));
    }
    lines.push(level_line);

    lines.push(format!(
        "{} {:.0}%",
        paint(&progress_bar(status.progress_percent, 30), Color::CYAN, use_color),
        status.progress_percent
    ));

    lines.join("\n")
}

/// Render one catalog level: header plus `romaji glyph` pairs
pub fn render_level(catalog: &Catalog, level: Level, threshold: u32, current: bool, use_color: bool) -> String {
    let marker = if current { "* " } else { "  " };
    let header = format!("{}Level {} (from {} points)", marker, level, threshold);
    let header = if current {
        paint(&header, Color::BOLD, use_color)
    } else {
        header
    };

    let tokens = catalog
        .tokens_at(level)
        .iter()
        .map(|t| format!("{} {}", t, catalog.glyph(t).unwrap_or("?")))
        .collect::<Vec<_>>()
        .join("  ");

    format!("{}\n    {}", header, paint(&tokens, Color::DIM, use_color))
}
