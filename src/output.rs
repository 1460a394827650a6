use owo_colors::OwoColorize;

pub struct FilterSummary {
    pub prefix: String,
    pub message: String,
}

impl FilterSummary {
    pub fn format(visible: usize, total: usize) -> Self {
        match (visible, total) {
            (_, 0) => Self {
                prefix: "•".yellow().to_string(),
                message: "No items in catalog".to_string(),
            },
            (0, t) => Self {
                prefix: "✗".red().to_string(),
                message: format!("No items matched ({} total)", t),
            },
            (v, t) => Self {
                prefix: "✓".green().to_string(),
                message: format!("{} of {} item(s) shown", v.green(), t),
            },
        }
    }
}
