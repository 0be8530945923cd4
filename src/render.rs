use colored::Colorize;

pub const CARD_TITLE: &str = "Chart Interpretation:";

/// Bordered card for embedding in a host page. The interpretation is
/// escaped, so model output cannot inject markup.
pub fn render_html_card(interpretation: &str) -> String {
    format!(
        concat!(
            "<div style=\"border: 1px solid #ccc; padding: 10px; border-radius: 5px;\">\n",
            "    <h4>{}</h4>\n",
            "    <p>{}</p>\n",
            "</div>\n"
        ),
        CARD_TITLE,
        html_escape::encode_safe(interpretation)
    )
}

pub fn render_terminal(interpretation: &str) -> String {
    format!("{}\n{}", CARD_TITLE.bold().magenta(), interpretation)
}

pub fn render_error(message: &str) -> String {
    format!("{} {}", "Failed to get interpretation:".bold().red(), message)
}
