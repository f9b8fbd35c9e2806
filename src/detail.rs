//! Project detail page: one catalog record bound into a fixed page template.
//!
//! Plain-text fields are escaped. `description`, `skills` and `thanks` are
//! authored HTML and are inserted as-is. Optional rows are omitted entirely
//! rather than rendered empty.

use std::fmt::Write as _;

use carousel::render::escape_html;

use crate::catalog::ProjectRecord;

/// Render the full detail page for `record`.
#[must_use]
pub fn render_detail(record: &ProjectRecord, owner: &str) -> String {
    let title = escape_html(&record.title);
    let mut meta = String::new();

    if let Some(role) = record.role() {
        meta_row(&mut meta, "meta-role", "Role", &format!("<p id=\"project-role\">{}</p>", escape_html(role)));
    }
    meta_row(&mut meta, "meta-date", "Date", &format!("<p id=\"project-date\">{}</p>", escape_html(&record.date)));
    if let Some((label, tags)) = record.tag_row() {
        let mut spans = String::new();
        for tag in tags {
            push(&mut spans, format_args!("<span class=\"tag\">{}</span>", escape_html(tag)));
        }
        meta_row(&mut meta, "meta-technologies", label, &format!("<div class=\"meta-tags\" id=\"project-technologies\">{spans}</div>"));
    }

    let code_link = record.code_link().map_or_else(String::new, |url| {
        format!(
            "<a id=\"source-code\" class=\"project-details-btn\" href=\"{}\" target=\"_blank\" rel=\"noopener\">Source Code</a>",
            escape_html(url)
        )
    });

    let thanks = record.thanks().map_or_else(String::new, |html| {
        format!("<section id=\"thanks-section\"><h2>Acknowledgements</h2><div id=\"project-thanks\">{html}</div></section>")
    });

    format!(
        "<!DOCTYPE html>\n\
<html lang=\"en\">\n\
<head>\n\
<meta charset=\"utf-8\">\n\
<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
<title>{title} | {owner}</title>\n\
<link rel=\"stylesheet\" href=\"/css/style.css\">\n\
</head>\n\
<body class=\"project-page\">\n\
<header class=\"project-header\">\n\
<h1 id=\"project-title\">{title}</h1>\n\
<p id=\"project-tagline\">{tagline}</p>\n\
</header>\n\
<main>\n\
<div class=\"project-gif-container\"><img id=\"project-gif\" class=\"project-gif\" src=\"{gif}\" alt=\"{title} Demo\"></div>\n\
<div class=\"project-meta\">{meta}</div>\n\
<div class=\"project-links\">{code_link}</div>\n\
<section><h2>Overview</h2><div id=\"project-description\">{description}</div></section>\n\
<section><div id=\"project-skills\">{skills}</div></section>\n\
{thanks}\n\
</main>\n\
<footer><a href=\"/projects.html\">Back to projects</a></footer>\n\
</body>\n\
</html>\n",
        owner = escape_html(owner),
        tagline = escape_html(&record.tagline),
        gif = escape_html(&record.gif),
        description = record.description,
        skills = record.skills,
    )
}

fn meta_row(out: &mut String, id: &str, label: &str, body: &str) {
    push(out, format_args!("<div class=\"meta-item\" id=\"{id}\"><h4>{}</h4>{body}</div>", escape_html(label)));
}

fn push(out: &mut String, args: std::fmt::Arguments<'_>) {
    if out.write_fmt(args).is_err() {
        tracing::warn!("detail page formatting failed");
    }
}

#[cfg(test)]
#[path = "detail_test.rs"]
mod tests;
