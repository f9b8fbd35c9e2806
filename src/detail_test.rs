use super::*;

fn coding() -> ProjectRecord {
    ProjectRecord {
        id: "project2".into(),
        title: "Auction Website".into(),
        tagline: "A full-stack flask-based Auction website.".into(),
        description: "<p>Auctions with <em>payments</em>.</p>".into(),
        gif: "Images/Projects/AuctionPage.png".into(),
        code: "https://example.test/auction".into(),
        technologies: vec!["Python".into(), "Flask".into()],
        role: "Full Stack Developer".into(),
        date: "July 2025".into(),
        skills: "<h3>Key Features</h3><ul><li>Stripe</li></ul>".into(),
        thanks: "<p>Thanks, team.</p>".into(),
        ..ProjectRecord::default()
    }
}

fn non_coding() -> ProjectRecord {
    ProjectRecord {
        id: "ncProject2".into(),
        title: "Custom Computer".into(),
        tagline: "Built my own computer.".into(),
        skills_used: vec!["Teamwork".into(), "Research".into()],
        date: "February 2024".into(),
        ..ProjectRecord::default()
    }
}

// =============================================================================
// HEADER
// =============================================================================

#[test]
fn title_carries_owner_suffix() {
    let html = render_detail(&coding(), "Jo Example");
    assert!(html.contains("<title>Auction Website | Jo Example</title>"));
    assert!(html.contains("<h1 id=\"project-title\">Auction Website</h1>"));
    assert!(html.contains("alt=\"Auction Website Demo\""));
    assert!(html.contains("src=\"Images/Projects/AuctionPage.png\""));
}

#[test]
fn text_fields_are_escaped() {
    let record = ProjectRecord { title: "<b>Bold</b> & co".into(), ..coding() };
    let html = render_detail(&record, "A<B");
    assert!(html.contains("<title>&lt;b&gt;Bold&lt;/b&gt; &amp; co | A&lt;B</title>"));
    assert!(!html.contains("<b>Bold</b>"));
}

#[test]
fn trusted_sections_are_inserted_verbatim() {
    let html = render_detail(&coding(), "Owner");
    assert!(html.contains("<p>Auctions with <em>payments</em>.</p>"));
    assert!(html.contains("<h3>Key Features</h3><ul><li>Stripe</li></ul>"));
}

// =============================================================================
// OPTIONAL ROWS
// =============================================================================

#[test]
fn coding_record_shows_role_technologies_and_code() {
    let html = render_detail(&coding(), "Owner");
    assert!(html.contains("id=\"meta-role\""));
    assert!(html.contains("<p id=\"project-role\">Full Stack Developer</p>"));
    assert!(html.contains("<h4>Technologies</h4>"));
    assert!(html.contains("<span class=\"tag\">Python</span><span class=\"tag\">Flask</span>"));
    assert!(html.contains("id=\"source-code\""));
    assert!(html.contains("href=\"https://example.test/auction\""));
}

#[test]
fn non_coding_record_uses_skills_label_and_hides_role_and_code() {
    let html = render_detail(&non_coding(), "Owner");
    assert!(html.contains("<h4>Skills</h4>"));
    assert!(!html.contains("<h4>Technologies</h4>"));
    assert!(!html.contains("id=\"meta-role\""));
    assert!(!html.contains("id=\"source-code\""));
    assert!(html.contains("<p id=\"project-date\">February 2024</p>"));
}

#[test]
fn tag_row_hidden_without_tags() {
    let record = ProjectRecord { skills_used: Vec::new(), ..non_coding() };
    let html = render_detail(&record, "Owner");
    assert!(!html.contains("id=\"meta-technologies\""));
}

#[test]
fn placeholder_code_link_is_hidden() {
    let record = ProjectRecord { code: "#".into(), ..coding() };
    assert!(!render_detail(&record, "Owner").contains("id=\"source-code\""));
}

#[test]
fn thanks_section_only_when_present() {
    assert!(render_detail(&coding(), "Owner").contains("<div id=\"project-thanks\"><p>Thanks, team.</p></div>"));
    let record = ProjectRecord { thanks: "   ".into(), ..coding() };
    assert!(!render_detail(&record, "Owner").contains("thanks-section"));
}
