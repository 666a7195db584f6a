//! Server-rendered pages for the portfolio site
//!
//! Pages are assembled as format! templates around the shared chrome in
//! [`page`]. Per-request UI state (query text, selected tags, current
//! photo) travels in the URL, so concurrent viewers never share state.
//! All dynamic text goes through [`escape_html`].

pub mod detail;
pub mod gallery;

use std::collections::BTreeSet;

/// Escape text for interpolation into HTML bodies and attributes.
pub(crate) fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Parse the comma-separated `tags` query parameter into a selection set.
pub(crate) fn parse_tags(raw: &str) -> BTreeSet<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(String::from)
        .collect()
}

/// Build a gallery URL carrying the given query text and tag selection.
pub(crate) fn gallery_url(query: &str, selected: &BTreeSet<String>) -> String {
    let mut params: Vec<String> = Vec::new();
    if !query.is_empty() {
        params.push(format!("q={}", urlencoding::encode(query)));
    }
    if !selected.is_empty() {
        let joined = selected.iter().cloned().collect::<Vec<_>>().join(",");
        params.push(format!("tags={}", urlencoding::encode(&joined)));
    }
    if params.is_empty() {
        "/".to_string()
    } else {
        format!("/?{}", params.join("&"))
    }
}

/// Shared page chrome: head, header navigation, footer with build info.
pub(crate) fn page(title: &str, site_name: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <link rel="stylesheet" href="/static/folio.css">
    <script src="/static/app.js" defer></script>
</head>
<body>
    <header class="site-header">
        <a class="site-name" href="/">{site_name}</a>
        <nav class="site-nav">
            <a href="/#portfolio">Portfolio</a>
            <a href="/#about">About</a>
            <a href="/#contact">Contact</a>
        </nav>
    </header>
{body}
    <footer class="site-footer">
        <p>&copy; {site_name}</p>
        <p class="build-info">folio-web v{version} [{git_hash}] built {timestamp} ({profile})</p>
    </footer>
</body>
</html>
"#,
        title = escape_html(title),
        site_name = escape_html(site_name),
        body = body,
        version = env!("CARGO_PKG_VERSION"),
        git_hash = env!("GIT_HASH"),
        timestamp = env!("BUILD_TIMESTAMP"),
        profile = env!("BUILD_PROFILE"),
    )
}
