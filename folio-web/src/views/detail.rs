//! Photo detail page with lightbox and neighbor paging
//!
//! GET /photo/:id. Previous/next adjacency comes from the full catalog
//! ordering; the embedded script turns the rendered prev/next ids into
//! keyboard navigation.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use folio_common::model::Photo;
use folio_common::nav;

use super::{escape_html, page};
use crate::AppState;

/// Number of photos in the "More Photos" strip
const RELATED_COUNT: usize = 6;

/// GET /photo/:id
pub async fn detail_page(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let photographer_name = state.catalog.photographer().name.clone();

    let Some(photo) = state.catalog.photo(&id) else {
        let body = r#"    <main class="not-found">
        <h2>Photo not found</h2>
        <p>The photo you are looking for does not exist.</p>
        <a class="button" href="/">Back to Portfolio</a>
    </main>"#;
        let html = page("Photo not found", &photographer_name, body);
        return (StatusCode::NOT_FOUND, Html(html)).into_response();
    };

    let (previous, next) = nav::neighbors(state.catalog.photos(), &id);

    let body = format!(
        r#"    <main>
        <div class="detail">
            <a class="back-link" href="/">&larr; Back to Portfolio</a>
{pager}
            <article class="detail-card">
                <img id="photo-hero" src="{src}" alt="{alt}" title="Click to open lightbox">
                <div class="detail-body">
                    <h1>{title}</h1>
                    <p class="description">{description}</p>
{tags}
{meta}
{tech}
                </div>
            </article>
{related}
        </div>
        <div id="lightbox" class="lightbox" hidden>
            <img src="{src}" alt="{alt}">
        </div>
    </main>"#,
        pager = pager(previous, next),
        src = escape_html(&photo.image_url),
        alt = escape_html(&photo.title),
        title = escape_html(&photo.title),
        description = escape_html(&photo.description),
        tags = tag_section(photo),
        meta = meta_grid(photo),
        tech = tech_details(photo),
        related = related_strip(state.catalog.photos(), &id),
    );

    let html = page(
        &format!("{} - {}", photo.title, photographer_name),
        &photographer_name,
        &body,
    );
    Html(html).into_response()
}

/// Previous/next links. The data attributes drive keyboard paging in
/// app.js; a missing attribute disables that direction.
fn pager(previous: Option<&Photo>, next: Option<&Photo>) -> String {
    let prev_attr = previous
        .map(|p| format!(r#" data-prev="/photo/{}""#, escape_html(&p.id)))
        .unwrap_or_default();
    let next_attr = next
        .map(|p| format!(r#" data-next="/photo/{}""#, escape_html(&p.id)))
        .unwrap_or_default();

    let prev_link = previous
        .map(|p| {
            format!(
                r#"                <a class="pager-link" href="/photo/{id}">&larr; {title}</a>
"#,
                id = escape_html(&p.id),
                title = escape_html(&p.title),
            )
        })
        .unwrap_or_default();
    let next_link = next
        .map(|p| {
            format!(
                r#"                <a class="pager-link pager-next" href="/photo/{id}">{title} &rarr;</a>
"#,
                id = escape_html(&p.id),
                title = escape_html(&p.title),
            )
        })
        .unwrap_or_default();

    format!(
        r#"            <nav class="pager"{prev_attr}{next_attr}>
{prev_link}{next_link}            </nav>"#
    )
}

fn tag_section(photo: &Photo) -> String {
    if photo.tags.is_empty() {
        return String::new();
    }

    let mut badges = String::new();
    for tag in &photo.tags {
        badges.push_str(&format!(
            r#"                        <span class="badge">{}</span>
"#,
            escape_html(tag)
        ));
    }

    format!(
        r#"                    <div class="detail-tags">
                        <h4>Tags</h4>
{badges}                    </div>"#
    )
}

fn meta_grid(photo: &Photo) -> String {
    format!(
        r#"                    <dl class="meta-grid">
                        <div><dt>Category</dt><dd>{category}</dd></div>
                        <div><dt>Date</dt><dd>{date}</dd></div>
                        <div><dt>Location</dt><dd>{location}</dd></div>
                        <div><dt>Camera</dt><dd>{camera}</dd></div>
                    </dl>"#,
        category = escape_html(&photo.category),
        date = escape_html(&photo.date),
        location = escape_html(&photo.location),
        camera = escape_html(&photo.camera),
    )
}

/// Technical details grid. Absent fields are left out entirely; when no
/// field is present the whole section disappears.
fn tech_details(photo: &Photo) -> String {
    let fields = [
        ("Lens", photo.lens.as_deref()),
        ("ISO", photo.iso.as_deref()),
        ("Aperture", photo.aperture.as_deref()),
        ("Shutter Speed", photo.shutter_speed.as_deref()),
        ("Focal Length", photo.focal_length.as_deref()),
    ];

    let mut rows = String::new();
    for (label, value) in fields {
        if let Some(value) = value {
            rows.push_str(&format!(
                r#"                        <div><dt>{label}</dt><dd>{value}</dd></div>
"#,
                value = escape_html(value),
            ));
        }
    }

    if rows.is_empty() {
        return String::new();
    }

    format!(
        r#"                    <div class="tech-details">
                        <h4>Technical Details</h4>
                        <dl class="meta-grid">
{rows}                        </dl>
                    </div>"#
    )
}

fn related_strip(photos: &[Photo], current_id: &str) -> String {
    let mut tiles = String::new();
    for photo in photos
        .iter()
        .filter(|p| p.id != current_id)
        .take(RELATED_COUNT)
    {
        tiles.push_str(&format!(
            r#"                <a class="related-tile" href="/photo/{id}">
                    <img src="{src}" alt="{alt}" loading="lazy">
                    <span>{title}</span>
                </a>
"#,
            id = escape_html(&photo.id),
            src = escape_html(&photo.image_url),
            alt = escape_html(&photo.title),
            title = escape_html(&photo.title),
        ));
    }

    if tiles.is_empty() {
        return String::new();
    }

    format!(
        r#"            <section class="related">
                <h3>More Photos</h3>
                <div class="related-strip">
{tiles}                </div>
            </section>"#
    )
}
