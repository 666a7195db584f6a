//! Gallery page: searchable photo grid plus about/contact sections
//!
//! GET / with optional `q` (free text) and `tags` (comma-separated
//! selection). Filtering runs server-side over the catalog; every tag
//! badge links to the URL produced by toggling itself.

use std::collections::BTreeSet;

use axum::{
    extract::{Query, State},
    response::Html,
};
use folio_common::model::{Photo, PhotographerInfo};
use folio_common::search;
use serde::Deserialize;

use super::{escape_html, gallery_url, page, parse_tags};
use crate::AppState;

/// Number of vocabulary tags shown as "popular"
const POPULAR_TAG_COUNT: usize = 8;

/// Number of tags previewed on a grid tile before the "+n" marker
const TILE_TAG_PREVIEW: usize = 3;

/// Gallery query state
#[derive(Debug, Deserialize)]
pub struct GalleryParams {
    /// Free-text query over title and description
    #[serde(default)]
    pub q: String,

    /// Comma-separated selected tags
    #[serde(default)]
    pub tags: String,
}

/// GET /?q=...&tags=a,b
pub async fn gallery_page(
    State(state): State<AppState>,
    Query(params): Query<GalleryParams>,
) -> Html<String> {
    let photos = state.catalog.photos();
    let photographer = state.catalog.photographer();
    let selected = parse_tags(&params.tags);
    let visible = search::filter(photos, &params.q, &selected);
    let vocabulary = search::vocabulary(photos);
    let popular = &vocabulary[..vocabulary.len().min(POPULAR_TAG_COUNT)];

    let body = format!(
        r#"    <main>
{hero}
        <section id="portfolio" class="portfolio">
            <div class="section-heading">
                <h3>Portfolio</h3>
                <p>Latest work and featured photography</p>
            </div>
{search}
{count}
{grid}
        </section>
{about}
{contact}
    </main>"#,
        hero = hero_section(),
        search = search_section(&params.q, popular, &selected),
        count = results_count(visible.len(), photos.len()),
        grid = grid_section(&visible),
        about = about_section(photographer),
        contact = contact_section(photographer),
    );

    Html(page(
        &format!("{} - Photography", photographer.name),
        &photographer.name,
        &body,
    ))
}

fn hero_section() -> String {
    r##"        <section class="hero">
            <h2>Capturing memories,<br>One shot at a time.</h2>
            <p>A curated collection of photography that explores the intersection of light, emotion, and a unique experience.</p>
            <a class="button" href="#portfolio">View Portfolio</a>
        </section>"##
        .to_string()
}

fn search_section(query: &str, popular: &[String], selected: &BTreeSet<String>) -> String {
    let mut badges = String::new();
    for tag in popular {
        let toggled = search::toggle_tag(selected, tag);
        let class = if selected.contains(tag) {
            "badge badge-selected"
        } else {
            "badge"
        };
        badges.push_str(&format!(
            r#"                    <a class="{class}" href="{href}">{label}</a>
"#,
            href = escape_html(&gallery_url(query, &toggled)),
            label = escape_html(tag),
        ));
    }

    let hidden_tags = if selected.is_empty() {
        String::new()
    } else {
        let joined = selected.iter().cloned().collect::<Vec<_>>().join(",");
        format!(
            r#"                    <input type="hidden" name="tags" value="{}">
"#,
            escape_html(&joined)
        )
    };

    let active = active_filters(query, selected);

    format!(
        r#"            <div class="search">
                <form class="search-form" method="get" action="/">
                    <input type="search" name="q" value="{query}" placeholder="Search photos by title or description...">
{hidden_tags}                    <button type="submit">Search</button>
                </form>
                <p class="tags-label">Popular Tags:</p>
                <div class="tag-list">
{badges}                </div>
{active}            </div>"#,
        query = escape_html(query),
    )
}

fn active_filters(query: &str, selected: &BTreeSet<String>) -> String {
    if query.is_empty() && selected.is_empty() {
        return String::new();
    }

    let mut items = String::new();
    if !query.is_empty() {
        items.push_str(&format!(
            r#"                        <span class="badge badge-outline">Search: &quot;{}&quot;</span>
"#,
            escape_html(query)
        ));
    }
    for tag in selected {
        items.push_str(&format!(
            r#"                        <span class="badge badge-outline">{}</span>
"#,
            escape_html(tag)
        ));
    }

    format!(
        r#"                <div class="active-filters">
                    <div class="active-filters-list">
                        <span>Active filters:</span>
{items}                    </div>
                    <a class="clear-all" href="/">Clear all</a>
                </div>
"#,
    )
}

fn results_count(visible: usize, total: usize) -> String {
    let text = if visible == total {
        format!("Showing all {total} photos")
    } else {
        format!("Found {visible} of {total} photos")
    };
    format!(
        r#"            <p class="results-count">{text}</p>"#
    )
}

fn grid_section(visible: &[&Photo]) -> String {
    if visible.is_empty() {
        return r#"            <div class="no-results">
                <p>No photos found matching your search.</p>
                <p class="hint">Try different keywords or clear your filters.</p>
            </div>"#
            .to_string();
    }

    let mut tiles = String::new();
    for photo in visible.iter().copied() {
        tiles.push_str(&grid_tile(photo));
    }

    format!(
        r#"            <div class="photo-grid">
{tiles}            </div>"#
    )
}

fn grid_tile(photo: &Photo) -> String {
    let mut chips = String::new();
    for tag in photo.tags.iter().take(TILE_TAG_PREVIEW) {
        chips.push_str(&format!(
            r#"<span class="chip">{}</span>"#,
            escape_html(tag)
        ));
    }
    if photo.tags.len() > TILE_TAG_PREVIEW {
        chips.push_str(&format!(
            r#"<span class="chip">+{}</span>"#,
            photo.tags.len() - TILE_TAG_PREVIEW
        ));
    }

    format!(
        r#"                <a class="tile" href="/photo/{id}">
                    <div class="tile-frame" style="aspect-ratio: {ratio};">
                        <img src="{src}" alt="{alt}" loading="lazy">
                        <div class="tile-overlay">
                            <h4>{title}</h4>
                            <p>{category}</p>
                            <div class="tile-tags">{chips}</div>
                        </div>
                    </div>
                </a>
"#,
        id = escape_html(&photo.id),
        ratio = photo.aspect_ratio.css_ratio(),
        src = escape_html(&photo.image_url),
        alt = escape_html(&photo.title),
        title = escape_html(&photo.title),
        category = escape_html(&photo.category),
    )
}

fn about_section(photographer: &PhotographerInfo) -> String {
    let mut specialties = String::new();
    for specialty in &photographer.specialties {
        specialties.push_str(&format!(
            r#"                <span class="badge">{}</span>
"#,
            escape_html(specialty)
        ));
    }

    format!(
        r#"        <section id="about" class="about">
            <h3>About Me</h3>
            <p>{bio}</p>
            <div class="specialties">
{specialties}            </div>
        </section>"#,
        bio = escape_html(&photographer.bio),
    )
}

fn contact_section(photographer: &PhotographerInfo) -> String {
    let phone = match &photographer.phone {
        Some(phone) => format!(
            r#"                <div class="contact-item">
                    <h4>Phone</h4>
                    <p>{}</p>
                </div>
"#,
            escape_html(phone)
        ),
        None => String::new(),
    };

    format!(
        r#"        <section id="contact" class="contact">
            <h3>Get In Touch</h3>
            <div class="contact-grid">
                <div class="contact-item">
                    <h4>Email</h4>
                    <p><a href="mailto:{email}">{email}</a></p>
                </div>
                <div class="contact-item">
                    <h4>Location</h4>
                    <p>{location}</p>
                </div>
{phone}            </div>
        </section>"#,
        email = escape_html(&photographer.email),
        location = escape_html(&photographer.location),
    )
}
