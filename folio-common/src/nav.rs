//! Lightbox neighbor navigation
//!
//! Adjacency is defined by whatever ordering the caller passes in - the
//! full catalog or a filtered subsequence - so paging follows what the
//! viewer is actually looking at.

use crate::model::Photo;

/// Previous and next photos around `current_id` in the given ordering.
///
/// Returns `(None, None)` when the id is not present; the navigation UI
/// simply disables both directions. Either side is `None` at the ends.
pub fn neighbors<'a>(
    photos: &'a [Photo],
    current_id: &str,
) -> (Option<&'a Photo>, Option<&'a Photo>) {
    let Some(index) = photos.iter().position(|p| p.id == current_id) else {
        return (None, None);
    };
    let previous = if index > 0 { photos.get(index - 1) } else { None };
    let next = photos.get(index + 1);
    (previous, next)
}
