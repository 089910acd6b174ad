//! File-extension handling for rendition file names.
//!
//! Extensions are always compared lower-cased; a rendition without an
//! extension gets the empty string and never matches an extension filter.

/// File extensions the engine treats as bitmap image types.
///
/// Only requests whose effective extension set touches one of these (or
/// which carry a fixed dimension) enter the size-matching paths.
pub const IMAGE_EXTENSIONS: &[&str] = &["gif", "jpg", "jpeg", "png", "webp"];

/// Reserved file-name prefix for store-generated asset thumbnails.
///
/// Renditions named `thumbnail.<...>` are excluded from resolution unless the
/// request opts in via [`RenditionRequest::with_thumbnails`](crate::RenditionRequest::with_thumbnails).
pub const THUMBNAIL_NAME_PREFIX: &str = "thumbnail";

/// Lower-cased extension of `file_name`, or `""` when it has none.
pub fn extension_of(file_name: &str) -> String {
    file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default()
}

/// True when `ext` names a bitmap image type (case-insensitive).
pub fn is_image_extension(ext: &str) -> bool {
    IMAGE_EXTENSIONS.iter().any(|e| e.eq_ignore_ascii_case(ext))
}

/// True when `file_name` uses the reserved thumbnail naming scheme.
pub fn is_thumbnail_name(file_name: &str) -> bool {
    file_name
        .strip_prefix(THUMBNAIL_NAME_PREFIX)
        .is_some_and(|rest| rest.starts_with('.'))
}

#[cfg(test)]
#[path = "../../tests/unit/media/extension.rs"]
mod tests;
