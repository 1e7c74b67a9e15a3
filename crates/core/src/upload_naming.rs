//! Filename scheme for uploaded bookmark images.
//!
//! Stored name is `{unix_millis}{ext}` where `ext` is the original file's
//! extension including its leading dot. Two uploads landing in the same
//! millisecond get the same name and the later one overwrites the earlier.

use std::path::Path;

use chrono::{DateTime, Utc};

/// Extension of `original` including the leading dot, or `""` if it has none.
///
/// Dot-files such as `.env` have no extension. A trailing dot yields `"."`.
///
/// # Examples
///
/// ```
/// use shelf_core::upload_naming::extension_of;
///
/// assert_eq!(extension_of("photo.png"), ".png");
/// assert_eq!(extension_of("archive.tar.gz"), ".gz");
/// assert_eq!(extension_of("README"), "");
/// assert_eq!(extension_of(".env"), "");
/// ```
pub fn extension_of(original: &str) -> String {
    Path::new(original)
        .extension()
        .map(|ext| format!(".{}", ext.to_string_lossy()))
        .unwrap_or_default()
}

/// Generate the stored filename for an upload received at `now`.
pub fn stored_filename(original: &str, now: DateTime<Utc>) -> String {
    format!("{}{}", now.timestamp_millis(), extension_of(original))
}

/// Whether `name` looks like something [`stored_filename`] produced.
pub fn is_stored_filename(name: &str) -> bool {
    let digits = name.find('.').map_or(name, |idx| &name[..idx]);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}
