/**
 * Slug Generation
 *
 * Article URLs use a slug derived from the title. Two articles may share
 * a title, so the slugified title gets an 8-hex-char random suffix; the
 * database still enforces uniqueness with a constraint on the column.
 */

use slug::slugify;
use uuid::Uuid;

/// Length of the random uniqueness suffix
const SUFFIX_LEN: usize = 8;

/// Build a URL-safe, almost-certainly-unique slug from an article title
///
/// # Example
///
/// `"How to train your dragon"` becomes something like
/// `"how-to-train-your-dragon-1b2f3c4d"`.
pub fn generate_slug(title: &str) -> String {
    let suffix = Uuid::new_v4().simple().to_string();
    format!("{}-{}", slugify(title), &suffix[..SUFFIX_LEN])
}
