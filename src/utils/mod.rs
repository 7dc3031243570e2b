pub mod color;
pub mod errors;
pub mod format;
pub mod table;

pub use color::{parse_hex, parse_rgb, Rgb, Rgba};
pub use errors::{CardError, ConfigError, RenderError, SurfaceError};
pub use format::{format_change, format_currency};
pub use table::Table;

/// Lowercase `text`, collapsing every run of non-alphanumerics into one `-`
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_dash = false;
    for c in text.chars() {
        if c.is_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.extend(c.to_lowercase());
        } else {
            pending_dash = true;
        }
    }
    slug
}
