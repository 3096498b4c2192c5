//! Markup builder: escape and serialize the final `<iframe>` tag.
//!
//! Pure string building, no I/O. Only call this for a URL that passed the
//! reachability check.

mod attributes;
mod escape;

pub use attributes::{is_valid_attribute_name, EmbedAttributes};
pub use escape::{esc_attr, esc_url};

/// Class always present on rendered iframes.
pub const DEFAULT_CLASS: &str = "iframe-me";

/// Default class, plus the trimmed custom classes when they are not blank.
pub fn merge_class(custom: Option<&str>) -> String {
    match custom.map(str::trim).filter(|c| !c.is_empty()) {
        Some(classes) => format!("{DEFAULT_CLASS} {classes}"),
        None => DEFAULT_CLASS.to_string(),
    }
}

/// Serialize `<iframe src='..' class='..' name='..' ...></iframe>`.
///
/// `src` comes first and `class` second; other attributes follow in insertion
/// order. Names are written unescaped, so names that are not plain attribute
/// identifiers (or that would override `src`) are skipped.
pub fn build_markup(url: &str, attributes: &EmbedAttributes) -> String {
    let class = merge_class(attributes.custom_classes());
    let mut html = format!("<iframe src='{}' class='{}'", esc_url(url), esc_attr(&class));

    for (name, value) in attributes.extra_attributes() {
        if !is_valid_attribute_name(name) || name.eq_ignore_ascii_case("src") {
            tracing::warn!(name, "skipping iframe attribute with unusable name");
            continue;
        }
        html.push_str(&format!(" {}='{}'", name, esc_attr(value)));
    }

    html.push_str("></iframe>");
    html
}
