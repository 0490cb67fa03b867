//! Naive textual comparison of two CSS stylesheets.
//!
//! The pipeline normalizes both files into one-token-per-line form, builds a
//! `(media context, selector) -> declarations` map from the original file,
//! subtracts everything the revised file still contains, and renders what is
//! left as nested CSS. No CSS grammar is parsed; the whole thing is
//! line-oriented text processing.

pub mod normalize;
pub mod report;
pub mod scan;

pub use normalize::normalize;
pub use report::render;
pub use scan::{scan, ScanMode, StyleKey, StyleMap};

/// Compare two stylesheets and return the declarations unique to `original`
/// as nested CSS text. Returns the empty string when nothing differs.
pub fn compare(original: &str, revised: &str) -> String {
    let normalized_original = normalize(original);
    let normalized_revised = normalize(revised);
    log::debug!(
        "normalized stylesheets: {} / {} lines",
        normalized_original.lines().count(),
        normalized_revised.lines().count()
    );

    let mut styles = StyleMap::new();
    scan(&normalized_original, &mut styles, ScanMode::Collect);
    log::debug!("collected {} style blocks from original", styles.len());

    scan(&normalized_revised, &mut styles, ScanMode::Subtract);

    render(&styles)
}
