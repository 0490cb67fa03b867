use indexmap::{IndexMap, IndexSet};

/// Identifies one declaration block: the enclosing media context (empty when
/// none is active) plus the selector the block belongs to.
///
/// Neither part is ever parsed further; keys match by exact string equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StyleKey {
    pub media: String,
    pub selector: String,
}

impl StyleKey {
    pub fn new(media: &str, selector: &str) -> Self {
        StyleKey {
            media: media.to_string(),
            selector: selector.to_string(),
        }
    }
}

/// Declaration sets per block, in first-seen order.
///
/// Key insertion order drives the final report order, so a plain `HashMap`
/// does not fit here. Declaration sets collapse duplicates and keep a stable
/// order for deterministic output.
pub type StyleMap = IndexMap<StyleKey, IndexSet<String>>;

/// How `scan` treats a declaration line inside a selector block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanMode {
    /// First pass: record every declaration under its block's key.
    Collect,
    /// Second pass: remove matching declarations from the first pass's map,
    /// leaving only the declarations unique to the first stylesheet.
    Subtract,
}

/// Running scanner state; freshly reset for every stylesheet.
#[derive(Debug, Default)]
struct ScanState {
    in_comment: bool,
    media: String,
    selector: String,
    prev: String,
}

/// Walk normalized lines and update `styles` according to `mode`.
///
/// The tracker assumes at most one nesting level: selector blocks may sit
/// inside a single media context, never inside each other. A `}` closes the
/// current selector if one is open, otherwise the current media context.
/// Both modes insert missing keys when a block opens, so the subtract pass
/// never looks up a key the map does not hold.
pub fn scan(normalized: &str, styles: &mut StyleMap, mode: ScanMode) {
    let mut state = ScanState::default();

    for line in normalized.split('\n') {
        if line.starts_with('@') {
            state.media = line.to_string();
        } else if line == "*/" {
            state.in_comment = false;
        } else if !state.in_comment {
            match line {
                "/*" => state.in_comment = true,
                "{" => {
                    // A brace after an `@` line opens the media body itself,
                    // not a selector block.
                    if !state.prev.starts_with('@') {
                        state.selector = state.prev.clone();
                        styles
                            .entry(StyleKey::new(&state.media, &state.selector))
                            .or_default();
                    }
                }
                "}" => {
                    if !state.selector.is_empty() {
                        state.selector.clear();
                    } else {
                        state.media.clear();
                    }
                }
                _ => {
                    if !state.selector.is_empty() {
                        let key = StyleKey::new(&state.media, &state.selector);
                        let declaration = line.trim();
                        let set = styles.entry(key).or_default();
                        match mode {
                            ScanMode::Collect => {
                                set.insert(declaration.to_string());
                            }
                            ScanMode::Subtract => {
                                set.shift_remove(declaration);
                            }
                        }
                    }
                }
            }
        }
        state.prev = line.to_string();
    }
}
