use unicode_bidi::{BidiInfo, LTR_LEVEL, Level, RTL_LEVEL};

/// Base direction hint for paragraph analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BaseDirection {
    /// Detect paragraph base direction from the text (first strong
    /// character).
    #[default]
    Auto,
    /// Force overall left-to-right base direction.
    Ltr,
    /// Force overall right-to-left base direction.
    Rtl,
}

impl BaseDirection {
    pub fn to_level(self) -> Option<Level> {
        match self {
            BaseDirection::Auto => None,
            BaseDirection::Ltr => Some(LTR_LEVEL),
            BaseDirection::Rtl => Some(RTL_LEVEL),
        }
    }
}

/// Reorder logical-order text into visual order per the Unicode BiDi
/// algorithm, with an explicit base-direction override.
///
/// Each paragraph detected by `unicode-bidi` is reordered
/// independently and the results concatenated in document order.
pub fn reorder_with(text: &str, base_dir: BaseDirection) -> String {
    if text.is_empty() {
        return String::new();
    }
    let info = BidiInfo::new(text, base_dir.to_level());
    let mut visual = String::with_capacity(text.len());
    for para in &info.paragraphs {
        visual.push_str(&info.reorder_line(para, para.range.clone()));
    }
    visual
}

/// Reorder with automatic base-direction detection, the default for
/// the render/derender pipeline.
pub fn reorder(text: &str) -> String {
    reorder_with(text, BaseDirection::Auto)
}
