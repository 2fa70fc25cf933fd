//! CSS property registry used to check a token's `property` list.
//!
//! Vendor-prefixed names resolve through their unprefixed entry.

use std::collections::HashSet;

/// Registry lookup result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyInfo {
    /// Unprefixed property name.
    pub name: String,
    /// Vendor prefix, if the lookup went through one (`-webkit-`).
    pub vendor: Option<&'static str>,
}

/// Recognizes CSS property names.
pub trait CssPropertyRegistry: Send + Sync {
    fn lookup(&self, property: &str) -> Option<PropertyInfo>;
}

const VENDOR_PREFIXES: [&str; 4] = ["-webkit-", "-moz-", "-ms-", "-o-"];

const STANDARD: &[&str] = &[
    "align-content", "align-items", "align-self", "all", "animation",
    "animation-delay", "animation-direction", "animation-duration",
    "animation-fill-mode", "animation-iteration-count", "animation-name",
    "animation-play-state", "animation-timing-function", "appearance",
    "backface-visibility", "background", "background-attachment",
    "background-blend-mode", "background-clip", "background-color",
    "background-image", "background-origin", "background-position",
    "background-repeat", "background-size", "border", "border-bottom",
    "border-bottom-color", "border-bottom-left-radius",
    "border-bottom-right-radius", "border-bottom-style", "border-bottom-width",
    "border-collapse", "border-color", "border-image", "border-left",
    "border-left-color", "border-left-style", "border-left-width",
    "border-radius", "border-right", "border-right-color",
    "border-right-style", "border-right-width", "border-spacing",
    "border-style", "border-top", "border-top-color",
    "border-top-left-radius", "border-top-right-radius", "border-top-style",
    "border-top-width", "border-width", "bottom", "box-align",
    "box-decoration-break", "box-orient", "box-pack", "box-shadow",
    "box-sizing", "caption-side", "clear", "clip", "color", "column-count",
    "column-gap", "column-rule", "column-width", "columns", "content",
    "counter-increment", "counter-reset", "cursor", "direction", "display",
    "empty-cells", "filter", "flex", "flex-basis", "flex-direction",
    "flex-flow", "flex-grow", "flex-shrink", "flex-wrap", "float", "font",
    "font-family", "font-feature-settings", "font-size", "font-size-adjust",
    "font-stretch", "font-style", "font-variant", "font-weight", "gap",
    "grid", "grid-area", "grid-column", "grid-gap", "grid-row",
    "grid-template", "grid-template-areas", "grid-template-columns",
    "grid-template-rows", "height", "hyphens", "justify-content", "left",
    "letter-spacing", "line-height", "list-style", "list-style-image",
    "list-style-position", "list-style-type", "margin", "margin-bottom",
    "margin-left", "margin-right", "margin-top", "max-height", "max-width",
    "min-height", "min-width", "object-fit", "object-position", "opacity",
    "order", "outline", "outline-color", "outline-offset", "outline-style",
    "outline-width", "overflow", "overflow-wrap", "overflow-x", "overflow-y",
    "padding", "padding-bottom", "padding-left", "padding-right",
    "padding-top", "page-break-after", "page-break-before",
    "page-break-inside", "perspective", "perspective-origin",
    "pointer-events", "position", "quotes", "resize", "right", "row-gap",
    "tab-size", "table-layout", "text-align", "text-align-last",
    "text-decoration", "text-decoration-color", "text-decoration-line",
    "text-decoration-style", "text-indent", "text-overflow", "text-shadow",
    "text-transform", "top", "transform", "transform-origin",
    "transform-style", "transition", "transition-delay",
    "transition-duration", "transition-property",
    "transition-timing-function", "unicode-bidi", "user-select",
    "vertical-align", "visibility", "white-space", "width", "word-break",
    "word-spacing", "word-wrap", "z-index",
];

/// Built-in table of standard CSS properties.
#[derive(Debug, Clone)]
pub struct StandardProperties {
    known: HashSet<&'static str>,
}

impl StandardProperties {
    pub fn new() -> Self {
        Self {
            known: STANDARD.iter().copied().collect(),
        }
    }
}

impl Default for StandardProperties {
    fn default() -> Self {
        Self::new()
    }
}

impl CssPropertyRegistry for StandardProperties {
    fn lookup(&self, property: &str) -> Option<PropertyInfo> {
        let lowered = property.to_ascii_lowercase();

        if self.known.contains(lowered.as_str()) {
            return Some(PropertyInfo {
                name: lowered,
                vendor: None,
            });
        }

        VENDOR_PREFIXES.iter().find_map(|prefix| {
            let bare = lowered.strip_prefix(prefix)?;
            self.known.contains(bare).then(|| PropertyInfo {
                name: bare.to_string(),
                vendor: Some(*prefix),
            })
        })
    }
}
