// Copyright 2025 the Juxtapose Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Glyphs for the maximize toggle.

const EXPAND_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 16 16"><path d="M1.5 1a.5.5 0 0 0-.5.5v4a.5.5 0 0 1-1 0v-4A1.5 1.5 0 0 1 1.5 0h4a.5.5 0 0 1 0 1zM10 .5a.5.5 0 0 1 .5-.5h4A1.5 1.5 0 0 1 16 1.5v4a.5.5 0 0 1-1 0v-4a.5.5 0 0 0-.5-.5h-4a.5.5 0 0 1-.5-.5M.5 10a.5.5 0 0 1 .5.5v4a.5.5 0 0 0 .5.5h4a.5.5 0 0 1 0 1h-4A1.5 1.5 0 0 1 0 14.5v-4a.5.5 0 0 1 .5-.5m15 0a.5.5 0 0 1 .5.5v4a1.5 1.5 0 0 1-1.5 1.5h-4a.5.5 0 0 1 0-1h4a.5.5 0 0 0 .5-.5v-4a.5.5 0 0 1 .5-.5"/></svg>"#;

const COLLAPSE_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 16 16"><path d="M5.5 0a.5.5 0 0 1 .5.5v4A1.5 1.5 0 0 1 4.5 6h-4a.5.5 0 0 1 0-1h4a.5.5 0 0 0 .5-.5v-4a.5.5 0 0 1 .5-.5m5 0a.5.5 0 0 1 .5.5v4a.5.5 0 0 0 .5.5h4a.5.5 0 0 1 0 1h-4A1.5 1.5 0 0 1 10 4.5v-4a.5.5 0 0 1 .5-.5M0 10.5a.5.5 0 0 1 .5-.5h4A1.5 1.5 0 0 1 6 11.5v4a.5.5 0 0 1-1 0v-4a.5.5 0 0 0-.5-.5h-4a.5.5 0 0 1-.5-.5m10 1a1.5 1.5 0 0 1 1.5-1.5h4a.5.5 0 0 1 0 1h-4a.5.5 0 0 0-.5.5v4a.5.5 0 0 1-1 0z"/></svg>"#;

/// Glyph shown in the maximize toggle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IconGlyph {
    /// Four outward corners; shown while not maximized.
    Expand,
    /// Four inward corners; shown while maximized.
    Collapse,
}

impl IconGlyph {
    /// Glyph to show for the given maximize state.
    #[must_use]
    pub const fn for_state(maximized: bool) -> Self {
        if maximized {
            Self::Collapse
        } else {
            Self::Expand
        }
    }

    /// Inline SVG markup.
    #[must_use]
    pub const fn markup(self) -> &'static str {
        match self {
            Self::Expand => EXPAND_SVG,
            Self::Collapse => COLLAPSE_SVG,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::IconGlyph;

    #[test]
    fn glyph_follows_state_and_round_trips() {
        let start = IconGlyph::for_state(false);
        assert_eq!(start, IconGlyph::Expand);
        assert_eq!(IconGlyph::for_state(true), IconGlyph::Collapse);
        assert_ne!(IconGlyph::Expand.markup(), IconGlyph::Collapse.markup());
        assert!(IconGlyph::Collapse.markup().starts_with("<svg"));
    }
}
