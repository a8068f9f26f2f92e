// Copyright 2025 the Juxtapose Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer button identification.

/// Which pointer button a press or release refers to.
///
/// The numbering follows the DOM `MouseEvent.button` convention, which is
/// also what pointer events report.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerButton {
    /// Main button, usually the left mouse button or a touch contact.
    Primary,
    /// Usually the wheel or middle button.
    Auxiliary,
    /// Usually the right mouse button.
    Secondary,
    /// Browser "back" button.
    Back,
    /// Browser "forward" button.
    Forward,
    /// Any code outside the standard range.
    Other(i16),
}

impl PointerButton {
    /// Maps a DOM `button` code to a [`PointerButton`].
    #[must_use]
    pub const fn from_dom(code: i16) -> Self {
        match code {
            0 => Self::Primary,
            1 => Self::Auxiliary,
            2 => Self::Secondary,
            3 => Self::Back,
            4 => Self::Forward,
            other => Self::Other(other),
        }
    }

    /// Returns `true` if this button is allowed to start a pan or slider drag.
    ///
    /// Only the primary button starts gestures; everything else is ignored.
    #[must_use]
    pub const fn starts_gesture(self) -> bool {
        matches!(self, Self::Primary)
    }
}

#[cfg(test)]
mod tests {
    use super::PointerButton;

    #[test]
    fn dom_codes_map_to_buttons() {
        assert_eq!(PointerButton::from_dom(0), PointerButton::Primary);
        assert_eq!(PointerButton::from_dom(1), PointerButton::Auxiliary);
        assert_eq!(PointerButton::from_dom(2), PointerButton::Secondary);
        assert_eq!(PointerButton::from_dom(3), PointerButton::Back);
        assert_eq!(PointerButton::from_dom(4), PointerButton::Forward);
        assert_eq!(PointerButton::from_dom(-1), PointerButton::Other(-1));
        assert_eq!(PointerButton::from_dom(9), PointerButton::Other(9));
    }

    #[test]
    fn only_primary_starts_gestures() {
        assert!(PointerButton::Primary.starts_gesture());
        for code in 1..=6 {
            assert!(
                !PointerButton::from_dom(code).starts_gesture(),
                "button code {code} must not start a gesture"
            );
        }
    }
}
