//! Color palettes for widget and item rendering.
//!
//! A [`Palette`] holds one color per ([`ColorGroup`], [`ColorRole`]) pair.
//! Widgets never hard-code colors; they ask the palette for the role they
//! need under the group that matches their current state, so disabled and
//! background-window rendering fall out of the same drawing code.

use starlight_render::Color;

/// The widget state a palette color applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorGroup {
    /// The widget is enabled and its window is active.
    Normal,
    /// The widget is enabled but its window is in the background.
    Inactive,
    /// The widget is disabled.
    Disabled,
}

/// The semantic role a color fills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorRole {
    /// Foreground text and glyphs.
    Text,
    /// Text and glyphs drawn over the selection highlight.
    HighlightedText,
    /// The selection highlight background.
    Highlight,
    /// The base background of item views and input widgets.
    Base,
    /// The background of alternating rows in item views.
    AlternateBase,
}

/// Resolves color groups and roles to concrete colors.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    normal: GroupColors,
    inactive: GroupColors,
    disabled: GroupColors,
}

#[derive(Debug, Clone, PartialEq)]
struct GroupColors {
    text: Color,
    highlighted_text: Color,
    highlight: Color,
    base: Color,
    alternate_base: Color,
}

impl GroupColors {
    fn color(&self, role: ColorRole) -> Color {
        match role {
            ColorRole::Text => self.text,
            ColorRole::HighlightedText => self.highlighted_text,
            ColorRole::Highlight => self.highlight,
            ColorRole::Base => self.base,
            ColorRole::AlternateBase => self.alternate_base,
        }
    }
}

impl Default for Palette {
    /// The built-in light palette.
    fn default() -> Self {
        let normal = GroupColors {
            text: Color::from_rgb8(33, 33, 33),
            highlighted_text: Color::WHITE,
            highlight: Color::from_rgb8(51, 153, 255),
            base: Color::WHITE,
            alternate_base: Color::from_rgb8(247, 247, 247),
        };
        // Background windows keep text colors but mute the highlight.
        let inactive = GroupColors {
            highlight: Color::from_rgb8(180, 180, 180),
            highlighted_text: Color::from_rgb8(33, 33, 33),
            ..normal.clone()
        };
        let disabled = GroupColors {
            text: Color::from_rgb8(160, 160, 160),
            highlighted_text: Color::from_rgb8(160, 160, 160),
            highlight: Color::from_rgb8(200, 200, 200),
            ..normal.clone()
        };
        Self {
            normal,
            inactive,
            disabled,
        }
    }
}

impl Palette {
    /// Create the default palette.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up the color for a group and role.
    pub fn color(&self, group: ColorGroup, role: ColorRole) -> Color {
        match group {
            ColorGroup::Normal => self.normal.color(role),
            ColorGroup::Inactive => self.inactive.color(role),
            ColorGroup::Disabled => self.disabled.color(role),
        }
    }

    /// Set the color for a group and role.
    pub fn set_color(&mut self, group: ColorGroup, role: ColorRole, color: Color) {
        let colors = match group {
            ColorGroup::Normal => &mut self.normal,
            ColorGroup::Inactive => &mut self.inactive,
            ColorGroup::Disabled => &mut self.disabled,
        };
        match role {
            ColorRole::Text => colors.text = color,
            ColorRole::HighlightedText => colors.highlighted_text = color,
            ColorRole::Highlight => colors.highlight = color,
            ColorRole::Base => colors.base = color,
            ColorRole::AlternateBase => colors.alternate_base = color,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_groups_differ() {
        let palette = Palette::default();
        assert_ne!(
            palette.color(ColorGroup::Normal, ColorRole::Text),
            palette.color(ColorGroup::Disabled, ColorRole::Text)
        );
        assert_ne!(
            palette.color(ColorGroup::Normal, ColorRole::Highlight),
            palette.color(ColorGroup::Inactive, ColorRole::Highlight)
        );
    }

    #[test]
    fn test_set_color() {
        let mut palette = Palette::default();
        palette.set_color(ColorGroup::Normal, ColorRole::Text, Color::RED);
        assert_eq!(palette.color(ColorGroup::Normal, ColorRole::Text), Color::RED);
        // Other groups are untouched.
        assert_ne!(palette.color(ColorGroup::Disabled, ColorRole::Text), Color::RED);
    }
}
