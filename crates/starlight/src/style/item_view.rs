//! Shared styling for item view cells.
//!
//! Every delegate receives a [`StyleOptionViewItem`] describing the cell it
//! is about to paint and passes it to [`ItemViewStyle::draw_cell`] for the
//! parts all cells share: background, selection highlight, hover tint, and
//! focus border. Delegates then draw their content on top.

use starlight_render::{Color, Rect, Renderer, Stroke};

use super::palette::{ColorGroup, ColorRole, Palette};
use crate::model::{ItemData, ModelIndex};

/// The visual state of a single item cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewItemState {
    /// The item is selected.
    pub selected: bool,
    /// The item has keyboard focus.
    pub focused: bool,
    /// The pointer is over the item.
    pub hovered: bool,
    /// The item accepts input.
    pub enabled: bool,
    /// The item's window is the active window.
    pub active: bool,
    /// The item sits on an alternating background row.
    pub alternate: bool,
}

impl Default for ViewItemState {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewItemState {
    /// An enabled item in an active window, nothing else set.
    pub fn new() -> Self {
        Self {
            selected: false,
            focused: false,
            hovered: false,
            enabled: true,
            active: true,
            alternate: false,
        }
    }

    /// Set the selected flag.
    pub fn with_selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    /// Set the focused flag.
    pub fn with_focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Set the hovered flag.
    pub fn with_hovered(mut self, hovered: bool) -> Self {
        self.hovered = hovered;
        self
    }

    /// Set the enabled flag.
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Set the active-window flag.
    pub fn with_active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// Set the alternate-row flag.
    pub fn with_alternate(mut self, alternate: bool) -> Self {
        self.alternate = alternate;
        self
    }

    /// The palette group matching this state.
    ///
    /// Disabled wins over everything; an enabled item in a background
    /// window resolves to `Inactive`.
    pub fn color_group(self) -> ColorGroup {
        if !self.enabled {
            ColorGroup::Disabled
        } else if !self.active {
            ColorGroup::Inactive
        } else {
            ColorGroup::Normal
        }
    }
}

/// Everything a delegate needs to paint one cell.
#[derive(Debug, Clone)]
pub struct StyleOptionViewItem {
    /// The cell rectangle in the renderer's current coordinate space.
    pub rect: Rect,
    /// The index of the item being painted.
    pub index: ModelIndex,
    /// The cell's visual state.
    pub state: ViewItemState,
    /// The palette to resolve colors against.
    pub palette: Palette,
    /// The cell's value.
    pub value: ItemData,
}

impl StyleOptionViewItem {
    /// Create an option for a cell with default state and palette.
    pub fn new(rect: Rect, index: ModelIndex) -> Self {
        Self {
            rect,
            index,
            state: ViewItemState::new(),
            palette: Palette::default(),
            value: ItemData::Empty,
        }
    }

    /// Replace the state.
    pub fn with_state(mut self, state: ViewItemState) -> Self {
        self.state = state;
        self
    }

    /// Replace the palette.
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Set the cell value.
    pub fn with_value(mut self, value: impl Into<ItemData>) -> Self {
        self.value = value.into();
        self
    }
}

/// Paints the parts of a cell every delegate shares.
#[derive(Debug, Clone)]
pub struct ItemViewStyle {
    palette: Palette,
    hover_background: Color,
    alternate_background: Color,
    focus_border: Color,
}

impl Default for ItemViewStyle {
    fn default() -> Self {
        Self {
            palette: Palette::default(),
            hover_background: Color::from_rgba8(0, 0, 0, 15),
            alternate_background: Color::from_rgba8(0, 0, 0, 8),
            focus_border: Color::from_rgb8(51, 153, 255),
        }
    }
}

impl ItemViewStyle {
    /// Create the default style.
    pub fn new() -> Self {
        Self::default()
    }

    /// The style's palette.
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Replace the palette.
    pub fn set_palette(&mut self, palette: Palette) {
        self.palette = palette;
    }

    /// Draw the cell background for `option`.
    ///
    /// Selection takes precedence over hover, which takes precedence over
    /// the alternate row background. A focus border is stroked last.
    pub fn draw_cell(&self, renderer: &mut dyn Renderer, option: &StyleOptionViewItem) {
        let group = option.state.color_group();

        if option.state.selected {
            let highlight = option.palette.color(group, ColorRole::Highlight);
            renderer.fill_rect(option.rect, highlight.into());
        } else if option.state.hovered && option.state.enabled {
            renderer.fill_rect(option.rect, self.hover_background.into());
        } else if option.state.alternate {
            renderer.fill_rect(option.rect, self.alternate_background.into());
        }

        if option.state.focused {
            let stroke = Stroke::new(self.focus_border, 1.0);
            renderer.stroke_rect(option.rect.deflate(0.5), &stroke);
        }
    }
}

/// Read access a delegate or in-place editor needs into its view.
pub trait ItemView: Send + Sync {
    /// Whether the given item is currently selected.
    fn is_selected(&self, index: &ModelIndex) -> bool;

    /// The style the view paints cells with.
    fn style(&self) -> &ItemViewStyle;
}

#[cfg(test)]
mod tests {
    use super::*;
    use starlight_render::DisplayListRenderer;

    fn cell_option() -> StyleOptionViewItem {
        StyleOptionViewItem::new(Rect::new(0.0, 0.0, 100.0, 20.0), ModelIndex::root(0, 0))
    }

    #[test]
    fn test_color_group_resolution() {
        assert_eq!(ViewItemState::new().color_group(), ColorGroup::Normal);
        assert_eq!(
            ViewItemState::new().with_active(false).color_group(),
            ColorGroup::Inactive
        );
        // Disabled wins even in a background window.
        assert_eq!(
            ViewItemState::new()
                .with_enabled(false)
                .with_active(false)
                .color_group(),
            ColorGroup::Disabled
        );
    }

    #[test]
    fn test_selected_cell_fills_highlight() {
        let style = ItemViewStyle::new();
        let option = cell_option().with_state(ViewItemState::new().with_selected(true));
        let mut renderer = DisplayListRenderer::new();

        style.draw_cell(&mut renderer, &option);

        let fills = renderer.fill_rects();
        assert_eq!(fills.len(), 1);
        let highlight = option.palette.color(ColorGroup::Normal, ColorRole::Highlight);
        assert_eq!(fills[0].1, highlight.into());
    }

    #[test]
    fn test_selection_beats_hover() {
        let style = ItemViewStyle::new();
        let option = cell_option()
            .with_state(ViewItemState::new().with_selected(true).with_hovered(true));
        let mut renderer = DisplayListRenderer::new();

        style.draw_cell(&mut renderer, &option);

        let highlight = option.palette.color(ColorGroup::Normal, ColorRole::Highlight);
        assert_eq!(renderer.fill_rects()[0].1, highlight.into());
    }

    #[test]
    fn test_plain_cell_draws_nothing() {
        let style = ItemViewStyle::new();
        let mut renderer = DisplayListRenderer::new();

        style.draw_cell(&mut renderer, &cell_option());

        assert!(renderer.commands().is_empty());
    }
}
