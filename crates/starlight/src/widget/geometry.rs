//! Size hints and size policies for widget layout.
//!
//! This module provides the types used for layout negotiation between widgets
//! and their parent layouts.

use starlight_render::Size;

/// Size policy determines how a widget should behave when space is allocated.
///
/// The policy tells layout managers how the widget wants to be sized relative
/// to its size hint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum SizePolicy {
    /// The widget cannot grow or shrink. It always stays at its size hint.
    Fixed = 0,

    /// The size hint is the minimum size. The widget can grow but there's no
    /// benefit in making it larger than the size hint.
    Minimum = 1,

    /// The size hint is the maximum size. The widget can shrink but cannot
    /// grow larger than the size hint.
    Maximum = 2,

    /// The size hint is preferred but the widget can both grow and shrink.
    /// This is the default policy for most widgets.
    #[default]
    Preferred = 3,

    /// The widget wants to grow and take up as much space as possible.
    /// It can also shrink if needed.
    Expanding = 4,
}

impl SizePolicy {
    /// Returns true if the policy allows the widget to grow.
    #[inline]
    pub fn can_grow(self) -> bool {
        !matches!(self, Self::Fixed | Self::Maximum)
    }

    /// Returns true if the policy allows the widget to shrink.
    #[inline]
    pub fn can_shrink(self) -> bool {
        !matches!(self, Self::Fixed | Self::Minimum)
    }
}

/// Combined horizontal and vertical size policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SizePolicyPair {
    /// Horizontal size policy.
    pub horizontal: SizePolicy,

    /// Vertical size policy.
    pub vertical: SizePolicy,
}

impl SizePolicyPair {
    /// Create a new size policy pair with the specified policies.
    pub fn new(horizontal: SizePolicy, vertical: SizePolicy) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }

    /// Create a policy with the same value for both dimensions.
    pub fn uniform(policy: SizePolicy) -> Self {
        Self::new(policy, policy)
    }

    /// Create a fixed size policy (widget cannot resize).
    pub fn fixed() -> Self {
        Self::uniform(SizePolicy::Fixed)
    }

    /// Create an expanding size policy (widget wants more space).
    pub fn expanding() -> Self {
        Self::uniform(SizePolicy::Expanding)
    }
}

/// Size hint containing the preferred, minimum, and maximum sizes for a widget.
///
/// This is used by layout managers to determine how to size and position
/// widgets.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SizeHint {
    /// The preferred size for the widget to display optimally.
    pub preferred: Size,

    /// The minimum acceptable size. `None` means the widget can shrink to
    /// zero.
    pub minimum: Option<Size>,

    /// The maximum size the widget should be. `None` means the widget can
    /// grow indefinitely.
    pub maximum: Option<Size>,
}

impl SizeHint {
    /// Create a new size hint with the specified preferred size.
    pub fn new(preferred: Size) -> Self {
        Self {
            preferred,
            minimum: None,
            maximum: None,
        }
    }

    /// Create a size hint with explicit width and height.
    pub fn from_dimensions(width: f32, height: f32) -> Self {
        Self::new(Size::new(width, height))
    }

    /// Create a fixed size hint (preferred = minimum = maximum).
    pub fn fixed(size: Size) -> Self {
        Self {
            preferred: size,
            minimum: Some(size),
            maximum: Some(size),
        }
    }

    /// Set the minimum size.
    pub fn with_minimum(mut self, minimum: Size) -> Self {
        self.minimum = Some(minimum);
        self
    }

    /// Set minimum dimensions.
    pub fn with_minimum_dimensions(mut self, width: f32, height: f32) -> Self {
        self.minimum = Some(Size::new(width, height));
        self
    }

    /// Constrain a size to be within the minimum and maximum bounds.
    pub fn constrain(&self, size: Size) -> Size {
        let min = self.minimum.unwrap_or(Size::ZERO);
        let max = self.maximum.unwrap_or(Size::new(f32::MAX, f32::MAX));

        Size::new(
            size.width.clamp(min.width, max.width),
            size.height.clamp(min.height, max.height),
        )
    }
}
