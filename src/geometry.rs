//! Geometry directives and their resolution against a screen.
//!
//! A [`GeometrySpec`] describes an optional window size and an optional
//! window position. Each axis is an explicit tagged value: pixels, a
//! percentage of the screen, or an offset anchored to the far screen edge.
//! Resolution is pure: it takes a working rectangle and returns the
//! overridden one.
//!
//! # Example
//!
//! ```
//! use zenplace::{GeometrySpec, Length, Position, Rect, Size};
//!
//! let spec = GeometrySpec::width_only(Length::Percent(50))
//!     .at(Position::FromFar(10), Position::Pixels(0));
//!
//! let window = spec.apply(Size::new(1000, 600), Rect::new(0, 0, 400, 300));
//!
//! // Width is 50% of the screen, height follows the 4:3 aspect ratio.
//! assert_eq!(window.size(), Size::new(500, 375));
//! // Anchored 10px from the right edge.
//! assert_eq!(window.x0, 1000 - 500 - 10);
//! ```

use num_traits::ToPrimitive;

/// Width × height in pixels.
///
/// Signed so that intermediate arithmetic (free space, offsets) stays in one
/// type; a usable window always has positive dimensions.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Size {
    /// Width in pixels.
    pub width: i32,
    /// Height in pixels.
    pub height: i32,
}

impl Size {
    /// Create a new size.
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Width-to-height ratio, or `None` when either dimension is not positive.
    pub fn aspect(self) -> Option<f64> {
        if self.width <= 0 || self.height <= 0 {
            return None;
        }
        Some(f64::from(self.width) / f64::from(self.height))
    }

    /// Whether both dimensions are positive.
    pub fn is_positive(self) -> bool {
        self.width > 0 && self.height > 0
    }

    /// Whether `self` fits inside `other` on both axes.
    pub fn fits_within(self, other: Size) -> bool {
        self.width <= other.width && self.height <= other.height
    }
}

/// Axis-aligned rectangle given by its edges. `x1`/`y1` are exclusive.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rect {
    pub x0: i32,
    pub y0: i32,
    pub x1: i32,
    pub y1: i32,
}

impl Rect {
    /// Create a rect from its edges.
    pub const fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Create a rect from a top-left corner and a size.
    pub const fn from_origin_size(x0: i32, y0: i32, size: Size) -> Self {
        Self {
            x0,
            y0,
            x1: x0.saturating_add(size.width),
            y1: y0.saturating_add(size.height),
        }
    }

    pub const fn width(&self) -> i32 {
        self.x1.saturating_sub(self.x0)
    }

    pub const fn height(&self) -> i32 {
        self.y1.saturating_sub(self.y0)
    }

    pub const fn size(&self) -> Size {
        Size::new(self.width(), self.height())
    }

    /// Whether `other` lies entirely inside this rect.
    pub fn contains(&self, other: &Rect) -> bool {
        other.x0 >= self.x0 && other.y0 >= self.y0 && other.x1 <= self.x1 && other.y1 <= self.y1
    }

    /// Move the rect by `(dx, dy)`, keeping its size.
    pub fn translate(self, dx: i32, dy: i32) -> Self {
        Self::from_origin_size(
            self.x0.saturating_add(dx),
            self.y0.saturating_add(dy),
            self.size(),
        )
    }
}

/// Requested extent along one axis.
///
/// Only strictly positive values take effect. A zero or negative extent
/// resolves like [`Length::Unset`], since a zero-sized window is never a
/// meaningful request.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Length {
    /// Leave this dimension alone.
    #[default]
    Unset,
    /// Absolute pixels.
    Pixels(i32),
    /// Percentage of the screen dimension on the same axis.
    Percent(i32),
}

impl Length {
    /// Resolve against the screen dimension. `None` = leave untouched.
    pub fn resolve(self, screen_dim: i32) -> Option<i32> {
        match self {
            Self::Pixels(v) if v > 0 => Some(v),
            Self::Percent(v) if v > 0 => Some(percent_of(screen_dim, v)),
            _ => None,
        }
    }

    /// Whether this length would override a dimension.
    pub fn is_set(self) -> bool {
        match self {
            Self::Unset => false,
            Self::Pixels(v) | Self::Percent(v) => v > 0,
        }
    }
}

/// Requested position along one axis.
///
/// Near-edge variants measure from the left/top screen edge, far-edge
/// variants from the right/bottom. Percentages are of the free space
/// (`screen - window`), so `Percent(50)` centers and `Percent(100)` touches
/// the far edge. Zero and negative values are valid positions.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Position {
    /// Leave this coordinate alone.
    #[default]
    Unset,
    /// Pixels from the near edge.
    Pixels(i32),
    /// Percentage of the free space, from the near edge.
    Percent(i32),
    /// Pixels from the far edge to the window's far edge.
    FromFar(i32),
    /// Percentage of the free space, from the far edge.
    FromFarPercent(i32),
}

impl Position {
    /// Resolve the window's near-edge coordinate. `None` = leave untouched.
    ///
    /// `window_dim` must already be final: percentages depend on it.
    pub fn resolve(self, screen_dim: i32, window_dim: i32) -> Option<i32> {
        let space = screen_dim.saturating_sub(window_dim);
        match self {
            Self::Unset => None,
            Self::Pixels(v) => Some(v),
            Self::Percent(v) => Some(percent_of(space, v)),
            Self::FromFar(v) => Some(space.saturating_sub(v)),
            Self::FromFarPercent(v) => Some(space.saturating_sub(percent_of(space, v))),
        }
    }

    pub fn is_set(self) -> bool {
        self != Self::Unset
    }
}

/// Size and position directive.
///
/// Size and position are independent: a spec may carry either, both, or
/// neither. Used for the explicit window geometry and for autofit boxes
/// (where only the size half matters).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct GeometrySpec {
    pub width: Length,
    pub height: Length,
    pub x: Position,
    pub y: Position,
}

impl GeometrySpec {
    /// A spec that changes nothing.
    pub const NONE: Self = Self {
        width: Length::Unset,
        height: Length::Unset,
        x: Position::Unset,
        y: Position::Unset,
    };

    /// Spec with both dimensions set.
    pub const fn with_size(width: Length, height: Length) -> Self {
        Self {
            width,
            height,
            ..Self::NONE
        }
    }

    /// Spec with only width set (height follows the current aspect ratio).
    pub const fn width_only(width: Length) -> Self {
        Self::with_size(width, Length::Unset)
    }

    /// Spec with only height set (width follows the current aspect ratio).
    pub const fn height_only(height: Length) -> Self {
        Self::with_size(Length::Unset, height)
    }

    /// Spec with only a position.
    pub const fn with_position(x: Position, y: Position) -> Self {
        Self { x, y, ..Self::NONE }
    }

    /// Set the position.
    pub const fn at(mut self, x: Position, y: Position) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    /// Whether the size half would override anything.
    pub fn has_size(&self) -> bool {
        self.width.is_set() || self.height.is_set()
    }

    /// Whether the position half is present.
    pub fn has_position(&self) -> bool {
        self.x.is_set() || self.y.is_set()
    }

    /// Resolve the size half against `screen`, starting from `current`.
    ///
    /// When exactly one dimension is overridden, the other is recomputed
    /// from the aspect ratio of `current`. A degenerate `current` (zero or
    /// negative dimension) skips that recomputation.
    pub fn resolve_size(&self, screen: Size, current: Size) -> Size {
        let new_w = self.width.resolve(screen.width);
        let new_h = self.height.resolve(screen.height);
        let mut out = Size::new(
            new_w.unwrap_or(current.width),
            new_h.unwrap_or(current.height),
        );

        // Keep the aspect ratio when only one side is given.
        if let Some(aspect) = current.aspect() {
            match (new_w, new_h) {
                (Some(w), None) => out.height = to_px(f64::from(w) / aspect),
                (None, Some(h)) => out.width = to_px(f64::from(h) * aspect),
                _ => {}
            }
        }
        out
    }

    /// Apply the full spec to a working window rectangle.
    ///
    /// Size resolves first; position-as-percentage then uses the final
    /// window size. Position overrides are relative to the screen origin
    /// `(0, 0)`, the same frame `screen` is expressed in.
    pub fn apply(&self, screen: Size, window: Rect) -> Rect {
        let size = if self.has_size() {
            self.resolve_size(screen, window.size())
        } else {
            window.size()
        };

        let x0 = self.x.resolve(screen.width, size.width).unwrap_or(window.x0);
        let y0 = self.y.resolve(screen.height, size.height).unwrap_or(window.y0);
        Rect::from_origin_size(x0, y0, size)
    }
}

/// `value`% of `dim`, truncated toward zero.
fn percent_of(dim: i32, value: i32) -> i32 {
    to_px(f64::from(dim) * (f64::from(value) / 100.0))
}

/// Convert a floating-point pixel value to an integer pixel.
///
/// Truncates toward zero and saturates at the `i32` range. NaN maps to 0.
pub(crate) fn to_px(v: f64) -> i32 {
    match v.to_i32() {
        Some(px) => px,
        None if v.is_nan() => 0,
        None if v > 0.0 => i32::MAX,
        None => i32::MIN,
    }
}
