//! Autofit: shrink (or grow) a window into a bounding box, keeping its aspect ratio.

use crate::geometry::{GeometrySpec, Size, to_px};

/// Fit `size` into the box described by the size half of `spec`.
///
/// `bounds` is what percentages in `spec` refer to (normally the screen).
/// A single-axis spec derives the missing box dimension from `size`'s aspect
/// ratio. With `allow_upscale == false`, a window that already fits inside
/// the box is returned unchanged. Otherwise the window is scaled so that it
/// touches the box on the constraining axis and never exceeds it on the other.
///
/// A spec without a size is a no-op.
pub fn apply_autofit(size: Size, bounds: Size, spec: &GeometrySpec, allow_upscale: bool) -> Size {
    if !spec.has_size() {
        return size;
    }

    let target = spec.resolve_size(bounds, size);
    if !allow_upscale && size.fits_within(target) {
        return size;
    }
    fit_inside(size, target)
}

/// Scale `size` to fit inside `target`, preserving aspect ratio.
///
/// One dimension matches the target; the other is ≤ target. Degenerate
/// inputs (a non-positive dimension on either side) return `size` unchanged.
pub fn fit_inside(size: Size, target: Size) -> Size {
    let (Some(aspect), Some(target_aspect)) = (size.aspect(), target.aspect()) else {
        return size;
    };

    if target_aspect <= aspect {
        // Width constrains.
        Size::new(target.width, to_px(f64::from(target.width) / aspect))
    } else {
        // Height constrains.
        Size::new(to_px(f64::from(target.height) * aspect), target.height)
    }
}
