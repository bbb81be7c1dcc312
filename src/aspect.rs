//! Monitor pixel aspect correction.

use crate::geometry::{Size, to_px};

/// Correct a display size for non-square monitor pixels.
///
/// Returns the resolved monitor pixel aspect ratio (`monitor_par`) and the
/// corrected size. `monitor_par` defaults to `1 / pixel_aspect`; a positive
/// `forced_aspect` (the physical width:height of the whole screen) overrides
/// it when the screen size is known.
///
/// The correction only ever enlarges: height when `monitor_par < 1`, width
/// otherwise.
///
/// A non-positive or non-finite `pixel_aspect` is treated as square pixels.
pub fn correct_monitor_aspect(
    screen: Size,
    forced_aspect: f32,
    pixel_aspect: f32,
    size: Size,
) -> (f32, Size) {
    let mut par = if pixel_aspect.is_finite() && pixel_aspect > 0.0 {
        1.0 / pixel_aspect
    } else {
        1.0
    };

    if screen.is_positive() && forced_aspect.is_finite() && forced_aspect > 0.0 {
        par = forced_aspect * screen.height as f32 / screen.width as f32;
    }

    let mut out = size;
    if par < 1.0 {
        out.height = to_px(f64::from(size.height as f32 / par));
    } else {
        out.width = to_px(f64::from(size.width as f32 * par));
    }
    (par, out)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCREEN: Size = Size::new(1920, 1080);
    const VIDEO: Size = Size::new(1280, 720);

    #[test]
    fn square_pixels_change_nothing() {
        assert_eq!(correct_monitor_aspect(SCREEN, 0.0, 1.0, VIDEO), (1.0, VIDEO));
    }

    #[test]
    fn wide_pixels_stretch_height() {
        // Pixel twice as wide as tall → par 0.5 → height doubles.
        let (par, s) = correct_monitor_aspect(SCREEN, 0.0, 2.0, VIDEO);
        assert_eq!(par, 0.5);
        assert_eq!(s, Size::new(1280, 1440));
    }

    #[test]
    fn narrow_pixels_stretch_width() {
        let (par, s) = correct_monitor_aspect(SCREEN, 0.0, 0.5, VIDEO);
        assert_eq!(par, 2.0);
        assert_eq!(s, Size::new(2560, 720));
    }

    #[test]
    fn forced_aspect_matching_screen_is_square() {
        let (par, s) = correct_monitor_aspect(SCREEN, 16.0 / 9.0, 2.0, VIDEO);
        assert_eq!(par, 1.0);
        assert_eq!(s, VIDEO);
    }

    #[test]
    fn forced_aspect_on_five_by_four_screen() {
        // 4:3 picture on 1280x1024 pixels → pixels are 16/15 wide.
        let (par, s) = correct_monitor_aspect(Size::new(1280, 1024), 4.0 / 3.0, 1.0, Size::new(720, 576));
        assert!((par - 16.0 / 15.0).abs() < 1e-6);
        assert_eq!(s, Size::new(768, 576));
    }

    #[test]
    fn forced_aspect_ignored_without_screen() {
        let (par, s) = correct_monitor_aspect(Size::new(0, 0), 4.0 / 3.0, 1.0, VIDEO);
        assert_eq!(par, 1.0);
        assert_eq!(s, VIDEO);
    }

    #[test]
    fn invalid_pixel_aspect_is_square() {
        for pa in [0.0, -1.0, f32::NAN, f32::INFINITY] {
            assert_eq!(correct_monitor_aspect(SCREEN, 0.0, pa, VIDEO), (1.0, VIDEO), "{pa}");
        }
    }

    #[test]
    fn correction_never_shrinks() {
        let mut failures = Vec::new();
        for pa in [0.25f32, 0.5, 0.9, 0.999, 1.0, 1.001, 1.1, 1.5, 3.0] {
            for &(w, h) in &[(1, 1), (720, 480), (720, 576), (1919, 1081), (3840, 2160)] {
                let size = Size::new(w, h);
                let (par, out) = correct_monitor_aspect(SCREEN, 0.0, pa, size);
                if out.width < w || out.height < h {
                    failures.push(format!("pa {pa}: {size:?} -> {out:?}"));
                }
                if par < 1.0 && out.width != w {
                    failures.push(format!("pa {pa}: width changed with par {par}"));
                }
                if par >= 1.0 && out.height != h {
                    failures.push(format!("pa {pa}: height changed with par {par}"));
                }
            }
        }
        assert!(failures.is_empty(), "{failures:#?}");
    }
}
