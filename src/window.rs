//! Window geometry calculation: the full placement pipeline.
//!
//! Given the screen, the placement options, and the video display size,
//! compute the window rectangle and the monitor pixel aspect ratio that the
//! video scaler must use. The pipeline runs in a fixed order:
//!
//! 1. monitor pixel aspect correction
//! 2. autofit (upscaling allowed)
//! 3. autofit-larger (shrink only)
//! 4. center on the screen
//! 5. explicit geometry override
//!
//! Re-run it from scratch whenever the video size, the screen, or the
//! options change.
//!
//! # Example
//!
//! ```
//! use zenplace::{GeometrySpec, Length, Rect, ScreenInfo, ScreenOptions, calc_window_geometry};
//!
//! let info = ScreenInfo::new(Rect::new(0, 0, 1920, 1080)).options(
//!     ScreenOptions::new()
//!         .autofit_larger(GeometrySpec::with_size(Length::Percent(50), Length::Percent(50))),
//! );
//!
//! let geo = calc_window_geometry(&info, 3840, 2160);
//! assert_eq!(geo.window, Rect::new(480, 270, 1440, 810));
//! assert_eq!(geo.monitor_par, 1.0);
//! ```

use core::fmt;

use crate::aspect::correct_monitor_aspect;
use crate::autofit::{apply_autofit, fit_inside};
use crate::geometry::{GeometrySpec, Rect, Size};

/// Placement options for one calculation.
///
/// Built once per calculation and passed by value; nothing here is global.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ScreenOptions {
    /// Explicit window geometry, applied last.
    pub geometry: GeometrySpec,
    /// Autofit box; the window is scaled up or down to fit it.
    pub autofit: GeometrySpec,
    /// Autofit box that only ever shrinks the window.
    pub autofit_larger: GeometrySpec,
    /// Physical screen aspect ratio (width / height). `0.0` = unset.
    pub force_monitor_aspect: f32,
    /// Aspect ratio of one physical pixel (width / height). `1.0` = square.
    pub monitor_pixel_aspect: f32,
}

impl Default for ScreenOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl ScreenOptions {
    /// No geometry, no autofit, square pixels.
    pub const fn new() -> Self {
        Self {
            geometry: GeometrySpec::NONE,
            autofit: GeometrySpec::NONE,
            autofit_larger: GeometrySpec::NONE,
            force_monitor_aspect: 0.0,
            monitor_pixel_aspect: 1.0,
        }
    }

    /// Set the explicit window geometry.
    pub fn geometry(mut self, spec: GeometrySpec) -> Self {
        self.geometry = spec;
        self
    }

    /// Set the autofit box (may upscale).
    pub fn autofit(mut self, spec: GeometrySpec) -> Self {
        self.autofit = spec;
        self
    }

    /// Set the shrink-only autofit box.
    pub fn autofit_larger(mut self, spec: GeometrySpec) -> Self {
        self.autofit_larger = spec;
        self
    }

    /// Force the physical screen aspect ratio.
    pub fn force_monitor_aspect(mut self, aspect: f32) -> Self {
        self.force_monitor_aspect = aspect;
        self
    }

    /// Set the physical pixel aspect ratio.
    pub fn monitor_pixel_aspect(mut self, aspect: f32) -> Self {
        self.monitor_pixel_aspect = aspect;
        self
    }
}

/// The screen a window is placed on, with the options for this placement.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ScreenInfo {
    /// Full screen rectangle.
    pub screen: Rect,
    /// Usable part of the screen (e.g. excluding panels), if known.
    pub constrained: Option<Rect>,
    pub options: ScreenOptions,
}

impl ScreenInfo {
    /// Screen with default options and no constrained area.
    pub const fn new(screen: Rect) -> Self {
        Self {
            screen,
            constrained: None,
            options: ScreenOptions::new(),
        }
    }

    /// Set the usable sub-rectangle.
    pub fn constrained(mut self, area: Rect) -> Self {
        self.constrained = Some(area);
        self
    }

    /// Set the placement options.
    pub fn options(mut self, options: ScreenOptions) -> Self {
        self.options = options;
        self
    }

    /// The constrained area if present, otherwise the whole screen.
    pub fn usable_area(&self) -> Rect {
        self.constrained.unwrap_or(self.screen)
    }
}

/// Final window placement.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ResolvedGeometry {
    /// Window rectangle in screen coordinates.
    pub window: Rect,
    /// Monitor pixel aspect ratio applied to the display size.
    pub monitor_par: f32,
}

impl ResolvedGeometry {
    /// Keep the window inside `area`.
    ///
    /// A window larger than `area` is first scaled down with its aspect
    /// ratio preserved, then the window is shifted until it lies fully
    /// inside. A degenerate `area` leaves the geometry unchanged.
    pub fn constrained_to(self, area: Rect) -> Self {
        let avail = area.size();
        if !avail.is_positive() {
            return self;
        }

        let mut size = self.window.size();
        if !size.fits_within(avail) {
            size = fit_inside(size, avail);
        }

        // Near edge wins when the window still does not fit.
        let x0 = self.window.x0.min(area.x1.saturating_sub(size.width)).max(area.x0);
        let y0 = self.window.y0.min(area.y1.saturating_sub(size.height)).max(area.y0);
        Self {
            window: Rect::from_origin_size(x0, y0, size),
            ..self
        }
    }
}

/// Every intermediate stage of a window geometry calculation.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GeometryTrace {
    /// Video display size as passed in.
    pub display: Size,
    /// After monitor pixel aspect correction.
    pub corrected: Size,
    /// After the autofit pass.
    pub autofit: Size,
    /// After the shrink-only autofit pass.
    pub autofit_larger: Size,
    /// Window centered on the screen, before the explicit geometry.
    pub centered: Rect,
    pub result: ResolvedGeometry,
}

/// Reasons [`try_calc_window_geometry`] refuses its input.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GeometryError {
    /// Screen rectangle has zero or negative width or height.
    ZeroScreenDimension,
    /// Display size has zero or negative width or height.
    ZeroDisplayDimension,
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroScreenDimension => f.write_str("screen has a zero dimension"),
            Self::ZeroDisplayDimension => f.write_str("display size has a zero dimension"),
        }
    }
}

impl core::error::Error for GeometryError {}

/// Compute the window rectangle for a `display_w`×`display_h` video.
///
/// Total: degenerate sizes skip the adjustments that would divide by zero.
/// Use [`try_calc_window_geometry`] to reject them instead.
pub fn calc_window_geometry(info: &ScreenInfo, display_w: i32, display_h: i32) -> ResolvedGeometry {
    trace_window_geometry(info, display_w, display_h).result
}

/// Like [`calc_window_geometry`], but rejects non-positive screen or display sizes.
pub fn try_calc_window_geometry(
    info: &ScreenInfo,
    display_w: i32,
    display_h: i32,
) -> Result<ResolvedGeometry, GeometryError> {
    if !info.screen.size().is_positive() {
        return Err(GeometryError::ZeroScreenDimension);
    }
    if display_w <= 0 || display_h <= 0 {
        return Err(GeometryError::ZeroDisplayDimension);
    }
    Ok(calc_window_geometry(info, display_w, display_h))
}

/// Run the placement pipeline and keep every intermediate stage.
pub fn trace_window_geometry(info: &ScreenInfo, display_w: i32, display_h: i32) -> GeometryTrace {
    let opts = &info.options;
    let scr = info.screen;
    let scr_size = scr.size();
    let display = Size::new(display_w, display_h);

    let (monitor_par, corrected) = correct_monitor_aspect(
        scr_size,
        opts.force_monitor_aspect,
        opts.monitor_pixel_aspect,
        display,
    );
    crate::trace_stage!(
        monitor_par = f64::from(monitor_par),
        width = corrected.width,
        height = corrected.height,
        "monitor aspect"
    );

    let autofit = apply_autofit(corrected, scr_size, &opts.autofit, true);
    crate::trace_stage!(width = autofit.width, height = autofit.height, "autofit");

    let autofit_larger = apply_autofit(autofit, scr_size, &opts.autofit_larger, false);
    crate::trace_stage!(
        width = autofit_larger.width,
        height = autofit_larger.height,
        "autofit-larger"
    );

    let centered = Rect::from_origin_size(
        scr.x0 + (scr_size.width - autofit_larger.width) / 2,
        scr.y0 + (scr_size.height - autofit_larger.height) / 2,
        autofit_larger,
    );
    crate::trace_stage!(x0 = centered.x0, y0 = centered.y0, "centered");

    let window = opts.geometry.apply(scr_size, centered);
    crate::trace_stage!(
        x0 = window.x0,
        y0 = window.y0,
        x1 = window.x1,
        y1 = window.y1,
        "window geometry"
    );

    GeometryTrace {
        display,
        corrected,
        autofit,
        autofit_larger,
        centered,
        result: ResolvedGeometry {
            window,
            monitor_par,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Length, Position};

    const FULL_HD: Rect = Rect::new(0, 0, 1920, 1080);

    fn with_opts(opts: ScreenOptions) -> ScreenInfo {
        ScreenInfo::new(FULL_HD).options(opts)
    }

    // ── pipeline ────────────────────────────────────────────────────────

    #[test]
    fn default_centers_unmodified() {
        let geo = calc_window_geometry(&ScreenInfo::new(FULL_HD), 1280, 720);
        assert_eq!(geo.window, Rect::new(320, 180, 1600, 900));
        assert_eq!(geo.monitor_par, 1.0);
    }

    #[test]
    fn centering_respects_screen_origin() {
        let info = ScreenInfo::new(Rect::new(1920, 0, 3200, 1024));
        let geo = calc_window_geometry(&info, 640, 480);
        assert_eq!(geo.window, Rect::new(1920 + 320, 272, 1920 + 960, 752));
    }

    #[test]
    fn odd_free_space_truncates() {
        let geo = calc_window_geometry(&ScreenInfo::new(FULL_HD), 1279, 719);
        assert_eq!(geo.window.x0, 320);
        assert_eq!(geo.window.y0, 180);
    }

    #[test]
    fn window_larger_than_screen_goes_negative() {
        let geo = calc_window_geometry(&ScreenInfo::new(FULL_HD), 3840, 2160);
        assert_eq!(geo.window, Rect::new(-960, -540, 2880, 1620));
    }

    #[test]
    fn explicit_percent_matches_centering() {
        let opts = ScreenOptions::new()
            .geometry(GeometrySpec::with_position(Position::Percent(50), Position::Percent(50)));
        let geo = calc_window_geometry(&with_opts(opts), 1280, 720);
        assert_eq!(geo.window, Rect::new(320, 180, 1600, 900));
    }

    #[test]
    fn explicit_far_edge() {
        let opts = ScreenOptions::new().geometry(
            GeometrySpec::with_size(Length::Pixels(800), Length::Pixels(450))
                .at(Position::FromFar(10), Position::FromFar(10)),
        );
        let geo = calc_window_geometry(&with_opts(opts), 1280, 720);
        assert_eq!(geo.window, Rect::new(1110, 620, 1910, 1070));
    }

    #[test]
    fn explicit_size_keeps_centered_origin() {
        // Size override keeps the centered origin of the pre-override window.
        let opts = ScreenOptions::new().geometry(GeometrySpec::width_only(Length::Pixels(640)));
        let geo = calc_window_geometry(&with_opts(opts), 1280, 720);
        assert_eq!(geo.window, Rect::new(320, 180, 960, 540));
    }

    #[test]
    fn autofit_runs_before_autofit_larger() {
        // autofit grows 640x360 to 1280x720, autofit-larger then caps at 50%.
        let opts = ScreenOptions::new()
            .autofit(GeometrySpec::width_only(Length::Pixels(1280)))
            .autofit_larger(GeometrySpec::with_size(Length::Percent(50), Length::Percent(50)));
        let trace = trace_window_geometry(&with_opts(opts), 640, 360);
        assert_eq!(trace.autofit, Size::new(1280, 720));
        assert_eq!(trace.autofit_larger, Size::new(960, 540));
        assert_eq!(trace.result.window, Rect::new(480, 270, 1440, 810));
    }

    #[test]
    fn autofit_larger_never_upscales() {
        let opts = ScreenOptions::new()
            .autofit_larger(GeometrySpec::with_size(Length::Percent(90), Length::Percent(90)));
        let geo = calc_window_geometry(&with_opts(opts), 640, 360);
        assert_eq!(geo.window.size(), Size::new(640, 360));
    }

    #[test]
    fn pixel_aspect_feeds_autofit() {
        let opts = ScreenOptions::new()
            .monitor_pixel_aspect(2.0)
            .autofit_larger(GeometrySpec::with_size(Length::Pixels(1000), Length::Pixels(1000)));
        let trace = trace_window_geometry(&with_opts(opts), 1280, 720);
        assert_eq!(trace.corrected, Size::new(1280, 1440));
        assert_eq!(trace.autofit_larger, Size::new(888, 1000));
        assert_eq!(trace.result.monitor_par, 0.5);
    }

    #[test]
    fn trace_records_stages() {
        let trace = trace_window_geometry(&ScreenInfo::new(FULL_HD), 1280, 720);
        assert_eq!(trace.display, Size::new(1280, 720));
        assert_eq!(trace.corrected, trace.display);
        assert_eq!(trace.autofit, trace.display);
        assert_eq!(trace.centered, trace.result.window);
    }

    #[test]
    fn zero_screen_is_total() {
        let info = ScreenInfo::new(Rect::new(0, 0, 0, 0));
        let geo = calc_window_geometry(&info, 1280, 720);
        assert_eq!(geo.window, Rect::new(-640, -360, 640, 360));
    }

    // ── try_calc_window_geometry ────────────────────────────────────────

    #[test]
    fn try_rejects_degenerate_input() {
        let bad_screen = ScreenInfo::new(Rect::new(10, 10, 10, 500));
        assert_eq!(
            try_calc_window_geometry(&bad_screen, 1280, 720),
            Err(GeometryError::ZeroScreenDimension)
        );
        assert_eq!(
            try_calc_window_geometry(&ScreenInfo::new(FULL_HD), 1280, 0),
            Err(GeometryError::ZeroDisplayDimension)
        );
        assert!(try_calc_window_geometry(&ScreenInfo::new(FULL_HD), 1280, 720).is_ok());
    }

    #[test]
    fn error_display() {
        assert_eq!(
            GeometryError::ZeroDisplayDimension.to_string(),
            "display size has a zero dimension"
        );
    }

    // ── constrained_to ──────────────────────────────────────────────────

    #[test]
    fn usable_area_defaults_to_screen() {
        let info = ScreenInfo::new(FULL_HD);
        assert_eq!(info.usable_area(), FULL_HD);
        let panel = Rect::new(0, 0, 1920, 1040);
        assert_eq!(info.constrained(panel).usable_area(), panel);
    }

    #[test]
    fn constrain_shifts_inside() {
        let geo = ResolvedGeometry {
            window: Rect::new(1500, 900, 2000, 1200),
            monitor_par: 1.0,
        };
        let out = geo.constrained_to(Rect::new(0, 0, 1920, 1040));
        assert_eq!(out.window, Rect::new(1420, 740, 1920, 1040));
    }

    #[test]
    fn constrain_shrinks_oversized() {
        let geo = calc_window_geometry(&ScreenInfo::new(FULL_HD), 3840, 2160);
        let out = geo.constrained_to(Rect::new(0, 40, 1920, 1080));
        // 1040 tall area: height constrains, width 1040 * 16/9 = 1848.
        assert_eq!(out.window.size(), Size::new(1848, 1040));
        assert!(Rect::new(0, 40, 1920, 1080).contains(&out.window));
    }

    #[test]
    fn constrain_keeps_fitting_window() {
        let geo = calc_window_geometry(&ScreenInfo::new(FULL_HD), 1280, 720);
        assert_eq!(geo.constrained_to(FULL_HD), geo);
    }
}
