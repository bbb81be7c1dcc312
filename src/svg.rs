//! SVG visualization of the window placement pipeline.
//!
//! Generates a vertical sequence of annotated panels, one per pipeline
//! stage: display size → aspect correction → autofit → autofit-larger →
//! centered → final window. Stages that changed nothing are skipped.
//!
//! # Example
//!
//! ```
//! use zenplace::{Rect, ScreenInfo, trace_window_geometry, svg::render_geometry_svg};
//!
//! let info = ScreenInfo::new(Rect::new(0, 0, 1920, 1080));
//! let trace = trace_window_geometry(&info, 1280, 720);
//!
//! let svg = render_geometry_svg(&info, &trace);
//! assert!(svg.starts_with("<svg"));
//! ```

use crate::geometry::{Rect, Size};
use crate::window::{GeometryTrace, ScreenInfo};

/// Maximum pixel width for any panel in the SVG output.
const MAX_PANEL_W: f64 = 320.0;
/// Maximum pixel height for any panel in the SVG output.
const MAX_PANEL_H: f64 = 200.0;
/// Vertical gap between panels.
const PANEL_GAP: f64 = 50.0;
/// Horizontal margin.
const MARGIN_X: f64 = 50.0;
/// Top margin for first panel.
const MARGIN_TOP: f64 = 30.0;
/// Height of label text area above each panel.
const LABEL_H: f64 = 22.0;

/// A single stage in the pipeline visualization.
struct Panel {
    label: String,
    annotation: String,
    body: PanelBody,
}

enum PanelBody {
    /// A bare size, before the window is placed anywhere.
    Size(Size),
    /// The screen with a window rectangle on it.
    Placement {
        screen: Rect,
        usable: Option<Rect>,
        window: Rect,
    },
}

/// Render a complete SVG document showing every stage of `trace`.
///
/// `info` must be the screen the trace was computed for.
pub fn render_geometry_svg(info: &ScreenInfo, trace: &GeometryTrace) -> String {
    let panels = build_panels(info, trace);
    render_panels(&panels)
}

fn size_label(name: &str, s: Size) -> String {
    format!("{name}  {}×{}", s.width, s.height)
}

fn build_panels(info: &ScreenInfo, trace: &GeometryTrace) -> Vec<Panel> {
    let mut panels = Vec::new();

    panels.push(Panel {
        label: size_label("Display", trace.display),
        annotation: String::new(),
        body: PanelBody::Size(trace.display),
    });

    if trace.corrected != trace.display {
        panels.push(Panel {
            label: size_label("Aspect", trace.corrected),
            annotation: format!("monitor par {:.4}", trace.result.monitor_par),
            body: PanelBody::Size(trace.corrected),
        });
    }

    if trace.autofit != trace.corrected {
        panels.push(Panel {
            label: size_label("Autofit", trace.autofit),
            annotation: String::new(),
            body: PanelBody::Size(trace.autofit),
        });
    }

    if trace.autofit_larger != trace.autofit {
        panels.push(Panel {
            label: size_label("Autofit larger", trace.autofit_larger),
            annotation: String::new(),
            body: PanelBody::Size(trace.autofit_larger),
        });
    }

    let placement = |window: Rect| PanelBody::Placement {
        screen: info.screen,
        usable: info.constrained,
        window,
    };

    let window = trace.result.window;
    if window != trace.centered {
        panels.push(Panel {
            label: String::from("Centered"),
            annotation: format!("at ({}, {})", trace.centered.x0, trace.centered.y0),
            body: placement(trace.centered),
        });
    }

    panels.push(Panel {
        label: size_label("Window", window.size()),
        annotation: format!("({}, {}) – ({}, {})", window.x0, window.y0, window.x1, window.y1),
        body: placement(window),
    });

    panels
}

/// Scale factor mapping a `w`×`h` extent into the panel box.
fn panel_scale(w: f64, h: f64) -> f64 {
    if w <= 0.0 || h <= 0.0 {
        return 1.0;
    }
    (MAX_PANEL_W / w).min(MAX_PANEL_H / h)
}

fn union(a: Rect, b: Rect) -> Rect {
    Rect::new(a.x0.min(b.x0), a.y0.min(b.y0), a.x1.max(b.x1), a.y1.max(b.y1))
}

fn push_rect(svg: &mut String, x: f64, y: f64, w: f64, h: f64, class: &str) {
    svg.push_str(&format!(
        r#"<rect x="{x:.1}" y="{y:.1}" width="{:.1}" height="{:.1}" class="{class}"/>"#,
        w.max(0.0),
        h.max(0.0)
    ));
    svg.push('\n');
}

/// Render panels into a complete SVG document.
fn render_panels(panels: &[Panel]) -> String {
    if panels.is_empty() {
        return String::from(r#"<svg xmlns="http://www.w3.org/2000/svg" width="1" height="1"/>"#);
    }

    let n = panels.len() as f64;
    let total_h = 2.0 * MARGIN_TOP + n * (LABEL_H + MAX_PANEL_H) + (n - 1.0) * PANEL_GAP;
    let total_w = MAX_PANEL_W + 2.0 * MARGIN_X;

    let mut svg = String::with_capacity(4096);
    svg.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">"#,
        total_w as u32, total_h as u32, total_w, total_h
    ));
    svg.push('\n');

    // Style — light/dark mode via prefers-color-scheme
    svg.push_str(
        r##"<style>
  text { font-family: "Consolas", "DejaVu Sans Mono", "Courier New", monospace; }
  .label { font-size: 13px; font-weight: bold; fill: #333; }
  .annotation { font-size: 11px; fill: #666; }
  .screen { fill: #e8e8e8; stroke: #999; stroke-width: 1; }
  .usable { fill: none; stroke: #999; stroke-width: 1; stroke-dasharray: 4,2; }
  .window { fill: #6ba3d6; fill-opacity: 0.85; stroke: #2c6faa; stroke-width: 1.5; }
  .arrow { stroke: #666; stroke-width: 1.5; fill: none; marker-end: url(#arrowhead); }
  .arrowhead { fill: #666; }
  @media (prefers-color-scheme: dark) {
    .label { fill: #e0e0e0; }
    .annotation { fill: #aaa; }
    .screen { fill: #2d2d2d; stroke: #555; }
    .usable { stroke: #777; }
    .window { fill: #3a72a4; stroke: #5a9fd4; }
    .arrow { stroke: #888; }
    .arrowhead { fill: #888; }
  }
</style>
<defs>
  <marker id="arrowhead" markerWidth="8" markerHeight="6" refX="8" refY="3" orient="auto">
    <polygon points="0 0, 8 3, 0 6" class="arrowhead"/>
  </marker>
</defs>
"##,
    );

    let mut y = MARGIN_TOP;
    let center_x = total_w / 2.0;

    for (i, panel) in panels.iter().enumerate() {
        svg.push_str(&format!(
            r#"<text x="{}" y="{}" class="label" text-anchor="middle">{}</text>"#,
            center_x,
            y + 14.0,
            escape_xml(&panel.label)
        ));
        svg.push('\n');
        y += LABEL_H;

        let drawn_h = match panel.body {
            PanelBody::Size(size) => {
                let (w, h) = (f64::from(size.width), f64::from(size.height));
                let scale = panel_scale(w, h);
                push_rect(&mut svg, center_x - w * scale / 2.0, y, w * scale, h * scale, "window");
                h * scale
            }
            PanelBody::Placement {
                screen,
                usable,
                window,
            } => {
                // The window may hang off the screen; frame both.
                let view = union(screen, window);
                let scale = panel_scale(f64::from(view.width()), f64::from(view.height()));
                let left = center_x - f64::from(view.width()) * scale / 2.0;
                let map = |r: Rect| {
                    (
                        left + f64::from(r.x0 - view.x0) * scale,
                        y + f64::from(r.y0 - view.y0) * scale,
                        f64::from(r.width()) * scale,
                        f64::from(r.height()) * scale,
                    )
                };

                let (sx, sy, sw, sh) = map(screen);
                push_rect(&mut svg, sx, sy, sw, sh, "screen");
                if let Some(area) = usable {
                    let (ux, uy, uw, uh) = map(area);
                    push_rect(&mut svg, ux, uy, uw, uh, "usable");
                }
                let (wx, wy, ww, wh) = map(window);
                push_rect(&mut svg, wx, wy, ww, wh, "window");
                f64::from(view.height()) * scale
            }
        };

        if !panel.annotation.is_empty() {
            svg.push_str(&format!(
                r#"<text x="{}" y="{:.1}" class="annotation" text-anchor="middle">{}</text>"#,
                center_x,
                y + drawn_h + 14.0,
                escape_xml(&panel.annotation)
            ));
            svg.push('\n');
        }

        y += MAX_PANEL_H;

        if i < panels.len() - 1 {
            svg.push_str(&format!(
                r#"<line x1="{}" y1="{:.1}" x2="{}" y2="{:.1}" class="arrow"/>"#,
                center_x,
                y + 8.0,
                center_x,
                y + PANEL_GAP - 8.0
            ));
            svg.push('\n');
            y += PANEL_GAP;
        }
    }

    svg.push_str("</svg>\n");
    svg
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
