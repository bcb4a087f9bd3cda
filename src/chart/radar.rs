//! Radar (polar) chart rendering.
//!
//! Axis `i` of an `n`-axis chart points at `-90° + i * 360° / n`, so the first
//! label sits at the top and the rest follow clockwise in label order. Values
//! are fractions of the full radius.

use std::f64::consts::PI;

use super::surface::{LinearGradient, Surface, TextAlign};
use crate::error::{DeckError, Result};

/// Labels and values paired by position. Always at least three axes.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartSpec {
    labels: Vec<String>,
    values: Vec<f64>,
}

impl ChartSpec {
    pub fn new(labels: Vec<String>, values: Vec<f64>) -> Result<Self> {
        if labels.len() != values.len() {
            return Err(DeckError::AxisMismatch {
                labels: labels.len(),
                values: values.len(),
            });
        }
        if labels.len() < 3 {
            return Err(DeckError::TooFewAxes(labels.len()));
        }
        if let Some((axis, &value)) = values
            .iter()
            .enumerate()
            .find(|(_, v)| !(0.0..=1.0).contains(*v))
        {
            return Err(DeckError::ValueOutOfRange { axis, value });
        }
        Ok(Self { labels, values })
    }

    pub fn axes(&self) -> usize {
        self.labels.len()
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LabelPlacement {
    /// Align away from the centre so labels don't clip at the canvas edge.
    AngleAware,
    Centered,
}

/// Visual parameters of a radar chart.
#[derive(Clone, Debug, PartialEq)]
pub struct RadarStyle {
    pub rings: usize,
    /// Gap between the outer ring and the shorter canvas edge.
    pub margin: f64,
    pub label_offset: f64,
    pub grid_color: &'static str,
    pub grid_width: f64,
    /// Radial spokes; `None` draws none.
    pub axis_color: Option<&'static str>,
    pub fill_start: &'static str,
    pub fill_end: &'static str,
    pub outline_color: &'static str,
    pub outline_width: f64,
    /// Vertex markers; `None` draws none.
    pub marker_radius: Option<f64>,
    pub marker_color: &'static str,
    pub label_color: &'static str,
    pub font: &'static str,
    pub label_placement: LabelPlacement,
    /// Centre labels vertically on their anchor; otherwise the canvas
    /// default (alphabetic) baseline applies.
    pub label_baseline_middle: bool,
    /// Scale fill, outline, markers and labels opacity with progress.
    pub fade_with_progress: bool,
}

impl RadarStyle {
    /// Large animated chart on the evaluation slide.
    pub fn evaluation() -> Self {
        Self {
            rings: 5,
            margin: 80.0,
            label_offset: 30.0,
            grid_color: "rgba(74,124,255,0.12)",
            grid_width: 1.0,
            axis_color: Some("rgba(74,124,255,0.08)"),
            fill_start: "rgba(74,124,255,0.25)",
            fill_end: "rgba(46,196,182,0.2)",
            outline_color: "rgba(74,124,255,0.7)",
            outline_width: 2.0,
            marker_radius: Some(4.0),
            marker_color: "#4A7CFF",
            label_color: "rgba(26,42,74,0.75)",
            font: "600 13px \"Noto Sans JP\", sans-serif",
            label_placement: LabelPlacement::AngleAware,
            label_baseline_middle: true,
            fade_with_progress: true,
        }
    }

    /// Small static chart inside the phone mock-up.
    pub fn compact() -> Self {
        Self {
            rings: 4,
            margin: 20.0,
            label_offset: 16.0,
            grid_color: "rgba(74,124,255,0.12)",
            grid_width: 0.5,
            axis_color: None,
            fill_start: "rgba(46,196,182,0.25)",
            fill_end: "rgba(74,124,255,0.2)",
            outline_color: "rgba(46,196,182,0.7)",
            outline_width: 1.5,
            marker_radius: None,
            marker_color: "#4A7CFF",
            label_color: "rgba(26,42,74,0.55)",
            font: "9px \"Noto Sans JP\", sans-serif",
            label_placement: LabelPlacement::Centered,
            label_baseline_middle: false,
            fade_with_progress: false,
        }
    }
}

/// Centre, radius and axis count of a chart on a given surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RadarLayout {
    pub cx: f64,
    pub cy: f64,
    pub radius: f64,
    pub axes: usize,
}

impl RadarLayout {
    pub fn new(width: f64, height: f64, margin: f64, axes: usize) -> Self {
        Self {
            cx: width / 2.0,
            cy: height / 2.0,
            radius: (width.min(height) / 2.0 - margin).max(0.0),
            axes,
        }
    }

    /// Angle of axis `i` in radians.
    pub fn angle(&self, i: usize) -> f64 {
        (PI * 2.0 * (i % self.axes) as f64) / self.axes as f64 - PI / 2.0
    }

    pub fn point(&self, i: usize, radius: f64) -> (f64, f64) {
        let a = self.angle(i);
        (self.cx + radius * a.cos(), self.cy + radius * a.sin())
    }

    /// Data polygon vertices, scaled by progress.
    pub fn value_points(&self, values: &[f64], progress: f64) -> Vec<(f64, f64)> {
        values
            .iter()
            .enumerate()
            .map(|(i, v)| self.point(i, self.radius * v * progress))
            .collect()
    }
}

pub fn label_align(angle: f64) -> TextAlign {
    let cos_a = angle.cos();
    if cos_a.abs() < 0.15 {
        TextAlign::Center
    } else if cos_a > 0.0 {
        TextAlign::Left
    } else {
        TextAlign::Right
    }
}

fn trace_polygon<S: Surface + ?Sized>(surface: &mut S, points: &[(f64, f64)], revisit_first: bool) {
    surface.begin_path();
    for (i, &(x, y)) in points.iter().enumerate() {
        if i == 0 {
            surface.move_to(x, y);
        } else {
            surface.line_to(x, y);
        }
    }
    if revisit_first {
        if let Some(&(x, y)) = points.first() {
            surface.line_to(x, y);
        }
    }
    surface.close_path();
}

/// Paints the whole chart. `progress` is clamped to [0, 1]; at 0 the data
/// polygon is collapsed onto the centre and (for fading styles) invisible.
pub fn draw_radar<S: Surface + ?Sized>(surface: &mut S, spec: &ChartSpec, style: &RadarStyle, progress: f64) {
    debug_assert!(spec.axes() >= 3, "radar chart needs at least 3 axes");
    let p = progress.clamp(0.0, 1.0);
    let (w, h) = surface.size();
    let layout = RadarLayout::new(w, h, style.margin, spec.axes());
    let n = layout.axes;
    let r = layout.radius;
    let fade = if style.fade_with_progress { p } else { 1.0 };

    surface.clear();

    // grid
    surface.set_stroke_color(style.grid_color);
    surface.set_line_width(style.grid_width);
    for level in 1..=style.rings {
        let lr = r * level as f64 / style.rings as f64;
        let ring: Vec<(f64, f64)> = (0..n).map(|i| layout.point(i, lr)).collect();
        trace_polygon(surface, &ring, true);
        surface.stroke();
    }

    if let Some(axis_color) = style.axis_color {
        surface.set_stroke_color(axis_color);
        for i in 0..n {
            let (x, y) = layout.point(i, r);
            surface.begin_path();
            surface.move_to(layout.cx, layout.cy);
            surface.line_to(x, y);
            surface.stroke();
        }
    }

    let vertices = layout.value_points(spec.values(), p);

    surface.set_fill_gradient(&LinearGradient {
        from: (layout.cx - r, layout.cy - r),
        to: (layout.cx + r, layout.cy + r),
        start_color: style.fill_start,
        end_color: style.fill_end,
    });
    surface.set_global_alpha(fade);
    trace_polygon(surface, &vertices, false);
    surface.fill();

    surface.set_stroke_color(style.outline_color);
    surface.set_line_width(style.outline_width);
    trace_polygon(surface, &vertices, true);
    surface.stroke();
    surface.set_global_alpha(1.0);

    if let Some(marker_radius) = style.marker_radius {
        for &(x, y) in &vertices {
            surface.begin_path();
            surface.circle(x, y, marker_radius);
            surface.set_fill_color(style.marker_color);
            surface.set_global_alpha(fade);
            surface.fill();
            surface.set_stroke_color("#fff");
            surface.set_line_width(1.5);
            surface.stroke();
            surface.set_global_alpha(1.0);
        }
    }

    surface.set_fill_color(style.label_color);
    surface.set_font(style.font);
    if style.label_baseline_middle {
        surface.set_text_baseline_middle();
    }
    for (i, label) in spec.labels().iter().enumerate() {
        let a = layout.angle(i);
        let (x, y) = layout.point(i, r + style.label_offset);
        let align = match style.label_placement {
            LabelPlacement::AngleAware => label_align(a),
            LabelPlacement::Centered => TextAlign::Center,
        };
        surface.set_text_align(align);
        surface.set_global_alpha(fade);
        surface.fill_text(label, x, y);
        surface.set_global_alpha(1.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::surface::recording::{Op, RecordingSurface};

    fn spec(values: &[f64]) -> ChartSpec {
        let labels = (0..values.len()).map(|i| format!("axis-{i}")).collect();
        ChartSpec::new(labels, values.to_vec()).unwrap()
    }

    fn close(a: (f64, f64), b: (f64, f64)) -> bool {
        (a.0 - b.0).abs() < 1e-9 && (a.1 - b.1).abs() < 1e-9
    }

    #[test]
    fn test_spec_rejects_too_few_axes() {
        let err = ChartSpec::new(vec!["a".into(), "b".into()], vec![0.5, 0.5]).unwrap_err();
        assert!(matches!(err, DeckError::TooFewAxes(2)));
    }

    #[test]
    fn test_spec_rejects_mismatch_and_range() {
        let labels: Vec<String> = vec!["a".into(), "b".into(), "c".into()];
        assert!(matches!(
            ChartSpec::new(labels.clone(), vec![0.5, 0.5]),
            Err(DeckError::AxisMismatch { labels: 3, values: 2 })
        ));
        assert!(matches!(
            ChartSpec::new(labels, vec![0.5, 1.2, 0.1]),
            Err(DeckError::ValueOutOfRange { axis: 1, .. })
        ));
    }

    #[test]
    fn test_axis_angles_start_at_top() {
        let layout = RadarLayout::new(500.0, 400.0, 80.0, 3);
        let deg: Vec<f64> = (0..3).map(|i| layout.angle(i).to_degrees()).collect();
        assert!((deg[0] + 90.0).abs() < 1e-9);
        assert!((deg[1] - 30.0).abs() < 1e-9);
        assert!((deg[2] - 150.0).abs() < 1e-9);
    }

    #[test]
    fn test_full_values_land_on_radius() {
        let style = RadarStyle::evaluation();
        let chart = spec(&[1.0, 1.0, 1.0]);
        let mut surface = RecordingSurface::new(500.0, 400.0);
        draw_radar(&mut surface, &chart, &style, 1.0);

        let layout = RadarLayout::new(500.0, 400.0, style.margin, 3);
        assert_eq!(layout.radius, 120.0);
        let fills: Vec<_> = surface
            .paths_ending_with(&Op::Fill)
            .into_iter()
            .filter(|p| !p.is_empty())
            .collect();
        assert_eq!(fills.len(), 1);
        let polygon = &fills[0];
        assert_eq!(polygon.len(), 3);
        for (i, &(x, y)) in polygon.iter().enumerate() {
            let dist = ((x - layout.cx).powi(2) + (y - layout.cy).powi(2)).sqrt();
            assert!((dist - layout.radius).abs() < 1e-9);
            let a = (y - layout.cy).atan2(x - layout.cx);
            assert!((a - layout.angle(i)).abs() < 1e-9);
        }
    }

    #[test]
    fn test_zero_progress_collapses_and_hides() {
        let mut surface = RecordingSurface::new(500.0, 400.0);
        draw_radar(&mut surface, &spec(&[0.8, 0.6, 0.9, 0.4]), &RadarStyle::evaluation(), 0.0);
        let fills = surface.paths_ending_with(&Op::Fill);
        let polygon = fills.iter().find(|p| !p.is_empty()).unwrap();
        assert!(polygon.iter().all(|&pt| close(pt, (250.0, 200.0))));
        let gradient_at = surface
            .ops
            .iter()
            .position(|op| matches!(op, Op::FillGradient(_)))
            .unwrap();
        assert_eq!(surface.ops[gradient_at + 1], Op::Alpha(0.0));
    }

    #[test]
    fn test_progress_is_clamped() {
        let layout = RadarLayout::new(500.0, 400.0, 80.0, 3);
        let mut over = RecordingSurface::new(500.0, 400.0);
        draw_radar(&mut over, &spec(&[1.0, 0.5, 0.5]), &RadarStyle::evaluation(), 3.0);
        let polygon = over
            .paths_ending_with(&Op::Fill)
            .into_iter()
            .find(|p| !p.is_empty())
            .unwrap();
        assert!(close(polygon[0], layout.point(0, 120.0)));
    }

    #[test]
    fn test_grid_rings_and_markers() {
        let style = RadarStyle::evaluation();
        let mut surface = RecordingSurface::new(500.0, 400.0);
        draw_radar(&mut surface, &spec(&[0.5, 0.5, 0.5, 0.5, 0.5]), &style, 1.0);
        let strokes = surface.paths_ending_with(&Op::Stroke);
        // 5 rings (6 points, first revisited), 5 spokes, 1 outline, 5 empty marker outlines
        let rings = strokes.iter().filter(|p| p.len() == 6).count();
        assert_eq!(rings, 5 + 1);
        let spokes = strokes.iter().filter(|p| p.len() == 2).count();
        assert_eq!(spokes, 5);
        let markers = surface.ops.iter().filter(|op| matches!(op, Op::Circle(_, _, r) if *r == 4.0)).count();
        assert_eq!(markers, 5);
    }

    #[test]
    fn test_label_alignment_by_angle() {
        let layout = RadarLayout::new(500.0, 400.0, 80.0, 5);
        assert_eq!(label_align(layout.angle(0)), TextAlign::Center);
        assert_eq!(label_align(layout.angle(1)), TextAlign::Left);
        assert_eq!(label_align(layout.angle(2)), TextAlign::Left);
        assert_eq!(label_align(layout.angle(3)), TextAlign::Right);
        assert_eq!(label_align(layout.angle(4)), TextAlign::Right);
    }

    #[test]
    fn test_compact_style_is_static_and_centered() {
        let mut surface = RecordingSurface::new(160.0, 160.0);
        draw_radar(&mut surface, &spec(&[0.82, 0.75, 0.88, 0.7, 0.85]), &RadarStyle::compact(), 1.0);
        assert!(!surface.ops.iter().any(|op| matches!(op, Op::Circle(..))));
        let aligns: Vec<_> = surface
            .ops
            .iter()
            .filter_map(|op| match op {
                Op::Align(a) => Some(*a),
                _ => None,
            })
            .collect();
        assert_eq!(aligns.len(), 5);
        assert!(aligns.iter().all(|a| *a == TextAlign::Center));
        let rings = surface
            .paths_ending_with(&Op::Stroke)
            .into_iter()
            .filter(|p| p.len() == 6)
            .count();
        assert_eq!(rings, 4 + 1);
        assert!(!surface.ops.contains(&Op::BaselineMiddle));
    }

    #[test]
    fn test_half_progress_labels_gradient_and_alpha() {
        let style = RadarStyle::evaluation();
        let mut surface = RecordingSurface::new(500.0, 400.0);
        draw_radar(&mut surface, &spec(&[0.8, 0.6, 0.9, 0.4, 0.7]), &style, 0.5);
        let layout = RadarLayout::new(500.0, 400.0, style.margin, 5);
        let r = layout.radius;

        let texts: Vec<(f64, f64)> = surface
            .ops
            .iter()
            .filter_map(|op| match op {
                Op::Text(_, x, y) => Some((*x, *y)),
                _ => None,
            })
            .collect();
        assert_eq!(texts.len(), 5);
        for (i, &pt) in texts.iter().enumerate() {
            let dist = ((pt.0 - layout.cx).powi(2) + (pt.1 - layout.cy).powi(2)).sqrt();
            assert!((dist - (r + 30.0)).abs() < 1e-9);
            assert!(close(pt, layout.point(i, r + style.label_offset)));
        }
        assert!(surface.ops.contains(&Op::BaselineMiddle));

        let gradient = surface
            .ops
            .iter()
            .find_map(|op| match op {
                Op::FillGradient(g) => Some(g.clone()),
                _ => None,
            })
            .unwrap();
        assert!(close(gradient.from, (layout.cx - r, layout.cy - r)));
        assert!(close(gradient.to, (layout.cx + r, layout.cy + r)));

        // data layers (fill, outline, markers, labels) draw at alpha p; the grid at full
        let mut alpha = 1.0;
        let mut data_layer = false;
        for op in &surface.ops {
            match op {
                Op::Alpha(a) => alpha = *a,
                Op::FillGradient(_) => data_layer = true,
                Op::Fill | Op::Stroke | Op::Text(..) if data_layer => assert_eq!(alpha, 0.5),
                Op::Stroke => assert_eq!(alpha, 1.0),
                _ => {}
            }
        }
    }
}
