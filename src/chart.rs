//! Chart rendering for the attenuation curves.
//!
//! Draws both curves, the mute band, reference lines and annotations into a
//! PNG bitmap.

use std::fmt::Display;
use std::path::Path;

use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters::style::{FontDesc, FontStyle};
use thiserror::Error;

use crate::curve::CurveSet;

const FONT: &str = "sans-serif";

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("failed to draw chart: {0}")]
    Drawing(String),
}

impl ChartError {
    fn drawing(err: impl Display) -> Self {
        Self::Drawing(err.to_string())
    }
}

/// Where an annotation's arrow points to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnnotationTarget {
    /// Fixed point in chart coordinates.
    Point(f32, f32),
    /// Knee of the default curve, at the given dB value.
    Knee(f32),
}

/// Text with an arrow pointing at a chart location.
#[derive(Debug, Clone)]
pub struct Annotation {
    pub lines: &'static [&'static str],
    pub target: AnnotationTarget,
    /// Bottom center of the text block, in chart coordinates.
    pub text_at: (f32, f32),
    pub color: RGBColor,
    pub bold: bool,
}

/// Horizontal line across the plot.
#[derive(Debug, Clone, Copy)]
pub struct ReferenceLine {
    pub db: f32,
    pub color: RGBAColor,
    /// Dash and gap length in pixels.
    pub dash: u32,
    pub gap: u32,
}

/// Visual configuration of the chart.
#[derive(Debug, Clone)]
pub struct ChartStyle {
    pub width: u32,
    pub height: u32,
    /// Resolution the font sizes and arrow dimensions are given for, relative
    /// to 100 DPI. The bitmap size is set by `width` and `height` alone.
    pub dpi: u32,
    pub x_range: (f32, f32),
    pub y_range: (f32, f32),
    pub x_labels: usize,
    pub y_labels: usize,
    pub title: &'static str,
    pub x_desc: &'static str,
    pub y_desc: &'static str,
    pub default_label: &'static str,
    pub traditional_label: &'static str,
    pub default_color: RGBColor,
    pub traditional_color: RGBColor,
    pub line_width: u32,
    pub mute_band: (f32, f32),
    pub mute_fill: RGBColor,
    pub mute_text_color: RGBColor,
    pub reference_lines: Vec<ReferenceLine>,
    pub annotations: Vec<Annotation>,
    /// Legend position relative to the plotting area, in pixels.
    pub legend_at: (i32, i32),
}

impl Default for ChartStyle {
    fn default() -> Self {
        let default_color = RGBColor(0xE6, 0x39, 0x46);
        let traditional_color = RGBColor(0x1D, 0x35, 0x57);
        let mute_text_color = RGBColor(0xC0, 0x39, 0x2B);
        let grey = RGBColor(0x55, 0x55, 0x55);

        Self {
            width: 1024,
            height: 800,
            dpi: 100,
            x_range: (-0.02, 1.02),
            y_range: (-68.0, 2.0),
            x_labels: 11,
            y_labels: 8,
            title: "Remote Volume Control \u{2014} Attenuation vs. Knob Position",
            x_desc: "RVC Position   (0.0 = Fully CCW  \u{2192}  1.0 = Fully CW)",
            y_desc: "Attenuation (dB)",
            default_label: "Ladybug Mode (with Mute)",
            traditional_label: "Traditional MA-220 Mode",
            default_color,
            traditional_color,
            line_width: 3,
            mute_band: (-68.0, -63.0),
            mute_fill: RGBColor(0xFF, 0xE0, 0xE0),
            mute_text_color,
            reference_lines: vec![
                ReferenceLine {
                    db: 0.0,
                    color: RGBColor(0x80, 0x80, 0x80).mix(0.5),
                    dash: 10,
                    gap: 6,
                },
                ReferenceLine {
                    db: -12.0,
                    color: traditional_color.mix(0.4),
                    dash: 2,
                    gap: 4,
                },
                ReferenceLine {
                    db: -14.0,
                    color: default_color.mix(0.4),
                    dash: 2,
                    gap: 4,
                },
            ],
            annotations: vec![
                Annotation {
                    lines: &["Knee: \u{2212}14 dB", "(3/4 of pot travel)"],
                    target: AnnotationTarget::Knee(-13.0),
                    text_at: (0.30, -22.0),
                    color: default_color,
                    bold: true,
                },
                Annotation {
                    lines: &["Mute threshold", "(\u{2212}48 dB \u{2192} \u{2212}64 dB)"],
                    target: AnnotationTarget::Point(0.065, -50.0),
                    text_at: (0.20, -52.0),
                    color: mute_text_color,
                    bold: true,
                },
                Annotation {
                    lines: &["Max: \u{2212}12 dB"],
                    target: AnnotationTarget::Point(0.0, -12.0),
                    text_at: (0.12, -4.5),
                    color: traditional_color,
                    bold: true,
                },
                Annotation {
                    lines: &["0 dB (both modes)"],
                    target: AnnotationTarget::Point(0.96, 0.0),
                    text_at: (0.80, -7.0),
                    color: grey,
                    bold: false,
                },
            ],
            legend_at: (330, 300),
        }
    }
}

impl ChartStyle {
    /// Scales a length given at 100 DPI to the configured resolution.
    pub fn scaled(&self, size: f64) -> f64 {
        size * self.dpi as f64 / 100.0
    }

    /// Font of a given point size at 100 DPI.
    ///
    /// Bold is resolved through the system font database and falls back to the
    /// regular face when no bold variant of the family is installed.
    fn font(&self, size: f64, bold: bool) -> FontDesc<'static> {
        let font = (FONT, self.scaled(size)).into_font();
        if bold {
            font.style(FontStyle::Bold)
        } else {
            font
        }
    }
}

/// Bounding box of an annotation's text block, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextBox {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl TextBox {
    /// Box of `size` whose bottom center is at `anchor`.
    pub fn above(anchor: (i32, i32), size: (i32, i32)) -> Self {
        let (x, y) = anchor;
        let (width, height) = size;
        Self {
            left: x - width / 2,
            top: y - height,
            right: x + width - width / 2,
            bottom: y,
        }
    }

    pub fn contains(&self, point: (i32, i32)) -> bool {
        (self.left..=self.right).contains(&point.0) && (self.top..=self.bottom).contains(&point.1)
    }
}

/// Start of an annotation arrow, `gap` pixels outside the side of `text`
/// that faces `target`.
pub fn arrow_tail(text: &TextBox, target: (i32, i32), gap: i32) -> (i32, i32) {
    let center_x = (text.left + text.right) / 2;
    let center_y = (text.top + text.bottom) / 2;

    if target.1 < text.top {
        (center_x, text.top - gap)
    } else if target.1 > text.bottom {
        (center_x, text.bottom + gap)
    } else if target.0 < text.left {
        (text.left - gap, center_y)
    } else {
        (text.right + gap, center_y)
    }
}

/// Triangle of an arrowhead with its tip at `tip`, pointing away from `tail`.
pub fn arrow_head(tail: (i32, i32), tip: (i32, i32), length: f64, half_width: f64) -> [(i32, i32); 3] {
    let dx = (tip.0 - tail.0) as f64;
    let dy = (tip.1 - tail.1) as f64;
    let norm = dx.hypot(dy);
    if norm == 0.0 {
        return [tip; 3];
    }

    let (ux, uy) = (dx / norm, dy / norm);
    let base_x = tip.0 as f64 - ux * length;
    let base_y = tip.1 as f64 - uy * length;

    [
        tip,
        (
            (base_x - uy * half_width).round() as i32,
            (base_y + ux * half_width).round() as i32,
        ),
        (
            (base_x + uy * half_width).round() as i32,
            (base_y - ux * half_width).round() as i32,
        ),
    ]
}

/// Renders the curves into a PNG file at `path`.
pub fn render(curves: &CurveSet, style: &ChartStyle, path: &Path) -> Result<(), ChartError> {
    log::debug!(
        "Rendering {}x{} chart to {}",
        style.width,
        style.height,
        path.display()
    );

    let root = BitMapBackend::new(path, (style.width, style.height)).into_drawing_area();
    root.fill(&WHITE).map_err(ChartError::drawing)?;

    let (x_min, x_max) = style.x_range;
    let (y_min, y_max) = style.y_range;

    let mut chart = ChartBuilder::on(&root)
        .caption(style.title, style.font(24.0, true))
        .margin(20)
        .x_label_area_size(60)
        .y_label_area_size(70)
        .build_cartesian_2d(x_min..x_max, y_min..y_max)
        .map_err(ChartError::drawing)?;

    // Mute band goes underneath the grid.
    let (mute_low, mute_high) = style.mute_band;
    chart
        .draw_series(std::iter::once(Rectangle::new(
            [(x_min, mute_low), (x_max, mute_high)],
            style.mute_fill.filled(),
        )))
        .map_err(ChartError::drawing)?;

    chart
        .configure_mesh()
        .x_desc(style.x_desc)
        .y_desc(style.y_desc)
        .axis_desc_style(style.font(16.0, true))
        .label_style(style.font(14.0, false))
        .x_labels(style.x_labels)
        .y_labels(style.y_labels)
        .x_max_light_lines(1)
        .y_max_light_lines(1)
        .x_label_formatter(&|x| format!("{x:.1}"))
        .y_label_formatter(&|y| format!("{y:.0}"))
        .bold_line_style(BLACK.mix(0.30).stroke_width(1))
        .light_line_style(BLACK.mix(0.12).stroke_width(1))
        .draw()
        .map_err(ChartError::drawing)?;

    chart
        .draw_series(std::iter::once(Text::new(
            "MUTE",
            (0.5, (mute_low + mute_high) / 2.0),
            style
                .font(14.0, true)
                .color(&style.mute_text_color)
                .pos(Pos::new(HPos::Center, VPos::Center)),
        )))
        .map_err(ChartError::drawing)?;

    for line in &style.reference_lines {
        chart
            .draw_series(DashedLineSeries::new(
                [(x_min, line.db), (x_max, line.db)],
                line.dash,
                line.gap,
                line.color.stroke_width(1),
            ))
            .map_err(ChartError::drawing)?;
    }

    let width = style.line_width;

    let color = style.default_color;
    chart
        .draw_series(LineSeries::new(curves.default_mode(), color.stroke_width(width)))
        .map_err(ChartError::drawing)?
        .label(style.default_label)
        .legend(move |(x, y)| {
            PathElement::new(vec![(x, y), (x + 24, y)], color.stroke_width(width))
        });

    let color = style.traditional_color;
    chart
        .draw_series(LineSeries::new(curves.traditional(), color.stroke_width(width)))
        .map_err(ChartError::drawing)?
        .label(style.traditional_label)
        .legend(move |(x, y)| {
            PathElement::new(vec![(x, y), (x + 24, y)], color.stroke_width(width))
        });

    for annotation in &style.annotations {
        let target = match annotation.target {
            AnnotationTarget::Point(x, y) => (x, y),
            AnnotationTarget::Knee(db) => (curves.knee_position(), db),
        };

        let text_style = style
            .font(13.0, annotation.bold)
            .color(&annotation.color)
            .pos(Pos::new(HPos::Center, VPos::Bottom));
        let line_height = style.scaled(16.0) as i32;
        let lines = annotation.lines.len() as i32;

        let mut text_width = 0;
        for line in annotation.lines {
            let (width, _) = root
                .estimate_text_size(line, &text_style)
                .map_err(ChartError::drawing)?;
            text_width = text_width.max(width as i32);
        }

        let anchor = chart.backend_coord(&annotation.text_at);
        let text_box = TextBox::above(anchor, (text_width, lines * line_height));
        let tip = chart.backend_coord(&target);
        let tail = arrow_tail(&text_box, tip, style.scaled(4.0) as i32);
        let head = arrow_head(tail, tip, style.scaled(10.0), style.scaled(4.0));

        root.draw(&PathElement::new(
            vec![tail, tip],
            annotation.color.stroke_width(2),
        ))
        .map_err(ChartError::drawing)?;
        root.draw(&Polygon::new(head.to_vec(), annotation.color.filled()))
            .map_err(ChartError::drawing)?;

        chart
            .draw_series(annotation.lines.iter().enumerate().map(|(i, line)| {
                let offset = (i as i32 + 1 - lines) * line_height;
                EmptyElement::at(annotation.text_at)
                    + Text::new(line.to_string(), (0, offset), text_style.clone())
            }))
            .map_err(ChartError::drawing)?;
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::Coordinate(
            style.legend_at.0,
            style.legend_at.1,
        ))
        .label_font(style.font(14.0, false))
        .background_style(WHITE.mix(0.95).filled())
        .border_style(RGBColor(0xCC, 0xCC, 0xCC).stroke_width(1))
        .draw()
        .map_err(ChartError::drawing)?;

    root.present().map_err(ChartError::drawing)?;

    log::debug!("Chart written to {}", path.display());

    Ok(())
}
