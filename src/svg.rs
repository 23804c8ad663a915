//! A [`PlotBackend`] that writes figures as standalone SVG documents.

use crate::{Color, Curve, Figure, PlotBackend, Result};
use core::fmt::{self, Display, Formatter};
use lerp::Lerp;
use std::io::Write;

const MARGIN_LEFT: f64 = 80.0;
const MARGIN_RIGHT: f64 = 40.0;
const MARGIN_TOP: f64 = 60.0;
/// Room between the axes and the legend for tick and axis labels.
const AXIS_LABEL_GAP: f64 = 56.0;
/// Fraction of the data span added on each side of the axes.
const DATA_MARGIN: f64 = 0.05;

/// Writes each figure it draws to `W` as an SVG document.
///
/// # Examples
/// ```
/// use hermite_easing::{render_default, SvgBackend};
///
/// let mut backend = SvgBackend::new(Vec::new());
/// render_default(&mut backend).unwrap();
/// let svg = String::from_utf8(backend.into_inner()).unwrap();
/// assert!(svg.contains("Cubic Hermite Spline Easing Curves"));
/// ```
#[derive(Debug)]
pub struct SvgBackend<W: Write> {
    writer: W,
}

impl<W: Write> SvgBackend<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> PlotBackend for SvgBackend<W> {
    fn draw(&mut self, figure: &Figure) -> Result<()> {
        write!(self.writer, "{}", SvgDocument::from_figure(figure))?;
        self.writer.flush()?;
        Ok(())
    }
}

/// Maps data coordinates into the pixel box of the axes.
#[derive(Clone, Copy, Debug)]
struct Axes {
    left: f64,
    right: f64,
    top: f64,
    bottom: f64,
    x_min: f64,
    x_max: f64,
    y_min: f64,
    y_max: f64,
}

impl Axes {
    /// Lays out equal-aspect axes for `figure` in the space left over
    /// by the title, labels and a legend `legend_height` pixels tall.
    fn layout(figure: &Figure, legend_height: f64) -> Self {
        let style = &figure.style;
        let (y_lo, y_hi) = figure.y_range();
        let (x_lo, x_hi) = (0.0, 1.0);

        let pad_x = (x_hi - x_lo) * DATA_MARGIN;
        let pad_y = (y_hi - y_lo) * DATA_MARGIN;
        let (x_min, x_max) = (x_lo - pad_x, x_hi + pad_x);
        let (y_min, y_max) = (y_lo - pad_y, y_hi + pad_y);

        let available_width =
            (style.width as f64 - MARGIN_LEFT - MARGIN_RIGHT).max(1.0);
        let available_height = (style.height as f64
            - MARGIN_TOP
            - AXIS_LABEL_GAP
            - legend_height)
            .max(1.0);

        let scale = (available_width / (x_max - x_min))
            .min(available_height / (y_max - y_min));
        let width = (x_max - x_min) * scale;
        let height = (y_max - y_min) * scale;

        let left = MARGIN_LEFT + (available_width - width) / 2.0;
        Self {
            left,
            right: left + width,
            top: MARGIN_TOP,
            bottom: MARGIN_TOP + height,
            x_min,
            x_max,
            y_min,
            y_max,
        }
    }

    fn x(&self, x: f64) -> f64 {
        self.left
            .lerp(self.right, (x - self.x_min) / (self.x_max - self.x_min))
    }

    fn y(&self, y: f64) -> f64 {
        self.bottom
            .lerp(self.top, (y - self.y_min) / (self.y_max - self.y_min))
    }
}

/// An SVG document assembled from a figure.
struct SvgDocument {
    view_box: (f64, f64),
    background: Color,
    font_family: String,
    elements: Vec<String>,
}

impl SvgDocument {
    fn from_figure(figure: &Figure) -> Self {
        let style = &figure.style;
        let columns = style.legend_columns.max(1);
        let entries = figure.curves.len() + 1;
        let rows = entries.div_ceil(columns);
        let row_height = style.font_size * 2.0;
        let legend_height = rows as f64 * row_height + style.font_size;

        let axes = Axes::layout(figure, legend_height);
        let mut doc = Self {
            view_box: (style.width as f64, style.height as f64),
            background: style.background,
            font_family: style.font_family.clone(),
            elements: Vec::new(),
        };

        doc.title(figure, &axes);
        doc.grid(figure, &axes);
        doc.polyline(
            &axes,
            &figure.reference,
            style.reference_color,
            1.5,
            style.reference_alpha,
            true,
        );
        for (index, curve) in figure.curves.iter().enumerate() {
            doc.polyline(
                &axes,
                curve,
                style.curve_color(index),
                style.line_width,
                style.line_alpha,
                false,
            );
        }
        doc.frame(figure, &axes);
        doc.legend(figure, &axes, rows, row_height);
        doc
    }

    fn title(&mut self, figure: &Figure, axes: &Axes) {
        let style = &figure.style;
        let center = (axes.left + axes.right) / 2.0;
        self.elements.push(format!(
            r#"<text x="{center:.2}" y="{:.2}" text-anchor="middle" font-size="{}" fill="{}">{}</text>"#,
            axes.top - 15.0,
            style.title_size,
            style.foreground,
            escape(&style.title)
        ));
        self.elements.push(format!(
            r#"<text x="{center:.2}" y="{:.2}" text-anchor="middle" font-size="{}" fill="{}">{}</text>"#,
            axes.bottom + style.font_size * 3.5,
            style.font_size,
            style.foreground,
            escape(&style.x_label)
        ));
        let middle = (axes.top + axes.bottom) / 2.0;
        let x = axes.left - style.font_size * 4.5;
        self.elements.push(format!(
            r#"<text x="{x:.2}" y="{middle:.2}" text-anchor="middle" font-size="{}" fill="{}" transform="rotate(-90 {x:.2} {middle:.2})">{}</text>"#,
            style.font_size,
            style.foreground,
            escape(&style.y_label)
        ));
    }

    fn grid(&mut self, figure: &Figure, axes: &Axes) {
        let style = &figure.style;
        let stroke = style.foreground;
        let alpha = style.grid_alpha;

        for tick in ticks(axes.x_min, axes.x_max) {
            let x = axes.x(tick.value);
            self.elements.push(format!(
                r#"<line x1="{x:.2}" y1="{:.2}" x2="{x:.2}" y2="{:.2}" stroke="{stroke}" stroke-opacity="{alpha}" stroke-width="0.8"/>"#,
                axes.top, axes.bottom
            ));
            self.elements.push(format!(
                r#"<text x="{x:.2}" y="{:.2}" text-anchor="middle" font-size="{}" fill="{stroke}">{}</text>"#,
                axes.bottom + style.font_size * 1.6,
                style.font_size,
                tick.label
            ));
        }
        for tick in ticks(axes.y_min, axes.y_max) {
            let y = axes.y(tick.value);
            self.elements.push(format!(
                r#"<line x1="{:.2}" y1="{y:.2}" x2="{:.2}" y2="{y:.2}" stroke="{stroke}" stroke-opacity="{alpha}" stroke-width="0.8"/>"#,
                axes.left, axes.right
            ));
            self.elements.push(format!(
                r#"<text x="{:.2}" y="{:.2}" text-anchor="end" font-size="{}" fill="{stroke}">{}</text>"#,
                axes.left - 6.0,
                y + style.font_size * 0.35,
                style.font_size,
                tick.label
            ));
        }
    }

    fn frame(&mut self, figure: &Figure, axes: &Axes) {
        self.elements.push(format!(
            r#"<rect x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}" fill="none" stroke="{}" stroke-width="0.8"/>"#,
            axes.left,
            axes.top,
            axes.right - axes.left,
            axes.bottom - axes.top,
            figure.style.foreground
        ));
    }

    /// Adds `curve` as one polyline per run of finite samples.
    fn polyline(
        &mut self,
        axes: &Axes,
        curve: &Curve,
        color: Color,
        width: f64,
        alpha: f64,
        dashed: bool,
    ) {
        let dash = if dashed { r#" stroke-dasharray="6 4""# } else { "" };
        let mut points = String::new();
        let flush = |points: &mut String, elements: &mut Vec<String>| {
            if !points.is_empty() {
                elements.push(format!(
                    r#"<polyline class="curve" data-name="{}" points="{}" fill="none" stroke="{color}" stroke-opacity="{alpha}" stroke-width="{width}" stroke-linecap="round" stroke-linejoin="round"{dash}/>"#,
                    escape(&curve.name),
                    points.trim_end()
                ));
                points.clear();
            }
        };

        for (&x, &y) in curve.xs.iter().zip(curve.ys.iter()) {
            if x.is_finite() && y.is_finite() {
                points.push_str(&format!(
                    "{:.2},{:.2} ",
                    axes.x(x),
                    axes.y(y)
                ));
            } else {
                flush(&mut points, &mut self.elements);
            }
        }
        flush(&mut points, &mut self.elements);
    }

    fn legend(
        &mut self,
        figure: &Figure,
        axes: &Axes,
        rows: usize,
        row_height: f64,
    ) {
        let style = &figure.style;
        let columns = style.legend_columns.max(1);
        let top = axes.bottom + AXIS_LABEL_GAP;
        let width = (axes.right - axes.left).max(row_height * 10.0);
        let left = (axes.left + axes.right - width) / 2.0;
        let column_width = width / columns as f64;

        self.elements.push(format!(
            r#"<rect x="{left:.2}" y="{top:.2}" width="{width:.2}" height="{:.2}" rx="4" fill="{}" stroke="{}"/>"#,
            rows as f64 * row_height + style.font_size,
            style.legend_face,
            style.legend_edge
        ));

        let entries = core::iter::once((
            &figure.reference,
            style.reference_color,
            style.reference_alpha,
            true,
        ))
        .chain(figure.curves.iter().enumerate().map(|(index, curve)| {
            (curve, style.curve_color(index), style.line_alpha, false)
        }));

        for (index, (curve, color, alpha, dashed)) in entries.enumerate() {
            let x = left + (index % columns) as f64 * column_width + 10.0;
            let y = top
                + style.font_size * 0.5
                + (index / columns) as f64 * row_height
                + row_height / 2.0;
            let dash = if dashed { r#" stroke-dasharray="6 4""# } else { "" };
            self.elements.push(format!(
                r#"<line x1="{x:.2}" y1="{y:.2}" x2="{:.2}" y2="{y:.2}" stroke="{color}" stroke-opacity="{alpha}" stroke-width="{}" stroke-linecap="round"{dash}/>"#,
                x + 24.0,
                style.line_width
            ));
            self.elements.push(format!(
                r#"<text x="{:.2}" y="{:.2}" font-size="{}" fill="{}">{}</text>"#,
                x + 32.0,
                y + style.font_size * 0.35,
                style.font_size,
                style.foreground,
                escape(&curve.name)
            ));
        }
    }
}

impl Display for SvgDocument {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let (width, height) = self.view_box;
        writeln!(
            f,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}" font-family="{}">"#,
            escape(&self.font_family)
        )?;
        writeln!(
            f,
            r#"<rect width="100%" height="100%" fill="{}"/>"#,
            self.background
        )?;
        for element in &self.elements {
            writeln!(f, "{element}")?;
        }
        writeln!(f, "</svg>")
    }
}

struct Tick {
    value: f64,
    label: String,
}

/// Evenly spaced tick positions on a 1, 2, 2.5, 5 × 10ⁿ step within
/// `[min, max]`.
fn ticks(min: f64, max: f64) -> Vec<Tick> {
    let span = max - min;
    if !(span.is_finite() && span > 0.0) {
        return Vec::new();
    }

    let raw = span / 6.0;
    let magnitude = 10f64.powf(raw.log10().floor());
    let step = [1.0, 2.0, 2.5, 5.0, 10.0]
        .iter()
        .map(|m| m * magnitude)
        .find(|step| *step >= raw)
        .unwrap_or(10.0 * magnitude);

    let decimals = (0..8)
        .find(|d| {
            let scaled = step * 10f64.powi(*d);
            (scaled - scaled.round()).abs() < 1e-9
        })
        .unwrap_or(8) as usize;

    let first = (min / step).ceil() as i64;
    let last = (max / step).floor() as i64;
    (first..=last)
        .map(|i| {
            let value = i as f64 * step;
            // Avoid printing "-0.0".
            let value = if value == 0.0 { 0.0 } else { value };
            Tick {
                value,
                label: format!("{value:.decimals$}"),
            }
        })
        .collect()
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            c => escaped.push(c),
        }
    }
    escaped
}
