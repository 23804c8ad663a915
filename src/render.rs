//! Turning a preset table into a styled figure and handing it to a plot
//! backend.

use crate::{
    default_presets, evaluate_hermite, PresetTable, Result, SampleGrid,
};

/// An opaque RGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// A grey of the given `level`, `0.0` being black and `1.0` white.
    pub fn grey(level: f64) -> Self {
        let v = (level.clamp(0.0, 1.0) * 255.0).round() as u8;
        Self::rgb(v, v, v)
    }

    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
}

impl core::fmt::Display for Color {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Line colors of the dark theme, cycled through in legend order.
pub const DARK_PALETTE: [Color; 10] = [
    Color::rgb(0x8d, 0xd3, 0xc7),
    Color::rgb(0xfe, 0xff, 0xb3),
    Color::rgb(0xbf, 0xbb, 0xd9),
    Color::rgb(0xfa, 0x81, 0x74),
    Color::rgb(0x81, 0xb1, 0xd2),
    Color::rgb(0xfd, 0xb4, 0x62),
    Color::rgb(0xb3, 0xde, 0x69),
    Color::rgb(0xbc, 0x82, 0xbd),
    Color::rgb(0xcc, 0xeb, 0xc4),
    Color::rgb(0xff, 0xed, 0x6f),
];

/// Presentation settings a backend draws a [`Figure`] with.
///
/// The defaults give a dark themed, 800×900 pixel figure with the legend
/// below the axes. Override single fields with struct update syntax:
///
/// ```
/// use hermite_easing::Style;
///
/// let style = Style {
///     title: "Overshoot presets".into(),
///     ..Default::default()
/// };
/// assert_eq!(style.legend_columns, 3);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Style {
    /// Figure width in pixels.
    pub width: u32,
    /// Figure height in pixels.
    pub height: u32,
    pub title: String,
    pub title_size: f64,
    pub font_size: f64,
    pub x_label: String,
    pub y_label: String,
    /// Legend label of the linear reference line.
    pub reference_label: String,
    /// CSS style font family list.
    pub font_family: String,
    pub background: Color,
    pub foreground: Color,
    pub reference_color: Color,
    pub reference_alpha: f64,
    /// Preset line colors, cycled.
    pub palette: Vec<Color>,
    pub line_width: f64,
    pub line_alpha: f64,
    pub grid_alpha: f64,
    pub legend_columns: usize,
    pub legend_face: Color,
    pub legend_edge: Color,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            width: 800,
            height: 900,
            title: "Cubic Hermite Spline Easing Curves".into(),
            title_size: 16.0,
            font_size: 10.0,
            x_label: "Normalized Time (t)".into(),
            y_label: "Interpolation Progress (v)".into(),
            reference_label: "Linear Reference".into(),
            font_family: "Renogare, sans-serif".into(),
            background: Color::BLACK,
            foreground: Color::WHITE,
            reference_color: Color::grey(0.66),
            reference_alpha: 0.4,
            palette: DARK_PALETTE.to_vec(),
            line_width: 2.5,
            line_alpha: 0.9,
            grid_alpha: 0.3,
            legend_columns: 3,
            legend_face: Color::grey(0.125),
            legend_edge: Color::grey(0.25),
        }
    }
}

impl Style {
    /// Line color of the `index`-th curve.
    pub fn curve_color(&self, index: usize) -> Color {
        if self.palette.is_empty() {
            self.foreground
        } else {
            self.palette[index % self.palette.len()]
        }
    }
}

/// One named, sampled line.
#[derive(Clone, Debug, PartialEq)]
pub struct Curve {
    pub name: String,
    pub xs: Vec<f64>,
    pub ys: Vec<f64>,
}

impl Curve {
    /// `(min, max)` of the finite `ys`, or `None` if there are none.
    pub fn y_range(&self) -> Option<(f64, f64)> {
        self.ys
            .iter()
            .copied()
            .filter(|y| y.is_finite())
            .fold(None, |range, y| match range {
                None => Some((y, y)),
                Some((lo, hi)) => Some((lo.min(y), hi.max(y))),
            })
    }
}

/// Everything a backend needs to draw one plot.
#[derive(Clone, Debug, PartialEq)]
pub struct Figure {
    pub style: Style,
    /// The dashed identity line from `(0, 0)` to `(1, 1)`.
    pub reference: Curve,
    /// One curve per preset, in table order.
    pub curves: Vec<Curve>,
}

impl Figure {
    /// `(min, max)` over the reference line and every curve.
    pub fn y_range(&self) -> (f64, f64) {
        core::iter::once(&self.reference)
            .chain(self.curves.iter())
            .filter_map(Curve::y_range)
            .fold((0.0, 1.0), |(lo, hi), (a, b)| (lo.min(a), hi.max(b)))
    }
}

/// Something that can draw a [`Figure`]: an image writer, a plotting
/// program, a test double.
pub trait PlotBackend {
    fn draw(&mut self, figure: &Figure) -> Result<()>;
}

impl<B: PlotBackend + ?Sized> PlotBackend for &mut B {
    fn draw(&mut self, figure: &Figure) -> Result<()> {
        (**self).draw(figure)
    }
}

/// A backend that keeps every figure it is asked to draw.
#[derive(Clone, Debug, Default)]
pub struct RecordingBackend {
    pub figures: Vec<Figure>,
}

impl PlotBackend for RecordingBackend {
    fn draw(&mut self, figure: &Figure) -> Result<()> {
        self.figures.push(figure.clone());
        Ok(())
    }
}

/// Samples every preset on the [unit grid](SampleGrid::unit) and
/// assembles the figure without drawing it.
pub fn build_figure(presets: &PresetTable, style: &Style) -> Result<Figure> {
    let grid = SampleGrid::unit();

    let curves = presets
        .iter()
        .map(|(name, params)| Curve {
            name: name.to_string(),
            xs: grid.to_vec(),
            ys: evaluate_hermite(&grid, params),
        })
        .collect();

    Ok(Figure {
        style: style.clone(),
        reference: Curve {
            name: style.reference_label.clone(),
            xs: vec![0.0, 1.0],
            ys: vec![0.0, 1.0],
        },
        curves,
    })
}

/// Plots `presets` with the default [`Style`].
pub fn render(
    presets: &PresetTable,
    backend: &mut impl PlotBackend,
) -> Result<()> {
    render_with(presets, &Style::default(), backend)
}

/// Plots `presets` with `style`.
pub fn render_with(
    presets: &PresetTable,
    style: &Style,
    backend: &mut impl PlotBackend,
) -> Result<()> {
    let figure = build_figure(presets, style)?;
    backend.draw(&figure)
}

/// Plots the [built-in presets](default_presets) with the default
/// [`Style`].
pub fn render_default(backend: &mut impl PlotBackend) -> Result<()> {
    render(&default_presets(), backend)
}
