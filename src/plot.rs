use plotters::coord::Shift;
use plotters::drawing::DrawingAreaErrorKind;
use plotters::prelude::*;
use plotters::style::full_palette::GREY;
use thiserror::Error;

use crate::estimate::StepGeometry;

/// Presentation knobs for [`render`].
///
/// `x_offset` and `y_offset` pad the axis ranges beyond the geometry's
/// extents. `curve_resolution` is the number of fresh integrand samples used
/// for the reference curve; it is independent of the estimation step count
/// and bounds the renderer's memory and time cost.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderOptions {
    pub x_offset: f64,
    pub y_offset: f64,
    pub curve_resolution: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            x_offset: 100.,
            y_offset: 100.,
            curve_resolution: 1000,
        }
    }
}

#[derive(Debug, Error)]
pub enum RenderError<E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    #[error("step geometry holds no samples")]
    EmptyGeometry,
    #[error("curve resolution must be at least 2")]
    CurveResolutionTooSmall,
    #[error("degenerate {axis} axis range [{lo}, {hi}]")]
    DegenerateAxisRange { axis: char, lo: f64, hi: f64 },
    #[error(transparent)]
    Draw(#[from] DrawingAreaErrorKind<E>),
}

/// Draws the rectangle approximation described by `geometry` onto `area`,
/// overlaid with a reference curve of the integrand and a marker at every
/// sample point.
///
/// Rectangles carry the signed-area reading of the estimate: a non-negative
/// height fills from the axis up, a negative height from the height up to the
/// axis. The reference curve resamples `integrand` across the visible
/// x-range at `options.curve_resolution` points; the integrand's domain is
/// not validated here, so the caller must pick a function defined over that
/// range.
///
/// Nothing is flushed to the backend: the caller presents the drawing area
/// once it is done composing.
pub fn render<DB, F>(
    area: &DrawingArea<DB, Shift>,
    integrand: F,
    geometry: &StepGeometry,
    options: &RenderOptions,
) -> Result<(), RenderError<DB::ErrorType>>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
    F: Fn(f64) -> f64,
{
    let (&first, &last) = match (geometry.step_values.first(), geometry.step_values.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => return Err(RenderError::EmptyGeometry),
    };

    if options.curve_resolution < 2 {
        return Err(RenderError::CurveResolutionTooSmall);
    }

    // min/max-normalized so a reversed-bounds partition still yields an
    // ascending axis
    let partition_end = last + geometry.step_width;
    let x_lo = first.min(partition_end) - options.x_offset;
    let x_hi = first.max(partition_end) + options.x_offset;

    // rectangles reach the axis, so 0 is part of the vertical extent
    let height_lo = geometry.step_heights.iter().fold(0f64, |lo, &h| lo.min(h));
    let height_hi = geometry.step_heights.iter().fold(0f64, |hi, &h| hi.max(h));
    let y_lo = height_lo - options.y_offset;
    let y_hi = height_hi + options.y_offset;

    if !(x_lo < x_hi) {
        return Err(RenderError::DegenerateAxisRange {
            axis: 'x',
            lo: x_lo,
            hi: x_hi,
        });
    }
    if !(y_lo < y_hi) {
        return Err(RenderError::DegenerateAxisRange {
            axis: 'y',
            lo: y_lo,
            hi: y_hi,
        });
    }

    let mut chart_builder = ChartBuilder::on(area);

    let mut chart_context = chart_builder
        .caption("numerical integral estimation", ("sans-serif", 20))
        .margin(40)
        .set_label_area_size(LabelAreaPosition::Left, 40)
        .set_label_area_size(LabelAreaPosition::Bottom, 40)
        .build_cartesian_2d(x_lo..x_hi, y_lo..y_hi)?;

    chart_context
        .configure_mesh()
        .x_desc("x")
        .y_desc("f(x)")
        .axis_desc_style(("sans-serif", 15))
        .draw()?;

    chart_context.draw_series(LineSeries::new([(x_lo, 0.), (x_hi, 0.)], &GREY))?;
    chart_context.draw_series(LineSeries::new([(0., y_lo), (0., y_hi)], &GREY))?;

    let rectangle_corners = |(&x, &height): (&f64, &f64)| [(x, 0.), (x + geometry.step_width, height)];

    chart_context.draw_series(
        geometry
            .step_values
            .iter()
            .zip(&geometry.step_heights)
            .map(|step| Rectangle::new(rectangle_corners(step), BLUE.mix(0.5).filled())),
    )?;
    chart_context.draw_series(
        geometry
            .step_values
            .iter()
            .zip(&geometry.step_heights)
            .map(|step| Rectangle::new(rectangle_corners(step), BLACK.stroke_width(1))),
    )?;

    let curve_span = x_hi - x_lo;
    let curve_denominator = (options.curve_resolution - 1) as f64;
    chart_context.draw_series(LineSeries::new(
        (0..options.curve_resolution).map(|i| {
            let x = x_lo + curve_span * i as f64 / curve_denominator;
            (x, integrand(x))
        }),
        &RED,
    ))?;

    chart_context.draw_series(PointSeries::of_element(
        geometry
            .step_values
            .iter()
            .zip(&geometry.step_heights)
            .map(|(&x, &y)| (x, y)),
        2,
        BLACK,
        &|coord, size, style| EmptyElement::at(coord) + Circle::new((0, 0), size, style.filled()),
    ))?;

    Ok(())
}
