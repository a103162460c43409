use std::error::Error;

use plotters::prelude::*;

use integral_estimator::estimate::estimate;
use integral_estimator::plot::{render, RenderOptions};

// arc-length element of y = sin(x²)/2 + 5x, ds = f(x) dx
fn integrand(x: f64) -> f64 {
    (x.sin() * (x * x).cos() + 5.) * (1. + 4. * x * x).sqrt()
}

fn main() -> Result<(), Box<dyn Error>> {
    const LOWER: f64 = 0.;
    const UPPER: f64 = 2. * std::f64::consts::PI;
    const STEPS: usize = 100_000;

    let result = estimate(integrand, LOWER, UPPER, STEPS)?;

    println!(
        "numerically integrating from {LOWER} to {UPPER}, using {STEPS} rectangles: {}",
        result.sum
    );

    // a coarse second pass for the plot; 100 000 rectangles render as a
    // solid block without changing the picture
    let plotted = estimate(integrand, LOWER, UPPER, 50)?;

    let drawing_area =
        SVGBackend::new("plots/arc-length.svg", (800, 600)).into_drawing_area();

    let options = RenderOptions {
        x_offset: 1.,
        y_offset: 10.,
        ..RenderOptions::default()
    };

    render(&drawing_area, integrand, &plotted.geometry, &options)?;

    drawing_area.present()?;

    Ok(())
}
