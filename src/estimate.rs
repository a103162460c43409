use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EstimateError {
    #[error("step count must be at least 1")]
    ZeroSteps,
}

/// Per-step sampling data of one estimation, mostly for plotting.
///
/// `step_values` and `step_heights` are index-aligned and hold exactly as
/// many entries as the requested step count; `step_width` is shared by every
/// step.
#[derive(Debug, Clone, PartialEq)]
pub struct StepGeometry {
    pub step_values: Vec<f64>,
    pub step_heights: Vec<f64>,
    pub step_width: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EstimationResult {
    pub sum: f64,
    pub geometry: StepGeometry,
}

/// Estimates the definite integral of `f` over `[lower, upper)` with a
/// left-endpoint Riemann sum of `steps` equal-width rectangles.
///
/// Each rectangle contributes its signed area `step_width * f(sample)`, so
/// negative heights subtract from the sum. Accumulation is plain
/// left-to-right over the step index, without summation compensation.
///
/// `lower == upper` gives a zero-width partition and a sum of exactly 0.
/// `upper < lower` is allowed: the step width comes out negative, the
/// abscissas walk from `lower` down toward `upper` and the sum flips sign.
pub fn estimate<F>(
    f: F,
    lower: f64,
    upper: f64,
    steps: usize,
) -> Result<EstimationResult, EstimateError>
where
    F: Fn(f64) -> f64,
{
    if steps == 0 {
        return Err(EstimateError::ZeroSteps);
    }

    let step_width = (upper - lower) / steps as f64;

    let step_values: Vec<f64> = (0..steps).map(|i| lower + step_width * i as f64).collect();
    let step_heights: Vec<f64> = step_values.iter().map(|&x| f(x)).collect();

    let mut sum = 0f64;
    for &height in &step_heights {
        sum += step_width * height;
    }

    Ok(EstimationResult {
        sum,
        geometry: StepGeometry {
            step_values,
            step_heights,
            step_width,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn geometry_is_index_aligned() {
        let f = |x: f64| x.sin();
        let result = estimate(f, -1., 3., 17).unwrap();
        let geometry = &result.geometry;

        assert_eq!(geometry.step_values.len(), 17);
        assert_eq!(geometry.step_heights.len(), 17);
        assert_relative_eq!(geometry.step_width, 4. / 17.);

        for (i, (&x, &y)) in geometry
            .step_values
            .iter()
            .zip(&geometry.step_heights)
            .enumerate()
        {
            assert_eq!(x, -1. + geometry.step_width * i as f64);
            assert_eq!(y, f(x));
        }
    }

    #[test]
    fn constant_function_is_exact_for_any_step_count() {
        for steps in [1, 2, 3, 10, 1000] {
            let result = estimate(|_| 1., 0., 10., steps).unwrap();
            assert_relative_eq!(result.sum, 10., max_relative = 1e-12);
        }
    }

    #[test]
    fn identity_error_shrinks_monotonically() {
        // left rule underestimates y = x on [0, 1] by 1/(2n)
        let mut previous_error = f64::INFINITY;
        for steps in [1, 2, 4, 8, 16, 256, 4096] {
            let result = estimate(|x| x, 0., 1., steps).unwrap();
            let error = (0.5 - result.sum).abs();
            assert!(error < previous_error);
            assert_relative_eq!(error, 1. / (2. * steps as f64), epsilon = 1e-12);
            previous_error = error;
        }
    }

    #[test]
    fn repeated_calls_are_bit_identical() {
        let f = |x: f64| (x * x).cos() + x.exp();
        let first = estimate(f, 0.3, 7.1, 101).unwrap();
        let second = estimate(f, 0.3, 7.1, 101).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn scaling_the_integrand_scales_the_sum() {
        let f = |x: f64| x.sin() + 2.;
        let c = -3.5;
        let plain = estimate(f, 0., 5., 64).unwrap();
        let scaled = estimate(|x| c * f(x), 0., 5., 64).unwrap();
        assert_relative_eq!(scaled.sum, c * plain.sum, max_relative = 1e-12);
    }

    #[test]
    fn negative_heights_subtract() {
        // y = -1 over [0, 4]
        let result = estimate(|_| -1., 0., 4., 8).unwrap();
        assert_relative_eq!(result.sum, -4.);
    }

    #[test]
    fn equal_bounds_give_exactly_zero() {
        let result = estimate(|x| x.exp(), 5., 5., 100).unwrap();
        assert_eq!(result.sum, 0.);
        assert_eq!(result.geometry.step_width, 0.);
        assert!(result.geometry.step_values.iter().all(|&x| x == 5.));
    }

    #[test]
    fn zero_steps_is_rejected() {
        let result = estimate(|x| x, 0., 1., 0);
        assert_eq!(result.unwrap_err(), EstimateError::ZeroSteps);
    }

    #[test]
    fn reversed_bounds_flip_the_sign() {
        let forward = estimate(|_| 3., 0., 1., 7).unwrap();
        let backward = estimate(|_| 3., 1., 0., 7).unwrap();
        assert_eq!(backward.sum, -forward.sum);
        assert!(backward.geometry.step_width < 0.);

        // symmetric integrand, power-of-two steps so the samples line up
        let f = |x: f64| x * (1. - x);
        let forward = estimate(f, 0., 1., 8).unwrap();
        let backward = estimate(f, 1., 0., 8).unwrap();
        assert_relative_eq!(backward.sum, -forward.sum, max_relative = 1e-12);
    }
}
