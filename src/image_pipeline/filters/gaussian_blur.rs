//! Separable Gaussian blur.
//!
//! The kernel spans `ceil(sigma) * 6` pixels on each side of the center and
//! its weights are the raw Gaussian density. They are not renormalized, so
//! the overall brightness follows the truncated density sum.

use std::f64::consts::PI;

use tracing::debug;

use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::filters::filter::Filter;
use crate::image_pipeline::filters::params::{ensure, expect_count, parse};
use crate::image_pipeline::raster::{Pixel, Raster};

/// Kernel radius in multiples of `ceil(sigma)`.
const RADIUS_PER_SIGMA: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BlurDirection {
    Horizontal,
    Vertical,
}

/// `-blur sigma`: Gaussian blur with standard deviation `sigma >= 0`.
pub struct GaussianBlurFilter;

impl GaussianBlurFilter {
    /// One-dimensional kernel of length `2 * radius + 1`.
    ///
    /// `sigma == 0` gives the single weight `[1.0]`.
    pub fn gaussian_kernel(sigma: f64) -> Vec<f64> {
        if sigma == 0.0 {
            return vec![1.0];
        }

        let radius = sigma.ceil() as usize * RADIUS_PER_SIGMA;
        let scale = 1.0 / ((2.0 * PI).sqrt() * sigma);
        let denominator = 2.0 * sigma * sigma;

        (0..=2 * radius)
            .map(|i| {
                let offset = i as f64 - radius as f64;
                scale * (-(offset * offset) / denominator).exp()
            })
            .collect()
    }

    fn blur_pass(raster: &mut Raster, kernel: &[f64], direction: BlurDirection) {
        let (height, width) = raster.shape();
        let radius = (kernel.len() / 2) as isize;
        let mut blurred = raster.blank_like();

        for y in 0..height {
            for x in 0..width {
                let (mut red, mut green, mut blue) = (0.0, 0.0, 0.0);

                for (k, weight) in kernel.iter().enumerate() {
                    let offset = k as isize - radius;
                    let neighbor = match direction {
                        BlurDirection::Horizontal => raster.get(y as isize, x as isize + offset),
                        BlurDirection::Vertical => raster.get(y as isize + offset, x as isize),
                    };
                    red += neighbor.r() * weight;
                    green += neighbor.g() * weight;
                    blue += neighbor.b() * weight;
                }

                blurred.set(y, x, Pixel::new(red, green, blue));
            }
        }

        *raster = blurred;
    }
}

impl Filter for GaussianBlurFilter {
    fn alias(&self) -> &'static str {
        "-blur"
    }

    fn name(&self) -> &'static str {
        "blur"
    }

    fn apply(&self, raster: &mut Raster, parameters: &[String]) -> Result<()> {
        expect_count(self.name(), parameters, 1)?;

        let sigma: f64 = parse(self.name(), &parameters[0])?;
        ensure(self.name(), sigma.is_finite() && sigma >= 0.0)?;

        // subnormal sigmas underflow the density into inf/NaN weights
        let kernel = Self::gaussian_kernel(sigma);
        ensure(self.name(), kernel.iter().all(|weight| weight.is_finite()))?;
        debug!("Gaussian blur sigma={} kernel length={}", sigma, kernel.len());

        Self::blur_pass(raster, &kernel, BlurDirection::Horizontal);
        Self::blur_pass(raster, &kernel, BlurDirection::Vertical);
        Ok(())
    }
}
