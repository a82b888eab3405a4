//! 3×3 convolution over an edge-clamped raster.

use crate::image_pipeline::raster::Raster;

pub type Kernel3 = [[f64; 3]; 3];

/// Convolves the 3×3 neighborhood centered at `(y, x)` with `kernel`,
/// returning unclamped per-channel sums.
///
/// The neighbor at `(y - 1 + i, x - 1 + j)` is weighted by `kernel[j][i]`,
/// i.e. the kernel is read transposed. This is invisible for the symmetric
/// kernels used here; a non-symmetric kernel must be supplied transposed.
pub fn apply_kernel(raster: &Raster, y: usize, x: usize, kernel: &Kernel3) -> (f64, f64, f64) {
    let (y, x) = (y as isize, x as isize);
    let mut sum = (0.0, 0.0, 0.0);

    for i in 0..3 {
        for j in 0..3 {
            let weight = kernel[j][i];
            if weight == 0.0 {
                continue;
            }
            let (r, g, b) = raster.get(y - 1 + i as isize, x - 1 + j as isize).channels();
            sum.0 += r * weight;
            sum.1 += g * weight;
            sum.2 += b * weight;
        }
    }

    sum
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image_pipeline::raster::Pixel;

    #[test]
    fn test_identity_kernel() {
        let mut raster = Raster::new(2, 2, 0, 0);
        raster.set(1, 0, Pixel::new(0.2, 0.4, 0.6));
        let identity = [[0.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 0.0]];
        let (r, g, b) = apply_kernel(&raster, 1, 0, &identity);
        assert!((r - 0.2).abs() < 1e-12 && (g - 0.4).abs() < 1e-12 && (b - 0.6).abs() < 1e-12);
    }

    #[test]
    fn test_kernel_is_indexed_transposed() {
        // Only the pixel to the right of (0, 0) is bright.
        let mut raster = Raster::new(1, 3, 0, 0);
        raster.set(0, 1, Pixel::WHITE);

        // kernel[2][1] weights the neighbor at row offset +0, column offset +1
        let mut kernel = [[0.0; 3]; 3];
        kernel[2][1] = 1.0;
        assert_eq!(apply_kernel(&raster, 0, 0, &kernel).0, 1.0);

        let mut natural = [[0.0; 3]; 3];
        natural[1][2] = 1.0;
        // natural[1][2] addresses row offset +1, which clamps back to row 0, column 0
        assert_eq!(apply_kernel(&raster, 0, 0, &natural).0, 0.0);
    }

    #[test]
    fn test_sums_are_not_clamped() {
        let mut raster = Raster::new(1, 1, 0, 0);
        raster.set(0, 0, Pixel::WHITE);
        let kernel = [[0.0, -1.0, 0.0], [-1.0, 5.0, -1.0], [0.0, -1.0, 0.0]];
        assert_eq!(apply_kernel(&raster, 0, 0, &kernel), (1.0, 1.0, 1.0));

        let all_positive = [[1.0; 3]; 3];
        assert_eq!(apply_kernel(&raster, 0, 0, &all_positive), (9.0, 9.0, 9.0));
    }
}
