// Copyright (c) Radzivon Bartoshyk. All rights reserved.
//
// Redistribution and use in source and binary forms, with or without modification,
// are permitted provided that the following conditions are met:
//
// 1.  Redistributions of source code must retain the above copyright notice, this
// list of conditions and the following disclaimer.
//
// 2.  Redistributions in binary form must reproduce the above copyright notice,
// this list of conditions and the following disclaimer in the documentation
// and/or other materials provided with the distribution.
//
// 3.  Neither the name of the copyright holder nor the names of its
// contributors may be used to endorse or promote products derived from
// this software without specific prior written permission.
//
// THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
// AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
// IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
// DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
// FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
// DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
// SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
// CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
// OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
// OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.

use crate::BlurError;
use std::f64::consts::PI;

/// Computes sigma from blur radius, kernel covers three standard deviations.
#[inline]
pub fn sigma_from_radius(radius: u32) -> f64 {
    radius as f64 / 3.0
}

#[inline]
fn gaussian(x: i64, y: i64, sigma: f64) -> f64 {
    // Evaluation order is fixed, weights must match legacy output bit for bit
    (1.0 / (2.0 * PI * sigma * sigma))
        * f64::exp(-(x * x + y * y) as f64 / (2.0 * sigma * sigma))
}

/// Square 2D gaussian kernel, row-major, centered at `[radius][radius]`.
///
/// Weights are non-negative and sum to one.
#[derive(Debug, Clone, PartialEq)]
pub struct GaussianKernel {
    radius: u32,
    weights: Vec<f64>,
}

impl GaussianKernel {
    #[inline]
    pub fn radius(&self) -> u32 {
        self.radius
    }

    /// Side of the kernel, `2 * radius + 1`
    #[inline]
    pub fn size(&self) -> usize {
        2 * self.radius as usize + 1
    }

    /// Weight at `row`, `col`, both in `0..size()`
    #[inline]
    pub fn weight(&self, row: usize, col: usize) -> f64 {
        self.weights[row * self.size() + col]
    }

    #[inline]
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// Rows of the kernel, top to bottom
    #[inline]
    pub fn rows(&self) -> std::slice::ChunksExact<'_, f64> {
        self.weights.chunks_exact(self.size())
    }
}

/// Generates normalized 2D gaussian kernel with `sigma = radius / 3`.
///
/// Radius 0 has no valid sigma and is rejected. A kernel that cannot be addressed
/// or allocated returns [BlurError::ExceedingPointerSize].
pub fn gaussian_kernel_2d(radius: u32) -> Result<GaussianKernel, BlurError> {
    if radius == 0 {
        return Err(BlurError::InvalidRadius(0));
    }
    let sigma = sigma_from_radius(radius);
    let r = radius as i64;
    let size = (radius as usize)
        .checked_mul(2)
        .and_then(|x| x.checked_add(1))
        .ok_or(BlurError::ExceedingPointerSize)?;
    let taps = size
        .checked_mul(size)
        .filter(|&taps| {
            taps.checked_mul(size_of::<f64>())
                .is_some_and(|bytes| bytes <= isize::MAX as usize)
        })
        .ok_or(BlurError::ExceedingPointerSize)?;
    let mut weights: Vec<f64> = Vec::new();
    weights.try_reserve_exact(taps).map_err(|e| {
        log::error!("Unable to allocate {taps} kernel weights: {e}");
        BlurError::ExceedingPointerSize
    })?;
    let mut sum_norm: f64 = 0.;

    for y in -r..=r {
        for x in -r..=r {
            let new_weight = gaussian(x, y, sigma);
            weights.push(new_weight);
            sum_norm += new_weight;
        }
    }

    for item in weights.iter_mut() {
        *item /= sum_norm;
    }

    Ok(GaussianKernel { radius, weights })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kernel_shape_and_sum() {
        for radius in 1..=12u32 {
            let kernel = gaussian_kernel_2d(radius).unwrap();
            let size = 2 * radius as usize + 1;
            assert_eq!(kernel.size(), size);
            assert_eq!(kernel.weights().len(), size * size);
            assert!(kernel.weights().iter().all(|&w| w >= 0.));
            let sum: f64 = kernel.weights().iter().sum();
            assert!(
                (sum - 1.).abs() < 1e-9,
                "Kernel sum expected to be 1 but it was {sum} for radius {radius}"
            );
        }
    }

    #[test]
    fn test_kernel_is_symmetric_and_peaks_at_center() {
        let kernel = gaussian_kernel_2d(3).unwrap();
        let size = kernel.size();
        let center = kernel.weight(3, 3);
        for row in 0..size {
            for col in 0..size {
                let w = kernel.weight(row, col);
                assert_eq!(w, kernel.weight(col, row));
                assert_eq!(w, kernel.weight(size - 1 - row, col));
                assert_eq!(w, kernel.weight(row, size - 1 - col));
                assert!(w <= center);
            }
        }
    }

    #[test]
    fn test_radius_one_weights() {
        // sigma = 1/3, so exp(-d^2 * 4.5) relative to center
        let kernel = gaussian_kernel_2d(1).unwrap();
        let edge = f64::exp(-4.5);
        let corner = f64::exp(-9.);
        let total = 1. + 4. * edge + 4. * corner;
        assert!((kernel.weight(1, 1) - 1. / total).abs() < 1e-12);
        assert!((kernel.weight(0, 1) - edge / total).abs() < 1e-12);
        assert!((kernel.weight(0, 0) - corner / total).abs() < 1e-12);
    }

    /// Plain evaluation of `exp(-(x^2 + y^2) / 2s^2) / 2*pi*s^2`, each weight divided by the sum.
    fn reference_weights(radius: i64) -> Vec<f64> {
        let sigma = radius as f64 / 3.0;
        let mut values = Vec::new();
        let mut sum = 0.0;
        for i in -radius..=radius {
            for j in -radius..=radius {
                let dist = -(i * i + j * j);
                let value = (1.0 / (2.0 * PI * sigma * sigma))
                    * (dist as f64 / (2.0 * sigma * sigma)).exp();
                values.push(value);
                sum += value;
            }
        }
        values.iter().map(|v| v / sum).collect()
    }

    #[test]
    fn test_weights_are_bit_exact() {
        for radius in 1..=12u32 {
            let kernel = gaussian_kernel_2d(radius).unwrap();
            let expected = reference_weights(radius as i64);
            for (i, (&w, &e)) in kernel.weights().iter().zip(expected.iter()).enumerate() {
                assert_eq!(
                    w.to_bits(),
                    e.to_bits(),
                    "Weight {i} of radius {radius} is {w}, expected {e}"
                );
            }
        }
    }

    #[test]
    fn test_radius_one_weight_bits() {
        let kernel = gaussian_kernel_2d(1).unwrap();
        let corner = f64::from_bits(0x3f1ef5c9fdac1798);
        let edge = f64::from_bits(0x3f85c5e1953fbfdd);
        let center = f64::from_bits(0x3fee9fc32d6c4e7f);
        assert_eq!(
            kernel.weights(),
            &[corner, edge, corner, edge, center, edge, corner, edge, corner]
        );
    }

    #[test]
    fn test_unaddressable_radius_rejected() {
        assert_eq!(
            gaussian_kernel_2d(u32::MAX),
            Err(BlurError::ExceedingPointerSize)
        );
        assert_eq!(
            gaussian_kernel_2d(i32::MAX as u32),
            Err(BlurError::ExceedingPointerSize)
        );
    }

    #[test]
    fn test_zero_radius_rejected() {
        assert_eq!(gaussian_kernel_2d(0), Err(BlurError::InvalidRadius(0)));
    }

    #[test]
    fn test_rows() {
        let kernel = gaussian_kernel_2d(2).unwrap();
        assert_eq!(kernel.rows().count(), 5);
        assert!(kernel.rows().all(|row| row.len() == 5));
    }
}
