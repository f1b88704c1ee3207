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

use crate::gaussian::convolve::ConvolveTask;
use crate::gaussian::gaussian_kernel::{gaussian_kernel_2d, sigma_from_radius};
use crate::gaussian::partition::partition;
use crate::{BlurError, BlurImage, BlurImageMut, EdgeMode, Pixel, ThreadingPolicy};
use std::ops::Range;

/// Parameters of the gaussian blur.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct GaussianBlurParams {
    /// Half-width of the square kernel in pixels, sigma is `radius / 3`. Must be at least 1.
    pub radius: i32,
    /// How kernel taps outside the image are treated, see [EdgeMode].
    pub edge_mode: EdgeMode,
}

impl GaussianBlurParams {
    pub fn new(radius: i32) -> GaussianBlurParams {
        GaussianBlurParams {
            radius,
            edge_mode: EdgeMode::default(),
        }
    }

    pub fn with_edge_mode(self, edge_mode: EdgeMode) -> GaussianBlurParams {
        GaussianBlurParams { edge_mode, ..self }
    }

    /// Validated radius
    pub(crate) fn checked_radius(&self) -> Result<u32, BlurError> {
        u32::try_from(self.radius)
            .ok()
            .filter(|&radius| radius >= 1)
            .ok_or(BlurError::InvalidRadius(self.radius))
    }
}

/// Carves `dst` into one disjoint mutable slice per range.
fn split_partitions<'a>(
    mut dst: &'a mut [Pixel],
    ranges: &[Range<usize>],
) -> Vec<&'a mut [Pixel]> {
    let mut parts = Vec::with_capacity(ranges.len());
    for range in ranges {
        let (head, tail) = std::mem::take(&mut dst).split_at_mut(range.len());
        parts.push(head);
        dst = tail;
    }
    parts
}

/// Performs gaussian blur on the image.
///
/// This convolves every pixel with the full 2D gaussian kernel, no separable approximation.
/// O(R^2) per pixel.
///
/// The flat pixel space is split into contiguous partitions, one per worker, see [ThreadingPolicy].
/// Every worker reads the whole source and writes only its own partition of `dst`.
///
/// # Arguments
///
/// * `src` - Source image.
/// * `dst` - Destination image. If it owns its buffer it is resized to the source,
///   otherwise it must already match the source dimensions.
/// * `params` - See [GaussianBlurParams] for more info.
/// * `threading_policy` - Threading policy according to [ThreadingPolicy].
///
/// # Errors
///
/// Every check is done before any work starts, nothing is written on error.
/// Returns [BlurError::InvalidRadius] when radius is less than 1,
/// [BlurError::DimensionMismatch] when source buffer length is not `width * height`,
/// [BlurError::ExceedingPointerSize] when the kernel for `radius` cannot be allocated.
pub fn gaussian_blur(
    src: &BlurImage,
    dst: &mut BlurImageMut,
    params: GaussianBlurParams,
    threading_policy: ThreadingPolicy,
) -> Result<(), BlurError> {
    let radius = params.checked_radius()?;
    src.check_layout()?;
    let kernel = gaussian_kernel_2d(radius)?;
    dst.check_layout(Some(src))?;
    src.size_matches_mut(dst)?;

    log::debug!(
        "Gaussian kernel {}x{}, sigma {}",
        kernel.size(),
        kernel.size(),
        sigma_from_radius(radius)
    );

    let width = src.width as usize;
    let height = src.height as usize;
    let thread_count = threading_policy.thread_count();
    let ranges = partition(src.pixel_count(), thread_count);
    log::debug!(
        "Blurring {}x{} image with {} workers: {:?}",
        width,
        height,
        thread_count,
        ranges
    );

    let src_pixels: &[Pixel] = src.data.as_ref();
    let kernel = &kernel;
    let edge_mode = params.edge_mode;
    let tasks = ranges
        .iter()
        .zip(split_partitions(dst.data.borrow_mut(), &ranges))
        .map(|(range, part)| ConvolveTask {
            src: src_pixels,
            dst: part,
            start: range.start,
            width,
            height,
            kernel,
            edge_mode,
        })
        .collect::<Vec<_>>();

    if thread_count == 1 {
        for task in tasks {
            task.run();
        }
        return Ok(());
    }

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(thread_count)
        .build()
        .map_err(|e| {
            log::error!("Failed to start blur workers: {e}");
            BlurError::ThreadPoolUnavailable
        })?;
    pool.scope(|scope| {
        for task in tasks {
            scope.spawn(move |_| task.run());
        }
    });
    Ok(())
}
