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

use crate::edge_mode::clamp_edge;
use crate::gaussian::gaussian_kernel::GaussianKernel;
use crate::{EdgeMode, Pixel};

/// Work item for one worker.
///
/// `dst` is exactly the partition this worker owns, `start` is the flat index of its
/// first pixel. Source and kernel are shared read-only by every worker.
pub(crate) struct ConvolveTask<'a> {
    pub(crate) src: &'a [Pixel],
    pub(crate) dst: &'a mut [Pixel],
    pub(crate) start: usize,
    pub(crate) width: usize,
    pub(crate) height: usize,
    pub(crate) kernel: &'a GaussianKernel,
    pub(crate) edge_mode: EdgeMode,
}

#[derive(Default, Copy, Clone)]
struct Accumulator {
    r: f64,
    g: f64,
    b: f64,
    weight: f64,
}

impl Accumulator {
    #[inline(always)]
    fn add(&mut self, px: Pixel, weight: f64) {
        self.r += px.r as f64 * weight;
        self.g += px.g as f64 * weight;
        self.b += px.b as f64 * weight;
        self.weight += weight;
    }

    /// Fractional part is discarded, not rounded
    #[inline(always)]
    fn truncate(self) -> Pixel {
        Pixel::new(self.r as u8, self.g as u8, self.b as u8)
    }

    #[inline(always)]
    fn truncate_normalized(self) -> Pixel {
        if self.weight == 0. {
            return self.truncate();
        }
        let scale = 1. / self.weight;
        Pixel::new(
            (self.r * scale) as u8,
            (self.g * scale) as u8,
            (self.b * scale) as u8,
        )
    }
}

impl ConvolveTask<'_> {
    /// Fills every pixel of the owned partition. Empty partitions are a no-op.
    pub(crate) fn run(self) {
        let ConvolveTask {
            src,
            dst,
            start,
            width,
            height,
            kernel,
            edge_mode,
        } = self;
        log::trace!(
            "Convolution worker started on {}..{}",
            start,
            start + dst.len()
        );
        for (offset, dst_px) in dst.iter_mut().enumerate() {
            let i = start + offset;
            let x = i % width;
            let y = i / width;
            *dst_px = match edge_mode {
                EdgeMode::Skip => sample_in_bounds(src, width, height, kernel, x, y).truncate(),
                EdgeMode::Renormalize => {
                    sample_in_bounds(src, width, height, kernel, x, y).truncate_normalized()
                }
                EdgeMode::Clamp => sample_clamped(src, width, height, kernel, x, y).truncate(),
            };
        }
        log::trace!(
            "Convolution worker finished on {}..{}",
            start,
            start + dst.len()
        );
    }
}

/// Sums only the kernel taps that land inside the image.
#[inline]
fn sample_in_bounds(
    src: &[Pixel],
    width: usize,
    height: usize,
    kernel: &GaussianKernel,
    x: usize,
    y: usize,
) -> Accumulator {
    let radius = kernel.radius() as usize;
    let y_start = y.saturating_sub(radius);
    let y_end = (y + radius).min(height - 1);
    let x_start = x.saturating_sub(radius);
    let x_end = (x + radius).min(width - 1);

    let mut acc = Accumulator::default();
    for sy in y_start..=y_end {
        let kernel_row = sy + radius - y;
        let src_row = &src[sy * width..(sy + 1) * width];
        for sx in x_start..=x_end {
            let weight = kernel.weight(kernel_row, sx + radius - x);
            acc.add(src_row[sx], weight);
        }
    }
    acc
}

/// Sums every kernel tap, replicating edge pixels for taps outside the image.
#[inline]
fn sample_clamped(
    src: &[Pixel],
    width: usize,
    height: usize,
    kernel: &GaussianKernel,
    x: usize,
    y: usize,
) -> Accumulator {
    let radius = kernel.radius() as i64;
    let mut acc = Accumulator::default();
    for (r, kernel_row) in (-radius..=radius).zip(kernel.rows()) {
        let sy = clamp_edge(y as i64 + r, height as i64);
        let src_row = &src[sy * width..(sy + 1) * width];
        for (c, &weight) in (-radius..=radius).zip(kernel_row.iter()) {
            let sx = clamp_edge(x as i64 + c, width as i64);
            acc.add(src_row[sx], weight);
        }
    }
    acc
}
