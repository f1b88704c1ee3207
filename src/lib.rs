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

#![cfg_attr(docsrs, feature(doc_cfg))]
//! Multithreaded 2D gaussian blur for 24-bit truecolor images.
//!
//! The whole pixel space is split into a fixed number of contiguous partitions
//! (4 by default, see [ThreadingPolicy]) and each partition is convolved by its own
//! worker with a full square gaussian kernel. Workers share the source image and the
//! kernel read-only and each one owns a disjoint slice of the destination.
//!
//! ```
//! use parblur::{gaussian_blur, BlurImage, BlurImageMut, GaussianBlurParams, Pixel, ThreadingPolicy};
//!
//! let src = vec![Pixel::new(255, 0, 0); 8 * 8];
//! let src_image = BlurImage::borrow(&src, 8, 8);
//! let mut dst_image = BlurImageMut::default();
//! gaussian_blur(
//!     &src_image,
//!     &mut dst_image,
//!     GaussianBlurParams::new(2),
//!     ThreadingPolicy::default(),
//! )
//! .unwrap();
//! assert_eq!(dst_image.width, 8);
//! ```

mod edge_mode;
mod gaussian;
#[cfg(feature = "image")]
#[cfg_attr(docsrs, doc(cfg(feature = "image")))]
mod gaussian_blur_image;
mod image;
mod pixel;
mod threading_policy;
mod util;

pub use edge_mode::EdgeMode;
pub use gaussian::{
    gaussian_blur, gaussian_kernel_2d, partition, sigma_from_radius, GaussianBlurParams,
    GaussianKernel,
};
#[cfg(feature = "image")]
#[cfg_attr(docsrs, doc(cfg(feature = "image")))]
pub use gaussian_blur_image::{gaussian_blur_image, gaussian_blur_rgb_image};
pub use crate::image::{BlurImage, BlurImageMut, BufferStore};
pub use pixel::Pixel;
pub use threading_policy::{ThreadingPolicy, WORKER_COUNT};
pub use util::{BlurError, MismatchedSize};
