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

use crate::{
    gaussian_blur, BlurError, BlurImage, BlurImageMut, GaussianBlurParams, MismatchedSize,
    ThreadingPolicy,
};
use image::{DynamicImage, RgbImage};

/// Performs gaussian blur on 8-bit RGB image provided by image crate
///
/// # Arguments
///
/// * `image`: RGB image.
/// * `params`: See [GaussianBlurParams] for more info.
/// * `threading_policy` - Threads usage policy.
///
pub fn gaussian_blur_rgb_image(
    image: &RgbImage,
    params: GaussianBlurParams,
    threading_policy: ThreadingPolicy,
) -> Result<RgbImage, BlurError> {
    let src = BlurImage::borrow_bytes(image.as_raw(), image.width(), image.height())?;
    let mut dst = BlurImageMut::default();
    gaussian_blur(&src, &mut dst, params, threading_policy)?;
    let expected = src.pixel_count() * 3;
    let bytes = dst.into_bytes();
    let received = bytes.len();
    RgbImage::from_raw(image.width(), image.height(), bytes).ok_or(BlurError::DimensionMismatch(
        MismatchedSize { expected, received },
    ))
}

/// Performs gaussian blur on the image
///
/// Only 24-bit truecolor is blurred, any other layout is converted to RGB8 first
/// and the result is always [DynamicImage::ImageRgb8].
///
/// # Arguments
///
/// * `image`: Dynamic image provided by image crate.
/// * `params`: See [GaussianBlurParams] for more info.
/// * `threading_policy` - Threads usage policy.
///
pub fn gaussian_blur_image(
    image: DynamicImage,
    params: GaussianBlurParams,
    threading_policy: ThreadingPolicy,
) -> Result<DynamicImage, BlurError> {
    let rgb = match image {
        DynamicImage::ImageRgb8(img) => img,
        other => {
            log::debug!("Converting {:?} image to RGB8 before blur", other.color());
            other.to_rgb8()
        }
    };
    let blurred = gaussian_blur_rgb_image(&rgb, params, threading_policy)?;
    Ok(DynamicImage::ImageRgb8(blurred))
}
