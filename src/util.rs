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

use std::error::Error;

#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq)]
/// Shows size mismatching
pub struct MismatchedSize {
    pub expected: usize,
    pub received: usize,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BlurError {
    ZeroBaseSize,
    /// Radius must be at least 1, sigma is derived as `radius / 3` and would be zero otherwise
    InvalidRadius(i32),
    /// Pixel buffer length does not equal `width * height`
    DimensionMismatch(MismatchedSize),
    ImagesMustMatch,
    ExceedingPointerSize,
    ThreadPoolUnavailable,
}

impl Error for BlurError {}

impl std::fmt::Display for BlurError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            BlurError::ZeroBaseSize => f.write_str("Image size must not be zero"),
            BlurError::InvalidRadius(radius) => f.write_fmt(format_args!(
                "Blur radius must be at least 1, but received {radius}"
            )),
            BlurError::DimensionMismatch(size) => f.write_fmt(format_args!(
                "Pixel buffer size mismatch: expected={}, received={}",
                size.expected, size.received
            )),
            BlurError::ImagesMustMatch => {
                f.write_str("Source and destination images must match in their dimensions")
            }
            BlurError::ExceedingPointerSize => {
                f.write_str("Image bounds and blurring radius exceeds pointer capacity")
            }
            BlurError::ThreadPoolUnavailable => f.write_str("Unable to start worker threads"),
        }
    }
}

/// Checks that `len` pixels are exactly enough for `width * height`.
pub(crate) fn check_pixel_count(len: usize, width: u32, height: u32) -> Result<(), BlurError> {
    if width == 0 || height == 0 {
        return Err(BlurError::ZeroBaseSize);
    }
    let expected = (width as usize)
        .checked_mul(height as usize)
        .ok_or(BlurError::ExceedingPointerSize)?;
    if len != expected {
        return Err(BlurError::DimensionMismatch(MismatchedSize {
            expected,
            received: len,
        }));
    }
    Ok(())
}
