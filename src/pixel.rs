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

use bytemuck::{Pod, Zeroable};

/// 24-bit truecolor pixel, no alpha.
///
/// Layout is exactly three bytes in `r, g, b` order, so packed RGB byte
/// buffers may be reinterpreted as pixel slices with [bytemuck].
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
pub struct Pixel {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Pixel {
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Pixel {
        Pixel { r, g, b }
    }

    #[inline]
    pub const fn gray(v: u8) -> Pixel {
        Pixel { r: v, g: v, b: v }
    }
}

impl From<[u8; 3]> for Pixel {
    #[inline]
    fn from(value: [u8; 3]) -> Self {
        Pixel::new(value[0], value[1], value[2])
    }
}

impl From<Pixel> for [u8; 3] {
    #[inline]
    fn from(value: Pixel) -> Self {
        [value.r, value.g, value.b]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pixel_is_three_bytes() {
        assert_eq!(std::mem::size_of::<Pixel>(), 3);
        assert_eq!(std::mem::align_of::<Pixel>(), 1);
    }

    #[test]
    fn test_cast_from_bytes() {
        let bytes = [1u8, 2, 3, 4, 5, 6];
        let pixels: &[Pixel] = bytemuck::cast_slice(&bytes);
        assert_eq!(pixels, &[Pixel::new(1, 2, 3), Pixel::new(4, 5, 6)]);
    }
}
