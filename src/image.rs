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

use crate::util::check_pixel_count;
use crate::{BlurError, MismatchedSize, Pixel};
use std::borrow::Cow;

#[derive(Debug)]
pub enum BufferStore<'a, T: Copy> {
    Borrowed(&'a mut [T]),
    Owned(Vec<T>),
}

impl<T: Copy> BufferStore<'_, T> {
    #[allow(clippy::should_implement_trait)]
    pub fn borrow(&self) -> &[T] {
        match self {
            Self::Borrowed(p_ref) => p_ref,
            Self::Owned(vec) => vec,
        }
    }

    #[allow(clippy::should_implement_trait)]
    pub fn borrow_mut(&mut self) -> &mut [T] {
        match self {
            Self::Borrowed(p_ref) => p_ref,
            Self::Owned(vec) => vec,
        }
    }

    pub(crate) fn resize(&mut self, new_size: usize, value: T) {
        match self {
            Self::Borrowed(_) => {}
            Self::Owned(vec) => vec.resize(new_size, value),
        }
    }
}

/// Immutable image store
///
/// Pixels are row-major, addressed as `y * width + x`, without row padding.
#[derive(Debug, Clone)]
pub struct BlurImage<'a> {
    pub data: Cow<'a, [Pixel]>,
    pub width: u32,
    pub height: u32,
}

/// Mutable image store
/// If it owns vector it does auto resizing when used as a blur destination.
#[derive(Debug)]
pub struct BlurImageMut<'a> {
    pub data: BufferStore<'a, Pixel>,
    pub width: u32,
    pub height: u32,
}

impl Default for BlurImageMut<'_> {
    fn default() -> Self {
        BlurImageMut {
            data: BufferStore::Owned(Vec::new()),
            width: 0,
            height: 0,
        }
    }
}

impl<'a> BlurImage<'a> {
    /// Allocates black image
    pub fn alloc(width: u32, height: u32) -> Self {
        Self {
            data: Cow::Owned(vec![Pixel::default(); width as usize * height as usize]),
            width,
            height,
        }
    }

    /// Borrows existing data
    pub fn borrow(arr: &'a [Pixel], width: u32, height: u32) -> Self {
        Self {
            data: Cow::Borrowed(arr),
            width,
            height,
        }
    }

    /// Borrows packed RGB bytes, three bytes per pixel.
    pub fn borrow_bytes(arr: &'a [u8], width: u32, height: u32) -> Result<Self, BlurError> {
        let pixels: &[Pixel] = bytemuck::try_cast_slice(arr).map_err(|_| {
            BlurError::DimensionMismatch(MismatchedSize {
                expected: width as usize * height as usize * 3,
                received: arr.len(),
            })
        })?;
        Ok(Self::borrow(pixels, width, height))
    }

    /// Checks if layout matches necessary requirements
    #[inline]
    pub fn check_layout(&self) -> Result<(), BlurError> {
        check_pixel_count(self.data.len(), self.width, self.height)
    }

    /// Checks if it is matches the size of the other image
    #[inline]
    pub fn size_matches_mut(&self, other: &BlurImageMut<'_>) -> Result<(), BlurError> {
        if self.width == other.width && self.height == other.height {
            return Ok(());
        }
        Err(BlurError::ImagesMustMatch)
    }

    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

impl<'a> BlurImageMut<'a> {
    /// Allocates black image
    pub fn alloc(width: u32, height: u32) -> Self {
        Self {
            data: BufferStore::Owned(vec![Pixel::default(); width as usize * height as usize]),
            width,
            height,
        }
    }

    /// Mutable borrows existing data
    pub fn borrow(arr: &'a mut [Pixel], width: u32, height: u32) -> Self {
        Self {
            data: BufferStore::Borrowed(arr),
            width,
            height,
        }
    }

    /// Checks if layout matches necessary requirements.
    ///
    /// An owned store is reshaped to `other` dimensions instead of being checked.
    #[inline]
    pub fn check_layout(&mut self, other: Option<&BlurImage<'_>>) -> Result<(), BlurError> {
        if let Some(other) = other {
            if matches!(self.data, BufferStore::Owned(_)) {
                self.resize(other.width, other.height);
                return Ok(());
            }
        }
        check_pixel_count(self.data.borrow().len(), self.width, self.height)
    }

    /// Consumes image and returns its pixels
    pub fn into_pixels(self) -> Vec<Pixel> {
        match self.data {
            BufferStore::Borrowed(p_ref) => p_ref.to_vec(),
            BufferStore::Owned(vec) => vec,
        }
    }

    /// Consumes image and returns packed RGB bytes
    pub fn into_bytes(self) -> Vec<u8> {
        let pixels = self.into_pixels();
        bytemuck::cast_slice(&pixels).to_vec()
    }

    #[inline]
    pub(crate) fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.data
            .resize(width as usize * height as usize, Pixel::default());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_borrow_bytes_rejects_partial_pixel() {
        let bytes = [0u8; 7];
        match BlurImage::borrow_bytes(&bytes, 2, 1) {
            Err(BlurError::DimensionMismatch(size)) => {
                assert_eq!(size.expected, 6);
                assert_eq!(size.received, 7);
            }
            other => panic!("Expected dimension mismatch, got {other:?}"),
        }
    }

    #[test]
    fn test_check_layout_mismatch() {
        let pixels = vec![Pixel::default(); 5];
        let image = BlurImage::borrow(&pixels, 3, 2);
        assert_eq!(
            image.check_layout(),
            Err(BlurError::DimensionMismatch(MismatchedSize {
                expected: 6,
                received: 5,
            }))
        );
    }

    #[test]
    fn test_owned_destination_is_reshaped() {
        let src = BlurImage::alloc(4, 3);
        let mut dst = BlurImageMut::default();
        dst.check_layout(Some(&src)).unwrap();
        assert_eq!(dst.width, 4);
        assert_eq!(dst.height, 3);
        assert_eq!(dst.data.borrow().len(), 12);
    }

    #[test]
    fn test_borrowed_destination_is_checked() {
        let src = BlurImage::alloc(4, 3);
        let mut storage = vec![Pixel::default(); 11];
        let mut dst = BlurImageMut::borrow(&mut storage, 4, 3);
        assert!(matches!(
            dst.check_layout(Some(&src)),
            Err(BlurError::DimensionMismatch(_))
        ));
    }

    #[test]
    fn test_into_bytes_order() {
        let mut dst = BlurImageMut::alloc(2, 1);
        dst.data.borrow_mut()[1] = Pixel::new(7, 8, 9);
        assert_eq!(dst.into_bytes(), vec![0, 0, 0, 7, 8, 9]);
    }
}
