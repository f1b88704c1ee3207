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

use anyhow::{bail, Context, Result};
use image::{DynamicImage, ImageFormat, RgbImage};
use std::fs;
use std::path::Path;

const BMP_SUFFIX: &str = ".bmp";

/// Only paths ending with `.bmp` are accepted, case sensitive.
pub fn is_bmp_path(path: &Path) -> bool {
    path.to_str()
        .map(|name| name.len() > BMP_SUFFIX.len() && name.ends_with(BMP_SUFFIX))
        .unwrap_or(false)
}

/// `biBitCount` of BITMAPINFOHEADER, right after the 14 byte file header
const BIT_COUNT_OFFSET: usize = 28;

/// Rejects anything that is not a 24 bits per pixel bitmap before decoding,
/// the decoder would otherwise expand palettized and 16-bit files to RGB.
fn check_header(bytes: &[u8]) -> Result<()> {
    if !bytes.starts_with(b"BM") {
        bail!("Not a valid BMP file");
    }
    let bit_count = match bytes.get(BIT_COUNT_OFFSET..BIT_COUNT_OFFSET + 2) {
        Some(&[lo, hi]) => u16::from_le_bytes([lo, hi]),
        _ => bail!("Unable to read BMP header"),
    };
    if bit_count != 24 {
        bail!("Only 24-bit BMP files are supported, this one has {bit_count} bits per pixel");
    }
    Ok(())
}

fn into_truecolor(image: DynamicImage) -> Result<RgbImage> {
    match image {
        DynamicImage::ImageRgb8(rgb) => Ok(rgb),
        other => bail!(
            "Only 24-bit BMP files are supported, this one decodes as {:?}",
            other.color()
        ),
    }
}

/// Reads 24-bit BMP from the disk.
pub fn load_bmp(path: &Path) -> Result<RgbImage> {
    let bytes =
        fs::read(path).with_context(|| format!("Unable to open file {}", path.display()))?;
    decode_bmp(&bytes).with_context(|| format!("Unable to read BMP from {}", path.display()))
}

/// Writes 24-bit BMP, rows are padded to 4 bytes by the encoder.
pub fn save_bmp(path: &Path, image: &RgbImage) -> Result<()> {
    image
        .save_with_format(path, ImageFormat::Bmp)
        .with_context(|| format!("Unable to write BMP to {}", path.display()))
}

pub fn decode_bmp(bytes: &[u8]) -> Result<RgbImage> {
    check_header(bytes)?;
    let image = image::load_from_memory_with_format(bytes, ImageFormat::Bmp)
        .context("Not a valid BMP file")?;
    into_truecolor(image)
}
