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

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use parblur::{
    gaussian_blur, BlurError, BlurImage, BlurImageMut, EdgeMode, GaussianBlurParams, Pixel,
    ThreadingPolicy,
};
use std::num::NonZeroUsize;

#[derive(Arbitrary, Debug)]
struct BlurInput {
    width: u8,
    height: u8,
    radius: i8,
    workers: u8,
    edge_mode: u8,
    value: [u8; 3],
}

fuzz_target!(|data: BlurInput| {
    fuzz_8bit(data);
});

fn fuzz_8bit(data: BlurInput) {
    let width = data.width as usize;
    let height = data.height as usize;
    let src = vec![Pixel::from(data.value); width * height];
    let src_image = BlurImage::borrow(&src, width as u32, height as u32);
    let mut dst_image = BlurImageMut::default();

    let policy = match NonZeroUsize::new(data.workers as usize % 9) {
        Some(workers) => ThreadingPolicy::Fixed(workers),
        None => ThreadingPolicy::Single,
    };
    let params = GaussianBlurParams::new(data.radius as i32 % 16)
        .with_edge_mode(EdgeMode::from(data.edge_mode as usize % 3));

    match gaussian_blur(&src_image, &mut dst_image, params, policy) {
        Ok(()) => {
            assert_eq!(dst_image.data.borrow().len(), width * height);
            for px in dst_image.data.borrow() {
                assert!(px.r <= data.value[0]);
                assert!(px.g <= data.value[1]);
                assert!(px.b <= data.value[2]);
            }
        }
        Err(BlurError::InvalidRadius(radius)) => assert!(radius < 1),
        Err(BlurError::ZeroBaseSize) => assert!(width == 0 || height == 0),
        Err(e) => panic!("Unexpected error {e}"),
    }
}
