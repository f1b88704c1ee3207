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

use criterion::{criterion_group, criterion_main, Criterion};
use parblur::{
    gaussian_blur, BlurImage, BlurImageMut, EdgeMode, GaussianBlurParams, Pixel, ThreadingPolicy,
};
use std::hint::black_box;

fn gradient(width: usize, height: usize) -> Vec<Pixel> {
    (0..width * height)
        .map(|i| {
            let x = i % width;
            let y = i / width;
            Pixel::new((x % 256) as u8, (y % 256) as u8, ((x + y) % 256) as u8)
        })
        .collect()
}

pub fn criterion_benchmark(c: &mut Criterion) {
    let mut c = c.benchmark_group("Gauss");
    c.sample_size(10);

    let width = 640usize;
    let height = 480usize;
    let src = gradient(width, height);
    let src_image = BlurImage::borrow(&src, width as u32, height as u32);

    for radius in [3, 9] {
        c.bench_function(format!("RGB gauss blur radius: {radius}"), |b| {
            let mut dst = BlurImageMut::alloc(width as u32, height as u32);
            b.iter(|| {
                gaussian_blur(
                    black_box(&src_image),
                    &mut dst,
                    GaussianBlurParams::new(radius),
                    ThreadingPolicy::default(),
                )
                .unwrap();
            })
        });

        c.bench_function(format!("RGB gauss blur single thread radius: {radius}"), |b| {
            let mut dst = BlurImageMut::alloc(width as u32, height as u32);
            b.iter(|| {
                gaussian_blur(
                    black_box(&src_image),
                    &mut dst,
                    GaussianBlurParams::new(radius),
                    ThreadingPolicy::Single,
                )
                .unwrap();
            })
        });
    }

    c.bench_function("RGB gauss blur renormalized radius: 9", |b| {
        let mut dst = BlurImageMut::alloc(width as u32, height as u32);
        b.iter(|| {
            gaussian_blur(
                black_box(&src_image),
                &mut dst,
                GaussianBlurParams::new(9).with_edge_mode(EdgeMode::Renormalize),
                ThreadingPolicy::default(),
            )
            .unwrap();
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
