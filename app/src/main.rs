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

mod bmp;

use anyhow::{bail, Result};
use clap::{Parser, ValueEnum};
use parblur::{
    gaussian_blur_rgb_image, EdgeMode, GaussianBlurParams, ThreadingPolicy, WORKER_COUNT,
};
use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum EdgeModeArg {
    /// Drop out of image taps, borders get darker
    Skip,
    /// Replicate edge pixels
    Clamp,
    /// Drop out of image taps and rescale by the weight that was used
    Renormalize,
}

impl From<EdgeModeArg> for EdgeMode {
    fn from(value: EdgeModeArg) -> Self {
        match value {
            EdgeModeArg::Skip => EdgeMode::Skip,
            EdgeModeArg::Clamp => EdgeMode::Clamp,
            EdgeModeArg::Renormalize => EdgeMode::Renormalize,
        }
    }
}

/// Blurs a 24-bit BMP image with a multithreaded gaussian filter
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Input file, must end with .bmp
    input: PathBuf,
    /// Blur radius in pixels, sigma is radius / 3
    #[arg(allow_negative_numbers = true)]
    radius: i32,
    /// Where blurred image is written
    #[arg(short, long, default_value = "output.bmp")]
    output: PathBuf,
    /// Number of workers the image is split across
    #[arg(short, long, default_value_t = WORKER_COUNT)]
    threads: NonZeroUsize,
    #[arg(long, value_enum, default_value_t = EdgeModeArg::Skip)]
    edge_mode: EdgeModeArg,
}

impl Args {
    fn threading_policy(&self) -> ThreadingPolicy {
        if self.threads.get() == 1 {
            ThreadingPolicy::Single
        } else {
            ThreadingPolicy::Fixed(self.threads)
        }
    }

    fn blur_params(&self) -> GaussianBlurParams {
        GaussianBlurParams::new(self.radius).with_edge_mode(self.edge_mode.into())
    }
}

fn run(args: &Args) -> Result<()> {
    if !bmp::is_bmp_path(&args.input) {
        bail!("The file specified does not end with \".bmp\"");
    }

    let start_time = Instant::now();
    let image = bmp::load_bmp(&args.input)?;
    log::info!(
        "Loaded {} ({}x{}) in {:.2?}",
        args.input.display(),
        image.width(),
        image.height(),
        start_time.elapsed()
    );

    let start_time = Instant::now();
    let blurred = gaussian_blur_rgb_image(&image, args.blur_params(), args.threading_policy())?;
    log::info!(
        "Blurred with radius {} on {} workers in {:.2?}",
        args.radius,
        args.threads,
        start_time.elapsed()
    );

    bmp::save_bmp(&args.output, &blurred)?;
    log::info!("Saved {}", args.output.display());
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();
    run(&args)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["parblur", "in.bmp", "5"]).unwrap();
        assert_eq!(args.radius, 5);
        assert_eq!(args.output, PathBuf::from("output.bmp"));
        assert_eq!(args.threads.get(), 4);
        assert_eq!(args.threading_policy(), ThreadingPolicy::default());
        assert_eq!(args.blur_params(), GaussianBlurParams::new(5));
    }

    #[test]
    fn test_negative_radius_reaches_library() {
        let args = Args::try_parse_from(["parblur", "in.bmp", "-1"]).unwrap();
        assert_eq!(args.radius, -1);
    }

    #[test]
    fn test_missing_radius() {
        assert!(Args::try_parse_from(["parblur", "in.bmp"]).is_err());
    }

    #[test]
    fn test_options() {
        let args = Args::try_parse_from([
            "parblur",
            "in.bmp",
            "3",
            "-o",
            "out.bmp",
            "-t",
            "1",
            "--edge-mode",
            "renormalize",
        ])
        .unwrap();
        assert_eq!(args.output, PathBuf::from("out.bmp"));
        assert_eq!(args.threading_policy(), ThreadingPolicy::Single);
        assert_eq!(args.blur_params().edge_mode, EdgeMode::Renormalize);
    }

    #[test]
    fn test_rejects_other_extensions() {
        let args = Args::try_parse_from(["parblur", "in.png", "3"]).unwrap();
        let err = run(&args).unwrap_err();
        assert!(err.to_string().contains(".bmp"));
    }

    #[test]
    fn test_invalid_radius_writes_nothing() {
        let temp = tempfile::tempdir().unwrap();
        let dir = temp.path();
        let input = dir.join("in.bmp");
        let image = image::RgbImage::new(3, 3);
        bmp::save_bmp(&input, &image).unwrap();
        let args = Args::try_parse_from([
            "parblur".into(),
            input.into_os_string(),
            "0".into(),
            "-o".into(),
            dir.join("out.bmp").into_os_string(),
        ])
        .unwrap();
        let err = run(&args).unwrap_err();
        assert_eq!(
            err.downcast_ref::<parblur::BlurError>(),
            Some(&parblur::BlurError::InvalidRadius(0))
        );
        assert!(!dir.join("out.bmp").exists());
    }

    #[test]
    fn test_blurs_to_output() {
        let temp = tempfile::tempdir().unwrap();
        let input = temp.path().join("in.bmp");
        let output = temp.path().join("out.bmp");
        let image = image::RgbImage::from_pixel(6, 5, image::Rgb([40, 80, 120]));
        bmp::save_bmp(&input, &image).unwrap();
        let args = Args::try_parse_from([
            "parblur".into(),
            input.into_os_string(),
            "1".into(),
            "-o".into(),
            output.clone().into_os_string(),
        ])
        .unwrap();
        run(&args).unwrap();
        let blurred = bmp::load_bmp(&output).unwrap();
        assert_eq!(blurred.dimensions(), (6, 5));
    }
}
