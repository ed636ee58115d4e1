/*
 * Copyright (c) 2024.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Video muxing and demuxing through the `ffmpeg` executable.
//!
//! Frames must survive the container bit-exact, so muxing uses FFV1, a
//! lossless codec. The thresholded classifier tolerates faithful but
//! inexact codecs; anything visibly lossy corrupts the payload.

use std::path::Path;
use std::process::Command;

use log::info;

use bytereel_stream::errors::StreamErrors;

fn run_ffmpeg(args: &[&std::ffi::OsStr]) -> Result<(), StreamErrors> {
    let output = Command::new("ffmpeg")
        .arg("-hide_banner")
        .arg("-loglevel")
        .arg("error")
        .args(args)
        .output()
        .map_err(|error| {
            StreamErrors::Generic(format!("could not run ffmpeg, is it installed? {error}"))
        })?;

    if !output.status.success() {
        return Err(StreamErrors::Generic(format!(
            "ffmpeg exited with {}: {}",
            output.status,
            String::from_utf8_lossy(&output.stderr).trim()
        )));
    }
    Ok(())
}

/// Mux the numbered PNG frames in `frames_dir` into a video at
/// `output`, `fps` frames per second.
pub fn mux_frames(frames_dir: &Path, fps: usize, output: &Path) -> Result<(), StreamErrors> {
    let pattern = frames_dir.join("%d.png");
    let fps = fps.to_string();

    info!(
        "muxing {} into {}",
        pattern.display(),
        output.display()
    );

    run_ffmpeg(&[
        "-y".as_ref(),
        "-framerate".as_ref(),
        fps.as_ref(),
        "-start_number".as_ref(),
        "0".as_ref(),
        "-i".as_ref(),
        pattern.as_os_str(),
        "-c:v".as_ref(),
        "ffv1".as_ref(),
        output.as_os_str()
    ])?;

    info!("video saved to {}", output.display());
    Ok(())
}

/// Demux `video` into numbered PNG frames inside `frames_dir`.
///
/// Frames are forced to `rgb24` so every extracted image decodes to
/// three channels regardless of the stream's pixel format.
pub fn demux_video(video: &Path, frames_dir: &Path) -> Result<(), StreamErrors> {
    let pattern = frames_dir.join("%d.png");

    info!(
        "extracting frames of {} into {}",
        video.display(),
        pattern.display()
    );

    run_ffmpeg(&[
        "-y".as_ref(),
        "-i".as_ref(),
        video.as_os_str(),
        "-pix_fmt".as_ref(),
        "rgb24".as_ref(),
        "-start_number".as_ref(),
        "0".as_ref(),
        pattern.as_os_str()
    ])
}
