/*
 * Copyright (c) 2024.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fs;

use clap::ArgMatches;
use log::info;

use bytereel_stream::errors::StreamErrors;
use bytereel_stream::sequencer::{StreamDecoder, StreamEncoder};

use crate::cmd_parsers::global_options::{parse_options, CmdOptions};
use crate::file_io;
use crate::frames::{PngFrameSink, PngFrameSource};
use crate::video;

pub fn run(matches: &ArgMatches) -> Result<(), StreamErrors> {
    match matches.subcommand() {
        Some(("encode", sub_matches)) => encode(&parse_options(sub_matches)?),
        Some(("decode", sub_matches)) => decode(&parse_options(sub_matches)?),
        // clap enforces subcommand_required
        _ => unreachable!()
    }
}

/// Encode one file into a video of raster frames.
fn encode(options: &CmdOptions) -> Result<(), StreamErrors> {
    let payload = fs::read(&options.input)?;

    info!(
        "read {} bytes from {}",
        payload.len(),
        options.input.display()
    );

    file_io::recreate_dir(&options.frames_dir)?;

    let mut sink = PngFrameSink::new(&options.frames_dir, options.layout);
    let frames = StreamEncoder::new(&payload, options.layout).encode_all(&mut sink)?;

    info!("{} images saved", frames);

    video::mux_frames(&options.frames_dir, options.fps, &options.output)?;

    if !options.keep_frames {
        file_io::remove_dir(&options.frames_dir)?;
    }
    Ok(())
}

/// Decode a video of raster frames back into the stored file.
fn decode(options: &CmdOptions) -> Result<(), StreamErrors> {
    file_io::recreate_dir(&options.frames_dir)?;

    video::demux_video(&options.input, &options.frames_dir)?;

    let mut source = PngFrameSource::new(&options.frames_dir);
    let payload = StreamDecoder::new(options.layout).decode_all(&mut source)?;

    fs::write(&options.output, &payload)?;

    info!(
        "wrote {} bytes to {}",
        payload.len(),
        options.output.display()
    );

    if !options.keep_frames {
        file_io::remove_dir(&options.frames_dir)?;
    }
    Ok(())
}
