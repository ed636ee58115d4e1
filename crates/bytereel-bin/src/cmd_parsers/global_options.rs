/*
 * Copyright (c) 2024.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::path::PathBuf;

use clap::ArgMatches;
use log::{info, Level};

use bytereel_core::layout::RasterLayout;
use bytereel_stream::errors::StreamErrors;

/// Options for one encode or decode run, parsed from a subcommand's
/// matches.
#[derive(Debug, Clone)]
pub struct CmdOptions {
    pub input:       PathBuf,
    pub output:      PathBuf,
    pub frames_dir:  PathBuf,
    pub layout:      RasterLayout,
    pub fps:         usize,
    pub keep_frames: bool
}

pub fn parse_options(options: &ArgMatches) -> Result<CmdOptions, StreamErrors> {
    let width = *options.get_one::<usize>("width").unwrap();
    let height = *options.get_one::<usize>("height").unwrap();
    let block_size = *options.get_one::<usize>("block-size").unwrap();

    // fatal before any processing when the grid doesn't divide evenly
    let layout = RasterLayout::new(width, height, block_size)?;

    info!(
        "Raster geometry {}x{} in {}-pixel blocks, {} bytes per frame",
        width,
        height,
        block_size,
        layout.capacity_bytes()
    );

    // only the encode subcommand defines a frame rate
    let fps = match options.try_get_one::<usize>("fps") {
        Ok(Some(fps)) => *fps,
        _ => 10
    };

    Ok(CmdOptions {
        input:       PathBuf::from(options.get_one::<String>("in").unwrap()),
        output:      PathBuf::from(options.get_one::<String>("out").unwrap()),
        frames_dir:  PathBuf::from(options.get_one::<String>("frames-dir").unwrap()),
        layout,
        fps,
        keep_frames: options.get_flag("keep-frames")
    })
}

/// Set up logging options
pub fn setup_logger(options: &ArgMatches) {
    let log_level;

    if *options.get_one::<bool>("debug").unwrap() {
        log_level = Level::Debug;
    } else if *options.get_one::<bool>("trace").unwrap() {
        log_level = Level::Trace;
    } else if *options.get_one::<bool>("warn").unwrap() {
        log_level = Level::Warn
    } else if *options.get_one::<bool>("info").unwrap() {
        log_level = Level::Info;
    } else {
        log_level = Level::Warn;
    }

    simple_logger::init_with_level(log_level).unwrap();

    info!("Initialized logger");
    info!("Log level :{}", log_level);
}
