/*
 * Copyright (c) 2024.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use clap::{value_parser, Arg, ArgAction, Command};

/// Arguments shared by the encode and decode subcommands
fn shared_args() -> Vec<Arg> {
    vec![
        Arg::new("in")
            .short('i')
            .long("input")
            .help("Input file to read data from")
            .required(true),
        Arg::new("out")
            .short('o')
            .long("output")
            .help("Output to write the data to")
            .required(true),
        Arg::new("frames-dir")
            .long("frames-dir")
            .help("Working directory for intermediate frame images")
            .long_help("Working directory for intermediate frame images.\nThe directory is removed and recreated on every run unless --keep-frames is passed.")
            .default_value("frames"),
        Arg::new("keep-frames")
            .long("keep-frames")
            .action(ArgAction::SetTrue)
            .help("Keep the intermediate frame images after the run"),
        Arg::new("width")
            .long("width")
            .help("Frame width in pixels")
            .value_parser(value_parser!(usize))
            .default_value("1920"),
        Arg::new("height")
            .long("height")
            .help("Frame height in pixels")
            .value_parser(value_parser!(usize))
            .default_value("1080"),
        Arg::new("block-size")
            .long("block-size")
            .help("Side length in pixels of one data block")
            .long_help("Side length in pixels of one data block.\nWidth and height must both be divisible by this value.")
            .value_parser(value_parser!(usize))
            .default_value("4"),
    ]
}

#[rustfmt::skip]
pub fn create_cmd_args() -> Command {
    Command::new("bytereel")
        .about("Store any file as raster frames of a lossless video, and recover it")
        .subcommand_required(true)
        .arg(Arg::new("debug")
            .long("debug")
            .action(ArgAction::SetTrue)
            .global(true)
            .help_heading("LOGGING")
            .help("Display debug information and higher"))
        .arg(Arg::new("trace")
            .long("trace")
            .action(ArgAction::SetTrue)
            .global(true)
            .help_heading("LOGGING")
            .help("Display very verbose information"))
        .arg(Arg::new("warn")
            .long("warn")
            .action(ArgAction::SetTrue)
            .global(true)
            .help_heading("LOGGING")
            .help("Display warnings and errors"))
        .arg(Arg::new("info")
            .long("info")
            .action(ArgAction::SetTrue)
            .global(true)
            .help_heading("LOGGING")
            .help("Display information about the encoding options"))
        .subcommand(Command::new("encode")
            .about("Encode a file into a video")
            .args(shared_args())
            .arg(Arg::new("fps")
                .long("fps")
                .help("Frame rate of the produced video")
                .value_parser(value_parser!(usize))
                .default_value("10")))
        .subcommand(Command::new("decode")
            .about("Decode a video back into the file it stores")
            .args(shared_args()))
}
