/*
 * Copyright (c) 2024.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fs;
use std::io;
use std::path::Path;

use log::debug;

/// Remove `dir` if it exists and create it fresh.
///
/// Stale frames from an earlier run would otherwise be picked up by
/// the sequential reader and corrupt the stream.
pub fn recreate_dir(dir: &Path) -> io::Result<()> {
    if dir.exists() {
        debug!("removing stale directory {}", dir.display());
        fs::remove_dir_all(dir)?;
    }
    fs::create_dir_all(dir)
}

/// Remove `dir`, ignoring it already being gone.
pub fn remove_dir(dir: &Path) -> io::Result<()> {
    match fs::remove_dir_all(dir) {
        Err(error) if error.kind() != io::ErrorKind::NotFound => Err(error),
        _ => Ok(())
    }
}
