/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Main executable for example-operation

use std::ffi::OsString;

fn main() {
    // Initialize logging
    env_logger::init();

    let mut argv = std::env::args_os();
    // Only the program name is shown to the user, the paths stay raw
    let program = argv
        .next()
        .map(|arg| arg.to_string_lossy().into_owned())
        .unwrap_or_else(|| example_operation::DEFAULT_PROGRAM.to_string());
    let arguments: Vec<OsString> = argv.collect();

    let code = example_operation::run(&program, &arguments);
    std::process::exit(code);
}
