// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! For more information on how to use CLAP, here are some resources:
//! 1. [Tutorial](https://developerlife.com/2023/09/17/tuify-clap/)
//! 2. [Video](https://youtu.be/lzMYDA6St0s)

use clap::Parser;
use r3bl_kilo::{CLIArg, run_app};

/// Exit status is `0` when `q` ends the session, and `1` (with the diagnostic on
/// stderr) when it ends with an error.
fn main() -> miette::Result<()> { run_app(CLIArg::parse()) }
