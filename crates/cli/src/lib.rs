//! Command-line front end for fontprobe.

pub mod cli;
