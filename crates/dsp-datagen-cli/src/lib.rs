//! Command-line front end for `dsp-datagen`.

pub mod commands;
pub mod core;
pub mod utils;
