//! Snapshot loading and output writing for the CLI collaborators.

pub mod input;
pub mod output;

pub use input::{apply_color_overrides, load_catalog, load_owned, load_pins};
pub use output::{create_writer, OutputFormat, OutputWriter};
