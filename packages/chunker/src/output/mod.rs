//! Output generation for segmented article files.

mod writer;

pub use writer::{
    generate_json, generate_yaml, render, save_output, ChunkDocument, OutputFormat,
};
