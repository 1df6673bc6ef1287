//! Main module for the ccl engine

pub mod assemble;
pub mod blocks;
pub mod fields;
pub mod ports;
pub mod presets;
pub mod scanner;
pub mod sections;
pub mod template;
