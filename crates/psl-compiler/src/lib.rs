//! Public Suffix List Compiler
//!
//! This crate partitions a raw Public Suffix List into rule sets and emits
//! them as static array initializers.

pub mod emitter;
pub mod parser;

pub use emitter::emit_initializers;
pub use parser::{load_suffix_list, partition, partition_with_stats, split_lines};
