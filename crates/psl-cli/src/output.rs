use std::fs::File;
use std::io::Write;
use std::path::Path;

use psl_compiler::{emit_initializers, partition_with_stats};
use psl_core::{PartitionStats, RuleSets};

use crate::error::{GenError, GenResult};

/// Partition `text` and write the initializer tables to `path`.
pub fn generate(text: &str, path: &Path) -> GenResult<(RuleSets, PartitionStats)> {
    let (rules, stats) = partition_with_stats(text);
    let rendered = emit_initializers(&rules);
    write_output(path, &rendered)?;
    Ok((rules, stats))
}

/// Create or truncate `path` and write `text`. Parent directories must exist.
pub fn write_output(path: &Path, text: &str) -> GenResult<()> {
    let io_err = |source| GenError::Io {
        path: path.to_path_buf(),
        source,
    };

    let mut file = File::create(path).map_err(io_err)?;
    file.write_all(text.as_bytes()).map_err(io_err)?;
    file.flush().map_err(io_err)?;
    Ok(())
}
