// crates/ngloc-core/src/loader/common_io.rs
use crate::error::{NgLocError, Result};
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

#[cfg(feature = "compact")]
use flate2::{read::GzDecoder, write::GzEncoder, Compression};

fn is_gzip(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("gz"))
}

/// Opens a dataset file, buffers it, and unwraps gzip when the file name
/// ends in `.gz`.
pub fn open_stream(path: &Path) -> Result<Box<dyn Read>> {
    let file = File::open(path).map_err(|e| {
        NgLocError::NotFound(format!("Dataset not found at {}: {}", path.display(), e))
    })?;

    let reader = BufReader::new(file);

    if !is_gzip(path) {
        return Ok(Box::new(reader));
    }

    #[cfg(feature = "compact")]
    {
        Ok(Box::new(GzDecoder::new(reader)))
    }

    #[cfg(not(feature = "compact"))]
    {
        Err(NgLocError::InvalidData(format!(
            "{} is gzip-compressed but 'compact' is disabled",
            path.display()
        )))
    }
}

/// Creates (or truncates) a file for writing, gzip-compressing when the file
/// name ends in `.gz`.
pub fn create_stream(path: &Path) -> Result<Box<dyn Write>> {
    let writer = BufWriter::new(File::create(path)?);

    if !is_gzip(path) {
        return Ok(Box::new(writer));
    }

    #[cfg(feature = "compact")]
    {
        Ok(Box::new(GzEncoder::new(writer, Compression::default())))
    }

    #[cfg(not(feature = "compact"))]
    {
        Err(NgLocError::InvalidData(format!(
            "gzip output requested for {} but 'compact' is disabled",
            path.display()
        )))
    }
}
