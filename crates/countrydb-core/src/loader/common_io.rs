// crates/countrydb-core/src/loader/common_io.rs
use crate::error::{CountryDbError, Result};
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

#[cfg(feature = "compact")]
use flate2::read::GzDecoder;

/// True when the file name says the payload is gzip-compressed.
pub fn is_gzip(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("gz"))
}

/// Opens a dataset file, buffers it and unwraps gzip when the name ends in `.gz`.
///
/// Returns a generic reader so the parser does not care about compression.
pub fn open_stream(path: &Path) -> Result<Box<dyn Read>> {
    let file = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => {
            CountryDbError::NotFound(format!("Dataset not found at {}: {}", path.display(), e))
        }
        _ => CountryDbError::Io(e),
    })?;

    let reader = BufReader::new(file);

    if is_gzip(path) {
        #[cfg(feature = "compact")]
        {
            return Ok(Box::new(GzDecoder::new(reader)));
        }

        #[cfg(not(feature = "compact"))]
        {
            return Err(CountryDbError::InvalidData(format!(
                "{} is gzip-compressed; enable the `compact` feature",
                path.display()
            )));
        }
    }

    Ok(Box::new(reader))
}
