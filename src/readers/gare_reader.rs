use crate::error::Result;
use crate::models::{GareRecord, GareRow};
use crate::readers::DelimitedReader;
use crate::utils::constants::{COL_GEO_POINT, COL_LINE, COL_LONG_NAME, COL_MODE, COL_OPERATOR};
use std::path::Path;
use tracing::{info, warn};

const REQUIRED_COLUMNS: [&str; 5] = [COL_OPERATOR, COL_LINE, COL_MODE, COL_LONG_NAME, COL_GEO_POINT];

pub struct GareReader {
    reader: DelimitedReader,
}

impl GareReader {
    pub fn new() -> Self {
        Self {
            reader: DelimitedReader::default(),
        }
    }

    pub fn with_reader(reader: DelimitedReader) -> Self {
        Self { reader }
    }

    /// Read the station location file, deriving each record's position
    pub fn read_gares(&self, path: &Path) -> Result<Vec<GareRecord>> {
        let rows: Vec<GareRow> = self.reader.read_records(path, &REQUIRED_COLUMNS)?;
        let gares: Vec<GareRecord> = rows.into_iter().map(GareRecord::from).collect();

        let unmapped = gares.iter().filter(|g| !g.has_position()).count();
        if unmapped > 0 {
            warn!(
                path = %path.display(),
                unmapped,
                "station rows with a malformed geo point will be left off the map"
            );
        }

        info!(path = %path.display(), gares = gares.len(), "loaded station location dataset");
        Ok(gares)
    }
}

impl Default for GareReader {
    fn default() -> Self {
        Self::new()
    }
}
