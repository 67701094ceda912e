//! Mapping of common species names to scientific names
//!
//! Question-answering pipelines normalize species mentions ("mouse",
//! "baker's yeast") to proper scientific names before querying the
//! terminology sources. The mapping data is a plain `common,proper` CSV
//! file; one common name may map to several species.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::debug;

use crate::{TermError, TermResult};

/// Maps common species names to their scientific names
///
/// The table is sorted by common name once at load time; lookups are a
/// binary search plus a range scan, so repeated queries stay cheap even for
/// large species lists.
///
/// # Examples
///
/// ```
/// use bioterm::species::SpeciesMapper;
///
/// let csv = "mouse,Mus musculus\nyeast,Saccharomyces cerevisiae\n";
/// let mapper = SpeciesMapper::from_reader(csv.as_bytes()).unwrap();
///
/// assert_eq!(mapper.scientific_names("mouse"), ["Mus musculus"]);
/// assert!(mapper.scientific_names("unicorn").is_empty());
/// ```
#[derive(Debug, Default)]
pub struct SpeciesMapper {
    // sorted by common name; equal common names are adjacent
    entries: Vec<(String, String)>,
}

impl SpeciesMapper {
    /// Reads a `common,proper` CSV file
    ///
    /// # Errors
    ///
    /// - [`TermError::CannotOpenFile`] when the file cannot be opened
    /// - [`TermError::InvalidInput`] for lines without a comma
    pub fn from_csv_file<P: AsRef<Path>>(filename: P) -> TermResult<Self> {
        let display = filename.as_ref().display().to_string();
        let file = File::open(filename).map_err(|_| TermError::CannotOpenFile(display))?;
        Self::from_reader(BufReader::new(file))
    }

    /// Reads `common,proper` lines from any buffered stream
    ///
    /// # Errors
    ///
    /// [`TermError::InvalidInput`] for unreadable data or a line without a
    /// comma separator
    pub fn from_reader<R: BufRead>(reader: R) -> TermResult<Self> {
        let mut entries = Vec::new();
        for line in reader.lines() {
            let line =
                line.map_err(|err| TermError::InvalidInput(format!("read failure: {err}")))?;
            if line.is_empty() {
                continue;
            }
            let Some((common, proper)) = line.split_once(',') else {
                return Err(TermError::InvalidInput(format!(
                    "species line without `common,proper` separator: `{line}`"
                )));
            };
            entries.push((common.trim().to_string(), proper.trim().to_string()));
        }
        entries.sort();
        debug!("Loaded {} species mappings", entries.len());
        Ok(SpeciesMapper { entries })
    }

    /// All scientific names recorded for a common species name
    ///
    /// An unknown name yields an empty vec.
    pub fn scientific_names(&self, common_name: &str) -> Vec<&str> {
        let start = self
            .entries
            .partition_point(|(common, _)| common.as_str() < common_name);
        self.entries[start..]
            .iter()
            .take_while(|(common, _)| common == common_name)
            .map(|(_, proper)| proper.as_str())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn mapper() -> SpeciesMapper {
        let csv = "zebrafish,Danio rerio\n\
                   mouse,Mus musculus\n\
                   yeast,Saccharomyces cerevisiae\n\
                   yeast,Schizosaccharomyces pombe\n";
        SpeciesMapper::from_reader(csv.as_bytes()).expect("csv must parse")
    }

    #[test]
    fn lookup_returns_all_matches() {
        let m = mapper();
        assert_eq!(m.scientific_names("mouse"), ["Mus musculus"]);
        assert_eq!(
            m.scientific_names("yeast"),
            ["Saccharomyces cerevisiae", "Schizosaccharomyces pombe"]
        );
    }

    #[test]
    fn unknown_names_are_a_plain_miss() {
        let m = mapper();
        assert!(m.scientific_names("unicorn").is_empty());
        assert!(m.scientific_names("").is_empty());
    }

    #[test]
    fn malformed_line_is_rejected() {
        let res = SpeciesMapper::from_reader("mouse Mus musculus\n".as_bytes());
        assert!(matches!(res, Err(TermError::InvalidInput(_))));
    }
}
