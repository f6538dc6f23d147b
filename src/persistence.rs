// File: src/persistence.rs
use crate::core::stemmer::Stemmer;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Error, ErrorKind};
use std::path::Path;
use tempfile::NamedTempFile;

/// Bumped whenever the serialized layout of the core types changes.
const FORMAT_VERSION: u32 = 1;

/// On-disk wrapper around a compiled stemmer, so hosts can skip re-parsing
/// the affix/dictionary text formats at startup.
#[derive(serde::Serialize, serde::Deserialize)]
struct CompiledStemmer {
    version: u32,
    stemmer: Stemmer,
}

/// Writes the compiled stemmer atomically: serialize into a temp file in the
/// target directory, then persist over the destination.
pub fn save_compiled(stemmer: &Stemmer, path: &Path) -> Result<(), Error> {
    let parent_dir = path.parent().unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(parent_dir)?;

    let state = CompiledStemmer { version: FORMAT_VERSION, stemmer: stemmer.clone() };

    let temp_file = NamedTempFile::new_in(parent_dir)?;
    let writer = BufWriter::new(&temp_file);
    bincode::serialize_into(writer, &state)
        .map_err(|e| Error::new(ErrorKind::Other, e))?;
    temp_file.persist(path)?;
    Ok(())
}

pub fn load_compiled(path: &Path) -> Result<Stemmer, Box<dyn std::error::Error>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let state: CompiledStemmer = bincode::deserialize_from(reader)?;
    if state.version != FORMAT_VERSION {
        return Err(Box::new(Error::new(
            ErrorKind::InvalidData,
            format!(
                "compiled stemmer format version {} (expected {})",
                state.version, FORMAT_VERSION
            ),
        )));
    }
    Ok(state.stemmer)
}

#[cfg(test)]
mod tests {
    use super::*;

    const AFF: &str = "SFX A Y 1\nSFX A ti 0 ti\n";
    const DIC: &str = "1\nd\u{11b}lat/A\n";

    #[test]
    fn save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("czech.bin");

        let stemmer = Stemmer::from_raw(AFF, DIC).unwrap();
        save_compiled(&stemmer, &path).unwrap();

        let loaded = load_compiled(&path).unwrap();
        assert_eq!(loaded.rules().len(), 1);
        assert_eq!(loaded.dictionary().len(), 1);
        assert_eq!(loaded.stem("d\u{11b}lati"), "d\u{11b}lat");
        assert_eq!(loaded.stem("xyzzy"), "xyzzy");
    }

    #[test]
    fn load_rejects_missing_file() {
        assert!(load_compiled(Path::new("/nonexistent/czech.bin")).is_err());
    }

    #[test]
    fn load_rejects_garbage() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("garbage.bin");
        fs::write(&path, b"not a compiled stemmer").unwrap();
        assert!(load_compiled(&path).is_err());
    }
}
