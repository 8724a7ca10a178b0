//! Token file serialization: one flat `feature -> value` object per draw

use crate::algorithm::vector::Vector;
use crate::io::error::{Result, WithPath, file_system};
use serde::ser::{Serialize, SerializeSeq, Serializer};
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

/// One drawn combination as read back from a token file
pub type Token = HashMap<String, String>;

/// Serializes vectors as a flat list with each vector repeated `count` times
pub struct TokenSheet<'a>(pub &'a [Vector]);

impl Serialize for TokenSheet<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let len = self.0.iter().map(Vector::count).sum();
        let mut seq = serializer.serialize_seq(Some(len))?;
        for vector in self.0 {
            for _ in 0..vector.count() {
                seq.serialize_element(vector)?;
            }
        }
        seq.end()
    }
}

/// Render the token list as pretty-printed JSON
///
/// # Errors
///
/// Returns an error if serialization fails
pub fn tokens_to_json(vectors: &[Vector]) -> Result<String> {
    Ok(serde_json::to_string_pretty(&TokenSheet(vectors))?)
}

/// Write the token list to `path`, creating parent directories
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The file cannot be created or written
pub fn write_tokens(vectors: &[Vector], path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| file_system(parent, "create directory", e))?;
    }

    let file = File::create(path).map_err(|e| file_system(path, "create token file", e))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, &TokenSheet(vectors)).with_path(path)?;
    writer
        .flush()
        .map_err(|e| file_system(path, "write token file", e))?;

    Ok(())
}

/// Read a token file written by [`write_tokens`]
///
/// # Errors
///
/// Returns an error if the file cannot be opened or is not a list of
/// string-to-string objects
pub fn load_tokens(path: &Path) -> Result<Vec<Token>> {
    let file = File::open(path).map_err(|e| file_system(path, "open token file", e))?;
    serde_json::from_reader::<_, Vec<Token>>(BufReader::new(file)).with_path(path)
}
