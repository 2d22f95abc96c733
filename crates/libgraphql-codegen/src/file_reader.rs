//! Loading GraphQL source files (SDL, introspection JSON, or executable
//! documents) from disk.

use std::path::Path;
use std::path::PathBuf;

const UTF8_BOM: char = '\u{feff}';

/// Read `file_path` as UTF-8 GraphQL source text.
///
/// A leading byte-order mark is dropped so that line/column positions match
/// what an editor shows.
pub fn read_source(file_path: impl AsRef<Path>) -> Result<String, ReadSourceError> {
    let file_path = file_path.as_ref();
    if !file_path.is_file() {
        return Err(ReadSourceError::NotAFile(file_path.to_path_buf()));
    }

    let bytes = std::fs::read(file_path).map_err(|err| ReadSourceError::Io {
        file_path: file_path.to_path_buf(),
        kind: err.kind(),
        message: err.to_string(),
    })?;

    let mut text = String::from_utf8(bytes).map_err(|err| ReadSourceError::NotUtf8 {
        file_path: file_path.to_path_buf(),
        valid_up_to: err.utf8_error().valid_up_to(),
    })?;

    if text.starts_with(UTF8_BOM) {
        text.replace_range(..UTF8_BOM.len_utf8(), "");
    }
    log::trace!("Read {} byte(s) from {file_path:#?}.", text.len());
    Ok(text)
}

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ReadSourceError {
    #[error("Failed to read `{}`: {message}", file_path.display())]
    Io {
        file_path: PathBuf,
        kind: std::io::ErrorKind,
        message: String,
    },

    #[error("`{}` is not a file", .0.display())]
    NotAFile(PathBuf),

    #[error(
        "`{}` is not valid UTF-8 (invalid byte at offset {valid_up_to})",
        file_path.display(),
    )]
    NotUtf8 {
        file_path: PathBuf,
        valid_up_to: usize,
    },
}
impl ReadSourceError {
    pub fn file_path(&self) -> &Path {
        match self {
            Self::Io { file_path, .. }
                | Self::NotAFile(file_path)
                | Self::NotUtf8 { file_path, .. } => file_path.as_path(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_byte_order_mark() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("schema.graphqls");
        std::fs::write(&path, "\u{feff}type Query { a: Int }").unwrap();

        assert_eq!(read_source(&path).unwrap(), "type Query { a: Int }");
    }

    #[test]
    fn directory_is_not_a_file() {
        let dir = tempfile::tempdir().unwrap();

        assert_eq!(
            read_source(dir.path()),
            Err(ReadSourceError::NotAFile(dir.path().to_path_buf())),
        );
    }

    #[test]
    fn reports_offset_of_invalid_utf8() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Bad.graphql");
        std::fs::write(&path, b"query A { \xff }").unwrap();

        let err = read_source(&path).unwrap_err();
        assert_eq!(err, ReadSourceError::NotUtf8 { file_path: path.clone(), valid_up_to: 10 });
        assert_eq!(err.file_path(), path.as_path());
    }
}
