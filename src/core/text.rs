use std::{
    fs::File,
    io::{self, Read},
    path::Path,
    str::Utf8Error,
};

/// Contents of a file read as UTF-8 text.
#[derive(Debug)]
pub enum FileText {
    Text(String),
    /// The bytes are not valid UTF-8. The file handle is already closed.
    Undecodable(Utf8Error),
}

/// Read a whole file, reporting invalid UTF-8 as a value rather than an error.
///
/// Only genuine I/O failures (open/read) are returned as `Err`.
pub fn read_text(path: &Path) -> io::Result<FileText> {
    let mut file = File::open(path)?;
    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes)?;

    Ok(match String::from_utf8(bytes) {
        Ok(text) => FileText::Text(text),
        Err(e) => FileText::Undecodable(e.utf8_error()),
    })
}
