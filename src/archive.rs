use std::fs::File;
use std::io::Read;
use std::path::Path;

use tracing::debug;
use zip::result::ZipError;
use zip::ZipArchive;

use crate::error::ExtractError;

/// Read the full contents of entry `name` from the ZIP archive at `path`.
pub fn read_entry(path: &Path, name: &str) -> Result<Vec<u8>, ExtractError> {
    let file = File::open(path)?;
    let mut archive = ZipArchive::new(file)?;
    debug!("opened {} ({} entries)", path.display(), archive.len());

    let mut entry = match archive.by_name(name) {
        Ok(entry) => entry,
        Err(ZipError::FileNotFound) => return Err(ExtractError::MissingEntry(name.to_owned())),
        Err(e) => return Err(e.into()),
    };

    let mut data = Vec::new();
    entry.read_to_end(&mut data)?;
    debug!("read {} bytes from {}", data.len(), name);

    Ok(data)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use zip::write::SimpleFileOptions;
    use zip::ZipWriter;

    use super::*;

    fn write_archive(path: &Path, entries: &[(&str, &[u8])]) {
        let mut zip = ZipWriter::new(File::create(path).unwrap());
        let options =
            SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);
        for (name, data) in entries {
            zip.start_file(*name, options).unwrap();
            zip.write_all(data).unwrap();
        }
        zip.finish().unwrap();
    }

    #[test]
    fn reads_named_entry() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("export.zip");
        write_archive(
            &path,
            &[
                ("data/account.js", &b"account"[..]),
                ("data/tweets.js", &b"tweets"[..]),
            ],
        );

        let data = read_entry(&path, "data/tweets.js").unwrap();
        assert_eq!(data, b"tweets");
    }

    #[test]
    fn missing_entry() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("export.zip");
        write_archive(&path, &[("data/account.js", &b"account"[..])]);

        match read_entry(&path, "data/tweets.js") {
            Err(ExtractError::MissingEntry(name)) => assert_eq!(name, "data/tweets.js"),
            other => panic!("expected missing entry, got {:?}", other),
        }
    }

    #[test]
    fn missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = read_entry(&dir.path().join("nope.zip"), "data/tweets.js");
        assert!(matches!(result, Err(ExtractError::Io(_))));
    }

    #[test]
    fn not_an_archive() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("export.zip");
        std::fs::write(&path, "this is not a zip file\n".repeat(16)).unwrap();

        let result = read_entry(&path, "data/tweets.js");
        assert!(matches!(result, Err(ExtractError::Archive(_))));
    }
}
