//! Zip compression for the `compress` command.

use std::ffi::OsString;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::error::{CoreError, CoreResult};
use crate::fs::ops::map_io_error;

/// Returns the archive path for `source`: the full name with `.zip` appended.
///
/// `notes.txt` becomes `notes.txt.zip`, `photos/` becomes `photos.zip`.
pub fn archive_path_for(source: &Path) -> PathBuf {
    match source.file_name() {
        Some(name) => {
            let mut name = name.to_os_string();
            name.push(".zip");
            source.with_file_name(name)
        }
        None => {
            let mut name: OsString = source.as_os_str().to_owned();
            name.push(".zip");
            PathBuf::from(name)
        }
    }
}

/// Compresses `source` into `<source>.zip` and returns the archive path.
///
/// A directory is walked recursively and every regular file becomes one
/// entry named by its `/`-separated path relative to `source`. A single
/// file becomes one entry named by its base name. Symlinks are skipped.
///
/// The archive is created exclusively; on any failure the partially written
/// archive is removed.
///
/// # Errors
///
/// - [`CoreError::NotFound`] if `source` does not exist.
/// - [`CoreError::AlreadyExists`] if the archive path is taken.
/// - [`CoreError::Archive`] / [`CoreError::Io`] while writing.
pub fn compress_to_zip(source: &Path) -> CoreResult<PathBuf> {
    let meta = std::fs::metadata(source).map_err(|e| map_io_error(e, source))?;
    let archive = archive_path_for(source);

    let file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&archive)
        .map_err(|e| map_io_error(e, &archive))?;

    let result = write_archive(file, source, meta.is_dir());
    if let Err(e) = result {
        tracing::warn!("compress of {} failed: {e}", source.display());
        let _ = std::fs::remove_file(&archive);
        return Err(e);
    }

    tracing::info!("compressed {} -> {}", source.display(), archive.display());
    Ok(archive)
}

fn write_archive(file: File, source: &Path, is_dir: bool) -> CoreResult<()> {
    let mut zip = ZipWriter::new(BufWriter::new(file));
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    if is_dir {
        let mut files = Vec::new();
        collect_regular_files(source, &mut files)?;
        for path in files {
            let name = entry_name(source, &path)?;
            add_file(&mut zip, &path, name, options)?;
        }
    } else {
        let name = source
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .ok_or_else(|| CoreError::InvalidName(source.display().to_string()))?;
        add_file(&mut zip, source, name, options)?;
    }

    let mut writer = zip.finish().map_err(archive_error)?;
    writer.flush()?;
    Ok(())
}

fn add_file<W: Write + std::io::Seek>(
    zip: &mut ZipWriter<W>,
    path: &Path,
    name: String,
    options: SimpleFileOptions,
) -> CoreResult<()> {
    zip.start_file(name, options).map_err(archive_error)?;
    let mut input = File::open(path).map_err(|e| map_io_error(e, path))?;
    std::io::copy(&mut input, zip)?;
    Ok(())
}

/// Depth-first walk in name order so archives are reproducible.
fn collect_regular_files(dir: &Path, out: &mut Vec<PathBuf>) -> CoreResult<()> {
    let mut children: Vec<_> = std::fs::read_dir(dir)
        .map_err(|e| map_io_error(e, dir))?
        .collect::<Result<_, _>>()?;
    children.sort_by_key(|entry| entry.file_name());

    for child in children {
        let ft = child.file_type()?;
        if ft.is_dir() {
            collect_regular_files(&child.path(), out)?;
        } else if ft.is_file() {
            out.push(child.path());
        }
    }
    Ok(())
}

fn entry_name(root: &Path, path: &Path) -> CoreResult<String> {
    let relative = path
        .strip_prefix(root)
        .map_err(|_| CoreError::InvalidName(path.display().to_string()))?;
    let parts: Vec<String> = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();
    Ok(parts.join("/"))
}

fn archive_error(e: zip::result::ZipError) -> CoreError {
    CoreError::Archive(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Read;
    use tempfile::TempDir;
    use zip::ZipArchive;

    fn entry_names(archive: &Path) -> Vec<String> {
        let mut zip = ZipArchive::new(File::open(archive).unwrap()).unwrap();
        (0..zip.len())
            .map(|i| zip.by_index(i).unwrap().name().to_string())
            .collect()
    }

    #[test]
    fn archive_path_appends_zip() {
        assert_eq!(
            archive_path_for(Path::new("/tmp/notes.txt")),
            PathBuf::from("/tmp/notes.txt.zip")
        );
        assert_eq!(
            archive_path_for(Path::new("/tmp/photos")),
            PathBuf::from("/tmp/photos.zip")
        );
        assert_eq!(
            archive_path_for(Path::new("/tmp/photos/")),
            PathBuf::from("/tmp/photos.zip")
        );
    }

    #[test]
    fn single_file_uses_base_name() {
        let tmp = TempDir::new().unwrap();
        let src = tmp.path().join("report.txt");
        fs::write(&src, "quarterly numbers").unwrap();

        let archive = compress_to_zip(&src).unwrap();

        assert_eq!(archive, tmp.path().join("report.txt.zip"));
        assert_eq!(entry_names(&archive), vec!["report.txt"]);
        assert!(src.exists(), "source must be left in place");

        let mut zip = ZipArchive::new(File::open(&archive).unwrap()).unwrap();
        let mut content = String::new();
        zip.by_name("report.txt")
            .unwrap()
            .read_to_string(&mut content)
            .unwrap();
        assert_eq!(content, "quarterly numbers");
    }

    #[test]
    fn directory_uses_relative_entry_names() {
        let tmp = TempDir::new().unwrap();
        let src = tmp.path().join("project");
        fs::create_dir_all(src.join("src").join("deep")).unwrap();
        fs::write(src.join("README"), "r").unwrap();
        fs::write(src.join("src").join("main.rs"), "m").unwrap();
        fs::write(src.join("src").join("deep").join("x.rs"), "x").unwrap();
        fs::create_dir(src.join("empty")).unwrap();

        let archive = compress_to_zip(&src).unwrap();

        assert_eq!(archive, tmp.path().join("project.zip"));
        assert_eq!(
            entry_names(&archive),
            vec!["README", "src/deep/x.rs", "src/main.rs"]
        );
    }

    #[test]
    fn existing_archive_is_not_overwritten() {
        let tmp = TempDir::new().unwrap();
        let src = tmp.path().join("a.txt");
        fs::write(&src, "a").unwrap();
        fs::write(tmp.path().join("a.txt.zip"), "keep me").unwrap();

        let err = compress_to_zip(&src).unwrap_err();

        assert!(matches!(err, CoreError::AlreadyExists(_)));
        assert_eq!(
            fs::read_to_string(tmp.path().join("a.txt.zip")).unwrap(),
            "keep me"
        );
    }

    #[test]
    fn missing_source_creates_nothing() {
        let tmp = TempDir::new().unwrap();
        let src = tmp.path().join("ghost");

        let err = compress_to_zip(&src).unwrap_err();

        assert!(matches!(err, CoreError::NotFound(_)));
        assert!(!tmp.path().join("ghost.zip").exists());
    }
}
