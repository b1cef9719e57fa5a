//! Class lookup in class-path entries.

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::error::Result;

/// Check whether a class-path entry provides `class_entry` (`a/b/C.class`).
///
/// Directories are checked on disk, anything else is opened as a jar.
/// Missing entries simply don't contain the class.
pub fn entry_contains(entry: &Path, class_entry: &str) -> Result<bool> {
    if entry.is_dir() {
        return Ok(entry.join(class_entry).is_file());
    }
    if !entry.is_file() {
        return Ok(false);
    }

    let file = File::open(entry)?;
    let mut archive = zip::ZipArchive::new(file)
        .with_context(|| format!("Failed to read jar {}", entry.display()))?;
    let found = archive.by_name(class_entry).is_ok();
    Ok(found)
}

/// Jars in the extension directory, which the JVM loads without a class-path entry.
pub fn extension_jars(home: &Path) -> Vec<PathBuf> {
    let Ok(entries) = fs::read_dir(home.join("lib").join("ext")) else {
        return Vec::new();
    };

    let mut jars: Vec<PathBuf> = entries
        .flatten()
        .map(|e| e.path())
        .filter(|p| p.extension().is_some_and(|ext| ext == "jar"))
        .collect();
    jars.sort();
    jars
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::fs::File;
    use std::io::Write;
    use std::path::Path;

    /// Write a jar containing the given entries.
    pub fn write_jar(path: &Path, entries: &[&str]) {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        let file = File::create(path).unwrap();
        let mut writer = zip::ZipWriter::new(file);
        let options = zip::write::SimpleFileOptions::default()
            .compression_method(zip::CompressionMethod::Stored);
        for entry in entries {
            writer.start_file(*entry, options).unwrap();
            writer.write_all(b"\xca\xfe\xba\xbe").unwrap();
        }
        writer.finish().unwrap();
    }
}
