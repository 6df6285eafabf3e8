use std::{
    fs, io,
    path::{Path, PathBuf},
};
use tracing::{error, info};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WriterOutput {
    pub files: Vec<OutputFile>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutputFile {
    /// Path relative to the output root, `/` separated
    pub name: String,
    pub content: String,
}

/// Outcome of a best-effort write of many files
#[derive(Debug, Default)]
pub struct WriteReport {
    pub written: Vec<PathBuf>,
    pub failed: Vec<(PathBuf, io::Error)>,
}

impl WriteReport {
    pub fn attempted(&self) -> usize {
        self.written.len() + self.failed.len()
    }

    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

impl WriterOutput {
    /// Write every file under `root`. A failed file is logged and skipped.
    pub fn write_to(&self, root: &Path) -> WriteReport {
        self.write_with(root, write_file)
    }

    /// Same as [`WriterOutput::write_to`] with a custom write function
    pub fn write_with<F>(&self, root: &Path, mut write: F) -> WriteReport
    where
        F: FnMut(&Path, &str) -> io::Result<()>,
    {
        let mut report = WriteReport::default();
        for OutputFile { name, content } in self.files.iter() {
            let path = root.join(name);
            match write(&path, content) {
                Ok(()) => {
                    info!("Writing {}", path.display());
                    report.written.push(path);
                }
                Err(err) => {
                    error!("Failed to write {}: {}", path.display(), err);
                    report.failed.push((path, err));
                }
            }
        }
        report
    }
}

/// Create missing parent directories, then overwrite `path`
pub fn write_file(path: &Path, content: &str) -> io::Result<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    fs::write(path, content)
}

/// First line of every generated file
pub(crate) fn write_doc_comment(lines: &mut Vec<String>) {
    let ver = env!("CARGO_PKG_VERSION");
    lines.push(format!("// Generated by crudgen-codegen {ver}. Changes will be overwritten."));
}
