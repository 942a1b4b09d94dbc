//! Static status page.
//!
//! A small HTML summary of every tracked ad, regenerated by the reconciler
//! and served as-is by the web layer. Kept as a file so the page survives
//! restarts and costs nothing to serve.

use std::fs;
use std::io::Write;
use std::path::PathBuf;

use askama::Template;
use parking_lot::Mutex;

use crate::domain::Ad;
use crate::error::Result;

#[derive(Template)]
#[template(path = "index.html")]
struct IndexTemplate<'a> {
    ads: &'a [Ad],
}

/// Writer for the status page file.
pub struct StatusPage {
    path: PathBuf,
    // Serializes writers; the reconciler and an ad-hoc render can overlap.
    write_lock: Mutex<()>,
}

impl StatusPage {
    #[must_use]
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            write_lock: Mutex::new(()),
        }
    }

    /// Whether a page has been written already.
    #[must_use]
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Render the page for the given ads without touching the file.
    ///
    /// # Errors
    /// Returns an error if template rendering fails.
    pub fn render(ads: &[Ad]) -> Result<String> {
        Ok(IndexTemplate { ads }.render()?)
    }

    /// Render and write the page atomically.
    ///
    /// Uses write-to-temp-then-rename; creates the parent directory if it
    /// doesn't exist.
    ///
    /// # Errors
    /// Returns an error if rendering or any filesystem step fails.
    pub fn write(&self, ads: &[Ad]) -> Result<()> {
        let html = Self::render(ads)?;

        let _guard = self.write_lock.lock();

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let temp_path = self.path.with_extension("tmp");
        let mut file = fs::File::create(&temp_path)?;

        let cleanup_and_err = |e| {
            let _ = fs::remove_file(&temp_path);
            e
        };

        file.write_all(html.as_bytes()).map_err(cleanup_and_err)?;
        file.sync_all().map_err(cleanup_and_err)?;
        fs::rename(&temp_path, &self.path).map_err(cleanup_and_err)?;

        Ok(())
    }

    /// Read the page back, if one has been written.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read.
    pub fn read(&self) -> Result<Option<String>> {
        if !self.exists() {
            return Ok(None);
        }
        Ok(Some(fs::read_to_string(&self.path)?))
    }
}
