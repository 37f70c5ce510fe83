// ── File & folder picker builders ─────────────────────────────────────────────
//
// The public configuration surface for the shell pickers.  Pure Rust; the
// terminal methods hand a `session::Config` plus a `Mode` to the session
// driver, which runs it against the COM dialog in `platform::win32`.

// Off Windows the terminal methods are absent and only the unit tests
// drive the config plumbing.
#![cfg_attr(not(windows), allow(dead_code))]

use std::path::PathBuf;

#[cfg(windows)]
use crate::error::Result;
use crate::session::Config;
#[cfg(windows)]
use crate::session::{run_multiple, run_single, Mode};

#[cfg(windows)]
use crate::platform::win32::file_dialog::NativeDialog;

// ── File filter ───────────────────────────────────────────────────────────────

/// One file-type entry: a display name plus the extensions it covers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct FileFilter {
    pub(crate) description: String,
    pub(crate) extensions: Vec<String>,
}

impl FileFilter {
    pub(crate) fn new(description: impl Into<String>, extensions: &[&str]) -> Self {
        Self {
            description: description.into(),
            extensions: extensions.iter().map(|e| (*e).to_owned()).collect(),
        }
    }

    /// The native wildcard pattern: `*.ext1;*.ext2;...` in original order.
    pub(crate) fn pattern(&self) -> String {
        format!("*.{}", self.extensions.join(";*."))
    }
}

// ── File dialog builder ───────────────────────────────────────────────────────

/// Builder for the native open / save file picker.
///
/// ```ignore
/// let path = windlg::FileDialog::new()
///     .title("Choose an image")
///     .filter("Images", &["png", "jpg"])
///     .load()?;
/// ```
#[derive(Debug, Default)]
pub struct FileDialog {
    title: Option<String>,
    start_dir: Option<PathBuf>,
    filters: Vec<FileFilter>,
}

impl FileDialog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Window caption.  Without one the platform uses its own default.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Folder the picker starts in.
    pub fn start_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.start_dir = Some(dir.into());
        self
    }

    /// Add a file-type filter.  Extensions are bare, without the `*.` part:
    /// `.filter("Images", &["png", "jpg"])`.  Filters appear in the dialog's
    /// type dropdown in the order they were added.
    pub fn filter(mut self, description: impl Into<String>, extensions: &[&str]) -> Self {
        self.filters.push(FileFilter::new(description, extensions));
        self
    }

    fn into_config(self) -> Config {
        Config {
            title: self.title,
            start_dir: self.start_dir,
            filters: self.filters,
        }
    }

    /// Show a single-file open picker.  The chosen file must exist.
    ///
    /// Returns [`DialogError::Cancelled`](crate::DialogError::Cancelled)
    /// when the user dismisses the dialog.
    #[cfg(windows)]
    pub fn load(self) -> Result<PathBuf> {
        let mut host = NativeDialog::create(Mode::Load)?;
        run_single(&mut host, &self.into_config(), Mode::Load)
    }

    /// Show a multi-select open picker.  Paths come back in selection order.
    #[cfg(windows)]
    pub fn load_multiple(self) -> Result<Vec<PathBuf>> {
        let mut host = NativeDialog::create(Mode::LoadMultiple)?;
        run_multiple(&mut host, &self.into_config(), Mode::LoadMultiple)
    }

    /// Show a save picker.  Overwriting an existing file prompts the user.
    #[cfg(windows)]
    pub fn save(self) -> Result<PathBuf> {
        let mut host = NativeDialog::create(Mode::Save)?;
        run_single(&mut host, &self.into_config(), Mode::Save)
    }
}

// ── Directory picker builder ──────────────────────────────────────────────────

/// Builder for the folder-only picker.
///
/// Folder pickers do not support file-type filters, so unlike
/// [`FileDialog`] there is no filter setter here.
#[derive(Debug, Default)]
pub struct Directory {
    title: Option<String>,
    start_dir: Option<PathBuf>,
}

impl Directory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Window caption.  Without one the platform uses its own default.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Folder the picker starts in.
    pub fn start_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.start_dir = Some(dir.into());
        self
    }

    fn into_config(self) -> Config {
        Config {
            title: self.title,
            start_dir: self.start_dir,
            filters: Vec::new(),
        }
    }

    /// Show the folder picker.  The chosen folder must exist.
    #[cfg(windows)]
    pub fn browse(self) -> Result<PathBuf> {
        let mut host = NativeDialog::create(Mode::Browse)?;
        run_single(&mut host, &self.into_config(), Mode::Browse)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pattern_joins_extensions_in_order() {
        let f = FileFilter::new("Images", &["png", "jpg", "gif"]);
        assert_eq!(f.pattern(), "*.png;*.jpg;*.gif");
    }

    #[test]
    fn pattern_single_extension() {
        assert_eq!(FileFilter::new("Text", &["txt"]).pattern(), "*.txt");
    }

    #[test]
    fn builder_collects_filters_in_order() {
        let config = FileDialog::new()
            .filter("Images", &["png"])
            .filter("Documents", &["pdf", "docx"])
            .into_config();

        assert_eq!(config.filters.len(), 2);
        assert_eq!(config.filters[0].description, "Images");
        assert_eq!(config.filters[1].description, "Documents");
        assert_eq!(config.filters[1].extensions, vec!["pdf", "docx"]);
    }

    #[test]
    fn builder_defaults_are_empty() {
        let config = FileDialog::new().into_config();
        assert!(config.title.is_none());
        assert!(config.start_dir.is_none());
        assert!(config.filters.is_empty());
    }

    #[test]
    fn directory_builder_never_carries_filters() {
        let config = Directory::new()
            .title("Pick a folder")
            .start_dir(r"C:\projects")
            .into_config();

        assert!(config.filters.is_empty());
        assert_eq!(config.title.as_deref(), Some("Pick a folder"));
        assert_eq!(
            config.start_dir.as_deref(),
            Some(std::path::Path::new(r"C:\projects"))
        );
    }

    #[test]
    fn builder_records_title_and_start_dir() {
        let config = FileDialog::new()
            .title("Open project")
            .start_dir(r"C:\projects")
            .into_config();

        assert_eq!(config.title.as_deref(), Some("Open project"));
        assert_eq!(
            config.start_dir.as_deref(),
            Some(std::path::Path::new(r"C:\projects"))
        );
    }
}
