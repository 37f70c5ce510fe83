// ── File-dialog session driver ────────────────────────────────────────────────
//
// Pure-Rust core of the picker machinery: option-flag composition, filter
// translation, and the fixed call sequence every session walks through
// (configure, show, extract, release).  No Win32 imports; the native COM
// object sits behind the `DialogHost` trait so this module is exercised by
// unit tests on any platform.
//
// A session is created immediately before showing the dialog and dropped
// immediately after result extraction.  Dropping the host is what releases
// the native references, so release happens on every exit path, including
// cancellation and platform failure.

// Off Windows only the unit tests drive this module.
#![cfg_attr(not(windows), allow(dead_code))]

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::file::FileFilter;

// ── Option flags ──────────────────────────────────────────────────────────────

// Subset of the shell's FOS_* option bits, mirrored as plain integers so
// flag composition stays testable off-platform.  Parity with the `windows`
// crate constants is asserted in the `win_parity` test module below.
pub(crate) const OVERWRITE_PROMPT: u32 = 0x0000_0002;
pub(crate) const NO_CHANGE_DIR: u32 = 0x0000_0008;
pub(crate) const PICK_FOLDERS: u32 = 0x0000_0020;
pub(crate) const ALLOW_MULTISELECT: u32 = 0x0000_0200;
pub(crate) const PATH_MUST_EXIST: u32 = 0x0000_0800;
pub(crate) const FILE_MUST_EXIST: u32 = 0x0000_1000;

// ── Mode ──────────────────────────────────────────────────────────────────────

/// What the session is for.  Selects the native object class (open vs. save)
/// and the operation-specific option bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Mode {
    /// Single-file open picker.
    Load,
    /// Multi-select open picker.
    LoadMultiple,
    /// Save picker with overwrite prompt.
    Save,
    /// Folder-only picker.
    Browse,
}

impl Mode {
    /// The option bits OR-ed into the dialog's defaults.
    ///
    /// Every mode suppresses the legacy "change current directory" side
    /// effect.  Browse keeps the must-exist bit of the open picker it is
    /// built on and adds folder-only + path-must-exist.
    pub(crate) fn options(self) -> u32 {
        NO_CHANGE_DIR
            | match self {
                Self::Load => FILE_MUST_EXIST,
                Self::LoadMultiple => FILE_MUST_EXIST | ALLOW_MULTISELECT,
                Self::Save => OVERWRITE_PROMPT,
                Self::Browse => FILE_MUST_EXIST | PICK_FOLDERS | PATH_MUST_EXIST,
            }
    }
}

// ── Configuration ─────────────────────────────────────────────────────────────

/// Everything a builder hands to a session.
#[derive(Debug, Default)]
pub(crate) struct Config {
    /// Window caption.  `None` is applied as the empty string, which makes
    /// the platform supply its own default caption.
    pub(crate) title: Option<String>,
    /// Starting folder, resolved to a shell item by the host.
    pub(crate) start_dir: Option<PathBuf>,
    /// Ordered file-type filters.  Ignored in Browse mode.
    pub(crate) filters: Vec<FileFilter>,
}

/// One native filter entry: display name + semicolon-joined wildcard spec.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct FilterSpec {
    pub(crate) name: String,
    pub(crate) spec: String,
}

impl From<&FileFilter> for FilterSpec {
    fn from(filter: &FileFilter) -> Self {
        Self {
            name: filter.description.clone(),
            spec: filter.pattern(),
        }
    }
}

// ── Host trait ────────────────────────────────────────────────────────────────

/// The exact native surface a session touches, in the order it touches it.
///
/// Implemented by the COM dialog wrapper in `platform::win32::file_dialog`
/// and by the recording double in the tests below.  Dropping the host must
/// release whatever the host owns.
pub(crate) trait DialogHost {
    /// OR `bits` into the dialog's current option flags.
    fn set_options(&mut self, bits: u32) -> Result<()>;
    /// Apply the full ordered filter list in one call.
    fn set_file_types(&mut self, specs: &[FilterSpec]) -> Result<()>;
    /// Resolve `dir` to a shell item and set it as the initial folder.
    /// The resolved item is owned by the host until it drops.
    fn set_folder(&mut self, dir: &Path) -> Result<()>;
    /// Set the window caption.
    fn set_title(&mut self, title: &str) -> Result<()>;
    /// Block until the user dismisses the dialog.  `Err(Cancelled)` when
    /// dismissed without a selection.
    fn show(&mut self) -> Result<()>;
    /// The selected path, in desktop-absolute-editing form.
    fn result(&mut self) -> Result<PathBuf>;
    /// All selected paths, in selection order (multi-select only).
    fn results(&mut self) -> Result<Vec<PathBuf>>;
}

// ── Common configuration ──────────────────────────────────────────────────────

/// Apply `config` to a freshly created host, in the fixed order: options,
/// filters, start folder, title.
///
/// Folder pickers do not support file-type filters, so Browse mode never
/// attaches a filter list, even when one reaches it.
fn configure<D: DialogHost>(host: &mut D, config: &Config, mode: Mode) -> Result<()> {
    host.set_options(mode.options())?;

    if mode != Mode::Browse && !config.filters.is_empty() {
        let specs: Vec<FilterSpec> = config.filters.iter().map(FilterSpec::from).collect();
        log::debug!("applying {} file-type filter(s)", specs.len());
        host.set_file_types(&specs)?;
    }

    if let Some(dir) = &config.start_dir {
        host.set_folder(dir)?;
    }

    host.set_title(config.title.as_deref().unwrap_or(""))?;
    Ok(())
}

// ── Drivers ───────────────────────────────────────────────────────────────────

/// Configure, show, and extract a single path.
pub(crate) fn run_single<D: DialogHost>(
    host: &mut D,
    config: &Config,
    mode: Mode,
) -> Result<PathBuf> {
    configure(host, config, mode)?;
    host.show()?;
    host.result()
}

/// Configure, show, and extract the ordered multi-selection.
pub(crate) fn run_multiple<D: DialogHost>(
    host: &mut D,
    config: &Config,
    mode: Mode,
) -> Result<Vec<PathBuf>> {
    configure(host, config, mode)?;
    host.show()?;
    host.results()
}

// ── Tests ─────────────────────────────────────────────────────────────────────


// ── Windows parity ────────────────────────────────────────────────────────────

// The mirrored option bits above must stay equal to the shell constants the
// FFI layer feeds into SetOptions.
#[cfg(all(test, windows))]
mod win_parity {
    use windows::Win32::UI::Shell::{
        FOS_ALLOWMULTISELECT, FOS_FILEMUSTEXIST, FOS_NOCHANGEDIR, FOS_OVERWRITEPROMPT,
        FOS_PATHMUSTEXIST, FOS_PICKFOLDERS,
    };

    #[test]
    fn option_bits_match_shell_constants() {
        assert_eq!(super::OVERWRITE_PROMPT, FOS_OVERWRITEPROMPT.0);
        assert_eq!(super::NO_CHANGE_DIR, FOS_NOCHANGEDIR.0);
        assert_eq!(super::PICK_FOLDERS, FOS_PICKFOLDERS.0);
        assert_eq!(super::ALLOW_MULTISELECT, FOS_ALLOWMULTISELECT.0);
        assert_eq!(super::PATH_MUST_EXIST, FOS_PATHMUSTEXIST.0);
        assert_eq!(super::FILE_MUST_EXIST, FOS_FILEMUSTEXIST.0);
    }
}
