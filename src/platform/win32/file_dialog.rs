// ── Shell file dialogs ────────────────────────────────────────────────────────
//
// One `NativeDialog` per shown picker: it owns the COM dialog object and,
// when a start directory was supplied, the shell item resolved for it.
// Both references are released by `Drop` (the windows-crate smart pointers
// call Release), so the release runs exactly once on every exit path,
// including cancellation and platform failure.
//
// Callers must have joined a COM apartment first (`com::init`).

#![allow(unsafe_code)]

use std::ffi::c_void;
use std::path::{Path, PathBuf};

use windows::core::{Interface, HSTRING, PCWSTR};
use windows::Win32::Foundation::HWND;
use windows::Win32::System::Com::{CoCreateInstance, CoTaskMemFree, CLSCTX_INPROC_SERVER};
use windows::Win32::UI::Shell::Common::COMDLG_FILTERSPEC;
use windows::Win32::UI::Shell::{
    FileOpenDialog, FileSaveDialog, IFileDialog, IFileOpenDialog, IShellItem,
    SHCreateItemFromParsingName, FILEOPENDIALOGOPTIONS, SIGDN_DESKTOPABSOLUTEEDITING,
};

use crate::error::{DialogError, Result};
use crate::session::{DialogHost, FilterSpec, Mode};

// ── Session object ────────────────────────────────────────────────────────────

/// An owned native picker, created immediately before it is shown and
/// dropped immediately after result extraction.
pub(crate) struct NativeDialog {
    dialog: IFileDialog,
    /// Keeps the start-folder shell item alive until the session drops;
    /// never read back, only owned.
    _start_folder: Option<IShellItem>,
}

impl NativeDialog {
    /// CoCreate the dialog object for `mode`.  Save mode gets the save
    /// dialog class; everything else (including folder browsing) is built
    /// on the open dialog class.
    pub(crate) fn create(mode: Mode) -> Result<Self> {
        // SAFETY: CoCreateInstance with a registered shell CLSID and a null
        // outer unknown; requires the thread to be in a COM apartment,
        // which com::init() establishes.
        let created: windows::core::Result<IFileDialog> = match mode {
            Mode::Save => unsafe { CoCreateInstance(&FileSaveDialog, None, CLSCTX_INPROC_SERVER) },
            _ => unsafe { CoCreateInstance(&FileOpenDialog, None, CLSCTX_INPROC_SERVER) },
        };
        let dialog = created.map_err(|e| DialogError::from_com("CoCreateInstance", &e))?;

        log::debug!("created {mode:?} file dialog");
        Ok(Self {
            dialog,
            _start_folder: None,
        })
    }
}

impl DialogHost for NativeDialog {
    fn set_options(&mut self, bits: u32) -> Result<()> {
        // SAFETY: self.dialog is a live COM reference owned by this session.
        // Reading the object's default options first preserves whatever the
        // shell pre-set on it.
        unsafe {
            let current = self
                .dialog
                .GetOptions()
                .map_err(|e| DialogError::from_com("IFileDialog::GetOptions", &e))?;
            self.dialog
                .SetOptions(current | FILEOPENDIALOGOPTIONS(bits))
                .map_err(|e| DialogError::from_com("IFileDialog::SetOptions", &e))
        }
    }

    fn set_file_types(&mut self, specs: &[FilterSpec]) -> Result<()> {
        // The wide buffers must outlive the COMDLG_FILTERSPEC array below.
        let wide: Vec<(HSTRING, HSTRING)> = specs
            .iter()
            .map(|s| (HSTRING::from(s.name.as_str()), HSTRING::from(s.spec.as_str())))
            .collect();
        let native: Vec<COMDLG_FILTERSPEC> = wide
            .iter()
            .map(|(name, spec)| COMDLG_FILTERSPEC {
                pszName: PCWSTR(name.as_ptr()),
                pszSpec: PCWSTR(spec.as_ptr()),
            })
            .collect();

        // SAFETY: every pszName/pszSpec points into `wide`, which lives
        // until after the call returns; the dialog copies the strings.
        unsafe { self.dialog.SetFileTypes(&native) }
            .map_err(|e| DialogError::from_com("IFileDialog::SetFileTypes", &e))
    }

    fn set_folder(&mut self, dir: &Path) -> Result<()> {
        let dir_wide = HSTRING::from(dir.as_os_str());

        // SAFETY: dir_wide is a valid null-terminated wide string for the
        // duration of the call.  The returned shell item is a new reference
        // owned by this session.
        let item: IShellItem = unsafe { SHCreateItemFromParsingName(&dir_wide, None) }
            .map_err(|e| DialogError::from_com("SHCreateItemFromParsingName", &e))?;

        // SAFETY: self.dialog and item are live COM references.
        unsafe { self.dialog.SetFolder(&item) }
            .map_err(|e| DialogError::from_com("IFileDialog::SetFolder", &e))?;

        self._start_folder = Some(item);
        Ok(())
    }

    fn set_title(&mut self, title: &str) -> Result<()> {
        let title_wide = HSTRING::from(title);
        // SAFETY: title_wide is valid for the duration of the call; the
        // dialog copies the string.
        unsafe { self.dialog.SetTitle(&title_wide) }
            .map_err(|e| DialogError::from_com("IFileDialog::SetTitle", &e))
    }

    fn show(&mut self) -> Result<()> {
        // SAFETY: blocks the calling thread in the shell's modal loop until
        // the user dismisses the picker.  Ownerless (null HWND).
        match unsafe { self.dialog.Show(HWND::default()) } {
            Ok(()) => Ok(()),
            Err(e) => {
                let err = DialogError::from_com("IFileDialog::Show", &e);
                match &err {
                    DialogError::Cancelled => log::debug!("file dialog dismissed by user"),
                    DialogError::Platform { code, .. } => {
                        log::error!("IFileDialog::Show failed (error {code:#010x})");
                    }
                }
                Err(err)
            }
        }
    }

    fn result(&mut self) -> Result<PathBuf> {
        // SAFETY: Show returned success, so the dialog holds a result item.
        let item = unsafe { self.dialog.GetResult() }
            .map_err(|e| DialogError::from_com("IFileDialog::GetResult", &e))?;
        display_name(&item)
    }

    fn results(&mut self) -> Result<Vec<PathBuf>> {
        // Only the open dialog class supports multi-select, so the base
        // reference is queried back up to IFileOpenDialog here.
        let open: IFileOpenDialog = self
            .dialog
            .cast()
            .map_err(|e| DialogError::from_com("IFileDialog::QueryInterface", &e))?;

        // SAFETY: open is a live reference; GetResults is valid after a
        // successful Show.
        let items = unsafe { open.GetResults() }
            .map_err(|e| DialogError::from_com("IFileOpenDialog::GetResults", &e))?;

        // SAFETY: items is a live IShellItemArray reference.
        let count = unsafe { items.GetCount() }
            .map_err(|e| DialogError::from_com("IShellItemArray::GetCount", &e))?;

        let mut paths = Vec::with_capacity(count as usize);
        for i in 0..count {
            // SAFETY: i < count, so GetItemAt yields a valid item reference.
            let item = unsafe { items.GetItemAt(i) }
                .map_err(|e| DialogError::from_com("IShellItemArray::GetItemAt", &e))?;
            paths.push(display_name(&item)?);
        }
        Ok(paths)
    }
}

// ── Result extraction ─────────────────────────────────────────────────────────

/// The item's display name in desktop-absolute-editing form: a fully
/// qualified, user-editable path string.  Used uniformly for single, multi,
/// save, and folder results.
fn display_name(item: &IShellItem) -> Result<PathBuf> {
    // SAFETY: GetDisplayName allocates a wide string that we must free with
    // CoTaskMemFree once copied out.
    let pw = unsafe { item.GetDisplayName(SIGDN_DESKTOPABSOLUTEEDITING) }
        .map_err(|e| DialogError::from_com("IShellItem::GetDisplayName", &e))?;

    // SAFETY: pw is non-null and null-terminated until freed below.
    let path = PathBuf::from(String::from_utf16_lossy(unsafe { pw.as_wide() }));

    // SAFETY: pw was allocated by the shell with the COM task allocator.
    unsafe { CoTaskMemFree(Some(pw.as_ptr() as *const c_void)) };

    Ok(path)
}
