// ── Safety policy ────────────────────────────────────────────────────────────
// Unsafe code is forbidden everywhere except:
//   • `platform::win32` – Win32 / COM FFI
// Each unsafe block in that module MUST carry a `// SAFETY:` comment.
#![deny(unsafe_code)]

//! Native Windows dialogs behind a small builder API.
//!
//! Three entry points, all blocking the calling thread until the user
//! dismisses the native UI:
//!
//! * [`Message`]: `MessageBoxW` in four flavours (info, error, yes/no
//!   confirm, yes/no error).
//! * [`FileDialog`]: the shell file picker (`IFileOpenDialog` /
//!   `IFileSaveDialog`) for open, multi-select open, and save.
//! * [`Directory`]: the same picker configured for folder-only selection.
//!
//! The COM apartment is process-wide state: call [`init`] once at startup
//! before showing any file or folder picker, and [`shutdown`] at exit if you
//! care about balanced teardown. Message boxes do not require COM.
//!
//! ```ignore
//! windlg::init()?;
//!
//! let path = windlg::FileDialog::new()
//!     .title("Open project")
//!     .filter("Project files", &["toml", "json"])
//!     .start_dir(r"C:\projects")
//!     .load()?;
//!
//! if windlg::Message::new("Overwrite the existing copy?").yes_no() {
//!     // ...
//! }
//! ```
//!
//! Cancellation is an ordinary outcome, not a panic: every picker returns
//! [`DialogError::Cancelled`] when the user dismisses the dialog, and
//! callers are expected to branch on [`DialogError::is_cancelled`].

mod error;
mod file;
mod message;
mod platform;
mod session;

pub use error::{DialogError, Result};
pub use file::{Directory, FileDialog};
pub use message::Message;

#[cfg(windows)]
pub use platform::win32::com::{init, shutdown};
