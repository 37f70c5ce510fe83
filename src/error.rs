// ── Central error type ────────────────────────────────────────────────────────
//
// All fallible operations in windlg return `error::Result<T>`.  Cancellation
// is deliberately an error variant rather than an `Option`: it keeps a
// dismissed dialog distinguishable from an empty path at every call site.

/// Every error a dialog call can produce.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogError {
    /// The user dismissed the dialog without making a selection.
    ///
    /// Expected and recoverable: branch on [`DialogError::is_cancelled`]
    /// when cancellation should not be treated as exceptional.
    Cancelled,

    /// A native call failed for a reason other than cancellation.
    Platform {
        /// The name of the failing function, for display purposes.
        function: &'static str,
        /// The raw HRESULT, reinterpreted as `u32` for display purposes.
        code: u32,
    },
}

impl DialogError {
    /// `true` iff this is the user-dismissal outcome.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}

impl std::fmt::Display for DialogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Cancelled => write!(f, "dialog cancelled by user"),
            Self::Platform { function, code } => {
                write!(f, "{function} failed (error {code:#010x})")
            }
        }
    }
}

impl std::error::Error for DialogError {}

// Convert a windows-crate error into a DialogError so that `?` can be used on
// `windows::core::Result<T>` throughout the platform module.  The shell
// reports user dismissal as HRESULT_FROM_WIN32(ERROR_CANCELLED); that one
// failure is the Cancelled outcome, everything else is a platform fault.
#[cfg(windows)]
impl DialogError {
    pub(crate) fn from_com(function: &'static str, e: &windows::core::Error) -> Self {
        use windows::Win32::Foundation::ERROR_CANCELLED;

        if e.code() == ERROR_CANCELLED.to_hresult() {
            return Self::Cancelled;
        }
        Self::Platform {
            function,
            code: e.code().0 as u32,
        }
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, DialogError>;

// ── Tests ─────────────────────────────────────────────────────────────────────
