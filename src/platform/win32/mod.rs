// ── Win32 platform implementation ─────────────────────────────────────────────
//
// The one module in the codebase where `unsafe` code is permitted.  Every
// `unsafe` block MUST carry a `// SAFETY:` comment that states:
//   • which invariant makes the operation sound, and
//   • what the caller is responsible for maintaining.
//
// Nothing in this module is `pub` beyond what callers genuinely need; keep
// the unsafe surface as small as possible.

#![allow(unsafe_code)]

// ── Sub-modules ───────────────────────────────────────────────────────────────

pub(crate) mod com; // process-wide COM apartment init / teardown
pub(crate) mod file_dialog; // IFileOpenDialog / IFileSaveDialog sessions
pub(crate) mod message_box; // MessageBoxW variants
