// ── Platform abstraction layer ────────────────────────────────────────────────
//
// This module is the only path to the OS.  No `unsafe` lives here; all
// Win32 / COM FFI is confined to the `win32` sub-module and never leaks
// outward.  Off Windows the sub-module is absent and the crate exposes only
// its portable core.

#[cfg(windows)]
pub(crate) mod win32;
