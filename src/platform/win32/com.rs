// ── COM apartment lifetime ────────────────────────────────────────────────────
//
// The shell picker objects live in COM, and COM wants the calling thread
// joined to an apartment before CoCreateInstance.  That is process-wide,
// once-at-startup state, so it is the hosting application's job: nothing in
// this crate initialises COM behind the caller's back.

#![allow(unsafe_code)]

use windows::Win32::System::Com::{CoInitializeEx, CoUninitialize, COINIT_MULTITHREADED};

use crate::error::{DialogError, Result};

/// Join the calling thread to the multithreaded COM apartment.
///
/// Call once at process start, before showing any file or folder picker.
/// Calling again on an already initialised thread is harmless.  Message
/// boxes do not need this.
pub fn init() -> Result<()> {
    // SAFETY: CoInitializeEx with a null reserved pointer is always sound;
    // it only mutates COM's per-thread apartment state.  S_FALSE (already
    // initialised) counts as success.
    let hr = unsafe { CoInitializeEx(None, COINIT_MULTITHREADED) };
    if hr.is_ok() {
        Ok(())
    } else {
        // Typically RPC_E_CHANGED_MODE: the thread already belongs to a
        // single-threaded apartment created by someone else.
        Err(DialogError::Platform {
            function: "CoInitializeEx",
            code: hr.0 as u32,
        })
    }
}

/// Leave the COM apartment joined by [`init`].
///
/// Balanced teardown for hosts that care about it; a process that shows
/// dialogs until exit can simply never call this.
pub fn shutdown() {
    // SAFETY: CoUninitialize pairs with the CoInitializeEx call in init().
    // Calling it without a matching init is a no-op at worst.
    unsafe { CoUninitialize() };
}
