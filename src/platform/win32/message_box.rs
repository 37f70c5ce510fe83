// ── Message boxes ─────────────────────────────────────────────────────────────
//
// Thin wrapper around MessageBoxW.  The box is always ownerless (null HWND)
// and blocks the calling thread until dismissed.  MessageBoxW only fails
// when the box cannot be rendered at all; there is no recovery from that,
// so the failure value (0) simply reads as "not Yes".

#![allow(unsafe_code)]

use windows::core::PCWSTR;
use windows::Win32::Foundation::HWND;
use windows::Win32::UI::WindowsAndMessaging::{
    MessageBoxW, IDYES, MB_ICONERROR, MB_ICONINFORMATION, MB_ICONQUESTION, MB_OK, MB_YESNO,
};

use crate::message::MessageKind;

/// Show a modal message box and report whether the user pressed Yes.
///
/// The return value is only meaningful for the yes/no kinds; the display-only
/// kinds ignore it.
pub(crate) fn show(kind: MessageKind, text: &str, caption: &str) -> bool {
    let style = match kind {
        MessageKind::Info => MB_OK | MB_ICONINFORMATION,
        MessageKind::Error => MB_OK | MB_ICONERROR,
        MessageKind::ConfirmYesNo => MB_YESNO | MB_ICONQUESTION,
        MessageKind::ErrorYesNo => MB_YESNO | MB_ICONERROR,
    };

    let text_wide: Vec<u16> = text.encode_utf16().chain(std::iter::once(0)).collect();
    let caption_wide: Vec<u16> = caption.encode_utf16().chain(std::iter::once(0)).collect();

    // SAFETY: text_wide and caption_wide are valid null-terminated UTF-16
    // strings that remain allocated for the duration of the MessageBoxW call.
    // HWND::default() (null) means the box has no owner window.
    let pressed = unsafe {
        MessageBoxW(
            HWND::default(),
            PCWSTR(text_wide.as_ptr()),
            PCWSTR(caption_wide.as_ptr()),
            style,
        )
    };

    pressed == IDYES
}
