// ── Message box builder ───────────────────────────────────────────────────────
//
// Thin front for the native modal message box.  Display-only variants return
// nothing; the yes/no variants return the user's answer.  A message box that
// fails to render has no recovery path, so the native return value is not
// surfaced as an error.

// Off Windows only the unit tests drive the kind/caption plumbing.
#![cfg_attr(not(windows), allow(dead_code))]

/// Which icon / button set a message box gets, and which caption it falls
/// back to when the caller supplied none.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MessageKind {
    Info,
    Error,
    ConfirmYesNo,
    ErrorYesNo,
}

impl MessageKind {
    pub(crate) fn default_title(self) -> &'static str {
        match self {
            Self::Info => "Information",
            Self::Error | Self::ErrorYesNo => "Error",
            Self::ConfirmYesNo => "Confirm?",
        }
    }
}

// ── Builder ───────────────────────────────────────────────────────────────────

/// Builder for a modal native message box.
///
/// ```ignore
/// windlg::Message::new("Export finished.").info();
///
/// if windlg::Message::new("Delete 3 files?").title("Cleanup").yes_no() {
///     // user pressed Yes
/// }
/// ```
#[derive(Debug)]
pub struct Message {
    text: String,
    title: Option<String>,
}

impl Message {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            title: None,
        }
    }

    /// Window caption.  Without one (or with an empty one) each variant
    /// falls back to its own default: "Information", "Error", or "Confirm?".
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    fn caption(&self, kind: MessageKind) -> &str {
        match self.title.as_deref() {
            Some(t) if !t.is_empty() => t,
            _ => kind.default_title(),
        }
    }

    /// Show an informational box (OK button, info icon).
    #[cfg(windows)]
    pub fn info(self) {
        self.show(MessageKind::Info);
    }

    /// Show an error box (OK button, error icon).
    #[cfg(windows)]
    pub fn error(self) {
        self.show(MessageKind::Error);
    }

    /// Ask a yes/no question (question icon).  `true` iff the user pressed Yes.
    #[cfg(windows)]
    pub fn yes_no(self) -> bool {
        self.show(MessageKind::ConfirmYesNo)
    }

    /// Ask a yes/no question with the error icon.  `true` iff the user
    /// pressed Yes.
    #[cfg(windows)]
    pub fn error_yes_no(self) -> bool {
        self.show(MessageKind::ErrorYesNo)
    }

    #[cfg(windows)]
    fn show(&self, kind: MessageKind) -> bool {
        crate::platform::win32::message_box::show(kind, &self.text, self.caption(kind))
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_captions_per_kind() {
        let m = Message::new("hello");
        assert_eq!(m.caption(MessageKind::Info), "Information");
        assert_eq!(m.caption(MessageKind::Error), "Error");
        assert_eq!(m.caption(MessageKind::ErrorYesNo), "Error");
        assert_eq!(m.caption(MessageKind::ConfirmYesNo), "Confirm?");
    }

    #[test]
    fn explicit_title_wins() {
        let m = Message::new("hello").title("Setup");
        assert_eq!(m.caption(MessageKind::Info), "Setup");
        assert_eq!(m.caption(MessageKind::ConfirmYesNo), "Setup");
    }

    #[test]
    fn empty_title_falls_back_to_default() {
        let m = Message::new("hello").title("");
        assert_eq!(m.caption(MessageKind::Error), "Error");
    }
}
