//! Status line shown under the output region.

/// Fixed user-facing messages.
pub mod messages {
    pub const EMPTY: &str = "Enter text or a URL to generate a QR code.";
    pub const ENCODER_UNAVAILABLE: &str =
        "QR code library failed to load. Please refresh the page.";
    pub const COPY_FAILED: &str = "Could not copy the QR code. Try downloading it instead.";
    pub const COPIED: &str = "QR code copied to clipboard.";
    pub const TOO_LONG: &str = "Text is too long to fit in a QR code.";
    pub const ENCODE_FAILED: &str = "Could not generate a QR code for this text.";
    pub const SAVE_FAILED: &str = "Could not save the QR code.";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Status {
    pub kind: StatusKind,
    pub message: &'static str,
}

impl Status {
    pub fn info(message: &'static str) -> Self {
        Self {
            kind: StatusKind::Info,
            message,
        }
    }

    pub fn error(message: &'static str) -> Self {
        Self {
            kind: StatusKind::Error,
            message,
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == StatusKind::Error
    }
}
