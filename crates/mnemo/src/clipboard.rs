//! Access to the native system clipboard.
use crate::Result;
use arboard::Clipboard;
use secrecy::{ExposeSecret, SecretString};

/// Native system clipboard.
///
/// Wraps [arboard::Clipboard](https://docs.rs/arboard/latest/arboard/struct.Clipboard.html).
pub struct NativeClipboard {
    clipboard: Clipboard,
}

impl NativeClipboard {
    /// Open the system clipboard.
    pub fn new() -> Result<Self> {
        Ok(Self {
            clipboard: Clipboard::new()?,
        })
    }

    /// Place a secret on the clipboard.
    ///
    /// # Errors
    ///
    /// Returns error if text failed to be stored on the clipboard.
    pub fn set_secret(&mut self, secret: &SecretString) -> Result<()> {
        self.clipboard.set_text(secret.expose_secret())?;
        tracing::debug!(len = secret.expose_secret().len(), "clipboard::set");
        Ok(())
    }
}
