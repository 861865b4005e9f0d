//! System clipboard access.

use copypasta::{ClipboardContext, ClipboardProvider};
use thiserror::Error;
use zeroize::Zeroize;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),
    #[error("clipboard write failed: {0}")]
    Write(String),
}

/// Something that can receive copied text.
pub trait Clipboard {
    fn copy(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// Native clipboard, connected on first use.
#[derive(Default)]
pub struct SystemClipboard {
    ctx: Option<ClipboardContext>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Connect now instead of on first copy.
    pub fn connect() -> Result<Self, ClipboardError> {
        let ctx = ClipboardContext::new().map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
        Ok(Self { ctx: Some(ctx) })
    }

    fn context(&mut self) -> Result<&mut ClipboardContext, ClipboardError> {
        if self.ctx.is_none() {
            let ctx =
                ClipboardContext::new().map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
            self.ctx = Some(ctx);
        }
        self.ctx
            .as_mut()
            .ok_or_else(|| ClipboardError::Unavailable("no clipboard context".into()))
    }
}

impl Clipboard for SystemClipboard {
    fn copy(&mut self, text: &str) -> Result<(), ClipboardError> {
        let ctx = self.context()?;
        ctx.set_contents(text.to_owned())
            .map_err(|e| ClipboardError::Write(e.to_string()))?;
        // zero the readback copy
        if let Ok(mut retrieved) = ctx.get_contents() {
            retrieved.zeroize();
        }
        tracing::debug!("copied to clipboard");
        Ok(())
    }
}
