use tracing::debug;

/// Open/closed state of the calendar popup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Overlay {
    open: bool,
}

impl Overlay {
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Input focus or click flips the popup.
    pub fn toggle(&mut self) {
        self.open = !self.open;
        debug!(open = self.open, "overlay toggled");
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// A click anywhere in the document. Clicks outside the picker close it.
    pub fn handle_document_click(&mut self, inside: bool) {
        if self.open && !inside {
            debug!("outside click closed overlay");
            self.open = false;
        }
    }
}
