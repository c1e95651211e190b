//! Cell values for the data grid.
//!
//! A [`CellValue`] is the discriminated content unit rendered in one grid
//! cell: a tagged payload, a display-formatted string, and the flags the
//! hosting widget consults when opening an overlay editor.

/// The payload kind of a grid cell.
///
/// A value's kind never changes in place: edits replace the payload and
/// display text, never the kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellKind {
    /// Plain text.
    Text,
    /// Numeric value.
    Number,
    /// One or more image URIs.
    Image,
    /// Markdown source.
    Markdown,
    /// Boolean value.
    Boolean,
    /// Pure display content the widget may never edit.
    Protected,
}

impl CellKind {
    /// Returns `true` if cells of this kind accept edits.
    ///
    /// [`CellKind::Protected`] is display-only; every other kind has a
    /// bespoke editor in the hosting widget.
    #[inline]
    pub fn is_editable(self) -> bool {
        !matches!(self, CellKind::Protected)
    }
}

/// Tagged raw data for one cell.
#[derive(Debug, Clone, PartialEq)]
pub enum CellPayload {
    /// Plain text data.
    Text(String),
    /// Numeric data.
    Number(f64),
    /// Image URIs.
    Image(Vec<String>),
    /// Markdown source.
    Markdown(String),
    /// Boolean data.
    Boolean(bool),
    /// Display-only content.
    Protected(String),
}

impl CellPayload {
    /// Returns the kind discriminator for this payload.
    pub fn kind(&self) -> CellKind {
        match self {
            CellPayload::Text(_) => CellKind::Text,
            CellPayload::Number(_) => CellKind::Number,
            CellPayload::Image(_) => CellKind::Image,
            CellPayload::Markdown(_) => CellKind::Markdown,
            CellPayload::Boolean(_) => CellKind::Boolean,
            CellPayload::Protected(_) => CellKind::Protected,
        }
    }

    /// Attempts to get the payload as a text slice.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellPayload::Text(s) | CellPayload::Markdown(s) | CellPayload::Protected(s) => {
                Some(s.as_str())
            }
            _ => None,
        }
    }

    /// Attempts to get the payload as a number.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellPayload::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Attempts to get the payload as a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            CellPayload::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Attempts to get the payload as image URIs.
    pub fn as_images(&self) -> Option<&[String]> {
        match self {
            CellPayload::Image(uris) => Some(uris),
            _ => None,
        }
    }

    /// Formats the raw data for display.
    ///
    /// Used by the edit sink, which sets a merged entry's display text equal
    /// to the new raw data.
    pub fn display_text(&self) -> String {
        match self {
            CellPayload::Text(s) | CellPayload::Markdown(s) | CellPayload::Protected(s) => {
                s.clone()
            }
            CellPayload::Number(n) => n.to_string(),
            CellPayload::Image(uris) => uris.join(", "),
            CellPayload::Boolean(b) => b.to_string(),
        }
    }
}

impl From<String> for CellPayload {
    fn from(s: String) -> Self {
        CellPayload::Text(s)
    }
}

impl From<&str> for CellPayload {
    fn from(s: &str) -> Self {
        CellPayload::Text(s.to_string())
    }
}

impl From<f64> for CellPayload {
    fn from(n: f64) -> Self {
        CellPayload::Number(n)
    }
}

impl From<bool> for CellPayload {
    fn from(b: bool) -> Self {
        CellPayload::Boolean(b)
    }
}

/// The content of one grid cell.
///
/// Carries the tagged payload, a display-formatted string, and two flags:
/// `allow_overlay` (whether the widget may open an overlay editor) and
/// `readonly`. The data source forces `readonly` on outbound copies when it
/// is configured as non-editable; the flag stored in the cache is left
/// untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct CellValue {
    payload: CellPayload,
    display: String,
    allow_overlay: bool,
    readonly: bool,
}

impl CellValue {
    /// Creates a cell value with the display text derived from the payload.
    pub fn new(payload: CellPayload) -> Self {
        let display = payload.display_text();
        Self {
            payload,
            display,
            allow_overlay: true,
            readonly: false,
        }
    }

    /// Creates a cell value with an explicit display string.
    pub fn with_display(payload: CellPayload, display: impl Into<String>) -> Self {
        Self {
            payload,
            display: display.into(),
            allow_overlay: true,
            readonly: false,
        }
    }

    /// Sets whether an overlay editor may be opened for this cell.
    pub fn allow_overlay(mut self, allow: bool) -> Self {
        self.allow_overlay = allow;
        self
    }

    /// Sets the read-only flag.
    pub fn readonly(mut self, readonly: bool) -> Self {
        self.readonly = readonly;
        self
    }

    /// Returns the kind discriminator.
    #[inline]
    pub fn kind(&self) -> CellKind {
        self.payload.kind()
    }

    /// Returns the tagged payload.
    #[inline]
    pub fn payload(&self) -> &CellPayload {
        &self.payload
    }

    /// Returns the display-formatted text.
    #[inline]
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Returns `true` if the widget may open an overlay editor.
    #[inline]
    pub fn overlay_allowed(&self) -> bool {
        self.allow_overlay
    }

    /// Returns the read-only flag.
    #[inline]
    pub fn is_readonly(&self) -> bool {
        self.readonly
    }

    /// Returns a copy with the read-only flag replaced.
    ///
    /// Used for the outbound read-only projection; the cached value is never
    /// modified this way.
    pub fn projected_readonly(&self, readonly: bool) -> Self {
        let mut value = self.clone();
        value.readonly = readonly;
        value
    }

    /// Returns a copy with the payload and display replaced, preserving the
    /// kind and both flags.
    ///
    /// The display text is set equal to the new raw data. Callers must ensure
    /// the payload kinds match; the edit sink checks this before merging.
    pub fn merged_with(&self, payload: CellPayload) -> Self {
        debug_assert_eq!(self.kind(), payload.kind());
        let display = payload.display_text();
        Self {
            payload,
            display,
            allow_overlay: self.allow_overlay,
            readonly: self.readonly,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_editability() {
        assert!(CellKind::Text.is_editable());
        assert!(CellKind::Number.is_editable());
        assert!(CellKind::Image.is_editable());
        assert!(CellKind::Markdown.is_editable());
        assert!(CellKind::Boolean.is_editable());
        assert!(!CellKind::Protected.is_editable());
    }

    #[test]
    fn test_payload_kind() {
        assert_eq!(CellPayload::from("hello").kind(), CellKind::Text);
        assert_eq!(CellPayload::from(1.5).kind(), CellKind::Number);
        assert_eq!(CellPayload::from(true).kind(), CellKind::Boolean);
        assert_eq!(
            CellPayload::Image(vec!["a.png".into()]).kind(),
            CellKind::Image
        );
        assert_eq!(
            CellPayload::Markdown("# hi".into()).kind(),
            CellKind::Markdown
        );
    }

    #[test]
    fn test_display_derived_from_payload() {
        let value = CellValue::new(CellPayload::from("word"));
        assert_eq!(value.display(), "word");
        assert_eq!(value.payload().as_text(), Some("word"));

        let value = CellValue::new(CellPayload::Image(vec!["a.png".into(), "b.png".into()]));
        assert_eq!(value.display(), "a.png, b.png");
    }

    #[test]
    fn test_merge_preserves_kind_and_flags() {
        let original = CellValue::new(CellPayload::from("before"))
            .allow_overlay(true)
            .readonly(true);
        let merged = original.merged_with(CellPayload::from("after"));

        assert_eq!(merged.kind(), CellKind::Text);
        assert_eq!(merged.payload().as_text(), Some("after"));
        assert_eq!(merged.display(), "after");
        assert!(merged.overlay_allowed());
        assert!(merged.is_readonly());
    }

    #[test]
    fn test_projection_leaves_original_untouched() {
        let value = CellValue::new(CellPayload::from("data")).readonly(false);
        let projected = value.projected_readonly(true);

        assert!(projected.is_readonly());
        assert!(!value.is_readonly());
        assert_eq!(projected.payload(), value.payload());
    }
}
