// SPDX-License-Identifier: MPL-2.0
//! Show requests and message text.
//!
//! A [`Request`] is the value handed to [`Controller::show`](super::Controller::show).
//! It carries exactly one message text, either plain or styled; the
//! [`SnackbarText`] enum makes "no text" and "both texts" unrepresentable.

use super::severity::Severity;
use iced::Color;

/// One run of styled text.
#[derive(Debug, Clone, PartialEq)]
pub struct StyledSpan {
    pub text: String,
    pub color: Option<Color>,
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
}

impl StyledSpan {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            color: None,
            bold: false,
            italic: false,
            underline: false,
        }
    }

    #[must_use]
    pub fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    #[must_use]
    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    #[must_use]
    pub fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    #[must_use]
    pub fn underline(mut self) -> Self {
        self.underline = true;
        self
    }
}

/// Rich message text made of consecutive [`StyledSpan`]s.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyledText {
    spans: Vec<StyledSpan>,
}

impl StyledText {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a span.
    #[must_use]
    pub fn push(mut self, span: StyledSpan) -> Self {
        self.spans.push(span);
        self
    }

    #[must_use]
    pub fn spans(&self) -> &[StyledSpan] {
        &self.spans
    }

    /// Concatenated text of all spans, without styling.
    #[must_use]
    pub fn to_plain(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }
}

impl FromIterator<StyledSpan> for StyledText {
    fn from_iter<I: IntoIterator<Item = StyledSpan>>(iter: I) -> Self {
        Self {
            spans: iter.into_iter().collect(),
        }
    }
}

/// The label of a snack bar.
#[derive(Debug, Clone, PartialEq)]
pub enum SnackbarText {
    Plain(String),
    Styled(StyledText),
}

impl SnackbarText {
    /// Text content without styling, used for logging.
    #[must_use]
    pub fn to_plain(&self) -> String {
        match self {
            SnackbarText::Plain(text) => text.clone(),
            SnackbarText::Styled(styled) => styled.to_plain(),
        }
    }
}

impl From<&str> for SnackbarText {
    fn from(text: &str) -> Self {
        SnackbarText::Plain(text.to_owned())
    }
}

impl From<String> for SnackbarText {
    fn from(text: String) -> Self {
        SnackbarText::Plain(text)
    }
}

impl From<StyledText> for SnackbarText {
    fn from(text: StyledText) -> Self {
        SnackbarText::Styled(text)
    }
}

/// A request to show a snack bar.
///
/// `M` is the message delivered to the application when the snack bar is
/// tapped; it plays the role of a tap callback in the Elm architecture.
///
/// ```
/// use iced_snackbar::ui::snackbar::{Request, Severity};
///
/// let request: Request<()> = Request::success("Saved").auto_hide(false);
/// assert_eq!(request.severity(), Severity::Success);
/// assert!(!request.is_auto_hide());
/// ```
#[derive(Debug, Clone)]
pub struct Request<M> {
    text: SnackbarText,
    severity: Severity,
    auto_hide: bool,
    on_tap: Option<M>,
}

impl<M> Request<M> {
    /// Creates a request that auto-hides and has no tap message.
    pub fn new(severity: Severity, text: impl Into<SnackbarText>) -> Self {
        Self {
            text: text.into(),
            severity,
            auto_hide: true,
            on_tap: None,
        }
    }

    pub fn error(text: impl Into<SnackbarText>) -> Self {
        Self::new(Severity::Error, text)
    }

    pub fn warning(text: impl Into<SnackbarText>) -> Self {
        Self::new(Severity::Warning, text)
    }

    pub fn info(text: impl Into<SnackbarText>) -> Self {
        Self::new(Severity::Info, text)
    }

    pub fn success(text: impl Into<SnackbarText>) -> Self {
        Self::new(Severity::Success, text)
    }

    /// Whether the snack bar hides itself after the configured delay.
    #[must_use]
    pub fn auto_hide(mut self, auto_hide: bool) -> Self {
        self.auto_hide = auto_hide;
        self
    }

    /// Message delivered to the application when the snack bar is tapped.
    #[must_use]
    pub fn on_tap(mut self, message: M) -> Self {
        self.on_tap = Some(message);
        self
    }

    #[must_use]
    pub fn text(&self) -> &SnackbarText {
        &self.text
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn is_auto_hide(&self) -> bool {
        self.auto_hide
    }

    #[must_use]
    pub fn has_tap_handler(&self) -> bool {
        self.on_tap.is_some()
    }

    pub(crate) fn into_parts(self) -> (Severity, SnackbarText, bool, Option<M>) {
        (self.severity, self.text, self.auto_hide, self.on_tap)
    }
}
