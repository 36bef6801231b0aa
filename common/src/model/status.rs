/// Tone of the status line. Also decides whether a status update touches the
/// metadata timestamp.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum StatusKind {
    #[default]
    Neutral,
    Success,
    Error,
}

/// The latest status message. No history is kept.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Status {
    pub message: String,
    pub kind: StatusKind,
}

impl Status {
    pub fn new(message: impl Into<String>, kind: StatusKind) -> Self {
        Self {
            message: message.into(),
            kind,
        }
    }
}

impl Default for Status {
    fn default() -> Self {
        Self::new("Ready", StatusKind::Neutral)
    }
}
