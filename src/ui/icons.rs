//! Status icons used across all output.

/// Canonical status kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusKind {
    /// A group loaded.
    Success,
    /// A capability could not be loaded.
    Failed,
    /// Every group loaded.
    Ready,
}

impl StatusKind {
    /// Emoji icon for the status line.
    pub fn icon(self) -> &'static str {
        match self {
            Self::Success => "✅",
            Self::Failed => "❌",
            Self::Ready => "🚀",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_returns_emoji() {
        assert_eq!(StatusKind::Success.icon(), "✅");
        assert_eq!(StatusKind::Failed.icon(), "❌");
        assert_eq!(StatusKind::Ready.icon(), "🚀");
    }
}
