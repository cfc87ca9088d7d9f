//! View state shared by the app and its components.

/// Generic loading state for async data.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LoadState<T> {
    /// Nothing requested yet
    #[default]
    Idle,
    /// First fetch in flight, nothing to show yet
    Loading,
    Loaded(T),
    /// First fetch failed
    Error(String),
}

impl<T> LoadState<T> {
    pub fn is_loaded(&self) -> bool {
        matches!(self, LoadState::Loaded(_))
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            LoadState::Loaded(data) => Some(data),
            _ => None,
        }
    }

    pub fn data_mut(&mut self) -> Option<&mut T> {
        match self {
            LoadState::Loaded(data) => Some(data),
            _ => None,
        }
    }
}

/// Which of the top-level views is on screen.
///
/// Being an enum, exactly one of them is visible at any time.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SessionView {
    /// Startup, or a re-probe in flight
    #[default]
    Probing,
    /// Not signed in; `reason` explains why the probe failed
    Anonymous { reason: String },
    Authenticated { email: String },
}

impl SessionView {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, SessionView::Authenticated { .. })
    }

    /// Header indicator glyph.
    pub fn indicator(&self) -> &'static str {
        match self {
            SessionView::Probing => "◐",
            SessionView::Anonymous { .. } => "○",
            SessionView::Authenticated { .. } => "●",
        }
    }

    pub fn label(&self) -> String {
        match self {
            SessionView::Probing => "Checking session...".to_string(),
            SessionView::Anonymous { .. } => "Not signed in".to_string(),
            SessionView::Authenticated { email } => email.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_state_accessors() {
        let mut state: LoadState<Vec<u32>> = LoadState::Loading;
        assert!(!state.is_loaded());
        assert!(state.data().is_none());

        state = LoadState::Loaded(vec![1, 2]);
        state.data_mut().unwrap().retain(|n| *n != 1);
        assert_eq!(state.data(), Some(&vec![2]));
    }

    #[test]
    fn test_session_view_labels() {
        assert_eq!(SessionView::default(), SessionView::Probing);
        let view = SessionView::Authenticated {
            email: "reviewer@example.com".to_string(),
        };
        assert!(view.is_authenticated());
        assert_eq!(view.label(), "reviewer@example.com");
        assert_eq!(view.indicator(), "●");
        assert!(
            !SessionView::Anonymous {
                reason: String::new()
            }
            .is_authenticated()
        );
    }
}
