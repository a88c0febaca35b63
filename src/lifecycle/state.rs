/// Observable state of one controller.
#[derive(Debug, Clone, PartialEq)]
pub struct CallState<T> {
    pub data: Option<T>,
    pub loading: bool,
    pub error: Option<String>,
}

impl<T> Default for CallState<T> {
    fn default() -> Self {
        Self {
            data: None,
            loading: false,
            error: None,
        }
    }
}

/// Coarse phase derived from a [`CallState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallPhase {
    Idle,
    Loading,
    Success,
    Failure,
}

impl<T> CallState<T> {
    pub fn phase(&self) -> CallPhase {
        if self.loading {
            CallPhase::Loading
        } else if self.error.is_some() {
            CallPhase::Failure
        } else if self.data.is_some() {
            CallPhase::Success
        } else {
            CallPhase::Idle
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phase_follows_fields() {
        let mut state = CallState::<u8>::default();
        assert_eq!(state.phase(), CallPhase::Idle);
        state.loading = true;
        state.data = Some(1);
        assert_eq!(state.phase(), CallPhase::Loading);
        state.loading = false;
        assert_eq!(state.phase(), CallPhase::Success);
        state.error = Some("x".into());
        assert_eq!(state.phase(), CallPhase::Failure);
    }
}
