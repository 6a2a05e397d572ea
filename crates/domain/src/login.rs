//! Login screen state machine.
//!
//! The screen starts on an introduction panel. The primary action opens the
//! credential form; a click outside the form closes it again. Submission is
//! not wired to any backend and leaves the form open.

/// Visible panel of the login screen.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum LoginPhase {
    #[default]
    Intro,
    Form,
}

/// User input the login screen reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginEvent {
    /// The primary "enter" action on the intro panel.
    Enter,
    /// A click on the backdrop, outside the form panel.
    ClickOutside,
    /// A click landing inside the form panel.
    ClickInside,
    /// The form was submitted.
    Submit,
}

impl LoginPhase {
    /// Next phase after `event`. Pairs without a transition keep the phase.
    #[must_use]
    pub fn apply(self, event: LoginEvent) -> Self {
        match (self, event) {
            (Self::Intro, LoginEvent::Enter) => Self::Form,
            (Self::Form, LoginEvent::ClickOutside) => Self::Intro,
            (phase, _) => phase,
        }
    }

    #[must_use]
    pub fn shows_form(self) -> bool {
        self == Self::Form
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_start_on_intro() {
        assert_eq!(LoginPhase::default(), LoginPhase::Intro);
    }

    #[test]
    fn should_open_form_on_enter() {
        assert_eq!(LoginPhase::Intro.apply(LoginEvent::Enter), LoginPhase::Form);
    }

    #[test]
    fn should_close_form_on_outside_click() {
        assert_eq!(
            LoginPhase::Form.apply(LoginEvent::ClickOutside),
            LoginPhase::Intro
        );
    }

    #[test]
    fn should_keep_form_open_on_inside_click() {
        assert_eq!(
            LoginPhase::Form.apply(LoginEvent::ClickInside),
            LoginPhase::Form
        );
    }

    #[test]
    fn should_keep_form_open_on_submit() {
        assert_eq!(LoginPhase::Form.apply(LoginEvent::Submit), LoginPhase::Form);
    }

    #[test]
    fn should_ignore_outside_click_on_intro() {
        assert_eq!(
            LoginPhase::Intro.apply(LoginEvent::ClickOutside),
            LoginPhase::Intro
        );
    }

    #[test]
    fn should_ignore_repeated_enter_on_form() {
        assert_eq!(LoginPhase::Form.apply(LoginEvent::Enter), LoginPhase::Form);
    }

    #[test]
    fn should_cycle_intro_form_intro() {
        let phase = LoginPhase::default()
            .apply(LoginEvent::Enter)
            .apply(LoginEvent::ClickInside)
            .apply(LoginEvent::ClickOutside);
        assert_eq!(phase, LoginPhase::Intro);
        assert!(!phase.shows_form());
    }
}
