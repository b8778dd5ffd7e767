//! Confirmation flow for destructive operations.
//!
//! A `ConfirmFlow` is armed with a `ConfirmSpec` describing one confirmation
//! session: the action to dispatch on confirm, optional open/cancel
//! notifications, labels, styling, and the dialog body. The flow is an
//! explicit two-state machine (`Closed`/`Open`) whose at-most-once latch
//! travels inside the phase value, so no transition can observe a
//! half-updated latch/visibility pair.
//!
//! The trigger affordance toggles: activating it while the dialog is open
//! cancels, which is why `activate` exists alongside the named `open`,
//! `cancel`, and `confirm` transitions.

use crate::app::action::Action;

/// Styling hint for the confirm button. No behavioral effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Priority {
    #[default]
    Primary,
    Danger,
}

/// Embedded single-field sub-form shown inside the dialog. Submitting it
/// reaches the confirm path directly, bypassing the confirm button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptSpec {
    pub label: String,
    pub placeholder: String,
    pub required: bool,
}

/// Dialog body: either a static message (rendered emphasized) or an
/// interactive prompt whose submitted value is handed to the confirm effect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogBody {
    Static(String),
    Prompt(PromptSpec),
}

/// Configuration for one confirmation session.
///
/// `on_confirm` is the one required collaborator; the constructor signature
/// enforces that. Everything else defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmSpec {
    pub title: String,
    pub body: DialogBody,
    pub confirm_text: String,
    pub cancel_text: String,
    pub priority: Priority,
    pub disabled: bool,
    pub on_confirm: Action,
    pub on_confirming: Option<Action>,
    pub on_cancel: Option<Action>,
}

impl ConfirmSpec {
    pub fn new(on_confirm: Action) -> Self {
        Self {
            title: "Confirm".to_string(),
            body: DialogBody::Static(String::new()),
            confirm_text: "Confirm".to_string(),
            cancel_text: "Cancel".to_string(),
            priority: Priority::Primary,
            disabled: false,
            on_confirm,
            on_confirming: None,
            on_cancel: None,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.body = DialogBody::Static(message.into());
        self
    }

    pub fn prompt(mut self, prompt: PromptSpec) -> Self {
        self.body = DialogBody::Prompt(prompt);
        self
    }

    pub fn confirm_text(mut self, text: impl Into<String>) -> Self {
        self.confirm_text = text.into();
        self
    }

    pub fn cancel_text(mut self, text: impl Into<String>) -> Self {
        self.cancel_text = text.into();
        self
    }

    pub fn danger(mut self) -> Self {
        self.priority = Priority::Danger;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn on_confirming(mut self, action: Action) -> Self {
        self.on_confirming = Some(action);
        self
    }

    pub fn on_cancel(mut self, action: Action) -> Self {
        self.on_cancel = Some(action);
        self
    }
}

/// Dialog visibility and the confirm latch, updated as one value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Closed { confirmed: bool },
    Open { confirmed: bool },
}

impl Default for Phase {
    fn default() -> Self {
        Self::Closed { confirmed: false }
    }
}

/// What a transition produced; the reducer maps this onto dispatches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmOutcome {
    /// Nothing happened: unarmed, disabled, wrong phase, or latch already set.
    Ignored,
    Opened {
        notify: Option<Action>,
    },
    Cancelled {
        notify: Option<Action>,
    },
    Confirmed {
        effect: Action,
        /// Submitted prompt value when the body is interactive.
        input: Option<String>,
    },
}

#[derive(Debug, Default)]
pub struct ConfirmFlow {
    spec: Option<ConfirmSpec>,
    phase: Phase,
    confirm_button_disabled: bool,
    prompt_input: String,
}

impl ConfirmFlow {
    /// Installs a new session, closed with the latch clear. Replaces any
    /// previous session.
    pub fn arm(&mut self, spec: ConfirmSpec) {
        self.spec = Some(spec);
        self.phase = Phase::default();
        self.confirm_button_disabled = false;
        self.prompt_input.clear();
    }

    /// The trigger affordance: opens when closed, cancels when open.
    /// A disabled session never transitions, even when invoked
    /// programmatically.
    pub fn activate(&mut self) -> ConfirmOutcome {
        let Some(spec) = &self.spec else {
            return ConfirmOutcome::Ignored;
        };
        if spec.disabled {
            return ConfirmOutcome::Ignored;
        }
        match self.phase {
            Phase::Closed { .. } => self.open(),
            Phase::Open { .. } => self.cancel(),
        }
    }

    pub fn open(&mut self) -> ConfirmOutcome {
        let Some(spec) = &self.spec else {
            return ConfirmOutcome::Ignored;
        };
        if spec.disabled || matches!(self.phase, Phase::Open { .. }) {
            return ConfirmOutcome::Ignored;
        }
        self.phase = Phase::Open { confirmed: false };
        self.confirm_button_disabled = false;
        self.prompt_input.clear();
        ConfirmOutcome::Opened {
            notify: spec.on_confirming.clone(),
        }
    }

    pub fn cancel(&mut self) -> ConfirmOutcome {
        let Some(spec) = &self.spec else {
            return ConfirmOutcome::Ignored;
        };
        if !matches!(self.phase, Phase::Open { .. }) {
            return ConfirmOutcome::Ignored;
        }
        // Latch resets on both toggle directions.
        self.phase = Phase::Closed { confirmed: false };
        ConfirmOutcome::Cancelled {
            notify: spec.on_cancel.clone(),
        }
    }

    /// Fires the confirm effect iff the latch is clear, then closes. The
    /// confirm button stays visually disabled until the next open, so a
    /// rapid second activation lands on a closed flow and is ignored.
    pub fn confirm(&mut self) -> ConfirmOutcome {
        let Some(spec) = &self.spec else {
            return ConfirmOutcome::Ignored;
        };
        let Phase::Open { confirmed } = self.phase else {
            return ConfirmOutcome::Ignored;
        };
        self.phase = Phase::Closed { confirmed: true };
        self.confirm_button_disabled = true;
        if confirmed {
            return ConfirmOutcome::Ignored;
        }
        let input = match &spec.body {
            DialogBody::Prompt(_) => Some(self.prompt_input.clone()),
            DialogBody::Static(_) => None,
        };
        ConfirmOutcome::Confirmed {
            effect: spec.on_confirm.clone(),
            input,
        }
    }

    /// Submit path of an interactive body. A required empty prompt is
    /// rejected without touching the latch.
    pub fn submit_prompt(&mut self) -> ConfirmOutcome {
        let Some(spec) = &self.spec else {
            return ConfirmOutcome::Ignored;
        };
        let DialogBody::Prompt(prompt) = &spec.body else {
            return ConfirmOutcome::Ignored;
        };
        if !matches!(self.phase, Phase::Open { .. }) {
            return ConfirmOutcome::Ignored;
        }
        if prompt.required && self.prompt_input.trim().is_empty() {
            return ConfirmOutcome::Ignored;
        }
        self.confirm()
    }

    pub fn push_prompt_char(&mut self, c: char) {
        if self.is_open() && self.has_prompt() {
            self.prompt_input.push(c);
        }
    }

    pub fn pop_prompt_char(&mut self) {
        if self.is_open() && self.has_prompt() {
            self.prompt_input.pop();
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self.phase, Phase::Open { .. })
    }

    pub fn has_prompt(&self) -> bool {
        matches!(
            self.spec.as_ref().map(|s| &s.body),
            Some(DialogBody::Prompt(_))
        )
    }

    pub fn spec(&self) -> Option<&ConfirmSpec> {
        self.spec.as_ref()
    }

    pub fn prompt_input(&self) -> &str {
        &self.prompt_input
    }

    pub fn confirm_button_disabled(&self) -> bool {
        self.confirm_button_disabled
    }
}
