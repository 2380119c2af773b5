//! Single-line modal prompt.
//!
//! A [`PromptDialog`] owns the text the user is editing and the callback to run
//! once they confirm it. Hosts render it (title heading, text field, `OK`
//! control) and forward events; the dialog enforces the lifecycle:
//!
//! ```text
//! Closed --open--> Open --confirm--> Confirmed   (on_submit called once)
//!   |                |
//!   +----dismiss-----+--dismiss--> Dismissed     (on_submit never called)
//! ```
//!
//! Both terminal states are final. A dialog cannot be reopened.

pub mod terminal;

pub use terminal::TerminalDialog;

use std::fmt;

/// Default label of the confirm control.
pub const CONFIRM_LABEL: &str = "OK";

/// Lifecycle position of a prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogState {
    Closed,
    Open,
    Confirmed,
    Dismissed,
}

impl DialogState {
    pub fn is_terminal(self) -> bool {
        matches!(self, DialogState::Confirmed | DialogState::Dismissed)
    }
}

/// Modifier keys held during a key press.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub ctrl: bool,
    pub meta: bool,
    pub shift: bool,
    pub alt: bool,
}

impl Modifiers {
    pub fn any(self) -> bool {
        self.ctrl || self.meta || self.shift || self.alt
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Enter,
    Escape,
    Char(char),
}

/// A key event delivered by the host while the text field has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    pub key: Key,
    pub modifiers: Modifiers,
}

impl KeyPress {
    pub fn plain(key: Key) -> Self {
        Self {
            key,
            modifiers: Modifiers::default(),
        }
    }

    pub fn with_modifiers(key: Key, modifiers: Modifiers) -> Self {
        Self { key, modifiers }
    }
}

/// Raised when an event arrives in a state that cannot accept it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptError {
    WrongState {
        action: &'static str,
        state: DialogState,
    },
}

impl fmt::Display for PromptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PromptError::WrongState { action, state } => {
                write!(f, "cannot {action} a prompt in state {state:?}")
            }
        }
    }
}

impl std::error::Error for PromptError {}

/// Single-use text prompt with a completion callback.
pub struct PromptDialog<F> {
    title: String,
    value: String,
    state: DialogState,
    submit_on_enter: bool,
    on_submit: Option<F>,
}

impl<F> fmt::Debug for PromptDialog<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PromptDialog")
            .field("title", &self.title)
            .field("value", &self.value)
            .field("state", &self.state)
            .field("submit_on_enter", &self.submit_on_enter)
            .finish()
    }
}

impl<F, R> PromptDialog<F>
where
    F: FnOnce(String) -> R,
{
    pub fn new(title: impl Into<String>, initial_value: impl Into<String>, on_submit: F) -> Self {
        Self {
            title: title.into(),
            value: initial_value.into(),
            state: DialogState::Closed,
            submit_on_enter: true,
            on_submit: Some(on_submit),
        }
    }

    /// Prompt with an empty initial value.
    pub fn with_title(title: impl Into<String>, on_submit: F) -> Self {
        Self::new(title, String::new(), on_submit)
    }

    /// Whether a plain Enter in the text field confirms. On by default.
    pub fn submit_on_enter(mut self, enabled: bool) -> Self {
        self.submit_on_enter = enabled;
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Current text of the field.
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn state(&self) -> DialogState {
        self.state
    }

    pub fn open(&mut self) -> Result<(), PromptError> {
        self.expect_state(DialogState::Closed, "open")?;
        self.state = DialogState::Open;
        Ok(())
    }

    /// Records the field's new content. Nothing leaves the dialog until confirm.
    pub fn on_change(&mut self, value: impl Into<String>) -> Result<(), PromptError> {
        self.expect_state(DialogState::Open, "edit")?;
        self.value = value.into();
        Ok(())
    }

    /// Handles a key press in the text field.
    ///
    /// Plain Enter confirms (when enabled) and yields the callback's result.
    /// Escape dismisses. Everything else, including Enter with a modifier, is
    /// ignored.
    pub fn on_key(&mut self, press: KeyPress) -> Result<Option<R>, PromptError> {
        self.expect_state(DialogState::Open, "handle keys for")?;
        match press.key {
            Key::Enter if self.submit_on_enter && !press.modifiers.any() => {
                self.confirm().map(Some)
            }
            Key::Escape => {
                self.dismiss();
                Ok(None)
            }
            _ => Ok(None),
        }
    }

    /// Closes the dialog, then hands the current value to `on_submit`.
    pub fn confirm(&mut self) -> Result<R, PromptError> {
        self.expect_state(DialogState::Open, "confirm")?;
        let on_submit = self.on_submit.take().ok_or(PromptError::WrongState {
            action: "confirm",
            state: self.state,
        })?;
        self.state = DialogState::Confirmed;
        let value = std::mem::take(&mut self.value);
        Ok(on_submit(value))
    }

    /// Closes the dialog without submitting. No-op once terminal.
    pub fn dismiss(&mut self) {
        if self.state.is_terminal() {
            return;
        }
        self.state = DialogState::Dismissed;
        self.on_submit = None;
    }

    fn expect_state(&self, expected: DialogState, action: &'static str) -> Result<(), PromptError> {
        if self.state == expected {
            Ok(())
        } else {
            Err(PromptError::WrongState {
                action,
                state: self.state,
            })
        }
    }
}

/// Host capability for showing prompts.
pub trait Dialog {
    /// Drives `dialog` until it is confirmed or dismissed. Returns the
    /// callback's result on confirmation and `None` on dismissal.
    fn present<F, R>(&mut self, dialog: PromptDialog<F>) -> anyhow::Result<Option<R>>
    where
        F: FnOnce(String) -> R;
}
