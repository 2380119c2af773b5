use anyhow::Result;
use notestamp::prompt::{Dialog, DialogState, Key, KeyPress, PromptDialog};

/// What the simulated user does once the prompt is open.
#[derive(Debug, Clone)]
pub enum Step {
    /// Select all and type this text, one keystroke at a time.
    Type(String),
    Press(KeyPress),
    ClickOk,
    ClickAway,
}

/// Dialog host that replays keyboard and mouse steps, recording what it saw.
#[derive(Debug, Default)]
pub struct ScriptedKeyboard {
    steps: Vec<Step>,
    pub seen_titles: Vec<String>,
    pub seen_initial_values: Vec<String>,
}

impl ScriptedKeyboard {
    pub fn new(steps: Vec<Step>) -> Self {
        Self {
            steps,
            ..Self::default()
        }
    }

    pub fn typing(text: &str) -> Self {
        Self::new(vec![
            Step::Type(text.to_string()),
            Step::Press(KeyPress::plain(Key::Enter)),
        ])
    }
}

impl Dialog for ScriptedKeyboard {
    fn present<F, R>(&mut self, mut dialog: PromptDialog<F>) -> Result<Option<R>>
    where
        F: FnOnce(String) -> R,
    {
        dialog.open()?;
        self.seen_titles.push(dialog.title().to_string());
        self.seen_initial_values.push(dialog.value().to_string());
        for step in self.steps.drain(..) {
            match step {
                Step::Type(text) => {
                    let mut buffer = String::new();
                    for ch in text.chars() {
                        buffer.push(ch);
                        dialog.on_key(KeyPress::plain(Key::Char(ch)))?;
                        dialog.on_change(buffer.clone())?;
                    }
                }
                Step::Press(press) => {
                    if let Some(result) = dialog.on_key(press)? {
                        return Ok(Some(result));
                    }
                }
                Step::ClickOk => return Ok(Some(dialog.confirm()?)),
                Step::ClickAway => {
                    dialog.dismiss();
                    return Ok(None);
                }
            }
            if dialog.state() == DialogState::Dismissed {
                return Ok(None);
            }
        }
        dialog.dismiss();
        Ok(None)
    }
}
