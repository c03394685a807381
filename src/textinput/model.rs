//! Core model implementation for the textinput component.

use super::keymap::{default_key_map, KeyMap};
#[cfg(feature = "clipboard-support")]
use super::types::PasteMsg;
use super::types::{EchoMode, PasteErrMsg, ValidateFunc};
use bubbletea_rs::{Cmd, KeyMsg, Model as BubbleTeaModel, Msg};
use crossterm::event::{KeyCode, KeyModifiers};
use lipgloss_extras::prelude::*;
use std::time::Duration;

/// A single-line text input.
///
/// The value is stored as characters so the cursor position is a character
/// index, never a byte offset.
pub struct Model {
    /// Last validation failure, cleared when the value becomes valid again.
    pub err: Option<String>,
    /// Text shown before the value.
    pub prompt: String,
    /// Style of the prompt.
    pub prompt_style: Style,
    /// Style of the typed text.
    pub text_style: Style,
    /// Text shown while the value is empty.
    pub placeholder: String,
    /// Style of the placeholder.
    pub placeholder_style: Style,
    /// Style of the character under the cursor.
    pub cursor_style: Style,
    /// Visible width in characters; 0 shows the whole value.
    pub width: usize,
    /// Maximum number of characters; 0 means no limit.
    pub char_limit: usize,
    /// How the value is displayed.
    pub echo_mode: EchoMode,
    /// Mask character for [`EchoMode::EchoPassword`].
    pub echo_character: char,
    /// Editing key bindings.
    pub key_map: KeyMap,

    pub(super) value: Vec<char>,
    pub(super) pos: usize,
    pub(super) focus: bool,
    pub(super) validate: Option<ValidateFunc>,
}

/// Creates an unfocused, empty input with the `"> "` prompt.
pub fn new() -> Model {
    Model {
        err: None,
        prompt: "> ".to_string(),
        prompt_style: Style::new(),
        text_style: Style::new(),
        placeholder: String::new(),
        placeholder_style: Style::new().foreground(Color::from("240")),
        cursor_style: Style::new().reverse(true),
        width: 0,
        char_limit: 0,
        echo_mode: EchoMode::EchoNormal,
        echo_character: '*',
        key_map: default_key_map(),
        value: Vec::new(),
        pos: 0,
        focus: false,
        validate: None,
    }
}

impl Default for Model {
    fn default() -> Self {
        new()
    }
}

/// Command that reads the system clipboard and answers with a
/// [`PasteMsg`](super::PasteMsg) or a [`PasteErrMsg`].
pub fn paste() -> Cmd {
    use bubbletea_rs::tick as bubbletea_tick;
    bubbletea_tick(Duration::from_nanos(1), |_| {
        #[cfg(feature = "clipboard-support")]
        {
            use clipboard::{ClipboardContext, ClipboardProvider};
            let res: Result<String, String> = (|| {
                let mut ctx: ClipboardContext = ClipboardProvider::new()
                    .map_err(|e| format!("Failed to create clipboard context: {}", e))?;
                ctx.get_contents()
                    .map_err(|e| format!("Failed to read clipboard: {}", e))
            })();
            match res {
                Ok(s) => Box::new(PasteMsg(s)) as Msg,
                Err(e) => Box::new(PasteErrMsg(e)) as Msg,
            }
        }
        #[cfg(not(feature = "clipboard-support"))]
        {
            Box::new(PasteErrMsg("Clipboard support not enabled".to_string())) as Msg
        }
    })
}

impl Model {
    /// The current value.
    pub fn value(&self) -> String {
        self.value.iter().collect()
    }

    /// Replaces the value, truncating to the character limit, and moves the
    /// cursor to the end.
    pub fn set_value(&mut self, s: &str) {
        let mut chars: Vec<char> = s.chars().collect();
        if self.char_limit > 0 && chars.len() > self.char_limit {
            chars.truncate(self.char_limit);
        }
        self.err = self.validate_runes(&chars);
        self.value = chars;
        self.pos = self.value.len();
    }

    /// Clears the value.
    pub fn reset(&mut self) {
        self.value.clear();
        self.pos = 0;
        self.err = self.validate_runes(&self.value);
    }

    /// Sets the placeholder.
    pub fn set_placeholder(&mut self, placeholder: &str) {
        self.placeholder = placeholder.to_string();
    }

    /// Sets the visible width.
    pub fn set_width(&mut self, width: usize) {
        self.width = width;
    }

    /// Sets the character limit; 0 removes it.
    pub fn set_char_limit(&mut self, limit: usize) {
        self.char_limit = limit;
    }

    /// Sets the echo mode.
    pub fn set_echo_mode(&mut self, mode: EchoMode) {
        self.echo_mode = mode;
    }

    /// Installs a validation function and validates the current value.
    pub fn set_validate(&mut self, validate: ValidateFunc) {
        self.validate = Some(validate);
        self.err = self.validate_runes(&self.value);
    }

    /// Cursor position as a character index.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Moves the cursor, clamped to the value length.
    pub fn set_cursor(&mut self, pos: usize) {
        self.pos = pos.min(self.value.len());
    }

    /// Moves the cursor to the start.
    pub fn cursor_start(&mut self) {
        self.set_cursor(0);
    }

    /// Moves the cursor to the end.
    pub fn cursor_end(&mut self) {
        self.set_cursor(self.value.len());
    }

    /// Whether the input receives keys.
    pub fn focused(&self) -> bool {
        self.focus
    }

    /// Gives the input focus.
    pub fn focus(&mut self) -> Option<Cmd> {
        self.focus = true;
        None
    }

    /// Removes focus.
    pub fn blur(&mut self) {
        self.focus = false;
    }

    pub(super) fn validate_runes(&self, value: &[char]) -> Option<String> {
        let validate = self.validate.as_ref()?;
        let s: String = value.iter().collect();
        validate(&s).err()
    }

    /// Handles key presses, paste results and paste errors.
    pub fn update(&mut self, msg: Msg) -> Option<Cmd> {
        if let Some(key_msg) = msg.downcast_ref::<KeyMsg>() {
            return self.handle_key(key_msg);
        }
        if let Some(paste_msg) = msg.downcast_ref::<super::PasteMsg>() {
            if self.focus {
                self.insert_runes(paste_msg.0.chars().collect());
            }
            return None;
        }
        if let Some(paste_err) = msg.downcast_ref::<PasteErrMsg>() {
            self.err = Some(paste_err.0.clone());
        }
        None
    }

    /// Applies one key press. Ignored while unfocused.
    pub fn handle_key(&mut self, key_msg: &KeyMsg) -> Option<Cmd> {
        if !self.focus {
            return None;
        }

        let km = &self.key_map;
        if km.paste.matches(key_msg) {
            return Some(paste());
        }

        if km.delete_word_backward.matches(key_msg) {
            self.delete_word_backward();
        } else if km.delete_character_backward.matches(key_msg) {
            if self.pos > 0 {
                self.value.remove(self.pos - 1);
                self.pos -= 1;
                self.err = self.validate_runes(&self.value);
            }
        } else if km.delete_character_forward.matches(key_msg) {
            if self.pos < self.value.len() {
                self.value.remove(self.pos);
                self.err = self.validate_runes(&self.value);
            }
        } else if km.delete_after_cursor.matches(key_msg) {
            self.delete_after_cursor();
        } else if km.delete_before_cursor.matches(key_msg) {
            self.delete_before_cursor();
        } else if km.word_backward.matches(key_msg) {
            self.word_backward();
        } else if km.word_forward.matches(key_msg) {
            self.word_forward();
        } else if km.character_backward.matches(key_msg) {
            if self.pos > 0 {
                self.set_cursor(self.pos - 1);
            }
        } else if km.character_forward.matches(key_msg) {
            self.set_cursor(self.pos + 1);
        } else if km.line_start.matches(key_msg) {
            self.cursor_start();
        } else if km.line_end.matches(key_msg) {
            self.cursor_end();
        } else if let KeyCode::Char(ch) = key_msg.key {
            if !key_msg.modifiers.contains(KeyModifiers::CONTROL)
                && !key_msg.modifiers.contains(KeyModifiers::ALT)
            {
                self.insert_runes(vec![ch]);
            }
        }
        None
    }

    // Inserts at the cursor, dropping what does not fit the character limit.
    pub(super) fn insert_runes(&mut self, mut runes: Vec<char>) {
        runes.retain(|c| !c.is_control());
        if self.char_limit > 0 {
            let avail = self.char_limit.saturating_sub(self.value.len());
            runes.truncate(avail);
        }
        if runes.is_empty() {
            return;
        }
        let n = runes.len();
        self.value.splice(self.pos..self.pos, runes);
        self.pos += n;
        self.err = self.validate_runes(&self.value);
    }
}

impl BubbleTeaModel for Model {
    fn init() -> (Self, Option<Cmd>) {
        (new(), None)
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        Model::update(self, msg)
    }

    fn view(&self) -> String {
        Model::view(self)
    }
}

impl crate::Component for Model {
    fn focus(&mut self) -> Option<Cmd> {
        Model::focus(self)
    }

    fn blur(&mut self) {
        Model::blur(self)
    }

    fn focused(&self) -> bool {
        Model::focused(self)
    }
}
