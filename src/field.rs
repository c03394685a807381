//! Labelled form fields.
//!
//! Entity forms (company, vendor, tax rate, ...) are stacks of the same
//! building block: a label, an input, a "required" marker, and either a hint
//! or the validation error underneath. [`Field`] is that block and [`Form`]
//! moves focus between fields and validates them together.
//!
//! ```rust
//! use bubbletea_datagrid::field::{Field, Form};
//!
//! let mut form = Form::new(vec![
//!     Field::new("Company Name").required(),
//!     Field::new("Tax ID").with_placeholder("optional"),
//! ]);
//! assert!(form.validate().is_err());
//!
//! form.fields_mut()[0].set_value("Acme Ltd");
//! assert!(form.validate().is_ok());
//! assert_eq!(form.values()[0], ("Company Name", "Acme Ltd".to_string()));
//! ```

use crate::error::FieldError;
use crate::key::{self, KeyMap as KeyMapTrait};
use crate::textinput::{self, EchoMode, ValidateFunc};
use crate::Component;
use bubbletea_rs::{Cmd, KeyMsg, Msg};
use lipgloss_extras::prelude::*;

/// Styles for a field.
#[derive(Debug, Clone)]
pub struct FieldStyles {
    /// The label line.
    pub label: Style,
    /// The `*` after required labels.
    pub required_marker: Style,
    /// The hint under the input.
    pub description: Style,
    /// The validation error under the input.
    pub error: Style,
}

impl Default for FieldStyles {
    fn default() -> Self {
        Self {
            label: Style::new().bold(true),
            required_marker: Style::new().foreground(Color::from("203")),
            description: Style::new().foreground(AdaptiveColor {
                Light: "#A49FA5",
                Dark: "#777777",
            }),
            error: Style::new().foreground(Color::from("203")),
        }
    }
}

/// A labelled text input with required/validation handling.
pub struct Field {
    /// Label shown above the input.
    pub label: String,
    /// Hint shown under the input when there is no error.
    pub description: Option<String>,
    /// Whether a blank value fails validation.
    pub required: bool,
    /// The input itself.
    pub input: textinput::Model,
    /// Styles.
    pub styles: FieldStyles,
    error: Option<FieldError>,
}

impl Field {
    /// Creates an optional field with an empty input.
    pub fn new(label: impl Into<String>) -> Self {
        let mut input = textinput::new();
        input.prompt = String::new();
        Self {
            label: label.into(),
            description: None,
            required: false,
            input,
            styles: FieldStyles::default(),
            error: None,
        }
    }

    /// Marks the field as required.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Sets the hint line.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the input placeholder.
    pub fn with_placeholder(mut self, placeholder: &str) -> Self {
        self.input.set_placeholder(placeholder);
        self
    }

    /// Sets the initial value.
    pub fn with_value(mut self, value: &str) -> Self {
        self.input.set_value(value);
        self
    }

    /// Limits the value length.
    pub fn with_char_limit(mut self, limit: usize) -> Self {
        self.input.set_char_limit(limit);
        self
    }

    /// Masks the value, e.g. for account numbers.
    pub fn with_echo_mode(mut self, mode: EchoMode) -> Self {
        self.input.set_echo_mode(mode);
        self
    }

    /// Installs a validator run by [`validate`](Self::validate).
    pub fn with_validate(mut self, validate: ValidateFunc) -> Self {
        self.input.set_validate(validate);
        self
    }

    /// The current value.
    pub fn value(&self) -> String {
        self.input.value()
    }

    /// Replaces the value.
    pub fn set_value(&mut self, value: &str) {
        self.input.set_value(value);
        if self.error.is_some() {
            let _ = self.validate();
        }
    }

    /// The error recorded by the last validation, if any.
    pub fn error(&self) -> Option<&FieldError> {
        self.error.as_ref()
    }

    /// Checks the required flag and the input's validator, recording the result.
    pub fn validate(&mut self) -> Result<(), FieldError> {
        let result = if self.required && self.input.value().trim().is_empty() {
            Err(FieldError::Required {
                label: self.label.clone(),
            })
        } else if let Some(message) = self.input.err.clone() {
            Err(FieldError::Invalid {
                label: self.label.clone(),
                message,
            })
        } else {
            Ok(())
        };
        self.error = result.clone().err();
        result
    }

    /// Forwards a key press to the input. Once a field has shown an error it
    /// re-validates on every edit so the message clears as soon as it is fixed.
    pub fn handle_key(&mut self, key_msg: &KeyMsg) -> Option<Cmd> {
        let cmd = self.input.handle_key(key_msg);
        if self.error.is_some() {
            let _ = self.validate();
        }
        cmd
    }

    /// Renders label, input and the error or hint line.
    pub fn view(&self) -> String {
        let mut label = self.styles.label.render(&self.label);
        if self.required {
            label.push(' ');
            label.push_str(&self.styles.required_marker.render("*"));
        }

        let mut lines = vec![label, self.input.view()];
        if let Some(err) = &self.error {
            lines.push(self.styles.error.render(&err.to_string()));
        } else if let Some(desc) = &self.description {
            lines.push(self.styles.description.render(desc));
        }
        lines.join("\n")
    }
}

impl Component for Field {
    fn focus(&mut self) -> Option<Cmd> {
        self.input.focus()
    }

    fn blur(&mut self) {
        self.input.blur();
    }

    fn focused(&self) -> bool {
        self.input.focused()
    }
}

/// Key bindings for moving between fields.
#[derive(Debug, Clone)]
pub struct FormKeyMap {
    /// Focus the next field.
    pub next_field: key::Binding,
    /// Focus the previous field.
    pub prev_field: key::Binding,
}

impl Default for FormKeyMap {
    fn default() -> Self {
        Self {
            next_field: key::new_binding(vec![
                key::with_keys_str(&["tab", "down"]),
                key::with_help("tab", "next field"),
            ]),
            prev_field: key::new_binding(vec![
                key::with_keys_str(&["shift+tab", "up"]),
                key::with_help("shift+tab", "prev field"),
            ]),
        }
    }
}

impl KeyMapTrait for FormKeyMap {
    fn short_help(&self) -> Vec<&key::Binding> {
        vec![&self.next_field, &self.prev_field]
    }

    fn full_help(&self) -> Vec<Vec<&key::Binding>> {
        vec![self.short_help()]
    }
}

/// An ordered group of fields with one focused at a time.
pub struct Form {
    fields: Vec<Field>,
    focus_index: usize,
    /// Key bindings.
    pub keymap: FormKeyMap,
}

impl Form {
    /// Creates a form with the first field focused.
    pub fn new(mut fields: Vec<Field>) -> Self {
        if let Some(first) = fields.first_mut() {
            let _ = first.focus();
        }
        Self {
            fields,
            focus_index: 0,
            keymap: FormKeyMap::default(),
        }
    }

    /// The fields in order.
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Mutable access to the fields.
    pub fn fields_mut(&mut self) -> &mut [Field] {
        &mut self.fields
    }

    /// Looks a field up by label.
    pub fn field(&self, label: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.label == label)
    }

    /// Index of the focused field.
    pub fn focus_index(&self) -> usize {
        self.focus_index
    }

    /// Moves focus to the next field, wrapping around.
    pub fn next_field(&mut self) {
        if self.fields.is_empty() {
            return;
        }
        self.move_focus((self.focus_index + 1) % self.fields.len());
    }

    /// Moves focus to the previous field, wrapping around.
    pub fn prev_field(&mut self) {
        if self.fields.is_empty() {
            return;
        }
        let len = self.fields.len();
        self.move_focus((self.focus_index + len - 1) % len);
    }

    fn move_focus(&mut self, index: usize) {
        self.fields[self.focus_index].blur();
        self.focus_index = index;
        let _ = self.fields[index].focus();
    }

    /// Validates every field; all failures are returned, in field order.
    pub fn validate(&mut self) -> Result<(), Vec<FieldError>> {
        let errors: Vec<FieldError> = self
            .fields
            .iter_mut()
            .filter_map(|f| f.validate().err())
            .collect();
        if errors.is_empty() {
            Ok(())
        } else {
            log::debug!("form validation failed with {} error(s)", errors.len());
            Err(errors)
        }
    }

    /// `(label, value)` pairs in field order.
    pub fn values(&self) -> Vec<(&str, String)> {
        self.fields
            .iter()
            .map(|f| (f.label.as_str(), f.value()))
            .collect()
    }

    /// Handles focus movement and forwards other keys to the focused field.
    pub fn update(&mut self, msg: Msg) -> Option<Cmd> {
        let key_msg = msg.downcast_ref::<KeyMsg>()?;
        if self.keymap.next_field.matches(key_msg) {
            self.next_field();
            None
        } else if self.keymap.prev_field.matches(key_msg) {
            self.prev_field();
            None
        } else {
            self.fields.get_mut(self.focus_index)?.handle_key(key_msg)
        }
    }

    /// Renders the fields separated by blank lines.
    pub fn view(&self) -> String {
        self.fields
            .iter()
            .map(Field::view)
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}
