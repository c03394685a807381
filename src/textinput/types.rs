//! Core types for the textinput component.

use bubbletea_rs::Msg;

/// Clipboard contents to insert at the cursor.
#[derive(Debug, Clone)]
pub struct PasteMsg(pub String);

/// The clipboard could not be read.
#[derive(Debug, Clone)]
pub struct PasteErrMsg(pub String);

/// How typed characters are displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EchoMode {
    /// Show the text as typed.
    #[default]
    EchoNormal,
    /// Show the echo character for every typed character.
    EchoPassword,
    /// Show nothing.
    EchoNone,
}

/// Validation hook; the error string is kept in [`Model::err`](super::Model::err).
pub type ValidateFunc = Box<dyn Fn(&str) -> Result<(), String> + Send>;

impl From<PasteMsg> for Msg {
    fn from(msg: PasteMsg) -> Self {
        Box::new(msg) as Msg
    }
}

impl From<PasteErrMsg> for Msg {
    fn from(msg: PasteErrMsg) -> Self {
        Box::new(msg) as Msg
    }
}
