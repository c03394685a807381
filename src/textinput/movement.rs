//! Word movement and range deletion.

use super::model::Model;
use super::types::EchoMode;

impl Model {
    pub(super) fn delete_before_cursor(&mut self) {
        self.value.drain(..self.pos);
        self.pos = 0;
        self.err = self.validate_runes(&self.value);
    }

    pub(super) fn delete_after_cursor(&mut self) {
        self.value.truncate(self.pos);
        self.err = self.validate_runes(&self.value);
    }

    /// Deletes back to the start of the previous word. Masked input has no
    /// visible words, so everything before the cursor goes.
    pub(super) fn delete_word_backward(&mut self) {
        if self.pos == 0 {
            return;
        }
        if self.echo_mode != EchoMode::EchoNormal {
            self.delete_before_cursor();
            return;
        }
        let start = self.word_start_before(self.pos);
        self.value.drain(start..self.pos);
        self.pos = start;
        self.err = self.validate_runes(&self.value);
    }

    pub(super) fn word_backward(&mut self) {
        if self.echo_mode != EchoMode::EchoNormal {
            self.cursor_start();
            return;
        }
        self.pos = self.word_start_before(self.pos);
    }

    pub(super) fn word_forward(&mut self) {
        if self.echo_mode != EchoMode::EchoNormal {
            self.cursor_end();
            return;
        }
        let mut i = self.pos;
        while i < self.value.len() && self.value[i].is_whitespace() {
            i += 1;
        }
        while i < self.value.len() && !self.value[i].is_whitespace() {
            i += 1;
        }
        self.pos = i;
    }

    fn word_start_before(&self, pos: usize) -> usize {
        let mut i = pos;
        while i > 0 && self.value[i - 1].is_whitespace() {
            i -= 1;
        }
        while i > 0 && !self.value[i - 1].is_whitespace() {
            i -= 1;
        }
        i
    }
}
