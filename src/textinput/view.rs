//! View rendering methods for the textinput component.

use super::model::Model;
use super::types::EchoMode;

impl Model {
    /// Renders the prompt followed by the value (or the placeholder), with the
    /// cursor drawn when focused.
    pub fn view(&self) -> String {
        let prompt = self.prompt_style.render(&self.prompt);
        if self.value.is_empty() && !self.placeholder.is_empty() {
            return format!("{}{}", prompt, self.placeholder_view());
        }

        let display = self.display_chars();
        let (start, end) = self.visible_window(display.len());
        let pos = self.pos.clamp(start, end);

        let mut v = String::new();
        let before: String = display[start..pos].iter().collect();
        v.push_str(&self.text_style.render(&before));

        if self.focus {
            let under = display.get(pos).map(|c| c.to_string());
            v.push_str(&self.cursor_style.render(under.as_deref().unwrap_or(" ")));
            if pos < end {
                let after: String = display[pos + 1..end].iter().collect();
                v.push_str(&self.text_style.render(&after));
            }
        } else {
            let after: String = display[pos..end].iter().collect();
            v.push_str(&self.text_style.render(&after));
        }

        format!("{}{}", prompt, v)
    }

    fn placeholder_view(&self) -> String {
        let mut chars: Vec<char> = self.placeholder.chars().collect();
        if self.width > 0 {
            chars.truncate(self.width);
        }
        if self.focus && !chars.is_empty() {
            let first = chars.remove(0).to_string();
            let rest: String = chars.into_iter().collect();
            format!(
                "{}{}",
                self.cursor_style.render(&first),
                self.placeholder_style.render(&rest)
            )
        } else {
            let text: String = chars.into_iter().collect();
            self.placeholder_style.render(&text)
        }
    }

    fn display_chars(&self) -> Vec<char> {
        match self.echo_mode {
            EchoMode::EchoNormal => self.value.clone(),
            EchoMode::EchoPassword => vec![self.echo_character; self.value.len()],
            EchoMode::EchoNone => Vec::new(),
        }
    }

    // Window of `width` characters that keeps the cursor visible.
    fn visible_window(&self, len: usize) -> (usize, usize) {
        if self.width == 0 || len <= self.width {
            return (0, len);
        }
        let pos = self.pos.min(len);
        let start = if pos >= self.width {
            pos + 1 - self.width
        } else {
            0
        };
        (start, (start + self.width).min(len))
    }
}
