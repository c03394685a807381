//! Animated loading spinner.
//!
//! The grid shows a spinner while its caller is still fetching rows. A
//! spinner advances one frame per [`TickMsg`] and answers each tick with a
//! command that schedules the next one, so it keeps animating as long as its
//! ticks are routed back to it:
//!
//! ```rust
//! use bubbletea_datagrid::spinner::{Model, DOT};
//!
//! let mut spinner = Model::new().with_spinner(DOT.clone());
//! let cmd = spinner.update(Box::new(spinner.tick_msg()));
//! assert!(cmd.is_some());
//! ```

use bubbletea_rs::{tick as bubbletea_tick, Cmd, Model as BubbleTeaModel, Msg};
use lipgloss_extras::prelude::*;
use once_cell::sync::Lazy;
use std::sync::atomic::{AtomicI64, Ordering};
use std::time::Duration;

static LAST_ID: AtomicI64 = AtomicI64::new(0);

fn next_id() -> i64 {
    LAST_ID.fetch_add(1, Ordering::SeqCst) + 1
}

/// Animation frames and the delay between them.
#[derive(Debug, Clone)]
pub struct Spinner {
    /// Frames to cycle through.
    pub frames: Vec<String>,
    /// Delay between frames; smaller is faster.
    pub fps: Duration,
}

impl Spinner {
    /// Creates a spinner from frames and a frame delay.
    pub fn new(frames: Vec<String>, fps: Duration) -> Self {
        Self { frames, fps }
    }
}

fn frames(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

/// `| / - \`
pub static LINE: Lazy<Spinner> =
    Lazy::new(|| Spinner::new(frames(&["|", "/", "-", "\\"]), Duration::from_millis(100)));

/// Braille dots.
pub static DOT: Lazy<Spinner> = Lazy::new(|| {
    Spinner::new(
        frames(&["⣾ ", "⣽ ", "⣻ ", "⢿ ", "⡿ ", "⣟ ", "⣯ ", "⣷ "]),
        Duration::from_millis(100),
    )
});

/// Small braille dots.
pub static MINI_DOT: Lazy<Spinner> = Lazy::new(|| {
    Spinner::new(
        frames(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]),
        Duration::from_millis(83),
    )
});

/// Fading block.
pub static PULSE: Lazy<Spinner> =
    Lazy::new(|| Spinner::new(frames(&["█", "▓", "▒", "░"]), Duration::from_millis(125)));

/// Bouncing point.
pub static POINTS: Lazy<Spinner> = Lazy::new(|| {
    Spinner::new(
        frames(&["∙∙∙", "●∙∙", "∙●∙", "∙∙●"]),
        Duration::from_millis(143),
    )
});

/// Growing ellipsis.
pub static ELLIPSIS: Lazy<Spinner> =
    Lazy::new(|| Spinner::new(frames(&["", ".", "..", "..."]), Duration::from_millis(333)));

/// Advances the spinner identified by `id`.
#[derive(Debug, Clone)]
pub struct TickMsg {
    /// When the tick fired.
    pub time: std::time::SystemTime,
    /// Target spinner; 0 addresses every spinner.
    pub id: i64,
    // Rejects ticks scheduled before the latest one.
    tag: i64,
}

/// Spinner state.
#[derive(Debug)]
pub struct Model {
    /// Frames and timing.
    pub spinner: Spinner,
    /// Style applied to the current frame.
    pub style: Style,
    frame: usize,
    id: i64,
    tag: i64,
}

impl Model {
    /// Creates a [`MINI_DOT`] spinner with a fresh id.
    pub fn new() -> Self {
        Self {
            spinner: MINI_DOT.clone(),
            style: Style::new(),
            frame: 0,
            id: next_id(),
            tag: 0,
        }
    }

    /// Sets the frames (builder pattern).
    pub fn with_spinner(mut self, spinner: Spinner) -> Self {
        self.spinner = spinner;
        self.frame = 0;
        self
    }

    /// Sets the style (builder pattern).
    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// This spinner's id.
    pub fn id(&self) -> i64 {
        self.id
    }

    /// Index of the frame currently shown.
    pub fn frame(&self) -> usize {
        self.frame
    }

    /// A tick addressed to this spinner, used to start the animation.
    pub fn tick_msg(&self) -> TickMsg {
        TickMsg {
            time: std::time::SystemTime::now(),
            id: self.id,
            tag: self.tag,
        }
    }

    /// Command that delivers the first tick after one frame delay.
    pub fn start(&self) -> Cmd {
        self.tick()
    }

    fn tick(&self) -> Cmd {
        let id = self.id;
        let tag = self.tag;
        bubbletea_tick(self.spinner.fps, move |_| {
            Box::new(TickMsg {
                time: std::time::SystemTime::now(),
                id,
                tag,
            }) as Msg
        })
    }

    /// Advances on ticks addressed to this spinner and schedules the next one.
    pub fn update(&mut self, msg: Msg) -> Option<Cmd> {
        let tick_msg = msg.downcast_ref::<TickMsg>()?;
        if tick_msg.id > 0 && tick_msg.id != self.id {
            return None;
        }
        if tick_msg.tag > 0 && tick_msg.tag != self.tag {
            return None;
        }

        self.frame += 1;
        if self.frame >= self.spinner.frames.len() {
            self.frame = 0;
        }
        self.tag += 1;
        Some(self.tick())
    }

    /// The current frame, styled.
    pub fn view(&self) -> String {
        match self.spinner.frames.get(self.frame) {
            Some(frame) => self.style.render(frame),
            None => "(error)".to_string(),
        }
    }
}

impl Default for Model {
    fn default() -> Self {
        Self::new()
    }
}

impl BubbleTeaModel for Model {
    fn init() -> (Self, Option<Cmd>) {
        let model = Self::new();
        let cmd = model.start();
        (model, Some(cmd))
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        Model::update(self, msg)
    }

    fn view(&self) -> String {
        Model::view(self)
    }
}
