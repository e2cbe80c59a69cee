//! Single-line text input field.
//!
//! The field owns a validated character buffer and derives everything needed
//! to draw it: the rendered value, the visible slice when the text is wider
//! than the field, and the blinking cursor. Drawing itself goes through a
//! [`Canvas`], text rasterisation through a [`TextRenderer`].
//!
//! Typical use from a screen:
//! * forward every [`InputEvent`] to [`TextInputField::handle_event`];
//! * call [`TextInputField::force_update`] once after construction, then
//!   [`TextInputField::update`] once per frame;
//! * call [`TextInputField::draw`].

pub mod layout;
pub mod style;
pub mod validation;

use crate::geometry::Rect;
use crate::input::{InputEvent, Key, PointerButton};
use crate::render::{Canvas, Sprite, TextRenderer};
use crossbeam_channel::Sender;

pub use layout::TextLayout;
pub use style::TextFieldConfig;
pub use validation::{CharRule, CharValidator};

/// Milliseconds between two cursor blinks.
pub const BLINK_INTERVAL_MS: u64 = 200;

/// Called with `(field_id, value)` when a field is committed.
pub type CommitCallback = Box<dyn FnMut(&str, &str)>;

/// A commit, as forwarded over a channel by [`commit_sender`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitEvent {
    pub field_id: String,
    pub value: String,
}

/// Builds a commit callback that forwards every commit into `tx`.
///
/// A disconnected receiver only loses the notification.
pub fn commit_sender(tx: Sender<CommitEvent>) -> CommitCallback {
    Box::new(move |field_id, value| {
        let event = CommitEvent {
            field_id: field_id.to_string(),
            value: value.to_string(),
        };
        if let Err(e) = tx.send(event) {
            log::warn!("TEXT: commit of '{}' dropped: {}", field_id, e);
        }
    })
}

/// What a single event did to the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldResponse {
    /// The event was not for this field.
    Ignored,
    /// A character was appended or removed.
    Edited,
    /// The typed character failed validation. The buffer is unchanged.
    Rejected,
    Committed,
    /// A pointer press changed the focus.
    FocusChanged,
}

pub struct TextInputField<R: TextRenderer> {
    id: String,
    rect: Rect,
    buffer: Vec<char>,
    /// Value as of the last update; `None` until the first render.
    value: Option<String>,
    rendered: Option<R::Image>,
    layout: TextLayout,
    laid_out_for: Rect,
    focused: bool,
    invalid: bool,
    cursor_visible: bool,
    blink_timer: u64,
    /// Set when focus is gained; the next tick restarts the blink period.
    blink_rebase: bool,
    validator: CharValidator,
    on_commit: Option<CommitCallback>,
    config: TextFieldConfig,
    renderer: R,
}

impl<R: TextRenderer> TextInputField<R> {
    pub fn new(id: impl Into<String>, rect: Rect, renderer: R) -> Self {
        let config = TextFieldConfig::default();
        Self {
            id: id.into(),
            rect,
            buffer: Vec::new(),
            value: None,
            rendered: None,
            layout: TextLayout::default(),
            laid_out_for: rect,
            focused: false,
            invalid: false,
            cursor_visible: true,
            blink_timer: 0,
            blink_rebase: false,
            validator: config.rule.into(),
            on_commit: None,
            config,
            renderer,
        }
    }

    /// Initial content. Not validated.
    pub fn with_text(mut self, text: &str) -> Self {
        self.buffer = text.chars().collect();
        self
    }

    /// Replaces the appearance and commit policy, and the validator with the
    /// config's rule.
    pub fn with_config(mut self, config: TextFieldConfig) -> Self {
        self.validator = config.rule.into();
        self.config = config;
        self
    }

    pub fn with_validator(mut self, validator: CharValidator) -> Self {
        self.validator = validator;
        self
    }

    pub fn with_focus(mut self, focused: bool) -> Self {
        self.set_focused(focused);
        self
    }

    pub fn on_commit(mut self, callback: impl FnMut(&str, &str) + 'static) -> Self {
        self.on_commit = Some(Box::new(callback));
        self
    }

    pub fn with_commit_callback(mut self, callback: CommitCallback) -> Self {
        self.on_commit = Some(callback);
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// Moves or resizes the field. The layout follows on the next update.
    pub fn set_rect(&mut self, rect: Rect) {
        self.rect = rect;
    }

    /// Current buffer content, including edits not yet picked up by an update.
    pub fn text(&self) -> String {
        self.buffer.iter().collect()
    }

    /// Value as of the last update (empty before the first one).
    pub fn value(&self) -> &str {
        self.value.as_deref().unwrap_or("")
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn is_invalid(&self) -> bool {
        self.invalid
    }

    pub fn cursor_visible(&self) -> bool {
        self.cursor_visible
    }

    pub fn viewport_offset(&self) -> i32 {
        self.layout.viewport_offset()
    }

    pub fn layout(&self) -> &TextLayout {
        &self.layout
    }

    pub fn config(&self) -> &TextFieldConfig {
        &self.config
    }

    pub fn handle_event(&mut self, event: &InputEvent) -> FieldResponse {
        match event {
            InputEvent::KeyPress { key, text, .. } if self.focused => match key {
                Key::Enter => {
                    self.commit();
                    FieldResponse::Committed
                }
                Key::Backspace => {
                    if self.buffer.pop().is_some() {
                        FieldResponse::Edited
                    } else {
                        FieldResponse::Ignored
                    }
                }
                _ => match text {
                    Some(ch) => self.type_char(*ch),
                    None => FieldResponse::Ignored,
                },
            },
            InputEvent::PointerPress {
                position,
                button: PointerButton::Primary,
            } => {
                let focused = self.rect.contains(*position);
                if focused == self.focused {
                    return FieldResponse::Ignored;
                }
                log::trace!("TEXT: '{}' focus -> {}", self.id, focused);
                self.set_focused(focused);
                FieldResponse::FocusChanged
            }
            _ => FieldResponse::Ignored,
        }
    }

    fn type_char(&mut self, ch: char) -> FieldResponse {
        if self.validator.accepts(ch) {
            self.invalid = false;
            self.buffer.push(ch);
            FieldResponse::Edited
        } else {
            log::trace!("TEXT: '{}' rejected {:?}", self.id, ch);
            self.invalid = true;
            FieldResponse::Rejected
        }
    }

    /// Hands the value to the commit callback, then applies the focus and
    /// clear-on-commit policies.
    pub fn commit(&mut self) {
        self.refresh(false);
        let value = self.value().to_string();
        log::debug!("TEXT: '{}' committed {:?}", self.id, value);

        if let Some(callback) = self.on_commit.as_mut() {
            callback(&self.id, &value);
        }
        self.set_focused(self.config.stay_focused_on_commit);
        if self.config.clear_on_commit {
            self.buffer.clear();
        }
    }

    /// Per-frame update. `now_ms` is a monotonic clock in milliseconds.
    pub fn update(&mut self, now_ms: u64) {
        self.refresh(false);
        self.tick_blink(now_ms);
    }

    /// Like [`update`](Self::update) but re-renders even if nothing changed.
    /// Needed once before the first draw.
    pub fn force_update(&mut self, now_ms: u64) {
        self.refresh(true);
        self.tick_blink(now_ms);
    }

    fn refresh(&mut self, force: bool) {
        let current: String = self.buffer.iter().collect();
        if force || self.value.as_deref() != Some(current.as_str()) {
            let image = self.renderer.render(&current, self.config.font_color);
            self.value = Some(current);
            self.rendered = Some(image);
            self.relayout();
        } else if self.laid_out_for != self.rect {
            self.relayout();
        }
    }

    fn relayout(&mut self) {
        let (w, h) = match &self.rendered {
            Some(image) => (image.width() as i32, image.height() as i32),
            None => (0, 0),
        };
        self.layout = TextLayout::compute(self.rect, w, h);
        self.laid_out_for = self.rect;
    }

    fn set_focused(&mut self, focused: bool) {
        if focused && !self.focused {
            self.cursor_visible = true;
            self.blink_rebase = true;
        }
        self.focused = focused;
    }

    fn tick_blink(&mut self, now_ms: u64) {
        if !self.focused {
            return;
        }
        if self.blink_rebase {
            self.blink_rebase = false;
            self.blink_timer = now_ms;
            return;
        }
        if now_ms.saturating_sub(self.blink_timer) >= BLINK_INTERVAL_MS {
            self.cursor_visible = !self.cursor_visible;
            self.blink_timer = now_ms;
        }
    }

    pub fn draw<C>(&self, canvas: &mut C)
    where
        C: Canvas<Image = R::Image>,
    {
        let config = &self.config;
        if !config.transparent {
            let outline = self
                .rect
                .inflate(config.outline_width * 2, config.outline_width * 2);
            canvas.stroke_rect(
                outline,
                config.outline_for(self.focused, self.invalid),
                config.outline_thickness,
                config.border_radius,
            );
            if let Some(background) = config.background {
                canvas.fill_rect(self.rect, background);
            }
        }

        if let Some(image) = &self.rendered {
            canvas.blit(image, self.layout.origin(), Some(self.layout.render_area));
        }

        if self.cursor_visible && self.focused {
            canvas.fill_rect(self.layout.cursor_rect(), config.font_color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Vec2;
    use crate::render::{DrawCommand, MonospaceText, RecordingCanvas, colors};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn field() -> TextInputField<MonospaceText> {
        TextInputField::new("name", Rect::new(10, 10, 66, 30), MonospaceText::new(10, 20))
    }

    fn focused() -> TextInputField<MonospaceText> {
        field().with_focus(true)
    }

    fn type_str(field: &mut TextInputField<MonospaceText>, text: &str) {
        for ch in text.chars() {
            field.handle_event(&InputEvent::char(ch));
        }
    }

    #[test]
    fn keystrokes_ignored_without_focus() {
        let mut field = field();
        assert_eq!(field.handle_event(&InputEvent::char('a')), FieldResponse::Ignored);
        assert_eq!(field.text(), "");
    }

    #[test]
    fn click_inside_focuses_and_outside_unfocuses() {
        let mut field = field();
        assert_eq!(field.handle_event(&InputEvent::click(20, 20)), FieldResponse::FocusChanged);
        assert!(field.is_focused());
        assert_eq!(field.handle_event(&InputEvent::click(20, 20)), FieldResponse::Ignored);
        assert_eq!(field.handle_event(&InputEvent::click(200, 20)), FieldResponse::FocusChanged);
        assert!(!field.is_focused());
    }

    #[test]
    fn secondary_click_does_not_focus() {
        let mut field = field();
        let event = InputEvent::PointerPress {
            position: Vec2::new(20, 20),
            button: PointerButton::Secondary,
        };
        assert_eq!(field.handle_event(&event), FieldResponse::Ignored);
        assert!(!field.is_focused());
    }

    #[test]
    fn rejected_char_sets_flag_until_next_accept() {
        let mut field = focused().with_config(TextFieldConfig {
            rule: CharRule::Digits,
            ..TextFieldConfig::default()
        });
        type_str(&mut field, "1x");
        assert!(field.is_invalid());
        assert_eq!(field.text(), "1");

        field.handle_event(&InputEvent::char('2'));
        assert!(!field.is_invalid());
        assert_eq!(field.text(), "12");
    }

    #[test]
    fn backspace_on_empty_is_noop() {
        let mut field = focused();
        assert_eq!(field.handle_event(&InputEvent::key(Key::Backspace)), FieldResponse::Ignored);
        type_str(&mut field, "ab");
        assert_eq!(field.handle_event(&InputEvent::key(Key::Backspace)), FieldResponse::Edited);
        assert_eq!(field.text(), "a");
    }

    #[test]
    fn enter_commits_and_unfocuses() {
        let commits = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&commits);
        let mut field = focused().on_commit(move |id, value| {
            sink.borrow_mut().push((id.to_string(), value.to_string()));
        });

        type_str(&mut field, "abc");
        assert_eq!(field.handle_event(&InputEvent::key(Key::Enter)), FieldResponse::Committed);

        assert_eq!(*commits.borrow(), vec![("name".to_string(), "abc".to_string())]);
        assert!(!field.is_focused());
        assert_eq!(field.text(), "abc");
    }

    #[test]
    fn commit_policies() {
        let mut field = focused().with_text("42").with_config(TextFieldConfig {
            clear_on_commit: true,
            stay_focused_on_commit: true,
            ..TextFieldConfig::default()
        });
        field.commit();
        assert!(field.is_focused());
        assert_eq!(field.text(), "");

        field.update(0);
        assert_eq!(field.value(), "");
    }

    #[test]
    fn commits_reach_a_channel() {
        let (tx, rx) = crossbeam_channel::unbounded();
        let mut field = focused().with_text("7").with_commit_callback(commit_sender(tx));
        field.commit();
        assert_eq!(
            rx.try_recv().unwrap(),
            CommitEvent {
                field_id: "name".into(),
                value: "7".into()
            }
        );
    }

    #[test]
    fn update_tracks_buffer() {
        let mut field = focused().with_text("0");
        assert_eq!(field.value(), "");
        field.force_update(0);
        assert_eq!(field.value(), "0");

        type_str(&mut field, "12");
        assert_eq!(field.value(), "0");
        field.update(10);
        assert_eq!(field.value(), "012");
    }

    #[test]
    fn update_is_idempotent() {
        let mut field = focused().with_text("hello");
        field.force_update(0);
        field.update(50);
        let (value, layout, cursor) =
            (field.value().to_string(), *field.layout(), field.cursor_visible());
        field.update(60);
        assert_eq!(field.value(), value);
        assert_eq!(*field.layout(), layout);
        assert_eq!(field.cursor_visible(), cursor);
    }

    #[test]
    fn cursor_blinks_every_interval_while_focused() {
        let mut field = focused();
        field.force_update(0);
        assert!(field.cursor_visible());

        field.update(199);
        assert!(field.cursor_visible());
        field.update(200);
        assert!(!field.cursor_visible());
        field.update(399);
        assert!(!field.cursor_visible());
        field.update(400);
        assert!(field.cursor_visible());
    }

    #[test]
    fn unfocused_time_does_not_count_toward_blink() {
        let mut field = field();
        field.force_update(0);
        for now in (0..=5000).step_by(16) {
            field.update(now);
        }
        field.handle_event(&InputEvent::click(20, 20));

        for now in 5001..5201 {
            field.update(now);
            assert!(field.cursor_visible(), "toggled at {now}");
        }
        field.update(5201);
        assert!(!field.cursor_visible());
    }

    #[test]
    fn refocus_shows_cursor_again() {
        let mut field = focused();
        field.force_update(0);
        field.update(200);
        assert!(!field.cursor_visible());

        field.handle_event(&InputEvent::click(200, 20));
        field.handle_event(&InputEvent::click(20, 20));
        assert!(field.cursor_visible());
        field.update(300);
        field.update(499);
        assert!(field.cursor_visible());
    }

    #[test]
    fn cursor_frozen_while_unfocused() {
        let mut field = field();
        field.force_update(0);
        for now in (0..2000).step_by(50) {
            field.update(now);
            assert!(field.cursor_visible());
        }
    }

    #[test]
    fn long_text_scrolls_to_tail() {
        // interior width is 66 - 6 = 60, i.e. six characters
        let mut field = focused().with_text("abcdef");
        field.force_update(0);
        assert_eq!(field.viewport_offset(), 0);

        type_str(&mut field, "gh");
        field.update(0);
        assert_eq!(field.viewport_offset(), 20);
        assert_eq!(field.layout().render_area.right(), 80);
    }

    #[test]
    fn resizing_relayouts_without_rerender() {
        let mut field = focused().with_text("abcdef");
        field.force_update(0);
        field.set_rect(Rect::new(10, 10, 46, 30));
        field.update(0);
        assert_eq!(field.viewport_offset(), 20);
    }

    #[test]
    fn draw_emits_outline_background_text_and_cursor() {
        let mut field = focused().with_text("ab");
        field.force_update(0);
        let mut canvas = RecordingCanvas::new();
        field.draw(&mut canvas);

        assert_eq!(
            canvas.commands,
            vec![
                DrawCommand::Stroke {
                    rect: Rect::new(8, 8, 70, 34),
                    color: colors::BLUE,
                    thickness: 2,
                    radius: 3,
                },
                DrawCommand::Fill {
                    rect: Rect::new(10, 10, 66, 30),
                    color: colors::WHITE,
                },
                DrawCommand::Blit {
                    label: "ab".into(),
                    dest: Vec2::new(12, 15),
                    area: Some(Rect::new(0, 0, 20, 20)),
                },
                DrawCommand::Fill {
                    rect: Rect::new(33, 15, 2, 20),
                    color: colors::BLACK,
                },
            ]
        );
    }

    #[test]
    fn transparent_unfocused_field_only_draws_text() {
        let mut field = field().with_text("ab").with_config(TextFieldConfig {
            transparent: true,
            ..TextFieldConfig::default()
        });
        field.force_update(0);
        let mut canvas = RecordingCanvas::new();
        field.draw(&mut canvas);
        assert_eq!(canvas.commands.len(), 1);
        assert!(matches!(canvas.commands[0], DrawCommand::Blit { .. }));
    }

    #[test]
    fn invalid_outline_is_red() {
        let mut field = focused().with_config(TextFieldConfig {
            rule: CharRule::Digits,
            ..TextFieldConfig::default()
        });
        field.handle_event(&InputEvent::char('x'));
        field.force_update(0);
        let mut canvas = RecordingCanvas::new();
        field.draw(&mut canvas);
        assert!(matches!(
            canvas.commands[0],
            DrawCommand::Stroke { color, .. } if color == colors::RED
        ));
    }
}
