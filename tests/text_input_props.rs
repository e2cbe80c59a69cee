//! Property tests for the text field's editing model.

use proptest::prelude::*;
use save_editor::geometry::Rect;
use save_editor::input::{InputEvent, Key};
use save_editor::render::MonospaceText;
use save_editor::widgets::text_input::CharRule;
use save_editor::widgets::{FieldResponse, TextFieldConfig, TextInputField};

fn focused_field(rule: CharRule) -> TextInputField<MonospaceText> {
    let config = TextFieldConfig {
        rule,
        ..TextFieldConfig::default()
    };
    TextInputField::new("prop", Rect::new(0, 0, 80, 30), MonospaceText::new(9, 18))
        .with_config(config)
        .with_focus(true)
}

fn arb_rule() -> impl Strategy<Value = CharRule> {
    prop_oneof![
        Just(CharRule::Any),
        Just(CharRule::Printable),
        Just(CharRule::Digits),
        Just(CharRule::Alphanumeric),
    ]
}

proptest! {
    #[test]
    fn buffer_is_accepted_subsequence(rule in arb_rule(), typed in "\\PC{0,40}") {
        let mut field = focused_field(rule);
        for ch in typed.chars() {
            let response = field.handle_event(&InputEvent::char(ch));
            let expected = if rule.accepts(ch) {
                FieldResponse::Edited
            } else {
                FieldResponse::Rejected
            };
            prop_assert_eq!(response, expected);
            prop_assert_eq!(field.is_invalid(), !rule.accepts(ch));
        }
        let accepted: String = typed.chars().filter(|ch| rule.accepts(*ch)).collect();
        prop_assert_eq!(field.text(), accepted);
    }

    #[test]
    fn backspace_removes_last_char(typed in "[0-9a-z]{0,20}", presses in 0usize..30) {
        let mut field = focused_field(CharRule::Alphanumeric);
        for ch in typed.chars() {
            field.handle_event(&InputEvent::char(ch));
        }
        for _ in 0..presses {
            field.handle_event(&InputEvent::key(Key::Backspace));
        }
        let remaining = typed.chars().count().saturating_sub(presses);
        let kept: String = typed.chars().take(remaining).collect();
        prop_assert_eq!(field.text(), kept);
    }

    #[test]
    fn repeated_update_is_idempotent(typed in "[0-9]{0,30}", now in 0u64..10_000) {
        let mut field = focused_field(CharRule::Digits);
        for ch in typed.chars() {
            field.handle_event(&InputEvent::char(ch));
        }
        field.force_update(now);
        let layout = *field.layout();
        let value = field.value().to_string();
        let cursor = field.cursor_visible();

        // Same timestamp: no blink, no re-layout.
        field.update(now);
        prop_assert_eq!(*field.layout(), layout);
        prop_assert_eq!(field.value(), value.as_str());
        prop_assert_eq!(field.cursor_visible(), cursor);
        prop_assert!(field.layout().render_area.w <= 80 - 6);
    }
}
