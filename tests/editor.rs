use textplace::Config;
use textplace::config::ShapeType;
use textplace::editor::Editor;
use textplace::input::{InputId, Key};
use textplace::timer::ManualTimers;
use textplace::tool::{PointerTool, RegistryError, TextTool};

fn make_editor(width: i32, height: i32, config: &Config) -> Editor {
    Editor::new(width, height, config, Box::new(ManualTimers::new())).unwrap()
}

/// Editor with the pointer tool active, switched to text with the `t` key.
fn editor_in_text_mode(config: &Config) -> Editor {
    let mut editor = make_editor(200, 100, config);
    editor.activate_tool("pointer").unwrap();
    assert!(editor.key_down(Key::Char('t')));
    assert_eq!(editor.active_tool(), Some(TextTool::ID));
    editor
}

fn assert_text_near_center(bounds: Option<(i32, i32, i32, i32)>) {
    let (min_x, _, _, max_y) = bounds.expect("text should paint pixels");
    assert!(min_x >= 96, "text starts right of the cursor, got {min_x}");
    assert!(max_y <= 58, "text sits on the cursor baseline, got {max_y}");
}

#[test]
fn typing_then_clicking_commits_text_and_returns_to_pointer() {
    let mut editor = editor_in_text_mode(&Config::default());
    assert_eq!(editor.mouse().x, 100);
    assert_eq!(editor.mouse().y, 50);
    assert!(editor.text_options_visible());
    assert_eq!(editor.active_timers().len(), 1);
    assert_eq!(editor.input_listener_count(), 4);

    editor.set_input(InputId::TextString, "Hi");
    assert_eq!(editor.preview_mut().painted_bounds(), None);

    editor.tick_all_timers();
    assert_text_near_center(editor.preview_mut().painted_bounds());
    assert_eq!(editor.layer_mut().painted_bounds(), None);

    assert!(editor.click(100, 50));
    assert_text_near_center(editor.layer_mut().painted_bounds());
    assert_eq!(editor.preview_mut().painted_bounds(), None);
    assert_eq!(editor.active_tool(), Some(PointerTool::ID));
    assert!(editor.active_timers().is_empty());
    assert_eq!(editor.input_listener_count(), 0);
    assert!(!editor.text_options_visible());
    assert_eq!(
        editor.status(),
        Some(Config::default().messages.status_text_committed.as_str())
    );
}

#[test]
fn escape_discards_preview() {
    let mut editor = editor_in_text_mode(&Config::default());
    editor.tick_all_timers();
    assert!(editor.preview_mut().painted_bounds().is_some());

    assert!(editor.key_down(Key::Escape));
    assert_eq!(editor.active_tool(), Some(PointerTool::ID));
    assert_eq!(editor.preview_mut().painted_bounds(), None);
    assert_eq!(editor.layer_mut().painted_bounds(), None);
    assert!(!editor.mouse().button_down);
}

#[test]
fn non_escape_keys_are_not_handled_in_text_mode() {
    let mut editor = editor_in_text_mode(&Config::default());
    assert!(!editor.key_down(Key::Char('x')));
    assert!(!editor.key_down(Key::Return));
    assert_eq!(editor.active_tool(), Some(TextTool::ID));
}

#[test]
fn stale_tick_after_cancel_does_not_draw() {
    let mut editor = editor_in_text_mode(&Config::default());
    let timers = editor.active_timers();
    editor.key_down(Key::Escape);

    for id in timers {
        editor.timer_tick(id);
    }
    assert_eq!(editor.preview_mut().painted_bounds(), None);
}

#[test]
fn pointer_motion_moves_preview_on_next_tick() {
    let mut editor = editor_in_text_mode(&Config::default());
    editor.tick_all_timers();

    editor.pointer_move(10, 90);
    editor.tick_all_timers();
    let (min_x, _, max_x, _) = editor.preview_mut().painted_bounds().unwrap();
    assert!(min_x >= 6 && min_x < 40, "got {min_x}");
    assert!(max_x < 150);
}

#[test]
fn unsupported_surface_refuses_text_tool() {
    let config = Config::default();
    let mut editor = make_editor(200, 100, &config);
    editor.activate_tool("pointer").unwrap();
    editor.preview_mut().disable_text();

    assert_eq!(
        editor.activate_tool("text"),
        Err(RegistryError::Refused(TextTool::ID))
    );
    assert_eq!(editor.active_tool(), Some(PointerTool::ID));
    assert_eq!(
        editor.last_error(),
        Some(config.messages.error_text_unsupported.as_str())
    );
    assert!(editor.active_timers().is_empty());
}

#[test]
fn unknown_tool_is_an_error() {
    let mut editor = make_editor(20, 20, &Config::default());
    assert_eq!(
        editor.activate_tool("airbrush"),
        Err(RegistryError::UnknownTool("airbrush".into()))
    );
}

#[test]
fn text_without_previous_tool_commits_and_stays_active() {
    let mut editor = make_editor(200, 100, &Config::default());
    editor.activate_tool("text").unwrap();

    assert!(!editor.key_down(Key::Escape));
    assert!(editor.click(100, 50));
    assert!(editor.layer_mut().painted_bounds().is_some());
    assert_eq!(editor.active_tool(), Some(TextTool::ID));
    assert!(editor.active_timers().is_empty());
}

#[test]
fn style_inputs_update_preview_style() {
    let config = Config::default();
    let mut editor = editor_in_text_mode(&config);

    editor.set_input(InputId::TextSize, "48");
    editor.set_input(InputId::LineWidth, "3.5");
    editor.set_input(InputId::TextFont, "monospace");
    let style = editor.preview_mut().style().clone();
    assert_eq!(style.size, 48.0);
    assert_eq!(style.line_width, 3.5);
    assert_eq!(style.font.family, "monospace");

    editor.set_input(InputId::TextSize, "huge");
    editor.set_input(InputId::LineWidth, "-2");
    let style = editor.preview_mut().style().clone();
    assert_eq!(style.size, config.text.font_size);
    assert_eq!(style.line_width, config.text.line_width);
    assert_eq!(editor.input_value(InputId::TextSize), Some("huge"));
}

#[test]
fn stroke_only_config_still_commits_visible_text() {
    let mut config = Config::default();
    config.tool.shape_type = ShapeType::Stroke;
    let mut editor = editor_in_text_mode(&config);

    editor.click(100, 50);
    assert!(editor.layer_mut().painted_bounds().is_some());
}

#[test]
fn shutdown_releases_timers_and_listeners() {
    let mut editor = editor_in_text_mode(&Config::default());
    editor.shutdown();

    assert_eq!(editor.active_tool(), None);
    assert!(editor.active_timers().is_empty());
    assert_eq!(editor.input_listener_count(), 0);
    assert_eq!(editor.preview_mut().painted_bounds(), None);
}

#[test]
fn invalid_image_size_is_rejected() {
    assert!(Editor::new(0, 10, &Config::default(), Box::new(ManualTimers::new())).is_err());
}
