//! Sandbox window hosting one editor screen.
//!
//! The screen owns two numeric fields and the character animation, the way
//! the character box of the editor does. Each frame is drawn onto a
//! [`GpuCanvas`] and presented by the wgpu renderer.

use crate::animation::{AnimationClip, AnimationSet, ClipSelector, Frame, Repeat};
use crate::assets::AssetCache;
use crate::config::EditorConfig;
use crate::error::RenderError;
use crate::geometry::{Rect, Vec2};
use crate::input::{InputEvent, InputTranslator, Key};
use crate::render::{Canvas, Color, Placeholder, TextRenderer, colors};
use crate::renderer::{GlyphText, GpuCanvas, GpuRenderer, load_font};
use crate::widgets::text_input::{CharRule, commit_sender};
use crate::widgets::{CommitEvent, TextInputField};
use crossbeam_channel::Receiver;
use std::sync::Arc;
use std::time::Instant;
use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

const BOX_ORIGIN: Vec2 = Vec2 { x: 115, y: 20 };
const BOX_SIZE: Vec2 = Vec2 { x: 300, y: 380 };
const BOX_COLOR: Color = [23.0 / 255.0, 23.0 / 255.0, 55.0 / 255.0, 0.5];
const FIELD_WIDTH: i32 = 175;
const FRAME_SIZE: (u32, u32) = (250, 300);
const LABEL_OUTLINE: u32 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenAction {
    None,
    Quit,
}

pub struct EditorScreen<R: TextRenderer<Image = Placeholder>> {
    next: TextInputField<R>,
    level: TextInputField<R>,
    labels: Vec<(Placeholder, Vec2)>,
    characters: AnimationSet<Placeholder>,
    selected: usize,
    commits: Receiver<CommitEvent>,
}

impl<R: TextRenderer<Image = Placeholder> + Clone> EditorScreen<R> {
    /// `text` draws the field contents, `label_text` the box captions.
    pub fn new(config: &EditorConfig, text: R, label_text: R) -> Self {
        let (tx, rx) = crossbeam_channel::unbounded();
        let line_height = text.line_height() as i32;

        let make_field = |id: &str, index: i32| {
            TextInputField::new(id, field_rect(index, line_height), text.clone())
                .with_config(config.text_field.clone())
                .with_validator(CharRule::Digits.into())
                .with_text("0")
                .with_commit_callback(commit_sender(tx.clone()))
        };
        let mut next = make_field("next", 0);
        let mut level = make_field("level", 1);
        next.force_update(0);
        level.force_update(0);

        // Captions sit 20 and 60 px above the bottom of the box.
        let labels = [("Level", 20), ("Next", 60)]
            .into_iter()
            .map(|(caption, lift)| {
                let image = label_text.render(caption, colors::WHITE);
                let at = BOX_ORIGIN + Vec2::new(20, BOX_SIZE.y - image.height as i32 - lift);
                (image, at)
            })
            .collect();

        Self {
            next,
            level,
            labels,
            characters: load_characters(config),
            selected: 0,
            commits: rx,
        }
    }

    pub fn handle_event(&mut self, event: &InputEvent) -> ScreenAction {
        if let InputEvent::KeyPress { key, .. } = event {
            match key {
                Key::Escape => return ScreenAction::Quit,
                Key::Tab => {
                    self.cycle_character();
                    return ScreenAction::None;
                }
                _ => {}
            }
        }
        self.next.handle_event(event);
        self.level.handle_event(event);
        ScreenAction::None
    }

    fn cycle_character(&mut self) {
        self.selected = (self.selected + 1) % self.characters.len().max(1);
        if let Err(e) = self.characters.set_active(ClipSelector::Ordinal(self.selected), true) {
            log::error!("EDITOR: cannot switch character: {}", e);
        }
    }

    pub fn update(&mut self, now_ms: u64, dt_ms: u64) {
        self.next.update(now_ms);
        self.level.update(now_ms);
        if let Err(e) = self.characters.advance(dt_ms) {
            log::error!("EDITOR: animation update failed: {}", e);
        }
    }

    pub fn render<C: Canvas<Image = Placeholder>>(&self, canvas: &mut C) {
        canvas.fill_rect(Rect::new(BOX_ORIGIN.x, BOX_ORIGIN.y, BOX_SIZE.x, BOX_SIZE.y), BOX_COLOR);
        for (image, at) in &self.labels {
            canvas.blit(image, *at, None);
        }

        self.next.draw(canvas);
        self.level.draw(canvas);

        if let Err(e) = self.characters.render_target(canvas, character_position()) {
            log::error!("EDITOR: cannot draw character: {}", e);
        }
    }

    /// Logs and returns the commits received since the last call.
    pub fn drain_commits(&self) -> Vec<CommitEvent> {
        let commits: Vec<CommitEvent> = self.commits.try_iter().collect();
        for commit in &commits {
            log::info!("EDITOR: {} = {:?}", commit.field_id, commit.value);
        }
        commits
    }

    pub fn active_character(&self) -> Option<&str> {
        self.characters.active_name()
    }
}

/// Anchor of the character sprite, in the lower right of the box.
fn character_position() -> Vec2 {
    let inset = Vec2::new(BOX_SIZE.x * 100 / 185, BOX_SIZE.y / 3);
    BOX_ORIGIN + BOX_SIZE - inset
}

/// Stacks the fields upwards from the bottom of the character box.
fn field_rect(index: i32, line_height: i32) -> Rect {
    let height = line_height + 5;
    Rect::new(
        BOX_ORIGIN.x + BOX_SIZE.y / 4,
        BOX_ORIGIN.y + BOX_SIZE.y - height - 15 - height * index,
        FIELD_WIDTH,
        height,
    )
}

fn load_characters(config: &EditorConfig) -> AnimationSet<Placeholder> {
    let mut cache: AssetCache<String, Placeholder> = AssetCache::new();
    let mut set = AnimationSet::new();

    for manifest in &config.characters {
        let clip = manifest.build(&mut cache, |path| {
            Ok(Placeholder::new(path, FRAME_SIZE.0, FRAME_SIZE.1))
        });
        match clip {
            Ok(clip) => {
                log::info!("EDITOR: loaded {} frames for {:?}", clip.len(), manifest.name);
                set.add_or_replace_clip(manifest.name.clone(), clip);
            }
            Err(e) => log::warn!("EDITOR: skipping character {:?}: {}", manifest.name, e),
        }
    }
    cache.seal();

    if set.is_empty() {
        log::warn!("EDITOR: no characters configured, using a placeholder");
        let frame = Frame::new(Placeholder::new("undefined.png", FRAME_SIZE.0, FRAME_SIZE.1));
        if let Ok(clip) = AnimationClip::new(vec![frame], 0, Repeat::Infinite) {
            set.add_or_replace_clip("undefined", clip);
        }
    }
    if let Err(e) = set.set_active(ClipSelector::Ordinal(0), true) {
        log::error!("EDITOR: no default character: {}", e);
    }
    set
}

/// Main application struct handling window events.
pub struct App {
    config: EditorConfig,
    window: Option<Arc<Window>>,
    renderer: Option<GpuRenderer>,
    text: GlyphText,
    screen: EditorScreen<GlyphText>,
    translator: InputTranslator,
    started: Instant,
    last_frame: Instant,
}

impl App {
    /// Loads the font and builds the screen. The window and GPU come up
    /// when the event loop resumes.
    pub fn new(config: EditorConfig) -> Result<Self, RenderError> {
        let font = load_font(&config.window.font)?;
        let text = GlyphText::new(font, config.window.font_size);
        let label_text = text.clone().with_outline(colors::BLACK, LABEL_OUTLINE);
        let screen = EditorScreen::new(&config, text.clone(), label_text);
        let now = Instant::now();
        Ok(Self {
            config,
            window: None,
            renderer: None,
            text,
            screen,
            translator: InputTranslator::new(),
            started: now,
            last_frame: now,
        })
    }

    /// Runs the application event loop (blocking).
    pub fn run(mut self) -> Result<(), winit::error::EventLoopError> {
        let event_loop = EventLoop::new()?;
        event_loop.set_control_flow(ControlFlow::Poll);
        event_loop.run_app(&mut self)
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let now = Instant::now();
        let now_ms = now.duration_since(self.started).as_millis() as u64;
        let dt_ms = now.duration_since(self.last_frame).as_millis() as u64;
        // Sub-millisecond frames are folded into the next one.
        if dt_ms > 0 {
            self.last_frame = now;
        }

        self.screen.update(now_ms, dt_ms);
        self.screen.drain_commits();

        let (Some(renderer), Some(window)) = (self.renderer.as_mut(), self.window.as_ref()) else {
            return;
        };
        let (width, height) = renderer.size();
        let mut canvas = GpuCanvas::new(self.text.clone(), width, height);
        self.screen.render(&mut canvas);
        log::trace!(
            "EDITOR: frame has {} quads and {} text sections",
            canvas.quads().len(),
            canvas.sections().len()
        );

        match renderer.present(&canvas) {
            Ok(_) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                renderer.resize(window.inner_size());
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("RENDER: out of memory");
                event_loop.exit();
            }
            Err(wgpu::SurfaceError::Timeout) => {
                log::warn!("RENDER: timeout, frame dropped");
            }
            #[allow(unreachable_patterns)]
            Err(e) => log::error!("RENDER: {e:?}"),
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        log::info!("EDITOR: Creating window...");
        let attributes = Window::default_attributes()
            .with_title(self.config.window.title.clone())
            .with_inner_size(winit::dpi::LogicalSize::new(
                self.config.window.width as f64,
                self.config.window.height as f64,
            ));

        let window = match event_loop.create_window(attributes) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                log::error!("EDITOR: failed to create window: {}", e);
                event_loop.exit();
                return;
            }
        };

        let font = self.text.font().clone();
        match pollster::block_on(GpuRenderer::new(window.clone(), font)) {
            Ok(renderer) => self.renderer = Some(renderer),
            Err(e) => {
                log::error!("RENDER: {}", e);
                event_loop.exit();
                return;
            }
        }
        window.request_redraw();
        self.window = Some(window);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        if let Some(input) = self.translator.translate(&event)
            && self.screen.handle_event(&input) == ScreenAction::Quit
        {
            log::info!("EDITOR: Quit requested");
            event_loop.exit();
            return;
        }

        match event {
            WindowEvent::CloseRequested => {
                log::info!("EDITOR: Close requested");
                event_loop.exit();
            }
            WindowEvent::Resized(physical_size) => {
                if let Some(renderer) = self.renderer.as_mut() {
                    renderer.resize(physical_size);
                }
            }
            WindowEvent::RedrawRequested => {
                self.redraw(event_loop);
                if let Some(window) = self.window.as_ref() {
                    window.request_redraw();
                }
            }
            _ => {}
        }
    }
}
