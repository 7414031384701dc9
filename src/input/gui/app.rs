use std::time::Instant;

use rand::rngs::SmallRng;
use tracing::{error, info, warn};
use winit::event::{ElementState, Event, KeyEvent, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop, EventLoopWindowTarget};
use winit::keyboard::{Key, NamedKey};
use winit::window::Window;

use crate::controllers::chaos_game::config::SchedulerConfig;
use crate::controllers::chaos_game::scheduler::ChaosGameScheduler;
use crate::core::actions::chaos_game::generator::ChaosGameGenerator;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::triangle::Triangle;
use crate::input::cli::iteration_count::{ValidationError, parse_iteration_count};
use crate::input::gui::commands::run_gui::{GuiConfig, RunGuiError};
use crate::presenters::pixels::presenter::PixelsPresenter;
use crate::presenters::raster::surface::RasterSurface;
use crate::presenters::status::run_status::RunStatus;

pub const WINDOW_TITLE: &str = "Sierpinski Chaos Game";

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum GuiAction {
    Cancel,
    Regenerate,
    TypeDigit(char),
    EraseDigit,
}

/// Maps a pressed key to what the window does with it.
#[must_use]
pub fn key_action(key: &Key) -> Option<GuiAction> {
    match key {
        Key::Named(NamedKey::Escape) => Some(GuiAction::Cancel),
        Key::Named(NamedKey::Backspace) => Some(GuiAction::EraseDigit),
        Key::Character(text) if text.eq_ignore_ascii_case("r") => Some(GuiAction::Regenerate),
        Key::Character(text) => {
            let mut chars = text.chars();
            match (chars.next(), chars.next()) {
                (Some(digit), None) if digit.is_ascii_digit() => Some(GuiAction::TypeDigit(digit)),
                _ => None,
            }
        }
        _ => None,
    }
}

/// Point count typed into the window for the next run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CountEntry {
    typed: String,
}

impl CountEntry {
    pub fn push(&mut self, digit: char) {
        if digit.is_ascii_digit() {
            self.typed.push(digit);
        }
    }

    pub fn erase(&mut self) {
        self.typed.pop();
    }

    #[must_use]
    pub fn typed(&self) -> Option<&str> {
        (!self.typed.is_empty()).then_some(self.typed.as_str())
    }

    /// Count for the next run. Nothing typed keeps `current`; the entry is
    /// cleared either way.
    pub fn take(&mut self, current: u64) -> Result<u64, ValidationError> {
        let typed = std::mem::take(&mut self.typed);

        if typed.is_empty() {
            Ok(current)
        } else {
            parse_iteration_count(&typed)
        }
    }
}

#[must_use]
pub fn window_title(status: &RunStatus, entry: &CountEntry) -> String {
    match entry.typed() {
        Some(typed) => format!("{WINDOW_TITLE} - {} - next run: {typed} points", status.label()),
        None => format!("{WINDOW_TITLE} - {}", status.label()),
    }
}

type GuiScheduler = ChaosGameScheduler<SmallRng, RasterSurface, RunStatus>;

pub struct GuiApp {
    window: &'static Window,
    presenter: PixelsPresenter,
    scheduler: GuiScheduler,
    triangle: Triangle,
    iterations: u64,
    entry: CountEntry,
    redraw_pending: bool,
}

impl GuiApp {
    pub fn new(window: &'static Window, config: &GuiConfig) -> Result<Self, RunGuiError> {
        let pixel_rect = PixelRect::from_size(config.canvas_size, config.canvas_size)?;
        let presenter = PixelsPresenter::new(window, config.canvas_size, config.canvas_size)?;

        let generator = match config.seed {
            Some(seed) => ChaosGameGenerator::seeded(seed),
            None => ChaosGameGenerator::from_entropy(),
        };

        let scheduler = ChaosGameScheduler::new(
            generator,
            RasterSurface::new(pixel_rect),
            RunStatus::default(),
            SchedulerConfig {
                step_delay: config.step_delay,
            },
        );

        Ok(Self {
            window,
            presenter,
            scheduler,
            triangle: config.triangle,
            iterations: config.iterations,
            entry: CountEntry::default(),
            redraw_pending: true,
        })
    }

    /// Starts a fresh run, cancelling the current one first. A typed count
    /// replaces the current one when it is valid.
    pub fn regenerate(&mut self) -> Result<(), RunGuiError> {
        match self.entry.take(self.iterations) {
            Ok(iterations) => self.iterations = iterations,
            Err(error) => warn!(%error, iterations = self.iterations, "typed count ignored"),
        }

        if self.scheduler.is_running() {
            self.scheduler.cancel()?;
        }

        self.scheduler.start(self.triangle, self.iterations, Instant::now())?;
        self.sync_window();

        Ok(())
    }

    pub fn run(mut self, event_loop: EventLoop<()>) -> Result<(), RunGuiError> {
        self.regenerate()?;

        event_loop.run(move |event, elwt| match event {
            Event::WindowEvent { ref event, window_id } if window_id == self.window.id() => {
                self.handle_window_event(event, elwt);
            }
            Event::AboutToWait => self.about_to_wait(elwt),
            _ => {}
        })?;

        Ok(())
    }

    fn handle_window_event(&mut self, event: &WindowEvent, elwt: &EventLoopWindowTarget<()>) {
        match event {
            WindowEvent::CloseRequested => elwt.exit(),
            WindowEvent::RedrawRequested => {
                self.redraw_pending = false;

                let buffer = self.scheduler.surface().pixel_buffer();

                if let Err(error) = self.presenter.present(buffer) {
                    error!(%error, "render failed");
                    elwt.exit();
                }
            }
            WindowEvent::Resized(size) => {
                if let Err(error) = self.presenter.resize(size.width, size.height) {
                    warn!(%error, "resize failed");
                }
                self.redraw_pending = true;
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        logical_key,
                        state: ElementState::Pressed,
                        ..
                    },
                ..
            } => self.handle_action(key_action(logical_key), elwt),
            _ => {}
        }
    }

    fn handle_action(&mut self, action: Option<GuiAction>, elwt: &EventLoopWindowTarget<()>) {
        match action {
            Some(GuiAction::Cancel) if self.scheduler.is_running() => {
                if let Err(error) = self.scheduler.cancel() {
                    warn!(%error, "cancel failed");
                }
                self.sync_window();
            }
            Some(GuiAction::Regenerate) => {
                info!("regenerating");
                if let Err(error) = self.regenerate() {
                    error!(%error, "could not start a new run");
                    elwt.exit();
                }
            }
            Some(GuiAction::TypeDigit(digit)) => {
                self.entry.push(digit);
                self.refresh_title();
            }
            Some(GuiAction::EraseDigit) => {
                self.entry.erase();
                self.refresh_title();
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, elwt: &EventLoopWindowTarget<()>) {
        self.scheduler.tick(Instant::now());
        self.sync_window();

        if self.redraw_pending {
            self.window.request_redraw();
        }

        match self.scheduler.next_deadline() {
            Some(due) => elwt.set_control_flow(ControlFlow::WaitUntil(due)),
            None => elwt.set_control_flow(ControlFlow::Wait),
        }
    }

    /// Pulls presenter state into the window: title on status change and a
    /// redraw when new points landed.
    fn sync_window(&mut self) {
        let status = self.scheduler.presenter_mut();

        if status.take_points() > 0 {
            self.redraw_pending = true;
        }

        if status.take_changed() {
            self.refresh_title();
            self.redraw_pending = true;
        }
    }

    fn refresh_title(&mut self) {
        let title = window_title(self.scheduler.presenter_mut(), &self.entry);
        self.window.set_title(&title);
    }
}
