// This file is part of draw-bench and is licenced under the GNU GPL v3.0.
// See LICENSE file for full text.
// Copyright © 2026 draw-bench contributors

use std::num::NonZeroU32;
use std::rc::Rc;
use std::time::Duration;

use debug_print::debug_println;
use log::info;
use winit::application::ApplicationHandler;
use winit::event::{ElementState, KeyEvent, StartCause, WindowEvent};
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::keyboard::{Key, NamedKey};
use winit::platform::pump_events::{EventLoopExtPumpEvents, PumpStatus};
use winit::window::{Fullscreen, Window, WindowId};

use draw_bench::canvas::Canvas;
use draw_bench::error::BenchError;
use draw_bench::screen::Screen;
use draw_bench::settings::Settings;

type Surface = softbuffer::Surface<Rc<Window>, Rc<Window>>;

/// how long a single pump may block while we wait for the window to appear
const STARTUP_PUMP_TIMEOUT: Duration = Duration::from_millis(10);
/// give up on the window if it hasn't appeared after this many pumps
const STARTUP_PUMP_LIMIT: u32 = 500;

/// Window context
struct Context {
    window: Rc<Window>,
    surface: Surface,
}

impl Context {
    fn new(active_event_loop: &ActiveEventLoop, settings: &Settings) -> Result<Self, BenchError> {
        // The window, softbuffer context and surface MUST live and die together. The softbuffer
        // context only gets used right here, and the surface holds its own handle to the window.
        let window = Rc::new(init_window(active_event_loop, settings)?);
        let context = softbuffer::Context::new(window.clone())?;
        let surface: Surface = Surface::new(&context, window.clone())?;
        Ok(Context { window, surface })
    }
}

/// Event handler state. Events are only delivered while the harness is pumping.
struct State {
    settings: Settings,
    context: Option<Context>,
    /// window creation failure, handed back to whoever is pumping
    error: Option<BenchError>,
    exit_requested: bool,
}

impl State {
    fn new(settings: Settings) -> Self {
        State {
            settings,
            context: None,
            error: None,
            exit_requested: false,
        }
    }
}

impl ApplicationHandler for State {
    fn new_events(&mut self, event_loop: &ActiveEventLoop, cause: StartCause) {
        if matches!(cause, StartCause::Init) && self.context.is_none() {
            match Context::new(event_loop, &self.settings) {
                Ok(context) => self.context = Some(context),
                Err(e) => {
                    self.error = Some(e);
                    event_loop.exit();
                }
            }
        }
    }

    fn resumed(&mut self, _event_loop: &ActiveEventLoop) {
        // only used on iOS/Android/Web
    }

    fn window_event(&mut self, _event_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                debug_println!("close requested");
                self.exit_requested = true;
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        logical_key: Key::Named(NamedKey::Escape),
                        state: ElementState::Pressed,
                        ..
                    },
                ..
            } => {
                debug_println!("escape pressed");
                self.exit_requested = true;
            }
            WindowEvent::Resized(size) => {
                // the frame keeps its original size and gets clipped or padded on present
                debug_println!("window size changed to {:?}", size);
            }
            _ => {}
        }
    }
}

/// A real window, drawn with softbuffer. The event loop is pumped by the harness instead of
/// owning the thread, which keeps the benchmark a plain sequential program.
pub struct WindowScreen {
    event_loop: EventLoop<()>,
    state: State,
    frame: Canvas,
}

impl WindowScreen {
    /// Open the window and wait for it to exist.
    pub fn new(settings: &Settings) -> Result<Self, BenchError> {
        let mut event_loop = EventLoop::new()?;
        let mut state = State::new(settings.clone());

        let mut pumps = 0;
        let size = loop {
            let status = event_loop.pump_app_events(Some(STARTUP_PUMP_TIMEOUT), &mut state);
            if let Some(e) = state.error.take() {
                return Err(e);
            }
            if let Some(context) = &state.context {
                break context.window.inner_size();
            }
            if state.exit_requested || matches!(status, PumpStatus::Exit(_)) || pumps >= STARTUP_PUMP_LIMIT {
                return Err(BenchError::WindowUnavailable);
            }
            pumps += 1;
        };

        info!("Opened {}x{} window", size.width, size.height);
        Ok(WindowScreen {
            event_loop,
            state,
            frame: Canvas::new(size.width, size.height),
        })
    }
}

impl Screen for WindowScreen {
    fn frame(&mut self) -> &mut Canvas {
        &mut self.frame
    }

    fn present(&mut self) -> Result<(), BenchError> {
        let context = self.state.context.as_mut().ok_or(BenchError::WindowUnavailable)?;
        let size = context.window.inner_size();
        let (Some(width), Some(height)) = (NonZeroU32::new(size.width), NonZeroU32::new(size.height)) else {
            // minimized, nothing to show
            return Ok(());
        };

        context.surface.resize(width, height)?;
        let mut buffer = context.surface.buffer_mut()?;
        self.frame.copy_to(&mut buffer, size.width, size.height);
        buffer.present()?;
        Ok(())
    }

    fn set_title(&mut self, title: &str) {
        if let Some(context) = &self.state.context {
            context.window.set_title(title);
        }
    }

    fn pump_events(&mut self) -> Result<(), BenchError> {
        let status = self.event_loop.pump_app_events(Some(Duration::ZERO), &mut self.state);
        if matches!(status, PumpStatus::Exit(_)) {
            self.state.exit_requested = true;
        }

        if self.state.exit_requested {
            Err(BenchError::ExitRequested)
        } else {
            Ok(())
        }
    }
}

/// Initialize the window according to the configured display mode.
fn init_window(active_event_loop: &ActiveEventLoop, settings: &Settings) -> Result<Window, BenchError> {
    let monitor_size = active_event_loop.primary_monitor().map(|monitor| monitor.size());
    let layout = settings.window_layout(monitor_size);
    info!("Display mode is set to {:?}", settings.persisted.display_mode);
    debug_println!("resolved window layout {:?}", layout);

    let window_attributes = Window::default_attributes()
        .with_title("Draw Bench")
        .with_inner_size(layout.size)
        .with_decorations(layout.decorations)
        .with_resizable(layout.resizable)
        .with_fullscreen(layout.fullscreen.then_some(Fullscreen::Borderless(None)));

    Ok(active_event_loop.create_window(window_attributes)?)
}
