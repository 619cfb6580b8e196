use std::sync::Arc;
use std::time::Instant;

use anyhow::Context;
use game_core::{FrameSink, Params};
use log::{debug, info};
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::ActiveEventLoop;
use winit::keyboard::PhysicalKey;
use winit::window::{Window, WindowId};

use crate::clock::TickClock;
use crate::input::Keyboard;
use crate::renderer::Renderer;

pub const WINDOW_TITLE: &str = "Pong";

/// Host loop adapter: owns the window and GPU state and drives a
/// [`FrameSink`] once per redraw
pub struct App<S: FrameSink> {
    sink: S,
    scale: u32,
    window: Option<Arc<Window>>,
    renderer: Option<Renderer>,
    keyboard: Keyboard,
    clock: TickClock,
    error: Option<anyhow::Error>,
}

impl<S: FrameSink> App<S> {
    pub fn new(sink: S, scale: u32) -> Self {
        Self {
            sink,
            scale,
            window: None,
            renderer: None,
            keyboard: Keyboard::new(),
            clock: TickClock::new(Params::TICKS_PER_SECOND, Params::MAX_TICKS_PER_FRAME),
            error: None,
        }
    }

    /// The error that stopped the loop, if any
    pub fn into_result(self) -> anyhow::Result<()> {
        match self.error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    /// Keep the first fatal error; `main` is the one place that logs it
    fn record_error(&mut self, e: anyhow::Error) {
        debug!("Stopping event loop: {:#}", e);
        if self.error.is_none() {
            self.error = Some(e);
        }
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, e: anyhow::Error) {
        self.record_error(e);
        event_loop.exit();
    }

    fn init(&mut self, event_loop: &ActiveEventLoop) -> anyhow::Result<()> {
        let logical_size = self.sink.layout(0, 0);
        let attributes = Window::default_attributes()
            .with_title(WINDOW_TITLE)
            .with_inner_size(LogicalSize::new(
                logical_size.0 * self.scale,
                logical_size.1 * self.scale,
            ));
        let window = Arc::new(
            event_loop
                .create_window(attributes)
                .context("Failed to create window")?,
        );
        let size = window.inner_size();
        info!("Window created at {}x{}", size.width, size.height);

        let renderer = pollster::block_on(Renderer::new(window.clone(), logical_size))?;
        window.request_redraw();

        self.renderer = Some(renderer);
        self.window = Some(window);
        Ok(())
    }

    /// Run the ticks owed since the last frame, then draw once
    fn redraw(&mut self) -> anyhow::Result<()> {
        let ticks = self.clock.ticks_due(Instant::now());
        for _ in 0..ticks {
            let input = self.keyboard.input_state();
            self.sink.update(&input);
        }

        if let Some(renderer) = self.renderer.as_mut() {
            renderer.render(&self.sink)?;
        }
        Ok(())
    }
}

impl<S: FrameSink> ApplicationHandler for App<S> {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        if let Err(e) = self.init(event_loop) {
            self.fail(event_loop, e);
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                info!("Window closed");
                event_loop.exit();
            }
            WindowEvent::Resized(physical_size) => {
                if let Some(renderer) = self.renderer.as_mut() {
                    renderer.resize(physical_size.width, physical_size.height);
                }
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(keycode) = event.physical_key {
                    self.keyboard
                        .handle_key(keycode, event.state == ElementState::Pressed);
                }
            }
            WindowEvent::Focused(focused) => {
                self.keyboard.handle_focus(focused);
            }
            WindowEvent::RedrawRequested => {
                if let Err(e) = self.redraw() {
                    self.fail(event_loop, e);
                    return;
                }
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }
            _ => (),
        }
    }
}
