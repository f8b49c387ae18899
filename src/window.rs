use anyhow::Result;
use std::sync::Arc;
use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, EventLoop},
    window::{Window, WindowId},
};

use crate::app::App;
use crate::core::{Button, Controller, FpsCounter};
use crate::frame::{FrameIterator, FrameSource};
use crate::renderer::Renderer;

const INITIAL_WINDOW_WIDTH: u32 = 1280;
const INITIAL_WINDOW_HEIGHT: u32 = 720;
const FPS_REPORT_HZ: f32 = 1.0;

/// Winit frame driver around the composition root
pub struct WindowRunner {
    app: App,
    window: Option<Arc<Window>>,
    renderer: Option<Renderer>,
    frames: FrameIterator,
    fps: FpsCounter,
}

impl WindowRunner {
    pub fn new(app: App) -> Self {
        Self {
            app,
            window: None,
            renderer: None,
            frames: FrameIterator::new(),
            fps: FpsCounter::new(FPS_REPORT_HZ),
        }
    }

    fn redraw(&mut self) {
        let Some(frame) = self.frames.next() else {
            return;
        };
        if let Some(fps) = self.fps.tick(frame.delta) {
            log::info!("FPS: {:.1} (frame {})", fps, self.frames.frame_count());
        }

        self.app.step(frame.delta);

        if let Some(renderer) = &mut self.renderer {
            if let Err(e) = renderer.render(self.app.scene(), self.app.camera()) {
                log::error!("Render error: {:#}", e);
            }
        }
    }
}

impl ApplicationHandler for WindowRunner {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window = match event_loop.create_window(
            Window::default_attributes()
                .with_title("Chase Scene")
                .with_inner_size(winit::dpi::LogicalSize::new(
                    INITIAL_WINDOW_WIDTH,
                    INITIAL_WINDOW_HEIGHT,
                )),
        ) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                log::error!("Failed to create window: {}", e);
                event_loop.exit();
                return;
            }
        };

        let renderer = match pollster::block_on(Renderer::new(window.clone())) {
            Ok(r) => r,
            Err(e) => {
                log::error!("Failed to initialize renderer: {:#}", e);
                event_loop.exit();
                return;
            }
        };

        let (width, height) = renderer.dimensions();
        self.app.resize(width, height);
        self.window = Some(window);
        self.renderer = Some(renderer);
        self.frames = FrameIterator::new();
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::KeyboardInput { .. } => {
                self.app.controller_mut().process_event(&event);
                if self.app.controller().is_down(Button::Escape) {
                    event_loop.exit();
                }
            }
            WindowEvent::Focused(false) => self.app.controller_mut().clear(),
            WindowEvent::Resized(size) => {
                if let Some(renderer) = &mut self.renderer {
                    renderer.resize(size.width, size.height);
                }
                self.app.resize(size.width, size.height);
            }
            WindowEvent::RedrawRequested => self.redraw(),
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

/// Opens the window and drives `app` until the window closes
pub fn run(app: App) -> Result<()> {
    let event_loop = EventLoop::new()?;
    let mut runner = WindowRunner::new(app);
    event_loop.run_app(&mut runner)?;
    Ok(())
}
