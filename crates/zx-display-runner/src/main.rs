//! Windowed frontend for the ZX Spectrum display subsystem.
//!
//! Opens a window at the scaled screen size, runs a small demo sequence,
//! and presents the composited display via `pixels`.
//!
//! Keys: Space = noise burst, C = dithered clear, T = charset,
//! F2 = save screenshot, Escape = quit.

use std::path::PathBuf;
use std::sync::Arc;

use pixels::{Pixels, SurfaceTexture};
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

use zx_display::palette;
use zx_display::{BufferSurface, Display, SCALE, XMAX, YMAX};

/// Configuration for the runner.
struct RunnerConfig {
    /// Window title.
    title: String,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            title: "ZX Spectrum Display".to_string(),
        }
    }
}

fn main() {
    let event_loop = EventLoop::new().expect("Failed to create event loop");
    event_loop.set_control_flow(ControlFlow::Wait);

    let mut runner = Runner::new(RunnerConfig::default());
    event_loop.run_app(&mut runner).expect("Event loop error");
}

/// Window, pixel buffer, and the display they present.
struct Runner {
    config: RunnerConfig,
    display: Display,
    surface: BufferSurface,
    window: Option<Arc<Window>>,
    pixels: Option<Pixels<'static>>,
    screenshot_count: u32,
}

impl Runner {
    fn new(config: RunnerConfig) -> Self {
        Self {
            config,
            display: Display::new(),
            surface: BufferSurface::new(),
            window: None,
            pixels: None,
            screenshot_count: 0,
        }
    }

    /// The startup demo: black ink dithered over bright yellow paper,
    /// the character ROM, and a banner.
    fn draw_demo(&mut self) {
        self.display.set_paper(palette::BRIGHT_YELLOW);
        self.display.set_ink(palette::BLACK);
        self.display.clear();
        self.display.draw_charset();
        self.display.draw_text(2, 6, "ZX SPECTRUM DISPLAY");
        self.display.present(&mut self.surface);
    }

    /// Fill a block in the middle of the screen with noise.
    fn noise_burst(&mut self) {
        self.display.randomize_region(8, 8, 8, 16);
        self.display.present_region(&mut self.surface, 8, 8, 8, 16);
    }

    fn save_screenshot(&mut self) {
        self.screenshot_count += 1;
        let path = PathBuf::from(format!("screenshot-{:03}.png", self.screenshot_count));
        match zx_display::capture::save_screenshot(&self.surface, &path) {
            Ok(()) => println!("Screenshot saved to {}", path.display()),
            Err(err) => eprintln!("Screenshot failed: {err}"),
        }
    }

    fn handle_key(&mut self, keycode: KeyCode, event_loop: &ActiveEventLoop) {
        match keycode {
            KeyCode::Space => self.noise_burst(),
            KeyCode::KeyC => {
                self.display.clear();
                self.display.present(&mut self.surface);
            }
            KeyCode::KeyT => {
                self.display.draw_charset();
                self.display.present(&mut self.surface);
            }
            KeyCode::F2 => self.save_screenshot(),
            KeyCode::Escape => event_loop.exit(),
            _ => {}
        }
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

impl ApplicationHandler for Runner {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        // Create the window on first resume only
        if self.window.is_some() {
            return;
        }

        let width = (XMAX * SCALE) as u32;
        let height = (YMAX * SCALE) as u32;

        let window = Arc::new(
            event_loop
                .create_window(
                    Window::default_attributes()
                        .with_title(&self.config.title)
                        .with_inner_size(LogicalSize::new(width, height)),
                )
                .expect("Failed to create window"),
        );

        let size = window.inner_size();
        let surface = SurfaceTexture::new(size.width, size.height, Arc::clone(&window));
        let pixels = Pixels::new(width, height, surface).expect("Failed to create pixels");

        self.window = Some(window);
        // SAFETY: pixels lifetime is tied to window which lives for the program duration
        self.pixels = Some(unsafe { std::mem::transmute(pixels) });

        self.draw_demo();
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                if size.width > 0 && size.height > 0 {
                    if let Some(pixels) = &mut self.pixels {
                        pixels.resize_surface(size.width, size.height).ok();
                    }
                }
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(keycode) = event.physical_key {
                    if event.state == ElementState::Pressed && !event.repeat {
                        self.handle_key(keycode, event_loop);
                    }
                }
            }

            WindowEvent::RedrawRequested => {
                if let Some(pixels) = &mut self.pixels {
                    pixels.frame_mut().copy_from_slice(self.surface.pixels());
                    if pixels.render().is_err() {
                        event_loop.exit();
                    }
                }
            }

            _ => {}
        }
    }
}
