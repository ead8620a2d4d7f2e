// This file is part of simple-rainbow-fill and is licenced under the GNU GPL v3.0.
// See LICENSE file for full text.
// Copyright © 2026 the simple-rainbow-fill contributors

//! Windowed backend: a borderless fullscreen winit window painted through softbuffer.
//!
//! This is the path for hosts without a raw framebuffer (or without permission to touch
//! it). The window is dismissed by closing it or pressing Escape or Enter.

use std::num::NonZeroU32;
use std::rc::Rc;

use anyhow::{Context as _, Result};
use debug_print::debug_println;
use winit::application::ApplicationHandler;
use winit::event::{ElementState, KeyEvent, StartCause, WindowEvent};
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::keyboard::{Key, NamedKey};
use winit::window::{Fullscreen, Window, WindowId};

use simple_rainbow_fill::private::render::{self, BufferLayout};

use super::Backend;

type Surface = softbuffer::Surface<Rc<Window>, Rc<Window>>;

pub struct WindowBackend;

impl WindowBackend {
    pub fn new() -> WindowBackend {
        WindowBackend
    }
}

impl Backend for WindowBackend {
    fn name(&self) -> &'static str {
        "window"
    }

    fn run(&mut self) -> Result<()> {
        let event_loop = EventLoop::new().context("failed to create the event loop")?;
        let mut app = App { context: None, error: None };
        event_loop.run_app(&mut app).context("event loop failed")?;
        match app.error {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

struct App {
    context: Option<Context>,
    /// first draw failure; the event loop is told to exit as soon as this is set
    error: Option<anyhow::Error>,
}

/// Window context
struct Context {
    window: Rc<Window>,
    surface: Surface,
}

impl Context {
    fn new(active_event_loop: &ActiveEventLoop) -> Self {
        // the context and surface hang off the window handle; all three live and die
        // together in this struct
        let window = Rc::new(init_window(active_event_loop));
        let context = softbuffer::Context::new(window.clone()).unwrap();
        let surface: Surface = Surface::new(&context, window.clone()).unwrap();
        Context { window, surface }
    }
}

impl ApplicationHandler for App {
    fn new_events(&mut self, event_loop: &ActiveEventLoop, cause: StartCause) {
        if matches!(cause, StartCause::Init) {
            self.context = Some(Context::new(event_loop));
        }
    }

    fn resumed(&mut self, _event_loop: &ActiveEventLoop) {
        // only used on iOS/Android/Web
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        let context = self.context.as_mut().unwrap();

        match event {
            WindowEvent::RedrawRequested => {
                if let Err(e) = draw_window(context) {
                    self.error = Some(e);
                    event_loop.exit();
                }
            }
            WindowEvent::Resized(size) => {
                debug_println!("window size changed to {:?}", size);
                context.window.request_redraw();
            }
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::KeyboardInput {
                event: KeyEvent {
                    state: ElementState::Pressed,
                    logical_key,
                    ..
                },
                ..
            } => {
                if matches!(logical_key, Key::Named(NamedKey::Escape) | Key::Named(NamedKey::Enter)) {
                    event_loop.exit();
                }
            }
            _ => {}
        }
    }
}

/// Paint the gradient into the window's surface buffer and present it. The fill is
/// skipped when the surface still holds the previous frame.
fn draw_window(context: &mut Context) -> Result<()> {
    let size = context.window.inner_size();
    let (Some(width), Some(height)) = (NonZeroU32::new(size.width), NonZeroU32::new(size.height)) else {
        // zero-sized while minimized; nothing to paint
        return Ok(());
    };

    context.surface.resize(width, height).unwrap();

    let mut buffer = context.surface.buffer_mut().unwrap();

    if buffer.age() == 0 {
        // softbuffer hands out one little-endian 0RGB u32 per pixel: byte-wise that's
        // [blue, green, red, x], tightly packed
        let layout = BufferLayout::new(size.width, size.height, size.width * 4, 4)?;

        // Transmuting color data between u32 and [u8; 4] packing. The u8 view can't be
        // misaligned, so the unaligned prefix and suffix are always empty.
        let bytes: &mut [u8] = unsafe {
            if let ([], aligned, []) = buffer.align_to_mut() {
                aligned
            } else {
                panic!("couldn't align u32 buffer to u8")
            }
        };

        render::fill_gradient(bytes, &layout)?;
    }

    buffer.present().unwrap();
    Ok(())
}

/// A borderless fullscreen window on the current monitor.
fn init_window(active_event_loop: &ActiveEventLoop) -> Window {
    let window_attributes = Window::default_attributes()
        .with_title("Simple Rainbow Fill")
        .with_fullscreen(Some(Fullscreen::Borderless(None)))
        .with_resizable(false);

    let window = active_event_loop.create_window(window_attributes).unwrap();
    window.request_redraw();
    window
}
