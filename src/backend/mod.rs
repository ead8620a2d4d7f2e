// This file is part of simple-rainbow-fill and is licenced under the GNU GPL v3.0.
// See LICENSE file for full text.
// Copyright © 2026 the simple-rainbow-fill contributors

//! Display-buffer acquisition strategies.
//!
//! Each backend knows how to acquire a writable pixel buffer from one host display
//! system, report its geometry, present the filled buffer, and release it on drop. The
//! choice is made at startup from settings; the only compile-time gate is that the
//! framebuffer module exists on Linux alone.

use anyhow::Result;

use simple_rainbow_fill::private::settings::{BackendKind, Settings};

#[cfg(target_os = "linux")]
mod framebuffer;
mod window;

pub trait Backend {
    /// short name for logging
    fn name(&self) -> &'static str;

    /// Acquire the display, paint the gradient, present it, and block until the user
    /// dismisses it.
    fn run(&mut self) -> Result<()>;
}

pub fn select(settings: &Settings) -> Result<Box<dyn Backend>> {
    match settings.persisted.backend {
        BackendKind::Window => Ok(Box::new(window::WindowBackend::new())),
        BackendKind::Framebuffer => open_framebuffer(settings),
        BackendKind::Auto => Ok(auto_select(settings)),
    }
}

#[cfg(target_os = "linux")]
fn open_framebuffer(settings: &Settings) -> Result<Box<dyn Backend>> {
    let backend = framebuffer::FramebufferBackend::open(&settings.persisted.framebuffer_device)?;
    Ok(Box::new(backend))
}

#[cfg(not(target_os = "linux"))]
fn open_framebuffer(_settings: &Settings) -> Result<Box<dyn Backend>> {
    anyhow::bail!("the framebuffer backend is only available on Linux")
}

#[cfg(target_os = "linux")]
fn auto_select(settings: &Settings) -> Box<dyn Backend> {
    match framebuffer::FramebufferBackend::open(&settings.persisted.framebuffer_device) {
        Ok(backend) => Box::new(backend),
        Err(e) => {
            log::warn!("framebuffer unavailable, falling back to a window: {e:#}");
            Box::new(window::WindowBackend::new())
        }
    }
}

#[cfg(not(target_os = "linux"))]
fn auto_select(_settings: &Settings) -> Box<dyn Backend> {
    Box::new(window::WindowBackend::new())
}
