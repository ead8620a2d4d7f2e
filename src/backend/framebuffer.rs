// This file is part of simple-rainbow-fill and is licenced under the GNU GPL v3.0.
// See LICENSE file for full text.
// Copyright © 2026 the simple-rainbow-fill contributors

//! Linux framebuffer backend.
//!
//! Opens the framebuffer device, discovers its geometry through the `FBIOGET_*` ioctls,
//! maps its memory into the process, and paints straight into video memory. Writes are
//! live; there is no separate present step.

use std::fs::{File, OpenOptions};
use std::io;
use std::os::fd::{AsRawFd, RawFd};
use std::path::Path;
use std::{mem, ptr, slice};

use anyhow::{ensure, Context as _, Result};
use log::info;

use simple_rainbow_fill::private::render::{self, BufferLayout};

use super::Backend;

const FBIOGET_VSCREENINFO: libc::c_ulong = 0x4600;
const FBIOGET_FSCREENINFO: libc::c_ulong = 0x4602;

/// `struct fb_bitfield` from `linux/fb.h`
#[repr(C)]
#[derive(Clone, Copy)]
#[allow(dead_code)]
struct FbBitfield {
    offset: u32,
    length: u32,
    msb_right: u32,
}

/// `struct fb_var_screeninfo` from `linux/fb.h`
#[repr(C)]
#[derive(Clone, Copy)]
#[allow(dead_code)]
struct FbVarScreeninfo {
    xres: u32,
    yres: u32,
    xres_virtual: u32,
    yres_virtual: u32,
    xoffset: u32,
    yoffset: u32,
    bits_per_pixel: u32,
    grayscale: u32,
    red: FbBitfield,
    green: FbBitfield,
    blue: FbBitfield,
    transp: FbBitfield,
    nonstd: u32,
    activate: u32,
    height: u32,
    width: u32,
    accel_flags: u32,
    pixclock: u32,
    left_margin: u32,
    right_margin: u32,
    upper_margin: u32,
    lower_margin: u32,
    hsync_len: u32,
    vsync_len: u32,
    sync: u32,
    vmode: u32,
    rotate: u32,
    colorspace: u32,
    reserved: [u32; 4],
}

/// `struct fb_fix_screeninfo` from `linux/fb.h`
#[repr(C)]
#[derive(Clone, Copy)]
#[allow(dead_code)]
struct FbFixScreeninfo {
    id: [u8; 16],
    smem_start: libc::c_ulong,
    smem_len: u32,
    fb_type: u32, // `type` in the C header
    type_aux: u32,
    visual: u32,
    xpanstep: u16,
    ypanstep: u16,
    ywrapstep: u16,
    line_length: u32,
    mmio_start: libc::c_ulong,
    mmio_len: u32,
    accel: u32,
    capabilities: u16,
    reserved: [u16; 2],
}

/// Query one of the framebuffer info structs from the kernel.
///
/// SAFETY: `request` must be a read-style framebuffer ioctl whose out-parameter is
/// exactly a `T`.
unsafe fn fb_ioctl<T>(fd: RawFd, request: libc::c_ulong, name: &str) -> Result<T> {
    let mut info: T = mem::zeroed();
    if libc::ioctl(fd, request, &mut info) == -1 {
        return Err(io::Error::last_os_error()).with_context(|| format!("ioctl({name}) failed"));
    }
    Ok(info)
}

/// RAII view of the `mmap`ed framebuffer memory.
struct Mapping {
    data: *mut u8,
    len: usize,
}

impl Mapping {
    fn new(fd: RawFd, len: usize) -> Result<Mapping> {
        // SAFETY: shared mapping of `len` bytes of the device; the fd is valid and stays
        // open for at least as long as the mapping (both live in FramebufferBackend).
        let data = unsafe {
            libc::mmap(
                ptr::null_mut(),
                len,
                libc::PROT_READ | libc::PROT_WRITE,
                libc::MAP_SHARED,
                fd,
                0,
            )
        };
        if data == libc::MAP_FAILED {
            return Err(io::Error::last_os_error()).context("mmap of framebuffer memory failed");
        }
        Ok(Mapping { data: data.cast(), len })
    }

    fn as_mut_slice(&mut self) -> &mut [u8] {
        // SAFETY: the mapping stays valid for `len` bytes until the munmap in Drop, and
        // `&mut self` makes this the only view of it.
        unsafe { slice::from_raw_parts_mut(self.data, self.len) }
    }
}

impl Drop for Mapping {
    fn drop(&mut self) {
        // SAFETY: exactly the pointer and length mmap returned.
        unsafe {
            libc::munmap(self.data.cast(), self.len);
        }
    }
}

pub struct FramebufferBackend {
    map: Mapping,
    layout: BufferLayout,
    /// the mapping refers to this device; keep it open until the mapping is gone
    _file: File,
}

impl FramebufferBackend {
    /// Open `device`, query its geometry, and map its memory. Fails on devices the
    /// renderer can't paint (unsupported depth, undersized memory).
    pub fn open(device: &Path) -> Result<FramebufferBackend> {
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .open(device)
            .with_context(|| {
                format!(
                    "failed to open framebuffer device \"{}\" (does it exist, and can you write to it?)",
                    device.display()
                )
            })?;
        let fd = file.as_raw_fd();

        // SAFETY: both requests fill in the matching linux/fb.h struct.
        let var_info: FbVarScreeninfo = unsafe { fb_ioctl(fd, FBIOGET_VSCREENINFO, "FBIOGET_VSCREENINFO")? };
        let fix_info: FbFixScreeninfo = unsafe { fb_ioctl(fd, FBIOGET_FSCREENINFO, "FBIOGET_FSCREENINFO")? };

        let layout = BufferLayout::new(
            var_info.xres,
            var_info.yres,
            fix_info.line_length,
            var_info.bits_per_pixel / 8,
        )
        .with_context(|| format!("framebuffer \"{}\" reports a mode the renderer can't paint", device.display()))?;

        let smem_len = fix_info.smem_len as usize;
        ensure!(
            smem_len >= layout.required_bytes(),
            "framebuffer memory is {} bytes but the reported mode needs {}",
            smem_len,
            layout.required_bytes()
        );

        let map = Mapping::new(fd, smem_len)?;

        info!(
            "framebuffer \"{}\": {}x{} pixels, {} bits per pixel, {} byte scanlines, {} bytes mapped",
            device.display(),
            var_info.xres,
            var_info.yres,
            var_info.bits_per_pixel,
            fix_info.line_length,
            smem_len
        );

        Ok(FramebufferBackend { map, layout, _file: file })
    }
}

impl Backend for FramebufferBackend {
    fn name(&self) -> &'static str {
        "framebuffer"
    }

    fn run(&mut self) -> Result<()> {
        render::fill_gradient(self.map.as_mut_slice(), &self.layout)?;

        // the display shows the gradient the moment the bytes land; hold the mapping
        // until the user has seen it
        println!("Rainbow gradient written to the framebuffer.");
        println!("Press Enter to exit and release the display...");
        io::stdin()
            .read_line(&mut String::new())
            .context("failed reading from stdin")?;
        Ok(())
    }
}
