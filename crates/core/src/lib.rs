#![deny(unsafe_code)]
//! Helpers for bootstrapping WebGL2 / OpenGL rendering.
//!
//! Two independent concerns:
//!
//! - [`shader`] -- compiling shader stages, linking programs, and
//!   formatting driver error logs. Requires a live [`glow::Context`].
//! - [`surface`] -- keeping a display surface's backing-store resolution
//!   in sync with its displayed size. Pure logic over the
//!   [`DisplaySurface`] trait; the `webgl-kit-wasm` crate binds it to
//!   `HtmlCanvasElement`.

pub mod shader;
pub mod surface;

pub use shader::{
    compile_program, compile_shader, format_shader_error, link_program, ShaderError, ShaderKind,
};
pub use surface::{resize_to_display, resize_to_display_size, DisplaySurface};
