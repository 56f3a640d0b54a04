#![deny(unsafe_code)]
//! Browser bindings for webgl-kit.
//!
//! Binds the platform-independent helpers in `webgl-kit-core` to the
//! DOM: implements the display-surface contract for
//! [`HtmlCanvasElement`] and acquires a [`glow::Context`] from a canvas
//! so the core shader helpers can be used against it.

use thiserror::Error;
use web_sys::HtmlCanvasElement;
use webgl_kit_core::surface::{resize_to_display, DisplaySurface};

/// Errors acquiring a rendering context from a canvas.
#[derive(Debug, Error)]
pub enum SurfaceError {
    /// The `getContext("webgl2")` call itself failed.
    #[error("failed to query webgl2 context: {0}")]
    ContextQuery(String),
    /// The browser returned no WebGL2 context for this canvas.
    #[error("webgl2 is not supported by this canvas")]
    Webgl2Unsupported,
}

/// [`DisplaySurface`] view of an [`HtmlCanvasElement`].
///
/// The DOM's `clientWidth`/`clientHeight` are the rendered size; the
/// element's `width`/`height` attributes are the backing store.
pub struct CanvasSurface<'a>(pub &'a HtmlCanvasElement);

impl DisplaySurface for CanvasSurface<'_> {
    fn client_width(&self) -> i32 {
        self.0.client_width()
    }

    fn client_height(&self) -> i32 {
        self.0.client_height()
    }

    fn buffer_width(&self) -> u32 {
        self.0.width()
    }

    fn buffer_height(&self) -> u32 {
        self.0.height()
    }

    fn set_buffer_size(&self, width: u32, height: u32) {
        self.0.set_width(width);
        self.0.set_height(height);
    }
}

/// Resizes a canvas's backing store to match its displayed size.
///
/// Pass `window().device_pixel_ratio()` as the multiplier to render at
/// native resolution, or use [`resize_canvas_for_device_pixel_ratio`].
/// Returns `true` if the canvas was resized.
pub fn resize_canvas_to_display_size(canvas: &HtmlCanvasElement, multiplier: f64) -> bool {
    resize_to_display(&CanvasSurface(canvas), multiplier)
}

/// Resizes a canvas to its displayed size scaled by the device pixel
/// ratio, falling back to 1 when no window is available (workers).
pub fn resize_canvas_for_device_pixel_ratio(canvas: &HtmlCanvasElement) -> bool {
    let ratio = web_sys::window()
        .map(|window| window.device_pixel_ratio())
        .unwrap_or(1.0);
    resize_canvas_to_display_size(canvas, ratio)
}

/// Acquires a WebGL2 context from a canvas, wrapped for `glow`.
///
/// The returned [`glow::Context`] is what the core shader helpers
/// (`compile_shader`, `link_program`, `compile_program`) operate on.
///
/// # Errors
///
/// Returns [`SurfaceError::Webgl2Unsupported`] if the browser offers no
/// WebGL2 context for this canvas, or [`SurfaceError::ContextQuery`] if
/// the context query throws.
#[cfg(target_arch = "wasm32")]
pub fn webgl2_context(canvas: &HtmlCanvasElement) -> Result<glow::Context, SurfaceError> {
    use wasm_bindgen::JsCast;

    let context = canvas
        .get_context("webgl2")
        .map_err(|err| SurfaceError::ContextQuery(format!("{err:?}")))?
        .ok_or(SurfaceError::Webgl2Unsupported)?
        .dyn_into::<web_sys::WebGl2RenderingContext>()
        .map_err(|_| SurfaceError::Webgl2Unsupported)?;

    Ok(glow::Context::from_webgl2_context(context))
}

#[cfg(test)]
mod tests {
    use super::*;

    // DOM types require a browser, so integration tests are ignored.

    #[test]
    fn surface_error_implements_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<SurfaceError>();
    }

    #[test]
    fn canvas_surface_exposes_expected_api() {
        // Compile-time check that the public API exists.
        fn _assert_api(canvas: &HtmlCanvasElement) {
            let surface = CanvasSurface(canvas);
            let _w: i32 = surface.client_width();
            let _resized: bool = resize_canvas_to_display_size(canvas, 2.0);
            let _resized: bool = resize_canvas_for_device_pixel_ratio(canvas);
        }
    }

    #[test]
    #[ignore = "requires browser"]
    fn resize_tracks_client_size() {
        // Would test: a styled canvas gets its width/height attributes
        // set to clientWidth/clientHeight after a resize call.
    }

    #[test]
    #[ignore = "requires browser"]
    fn webgl2_context_yields_working_glow_context() {
        // Would test: webgl2_context(canvas) returns Ok and
        // compile_program succeeds against it.
    }
}
