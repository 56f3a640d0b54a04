//! Backing-store sizing for display surfaces.
//!
//! A canvas has two sizes: the size it is displayed at (CSS layout
//! pixels) and the resolution its backing store actually renders at.
//! [`resize_to_display`] keeps the second in sync with the first,
//! optionally scaled (pass the device pixel ratio to render at native
//! resolution on high-DPI screens).

/// A surface with a displayed size and a mutable backing-store size.
///
/// The surface is owned by the caller; this crate only reads its
/// rendered dimensions and writes its backing-store dimensions.
/// `webgl-kit-wasm` implements this for `HtmlCanvasElement`; tests use
/// an in-memory mock.
pub trait DisplaySurface {
    /// Rendered (CSS layout) width, as the host reports it.
    fn client_width(&self) -> i32;

    /// Rendered (CSS layout) height, as the host reports it.
    fn client_height(&self) -> i32;

    /// Current backing-store width in pixels.
    fn buffer_width(&self) -> u32;

    /// Current backing-store height in pixels.
    fn buffer_height(&self) -> u32;

    /// Sets both backing-store dimensions.
    fn set_buffer_size(&self, width: u32, height: u32);
}

/// Resizes a surface's backing store to match its displayed size.
///
/// Computes `floor(rendered * multiplier)` per axis and, when either
/// backing-store dimension differs, assigns both and returns `true`.
/// Returns `false` without touching the surface when the backing store
/// already matches, so calling this every frame is cheap and idempotent.
///
/// Negative rendered sizes (the DOM reports `client_width` as a signed
/// value) and non-finite or non-positive multipliers clamp to a target
/// of zero rather than wrapping.
pub fn resize_to_display<S: DisplaySurface + ?Sized>(surface: &S, multiplier: f64) -> bool {
    let width = scaled_dimension(surface.client_width(), multiplier);
    let height = scaled_dimension(surface.client_height(), multiplier);

    if surface.buffer_width() != width || surface.buffer_height() != height {
        surface.set_buffer_size(width, height);
        return true;
    }
    false
}

/// [`resize_to_display`] with a multiplier of 1.
pub fn resize_to_display_size<S: DisplaySurface + ?Sized>(surface: &S) -> bool {
    resize_to_display(surface, 1.0)
}

fn scaled_dimension(rendered: i32, multiplier: f64) -> u32 {
    if rendered <= 0 || !multiplier.is_finite() || multiplier <= 0.0 {
        return 0;
    }
    // `as u32` saturates, so huge multipliers cap at u32::MAX.
    (rendered as f64 * multiplier).floor() as u32
}
