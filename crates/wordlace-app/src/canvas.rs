//! Canvas backing-store sizing.

use web_sys::HtmlCanvasElement;

/// Resizes the canvas backing store to match its displayed size.
///
/// `multiplier` scales the CSS size into device pixels (pass the device
/// pixel ratio for crisp rendering; `None` means 1). Returns whether the
/// backing store changed; callers must re-issue the viewport when it did.
/// Repeated calls with an unchanged layout return `false` and touch nothing.
#[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn resize_canvas_to_display_size(canvas: &HtmlCanvasElement, multiplier: Option<f64>) -> bool {
    let multiplier = multiplier.unwrap_or(1.0);
    let width = (f64::from(canvas.client_width()) * multiplier) as u32;
    let height = (f64::from(canvas.client_height()) * multiplier) as u32;
    if canvas.width() != width || canvas.height() != height {
        canvas.set_width(width);
        canvas.set_height(height);
        return true;
    }
    false
}
