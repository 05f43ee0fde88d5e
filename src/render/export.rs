use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

use crate::error::PlotResult;
use crate::render::Renderer;

/// Encodes the renderer's current image and returns it as standard base64,
/// ready for embedding in a data URI.
pub fn base64_image(renderer: &mut dyn Renderer) -> PlotResult<String> {
    let bytes = renderer.encode_image()?;
    tracing::debug!(
        backend = renderer.backend_name(),
        bytes = bytes.len(),
        "encoded image as base64"
    );
    Ok(STANDARD.encode(bytes))
}
