//! Frame output boundary
//!
//! The engine renders into Camera buffers and stops there; these traits
//! are the seams through which a host pushes finished frames to a
//! display or an encoder. Implementations live with the host (see the
//! demo crate's PPM encoder), never in the engine.

use crate::error::Result;

/// A destination that can show an RGB frame, such as a framebuffer or
/// a windowing surface.
pub trait DisplaySink {
    /// Copy a `width * height` RGB frame so its top-left corner lands at
    /// `(dest_x, dest_y)` on the sink. The sink clips as it sees fit.
    fn blit(
        &mut self,
        pixels: &[u8],
        dest_x: u32,
        dest_y: u32,
        width: u32,
        height: u32,
    ) -> Result<()>;
}

/// A destination that persists frames, such as an image or video encoder.
pub trait ImageEncoder {
    /// Consume one frame of `width * height` pixels with `channels`
    /// bytes per pixel.
    fn encode_frame(&mut self, pixels: &[u8], width: u32, height: u32, channels: u8) -> Result<()>;
}
