#![forbid(unsafe_code)]
#![deny(missing_docs)]
//! Software pixel formats, compositing operators and alpha masks.
//!
//! `pixmix` is the layer a scanline rasterizer paints through. It borrows row
//! slices from a caller-owned buffer, binds them to a channel layout and a
//! blend policy, and exposes clipped pixel, line and span operators that take
//! 8-bit anti-aliasing coverage.
//!
//! ```
//! use pixmix::buffer::PixelBuffer;
//! use pixmix::color::Rgba8;
//! use pixmix::pixfmt::{PixelFormat, PixfmtRgba32};
//!
//! let mut buf = PixelBuffer::<u8>::new(8, 8, 4)?;
//! let mut pf = PixfmtRgba32::new(&mut buf)?;
//! pf.fill(&Rgba8::opaque(0, 0, 255));
//! pf.blend_hline(-2, 3, 6, &Rgba8::new(255, 0, 0, 128), 255);
//! assert_eq!(pf.pixel(0, 3).to_array(), [128, 0, 127, 255]);
//! # Ok::<(), pixmix::PixmixError>(())
//! ```

mod foundation;

pub mod buffer;
pub mod color;
pub mod composite;
pub mod mask;
pub mod pixfmt;

pub use composite::CompOp;
pub use foundation::core::{COVER_FULL, COVER_NONE, COVER_SHIFT, COVER_SIZE, Cover};
pub use foundation::error::{PixmixError, PixmixResult};
