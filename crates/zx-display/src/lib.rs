//! ZX Spectrum display subsystem.
//!
//! Emulates the Spectrum's text/graphics display: a 256×192 monochrome
//! bitmap plane overlaid with a 32×24 grid of colour attribute bytes,
//! composited to an upscaled RGBA raster image.
//!
//! The [`Display`] context owns all mutable state (the two memory planes
//! plus the current ink/paper colours). Drawing operations mutate the
//! planes; the compositor reads them back out as [`Frame`]s which a
//! [`Surface`] implementation presents. Border rendering and the FLASH
//! attribute bit are not supported.

pub mod attribute;
pub mod capture;
mod charset;
mod display;
mod memory;
pub mod palette;
mod render;
mod surface;

pub use charset::{GLYPH_COUNT, glyph};
pub use display::{CHAR_SIZE, COLUMNS, Display, LINES, SCALE, XMAX, YMAX};
pub use memory::DisplayMemory;
pub use render::Frame;
pub use surface::{BufferSurface, Surface};
