//! # wiener-deblur
//!
//! Removes out-of-focus blur from grayscale images with a frequency-domain
//! Wiener filter.
//!
//! The blur is modelled as a disk point-spread function of a caller-supplied
//! radius. Its transform `H` gives the transfer function
//! `H / (|H|² + 1/SNR)`, which is multiplied into the image spectrum before
//! transforming back. The signal-to-noise ratio trades sharpness against
//! noise amplification.
//!
//! ## Example
//!
//! ```no_run
//! use wiener_deblur::{image, restore, WienerParams};
//!
//! # fn main() -> wiener_deblur::Result<()> {
//! let blurred = image::load_grayscale("blurred.jpg")?;
//! let restored = restore(&blurred, WienerParams::new(64, 1200.0))?;
//! image::save_grayscale(&restored, "filtered.jpg", 1.0, 95)?;
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod image;
pub mod pipeline;
pub mod spectral;

pub use error::{Error, Result};
pub use pipeline::{restore, Config, Pipeline, WienerParams};
