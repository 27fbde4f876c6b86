//! Wiener deconvolution of disk (defocus) blur.

mod psf;
mod restore;
mod wiener;

pub use psf::build_disk_psf;
pub use restore::{restore, Config, Pipeline, WienerParams};
pub use wiener::{apply, build_wiener_filter, TransferFunction};
