#![doc = env!("CARGO_PKG_DESCRIPTION")]
//!
//! ```
//! use edgekit::image::{ColorProfile, PixelMatrix};
//! use edgekit::imgproc::filter::{detect_edges, EdgeDirection};
//!
//! let image = PixelMatrix::new(8, 8, ColorProfile::Rgba, None).unwrap();
//! let edges = detect_edges(&image, EdgeDirection::Horizontal).unwrap();
//!
//! assert_eq!(edges.size(), image.size());
//! ```

#[doc(inline)]
pub use edgekit_image as image;

#[doc(inline)]
pub use edgekit_imgproc as imgproc;

#[doc(inline)]
pub use edgekit_io as io;
