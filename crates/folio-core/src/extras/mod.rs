//! Extension points that ship without an active caller.
//!
//! The browser crate wires these only when enabled in
//! [`Extensions`](crate::config::Extensions).

pub mod lazy_images;
pub mod lightbox;
pub mod video;

pub use lazy_images::LazyImages;
pub use lightbox::Lightbox;
pub use video::VideoPlayers;
