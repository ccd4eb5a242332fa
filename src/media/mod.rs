//! Image loading module
//!
//! This module handles decoding catalog images into grid thumbnails.
//! Full-size images for the lightbox and lookbook are handed to iced
//! by path and decoded by the renderer.

pub mod cache;
pub mod thumbnail;
