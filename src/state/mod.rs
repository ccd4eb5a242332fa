//! State management module
//!
//! This module handles all application state, including:
//! - The image catalog and its loader (data.rs, catalog.rs)
//! - Tag collection and filtered views (filter.rs)
//! - Lightbox and lookbook navigation (lightbox.rs, lookbook.rs, gesture.rs)
//! - The controller that owns all of it (presentation.rs)

pub mod catalog;
pub mod data;
pub mod filter;
pub mod gesture;
pub mod lightbox;
pub mod lookbook;
pub mod presentation;
