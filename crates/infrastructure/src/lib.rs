//! Genes Infrastructure Layer
pub mod cache;
pub mod catalog;
pub mod tracks;
