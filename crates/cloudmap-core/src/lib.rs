//! Cloudmap Core Types and Definitions
//!
//! This crate provides the foundational types shared by the Cloudmap diagram
//! reader and the resolution engine. It includes:
//!
//! - **Geometry**: Points, ellipses and the pure helpers used during
//!   resolution ([`geometry`] module)
//! - **Colors**: Verbatim color values ([`color::Color`])
//! - **Primitives**: Raw shape, text and connector records read from a
//!   diagram ([`primitive`] module)
//! - **Model**: The normalized network model ([`model`] module)

pub mod color;
pub mod geometry;
pub mod model;
pub mod primitive;
