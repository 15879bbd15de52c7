//! Procedural PDF rendering for generated study material.

pub mod classify;
pub mod layout;
pub mod mcq;
pub mod render;
pub mod text;

pub use mcq::render_mcq_pdf;
pub use render::{render_summary_pdf, render_tutorial_pdf};
