//! UI Components for the converter page.
//!
//! # Layout Components
//! - [`Hero`] - Title and description
//! - [`Footer`] - Page footer
//!
//! # Feature Components
//! - [`ConverterPanel`] - CSV and JSON buffers with Open/Convert/Save/Clear

mod converter;
mod footer;
mod hero;

pub use converter::*;
pub use footer::*;
pub use hero::*;
