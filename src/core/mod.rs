//! Core value types: colors, cells, board geometry, configuration, rejections.
//!
//! Everything here is plain data. The board engine and history manager build
//! on these types but never extend them with behavior of their own.

pub mod color;
pub mod position;
pub mod config;
pub mod error;

pub use color::{Cell, Color, ColorMap};
pub use config::{GameConfig, KoRule};
pub use error::RuleViolation;
pub use position::{BoardSize, Pos};
