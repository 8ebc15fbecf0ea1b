//! Terminal front end.

pub mod canvas;

pub use canvas::{PixelGrid, TerminalCanvas};
