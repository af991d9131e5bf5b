//! Code generation building blocks.
//!
//! - [`CodeBuilder`] - indented text output
//! - [`CodeFragment`] - intermediate representation for code pieces
//! - [`Renderable`] - types that convert to code fragments
//! - [`Indent`] - indentation configuration

mod code_builder;
mod indent;
mod renderable;

pub use code_builder::CodeBuilder;
pub use indent::Indent;
pub use renderable::{CodeFragment, Renderable};
