//! Concrete emitter implementations

pub mod css;
pub mod nested;

pub use css::CssVariablesEmitter;
pub use nested::NestedObjectEmitter;
