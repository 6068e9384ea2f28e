// ATS compliance engine.
// Pipeline: rule catalog → keyword matcher → scoring → score analyzer.
// Pure and synchronous; handlers are the only async code in this tree.

pub mod analyzer;
pub mod catalog;
pub mod document;
pub mod guide;
pub mod handlers;
pub mod keywords;
pub mod rules;
pub mod scoring;
pub mod settings;
pub mod validator;

pub use validator::AtsValidator;
