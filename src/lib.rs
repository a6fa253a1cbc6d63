pub mod config;
pub mod domain;
pub mod error;
pub mod git;
pub mod hugo;
pub mod pipeline;
pub mod selector;
pub mod ui;

pub use error::{DocsPublishError, Result};
