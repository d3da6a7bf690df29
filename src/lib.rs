pub mod error;
pub mod export;
pub mod formatter;
pub mod message;
pub mod node;
pub mod notification;
pub mod preferences;
pub mod webhook;

pub use error::ExportError;
pub use message::{ChatMessage, MessageContent, Sender};
pub use node::{ElementKind, FormattedNode};
