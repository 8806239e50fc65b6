//! ESP Core - Platform-agnostic Logic and Types
//!
//! Diese Crate enthält KEINE Hardware-Dependencies.
//! Sie definiert nur Pure Functions und Datentypen für den Webserver.

#![no_std]

pub mod download;
pub mod link;
pub mod logic;
pub mod types;

// Re-exports für einfachen Zugriff
pub use download::{DeferredSlot, DownloadCounter};
pub use link::{LinkEvent, LinkTracker};
pub use logic::{content_type_for, file_name_of};
pub use types::{Asset, AssetStore, DownloadRequest, FileName, MAX_FILE_NAME_LEN, UseCase};
