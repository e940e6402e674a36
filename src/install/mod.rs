//! Installing a resolved release
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  Installer  │────▶│  ToolCache  │     │ SearchPath  │
//! │ (orchestr.) │     │ (find/store)│     │  (publish)  │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!        │                   ▲                   ▲
//!        ▼                   │                   │
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │ Downloader  │────▶│   Archive   │     │  Toolchain  │
//! │   (fetch)   │     │  (extract)  │     │   (probe)   │
//! └─────────────┘     └─────────────┘     └─────────────┘
//! ```

pub mod archive;
pub mod cache;
pub mod download;
pub mod error;
pub mod installer;
pub mod search_path;
pub mod toolchain;
