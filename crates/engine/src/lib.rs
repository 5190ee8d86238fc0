//! # Palette Engine
//!
//! In-memory state behind Palette Studio. A [`PaletteSession`] owns the preset
//! library, the live custom draft, and the snapshots saved from it, and derives
//! the export document for whichever theme and variant are active.
//!
//! ## Usage
//!
//! ```rust
//! use palette_engine::PaletteSession;
//! use palette_types::{ColorField, Role, VariantMode};
//!
//! let mut session = PaletteSession::new();
//! session.update_draft_color(VariantMode::Dark, Role::Primary, ColorField::Hex, "ff0000");
//! let document = session.derive_export_document();
//! assert_eq!(document.variants.dark[&Role::Primary].hex, "#FF0000");
//! ```
//!
//! Every operation is synchronous and infallible; the only side effect leaves
//! through [`PaletteSession::export_active_theme`], which hands the document to
//! a [`palette_types::PaletteExporter`].

pub mod draft_id;
pub mod search;
pub mod session;

pub use draft_id::{DRAFT_ID_PREFIX, DraftIdAllocator};
pub use search::{ThemeOrigin, ThemeSummary, matches_query};
pub use session::PaletteSession;
