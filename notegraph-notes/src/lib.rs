//! Markdown note model for the notegraph pipeline
//!
//! Handles the document side of the vault: YAML front matter as an
//! order-preserving mapping, stripping and regenerating the derived
//! `## Related Links` and `## Semantic Connections` sections, and the
//! final pass that syncs `related` wikilinks back into source notes.

mod document;
mod error;
mod frontmatter;
mod sync;

pub use document::{clean_body, generate_body_content, update_frontmatter};
pub use error::{NoteError, Result};
pub use frontmatter::{read_note, render_note, split_note, write_note, Frontmatter};
pub use sync::{collect_md_files, sync_sources};
