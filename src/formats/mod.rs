//! Output formats for parsed documents
//!
//! ## Modules
//!
//! - `outline` - the indented, auto-numbered outline view (headings only)
//! - `treeviz` - one-line-per-node debug view of the full tree
//! - `serialize` - serde projections (JSON / YAML)

pub mod outline;
pub mod serialize;
pub mod treeviz;

pub use outline::{to_outline_str, write_outline};
pub use serialize::{to_json_str, to_yaml_str, NodeView};
pub use treeviz::to_treeviz_str;
