pub mod constants;
mod compose;
mod layout;
mod loader;
mod search;
mod types;

pub use compose::render_document;
pub use layout::{Placement, fit_to_page};
pub use loader::{apply_orientation, load_image, normalize_color, read_orientation};
pub use search::{compress_to_target, within_tolerance};
pub use types::*;
