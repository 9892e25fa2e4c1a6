pub mod classifier;
pub mod collision;
pub mod cover_extractor;
pub mod naming;

pub use classifier::{CoverClassifier, LlmClassifier};
pub use collision::resolve_collision;
pub use cover_extractor::{CoverExtractor, PdfCoverExtractor};
pub use naming::{sanitize_component, synthesize_name};
