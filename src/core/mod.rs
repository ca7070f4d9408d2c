// Core algorithm exports
pub mod canonical;
pub mod catalog;
pub mod engine;
pub mod extract;
pub mod filters;
pub mod merge;
pub mod pipeline;
pub mod projector;
pub mod ranking;

pub use catalog::Catalog;
pub use engine::{FilterEngine, SearchResult};
pub use extract::extract_criteria;
pub use filters::{build_filters, Filter};
pub use merge::merge_criteria;
pub use pipeline::{AiExtractor, SearchError, SearchOutcome, SearchPipeline};
pub use projector::project;
pub use ranking::{compare_by_rank, rank};
