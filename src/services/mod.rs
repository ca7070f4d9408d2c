// Service exports
pub mod ai;
pub mod cache;
pub mod catalog;
pub mod gemini;

pub use ai::{build_extractor, DisabledExtractor};
pub use cache::{CacheKey, CachedExtractor};
pub use catalog::{load_catalog, read_catalog, CatalogError};
pub use gemini::{AiError, GeminiClient};
