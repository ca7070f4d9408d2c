// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{AgeRange, Contact, Criteria, FilterReport, InfluencerRecord, InfluencerResult, MAX_PLATFORM_AGE, MIN_PLATFORM_AGE};
pub use requests::SearchRequest;
pub use responses::{ErrorResponse, FollowerStats, HealthResponse, SearchResponse, StatsResponse};
