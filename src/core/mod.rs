// Core algorithm exports
pub mod filters;
pub mod sampling;
pub mod selector;

pub use filters::{attribute_matches, is_similar, candidate_set};
pub use sampling::{sample, sample_indices};
pub use selector::{Recommender, RecommendError};
