// Model exports
pub mod domain;

pub use domain::{ArtistProfile, Opportunity, ScoredOpportunity, ScoringPoints};
