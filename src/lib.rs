//! StudioMate Match - opportunity matching engine for the StudioMate artist platform
//!
//! This library provides the scoring algorithm StudioMate uses to pair
//! artists with funding and exhibition opportunities. It implements a
//! rule-based point system over free-text profile and opportunity fields,
//! plus batch filtering and ranking for an artist's match feed.

pub mod config;
pub mod core;
pub mod models;

// Re-export commonly used types
pub use crate::core::{
    match_color, match_description, score_opportunity_match, MatchResult, Matcher,
    MIN_MATCH_SCORE,
};
pub use crate::models::{ArtistProfile, Opportunity, ScoredOpportunity, ScoringPoints};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        // Verify that the library exports work correctly
        assert_eq!(match_description(85), "Excellent Match");
        assert_eq!(match_color(85), "green");
        assert!(MIN_MATCH_SCORE <= 100);
    }
}
