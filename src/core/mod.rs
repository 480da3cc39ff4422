// Core algorithm exports
pub mod matcher;
pub mod scoring;
pub mod text;

pub use matcher::{Matcher, MatchResult, MIN_MATCH_SCORE};
pub use scoring::{
    calculate_match_score, match_color, match_description, score_opportunity_match, MAX_SCORE,
};
pub use text::{contains_ci, list_tokens};
