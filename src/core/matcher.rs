use chrono::{DateTime, Utc};
use tracing::debug;

use crate::config::Settings;
use crate::core::scoring::calculate_match_score;
use crate::models::{ArtistProfile, Opportunity, ScoredOpportunity, ScoringPoints};

/// Opportunities scoring below this are dropped from match lists
pub const MIN_MATCH_SCORE: u8 = 30;

/// Result of a batch match run
#[derive(Debug)]
pub struct MatchResult {
    pub matches: Vec<ScoredOpportunity>,
    /// Matches above the score floor, before truncation to the limit
    pub total_matches: usize,
    pub total_candidates: usize,
}

/// Batch scorer and ranker for an artist's opportunity feed
///
/// # Pipeline stages
/// 1. Score every opportunity against the artist profile
/// 2. Threshold filter (score floor)
/// 3. Stable rank by score, best first
#[derive(Debug, Clone)]
pub struct Matcher {
    points: ScoringPoints,
    min_score: u8,
}

impl Matcher {
    pub fn new(points: ScoringPoints) -> Self {
        Self {
            points,
            min_score: MIN_MATCH_SCORE,
        }
    }

    pub fn with_default_points() -> Self {
        Self::new(ScoringPoints::default())
    }

    /// Build a matcher from loaded settings
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            points: ScoringPoints::from(settings.scoring.points),
            min_score: settings.matching.min_score.unwrap_or(MIN_MATCH_SCORE),
        }
    }

    /// Score, filter, and rank a full opportunity list for an artist
    ///
    /// Returns every opportunity at or above the score floor, best match
    /// first. The sort is stable: equal scores keep their input order.
    /// Truncation to a top-N is the caller's concern.
    pub fn matched_opportunities(
        &self,
        artist: &ArtistProfile,
        opportunities: Vec<Opportunity>,
        now: DateTime<Utc>,
    ) -> Vec<ScoredOpportunity> {
        let mut scored: Vec<ScoredOpportunity> = opportunities
            .into_iter()
            .filter_map(|opportunity| {
                let (match_score, match_reasons) =
                    calculate_match_score(artist, &opportunity, &self.points, now);

                if match_score >= self.min_score {
                    Some(ScoredOpportunity {
                        opportunity,
                        match_score,
                        match_reasons,
                    })
                } else {
                    None
                }
            })
            .collect();

        scored.sort_by(|a, b| b.match_score.cmp(&a.match_score));
        scored
    }

    /// Find matches for an artist's feed
    ///
    /// Skips opportunities whose deadline has already passed, ranks the
    /// rest, and truncates to `limit`. Totals are recorded before the
    /// truncation so the caller can report the full match count.
    pub fn find_matches(
        &self,
        artist: &ArtistProfile,
        opportunities: Vec<Opportunity>,
        limit: usize,
        now: DateTime<Utc>,
    ) -> MatchResult {
        let total_candidates = opportunities.len();

        let open: Vec<Opportunity> = opportunities
            .into_iter()
            .filter(|opportunity| opportunity.deadline >= now)
            .collect();

        let mut matches = self.matched_opportunities(artist, open, now);
        let total_matches = matches.len();
        matches.truncate(limit);

        debug!(
            "Matched {} of {} opportunities for artist {}, returning {}",
            total_matches,
            total_candidates,
            artist.id,
            matches.len()
        );

        MatchResult {
            matches,
            total_matches,
            total_candidates,
        }
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_default_points()
    }
}
