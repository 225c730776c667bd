use crate::models::answers::{AnswerSet, Facet};
use crate::models::product::Product;

use super::scoring::{self, ScoredCandidate};

/// Cap on the candidate list returned to the client.
pub const RESULT_LIMIT: usize = 20;

/// Facets dropped when the strict pass comes back empty, in precedence
/// order. Budget is never dropped. Each level re-derives its answer set
/// from the original submission, so the drops do not accumulate.
const RELAXATION_ORDER: [Facet; 3] = [Facet::Size, Facet::Color, Facet::Occasion];

/// Ranked matches plus whether any constraint had to be loosened to
/// produce them.
#[derive(Debug)]
pub struct Matches<'a> {
    pub candidates: Vec<ScoredCandidate<'a>>,
    pub relaxed: bool,
}

/// Runs the scorer over the whole catalog, progressively dropping facets
/// until at least one item qualifies or the drop list is exhausted.
///
/// Scoring is a pure function of (catalog, answer set); every relaxation
/// level re-runs it from scratch. The `relaxed` flag lets the caller tell
/// the shopper their filters were loosened.
pub fn recommend<'a>(catalog: &'a [Product], answers: &AnswerSet) -> Matches<'a> {
    let mut candidates = scoring::rank_catalog(catalog, answers);
    let mut relaxed = false;

    if candidates.is_empty() {
        for facet in RELAXATION_ORDER {
            candidates = scoring::rank_catalog(catalog, &answers.without(facet));
            if !candidates.is_empty() {
                relaxed = true;
                break;
            }
        }
    }

    candidates.truncate(RESULT_LIMIT);
    Matches {
        candidates,
        relaxed,
    }
}
