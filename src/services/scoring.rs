use crate::models::answers::AnswerSet;
use crate::models::product::Product;

use super::colors;

/// Outcome of scoring one product against one answer set.
///
/// A product that fails any constrained facet is out of consideration
/// entirely; it is never assigned a low score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Verdict {
    Disqualified,
    Qualified(MatchScore),
}

/// Score for a qualifying product. Every constrained facet matched, so the
/// magnitude grows with how many of the shopper's stated preferences the
/// pass could take into account.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchScore {
    /// Facets that matched.
    pub matched: u32,
    /// Facets that carried a constraint and were considered.
    pub dimensions: u32,
}

impl MatchScore {
    /// Ranking value. The small per-dimension weight only matters when the
    /// number of constrained dimensions differs between passes, e.g. across
    /// relaxation levels.
    pub fn value(&self) -> f64 {
        f64::from(self.matched) + f64::from(self.dimensions) * 0.001
    }
}

/// A qualifying product with its score.
#[derive(Debug, Clone)]
pub struct ScoredCandidate<'a> {
    pub product: &'a Product,
    pub score: MatchScore,
}

/// Scores one product against one (possibly relaxed) answer set.
///
/// Each non-empty facet is checked independently; the first miss
/// disqualifies the product and no further facets are considered. The
/// color facet is skipped outright when the shopper selected "Any".
pub fn score_product(product: &Product, answers: &AnswerSet) -> Verdict {
    let mut matched = 0u32;
    let mut dimensions = 0u32;

    if !answers.occasions.is_empty() {
        dimensions += 1;
        let terms = product.occasion_terms();
        let hit = answers
            .occasions
            .iter()
            .any(|o| terms.iter().any(|t| *t == o.label().to_lowercase()));
        if !hit {
            return Verdict::Disqualified;
        }
        matched += 1;
    }

    if !answers.colors.is_empty() && !answers.wants_any_color() {
        dimensions += 1;
        let wanted = colors::expand_colors(&answers.colors);
        let terms = product.color_terms();
        let hit = wanted
            .iter()
            .any(|q| terms.iter().any(|t| t.contains(q.as_str())));
        if !hit {
            return Verdict::Disqualified;
        }
        matched += 1;
    }

    if !answers.budgets.is_empty() {
        dimensions += 1;
        if !answers.budgets.iter().any(|b| b.covers(product.price)) {
            return Verdict::Disqualified;
        }
        matched += 1;
    }

    if !answers.sizes.is_empty() {
        dimensions += 1;
        let available = product.size_codes();
        let hit = answers.sizes.iter().any(|s| available.contains(s.label()));
        if !hit {
            return Verdict::Disqualified;
        }
        matched += 1;
    }

    Verdict::Qualified(MatchScore {
        matched,
        dimensions,
    })
}

/// Scores the whole catalog and ranks the qualifying set: score descending,
/// ties broken by price ascending. Pure and deterministic for a given
/// catalog order.
pub fn rank_catalog<'a>(catalog: &'a [Product], answers: &AnswerSet) -> Vec<ScoredCandidate<'a>> {
    let mut ranked: Vec<ScoredCandidate<'a>> = catalog
        .iter()
        .filter_map(|product| match score_product(product, answers) {
            Verdict::Qualified(score) => Some(ScoredCandidate { product, score }),
            Verdict::Disqualified => None,
        })
        .collect();

    ranked.sort_by(|a, b| {
        b.score
            .value()
            .total_cmp(&a.score.value())
            .then_with(|| a.product.price.total_cmp(&b.product.price))
    });
    ranked
}
