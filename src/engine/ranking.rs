//! Display rank and score under the active ranking basis

use std::cmp::Ordering;
use std::sync::Arc;

use super::columns::MetricField;
use super::record::Record;
use super::snapshot::RankedRecord;

/// Composite scoring formula used to rank records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Basis {
    #[default]
    GoodIronman,
    Ironman,
}

impl Basis {
    pub fn all() -> [Self; 2] {
        [Self::GoodIronman, Self::Ironman]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::GoodIronman => "Good Ironman",
            Self::Ironman => "Ironman",
        }
    }

    /// Metric holding the composite score for this basis
    pub fn score_field(&self) -> MetricField {
        match self {
            Self::GoodIronman => MetricField::GoodIronmanScore,
            Self::Ironman => MetricField::IronmanScore,
        }
    }

    /// Next basis in the cycle (Good Ironman → Ironman → Good Ironman)
    pub fn next(&self) -> Self {
        match self {
            Self::GoodIronman => Self::Ironman,
            Self::Ironman => Self::GoodIronman,
        }
    }
}

/// Assign dense ranks `1..=K` over the filtered set
///
/// Records are ordered by the basis score, highest first, with missing
/// scores lowest. Equal scores keep their feed order. The output keeps the
/// input order; only `rank` and `score` are attached.
pub fn rank(filtered: &[Arc<Record>], basis: Basis) -> Vec<RankedRecord> {
    let field = basis.score_field();
    let key = |record: &Record| record.metric(field).unwrap_or(f64::NEG_INFINITY);

    let mut order: Vec<usize> = (0..filtered.len()).collect();
    order.sort_by(|&a, &b| {
        key(&filtered[b])
            .partial_cmp(&key(&filtered[a]))
            .unwrap_or(Ordering::Equal)
    });

    let mut ranks = vec![0; filtered.len()];
    for (position, &index) in order.iter().enumerate() {
        ranks[index] = position + 1;
    }

    filtered
        .iter()
        .zip(ranks)
        .map(|(record, rank)| RankedRecord {
            score: record.metric(field).unwrap_or(0.0),
            record: Arc::clone(record),
            rank,
            expanded: false,
        })
        .collect()
}
