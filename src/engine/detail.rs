//! Grouped per-record metrics shown in the detail panel

use super::columns::MetricField;
use super::record::Record;
use crate::formatting::{format_number, format_seasons};

/// A labelled, formatted value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailMetric {
    pub label: &'static str,
    pub value: String,
}

/// A titled group of metrics
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailGroup {
    pub title: &'static str,
    pub metrics: Vec<DetailMetric>,
}

const RANKING: &[(MetricField, usize)] = &[
    (MetricField::IronmanRank, 0),
    (MetricField::GoodIronmanRank, 0),
    (MetricField::GoodIronmanScore, 2),
    (MetricField::IronmanScore, 2),
];

const COMPONENTS: &[(MetricField, usize)] = &[
    (MetricField::DurabilityZ, 2),
    (MetricField::ProductionZ, 2),
    (MetricField::EfficiencyZ, 2),
    (MetricField::MinutesZ, 2),
    (MetricField::ValueZ, 2),
];

const AVAILABILITY: &[(MetricField, usize)] = &[
    (MetricField::WeightedGp, 1),
    (MetricField::GpMedian, 1),
    (MetricField::DurabilityComposite, 2),
    (MetricField::DurabilityPenalty, 2),
];

const PER_GAME: &[(MetricField, usize)] = &[
    (MetricField::PtsPg, 1),
    (MetricField::RebPg, 1),
    (MetricField::AstPg, 1),
    (MetricField::StlPg, 2),
    (MetricField::BlkPg, 2),
    (MetricField::Fg3mPg, 2),
    (MetricField::Fg3Pct, 3),
    (MetricField::FtPct, 3),
    (MetricField::TovPg, 2),
    (MetricField::Dd2Pg, 2),
];

fn metrics(record: &Record, fields: &[(MetricField, usize)]) -> Vec<DetailMetric> {
    fields
        .iter()
        .map(|&(field, digits)| DetailMetric {
            label: field.label(),
            value: format_number(record.metric(field), digits),
        })
        .collect()
}

/// Build the four detail groups for a record
pub fn detail_groups(record: &Record) -> Vec<DetailGroup> {
    let mut availability = metrics(record, AVAILABILITY);
    availability.push(DetailMetric {
        label: "Seasons Used",
        value: format_seasons(&record.seasons),
    });

    vec![
        DetailGroup {
            title: "Ranking Snapshot",
            metrics: metrics(record, RANKING),
        },
        DetailGroup {
            title: "Score Components",
            metrics: metrics(record, COMPONENTS),
        },
        DetailGroup {
            title: "Availability",
            metrics: availability,
        },
        DetailGroup {
            title: "Per Game Production",
            metrics: metrics(record, PER_GAME),
        },
    ]
}
