//! Feed column catalogue
//!
//! Names of the columns the roster feed carries, the numeric metric fields
//! derived from them, and their display labels.

/// Player display name column
pub const NAME_COLUMN: &str = "name_full";

/// Team abbreviation column
pub const TEAM_COLUMN: &str = "team";

/// Position tag column (e.g. "PG,SG")
pub const POSITION_COLUMN: &str = "pos";

/// Games played column
pub const GAMES_COLUMN: &str = "GP";

/// Total minutes column
pub const MINUTES_COLUMN: &str = "MIN";

/// Comma separated list of seasons that fed the composite scores
pub const SEASONS_COLUMN: &str = "Seasons_Used";

/// Numeric metric carried by every record
///
/// Required fields coerce to `0` when unparseable, optional fields
/// (see [`MetricField::is_optional`]) keep an explicit missing marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MetricField {
    IronmanRank,
    GoodIronmanRank,
    IronmanScore,
    GoodIronmanScore,
    DurabilityZ,
    ProductionZ,
    EfficiencyZ,
    MinutesZ,
    ValueZ,
    WeightedGp,
    GpMedian,
    DurabilityComposite,
    DurabilityPenalty,
    PtsPg,
    RebPg,
    AstPg,
    StlPg,
    BlkPg,
    Fg3mPg,
    Fg3Pct,
    FtPct,
    TovPg,
    Dd2Pg,
    Adp,
}

impl MetricField {
    pub const COUNT: usize = 24;

    pub const ALL: [MetricField; Self::COUNT] = [
        Self::IronmanRank,
        Self::GoodIronmanRank,
        Self::IronmanScore,
        Self::GoodIronmanScore,
        Self::DurabilityZ,
        Self::ProductionZ,
        Self::EfficiencyZ,
        Self::MinutesZ,
        Self::ValueZ,
        Self::WeightedGp,
        Self::GpMedian,
        Self::DurabilityComposite,
        Self::DurabilityPenalty,
        Self::PtsPg,
        Self::RebPg,
        Self::AstPg,
        Self::StlPg,
        Self::BlkPg,
        Self::Fg3mPg,
        Self::Fg3Pct,
        Self::FtPct,
        Self::TovPg,
        Self::Dd2Pg,
        Self::Adp,
    ];

    /// Column name in the feed
    pub fn column(self) -> &'static str {
        match self {
            Self::IronmanRank => "IronMan_Rank",
            Self::GoodIronmanRank => "Good_IronMan_Rank",
            Self::IronmanScore => "IronMan_Score",
            Self::GoodIronmanScore => "Good_IronMan_Score",
            Self::DurabilityZ => "DurabilityZ",
            Self::ProductionZ => "ProductionZ",
            Self::EfficiencyZ => "EfficiencyZ",
            Self::MinutesZ => "MinutesZ",
            Self::ValueZ => "ValueZ",
            Self::WeightedGp => "Weighted_GP",
            Self::GpMedian => "GP_Median",
            Self::DurabilityComposite => "Durability_Composite",
            Self::DurabilityPenalty => "Durability_Penalty",
            Self::PtsPg => "PTS_PG",
            Self::RebPg => "REB_PG",
            Self::AstPg => "AST_PG",
            Self::StlPg => "STL_PG",
            Self::BlkPg => "BLK_PG",
            Self::Fg3mPg => "FG3M_PG",
            Self::Fg3Pct => "FG3_PCT",
            Self::FtPct => "FT_PCT",
            Self::TovPg => "TOV_PG",
            Self::Dd2Pg => "DD2_PG",
            Self::Adp => "ADP",
        }
    }

    /// Human readable label
    pub fn label(self) -> &'static str {
        match self {
            Self::IronmanRank => "Ironman Rank",
            Self::GoodIronmanRank => "Good Ironman Rank",
            Self::IronmanScore => "Ironman Score",
            Self::GoodIronmanScore => "Good Score",
            Self::DurabilityZ => "Durability Z",
            Self::ProductionZ => "Production Z",
            Self::EfficiencyZ => "Efficiency Z",
            Self::MinutesZ => "Minutes Z",
            Self::ValueZ => "Value Z",
            Self::WeightedGp => "Weighted GP",
            Self::GpMedian => "GP Median",
            Self::DurabilityComposite => "Durability Composite",
            Self::DurabilityPenalty => "Durability Penalty",
            Self::PtsPg => "PTS",
            Self::RebPg => "REB",
            Self::AstPg => "AST",
            Self::StlPg => "STL",
            Self::BlkPg => "BLK",
            Self::Fg3mPg => "3PM",
            Self::Fg3Pct => "3P%",
            Self::FtPct => "FT%",
            Self::TovPg => "TOV",
            Self::Dd2Pg => "DD2",
            Self::Adp => "ADP",
        }
    }

    /// Whether an absent or unparseable value stays missing instead of
    /// coercing to zero
    pub fn is_optional(self) -> bool {
        matches!(self, Self::Adp)
    }

    /// Look up a metric by its feed column name (case-insensitive)
    pub fn from_column(name: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|field| field.column().eq_ignore_ascii_case(name))
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_is_in_declaration_order() {
        for (i, field) in MetricField::ALL.iter().enumerate() {
            assert_eq!(field.index(), i);
        }
    }

    #[test]
    fn test_from_column() {
        assert_eq!(MetricField::from_column("ADP"), Some(MetricField::Adp));
        assert_eq!(
            MetricField::from_column("good_ironman_score"),
            Some(MetricField::GoodIronmanScore)
        );
        assert_eq!(MetricField::from_column("FG3_PCT"), Some(MetricField::Fg3Pct));
        assert_eq!(MetricField::from_column("name_full"), None);
    }

    #[test]
    fn test_only_adp_is_optional() {
        let optional: Vec<_> = MetricField::ALL
            .iter()
            .filter(|f| f.is_optional())
            .collect();
        assert_eq!(optional, vec![&MetricField::Adp]);
    }
}
