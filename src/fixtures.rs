/// Fixture data for tests and benchmarks
///
/// Everything here is deterministic so that rendering and ranking tests can
/// assert exact output.
use crate::engine::record::{RawRow, Record};

/// Header row of the fixture feed, in the column order the pipeline writes
pub const FEED_HEADER: &str = "name_full,team,pos,GP,MIN,IronMan_Rank,Good_IronMan_Rank,\
IronMan_Score,Good_IronMan_Score,DurabilityZ,ProductionZ,EfficiencyZ,MinutesZ,ValueZ,\
Weighted_GP,GP_Median,Durability_Composite,Durability_Penalty,PTS_PG,REB_PG,AST_PG,STL_PG,\
BLK_PG,FG3M_PG,FG3_PCT,FT_PCT,TOV_PG,DD2_PG,ADP,Seasons_Used";

const FEED_ROWS: &[&str] = &[
    "Nikola Jokic,DEN,C,79,2737,2,1,2.31,2.62,0.91,2.71,1.88,1.12,2.95,76.4,74,0.88,0.02,26.4,12.4,9.0,1.36,0.86,1.10,0.359,0.817,3.0,0.87,1.4,\"2022-23, 2023-24\"",
    "Shai Gilgeous-Alexander,OKC,PG,75,2553,1,2,2.40,2.48,0.75,2.60,1.97,1.05,2.81,72.1,73,0.81,0.03,30.1,5.5,6.2,2.00,0.87,1.30,0.353,0.874,2.2,0.05,1.8,\"2022-23, 2023-24\"",
    "Luka Doncic,DAL,\"PG,SG\",70,2624,6,3,1.95,2.21,0.31,2.88,1.02,1.31,2.64,64.0,66,0.64,0.10,33.9,9.2,9.8,1.42,0.54,4.10,0.382,0.786,4.0,0.63,2.3,\"2022-23, 2023-24\"",
    "Domantas Sabonis,SAC,\"PF,C\",82,2928,3,4,2.20,2.05,1.22,2.02,1.54,1.44,2.11,80.5,79,0.97,0.00,19.4,13.7,8.2,0.90,0.59,0.40,0.379,0.704,3.3,0.94,11.6,\"2022-23, 2023-24\"",
    "Anthony Davis,LAL,\"PF,C\",76,2700,5,5,2.02,1.98,0.82,2.11,1.77,1.18,2.25,70.2,71,0.80,0.04,24.7,12.6,3.5,1.17,2.31,0.40,0.271,0.816,2.1,0.57,8.2,\"2022-23, 2023-24\"",
    "Jalen Brunson,NYK,PG,77,2726,4,6,2.05,1.86,0.88,2.04,0.97,1.25,1.95,74.8,75,0.86,0.03,28.7,3.6,6.7,0.91,0.18,2.70,0.401,0.847,2.4,0.03,18.0,\"2022-23, 2023-24\"",
    "Joel Embiid,PHI,C,39,1309,40,7,0.31,1.70,-1.85,2.94,1.66,0.44,1.02,45.3,58,0.31,0.41,34.7,11.0,5.6,1.18,1.72,1.40,0.388,0.883,3.8,0.69,14.5,\"2022-23, 2023-24\"",
    "Tyrese Haliburton,IND,PG,69,2224,9,8,1.66,1.64,0.12,1.80,1.72,0.63,1.70,66.0,67,0.58,0.12,20.1,3.9,10.9,1.21,0.67,2.80,0.364,0.855,2.3,0.10,,\"2022-23, 2023-24\"",
];

/// The fixture feed as CSV text
pub fn sample_feed_csv() -> String {
    let mut csv = String::from(FEED_HEADER);
    for row in FEED_ROWS {
        csv.push('\n');
        csv.push_str(row);
    }
    csv.push('\n');
    csv
}

/// Build a record through the normalizer with the fields tests care about
///
/// Minutes are 30 per game; every other metric coerces to zero, ADP stays
/// missing. The identity uses position 0, so callers building several
/// records must use distinct names.
pub fn record(
    name: &str,
    team: &str,
    position: &str,
    games_played: f64,
    good_score: f64,
    ironman_score: f64,
) -> Record {
    let cells = [
        ("name_full", name.to_string()),
        ("team", team.to_string()),
        ("pos", position.to_string()),
        ("GP", games_played.to_string()),
        ("MIN", (games_played * 30.0).to_string()),
        ("Good_IronMan_Score", good_score.to_string()),
        ("IronMan_Score", ironman_score.to_string()),
    ];
    let raw: RawRow = cells
        .into_iter()
        .map(|(column, value)| (column.to_string(), Some(value)))
        .collect();
    Record::from_row(&raw, 0)
}

/// Records parsed from the fixture feed
pub fn create_test_records() -> Vec<Record> {
    match crate::feed::parse_records(sample_feed_csv().as_bytes()) {
        Ok(records) => records,
        Err(e) => panic!("fixture feed must parse: {}", e),
    }
}

/// Deterministic synthetic roster of `count` records for benchmarks
pub fn generate_records(count: usize) -> Vec<Record> {
    const TEAMS: &[&str] = &["ATL", "BOS", "CHI", "DEN", "LAL", "MIA", "NYK", "PHX"];
    const POSITIONS: &[&str] = &["PG", "SG", "SF", "PF", "C", "PG,SG", "SF,PF"];

    (0..count)
        .map(|i| {
            let seed = (i * 7919 % 1000) as f64;
            let cells = [
                ("name_full", format!("Player {}", i)),
                ("team", TEAMS[i % TEAMS.len()].to_string()),
                ("pos", POSITIONS[i % POSITIONS.len()].to_string()),
                ("GP", format!("{}", 20 + i % 63)),
                ("MIN", format!("{}", (20 + i % 63) * 28)),
                ("Good_IronMan_Score", format!("{:.3}", seed / 250.0 - 2.0)),
                ("IronMan_Score", format!("{:.3}", (1000.0 - seed) / 300.0 - 1.5)),
                ("ADP", if i % 4 == 0 { String::new() } else { format!("{}", i + 1) }),
            ];
            let raw: RawRow = cells
                .into_iter()
                .map(|(column, value)| (column.to_string(), Some(value)))
                .collect();
            Record::from_row(&raw, i)
        })
        .collect()
}
