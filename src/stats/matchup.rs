use serde::Serialize;

use super::coerce::coerce_number;
use crate::domain::{StatRecord, Teams};
use crate::errors::MatchupError;

const OPS_WEIGHT: f64 = 1.2;
const ERA_WEIGHT: f64 = 0.8;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamOdds {
    pub name: String,
    pub win_probability: f64,
}

/// Head-to-head estimate from team OPS and opposing ERA.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Prediction {
    #[serde(rename = "teamA")]
    pub team_a: TeamOdds,
    #[serde(rename = "teamB")]
    pub team_b: TeamOdds,
    pub winner: String,
}

struct MatchupStats {
    ops: f64,
    era: f64,
}

/// Predicts `team_a` vs `team_b`.
///
/// Each side scores `OPS * 1.2 - opponent ERA * 0.8`. A non-positive combined
/// score is a coin flip. Probabilities are rounded to two decimals and ties
/// go to `team_b`.
pub fn predict(teams: &Teams, team_a: &str, team_b: &str) -> Result<Prediction, MatchupError> {
    if team_a.is_empty() || team_b.is_empty() {
        return Err(MatchupError::MissingTeamNames);
    }

    let a = matchup_stats(teams, team_a)?;
    let b = matchup_stats(teams, team_b)?;

    let score_a = a.ops * OPS_WEIGHT - b.era * ERA_WEIGHT;
    let score_b = b.ops * OPS_WEIGHT - a.era * ERA_WEIGHT;
    let total = score_a + score_b;

    let prob_a = if total <= 0.0 { 0.5 } else { round2(score_a / total) };
    let prob_b = round2(1.0 - prob_a);
    let winner = if prob_a > prob_b { team_a } else { team_b };

    Ok(Prediction {
        team_a: TeamOdds { name: team_a.to_string(), win_probability: prob_a },
        team_b: TeamOdds { name: team_b.to_string(), win_probability: prob_b },
        winner: winner.to_string(),
    })
}

fn matchup_stats(teams: &Teams, name: &str) -> Result<MatchupStats, MatchupError> {
    let stats = teams
        .get(name)
        .map(|t| &t.team_stats)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| MatchupError::TeamNotFound(name.to_string()))?;

    Ok(MatchupStats {
        ops: required(stats, "OPS", name)?,
        era: required(stats, "ERA", name)?,
    })
}

fn required(stats: &StatRecord, field: &str, team: &str) -> Result<f64, MatchupError> {
    stats
        .get(field)
        .map(coerce_number)
        .ok_or_else(|| MatchupError::MissingStats(team.to_string()))
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Team;
    use serde_json::{json, Value};

    fn team(stats: Value) -> Team {
        Team {
            team_stats: stats.as_object().cloned().unwrap_or_default(),
            players: vec![],
        }
    }

    fn teams() -> Teams {
        let mut teams = Teams::new();
        teams.insert("Japan".into(), team(json!({"OPS": 3.0, "ERA": 1.0})));
        teams.insert("Italy".into(), team(json!({"OPS": 2.0, "ERA": 1.5})));
        teams.insert("Brazil".into(), team(json!({"OPS": 0.1, "ERA": 9.0})));
        teams.insert("Israel".into(), team(json!({"OPS": 0.7})));
        teams.insert("Panama".into(), team(json!({})));
        teams
    }

    #[test]
    fn test_predict_favours_better_team() {
        let prediction = predict(&teams(), "Japan", "Italy").unwrap();

        // score_a = 3.6 - 1.2 = 2.4, score_b = 2.4 - 0.8 = 1.6
        assert_eq!(prediction.team_a.win_probability, 0.6);
        assert_eq!(prediction.team_b.win_probability, 0.4);
        assert_eq!(prediction.winner, "Japan");
    }

    #[test]
    fn test_non_positive_total_is_coin_flip() {
        let prediction = predict(&teams(), "Brazil", "Brazil").unwrap();

        assert_eq!(prediction.team_a.win_probability, 0.5);
        assert_eq!(prediction.team_b.win_probability, 0.5);
        assert_eq!(prediction.winner, "Brazil");
    }

    #[test]
    fn test_predict_errors() {
        let teams = teams();
        assert_eq!(predict(&teams, "", "Japan"), Err(MatchupError::MissingTeamNames));
        assert_eq!(
            predict(&teams, "Japan", "Atlantis"),
            Err(MatchupError::TeamNotFound("Atlantis".into()))
        );
        assert_eq!(
            predict(&teams, "Panama", "Japan"),
            Err(MatchupError::TeamNotFound("Panama".into()))
        );
        assert_eq!(
            predict(&teams, "Japan", "Israel"),
            Err(MatchupError::MissingStats("Israel".into()))
        );
    }
}
