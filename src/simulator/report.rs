//! Simulation report generation.

use serde::Serialize;

use crate::analysis::{Analysis, AnalysisResult, WaitedValue, WaitedValueConstraints};
use crate::game::{Game, Symbol};

/// Share of trials that landed on one combination.
#[derive(Debug, Clone, Serialize)]
pub struct CombinationRow {
    pub combination: String,
    pub count: u64,
    pub frequency: f64,
}

/// Summary of a finished (or stopped) simulation.
#[derive(Debug, Clone, Serialize)]
pub struct SimReport {
    pub game_name: String,
    pub options: Vec<Symbol>,
    pub max_tries: u64,
    pub tries_played: u64,
    pub combinations: Vec<CombinationRow>,
    pub wins_by_symbol: Vec<(Symbol, u64)>,
    pub total_wins: u64,
    pub losses: u64,
    pub win_rate: f64,
    pub analysis: AnalysisResult<WaitedValueConstraints>,
}

impl SimReport {
    /// Build a report with the reference waited-value analysis.
    pub fn from_game(game: &Game) -> Self {
        Self::with_analysis(game, &WaitedValue::new(game))
    }

    pub fn with_analysis(game: &Game, analysis: &WaitedValue<'_>) -> Self {
        let result = game.result();
        let played = result.total();
        let share = |count: u64| {
            if played == 0 {
                0.0
            } else {
                count as f64 / played as f64
            }
        };

        let combinations = result
            .combinations()
            .iter()
            .map(|(combination, count)| CombinationRow {
                combination: combination.to_string(),
                count: *count,
                frequency: share(*count),
            })
            .collect();

        let wins_by_symbol = game
            .config()
            .options()
            .iter()
            .map(|&symbol| (symbol, result.wins_for(symbol)))
            .collect();

        Self {
            game_name: game.name().to_string(),
            options: game.config().options().to_vec(),
            max_tries: game.config().max_tries(),
            tries_played: game.tries_played(),
            combinations,
            wins_by_symbol,
            total_wins: result.total_wins(),
            losses: result.losses(),
            win_rate: share(result.total_wins()),
            analysis: analysis.analyze(),
        }
    }

    /// Generate a text report.
    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str("═══════════════════════════════════════════════════════════════\n");
        report.push_str("                    SIMULATION REPORT\n");
        report.push_str("═══════════════════════════════════════════════════════════════\n\n");

        report.push_str(&format!("Game: {}\n", self.game_name));
        report.push_str(&format!(
            "Tries: {} played of {} allowed\n\n",
            self.tries_played, self.max_tries
        ));

        report.push_str("── COMBINATIONS ─────────────────────────────────────────────────\n");
        for row in &self.combinations {
            let bar_len = (row.frequency * 100.0 / 2.0) as usize;
            report.push_str(&format!(
                "  {:>6}: {:>8} {:>6.2}% {}\n",
                row.combination,
                row.count,
                row.frequency * 100.0,
                "█".repeat(bar_len)
            ));
        }
        report.push('\n');

        report.push_str("── OUTCOMES ─────────────────────────────────────────────────────\n");
        for (symbol, wins) in &self.wins_by_symbol {
            report.push_str(&format!("  Wins on {:<4} {:>8}\n", symbol, wins));
        }
        report.push_str(&format!("  Total Wins:   {:>8}\n", self.total_wins));
        report.push_str(&format!("  Losses:       {:>8}\n", self.losses));
        report.push_str(&format!("  Win Rate:     {:>7.2}%\n\n", self.win_rate * 100.0));

        let c = &self.analysis.constraints;
        report.push_str("── WAITED VALUE ─────────────────────────────────────────────────\n");
        report.push_str(&format!("  Expected Value: {:.4}\n", c.expected_value));
        report.push_str(&format!("  Real Value:     {:.4}\n", c.real_value));
        report.push_str(&format!("  Abs Error:      {:.2}%\n", c.abs_error * 100.0));
        report.push_str(&format!(
            "  Verdict:        {}\n",
            if self.analysis.is_viable {
                "VIABLE"
            } else {
                "NOT VIABLE"
            }
        ));
        report.push_str(&format!("  {}\n", self.analysis.viability_reason));

        report.push_str("\n═══════════════════════════════════════════════════════════════\n");

        report
    }

    /// Generate a JSON report for further analysis.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{GameConfig, Selection};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn played_game(tries: u64) -> Game {
        let mut game = Game::new("report", GameConfig::standard(tries).unwrap());
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let selection = Selection::new(vec![1, 1, 1]);
        while !game.is_finished() {
            game.play(&selection, &mut rng).unwrap();
        }
        game
    }

    #[test]
    fn test_report_generation() {
        let game = played_game(200);
        let report = SimReport::from_game(&game);

        assert_eq!(report.tries_played, 200);
        assert_eq!(report.combinations.len(), 8);
        assert_eq!(report.combinations.iter().map(|r| r.count).sum::<u64>(), 200);
        assert!((report.combinations.iter().map(|r| r.frequency).sum::<f64>() - 1.0).abs() < 1e-9);
        assert_eq!(report.total_wins + report.losses, 200);
        assert_eq!(
            report.wins_by_symbol.iter().map(|(_, n)| n).sum::<u64>(),
            report.total_wins
        );

        let text = report.to_text();
        assert!(text.contains("SIMULATION REPORT"));
        assert!(text.contains("151"));
        assert!(text.contains("Real Value"));
    }

    #[test]
    fn test_empty_game_report() {
        let game = Game::new("empty", GameConfig::standard(10).unwrap());
        let report = SimReport::from_game(&game);
        assert_eq!(report.win_rate, 0.0);
        assert!(report.combinations.iter().all(|r| r.frequency == 0.0));
        assert!(!report.analysis.is_viable);
    }

    #[test]
    fn test_json_report() {
        let game = played_game(50);
        let json: serde_json::Value = serde_json::from_str(&SimReport::from_game(&game).to_json()).unwrap();
        assert_eq!(json["tries_played"], 50);
        assert_eq!(json["combinations"].as_array().unwrap().len(), 8);
        assert!(json["analysis"]["constraints"]["real_value"].is_number());
    }
}
