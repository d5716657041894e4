//! Expected-value check: does the empirical payout per trial match theory?

use serde::Serialize;

use super::{Analysis, AnalysisResult, Locale};
use crate::constants::{WAITED_VALUE_ERROR_MARGIN, WAITED_VALUE_EXPECTED};
use crate::error::ConfigError;
use crate::game::{Game, GameConfig, GameResult};

/// Payout per combination, aligned with the config's enumeration order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PayoutTable {
    payouts: Vec<f64>,
}

impl PayoutTable {
    /// The reference table: combination `#k` in enumeration order pays `k`.
    pub fn enumeration_order(config: &GameConfig) -> Self {
        Self {
            payouts: (1..=config.combination_count()).map(|k| k as f64).collect(),
        }
    }

    pub fn from_payouts(config: &GameConfig, payouts: Vec<f64>) -> Result<Self, ConfigError> {
        if payouts.len() != config.combination_count() {
            return Err(ConfigError::PayoutTableMismatch {
                expected: config.combination_count(),
                got: payouts.len(),
            });
        }
        Ok(Self { payouts })
    }

    pub fn payouts(&self) -> &[f64] {
        &self.payouts
    }
}

/// Numbers behind a waited-value verdict.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WaitedValueConstraints {
    pub expected_value: f64,
    pub real_value: f64,
    pub abs_error: f64,
}

/// Compares the empirical expected payout with a theoretical constant.
///
/// The real value is `sum(payout[k] * count[k]) / max_tries`. Dividing by the
/// budget rather than the trials played means a partial game reads low.
#[derive(Debug, Clone)]
pub struct WaitedValue<'a> {
    config: &'a GameConfig,
    result: &'a GameResult,
    payouts: PayoutTable,
    expected_value: f64,
    error_margin: f64,
    locale: Locale,
}

impl<'a> WaitedValue<'a> {
    /// Reference analysis for the two-symbol game: enumeration-order payouts,
    /// expected value 4.485, 5% margin.
    pub fn new(game: &'a Game) -> Self {
        Self::from_parts(game.config(), game.result())
    }

    pub fn from_parts(config: &'a GameConfig, result: &'a GameResult) -> Self {
        Self {
            config,
            result,
            payouts: PayoutTable::enumeration_order(config),
            expected_value: WAITED_VALUE_EXPECTED,
            error_margin: WAITED_VALUE_ERROR_MARGIN,
            locale: Locale::default(),
        }
    }

    /// Swap in an explicit payout table and its theoretical expected value,
    /// which must be finite and positive.
    pub fn with_payouts(
        mut self,
        payouts: PayoutTable,
        expected_value: f64,
    ) -> Result<Self, ConfigError> {
        if !expected_value.is_finite() || expected_value <= 0.0 {
            return Err(ConfigError::InvalidExpectedValue(expected_value));
        }
        self.payouts = payouts;
        self.expected_value = expected_value;
        Ok(self)
    }

    pub fn with_margin(mut self, error_margin: f64) -> Self {
        self.error_margin = error_margin;
        self
    }

    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    pub fn expected_value(&self) -> f64 {
        self.expected_value
    }

    pub fn error_margin(&self) -> f64 {
        self.error_margin
    }

    pub fn real_value(&self) -> f64 {
        let accumulated: f64 = self
            .result
            .combinations()
            .iter()
            .zip(self.payouts.payouts())
            .map(|((_, count), payout)| *count as f64 * payout)
            .sum();

        accumulated / self.config.max_tries() as f64
    }

    pub fn abs_error(&self) -> f64 {
        ((self.expected_value - self.real_value()) / self.expected_value).abs()
    }
}

impl Analysis for WaitedValue<'_> {
    type Constraints = WaitedValueConstraints;

    fn analyze(&self) -> AnalysisResult<WaitedValueConstraints> {
        let real_value = self.real_value();
        let abs_error = self.abs_error();
        let is_viable = self.is_viable();

        tracing::info!(
            expected_value = self.expected_value,
            real_value,
            abs_error,
            is_viable,
            "waited value analysed"
        );

        AnalysisResult {
            is_viable,
            viability_reason: self.viability_reason(),
            constraints: WaitedValueConstraints {
                expected_value: self.expected_value,
                real_value,
                abs_error,
            },
        }
    }

    fn is_viable(&self) -> bool {
        self.abs_error() < self.error_margin
    }

    fn viability_reason(&self) -> String {
        let margin = self.locale.percent(self.error_margin);
        match (self.locale, self.is_viable()) {
            (Locale::Spanish, true) => format!(
                "El experimento es confiable porque no supera el margen de error del {}",
                margin
            ),
            (Locale::Spanish, false) => format!(
                "El experimento no es confiable porque supera el margen de error del {}",
                margin
            ),
            (Locale::English, true) => format!(
                "The experiment is reliable because it stays within the {} error margin",
                margin
            ),
            (Locale::English, false) => format!(
                "The experiment is not reliable because it exceeds the {} error margin",
                margin
            ),
        }
    }
}
