//! Auxiliary statistics over a ledger window
//!
//! These feed the presentation layer (color split, low/high split, recent
//! spins, hot and cold numbers). None of them take part in prediction.

use super::outcome::{Band, Color, Outcome, Parity, POCKET_COUNT};
use serde::{Deserialize, Serialize};
use statrs::distribution::{ChiSquared, ContinuousCDF};

/// Number of recent spins reported in a summary
pub const RECENT_SPINS: usize = 10;

/// How many hot/cold numbers a summary lists
pub const HOT_COLD_COUNT: usize = 5;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorDistribution {
    pub red: usize,
    pub black: usize,
    pub green: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BandDistribution {
    pub low: usize,
    pub high: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParityDistribution {
    pub even: usize,
    pub odd: usize,
}

/// A number and how often it appeared
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberCount {
    pub number: Outcome,
    pub count: usize,
}

/// Summary statistics of a ledger window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistorySummary {
    pub total: usize,
    pub last_ten: Vec<Outcome>,
    pub colors: ColorDistribution,
    pub bands: BandDistribution,
    pub parity: ParityDistribution,
    /// Counts for dozens 1, 2 and 3
    pub dozens: [usize; 3],
    pub hot_numbers: Vec<NumberCount>,
    pub cold_numbers: Vec<NumberCount>,
    /// Chi-square goodness of fit against a fair wheel, once every pocket
    /// could have been hit at least once
    pub uniformity_p_value: Option<f64>,
}

impl HistorySummary {
    pub fn from_history(history: &[Outcome]) -> Self {
        let mut counts = [0usize; POCKET_COUNT];
        let mut colors = ColorDistribution::default();
        let mut bands = BandDistribution::default();
        let mut parity = ParityDistribution::default();
        let mut dozens = [0usize; 3];

        for &outcome in history {
            counts[outcome.index()] += 1;

            match outcome.color() {
                Color::Red => colors.red += 1,
                Color::Black => colors.black += 1,
                Color::Green => colors.green += 1,
            }
            match outcome.band() {
                Some(Band::Low) => bands.low += 1,
                Some(Band::High) => bands.high += 1,
                None => {}
            }
            match outcome.parity() {
                Some(Parity::Even) => parity.even += 1,
                Some(Parity::Odd) => parity.odd += 1,
                None => {}
            }
            if let Some(dozen) = outcome.dozen() {
                dozens[usize::from(dozen - 1)] += 1;
            }
        }

        let last_ten = history[history.len().saturating_sub(RECENT_SPINS)..].to_vec();

        Self {
            total: history.len(),
            last_ten,
            colors,
            bands,
            parity,
            dozens,
            hot_numbers: ranked(&counts, true),
            cold_numbers: ranked(&counts, false),
            uniformity_p_value: uniformity_p_value(&counts, history.len()),
        }
    }
}

/// Top `HOT_COLD_COUNT` numbers by count, ties broken by lowest value
fn ranked(counts: &[usize; POCKET_COUNT], hottest_first: bool) -> Vec<NumberCount> {
    let mut entries: Vec<NumberCount> = Outcome::all()
        .map(|number| NumberCount {
            number,
            count: counts[number.index()],
        })
        .collect();

    if hottest_first {
        entries.sort_by(|a, b| b.count.cmp(&a.count).then(a.number.cmp(&b.number)));
    } else {
        entries.sort_by(|a, b| a.count.cmp(&b.count).then(a.number.cmp(&b.number)));
    }

    entries.truncate(HOT_COLD_COUNT);
    entries
}

/// P-value of Pearson's chi-square test against 37 equiprobable pockets
fn uniformity_p_value(counts: &[usize; POCKET_COUNT], total: usize) -> Option<f64> {
    if total < POCKET_COUNT {
        return None;
    }

    let expected = total as f64 / POCKET_COUNT as f64;
    let statistic: f64 = counts
        .iter()
        .map(|&c| (c as f64 - expected).powi(2) / expected)
        .sum();

    let dist = ChiSquared::new((POCKET_COUNT - 1) as f64).ok()?;
    Some((1.0 - dist.cdf(statistic)).clamp(0.0, 1.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn history(values: &[i64]) -> Vec<Outcome> {
        values.iter().map(|v| Outcome::new(*v).unwrap()).collect()
    }

    #[test]
    fn test_color_and_band_split() {
        let summary = HistorySummary::from_history(&history(&[0, 1, 2, 3, 19, 20]));

        assert_eq!(
            summary.colors,
            ColorDistribution {
                red: 3,
                black: 2,
                green: 1
            }
        );
        assert_eq!(summary.bands, BandDistribution { low: 3, high: 2 });
        assert_eq!(summary.parity, ParityDistribution { even: 2, odd: 3 });
        assert_eq!(summary.dozens, [3, 2, 0]);
    }

    #[test]
    fn test_last_ten_keeps_order() {
        let values: Vec<i64> = (1..=15).collect();
        let summary = HistorySummary::from_history(&history(&values));
        let last: Vec<u8> = summary.last_ten.iter().map(|o| o.value()).collect();
        assert_eq!(last, (6..=15).collect::<Vec<u8>>());
    }

    #[test]
    fn test_hot_and_cold_numbers() {
        let summary = HistorySummary::from_history(&history(&[7, 7, 7, 4, 4, 30]));

        assert_eq!(summary.hot_numbers[0].number.value(), 7);
        assert_eq!(summary.hot_numbers[0].count, 3);
        assert_eq!(summary.hot_numbers[1].number.value(), 4);
        assert_eq!(summary.hot_numbers[2].number.value(), 30);
        // Unseen numbers, lowest first
        assert_eq!(summary.cold_numbers[0].number.value(), 0);
        assert_eq!(summary.cold_numbers[0].count, 0);
        assert_eq!(summary.cold_numbers[1].number.value(), 1);
    }

    #[test]
    fn test_uniformity_needs_enough_spins() {
        let short = HistorySummary::from_history(&history(&[1, 2, 3]));
        assert!(short.uniformity_p_value.is_none());

        // Every pocket exactly twice: perfectly uniform
        let values: Vec<i64> = (0..=36).chain(0..=36).collect();
        let fair = HistorySummary::from_history(&history(&values));
        let p = fair.uniformity_p_value.unwrap();
        assert!(p > 0.99, "uniform sample should not be rejected, got {}", p);

        // One pocket only: strongly rejected
        let skewed = HistorySummary::from_history(&history(&[17; 74]));
        assert!(skewed.uniformity_p_value.unwrap() < 1e-6);
    }

    #[test]
    fn test_empty_history() {
        let summary = HistorySummary::from_history(&[]);
        assert_eq!(summary.total, 0);
        assert!(summary.last_ten.is_empty());
        assert_eq!(summary.hot_numbers.len(), HOT_COLD_COUNT);
    }
}
