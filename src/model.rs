//! Deck content models.
//! The deck document lists slides in presentation order; optional blocks
//! (evaluation chart, phone mock-up) switch the matching features on.

use serde::{Deserialize, Serialize};

use crate::chart::ChartSpec;
use crate::config::Timing;
use crate::error::{DeckError, Result};

const BUNDLED_DECK: &str = include_str!("../assets/deck.json");

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub title: String,
    #[serde(default)]
    pub text: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Step {
    /// Short marker such as "01" or "STEP 1".
    pub label: String,
    pub title: String,
    #[serde(default)]
    pub text: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

impl ChartData {
    pub fn spec(&self) -> Result<ChartSpec> {
        ChartSpec::new(self.labels.clone(), self.values.clone())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScoreBar {
    pub label: String,
    /// Text shown beside the bar, e.g. "4.3".
    pub score: String,
    /// Bar width once revealed, in percent of the track.
    pub width_pct: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EvaluationSpec {
    pub chart: ChartData,
    #[serde(default)]
    pub bars: Vec<ScoreBar>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SlideSpec {
    pub id: String,
    pub kicker: Option<String>,
    pub heading: String,
    pub lead: Option<String>,
    #[serde(default)]
    pub cards: Vec<Card>,
    #[serde(default)]
    pub deploy_steps: Vec<Step>,
    #[serde(default)]
    pub step_cards: Vec<Step>,
    #[serde(default)]
    pub bullets: Vec<String>,
    pub evaluation: Option<EvaluationSpec>,
    pub phone_radar: Option<ChartData>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DeckConfig {
    pub title: String,
    #[serde(default)]
    pub timing: Timing,
    pub slides: Vec<SlideSpec>,
}

impl DeckConfig {
    /// The deck compiled into the binary.
    pub fn bundled() -> Result<Self> {
        Self::from_json(BUNDLED_DECK)
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        let deck: DeckConfig = serde_json::from_str(raw)?;
        deck.validate()?;
        Ok(deck)
    }

    fn validate(&self) -> Result<()> {
        if self.slides.is_empty() {
            return Err(DeckError::EmptyDeck);
        }
        for slide in &self.slides {
            if let Some(eval) = &slide.evaluation {
                eval.chart.spec()?;
            }
            if let Some(mini) = &slide.phone_radar {
                mini.spec()?;
            }
        }
        Ok(())
    }

    /// First slide carrying an evaluation block.
    pub fn evaluation_slide(&self) -> Option<usize> {
        self.slides.iter().position(|s| s.evaluation.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_deck_loads() {
        let deck = DeckConfig::bundled().unwrap();
        assert!(deck.slides.len() >= 3);
        let eval = deck.evaluation_slide().unwrap();
        let spec = deck.slides[eval].evaluation.as_ref().unwrap().chart.spec().unwrap();
        assert!(spec.axes() >= 3);
        assert_eq!(deck.timing, Timing::default());
    }

    #[test]
    fn test_bundled_labels_kept_verbatim() {
        let deck = DeckConfig::bundled().unwrap();
        let expected = ["問題解決力", "多面的思考", "読み取る力", "説得力", "プレッシャー耐性"];
        let eval = deck.slides[deck.evaluation_slide().unwrap()].evaluation.as_ref().unwrap();
        assert_eq!(eval.chart.labels, expected);
        let bar_labels: Vec<&str> = eval.bars.iter().map(|b| b.label.as_str()).collect();
        assert_eq!(bar_labels, expected);
        let mini = deck.slides.iter().find_map(|s| s.phone_radar.as_ref()).unwrap();
        assert_eq!(mini.labels, expected);
        assert_eq!(mini.values, vec![0.82, 0.75, 0.88, 0.7, 0.85]);
    }

    #[test]
    fn test_minimal_slide_defaults() {
        let deck = DeckConfig::from_json(
            r#"{ "title": "t", "slides": [ { "id": "a", "heading": "A" } ] }"#,
        )
        .unwrap();
        let slide = &deck.slides[0];
        assert!(slide.cards.is_empty());
        assert!(slide.evaluation.is_none());
        assert_eq!(deck.evaluation_slide(), None);
    }

    #[test]
    fn test_empty_deck_rejected() {
        let err = DeckConfig::from_json(r#"{ "title": "t", "slides": [] }"#).unwrap_err();
        assert!(matches!(err, DeckError::EmptyDeck));
    }

    #[test]
    fn test_invalid_chart_rejected() {
        let raw = r#"{ "title": "t", "slides": [ { "id": "e", "heading": "E",
            "evaluation": { "chart": { "labels": ["a", "b"], "values": [0.1, 0.2] } } } ] }"#;
        assert!(matches!(
            DeckConfig::from_json(raw),
            Err(DeckError::TooFewAxes(2))
        ));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(DeckConfig::from_json("{"), Err(DeckError::Config(_))));
    }
}
