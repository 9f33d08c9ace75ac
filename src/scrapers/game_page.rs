use super::score::{parse_metascore, parse_user_score};
use super::{attr, has_classes, is_tag, scan, PageScanner, ScanEvent};
use crate::processor::GameRecord;
use serde::Deserialize;
use serde_json::Value;
use std::io::Read;
use tracing::debug;

const STRUCTURED_DATA_TYPE: &str = "application/ld+json";
const USER_SCORE_CLASSES: [&str; 3] = ["metascore_w", "user", "game"];

/// The schema.org payload embedded in a detail page.
#[derive(Debug, Deserialize)]
struct StructuredGame {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    url: Option<String>,
    #[serde(rename = "aggregateRating", default)]
    aggregate_rating: Option<AggregateRating>,
}

#[derive(Debug, Deserialize)]
struct AggregateRating {
    #[serde(rename = "ratingValue", default)]
    rating_value: Option<Value>,
}

impl StructuredGame {
    fn rating_value(&self) -> String {
        match self
            .aggregate_rating
            .as_ref()
            .and_then(|r| r.rating_value.as_ref())
        {
            Some(Value::String(raw)) => raw.clone(),
            Some(Value::Number(n)) => n.to_string(),
            _ => String::new(),
        }
    }
}

#[derive(Debug)]
enum Phase {
    FindStructuredData,
    ReadStructuredData(String),
    FindUserScore,
    ReadUserScore(String),
    Done,
}

/// Builds a `GameRecord` from a detail page in one forward pass.
///
/// The JSON-LD block is mandatory; without it (or if it fails to parse) the
/// page yields nothing. The game-level user score is looked for only after
/// the block, and falls back to zero.
pub struct GamePageScanner {
    phase: Phase,
    game: Option<StructuredGame>,
    user_score: f32,
}

impl Default for GamePageScanner {
    fn default() -> Self {
        Self {
            phase: Phase::FindStructuredData,
            game: None,
            user_score: 0.0,
        }
    }
}

impl GamePageScanner {
    pub fn new() -> Self {
        Self::default()
    }

    fn settle_structured_data(&mut self, payload: &str) -> Phase {
        match serde_json::from_str::<StructuredGame>(payload.trim()) {
            Ok(game) => {
                self.game = Some(game);
                Phase::FindUserScore
            }
            Err(e) => {
                debug!("Structured data did not parse: {e}");
                Phase::Done
            }
        }
    }

    fn settle_user_score(&mut self, raw: &str) -> Phase {
        self.user_score = parse_user_score(raw).or_zero();
        Phase::Done
    }
}

impl PageScanner for GamePageScanner {
    type Output = Option<GameRecord>;

    fn on_event(&mut self, event: ScanEvent<'_>) {
        let phase = std::mem::replace(&mut self.phase, Phase::Done);
        self.phase = match (phase, event) {
            (Phase::FindStructuredData, ScanEvent::Start(tag))
                if is_tag(tag, "script") && attr(tag, "type") == Some(STRUCTURED_DATA_TYPE) =>
            {
                Phase::ReadStructuredData(String::new())
            }
            (Phase::ReadStructuredData(mut payload), ScanEvent::Text(text)) => {
                payload.push_str(text);
                Phase::ReadStructuredData(payload)
            }
            (Phase::ReadStructuredData(payload), _) => self.settle_structured_data(&payload),
            (Phase::FindUserScore, ScanEvent::Start(tag))
                if is_tag(tag, "div") && has_classes(tag, &USER_SCORE_CLASSES) =>
            {
                Phase::ReadUserScore(String::new())
            }
            (Phase::ReadUserScore(mut raw), ScanEvent::Text(text)) => {
                raw.push_str(text);
                Phase::ReadUserScore(raw)
            }
            (Phase::ReadUserScore(raw), _) => self.settle_user_score(&raw),
            (phase, _) => phase,
        };
    }

    fn is_done(&self) -> bool {
        matches!(self.phase, Phase::Done)
    }

    fn finish(&mut self) -> Option<GameRecord> {
        // Text running into the end of the stream still counts.
        self.phase = match std::mem::replace(&mut self.phase, Phase::Done) {
            Phase::ReadStructuredData(payload) => self.settle_structured_data(&payload),
            Phase::ReadUserScore(raw) => self.settle_user_score(&raw),
            phase => phase,
        };

        let game = self.game.take()?;
        let metascore = parse_metascore(&game.rating_value()).or_zero();

        Some(GameRecord {
            title: game.name.unwrap_or_default(),
            link: game.url.unwrap_or_default(),
            metascore,
            user_score: self.user_score,
        })
    }
}

/// Extracts the game record from a detail page, or `None` when the page has
/// no usable structured data. Read errors count as an unusable page.
pub fn extract_game<R: Read>(content: R) -> Option<GameRecord> {
    match scan(GamePageScanner::new(), content) {
        Ok(game) => game,
        Err(e) => {
            debug!("Reading game page failed: {e}");
            None
        }
    }
}
