/// Outcome of coercing a scraped score field.
///
/// `Unrated` covers absent, placeholder ("tbd"), unparsable and out-of-range
/// values alike. Records only keep the collapsed number, so a genuine zero and
/// a missing rating look the same downstream.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Score<T> {
    Rated(T),
    Unrated,
}

impl<T: Default> Score<T> {
    pub fn or_zero(self) -> T {
        match self {
            Score::Rated(value) => value,
            Score::Unrated => T::default(),
        }
    }
}

const PLACEHOLDER: &str = "tbd";

fn placeholder(raw: &str) -> bool {
    raw.is_empty() || raw.eq_ignore_ascii_case(PLACEHOLDER)
}

/// Critic score: an integer in `0..=100`.
pub fn parse_metascore(raw: &str) -> Score<u8> {
    let raw = raw.trim();
    if placeholder(raw) {
        return Score::Unrated;
    }

    match raw.parse::<u8>() {
        Ok(value) if value <= 100 => Score::Rated(value),
        _ => Score::Unrated,
    }
}

/// User score: a decimal in `0.0..=10.0`.
pub fn parse_user_score(raw: &str) -> Score<f32> {
    let raw = raw.trim();
    if placeholder(raw) {
        return Score::Unrated;
    }

    match raw.parse::<f32>() {
        Ok(value) if value.is_finite() && (0.0..=10.0).contains(&value) => Score::Rated(value),
        _ => Score::Unrated,
    }
}
