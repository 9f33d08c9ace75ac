use serde::Serialize;

/// One game as it appears on its detail page.
///
/// A score the site does not (yet) publish is reported as zero.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameRecord {
    pub title: String,
    pub link: String,
    /// Critic score, 0..=100.
    pub metascore: u8,
    /// User score, 0.0..=10.0.
    pub user_score: f32,
}

impl GameRecord {
    /// Tab-separated line used by the command line output.
    pub fn to_tsv(&self) -> String {
        format!(
            "{}\t{:.1}\t{}\t{}",
            self.metascore, self.user_score, self.title, self.link
        )
    }
}
