use serde::{Deserialize, Serialize};

/// ARIA live region politeness
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Politeness {
    /// Announced when the screen reader is idle
    Polite,
    /// Interrupts the current announcement
    Assertive,
}

impl Politeness {
    /// Attribute value for `aria-live`
    pub fn as_str(&self) -> &'static str {
        match self {
            Politeness::Polite => "polite",
            Politeness::Assertive => "assertive",
        }
    }
}

/// Port for screen reader announcements
///
/// The host UI owns the live region; calculation code only hands it text.
pub trait Announcer {
    fn announce(&self, message: &str, politeness: Politeness);
}
