use std::collections::HashSet;

use serde::Deserialize;
use thiserror::Error;

const DEFAULT_ACCENT: &str = "#1f2937";
const EMBEDDED_CARDS: &str = include_str!("../assets/cards.json");

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("Card table is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Card table is empty")]
    Empty,

    #[error("Duplicate card id {0}")]
    DuplicateId(u32),

    #[error("Card {0} has no title")]
    MissingTitle(u32),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CardIcon {
    Brain,
    BarChart,
    Users,
    Shield,
}

/// Style tokens. Gradients map to stylesheet classes, accents to a text color.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct CardTheme {
    pub gradient: String,
    pub accent: String,
}

impl CardTheme {
    pub fn gradient_class(&self) -> String {
        format!("gradient-{}", self.gradient)
    }

    /// Text color for the accent token. Unknown tokens fall back to a dark gray.
    pub fn accent_color(&self) -> &'static str {
        match self.accent.as_str() {
            "blue" => "#2563eb",
            "purple" => "#9333ea",
            "green" => "#16a34a",
            "orange" => "#ea580c",
            _ => DEFAULT_ACCENT,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Card {
    pub id: u32,
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub features: Vec<String>,
    pub icon: CardIcon,
    pub theme: CardTheme,
}

/// The ordered, read-only list of cards shown in the stack.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CardDeck {
    cards: Vec<Card>,
}

impl CardDeck {
    /// Loads the card table compiled into the binary.
    pub fn embedded() -> Result<Self, ContentError> {
        Self::from_json(EMBEDDED_CARDS)
    }

    pub fn from_json(raw: &str) -> Result<Self, ContentError> {
        let cards: Vec<Card> = serde_json::from_str(raw)?;
        Self::new(cards)
    }

    pub fn new(cards: Vec<Card>) -> Result<Self, ContentError> {
        if cards.is_empty() {
            return Err(ContentError::Empty);
        }

        let mut seen = HashSet::new();
        for card in &cards {
            if !seen.insert(card.id) {
                return Err(ContentError::DuplicateId(card.id));
            }
            if card.title.trim().is_empty() {
                return Err(ContentError::MissingTitle(card.id));
            }
        }

        Ok(Self { cards })
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
