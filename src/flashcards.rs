/// A front/back study card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Flashcard {
    pub front: &'static str,
    pub back: &'static str,
}

pub const FLASHCARDS: [Flashcard; 4] = [
    Flashcard {
        front: "What is the currency of India?",
        back: "Indian Rupee (INR)",
    },
    Flashcard {
        front: "What is the smallest Indian coin in value?",
        back: "Paise (1/100 of a Rupee)",
    },
    Flashcard {
        front: "How many paise make 1 rupee?",
        back: "100 paise",
    },
    Flashcard {
        front: "Which symbol represents the Indian Rupee?",
        back: "₹",
    },
];

/// Wrap-around navigator over a fixed, ordered deck. Navigation always
/// lands on the front of the next card.
#[derive(Debug)]
pub struct FlashcardDeck {
    cards: &'static [Flashcard],
    pub current_index: usize,
    pub is_flipped: bool,
}

impl FlashcardDeck {
    pub fn new() -> Self {
        Self::with_cards(&FLASHCARDS)
    }

    pub fn with_cards(cards: &'static [Flashcard]) -> Self {
        Self {
            cards,
            current_index: 0,
            is_flipped: false,
        }
    }

    pub fn current(&self) -> &Flashcard {
        &self.cards[self.current_index]
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn next(&mut self) {
        self.current_index = (self.current_index + 1) % self.cards.len();
        self.is_flipped = false;
    }

    pub fn previous(&mut self) {
        self.current_index = (self.current_index + self.cards.len() - 1) % self.cards.len();
        self.is_flipped = false;
    }

    pub fn toggle_flip(&mut self) {
        self.is_flipped = !self.is_flipped;
    }
}

impl Default for FlashcardDeck {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CARDS: [Flashcard; 3] = [
        Flashcard {
            front: "Q1",
            back: "A1",
        },
        Flashcard {
            front: "Q2",
            back: "A2",
        },
        Flashcard {
            front: "Q3",
            back: "A3",
        },
    ];

    #[test]
    fn test_new_deck_starts_at_first_card_front() {
        let deck = FlashcardDeck::new();
        assert_eq!(deck.current_index, 0);
        assert!(!deck.is_flipped);
        assert_eq!(deck.current(), &FLASHCARDS[0]);
        assert_eq!(deck.len(), FLASHCARDS.len());
    }

    #[test]
    fn test_next_advances_and_wraps() {
        let mut deck = FlashcardDeck::with_cards(&CARDS);
        deck.next();
        assert_eq!(deck.current_index, 1);
        deck.next();
        assert_eq!(deck.current_index, 2);
        deck.next();
        assert_eq!(deck.current_index, 0);
    }

    #[test]
    fn test_previous_wraps_backwards() {
        let mut deck = FlashcardDeck::with_cards(&CARDS);
        deck.previous();
        assert_eq!(deck.current_index, 2);
        deck.previous();
        assert_eq!(deck.current_index, 1);
    }

    #[test]
    fn test_next_then_previous_returns_to_start() {
        for start in 0..CARDS.len() {
            let mut deck = FlashcardDeck::with_cards(&CARDS);
            deck.current_index = start;
            deck.next();
            deck.previous();
            assert_eq!(deck.current_index, start);
        }
    }

    #[test]
    fn test_navigation_clears_flip() {
        let mut deck = FlashcardDeck::with_cards(&CARDS);
        deck.toggle_flip();
        assert!(deck.is_flipped);
        deck.next();
        assert!(!deck.is_flipped);

        deck.toggle_flip();
        deck.previous();
        assert!(!deck.is_flipped);
    }

    #[test]
    fn test_toggle_flip_inverts() {
        let mut deck = FlashcardDeck::with_cards(&CARDS);
        deck.toggle_flip();
        assert!(deck.is_flipped);
        deck.toggle_flip();
        assert!(!deck.is_flipped);
    }
}
