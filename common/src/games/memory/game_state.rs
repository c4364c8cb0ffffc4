use crate::games::SessionRng;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MemoryCard {
    pub id: usize,
    pub token_index: usize,
    pub face_up: bool,
    pub matched: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MemoryStatus {
    Dealing,
    AwaitingFirstPick,
    AwaitingSecondPick,
    Resolving,
    Won,
}

impl MemoryStatus {
    pub fn accepts_picks(&self) -> bool {
        matches!(
            self,
            MemoryStatus::AwaitingFirstPick | MemoryStatus::AwaitingSecondPick
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    Ignored,
    FirstPick,
    SecondPick { matched: bool },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResolveOutcome {
    Matched { won: bool },
    Mismatched,
}

#[derive(Clone, Debug, PartialEq)]
pub struct MemoryState {
    pub cards: Vec<MemoryCard>,
    /// Face-up cards of the pick in progress, in the order they were revealed.
    pub unresolved: Vec<usize>,
    pub move_count: u32,
    pub status: MemoryStatus,
}

impl MemoryState {
    pub fn dealing() -> Self {
        Self {
            cards: Vec::new(),
            unresolved: Vec::new(),
            move_count: 0,
            status: MemoryStatus::Dealing,
        }
    }

    /// Two face-down cards per token, shuffled.
    pub fn new_game(token_count: usize, rng: &mut SessionRng) -> Self {
        let mut cards: Vec<MemoryCard> = (0..token_count)
            .flat_map(|token_index| {
                [token_index * 2, token_index * 2 + 1].map(|id| MemoryCard {
                    id,
                    token_index,
                    face_up: false,
                    matched: false,
                })
            })
            .collect();
        rng.shuffle(&mut cards);

        Self {
            cards,
            unresolved: Vec::new(),
            move_count: 0,
            status: MemoryStatus::AwaitingFirstPick,
        }
    }

    pub fn card(&self, card_id: usize) -> Option<&MemoryCard> {
        self.cards.iter().find(|c| c.id == card_id)
    }

    fn card_mut(&mut self, card_id: usize) -> Option<&mut MemoryCard> {
        self.cards.iter_mut().find(|c| c.id == card_id)
    }

    pub fn matched_count(&self) -> usize {
        self.cards.iter().filter(|c| c.matched).count()
    }

    pub fn is_cleared(&self) -> bool {
        !self.cards.is_empty() && self.cards.iter().all(|c| c.matched)
    }

    pub fn reveal(&mut self, card_id: usize) -> RevealOutcome {
        if !self.status.accepts_picks() {
            return RevealOutcome::Ignored;
        }
        let Some(card) = self.card_mut(card_id) else {
            return RevealOutcome::Ignored;
        };
        if card.face_up || card.matched {
            return RevealOutcome::Ignored;
        }
        card.face_up = true;
        self.unresolved.push(card_id);

        if self.unresolved.len() < 2 {
            self.status = MemoryStatus::AwaitingSecondPick;
            return RevealOutcome::FirstPick;
        }

        self.move_count += 1;
        self.status = MemoryStatus::Resolving;
        RevealOutcome::SecondPick {
            matched: self.pair_matches(),
        }
    }

    /// Commits the pending pair. Only meaningful while `Resolving`.
    pub fn resolve(&mut self) -> Option<ResolveOutcome> {
        if self.status != MemoryStatus::Resolving {
            return None;
        }
        let matched = self.pair_matches();
        let pair = std::mem::take(&mut self.unresolved);
        for card in self.cards.iter_mut().filter(|c| pair.contains(&c.id)) {
            if matched {
                card.matched = true;
            } else {
                card.face_up = false;
            }
        }

        if !matched {
            self.status = MemoryStatus::AwaitingFirstPick;
            return Some(ResolveOutcome::Mismatched);
        }

        let won = self.is_cleared();
        self.status = if won {
            MemoryStatus::Won
        } else {
            MemoryStatus::AwaitingFirstPick
        };
        Some(ResolveOutcome::Matched { won })
    }

    fn pair_matches(&self) -> bool {
        match self.unresolved.as_slice() {
            [first, second] => {
                let first = self.card(*first).map(|c| c.token_index);
                let second = self.card(*second).map(|c| c.token_index);
                first.is_some() && first == second
            }
            _ => false,
        }
    }
}
