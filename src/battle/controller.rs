//! Battle state machine.
//!
//! `BattleController` validates each request, asks the deck, hand,
//! resources and combo evaluator to do their part, updates the boss and
//! resolves Victory/Defeat. Every transition completes synchronously.
//!
//! ## Busy protocol
//!
//! Accepted draws, attacks and discards mark the controller busy. While
//! busy, every request except `acknowledge_animation_complete` is
//! rejected. Acknowledging clears the flag and emits `CardRevealed` for the
//! cards dealt by that action. Correctness never depends on animation
//! timing: a headless caller simply acknowledges right away.
//!
//! ```
//! use elemental_battle::battle::{BattleController, BattleStatus};
//! use elemental_battle::core::BattleConfig;
//!
//! let mut battle = BattleController::new(BattleConfig::default()).unwrap();
//! battle.start_battle_seeded(42);
//! battle.acknowledge_animation_complete();
//!
//! let first = battle.state().hand.cards()[0].id;
//! assert!(battle.toggle_selection(first).is_accepted());
//! assert!(battle.request_attack().is_accepted());
//! assert_eq!(battle.status(), BattleStatus::InProgress);
//! ```

use im::Vector;

use super::command::{ActionOutcome, ActionRecord, Command, RejectReason};
use super::events::{BattleEvent, BattleResult};
use super::snapshot::BattleSnapshot;
use super::state::{BattleState, BattleStatus};
use crate::cards::{CardDefinition, CardView, HandCard, HandCardId, DECK_SIZE};
use crate::combo::{ComboEvaluator, ComboPreview};
use crate::core::{BattleConfig, ConfigError, DeckError, GameRng, SetupError};
use crate::zones::{DeckManager, SelectionChange};

/// Orchestrates a battle against the boss.
#[derive(Clone, Debug)]
pub struct BattleController {
    config: BattleConfig,
    seed: u64,
    /// Caller-supplied draw order the current battle started from.
    starting_order: Option<Vec<CardDefinition>>,
    state: BattleState,
    busy: bool,
    /// Cards dealt by the in-flight action, revealed on acknowledgement.
    pending_reveals: Vec<CardView>,
    events: Vec<BattleEvent>,
    history: Vector<ActionRecord>,
}

impl BattleController {
    /// Create a controller. The battle begins with one of the
    /// `start_battle*` methods.
    pub fn new(config: BattleConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let rng = GameRng::new(0);
        let state = BattleState::new(&config, &rng);

        Ok(Self {
            config,
            seed: 0,
            starting_order: None,
            state,
            busy: false,
            pending_reveals: Vec::new(),
            events: Vec::new(),
            history: Vector::new(),
        })
    }

    /// Rebuild a shuffled battle by replaying accepted commands against a
    /// seed. Battles started from a fixed order need
    /// [`replay_with_deck`](Self::replay_with_deck).
    pub fn replay(
        config: BattleConfig,
        seed: u64,
        commands: impl IntoIterator<Item = Command>,
    ) -> Result<Self, ConfigError> {
        let mut battle = Self::new(config)?;
        battle.start_battle_seeded(seed);
        for command in commands {
            battle.handle(command);
        }
        Ok(battle)
    }

    /// Rebuild a battle started with [`start_battle_with_deck`](Self::start_battle_with_deck).
    pub fn replay_with_deck(
        config: BattleConfig,
        order: Vec<CardDefinition>,
        seed: u64,
        commands: impl IntoIterator<Item = Command>,
    ) -> Result<Self, SetupError> {
        let mut battle = Self::new(config)?;
        battle.start_battle_with_deck(order, seed)?;
        for command in commands {
            battle.handle(command);
        }
        Ok(battle)
    }

    /// Replay this battle's history from its own starting point.
    pub fn rebuild(&self) -> Result<Self, SetupError> {
        let commands = self.history.iter().map(|r| r.command);
        match &self.starting_order {
            Some(order) => {
                Self::replay_with_deck(self.config.clone(), order.clone(), self.seed, commands)
            }
            None => Ok(Self::replay(self.config.clone(), self.seed, commands)?),
        }
    }

    // === Commands ===

    /// Start a battle with a freshly shuffled deck from an entropy seed.
    pub fn start_battle(&mut self) {
        self.start_battle_seeded(rand::random());
    }

    /// Start (or restart) a battle with a deterministic shuffle.
    pub fn start_battle_seeded(&mut self, seed: u64) {
        self.reset(seed);
        self.state.deck.initialize();
        self.begin();
    }

    /// Start a battle whose draw pile is exactly `order`.
    ///
    /// `order` must be a permutation of the 40-card catalog; see
    /// [`DeckManager::stacked_order`]. `seed` drives any later reshuffle.
    pub fn start_battle_with_deck(
        &mut self,
        order: Vec<CardDefinition>,
        seed: u64,
    ) -> Result<(), DeckError> {
        let rng = GameRng::new(seed);
        let deck = DeckManager::with_order(
            order.clone(),
            rng.for_context("deck"),
            self.config.reshuffle_policy,
        )?;
        self.reset(seed);
        self.starting_order = Some(order);
        self.state.deck = deck;
        self.begin();
        Ok(())
    }

    /// Select or deselect a hand card.
    pub fn toggle_selection(&mut self, id: HandCardId) -> ActionOutcome {
        self.run(Command::ToggleSelection(id), |battle| battle.try_toggle(id))
    }

    /// Deal a full hand. Only allowed while the hand is empty.
    pub fn request_draw(&mut self) -> ActionOutcome {
        self.run(Command::RequestDraw, Self::try_draw)
    }

    /// Attack the boss with the current selection.
    pub fn request_attack(&mut self) -> ActionOutcome {
        self.run(Command::RequestAttack, Self::try_attack)
    }

    /// Discard the current selection and draw replacements.
    pub fn request_discard(&mut self) -> ActionOutcome {
        self.run(Command::RequestDiscard, Self::try_discard)
    }

    /// Signal that all animations of the last action have finished.
    pub fn acknowledge_animation_complete(&mut self) -> ActionOutcome {
        self.run(Command::AcknowledgeAnimationComplete, Self::try_acknowledge)
    }

    /// Dispatch a command.
    pub fn handle(&mut self, command: Command) -> ActionOutcome {
        match command {
            Command::StartBattle { seed } => {
                self.start_battle_seeded(seed);
                ActionOutcome::Accepted
            }
            Command::ToggleSelection(id) => self.toggle_selection(id),
            Command::RequestDraw => self.request_draw(),
            Command::RequestAttack => self.request_attack(),
            Command::RequestDiscard => self.request_discard(),
            Command::AcknowledgeAnimationComplete => self.acknowledge_animation_complete(),
        }
    }

    /// Drain queued events, oldest first.
    pub fn take_events(&mut self) -> Vec<BattleEvent> {
        std::mem::take(&mut self.events)
    }

    // === Queries ===

    #[must_use]
    pub fn status(&self) -> BattleStatus {
        self.state.status
    }

    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    #[must_use]
    pub fn state(&self) -> &BattleState {
        &self.state
    }

    #[must_use]
    pub fn config(&self) -> &BattleConfig {
        &self.config
    }

    /// Seed of the current battle.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Draw order passed to `start_battle_with_deck`, if the battle began
    /// from one.
    #[must_use]
    pub fn starting_order(&self) -> Option<&[CardDefinition]> {
        self.starting_order.as_deref()
    }

    /// Accepted commands since the battle started.
    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }

    /// Selected cards in selection order.
    #[must_use]
    pub fn selected(&self) -> Vec<HandCard> {
        self.state.hand.selected()
    }

    /// Combo and damage an attack would produce right now.
    #[must_use]
    pub fn combo_preview(&self) -> Option<ComboPreview> {
        ComboPreview::of(&self.state.hand.selected_definitions())
    }

    #[must_use]
    pub fn can_attack(&self) -> bool {
        self.check_attack().is_ok()
    }

    #[must_use]
    pub fn can_discard(&self) -> bool {
        self.check_discard().is_ok()
    }

    #[must_use]
    pub fn can_draw(&self) -> bool {
        self.check_ready().is_ok() && self.state.hand.is_empty()
    }

    #[must_use]
    pub fn snapshot(&self) -> BattleSnapshot {
        BattleSnapshot::capture(&self.state, self.busy)
    }

    // === Transitions ===

    fn reset(&mut self, seed: u64) {
        self.seed = seed;
        self.starting_order = None;
        self.state = BattleState::new(&self.config, &GameRng::new(seed));
        self.busy = false;
        self.pending_reveals.clear();
        self.events.clear();
        self.history = Vector::new();
    }

    fn begin(&mut self) {
        tracing::info!(
            "Battle started (seed {}, boss health {}, {} attacks, {} discards)",
            self.seed,
            self.state.boss.max_health(),
            self.state.resources.attacks_left(),
            self.state.resources.discards_left()
        );

        self.state.status = BattleStatus::InProgress;
        self.emit_boss_health();
        self.emit_resources();
        self.deal_hand();
    }

    fn run(
        &mut self,
        command: Command,
        op: impl FnOnce(&mut Self) -> Result<(), RejectReason>,
    ) -> ActionOutcome {
        let result = op(self);
        match result {
            Ok(()) => {
                let sequence = self.history.len() as u32;
                self.history.push_back(ActionRecord { sequence, command });
            }
            Err(reason) => {
                tracing::debug!("Rejected {:?}: {}", command, reason);
            }
        }
        result.into()
    }

    fn check_ready(&self) -> Result<(), RejectReason> {
        if self.state.status != BattleStatus::InProgress {
            return Err(RejectReason::NotInProgress);
        }
        if self.busy {
            return Err(RejectReason::Busy);
        }
        Ok(())
    }

    fn check_attack(&self) -> Result<(), RejectReason> {
        self.check_ready()?;
        if self.state.hand.selection_len() == 0 {
            return Err(RejectReason::EmptySelection);
        }
        if !self.state.resources.can_attack() {
            return Err(RejectReason::NoAttacksLeft);
        }
        Ok(())
    }

    fn check_discard(&self) -> Result<(), RejectReason> {
        self.check_ready()?;
        if self.state.hand.selection_len() == 0 {
            return Err(RejectReason::EmptySelection);
        }
        if !self.state.resources.can_discard() {
            return Err(RejectReason::NoDiscardsLeft);
        }
        Ok(())
    }

    fn try_toggle(&mut self, id: HandCardId) -> Result<(), RejectReason> {
        self.check_ready()?;
        match self.state.hand.toggle(id) {
            SelectionChange::Selected | SelectionChange::Deselected => {
                self.emit_selection();
                Ok(())
            }
            SelectionChange::AtCapacity => Err(RejectReason::SelectionFull),
            SelectionChange::UnknownCard => Err(RejectReason::UnknownCard),
        }
    }

    fn try_draw(&mut self) -> Result<(), RejectReason> {
        self.check_ready()?;
        if !self.state.hand.is_empty() {
            return Err(RejectReason::HandNotEmpty);
        }
        self.deal_hand();
        Ok(())
    }

    fn try_attack(&mut self) -> Result<(), RejectReason> {
        self.check_attack()?;
        if !self.state.resources.spend_attack() {
            return Err(RejectReason::NoAttacksLeft);
        }

        let cards = self.state.hand.selected_definitions();
        let combo = ComboEvaluator::evaluate(&cards);
        let base = ComboEvaluator::base_damage(&cards);
        let damage = combo.multiplier().apply(base);
        self.state.boss.apply_damage(damage);

        tracing::info!(
            "Attacking with {} damage ({} base x {} {}), boss at {}/{}",
            damage,
            base,
            combo.multiplier(),
            combo,
            self.state.boss.health(),
            self.state.boss.max_health()
        );

        self.emit_resources();
        self.events.push(BattleEvent::AttackResolved { combo, base, damage });
        self.emit_boss_health();
        self.replace_selection();

        if self.state.boss.is_defeated() {
            self.end(BattleResult::Victory);
        } else if !self.state.resources.can_attack() {
            self.end(BattleResult::Defeat);
        }
        Ok(())
    }

    fn try_discard(&mut self) -> Result<(), RejectReason> {
        self.check_discard()?;
        if !self.state.resources.spend_discard() {
            return Err(RejectReason::NoDiscardsLeft);
        }

        tracing::debug!(
            "Discarding {} cards, {} discards left",
            self.state.hand.selection_len(),
            self.state.resources.discards_left()
        );

        self.emit_resources();
        self.replace_selection();
        Ok(())
    }

    fn try_acknowledge(&mut self) -> Result<(), RejectReason> {
        if !self.busy {
            return Err(RejectReason::NotBusy);
        }
        self.busy = false;
        for card in self.pending_reveals.drain(..) {
            self.events.push(BattleEvent::CardRevealed {
                id: card.id,
                element: card.element,
                value: card.value,
            });
        }
        Ok(())
    }

    /// Draw a full hand into slots `0..cards_per_hand`.
    fn deal_hand(&mut self) {
        self.state.hand.clear();
        let drawn = self.draw_cards(self.config.cards_per_hand);
        let dealt: Vec<CardView> = drawn
            .into_iter()
            .enumerate()
            .map(|(slot, card)| self.state.hand.place(card, slot).view())
            .collect();

        tracing::debug!("Dealt {} cards", dealt.len());
        self.deal_out(dealt);
    }

    /// Move the selection to the discard pile and refill the freed slots.
    fn replace_selection(&mut self) {
        let taken = self.state.hand.take_selected();
        self.state.deck.send_to_discard(taken.iter().map(|c| c.card));
        self.events.push(BattleEvent::CardsDiscarded {
            ids: taken.iter().map(|c| c.id).collect(),
        });

        let drawn = self.draw_cards(taken.len());
        let dealt: Vec<CardView> = drawn
            .into_iter()
            .zip(&taken)
            .map(|(card, old)| self.state.hand.place(card, old.table_position).view())
            .collect();

        // Cards left the table even when nothing replaced them.
        self.busy = true;
        self.deal_out(dealt);
        self.emit_selection();
    }

    fn draw_cards(&mut self, n: usize) -> Vec<CardDefinition> {
        let recyclable = self.state.deck.discard_count();
        let reshuffles = self.state.deck.reshuffle_count();
        let drawn = self.state.deck.draw(n);
        if self.state.deck.reshuffle_count() != reshuffles {
            self.events.push(BattleEvent::DeckReshuffled { count: recyclable });
        }
        drawn
    }

    fn deal_out(&mut self, dealt: Vec<CardView>) {
        if !dealt.is_empty() {
            self.busy = true;
            self.events.push(BattleEvent::HandDrawn {
                cards: dealt.clone(),
            });
            self.pending_reveals.extend(dealt);
        }
        self.events.push(BattleEvent::DeckCountChanged {
            remaining: self.state.deck.remaining_count(),
            total: DECK_SIZE,
        });
    }

    fn end(&mut self, result: BattleResult) {
        self.state.status = result.into();
        tracing::info!("Battle ended: {:?}", result);
        self.events.push(BattleEvent::BattleEnded { result });
    }

    fn emit_selection(&mut self) {
        self.events.push(BattleEvent::SelectionChanged {
            selected: self.state.hand.selected_ids().to_vec(),
            preview: self.combo_preview(),
        });
    }

    fn emit_boss_health(&mut self) {
        self.events.push(BattleEvent::BossHealthChanged {
            current: self.state.boss.health(),
            max: self.state.boss.max_health(),
        });
    }

    fn emit_resources(&mut self) {
        self.events.push(BattleEvent::ResourceChanged {
            attacks_left: self.state.resources.attacks_left(),
            discards_left: self.state.resources.discards_left(),
        });
    }
}
