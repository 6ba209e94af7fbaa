//! Effect chain resolution.
//!
//! `ChainResolver` runs a chain to completion with an explicit work stack
//! instead of recursion. Every triggered step (a move, a card draw, a swap)
//! counts towards `GameConfig::max_chain_depth`; exceeding it aborts the turn
//! with `EngineError::ChainTooDeep`.
//!
//! Rules applied per step:
//! - `Advance`: clamp the new position to the board, then check the cell.
//! - `ResolveCell`: `Move` advances again, `DrawCard` draws, `Goal` ends the game.
//! - `DrawCard`: the card's `Move` advances, `SwapWithNext` swaps.
//! - `Swap`: exchange positions. Neither cell is checked afterwards.
//!
//! Once the game has ended nothing else in the chain is applied.

use smallvec::{smallvec, SmallVec};

use crate::board::SpecialEffect;
use crate::cards::CardAction;
use crate::core::{ConfigError, EngineError, GameConfig, GameRng, GameState, PlayerId};
use crate::events::{GameEvent, GameObserver};

use super::ChainStep;

/// Everything a chain reads or mutates.
pub struct ResolverContext<'a> {
    pub config: &'a GameConfig,
    pub state: &'a mut GameState,
    pub rng: &'a mut GameRng,
    pub observer: &'a mut dyn GameObserver,
}

impl<'a> ResolverContext<'a> {
    fn emit(&mut self, event: GameEvent) {
        self.observer.log(&event);
    }

    fn render(&mut self) {
        self.observer.render(&*self.state, self.config);
    }

    fn name(&self, player: PlayerId) -> String {
        self.state.player(player).name.clone()
    }
}

/// Summary of a resolved chain.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChainReport {
    /// Triggered steps resolved, including the first one.
    pub depth: usize,
    /// Whether the chain ended the game.
    pub finished: bool,
}

/// Resolves effect chains on game state.
pub struct ChainResolver;

impl ChainResolver {
    /// Run a chain starting from `first` until nothing is left to resolve.
    pub fn resolve(ctx: &mut ResolverContext, first: ChainStep) -> Result<ChainReport, EngineError> {
        let config = ctx.config;
        let limit = config.max_chain_depth;
        let mut pending: SmallVec<[ChainStep; 4]> = smallvec![first];
        let mut depth = 0;
        let mut finished = false;

        while let Some(step) = pending.pop() {
            if ctx.state.ended {
                log::debug!("game over, dropping {:?}", step);
                break;
            }

            if step.is_triggered() {
                depth += 1;
                if depth > limit {
                    let player = step.player();
                    let name = ctx.name(player);
                    ctx.emit(GameEvent::ChainAborted { player, name, limit });
                    return Err(EngineError::ChainTooDeep {
                        player,
                        limit,
                        position: ctx.state.player(player).position,
                    });
                }
            }

            log::trace!("resolving {:?} (depth {})", step, depth);

            match step {
                ChainStep::Advance { player, steps } => {
                    let from = ctx.state.player(player).position;
                    let to = config.board.offset(from, steps);
                    ctx.state.player_mut(player).position = to;

                    let name = ctx.name(player);
                    ctx.emit(GameEvent::Moved { player, name, from, to });
                    ctx.render();

                    pending.push(ChainStep::ResolveCell { player });
                }

                ChainStep::ResolveCell { player } => {
                    let position = ctx.state.player(player).position;
                    let Some(special) = config.board.special_at(position) else {
                        continue;
                    };

                    let name = ctx.name(player);
                    ctx.emit(GameEvent::Landed {
                        player,
                        name: name.clone(),
                        position,
                        label: special.text.clone(),
                    });

                    match special.effect {
                        SpecialEffect::Move { value } => {
                            pending.push(ChainStep::Advance { player, steps: value });
                        }
                        SpecialEffect::DrawCard { card } => {
                            pending.push(ChainStep::DrawCard { player, card });
                        }
                        SpecialEffect::Goal => {
                            ctx.state.finish(player);
                            finished = true;
                            ctx.emit(GameEvent::Won { player, name });
                            ctx.render();
                        }
                    }
                }

                ChainStep::DrawCard { player, card } => {
                    let deck = &config.cards;
                    let id = match card {
                        Some(id) => id,
                        None => deck.draw_random(ctx.rng).ok_or(ConfigError::EmptyDeck {
                            position: ctx.state.player(player).position,
                        })?,
                    };
                    let drawn = deck.get(id).ok_or(ConfigError::UnknownCard {
                        position: ctx.state.player(player).position,
                        card: id.index(),
                        count: deck.len(),
                    })?;

                    let name = ctx.name(player);
                    ctx.emit(GameEvent::CardDrawn {
                        player,
                        name,
                        card: id,
                        text: drawn.text.clone(),
                    });

                    match drawn.action {
                        CardAction::Move { value } => {
                            pending.push(ChainStep::Advance { player, steps: value });
                        }
                        CardAction::SwapWithNext => {
                            let other = player.next(ctx.state.player_count());
                            pending.push(ChainStep::Swap { player, other });
                        }
                    }
                }

                ChainStep::Swap { player, other } => {
                    ctx.state.swap_positions(player, other);

                    let name = ctx.name(player);
                    let other_name = ctx.name(other);
                    ctx.emit(GameEvent::Swapped { player, name, other, other_name });
                    ctx.render();
                }
            }
        }

        Ok(ChainReport { depth, finished })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Special;
    use crate::cards::{Card, CardId};
    use crate::events::EventLog;

    fn run(
        config: &GameConfig,
        state: &mut GameState,
        log: &mut EventLog,
        first: ChainStep,
    ) -> Result<ChainReport, EngineError> {
        let mut rng = GameRng::new(42);
        let mut ctx = ResolverContext {
            config,
            state,
            rng: &mut rng,
            observer: log,
        };
        ChainResolver::resolve(&mut ctx, first)
    }

    fn base() -> GameConfig {
        GameConfig::new(100)
            .with_player("Blue", "#0ea5e9")
            .with_player("Red", "#ef4444")
    }

    const BLUE: PlayerId = PlayerId::new(0);
    const RED: PlayerId = PlayerId::new(1);

    #[test]
    fn test_plain_move() {
        let config = base();
        let mut state = GameState::new(&config);
        let mut log = EventLog::new();

        let report = run(&config, &mut state, &mut log, ChainStep::Advance { player: BLUE, steps: 4 }).unwrap();

        assert_eq!(state.player(BLUE).position, 4);
        assert_eq!(report, ChainReport { depth: 1, finished: false });
        assert_eq!(log.messages(), vec!["Blue moves from 0 → 4"]);
        assert_eq!(log.render_count(), 1);
    }

    #[test]
    fn test_ladder_chain() {
        let config = base()
            .with_special(3, Special::shift("Ladder", 10))
            .with_special(13, Special::shift("Hole", -5));
        let mut state = GameState::new(&config);
        let mut log = EventLog::new();

        let report = run(&config, &mut state, &mut log, ChainStep::Advance { player: BLUE, steps: 3 }).unwrap();

        assert_eq!(state.player(BLUE).position, 8);
        assert_eq!(report.depth, 3);
        assert_eq!(
            log.messages(),
            vec![
                "Blue moves from 0 → 3",
                "Blue landed on Ladder",
                "Blue moves from 3 → 13",
                "Blue landed on Hole",
                "Blue moves from 13 → 8",
            ]
        );
    }

    #[test]
    fn test_fixed_card_move() {
        let config = base()
            .with_card(Card::advance("Advance 5", 5))
            .with_card(Card::advance("Go back 3", -3))
            .with_special(7, Special::card("Draw", CardId::new(1)));
        let mut state = GameState::new(&config);
        let mut log = EventLog::new();

        run(&config, &mut state, &mut log, ChainStep::Advance { player: RED, steps: 7 }).unwrap();

        assert_eq!(state.player(RED).position, 4);
        assert!(log.messages().contains(&"Red drew: Go back 3".to_string()));
    }

    #[test]
    fn test_swap_card_does_not_recheck_goal() {
        let config = base()
            .with_card(Card::swap("Swap with next player"))
            .with_special(5, Special::card("Draw", CardId::new(0)))
            .with_special(99, Special::goal("Finish!"));
        let mut state = GameState::new(&config);
        state.player_mut(RED).position = 99;
        let mut log = EventLog::new();

        run(&config, &mut state, &mut log, ChainStep::Advance { player: BLUE, steps: 5 }).unwrap();

        assert_eq!(state.player(BLUE).position, 99);
        assert_eq!(state.player(RED).position, 5);
        assert!(!state.ended);
        assert_eq!(log.messages().last().unwrap(), "Blue swapped with Red");
    }

    #[test]
    fn test_goal_ends_chain() {
        let config = base().with_special(10, Special::goal("Finish!"));
        let mut state = GameState::new(&config);
        let mut log = EventLog::new();

        let report = run(&config, &mut state, &mut log, ChainStep::Advance { player: BLUE, steps: 10 }).unwrap();

        assert!(report.finished);
        assert!(state.ended);
        assert_eq!(state.winner, Some(BLUE));
        assert_eq!(log.messages().last().unwrap(), "Blue wins the game!");
    }

    #[test]
    fn test_nothing_applies_after_end() {
        let config = base();
        let mut state = GameState::new(&config);
        state.finish(RED);
        let mut log = EventLog::new();

        let report = run(&config, &mut state, &mut log, ChainStep::Advance { player: BLUE, steps: 4 }).unwrap();

        assert_eq!(report.depth, 0);
        assert_eq!(state.player(BLUE).position, 0);
        assert!(log.is_empty());
    }

    #[test]
    fn test_depth_limit() {
        // Card cycle: 10 draws "go back 5", 5 draws "advance 5"
        let config = base()
            .with_card(Card::advance("Advance 5", 5))
            .with_card(Card::advance("Go back 5", -5))
            .with_special(5, Special::card("Forward", CardId::new(0)))
            .with_special(10, Special::card("Back", CardId::new(1)))
            .with_max_chain_depth(16);
        let mut state = GameState::new(&config);
        let mut log = EventLog::new();

        let result = run(&config, &mut state, &mut log, ChainStep::Advance { player: BLUE, steps: 5 });

        assert!(matches!(
            result,
            Err(EngineError::ChainTooDeep { player, limit: 16, .. }) if player == BLUE
        ));
        assert!(matches!(log.events().last(), Some(GameEvent::ChainAborted { .. })));
    }

    #[test]
    fn test_random_card_draw() {
        let config = base()
            .with_card(Card::advance("Advance 1", 1))
            .with_card(Card::advance("Advance 2", 2))
            .with_special(20, Special::random_card("Draw a card"));
        let mut state = GameState::new(&config);
        let mut log = EventLog::new();

        run(&config, &mut state, &mut log, ChainStep::Advance { player: BLUE, steps: 20 }).unwrap();

        let position = state.player(BLUE).position;
        assert!(position == 21 || position == 22);
        assert!(log
            .events()
            .iter()
            .any(|e| matches!(e, GameEvent::CardDrawn { .. })));
    }
}
