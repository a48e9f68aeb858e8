//! Turn resolution for BattleSession

use rand::Rng;

use super::battle::{BattleSession, Phase};
use super::report::{Effect, PresentationEvent, TurnReport};
use crate::BattleError;
use crate::rules::{Outcome, apply_damage, check_outcome, compute_damage, heal};
use crate::types::{Action, Side};

/// Pick the opponent's action, uniformly among the three
pub fn choose_opponent_action<R: Rng + ?Sized>(rng: &mut R) -> Action {
    Action::ALL[rng.gen_range(0..Action::ALL.len())]
}

impl BattleSession {
    /// Resolve the player's action
    ///
    /// Only accepted during [`Phase::PlayerTurn`]; otherwise the session is
    /// left untouched and [`BattleError::InvalidState`] is returned.
    pub fn submit<R: Rng + ?Sized>(
        &mut self,
        action: Action,
        rng: &mut R,
    ) -> Result<TurnReport, BattleError> {
        self.expect_phase(Phase::PlayerTurn)?;
        Ok(self.resolve(Side::Player, action, rng))
    }

    /// Let the opponent pick and resolve its action
    ///
    /// Only accepted during [`Phase::OpponentTurn`].
    pub fn opponent_turn<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Result<TurnReport, BattleError> {
        self.expect_phase(Phase::OpponentTurn)?;
        let action = choose_opponent_action(rng);
        Ok(self.resolve(Side::Opponent, action, rng))
    }

    /// Resolve a fixed opponent action, for replays and scripted battles
    pub fn opponent_act<R: Rng + ?Sized>(
        &mut self,
        action: Action,
        rng: &mut R,
    ) -> Result<TurnReport, BattleError> {
        self.expect_phase(Phase::OpponentTurn)?;
        Ok(self.resolve(Side::Opponent, action, rng))
    }

    /// Resolve the player's action and, if the battle goes on, the
    /// opponent's reply right away
    pub fn resolve_round<R: Rng + ?Sized>(
        &mut self,
        action: Action,
        rng: &mut R,
    ) -> Result<Vec<TurnReport>, BattleError> {
        let mut reports = vec![self.submit(action, rng)?];
        if self.phase == Phase::OpponentTurn {
            reports.push(self.opponent_turn(rng)?);
        }
        Ok(reports)
    }

    fn expect_phase(&self, expected: Phase) -> Result<(), BattleError> {
        if self.phase != expected {
            return Err(BattleError::InvalidState { phase: self.phase });
        }
        Ok(())
    }

    fn resolve<R: Rng + ?Sized>(
        &mut self,
        actor: Side,
        action: Action,
        rng: &mut R,
    ) -> TurnReport {
        self.turn += 1;
        let target = if action.is_attack() { actor.other() } else { actor };

        let effect = if action.is_attack() {
            let damage = compute_damage(
                self.combatant(actor),
                self.combatant(target),
                action.is_special(),
            );
            apply_damage(self.combatant_mut(target), damage);
            Effect::Damage(damage)
        } else {
            let healed = heal(self.combatant_mut(actor), rng);
            if healed > 0.0 {
                Effect::Healed(healed)
            } else {
                Effect::Forfeited
            }
        };

        let log = self.describe(actor, action, effect);
        let outcome = check_outcome(&self.player, &self.opponent);

        tracing::debug!(
            turn = self.turn,
            actor = %actor,
            action = %action,
            effect = ?effect,
            player_hp = self.player.hp(),
            opponent_hp = self.opponent.hp(),
            "Turn resolved"
        );

        let mut events = vec![PresentationEvent::Log(log.clone()), self.hp_event(target)];

        self.phase = match (outcome, actor) {
            (Outcome::Ongoing, Side::Player) => {
                events.push(PresentationEvent::ControlsDisabled);
                events.push(PresentationEvent::OpponentTurnScheduled);
                Phase::OpponentTurn
            }
            (Outcome::Ongoing, Side::Opponent) => {
                events.push(PresentationEvent::ControlsEnabled);
                Phase::PlayerTurn
            }
            (outcome, _) => {
                tracing::info!(turn = self.turn, outcome = ?outcome, "Battle finished");
                events.push(PresentationEvent::MusicStopped);
                if let Some(side) = outcome.defeated() {
                    events.push(PresentationEvent::DefeatAnimation { side });
                }
                if let Some(message) = outcome.message() {
                    events.push(PresentationEvent::EndNotification {
                        message: message.to_string(),
                    });
                }
                Phase::Terminal(outcome)
            }
        };

        TurnReport {
            turn: self.turn,
            actor,
            action,
            effect,
            log,
            player_hp: self.player.hp(),
            opponent_hp: self.opponent.hp(),
            outcome,
            events,
        }
    }

    fn describe(&self, actor: Side, action: Action, effect: Effect) -> String {
        let name = &self.combatant(actor).name;
        match (action, effect) {
            (Action::Special, Effect::Damage(damage)) => {
                format!("{} used a special attack for {} damage!", name, damage)
            }
            (_, Effect::Damage(damage)) => format!(
                "{} attacked {} for {} damage!",
                name,
                self.combatant(actor.other()).name,
                damage
            ),
            (_, Effect::Healed(healed)) => {
                format!("{} healed and recovered {} HP!", name, healed)
            }
            (_, Effect::Forfeited) => format!(
                "{} cannot heal because its HP is already full! Turn forfeited.",
                name
            ),
        }
    }

    fn hp_event(&self, side: Side) -> PresentationEvent {
        let pokemon = self.combatant(side);
        PresentationEvent::HpChanged {
            side,
            hp: pokemon.hp(),
            max_hp: pokemon.max_hp(),
            band: pokemon.hp_band(),
        }
    }
}
