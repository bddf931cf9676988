//! Rule table for the bowling scorer.
//!
//! Cross-cutting behaviour is composed from small named pieces rather
//! than nested closures: every non-terminal rule carries a pre-transition
//! guard that reroutes to [`FrameState::Finished`] once the last frame is
//! complete, and a post-effect hook that locks the machine there as soon
//! as the frame that just resolved was the last one.

use crate::bowling::scorecard::Scorecard;
use crate::bowling::state::FrameState;
use crate::core::Guard;
use crate::machine::{Rule, RuleTable};

/// Multiplier for a delivery with no bonus pending.
const SINGLE: u32 = 1;
/// Multiplier for a delivery covered by one bonus (spare or strike).
const DOUBLE: u32 = 2;
/// Multiplier for a delivery covered by two consecutive strikes.
const TRIPLE: u32 = 3;

/// Build the full rule table. Every [`FrameState`] is registered, so the
/// table is closed over all states any transition can resolve to.
pub(crate) fn rule_table() -> RuleTable<FrameState, u32, Scorecard> {
    let mut table = RuleTable::new();
    table.insert(
        FrameState::FirstDelivery,
        first_delivery_rule(
            SINGLE,
            FrameState::SecondDelivery,
            FrameState::FirstAfterStrike,
        ),
    );
    table.insert(
        FrameState::FirstAfterSpare,
        first_delivery_rule(
            DOUBLE,
            FrameState::SecondDelivery,
            FrameState::FirstAfterStrike,
        ),
    );
    table.insert(
        FrameState::FirstAfterStrike,
        first_delivery_rule(
            DOUBLE,
            FrameState::SecondAfterStrike,
            FrameState::FirstAfterDouble,
        ),
    );
    table.insert(
        FrameState::FirstAfterDouble,
        first_delivery_rule(
            TRIPLE,
            FrameState::SecondAfterStrike,
            FrameState::FirstAfterDouble,
        ),
    );
    table.insert(FrameState::SecondDelivery, second_delivery_rule(SINGLE));
    table.insert(FrameState::SecondAfterStrike, second_delivery_rule(DOUBLE));
    table.insert(FrameState::Finished, Rule::absorbing(FrameState::Finished));
    table
}

/// Condition shared by every non-terminal rule: the last frame is done.
fn game_over() -> Guard<Scorecard> {
    Guard::new(|card: &Scorecard| card.is_over())
}

fn first_delivery_rule(
    multiplier: u32,
    open: FrameState,
    strike: FrameState,
) -> Rule<FrameState, u32, Scorecard> {
    Rule::new(
        first_delivery_transition(open, strike),
        first_delivery_effect(multiplier),
    )
    .reroute_when(game_over(), FrameState::Finished)
    .force_when(game_over(), FrameState::Finished)
}

fn second_delivery_rule(multiplier: u32) -> Rule<FrameState, u32, Scorecard> {
    Rule::new(second_delivery_transition(), second_delivery_effect(multiplier))
        .reroute_when(game_over(), FrameState::Finished)
        .force_when(game_over(), FrameState::Finished)
}

/// A first delivery either leaves pins standing (`open`), clears the deck
/// (`strike`), or claims more pins than are standing (invalid).
fn first_delivery_transition(
    open: FrameState,
    strike: FrameState,
) -> impl Fn(&Scorecard, &u32) -> Option<FrameState> + Send + Sync {
    move |card: &Scorecard, pins: &u32| {
        if *pins < card.pins_per_frame() {
            Some(open.clone())
        } else if *pins == card.pins_per_frame() {
            Some(strike.clone())
        } else {
            None
        }
    }
}

/// A second delivery resolves the frame: open frame, spare, or invalid
/// when the frame total exceeds the pins that were standing. The total is
/// computed with checked arithmetic so an absurd pin count is rejected
/// instead of wrapping.
fn second_delivery_transition(
) -> impl Fn(&Scorecard, &u32) -> Option<FrameState> + Send + Sync {
    |card: &Scorecard, pins: &u32| {
        let frame_total = card.partial_frame().checked_add(*pins)?;
        if frame_total < card.pins_per_frame() {
            Some(FrameState::FirstDelivery)
        } else if frame_total == card.pins_per_frame() {
            Some(FrameState::FirstAfterSpare)
        } else {
            None
        }
    }
}

/// Credit the delivery, then either record the partial frame or close it
/// immediately on a strike.
fn first_delivery_effect(multiplier: u32) -> impl Fn(&mut Scorecard, &u32) + Send + Sync {
    move |card: &mut Scorecard, pins: &u32| {
        card.credit(*pins, multiplier);
        if *pins < card.pins_per_frame() {
            card.open_frame(*pins);
        } else {
            card.close_frame();
        }
    }
}

/// Credit the delivery and close the frame; a second delivery always
/// resolves it.
fn second_delivery_effect(multiplier: u32) -> impl Fn(&mut Scorecard, &u32) + Send + Sync {
    move |card: &mut Scorecard, pins: &u32| {
        card.credit(*pins, multiplier);
        card.close_frame();
    }
}
