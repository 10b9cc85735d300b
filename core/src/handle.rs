//! Cloneable handle over one engine.
//!
//! The bet panel and the animation completion callback each hold a
//! [`SharedWheel`]; every method takes the lock for exactly one engine
//! operation.

use alloc::sync::Arc;

use luckywheel_abi::{BetMap, GameResult, Label, RoundPhase, RoundResult};
use spin::Mutex;

use crate::engine::{RoundEngine, WheelEvent, WheelReply};
use crate::spin_plan::SpinPlan;

#[derive(Clone)]
pub struct SharedWheel {
    inner: Arc<Mutex<RoundEngine>>,
}

impl SharedWheel {
    pub fn new(engine: RoundEngine) -> Self {
        Self {
            inner: Arc::new(Mutex::new(engine)),
        }
    }

    /// Run `f` with the engine locked.
    pub fn with<R>(&self, f: impl FnOnce(&mut RoundEngine) -> R) -> R {
        let mut engine = self.inner.lock();
        f(&mut engine)
    }

    pub fn handle(&self, event: WheelEvent) -> GameResult<WheelReply> {
        self.inner.lock().handle(event)
    }

    pub fn place_bet(&self, label: Label) -> GameResult {
        self.inner.lock().place_bet(label)
    }

    pub fn reset_bets(&self) -> GameResult<u64> {
        self.inner.lock().reset_bets()
    }

    pub fn spin(&self) -> GameResult<SpinPlan> {
        self.inner.lock().spin()
    }

    pub fn on_spin_complete(&self, final_angle: f64) -> GameResult<RoundResult> {
        self.inner.lock().on_spin_complete(final_angle)
    }

    pub fn balance(&self) -> u64 {
        self.inner.lock().balance()
    }

    pub fn win_streak(&self) -> u32 {
        self.inner.lock().win_streak()
    }

    pub fn phase(&self) -> RoundPhase {
        self.inner.lock().phase()
    }

    pub fn bets(&self) -> BetMap {
        *self.inner.lock().bets()
    }

    pub fn last_result(&self) -> Option<RoundResult> {
        self.inner.lock().last_result().copied()
    }

    /// Number of live handles.
    pub fn handle_count(&self) -> usize {
        Arc::strong_count(&self.inner)
    }
}
