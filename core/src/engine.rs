//! Round state machine.
//!
//! ```text
//!   Idle ──place_bet──▶ AcceptingBets ──spin──▶ Spinning
//!                          ▲      │                 │
//!                          │      └─place/reset─┘   │ on_spin_complete
//!                          └──────── Resolved ◀─────┘
//! ```
//!
//! The engine runs only in response to two kinds of input: player actions
//! (bet, reset, spin) and the single completion report the presentation layer
//! sends when the wheel animation stops. `Spinning` is the lock: while it is
//! set, every mutating call is refused with `RoundInProgress`, and resolution
//! runs at most once per spin.

use alloc::boxed::Box;

use luckywheel_abi::{
    BetMap, GameError, GameResult, GrowthReason, HistoryRecord, Label, RoundPhase, RoundResult,
};
use luckywheel_lib::{ClockFn, klog_debug, klog_info, klog_warn, uptime_ms};

use crate::config::WheelConfig;
use crate::ledger::{GameLedger, GrowthLog, History};
use crate::payout;
use crate::resolver::{self, normalize_angle};
use crate::sectors::SectorTable;
use crate::spin_plan::{RandomSpinPlanner, SpinPlan, SpinPlanner};

/// Message form of every engine input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WheelEvent {
    PlaceBet(Label),
    ResetBets,
    Spin,
    SpinComplete { final_angle: f64 },
}

/// Reply to a [`WheelEvent`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WheelReply {
    BetPlaced { label: Label, units: u32, balance: u64 },
    BetsReset { refunded: u64 },
    SpinStarted(SpinPlan),
    RoundSettled(RoundResult),
}

pub struct RoundEngine {
    config: WheelConfig,
    sectors: SectorTable,
    ledger: GameLedger,
    bets: BetMap,
    phase: RoundPhase,
    /// Wheel rotation in `[0, 360)` where the last spin stopped
    rotation: f64,
    pending: Option<SpinPlan>,
    last_result: Option<RoundResult>,
    planner: Box<dyn SpinPlanner>,
    clock: ClockFn,
    rounds_played: u64,
}

impl RoundEngine {
    pub fn new(config: WheelConfig) -> Self {
        Self::with_sectors(config, SectorTable::standard())
    }

    /// Engine over a custom wheel. Out-of-range config values are replaced by
    /// their defaults and the configured log level is pushed into klog.
    pub fn with_sectors(config: WheelConfig, sectors: SectorTable) -> Self {
        let config = config.validated();
        config.apply_logging();
        klog_debug!(
            "wheel: new engine, balance {} stake {} sectors {}",
            config.starting_balance,
            config.unit_stake,
            sectors.sector_count()
        );
        Self {
            ledger: GameLedger::new(config.starting_balance, config.growth_log_capacity),
            planner: Box::new(RandomSpinPlanner::from_config(&config)),
            config,
            sectors,
            bets: BetMap::new(),
            phase: RoundPhase::Idle,
            rotation: 0.0,
            pending: None,
            last_result: None,
            clock: uptime_ms,
            rounds_played: 0,
        }
    }

    /// Replace the planner used by [`spin`](Self::spin).
    pub fn with_planner(mut self, planner: impl SpinPlanner + 'static) -> Self {
        self.planner = Box::new(planner);
        self
    }

    /// Replace the clock used to timestamp history records.
    pub fn with_clock(mut self, clock: ClockFn) -> Self {
        self.clock = clock;
        self
    }

    // ---------------------------------------------------------------------
    // Player actions
    // ---------------------------------------------------------------------

    /// Stake one unit on `label`.
    pub fn place_bet(&mut self, label: Label) -> GameResult {
        if self.phase.is_spinning() {
            klog_debug!("wheel: bet on {} refused, spin in flight", label);
            return Err(GameError::RoundInProgress);
        }
        if let Err(err) = self
            .ledger
            .debit(self.config.unit_stake, GrowthReason::BetPlaced(label))
        {
            klog_warn!("wheel: bet on {} refused: {}", label, err);
            return Err(err);
        }
        self.bets.add_unit(label);
        self.phase = RoundPhase::AcceptingBets;
        klog_debug!(
            "wheel: bet on {} ({} units), balance {}",
            label,
            self.bets.units(label),
            self.ledger.balance()
        );
        Ok(())
    }

    /// Refund every staked unit and clear the bet map. Returns the amount
    /// refunded.
    pub fn reset_bets(&mut self) -> GameResult<u64> {
        if self.phase.is_spinning() {
            klog_debug!("wheel: reset refused, spin in flight");
            return Err(GameError::RoundInProgress);
        }
        let refunded = self.total_staked();
        self.ledger.credit(refunded, GrowthReason::BetsRefunded);
        self.bets.clear();
        if self.phase != RoundPhase::Idle {
            self.phase = RoundPhase::AcceptingBets;
        }
        klog_debug!("wheel: bets reset, refunded {}", refunded);
        Ok(refunded)
    }

    /// Lock betting and start a spin with the engine's own planner.
    pub fn spin(&mut self) -> GameResult<SpinPlan> {
        self.check_can_spin()?;
        let plan = self.planner.plan(self.rotation);
        Ok(self.begin_spin(plan))
    }

    /// Lock betting and start a spin with a caller-supplied planner.
    pub fn spin_with<P: SpinPlanner + ?Sized>(&mut self, planner: &mut P) -> GameResult<SpinPlan> {
        self.check_can_spin()?;
        let plan = planner.plan(self.rotation);
        Ok(self.begin_spin(plan))
    }

    fn check_can_spin(&self) -> GameResult {
        if self.phase.is_spinning() {
            klog_debug!("wheel: spin refused, already spinning");
            return Err(GameError::RoundInProgress);
        }
        if self.bets.is_empty() {
            klog_warn!("wheel: spin refused, no bets placed");
            return Err(GameError::NoBetsPlaced);
        }
        Ok(())
    }

    fn begin_spin(&mut self, plan: SpinPlan) -> SpinPlan {
        self.phase = RoundPhase::Spinning;
        self.pending = Some(plan);
        klog_info!(
            "wheel: spinning, staked {} from {:.2} to {:.2} over {} ms",
            self.total_staked(),
            plan.start_angle,
            plan.final_angle,
            plan.duration_ms
        );
        plan
    }

    // ---------------------------------------------------------------------
    // Resolution
    // ---------------------------------------------------------------------

    /// Settle the in-flight spin at the angle the wheel actually stopped on.
    pub fn on_spin_complete(&mut self, final_angle: f64) -> GameResult<RoundResult> {
        if !self.phase.is_spinning() {
            klog_warn!("wheel: completion at {:.2} with no spin in flight", final_angle);
            return Err(GameError::NoSpinInFlight);
        }

        let landing = resolver::resolve(&self.sectors, final_angle);
        let streak = self.ledger.win_streak();
        let payout = payout::calculate(&self.bets, landing.label, streak, self.config.unit_stake);
        self.phase = RoundPhase::Resolved;

        if payout.is_win {
            self.ledger
                .credit(payout.credit(), GrowthReason::RoundWon(landing.label));
            self.ledger.record_win();
        } else {
            self.ledger.record_loss();
        }

        let result = RoundResult {
            outcome: landing.label,
            sector_index: landing.index,
            total_staked: payout.total_staked,
            is_win: payout.is_win,
            win_amount: payout.win_amount,
            effective_multiplier: payout.effective_multiplier,
            bets: self.bets,
        };
        self.ledger.push_history(HistoryRecord {
            timestamp_ms: (self.clock)(),
            result,
        });

        self.bets.clear();
        self.rotation = normalize_angle(final_angle);
        self.pending = None;
        self.last_result = Some(result);
        self.rounds_played += 1;
        self.phase = RoundPhase::AcceptingBets;

        klog_info!(
            "wheel: round {} landed on {} (sector {}), {} {}, balance {}, streak {}",
            self.rounds_played,
            result.outcome,
            result.sector_index,
            if result.is_win { "won" } else { "lost" },
            result.win_amount.unsigned_abs(),
            self.ledger.balance(),
            self.ledger.win_streak()
        );
        Ok(result)
    }

    /// Dispatch one input message.
    pub fn handle(&mut self, event: WheelEvent) -> GameResult<WheelReply> {
        match event {
            WheelEvent::PlaceBet(label) => {
                self.place_bet(label)?;
                Ok(WheelReply::BetPlaced {
                    label,
                    units: self.bets.units(label),
                    balance: self.ledger.balance(),
                })
            }
            WheelEvent::ResetBets => {
                let refunded = self.reset_bets()?;
                Ok(WheelReply::BetsReset { refunded })
            }
            WheelEvent::Spin => self.spin().map(WheelReply::SpinStarted),
            WheelEvent::SpinComplete { final_angle } => {
                self.on_spin_complete(final_angle).map(WheelReply::RoundSettled)
            }
        }
    }

    // ---------------------------------------------------------------------
    // Ledger maintenance
    // ---------------------------------------------------------------------

    /// Overwrite the balance (top-ups, debug tools). Logged as `Adjusted`.
    pub fn set_balance(&mut self, balance: u64) -> GameResult {
        if self.phase.is_spinning() {
            return Err(GameError::RoundInProgress);
        }
        if let Some(entry) = self.ledger.set_balance(balance, Some(GrowthReason::Adjusted)) {
            klog_info!(
                "wheel: balance adjusted {} -> {}",
                entry.previous_balance,
                entry.balance
            );
        }
        Ok(())
    }

    pub fn clear_history(&mut self) {
        self.ledger.clear_history();
    }

    // ---------------------------------------------------------------------
    // Observers
    // ---------------------------------------------------------------------

    #[inline]
    pub fn balance(&self) -> u64 {
        self.ledger.balance()
    }

    #[inline]
    pub fn win_streak(&self) -> u32 {
        self.ledger.win_streak()
    }

    #[inline]
    pub fn best_win_streak(&self) -> u32 {
        self.ledger.best_win_streak()
    }

    #[inline]
    pub fn level(&self) -> u32 {
        self.ledger.level()
    }

    #[inline]
    pub fn history(&self) -> &History {
        self.ledger.history()
    }

    #[inline]
    pub fn growth_log(&self) -> &GrowthLog {
        self.ledger.growth_log()
    }

    #[inline]
    pub fn ledger(&self) -> &GameLedger {
        &self.ledger
    }

    #[inline]
    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    #[inline]
    pub fn bets(&self) -> &BetMap {
        &self.bets
    }

    #[inline]
    pub fn total_staked(&self) -> u64 {
        self.bets.total_staked(self.config.unit_stake)
    }

    #[inline]
    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    #[inline]
    pub fn pending_plan(&self) -> Option<&SpinPlan> {
        self.pending.as_ref()
    }

    #[inline]
    pub fn last_result(&self) -> Option<&RoundResult> {
        self.last_result.as_ref()
    }

    #[inline]
    pub fn rounds_played(&self) -> u64 {
        self.rounds_played
    }

    #[inline]
    pub fn sectors(&self) -> &SectorTable {
        &self.sectors
    }

    #[inline]
    pub fn config(&self) -> &WheelConfig {
        &self.config
    }
}
