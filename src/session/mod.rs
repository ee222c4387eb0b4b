//! Session behavior: table selection and departure timing.
//!
//! Both functions are pure in the profile and situational inputs;
//! `should_leave_table` additionally draws from the injected random
//! source for its tilt/break/win-lock rolls. Draws are lazy — a roll is
//! only taken when its branch's deterministic guard passes — so scripted
//! sources map 1:1 onto branch evaluation.

use serde::{Deserialize, Serialize};

use crate::personality::PersonalityProfile;
use crate::random::RandomSource;

/// A losing streak deeper than this (in big blinds) can trigger a tilt
/// exit.
const TILT_LOSS_BB: f64 = -3.0;

/// A win bigger than this (in big blinds) can get locked up.
const WIN_LOCK_BB: f64 = 5.0;

/// Probability of banking a big win and leaving.
const WIN_LOCK_CHANCE: f64 = 0.1;

/// Tables with this many players are worth joining.
const IDEAL_PLAYERS: std::ops::RangeInclusive<usize> = 4..=8;

/// Caller-supplied snapshot of the running session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionState {
    pub minutes_played: u32,
    /// Net stack movement since sit-down, in big blinds
    pub stack_change_bb: f64,
    pub hands_played: u32,
}

/// Why a sit decision came out the way it did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SitReason {
    GoodFit,
    StakesOutsideComfortZone,
    OffHours,
    TableConditionsNotIdeal,
}

impl std::fmt::Display for SitReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SitReason::GoodFit => write!(f, "Good fit for stake and time preference"),
            SitReason::StakesOutsideComfortZone => write!(f, "Stakes outside comfort zone"),
            SitReason::OffHours => write!(f, "Not preferred playing hours"),
            SitReason::TableConditionsNotIdeal => write!(f, "Table conditions not ideal"),
        }
    }
}

/// A sit decision with its itemized inputs, for observability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SitDecision {
    pub should_sit: bool,
    pub stakes_match: bool,
    pub hour_match: bool,
    pub player_count_ideal: bool,
    pub reason: SitReason,
}

/// Why a leave decision came out the way it did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaveReason {
    SessionLengthReached,
    Tilting,
    TakingBreak,
    LockingUpWin,
    Continuing,
}

impl std::fmt::Display for LeaveReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LeaveReason::SessionLengthReached => write!(f, "Session length reached"),
            LeaveReason::Tilting => write!(f, "Tilting - taking a break"),
            LeaveReason::TakingBreak => write!(f, "Taking a break"),
            LeaveReason::LockingUpWin => write!(f, "Locking up a win"),
            LeaveReason::Continuing => write!(f, "Continuing session"),
        }
    }
}

/// A leave decision and its reason.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveDecision {
    pub should_leave: bool,
    pub reason: LeaveReason,
}

/// Whether the entity would sit at a table.
///
/// Sits iff the big blind falls in its stakes band, `hour` (0-23) is in
/// its preferred set, and the table has 4-8 players or is empty.
pub fn should_sit_at_table(
    profile: &PersonalityProfile,
    big_blind: i64,
    current_players: usize,
    hour: u32,
) -> SitDecision {
    let stakes_match = profile.stakes_preference.covers(big_blind);
    let hour_match = profile.session_profile.preferred_hours.contains(&hour);
    let player_count_ideal = IDEAL_PLAYERS.contains(&current_players);

    let should_sit = stakes_match && hour_match && (player_count_ideal || current_players == 0);

    let reason = if should_sit {
        SitReason::GoodFit
    } else if !stakes_match {
        SitReason::StakesOutsideComfortZone
    } else if !hour_match {
        SitReason::OffHours
    } else {
        SitReason::TableConditionsNotIdeal
    };

    SitDecision {
        should_sit,
        stakes_match,
        hour_match,
        player_count_ideal,
        reason,
    }
}

/// Whether the entity leaves the table now.
///
/// Checks run in fixed priority order; the first that fires wins:
/// 1. Session length reached (deterministic cutoff).
/// 2. Tilt exit: down more than 3 big blinds, probability = tilt factor.
/// 3. Random break: probability = `break_frequency / 100`.
/// 4. Win lock: up more than 5 big blinds, 10% probability.
pub fn should_leave_table(
    profile: &PersonalityProfile,
    session: &SessionState,
    rng: &mut impl RandomSource,
) -> LeaveDecision {
    if session.minutes_played >= profile.session_profile.avg_session_minutes {
        return LeaveDecision {
            should_leave: true,
            reason: LeaveReason::SessionLengthReached,
        };
    }

    if session.stack_change_bb < TILT_LOSS_BB && rng.roll_bool(profile.tilt_factor) {
        return LeaveDecision {
            should_leave: true,
            reason: LeaveReason::Tilting,
        };
    }

    if rng.roll_bool(profile.session_profile.break_frequency / 100.0) {
        return LeaveDecision {
            should_leave: true,
            reason: LeaveReason::TakingBreak,
        };
    }

    if session.stack_change_bb > WIN_LOCK_BB && rng.roll_bool(WIN_LOCK_CHANCE) {
        return LeaveDecision {
            should_leave: true,
            reason: LeaveReason::LockingUpWin,
        };
    }

    LeaveDecision {
        should_leave: false,
        reason: LeaveReason::Continuing,
    }
}
