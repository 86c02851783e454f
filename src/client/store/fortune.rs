//! Application state controller for the fortune page.
//!
//! The page is always in exactly one [`Phase`]. Work that completes asynchronously (narration
//! timers and the fortune request) carries the [`LoadingToken`] handed out when loading began,
//! and every transition it attempts is checked against the current generation. Leaving the
//! loading phase bumps the generation, so a timer or response that outlives its loading phase
//! is ignored instead of resurrecting the loading view.

use crate::model::fortune::{FortuneResult, LoadingState};

/// Notice shown once when the fortune request fails
pub const FAILURE_NOTICE: &str =
    "申し訳ありません。神々との通信に失敗しました。もう一度お試しください。";

/// One scheduled loading message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NarrationStep {
    /// Milliseconds after loading began
    pub delay_ms: u32,
    pub message: &'static str,
}

/// Loading narration, played from the moment loading begins
pub const NARRATION: [NarrationStep; 4] = [
    NarrationStep {
        delay_ms: 0,
        message: "星の配置と魂の記録を読み解いています...",
    },
    NarrationStep {
        delay_ms: 2500,
        message: "全156柱の神々から守護神を探しています...",
    },
    NarrationStep {
        delay_ms: 5000,
        message: "統計学と易学に基づき、80種の運命パターンを照合中...",
    },
    NarrationStep {
        delay_ms: 7500,
        message: "守護神の御姿を念写しています...（少々お待ちください）",
    },
];

/// Which view the page shows.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Phase {
    /// Input form
    #[default]
    Idle,
    /// Full-screen loading narration
    Loading,
    /// Rendered fortune
    Result(FortuneResult),
}

/// Proof that the holder was started by a particular loading phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadingToken(u64);

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FortuneStore {
    phase: Phase,
    loading: LoadingState,
    generation: u64,
    notice: Option<&'static str>,
}

impl FortuneStore {
    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn loading(&self) -> &LoadingState {
        &self.loading
    }

    pub fn notice(&self) -> Option<&'static str> {
        self.notice
    }

    pub fn result(&self) -> Option<&FortuneResult> {
        match &self.phase {
            Phase::Result(result) => Some(result),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, Phase::Loading)
    }

    /// Enters the loading phase.
    ///
    /// Only valid from [`Phase::Idle`]; returns `None` otherwise so a second submission can
    /// never start while one is pending.
    pub fn submit(&mut self) -> Option<LoadingToken> {
        if !matches!(self.phase, Phase::Idle) {
            return None;
        }

        self.generation += 1;
        self.phase = Phase::Loading;
        self.notice = None;
        self.loading = LoadingState {
            is_loading: true,
            message: NARRATION[0].message.to_string(),
        };

        Some(LoadingToken(self.generation))
    }

    /// Applies a scheduled narration message if `token` still owns the loading phase
    pub fn narrate(&mut self, token: LoadingToken, message: &str) -> bool {
        if !self.owns_loading(token) {
            return false;
        }

        self.loading.message = message.to_string();
        true
    }

    /// Finishes loading with a fortune
    pub fn succeed(&mut self, token: LoadingToken, result: FortuneResult) -> bool {
        if !self.owns_loading(token) {
            return false;
        }

        self.leave_loading(Phase::Result(result));
        true
    }

    /// Finishes loading with a failure, returning to the form with a notice
    pub fn fail(&mut self, token: LoadingToken) -> bool {
        if !self.owns_loading(token) {
            return false;
        }

        self.leave_loading(Phase::Idle);
        self.notice = Some(FAILURE_NOTICE);
        true
    }

    /// Drops the current fortune and returns to the form
    pub fn reset(&mut self) -> bool {
        if !matches!(self.phase, Phase::Result(_)) {
            return false;
        }

        self.phase = Phase::Idle;
        true
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    fn owns_loading(&self, token: LoadingToken) -> bool {
        matches!(self.phase, Phase::Loading) && token.0 == self.generation
    }

    fn leave_loading(&mut self, next: Phase) {
        self.generation += 1;
        self.loading = LoadingState::default();
        self.phase = next;
    }
}
