use crate::common::config::EaConfig;
use crate::common::enums::EaStateFlags;
use crate::state_log;
use std::fmt;

/// Runtime state of one EA, stored as a flag mask. The container owns
/// the mask; sharing it across threads is the embedding runtime's
/// concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EaState {
    flags: EaStateFlags,
}

impl EaState {
    /// A fresh EA starts enabled and active; every other flag is
    /// granted by the environment afterwards.
    pub fn new() -> Self {
        Self {
            flags: EaStateFlags::ENABLED | EaStateFlags::ACTIVE,
        }
    }

    pub fn from_config(config: &EaConfig) -> Self {
        Self {
            flags: config.initial_flags(),
        }
    }

    pub fn flags(&self) -> EaStateFlags {
        self.flags
    }

    pub fn has_flags(&self, flags: EaStateFlags) -> bool {
        self.flags.contains(flags)
    }

    pub fn add_flags(&mut self, flags: EaStateFlags) {
        self.flags.insert(flags);
    }

    pub fn remove_flags(&mut self, flags: EaStateFlags) {
        self.flags.remove(flags);
    }

    fn update(&mut self, flag: EaStateFlags, on: bool) {
        if self.flags.contains(flag) == on {
            return;
        }
        self.flags.set(flag, on);
        state_log!(
            info,
            "{} {} (state: {})",
            if on { "Set" } else { "Cleared" },
            flag,
            self.flags
        );
    }

    pub fn enable(&mut self) {
        self.update(EaStateFlags::ENABLED, true);
    }

    pub fn disable(&mut self) {
        self.update(EaStateFlags::ENABLED, false);
    }

    pub fn set_active(&mut self, active: bool) {
        self.update(EaStateFlags::ACTIVE, active);
    }

    pub fn set_connected(&mut self, connected: bool) {
        self.update(EaStateFlags::CONNECTED, connected);
    }

    pub fn set_libs_allowed(&mut self, allowed: bool) {
        self.update(EaStateFlags::LIBS_ALLOWED, allowed);
    }

    pub fn set_optimization(&mut self, optimization: bool) {
        self.update(EaStateFlags::OPTIMIZATION, optimization);
    }

    pub fn set_testing(&mut self, testing: bool) {
        self.update(EaStateFlags::TESTING, testing);
    }

    pub fn set_visual(&mut self, visual: bool) {
        self.update(EaStateFlags::TESTING_VISUAL, visual);
    }

    pub fn set_trade_allowed(&mut self, allowed: bool) {
        self.update(EaStateFlags::TRADE_ALLOWED, allowed);
    }

    pub fn is_enabled(&self) -> bool {
        self.flags.contains(EaStateFlags::ENABLED)
    }

    pub fn is_active(&self) -> bool {
        self.flags.contains(EaStateFlags::ACTIVE)
    }

    pub fn is_connected(&self) -> bool {
        self.flags.contains(EaStateFlags::CONNECTED)
    }

    pub fn is_libs_allowed(&self) -> bool {
        self.flags.contains(EaStateFlags::LIBS_ALLOWED)
    }

    pub fn is_optimization(&self) -> bool {
        self.flags.contains(EaStateFlags::OPTIMIZATION)
    }

    pub fn is_testing(&self) -> bool {
        self.flags.contains(EaStateFlags::TESTING)
    }

    pub fn is_visual(&self) -> bool {
        self.flags.contains(EaStateFlags::TESTING_VISUAL)
    }

    pub fn is_trade_allowed(&self) -> bool {
        self.flags.contains(EaStateFlags::TRADE_ALLOWED)
    }

    /// An EA may place orders only when it is active, enabled,
    /// connected and trading is permitted on the chart.
    pub fn can_trade(&self) -> bool {
        self.flags.contains(
            EaStateFlags::ACTIVE
                | EaStateFlags::ENABLED
                | EaStateFlags::CONNECTED
                | EaStateFlags::TRADE_ALLOWED,
        )
    }
}

impl fmt::Display for EaState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.flags)
    }
}
