use carousel_core::settings::{PersistedSettings, SettingsStore};
use log::{info, warn};

use super::SETTINGS_SAVE_DEBOUNCE_MS;

pub(super) struct SettingsSyncState {
    last_saved: PersistedSettings,
    pending: Option<(PersistedSettings, u64)>,
}

impl SettingsSyncState {
    pub(super) fn new(initial: PersistedSettings) -> Self {
        Self {
            last_saved: initial,
            pending: None,
        }
    }

    pub(super) fn track_current(&mut self, current: PersistedSettings, now_ms: u64) {
        if current == self.last_saved {
            self.pending = None;
            return;
        }

        match self.pending.as_mut() {
            Some((pending, changed_at_ms)) => {
                if *pending != current {
                    *pending = current;
                    *changed_at_ms = now_ms;
                }
            }
            None => {
                self.pending = Some((current, now_ms));
            }
        }
    }

    pub(super) fn flush_if_due<S: SettingsStore>(&mut self, store: &mut S, now_ms: u64)
    where
        S::Error: core::fmt::Debug,
    {
        let Some((candidate, changed_at_ms)) = self.pending else {
            return;
        };

        if now_ms.saturating_sub(changed_at_ms) < SETTINGS_SAVE_DEBOUNCE_MS {
            return;
        }

        self.save(store, candidate, now_ms);
    }

    /// Save any pending change immediately, ignoring the debounce window.
    pub(super) fn flush_now<S: SettingsStore>(&mut self, store: &mut S, now_ms: u64)
    where
        S::Error: core::fmt::Debug,
    {
        if let Some((candidate, _)) = self.pending {
            self.save(store, candidate, now_ms);
        }
    }

    fn save<S: SettingsStore>(&mut self, store: &mut S, candidate: PersistedSettings, now_ms: u64)
    where
        S::Error: core::fmt::Debug,
    {
        match store.save(&candidate) {
            Ok(()) => {
                info!("settings: saved theme={}", candidate.theme.as_str());
                self.last_saved = candidate;
                self.pending = None;
            }
            Err(err) => {
                // Keep the change pending and retry after another debounce window.
                warn!("settings: save failed: {:?}", err);
                self.pending = Some((candidate, now_ms));
            }
        }
    }
}
