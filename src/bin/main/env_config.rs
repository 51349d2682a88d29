use std::{env, path::PathBuf, str::FromStr};

use carousel_core::controller::CarouselConfig;
use log::warn;

const DEFAULT_SETTINGS_PATH: &str = "carousel-settings.txt";
const DEFAULT_VIEWPORT_WIDTH_PX: u16 = 1_280;

pub(super) struct HostConfig {
    pub(super) carousel: CarouselConfig,
    pub(super) viewport_width_px: u16,
    pub(super) settings_path: PathBuf,
}

impl HostConfig {
    pub(super) fn from_env() -> Self {
        let defaults = CarouselConfig::default();
        let carousel = CarouselConfig {
            item_count: env_or("CAROUSEL_ITEMS", defaults.item_count).max(1),
            cycle_ms: env_or("CAROUSEL_CYCLE_MS", defaults.cycle_ms).max(1),
            ..defaults
        };

        Self {
            carousel,
            viewport_width_px: env_or("CAROUSEL_VIEWPORT_WIDTH", DEFAULT_VIEWPORT_WIDTH_PX),
            settings_path: env::var_os("CAROUSEL_SETTINGS_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_SETTINGS_PATH)),
        }
    }
}

fn env_or<T>(key: &str, default: T) -> T
where
    T: FromStr + Copy + core::fmt::Display,
{
    let Ok(raw) = env::var(key) else {
        return default;
    };

    match raw.trim().parse() {
        Ok(value) => value,
        Err(_) => {
            warn!("config: {}={:?} is not valid; using {}", key, raw, default);
            default
        }
    }
}
