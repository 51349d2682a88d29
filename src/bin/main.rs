use std::{cell::RefCell, io};

use carousel_core::{
    controller::{CarouselController, TickResult},
    settings::{PersistedSettings, SettingsStore},
};
use carousel_host::{
    animation::LogAnimator,
    input::queue::{InputQueue, QueuedInput},
    render::terminal::TerminalView,
    storage::file_settings::FileSettingsStore,
};
use embassy_executor::Spawner;
use embassy_time::{Duration, Instant, Timer};
use log::{info, warn};

use env_config::HostConfig;
use settings_sync::SettingsSyncState;

#[path = "main/command_feed.rs"]
mod command_feed;
#[path = "main/env_config.rs"]
mod env_config;
#[path = "main/settings_sync.rs"]
mod settings_sync;

// One controller tick per display frame.
const FRAME_INTERVAL_MS: u64 = 16;
const SETTINGS_POLL_INTERVAL_MS: u64 = 250;
const SETTINGS_SAVE_DEBOUNCE_MS: u64 = 1_500;
const REPORT_INTERVAL_SECS: u64 = 30;

static INPUT_QUEUE: InputQueue = InputQueue::new();

fn load_settings(store: &mut FileSettingsStore) -> PersistedSettings {
    match store.load() {
        Ok(Some(settings)) => {
            info!(
                "settings restored from {} theme={}",
                store.path().display(),
                settings.theme.as_str()
            );
            return settings;
        }
        Ok(None) => info!("no saved settings at {}", store.path().display()),
        Err(err) => warn!(
            "failed to read settings at {}: {:?}; using defaults",
            store.path().display(),
            err
        ),
    }

    let defaults = PersistedSettings::default();
    if let Err(err) = store.save(&defaults) {
        warn!("failed to write default settings: {:?}", err);
    }
    defaults
}

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let host = HostConfig::from_env();
    let mut settings_store = FileSettingsStore::new(&host.settings_path);
    let settings = load_settings(&mut settings_store);

    let loop_start = Instant::now();
    let app = RefCell::new(CarouselController::new(
        TerminalView::new(host.carousel.item_count),
        LogAnimator::new(),
        QueuedInput::new(&INPUT_QUEUE),
        host.carousel,
        host.viewport_width_px,
        settings.theme,
        loop_start.elapsed().as_millis(),
    ));
    let settings_sync = RefCell::new(SettingsSyncState::new(settings));

    info!(
        "carousel ready: items={} cycle_ms={} viewport_width={} settings={}",
        host.carousel.item_count,
        host.carousel.cycle_ms,
        host.viewport_width_px,
        host.settings_path.display()
    );
    info!(
        "commands: click N | dot N | prev | next | play | enter N | leave N | touch X | release X | swipe DX | resize W | theme | wait MS | quit"
    );
    command_feed::spawn(&INPUT_QUEUE);

    let ui_future = async {
        let mut render_fault_logged = false;
        let mut report_start = Instant::now();
        let mut report_cycles = 0u64;

        while !INPUT_QUEUE.quit_requested() {
            let now_ms = loop_start.elapsed().as_millis();
            {
                let mut app = app.borrow_mut();
                if app.tick(now_ms) == TickResult::RenderRequested
                    && let Err(err) = app.view_mut().flush(&mut io::stdout().lock())
                    && !render_fault_logged
                {
                    warn!("terminal flush failed: {}", err);
                    render_fault_logged = true;
                }
                report_cycles = report_cycles.saturating_add(app.drain_completed_cycles() as u64);

                if report_start.elapsed() >= Duration::from_secs(REPORT_INTERVAL_SECS) {
                    info!(
                        "stats: cycles={} active={} mode={:?} paused={} dropped_inputs={}",
                        report_cycles,
                        app.active_index(),
                        app.mode(),
                        app.is_paused(),
                        INPUT_QUEUE.take_dropped()
                    );
                    report_cycles = 0;
                    report_start = Instant::now();
                }
            }

            Timer::after_millis(FRAME_INTERVAL_MS).await;
        }
    };

    let settings_future = async {
        loop {
            Timer::after_millis(SETTINGS_POLL_INTERVAL_MS).await;
            let now_ms = loop_start.elapsed().as_millis();
            let current = app.borrow().persisted_settings();
            let mut sync = settings_sync.borrow_mut();
            sync.track_current(current, now_ms);
            sync.flush_if_due(&mut settings_store, now_ms);
        }
    };

    embassy_futures::select::select(ui_future, settings_future).await;

    let now_ms = loop_start.elapsed().as_millis();
    let current = app.borrow().persisted_settings();
    let mut sync = settings_sync.borrow_mut();
    sync.track_current(current, now_ms);
    sync.flush_now(&mut settings_store, now_ms);

    println!();
    info!("carousel stopped");
    std::process::exit(0);
}
