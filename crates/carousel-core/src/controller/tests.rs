use std::{cell::RefCell, collections::VecDeque, rc::Rc};

use super::*;
use crate::{
    input::{InputEvent, InputProvider},
    render::CardPlacement,
};

#[derive(Clone, Default)]
struct ScriptedInput {
    events: Rc<RefCell<VecDeque<InputEvent>>>,
}

impl ScriptedInput {
    fn push(&self, event: InputEvent) {
        self.events.borrow_mut().push_back(event);
    }
}

impl InputProvider for ScriptedInput {
    type Error = ();

    fn poll_event(&mut self) -> Result<Option<InputEvent>, Self::Error> {
        Ok(self.events.borrow_mut().pop_front())
    }
}

#[derive(Debug)]
struct RecordingView {
    items: Vec<bool>,
    dots: Vec<bool>,
    progress: u8,
    icon: Option<PlayPauseIcon>,
    placements: Vec<Option<(CardPlacement, bool)>>,
    theme: Option<Theme>,
}

impl RecordingView {
    fn new(count: usize) -> Self {
        Self {
            items: vec![false; count],
            dots: vec![false; count],
            progress: 0,
            icon: None,
            placements: vec![None; count],
            theme: None,
        }
    }

    fn active_items(&self) -> Vec<usize> {
        self.items
            .iter()
            .enumerate()
            .filter_map(|(index, active)| active.then_some(index))
            .collect()
    }
}

impl CarouselView for RecordingView {
    fn set_item_active(&mut self, index: u16, active: bool) {
        self.items[index as usize] = active;
    }

    fn set_indicator_active(&mut self, index: u16, active: bool) {
        self.dots[index as usize] = active;
    }

    fn set_progress(&mut self, pct: u8) {
        self.progress = pct;
    }

    fn set_play_pause(&mut self, icon: PlayPauseIcon) {
        self.icon = Some(icon);
    }

    fn set_card_placement(&mut self, index: u16, placement: CardPlacement, animate: bool) {
        self.placements[index as usize] = Some((placement, animate));
    }

    fn clear_card_placement(&mut self, index: u16) {
        self.placements[index as usize] = None;
    }

    fn set_theme(&mut self, theme: Theme) {
        self.theme = Some(theme);
    }
}

#[derive(Debug, Default)]
struct CountingAnimator {
    next_id: u32,
    played: Vec<u16>,
    reverted: Vec<u32>,
}

impl EntranceAnimator for CountingAnimator {
    type Handle = u32;

    fn play(&mut self, index: u16) -> Option<u32> {
        self.played.push(index);
        self.next_id += 1;
        Some(self.next_id)
    }

    fn revert(&mut self, handle: u32) {
        self.reverted.push(handle);
    }
}

type TestController = CarouselController<RecordingView, CountingAnimator, ScriptedInput>;

const DESKTOP_WIDTH: u16 = 1_440;
const MOBILE_WIDTH: u16 = 800;

fn make(width: u16) -> (TestController, ScriptedInput) {
    make_with(CarouselConfig::default(), width)
}

fn make_with(config: CarouselConfig, width: u16) -> (TestController, ScriptedInput) {
    let input = ScriptedInput::default();
    let controller = CarouselController::new(
        RecordingView::new(config.item_count as usize),
        CountingAnimator::default(),
        input.clone(),
        config,
        width,
        Theme::Dark,
        0,
    );
    (controller, input)
}

#[test]
fn starts_on_first_item_running() {
    let (mut app, _input) = make(DESKTOP_WIDTH);

    assert_eq!(app.tick(0), TickResult::RenderRequested);
    assert_eq!(app.active_index(), 0);
    assert_eq!(app.view().active_items(), [0]);
    assert!(app.view().dots[0]);
    assert_eq!(app.view().icon, Some(PlayPauseIcon::Pause));
    assert_eq!(app.view().theme, Some(Theme::Dark));
    assert_eq!(app.animator().played, [0]);
    assert!(!app.is_paused());
}

#[test]
fn hover_pause_preserves_remaining_time() {
    let (mut app, input) = make(DESKTOP_WIDTH);
    app.tick(0);
    app.tick(1_500);
    assert_eq!(app.view().progress, 50);

    app.tick(3_000);
    assert_eq!(app.active_index(), 1);
    assert_eq!(app.view().progress, 0);

    input.push(InputEvent::HoverEnter(1));
    app.tick(4_000);
    assert!(app.is_paused());
    assert_eq!(app.elapsed_ms(4_000), 1_000);
    assert_eq!(app.view().icon, Some(PlayPauseIcon::Play));

    app.tick(9_000);
    assert_eq!(app.elapsed_ms(14_000), 1_000);

    input.push(InputEvent::HoverLeave(1));
    app.tick(14_000);
    assert!(!app.is_paused());
    assert_eq!(app.active_index(), 1);
    assert_eq!(app.view().progress, 33);

    app.tick(15_999);
    assert_eq!(app.active_index(), 1);
    app.tick(16_000);
    assert_eq!(app.active_index(), 2);
}

#[test]
fn late_frame_advances_exactly_once() {
    let (mut app, _input) = make(DESKTOP_WIDTH);
    app.tick(0);
    app.tick(10_000);

    assert_eq!(app.active_index(), 1);
    assert_eq!(app.drain_completed_cycles(), 1);
    assert_eq!(app.drain_completed_cycles(), 0);
    assert_eq!(app.view().progress, 0);
}

#[test]
fn auto_advance_onto_hovered_item_pauses() {
    let (mut app, input) = make(DESKTOP_WIDTH);
    app.tick(0);

    input.push(InputEvent::HoverEnter(1));
    app.tick(1_000);
    assert!(!app.is_paused());

    app.tick(3_000);
    assert_eq!(app.active_index(), 1);
    assert!(app.is_paused());

    input.push(InputEvent::HoverLeave(1));
    app.tick(8_000);
    assert!(!app.is_paused());
    app.tick(10_999);
    assert_eq!(app.active_index(), 1);
    app.tick(11_000);
    assert_eq!(app.active_index(), 2);
}

#[test]
fn desktop_click_selects_and_pauses_with_fresh_cycle() {
    let (mut app, input) = make(DESKTOP_WIDTH);
    app.tick(0);
    app.tick(2_000);

    input.push(InputEvent::ItemClick(3));
    app.tick(2_100);
    assert_eq!(app.active_index(), 3);
    assert!(app.is_paused());
    assert_eq!(app.view().progress, 0);
    assert_eq!(app.view().active_items(), [3]);

    input.push(InputEvent::HoverLeave(3));
    app.tick(6_000);
    app.tick(8_999);
    assert_eq!(app.active_index(), 3);
    app.tick(9_000);
    assert_eq!(app.active_index(), 0);
}

#[test]
fn clicking_dot_for_active_item_changes_nothing() {
    let (mut app, input) = make(DESKTOP_WIDTH);
    app.tick(0);
    app.tick(1_000);

    input.push(InputEvent::DotClick(0));
    app.tick(1_500);
    assert_eq!(app.active_index(), 0);
    assert_eq!(app.animator().played, [0]);
    assert_eq!(app.view().progress, 50);
}

#[test]
fn dot_click_restarts_running_cycle() {
    let (mut app, input) = make(DESKTOP_WIDTH);
    app.tick(0);

    input.push(InputEvent::DotClick(2));
    app.tick(1_200);
    assert_eq!(app.active_index(), 2);
    assert!(!app.is_paused());
    assert_eq!(app.view().progress, 0);

    app.tick(4_199);
    assert_eq!(app.active_index(), 2);
    app.tick(4_200);
    assert_eq!(app.active_index(), 3);
}

#[test]
fn arrows_force_running_after_hover_pause() {
    let (mut app, input) = make(DESKTOP_WIDTH);
    app.tick(0);
    input.push(InputEvent::HoverEnter(0));
    app.tick(500);
    assert!(app.is_paused());

    input.push(InputEvent::Prev);
    app.tick(600);
    assert_eq!(app.active_index(), 3);
    assert!(!app.is_paused());
    assert_eq!(app.view().icon, Some(PlayPauseIcon::Pause));

    input.push(InputEvent::Next);
    app.tick(700);
    assert_eq!(app.active_index(), 0);
}

#[test]
fn entrance_animation_is_reverted_before_replay() {
    let (mut app, input) = make(DESKTOP_WIDTH);
    app.tick(0);
    input.push(InputEvent::Next);
    input.push(InputEvent::Next);
    app.tick(100);

    assert_eq!(app.animator().played, [0, 1, 2]);
    assert_eq!(app.animator().reverted, [1, 2]);
}

#[test]
fn mobile_swipe_beyond_threshold_advances_once() {
    let (mut app, input) = make(MOBILE_WIDTH);
    app.tick(0);
    assert_eq!(app.mode(), ViewportMode::Mobile);
    assert!(!app.is_transitioning(0));

    input.push(InputEvent::TouchStart { x: 300 });
    input.push(InputEvent::TouchEnd { x: 220 });
    app.tick(100);
    assert_eq!(app.active_index(), 1);
    assert!(app.is_transitioning(100));

    input.push(InputEvent::TouchStart { x: 300 });
    input.push(InputEvent::TouchEnd { x: 270 });
    app.tick(1_000);
    assert_eq!(app.active_index(), 1);

    input.push(InputEvent::TouchStart { x: 100 });
    input.push(InputEvent::TouchEnd { x: 200 });
    app.tick(1_100);
    assert_eq!(app.active_index(), 0);
}

#[test]
fn mobile_navigation_is_locked_during_card_transition() {
    let (mut app, input) = make(MOBILE_WIDTH);
    app.tick(0);

    input.push(InputEvent::Next);
    app.tick(100);
    assert_eq!(app.active_index(), 1);
    let (placement, animated) = app.view().placements[1].unwrap();
    assert_eq!(placement.z_index, 10);
    assert!(animated);

    input.push(InputEvent::Next);
    input.push(InputEvent::DotClick(3));
    input.push(InputEvent::ItemClick(2));
    app.tick(300);
    assert_eq!(app.active_index(), 1);

    input.push(InputEvent::Next);
    app.tick(700);
    assert_eq!(app.active_index(), 2);
}

#[test]
fn mobile_click_on_active_card_toggles_play_pause() {
    let (mut app, input) = make(MOBILE_WIDTH);
    app.tick(0);

    input.push(InputEvent::ItemClick(0));
    app.tick(1_000);
    assert!(app.is_paused());
    assert_eq!(app.view().icon, Some(PlayPauseIcon::Play));

    input.push(InputEvent::PlayPause);
    app.tick(5_000);
    assert!(!app.is_paused());
    assert_eq!(app.elapsed_ms(5_000), 1_000);
}

#[test]
fn mobile_neighbour_click_navigates_and_runs() {
    let (mut app, input) = make(MOBILE_WIDTH);
    app.tick(0);
    input.push(InputEvent::PlayPause);
    app.tick(100);
    assert!(app.is_paused());

    input.push(InputEvent::ItemClick(3));
    app.tick(200);
    assert_eq!(app.active_index(), 3);
    assert!(!app.is_paused());
}

#[test]
fn hover_and_play_pause_follow_mode() {
    let (mut app, input) = make(DESKTOP_WIDTH);
    app.tick(0);
    input.push(InputEvent::PlayPause);
    app.tick(100);
    assert!(!app.is_paused());

    let (mut mobile, input) = make(MOBILE_WIDTH);
    mobile.tick(0);
    input.push(InputEvent::HoverEnter(0));
    mobile.tick(100);
    assert!(!mobile.is_paused());
}

#[test]
fn switching_to_mobile_resumes_hover_pause_and_lays_out_cards() {
    let (mut app, input) = make(DESKTOP_WIDTH);
    app.tick(0);
    assert!(app.view().placements.iter().all(Option::is_none));

    input.push(InputEvent::HoverEnter(0));
    app.tick(1_000);
    assert!(app.is_paused());

    input.push(InputEvent::Resize { width: 900 });
    app.tick(2_000);
    assert_eq!(app.mode(), ViewportMode::Mobile);
    assert!(!app.is_paused());
    assert_eq!(app.elapsed_ms(2_000), 1_000);
    assert!(!app.is_transitioning(2_000));
    assert!(
        app.view()
            .placements
            .iter()
            .all(|placement| matches!(placement, Some((_, false))))
    );

    input.push(InputEvent::Resize { width: 1_300 });
    app.tick(2_100);
    assert_eq!(app.mode(), ViewportMode::Desktop);
    assert!(app.view().placements.iter().all(Option::is_none));
}

#[test]
fn resize_within_same_mode_is_ignored() {
    let (mut app, input) = make(MOBILE_WIDTH);
    app.tick(0);
    input.push(InputEvent::PlayPause);
    input.push(InputEvent::Resize { width: 600 });
    app.tick(100);

    assert_eq!(app.mode(), ViewportMode::Mobile);
    assert!(app.is_paused());
}

#[test]
fn theme_toggle_updates_view_and_settings() {
    let (mut app, input) = make(DESKTOP_WIDTH);
    app.tick(0);
    input.push(InputEvent::ThemeToggle);

    assert_eq!(app.tick(10), TickResult::RenderRequested);
    assert_eq!(app.theme(), Theme::Light);
    assert_eq!(app.view().theme, Some(Theme::Light));
    assert_eq!(app.persisted_settings().theme, Theme::Light);

    app.apply_persisted_settings(PersistedSettings::new(Theme::Dark));
    assert_eq!(app.view().theme, Some(Theme::Dark));
}

#[test]
fn out_of_range_indices_are_ignored() {
    let (mut app, input) = make(DESKTOP_WIDTH);
    app.tick(0);
    input.push(InputEvent::ItemClick(7));
    input.push(InputEvent::DotClick(4));
    input.push(InputEvent::HoverEnter(9));
    app.tick(100);

    assert_eq!(app.active_index(), 0);
    assert!(!app.is_paused());
}

#[test]
fn idle_frames_do_not_request_render() {
    let (mut app, input) = make(DESKTOP_WIDTH);
    app.tick(0);
    input.push(InputEvent::HoverEnter(0));
    app.tick(100);

    assert_eq!(app.tick(200), TickResult::NoRender);
    assert_eq!(app.tick(5_000), TickResult::NoRender);
}

#[test]
fn runs_unattended_without_input() {
    let config = CarouselConfig {
        item_count: 3,
        cycle_ms: 1_000,
        ..CarouselConfig::default()
    };
    let mut app = CarouselController::new(
        RecordingView::new(3),
        CountingAnimator::default(),
        crate::input::mock::MockInput::new(),
        config,
        DESKTOP_WIDTH,
        Theme::Light,
        0,
    );

    for now_ms in (0..=3_000).step_by(100) {
        app.tick(now_ms);
    }

    assert_eq!(app.active_index(), 0);
    assert_eq!(app.drain_completed_cycles(), 3);
    assert_eq!(app.animator().played, [0, 1, 2, 0]);
}

#[test]
fn short_cycle_is_stretched_to_card_transition() {
    let config = CarouselConfig {
        cycle_ms: 500,
        ..CarouselConfig::default()
    };
    let (mut app, _input) = make_with(config, MOBILE_WIDTH);
    assert_eq!(app.config().cycle_ms, 600);

    for now_ms in (0..=2_000).step_by(16) {
        app.tick(now_ms);
    }

    assert_eq!(app.drain_completed_cycles(), 3);
    assert_eq!(app.active_index(), 3);
    assert_eq!(app.animator().played, [0, 1, 2, 3]);
}

#[test]
fn auto_advance_lands_as_card_transition_settles() {
    let config = CarouselConfig {
        cycle_ms: 600,
        ..CarouselConfig::default()
    };
    let (mut app, input) = make_with(config, MOBILE_WIDTH);
    app.tick(0);

    input.push(InputEvent::Next);
    app.tick(100);
    assert_eq!(app.active_index(), 1);
    assert!(app.is_transitioning(699));

    app.tick(699);
    assert_eq!(app.active_index(), 1);
    app.tick(700);
    assert_eq!(app.active_index(), 2);
    assert_eq!(app.drain_completed_cycles(), 1);
}

#[test]
fn explicit_pause_survives_switch_to_desktop() {
    let (mut app, input) = make(MOBILE_WIDTH);
    app.tick(0);
    input.push(InputEvent::PlayPause);
    app.tick(1_000);
    assert!(app.is_paused());

    input.push(InputEvent::Resize { width: DESKTOP_WIDTH });
    app.tick(1_100);
    assert_eq!(app.mode(), ViewportMode::Desktop);
    assert!(app.is_paused());
    assert_eq!(app.view().icon, Some(PlayPauseIcon::Play));
    assert!(app.view().placements.iter().all(Option::is_none));

    app.tick(9_000);
    assert_eq!(app.active_index(), 0);
    assert_eq!(app.elapsed_ms(9_000), 1_000);

    input.push(InputEvent::Resize { width: MOBILE_WIDTH });
    app.tick(9_100);
    assert!(app.is_paused());
}

#[test]
fn desktop_click_turns_carried_pause_into_hover_pause() {
    let (mut app, input) = make(MOBILE_WIDTH);
    app.tick(0);
    input.push(InputEvent::PlayPause);
    app.tick(100);
    input.push(InputEvent::Resize { width: DESKTOP_WIDTH });
    app.tick(200);
    assert!(app.is_paused());

    input.push(InputEvent::ItemClick(2));
    app.tick(300);
    assert_eq!(app.active_index(), 2);
    assert!(app.is_paused());

    input.push(InputEvent::Resize { width: MOBILE_WIDTH });
    app.tick(400);
    assert!(!app.is_paused());
    assert_eq!(app.elapsed_ms(400), 0);
    assert_eq!(app.view().icon, Some(PlayPauseIcon::Pause));

    app.tick(3_400);
    assert_eq!(app.active_index(), 3);
}

#[test]
fn disabled_play_pause_control_ignores_toggles() {
    let config = CarouselConfig {
        affordances: Affordances {
            play_pause: false,
            ..Affordances::ALL
        },
        ..CarouselConfig::default()
    };
    let (mut app, input) = make_with(config, MOBILE_WIDTH);
    app.tick(0);

    input.push(InputEvent::PlayPause);
    input.push(InputEvent::ItemClick(0));
    app.tick(1_000);
    assert!(!app.is_paused());
    assert_eq!(app.active_index(), 0);
    assert_eq!(app.animator().played, [0]);
    assert_eq!(app.view().progress, 33);

    input.push(InputEvent::ItemClick(1));
    app.tick(1_100);
    assert_eq!(app.active_index(), 1);
}

#[test]
fn mobile_dots_can_be_ignored() {
    let config = CarouselConfig {
        mobile_dot_policy: MobileDotPolicy::Ignore,
        ..CarouselConfig::default()
    };
    let (mut app, input) = make_with(config, MOBILE_WIDTH);
    app.tick(0);

    input.push(InputEvent::DotClick(2));
    app.tick(500);
    assert_eq!(app.active_index(), 0);
    assert_eq!(app.view().progress, 16);

    input.push(InputEvent::Resize { width: DESKTOP_WIDTH });
    input.push(InputEvent::DotClick(2));
    app.tick(600);
    assert_eq!(app.active_index(), 2);
    assert!(!app.is_paused());
}
