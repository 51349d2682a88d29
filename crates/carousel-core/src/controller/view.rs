impl<V, A, IN> CarouselController<V, A, IN>
where
    V: CarouselView,
    A: EntranceAnimator,
    IN: InputProvider,
{
    pub fn new(
        view: V,
        animator: A,
        input: IN,
        mut config: CarouselConfig,
        viewport_width_px: u16,
        theme: Theme,
        now_ms: u64,
    ) -> Self {
        config.item_count = config.item_count.max(1);
        let min_cycle_ms = (config.card_transition_ms as u32).max(1);
        if config.cycle_ms < min_cycle_ms {
            warn!(
                "carousel: cycle_ms={} shorter than card transition; using {}",
                config.cycle_ms, min_cycle_ms
            );
            config.cycle_ms = min_cycle_ms;
        }

        let mode = ViewportMode::for_width(viewport_width_px, config.mobile_breakpoint_px);
        let mut controller = Self {
            view,
            animator,
            input,
            config,
            clock: ProgressClock::new(config.cycle_ms, now_ms),
            selector: ActiveSelector::new(config.item_count, config.card_transition_ms),
            arbiter: InteractionArbiter::new(mode),
            router: NavigationRouter::new(
                config.affordances,
                config.mobile_dot_policy,
                config.swipe_threshold_px,
            ),
            swipe: SwipeTracker::new(),
            theme,
            pending_redraw: true,
            last_progress_pct: None,
            last_icon: None,
            cycles_since_drain: 0,
        };

        info!(
            "carousel: init items={} cycle_ms={} mode={:?} theme={}",
            config.item_count,
            config.cycle_ms,
            mode,
            theme.as_str()
        );

        controller.view.set_theme(theme);
        let outcome = controller.selector.set_active(
            0,
            false,
            mode,
            now_ms,
            &mut controller.view,
            &mut controller.animator,
        );
        debug_assert_eq!(outcome, SelectOutcome::Switched);
        controller.restart_clock(now_ms);
        controller.clock.schedule();
        controller.sync_play_pause();
        controller
    }

    pub fn config(&self) -> CarouselConfig {
        self.config
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn animator(&self) -> &A {
        &self.animator
    }

    pub fn active_index(&self) -> u16 {
        self.selector.active()
    }

    pub fn item_count(&self) -> u16 {
        self.selector.count()
    }

    pub fn mode(&self) -> ViewportMode {
        self.arbiter.mode()
    }

    pub fn is_paused(&self) -> bool {
        self.clock.is_paused()
    }

    pub fn is_transitioning(&self, now_ms: u64) -> bool {
        self.selector.is_transitioning(now_ms)
    }

    pub fn progress_pct(&self, now_ms: u64) -> u8 {
        self.clock.progress_pct(now_ms)
    }

    pub fn elapsed_ms(&self, now_ms: u64) -> u64 {
        self.clock.elapsed_ms(now_ms)
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn persisted_settings(&self) -> PersistedSettings {
        PersistedSettings::new(self.theme)
    }

    pub fn apply_persisted_settings(&mut self, settings: PersistedSettings) {
        if settings.theme != self.theme {
            self.set_theme(settings.theme);
        }
    }

    /// Completed auto-advance cycles since the previous call.
    pub fn drain_completed_cycles(&mut self) -> u32 {
        core::mem::take(&mut self.cycles_since_drain)
    }

    fn set_theme(&mut self, theme: Theme) {
        info!(
            "carousel-theme: {} -> {}",
            self.theme.as_str(),
            theme.as_str()
        );
        self.theme = theme;
        self.view.set_theme(theme);
        self.pending_redraw = true;
    }

    fn report_progress(&mut self, pct: u8) {
        if self.last_progress_pct == Some(pct) {
            return;
        }
        self.last_progress_pct = Some(pct);
        self.view.set_progress(pct);
        self.pending_redraw = true;
    }

    fn sync_play_pause(&mut self) {
        let icon = if self.clock.is_paused() {
            PlayPauseIcon::Play
        } else {
            PlayPauseIcon::Pause
        };
        if self.last_icon != Some(icon) {
            self.last_icon = Some(icon);
            self.view.set_play_pause(icon);
            self.pending_redraw = true;
        }
    }
}
