impl<V, A, IN> CarouselController<V, A, IN>
where
    V: CarouselView,
    A: EntranceAnimator,
    IN: InputProvider,
{
    /// Run one animation frame: drain pending input, then advance the clock.
    pub fn tick(&mut self, now_ms: u64) -> TickResult {
        self.process_inputs(now_ms);

        match self.clock.tick(now_ms) {
            ClockTick::Idle => {}
            ClockTick::Progress(pct) => self.report_progress(pct),
            ClockTick::CycleComplete => {
                self.report_progress(100);
                self.auto_advance(now_ms);
            }
        }

        if self.pending_redraw {
            self.pending_redraw = false;
            TickResult::RenderRequested
        } else {
            TickResult::NoRender
        }
    }

    fn auto_advance(&mut self, now_ms: u64) {
        let target = next_index(self.selector.active(), self.selector.count());
        let mode = self.arbiter.mode();
        if self.selector.set_active(
            target,
            true,
            mode,
            now_ms,
            &mut self.view,
            &mut self.animator,
        ) == SelectOutcome::Rejected
        {
            debug!(
                "carousel-clock: auto-advance kept active={} while transitioning",
                self.selector.active()
            );
        }

        self.restart_clock(now_ms);
        let active = self.selector.active();
        self.arbiter
            .after_auto_advance(active, &mut self.clock, now_ms);
        self.sync_play_pause();
        self.cycles_since_drain = self.cycles_since_drain.saturating_add(1);
    }

    fn restart_clock(&mut self, now_ms: u64) {
        self.clock.reset(now_ms);
        self.report_progress(0);
    }
}
