impl<V, A, IN> CarouselController<V, A, IN>
where
    V: CarouselView,
    A: EntranceAnimator,
    IN: InputProvider,
{
    fn navigate(&mut self, input: NavInput, now_ms: u64) {
        let ctx = RouteContext {
            active: self.selector.active(),
            count: self.selector.count(),
            mode: self.arbiter.mode(),
            transitioning: self.selector.is_transitioning(now_ms),
        };

        match self.router.route(input, ctx) {
            NavAction::Select { target, policy } => {
                let outcome = self.selector.set_active(
                    target,
                    true,
                    ctx.mode,
                    now_ms,
                    &mut self.view,
                    &mut self.animator,
                );
                if outcome == SelectOutcome::Rejected {
                    return;
                }

                debug!(
                    "carousel-nav: {:?} from={} to={} policy={:?}",
                    input, ctx.active, target, policy
                );
                self.restart_clock(now_ms);
                self.arbiter
                    .after_manual_select(policy, target, &mut self.clock, now_ms);
                self.sync_play_pause();
                self.pending_redraw = true;
            }
            NavAction::TogglePlayPause => self.toggle_play_pause(now_ms),
            NavAction::Ignore => {
                debug!(
                    "carousel-nav: ignored {:?} active={} mode={:?} transitioning={}",
                    input, ctx.active, ctx.mode, ctx.transitioning
                );
            }
        }
    }

    fn toggle_play_pause(&mut self, now_ms: u64) {
        if self.arbiter.toggle_play_pause(&mut self.clock, now_ms) {
            self.sync_play_pause();
        }
    }

    fn apply_viewport_width(&mut self, width_px: u16, now_ms: u64) {
        let mode = ViewportMode::for_width(width_px, self.config.mobile_breakpoint_px);
        if !self
            .arbiter
            .switch_mode(mode, &mut self.clock, now_ms)
        {
            return;
        }

        self.swipe.cancel();
        if mode.is_mobile() {
            self.selector
                .apply_card_layout(false, now_ms, &mut self.view);
        } else {
            self.selector.clear_card_layout(&mut self.view);
        }
        self.sync_play_pause();
        self.pending_redraw = true;
    }
}
