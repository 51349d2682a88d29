impl<V, A, IN> CarouselController<V, A, IN>
where
    V: CarouselView,
    A: EntranceAnimator,
    IN: InputProvider,
{
    fn process_inputs(&mut self, now_ms: u64) {
        loop {
            match self.input.poll_event() {
                Ok(Some(event)) => self.apply_input_event(event, now_ms),
                Ok(None) => break,
                Err(_) => {
                    warn!("carousel: input provider failed; skipping remaining events this frame");
                    break;
                }
            }
        }
    }

    fn apply_input_event(&mut self, event: InputEvent, now_ms: u64) {
        match event {
            InputEvent::ItemClick(index) => self.navigate(NavInput::ItemClick(index), now_ms),
            InputEvent::DotClick(index) => self.navigate(NavInput::DotClick(index), now_ms),
            InputEvent::Prev => self.navigate(NavInput::Prev, now_ms),
            InputEvent::Next => self.navigate(NavInput::Next, now_ms),
            InputEvent::PlayPause => {
                if self.router.affordances().play_pause {
                    self.toggle_play_pause(now_ms);
                }
            }
            InputEvent::HoverEnter(index) => {
                if !self.selector.contains(index) {
                    return;
                }
                let active = self.selector.active();
                if self.arbiter.hover_enter(index, active, &mut self.clock, now_ms) {
                    self.sync_play_pause();
                }
            }
            InputEvent::HoverLeave(index) => {
                if !self.selector.contains(index) {
                    return;
                }
                let active = self.selector.active();
                if self.arbiter.hover_leave(index, active, &mut self.clock, now_ms) {
                    self.sync_play_pause();
                }
            }
            InputEvent::TouchStart { x } => {
                if self.arbiter.mode().is_mobile()
                    && self.router.affordances().swipe
                    && !self.selector.is_transitioning(now_ms)
                {
                    self.swipe.begin(x);
                }
            }
            InputEvent::TouchEnd { x } => {
                if let Some(displacement_px) = self.swipe.end(x) {
                    debug!("carousel-nav: swipe displacement_px={}", displacement_px);
                    self.navigate(NavInput::Swipe { displacement_px }, now_ms);
                }
            }
            InputEvent::Resize { width } => self.apply_viewport_width(width, now_ms),
            InputEvent::ThemeToggle => self.set_theme(self.theme.toggled()),
        }
    }
}
