use super::SixCitiesApp;

impl SixCitiesApp {
    /// Dispatches every settled action that has arrived so far.
    pub fn poll_action_messages(&mut self) -> bool {
        let mut any = false;
        while let Ok(action) = self.action_rx.try_recv() {
            self.settle(action);
            any = true;
        }
        any
    }

    /// Waits until every request issued through `request` has settled.
    pub async fn wait_for_idle(&mut self) {
        while self.in_flight > 0 {
            match self.action_rx.recv().await {
                Some(action) => self.settle(action),
                None => break,
            }
        }
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    fn settle(&mut self, action: super::Action) {
        self.in_flight = self.in_flight.saturating_sub(1);
        self.dispatch(action);
    }
}
