use crate::controllers::chaos_game::events::ChaosGameEvent;

pub trait ChaosGamePresenterPort {
    fn present(&mut self, event: ChaosGameEvent);
}

impl<F> ChaosGamePresenterPort for F
where
    F: FnMut(ChaosGameEvent),
{
    fn present(&mut self, event: ChaosGameEvent) {
        self(event)
    }
}
