use gloo_timers::callback::Interval;

/// Fires `tick` once immediately, then on every interval until the page is
/// torn down. The interval handle is forgotten: a started pipeline has no
/// stop API and lives exactly as long as the page does.
pub fn run_every<F>(interval_ms: u32, mut tick: F)
where
    F: FnMut() + 'static,
{
    tick();
    Interval::new(interval_ms, tick).forget();
}
