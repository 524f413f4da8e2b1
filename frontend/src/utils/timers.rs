use gloo_timers::callback::Interval;
use leptos::*;

/// Runs `tick` every `period_ms` while the owning component is mounted.
///
/// The interval is created inside an effect so it only exists in the
/// browser, and dropping it on cleanup cancels the underlying timer.
pub fn use_interval<F>(period_ms: u32, tick: F)
where
    F: Fn() + Clone + 'static,
{
    create_effect(move |_| {
        let tick = tick.clone();
        let interval = Interval::new(period_ms, move || tick());
        on_cleanup(move || drop(interval));
    });
}

pub async fn sleep_ms(ms: u32) {
    gloo_timers::future::TimeoutFuture::new(ms).await;
}
