use dioxus::prelude::*;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Monotonic token source shared between a producer and its in-flight work.
///
/// Issuing a new token invalidates every earlier one, so a task that checks
/// its token after an await can tell whether it has been superseded. Clones
/// share the same counter.
#[derive(Clone, Default)]
pub struct GenerationCounter {
    current: Arc<AtomicU64>,
}

impl GenerationCounter {
    /// Issue the next token, invalidating all previously issued ones.
    pub fn next(&self) -> u64 {
        self.current.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Whether `generation` is still the newest issued token.
    pub fn is_current(&self, generation: u64) -> bool {
        self.current.load(Ordering::SeqCst) == generation
    }
}

/// Hook that debounces a rapidly-changing input value.
///
/// Returns a signal that settles to the latest input once the input has been
/// stable for `delay`. Every change restarts the timer, so a burst of
/// keystrokes collapses into a single settled update carrying the final text.
pub fn use_debounced(value: Memo<String>, delay: Duration) -> Signal<String> {
    let mut settled = use_signal(|| value.peek().clone());
    let generation = use_hook(GenerationCounter::default);

    use_effect(move || {
        let next = value();

        // Taking a new token invalidates any timer still pending from the
        // previous input.
        let my_generation = generation.next();

        // Typing back to the settled value (or the initial run) needs no
        // timer; a redundant set would ripple into a redundant fetch.
        if next == *settled.peek() {
            return;
        }

        let generation = generation.clone();
        spawn(async move {
            tokio::time::sleep(delay).await;
            if generation.is_current(my_generation) {
                settled.set(next);
            }
        });
    });

    settled
}
