//! Tracing support for graph algorithms.
//!
//! With the `tracing` feature enabled, the algorithms in this crate open an
//! `info_span!` per operation and emit `debug!`/`warn!` events through the
//! `tracing` crate.  [`init_tracing`] installs a subscriber that records how
//! long each span was open, which the large-graph tests print at the end.
//!
//! Without the feature, the same names exist as no-ops so that call sites do
//! not need `cfg` attributes.

use std::time::Duration;

/// Accumulated time spent inside all spans sharing one name.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SpanTiming {
    pub total: Duration,
    pub calls: usize,
}

#[cfg(feature = "tracing")]
mod enabled {
    use std::{
        cell::RefCell,
        collections::BTreeMap,
        sync::Once,
        time::{Duration, Instant},
    };

    use tracing_subscriber::{
        Layer, Registry, filter::LevelFilter, fmt, layer::Context, layer::SubscriberExt,
        registry::LookupSpan, util::SubscriberInitExt,
    };

    use super::SpanTiming;

    thread_local! {
        static SPAN_TIMINGS: RefCell<BTreeMap<&'static str, SpanTiming>> =
            const { RefCell::new(BTreeMap::new()) };
    }

    struct SpanTimingLayer;

    impl<S> Layer<S> for SpanTimingLayer
    where
        S: tracing::Subscriber + for<'a> LookupSpan<'a>,
    {
        fn on_new_span(
            &self,
            _attrs: &tracing::span::Attributes<'_>,
            id: &tracing::Id,
            ctx: Context<'_, S>,
        ) {
            if let Some(span) = ctx.span(id) {
                span.extensions_mut().insert(Instant::now());
            }
        }

        fn on_close(&self, id: tracing::Id, ctx: Context<'_, S>) {
            let Some(span) = ctx.span(&id) else {
                return;
            };
            let name = span.metadata().name();
            if let Some(start) = span.extensions().get::<Instant>() {
                let elapsed = start.elapsed();
                SPAN_TIMINGS.with(|timings| {
                    let mut timings = timings.borrow_mut();
                    let entry = timings.entry(name).or_default();
                    entry.total += elapsed;
                    entry.calls += 1;
                });
            }
        }
    }

    /// Installs the global subscriber: span timing for everything, plus
    /// warnings printed through the test writer.  Safe to call repeatedly;
    /// only the first call has an effect.
    pub fn init_tracing() {
        static INIT: Once = Once::new();
        INIT.call_once(|| {
            let _ = Registry::default()
                .with(SpanTimingLayer)
                .with(
                    fmt::layer()
                        .with_test_writer()
                        .with_filter(LevelFilter::WARN),
                )
                .try_init();
        });
    }

    /// Returns the timings recorded on this thread, longest total first.
    pub fn span_timings() -> Vec<(&'static str, SpanTiming)> {
        let mut entries: Vec<_> = SPAN_TIMINGS.with(|timings| {
            timings
                .borrow()
                .iter()
                .map(|(&name, &timing)| (name, timing))
                .collect()
        });
        entries.sort_by(|a, b| b.1.total.cmp(&a.1.total));
        entries
    }

    pub fn reset_span_timings() {
        init_tracing();
        SPAN_TIMINGS.with(|timings| timings.borrow_mut().clear());
    }

    #[doc(hidden)]
    pub fn dump_span_timings() {
        eprintln!("span timings (desc):");
        for (name, SpanTiming { total, calls }) in span_timings() {
            eprintln!("  {name}: {:?} ({}x, {:?} avg)", total, calls, average(total, calls));
        }
    }

    fn average(total: Duration, calls: usize) -> Duration {
        u32::try_from(calls)
            .ok()
            .filter(|&calls| calls > 0)
            .map_or(Duration::ZERO, |calls| total / calls)
    }

    pub use tracing::{debug, info_span, warn};
}

#[cfg(not(feature = "tracing"))]
mod disabled {
    use super::SpanTiming;

    pub fn init_tracing() {}

    pub fn span_timings() -> Vec<(&'static str, SpanTiming)> {
        Vec::new()
    }

    pub fn reset_span_timings() {}

    #[doc(hidden)]
    pub fn dump_span_timings() {}

    #[doc(hidden)]
    #[macro_export]
    macro_rules! __intgraph_noop_span {
        ($($tokens:tt)*) => {{ $crate::tracing_support::NoOpSpan }};
    }

    #[doc(hidden)]
    #[macro_export]
    macro_rules! __intgraph_noop_event {
        ($($tokens:tt)*) => {{}};
    }

    pub use crate::__intgraph_noop_event as debug;
    pub use crate::__intgraph_noop_event as warn;
    pub use crate::__intgraph_noop_span as info_span;

    pub struct NoOpSpan;

    impl NoOpSpan {
        pub fn entered(self) -> NoOpSpanGuard {
            NoOpSpanGuard
        }
    }

    pub struct NoOpSpanGuard;
}

#[cfg(feature = "tracing")]
pub use enabled::*;

#[cfg(not(feature = "tracing"))]
pub use disabled::*;

/// Total time recorded for spans named `name`, if any closed on this thread.
pub fn span_total(name: &str) -> Option<Duration> {
    span_timings()
        .into_iter()
        .find(|(span_name, _)| *span_name == name)
        .map(|(_, timing)| timing.total)
}
