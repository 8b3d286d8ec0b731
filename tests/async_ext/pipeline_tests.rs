//! Multi-stage async chains: short-circuiting, ordering, cancellation.

use std::sync::atomic::{AtomicBool, AtomicU32, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use railway_rail::prelude_async::*;

/// Records which stage ran at which logical tick.
#[derive(Clone, Default)]
struct Timeline {
    clock: Arc<AtomicUsize>,
    entries: Arc<Mutex<Vec<(&'static str, usize)>>>,
}

impl Timeline {
    fn mark(&self, stage: &'static str) {
        let tick = self.clock.fetch_add(1, Ordering::SeqCst);
        self.entries.lock().unwrap().push((stage, tick));
    }

    fn entries(&self) -> Vec<(&'static str, usize)> {
        self.entries.lock().unwrap().clone()
    }
}

struct DropFlag(Arc<AtomicBool>);

impl Drop for DropFlag {
    fn drop(&mut self) {
        self.0.store(true, Ordering::SeqCst);
    }
}

#[tokio::test]
async fn failing_source_never_evaluates_later_stages() {
    let evaluated = Arc::new(AtomicU32::new(0));
    let (c1, c2, c3, c4) = (evaluated.clone(), evaluated.clone(), evaluated.clone(), evaluated.clone());

    let result = async { failure::<i32>(Error::new("E1", "m1")) }
        .bind_async(move |x| {
            c1.fetch_add(1, Ordering::SeqCst);
            async move { success(x + 1) }
        })
        .map_async(move |x| {
            c2.fetch_add(1, Ordering::SeqCst);
            x * 2
        })
        .tap_async(move |_| {
            c3.fetch_add(1, Ordering::SeqCst);
            async {}
        })
        .ensure_async(
            move |_| {
                c4.fetch_add(1, Ordering::SeqCst);
                async { true }
            },
            Error::new("LATE", "late"),
        )
        .await;

    assert_eq!(result, Err(Error::new("E1", "m1")));
    assert_eq!(evaluated.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn failure_mid_chain_stops_the_rest() {
    let timeline = Timeline::default();
    let (t1, t2, t3) = (timeline.clone(), timeline.clone(), timeline.clone());

    let result = lift(success(1))
        .bind_async(move |x| async move {
            t1.mark("validate");
            if x > 5 {
                success(x)
            } else {
                failure(Error::new("TOO_SMALL", "value too small"))
            }
        })
        .bind_async(move |x| async move {
            t2.mark("store");
            success(x)
        })
        .map_async(move |x| {
            t3.mark("render");
            x.to_string()
        })
        .await;

    assert_eq!(result, Err(Error::new("TOO_SMALL", "value too small")));
    let stages: Vec<_> = timeline.entries().into_iter().map(|(stage, _)| stage).collect();
    assert_eq!(stages, vec!["validate"]);
}

#[tokio::test]
async fn stages_run_in_chain_order() {
    let timeline = Timeline::default();
    let (t0, t1, t2, t3, t4) =
        (timeline.clone(), timeline.clone(), timeline.clone(), timeline.clone(), timeline.clone());

    let result = async move {
        t0.mark("source");
        tokio::task::yield_now().await;
        success(2)
    }
    .bind_async(move |x| async move {
        t1.mark("bind");
        tokio::time::sleep(Duration::from_millis(5)).await;
        success(x + 1)
    })
    .map_async(move |x| {
        t2.mark("map");
        x * 10
    })
    .tap_async(move |_| async move {
        tokio::task::yield_now().await;
        t3.mark("tap");
    })
    .ensure_async(
        move |x| {
            let x = *x;
            async move {
                t4.mark("ensure");
                x > 0
            }
        },
        Error::new("NEG", "negative"),
    )
    .await;

    assert_eq!(result, Ok(30));

    let entries = timeline.entries();
    let stages: Vec<_> = entries.iter().map(|(stage, _)| *stage).collect();
    assert_eq!(stages, vec!["source", "bind", "map", "tap", "ensure"]);
    assert!(entries.windows(2).all(|pair| pair[0].1 < pair[1].1));
}

#[tokio::test]
async fn independent_chains_do_not_interfere() {
    let left = lift(success(1)).bind_async(|x| async move {
        tokio::task::yield_now().await;
        success(x + 1)
    });
    let right = lift(failure::<i32>(Error::new("R", "right"))).map_async(|x| x + 100);

    let (left, right) = tokio::join!(left, right);

    assert_eq!(left, Ok(2));
    assert_eq!(right, Err(Error::new("R", "right")));
}

#[tokio::test]
async fn cancellation_drops_suspended_stage() {
    let dropped = Arc::new(AtomicBool::new(false));
    let later = Arc::new(AtomicU32::new(0));
    let (flag, counter) = (dropped.clone(), later.clone());

    let pipeline = lift(success(1))
        .bind_async(move |x| async move {
            let _guard = DropFlag(flag);
            std::future::pending::<()>().await;
            success(x)
        })
        .map_async(move |x| {
            counter.fetch_add(1, Ordering::SeqCst);
            x
        });

    let outcome = tokio::time::timeout(Duration::from_millis(20), pipeline).await;

    assert!(outcome.is_err());
    assert!(dropped.load(Ordering::SeqCst));
    assert_eq!(later.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn spawned_chain_is_send() {
    let handle = tokio::spawn(async {
        lift(success(String::from("Mouse")))
            .ensure_async(
                |name| {
                    let empty = name.trim().is_empty();
                    async move { !empty }
                },
                Error::new("INVALID_NAME", "Name cannot be empty."),
            )
            .map_async(|name| name.len())
            .await
    });

    assert_eq!(handle.await.unwrap(), Ok(5));
}
