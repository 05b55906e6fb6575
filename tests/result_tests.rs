//! Unit tests for the `AsyncResult` monad.
//!
//! Tests cover:
//! - Construction (`ok`, `err`, `defer`, `from_future`, `From<Result>`)
//! - Tag queries (`is_ok`, `is_err`)
//! - Functor operations (`map`, `map_async`, `map_err`, `map_err_async`)
//! - Monad operations (`and_then` and its short-circuit)
//! - Terminal reducers (`fold`, `fold_async`)
//! - Side effects (`inspect`, `inspect_async`, `exec`, `exec_with`)
//! - Unwrap operations
//! - Projections to `AsyncOption`

use async_monads::monad::{
    AsyncResult, MonadKind, SideEffectError, UnwrapExpectation, err, ok,
};
use rstest::rstest;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

// =============================================================================
// Construction and Native Projection
// =============================================================================

#[rstest]
#[tokio::test]
async fn test_ok_awaits_to_ok() {
    assert_eq!(ok::<_, String>(72).await, Ok(72));
}

#[rstest]
#[tokio::test]
async fn test_err_awaits_to_err() {
    assert_eq!(err::<i32, _>("broken").await, Err("broken"));
}

#[rstest]
#[tokio::test]
async fn test_err_payload_is_not_constrained_to_errors() {
    // Domain errors are arbitrary values, not error types
    assert_eq!(err::<i32, _>(404_u16).await, Err(404_u16));
    assert_eq!(
        err::<i32, _>(vec!["a", "b"]).await,
        Err(vec!["a", "b"])
    );
}

#[rstest]
#[tokio::test]
async fn test_from_future_resolves_ok() {
    let pending = async { ok::<_, String>(72) };
    assert_eq!(AsyncResult::from_future(pending).await, Ok(72));
}

#[rstest]
#[tokio::test]
async fn test_from_future_resolves_err() {
    let pending = async { err::<i32, _>("broken") };
    assert_eq!(AsyncResult::from_future(pending).await, Err("broken"));
}

#[rstest]
#[tokio::test]
async fn test_defer_resolves_ok() {
    let result = AsyncResult::defer(|| async { ok::<_, String>(72) });
    assert_eq!(result.await, Ok(72));
}

#[rstest]
#[tokio::test]
async fn test_from_native_result() {
    assert_eq!(AsyncResult::from(Ok::<_, String>(5)).await, Ok(5));
    assert_eq!(
        AsyncResult::from(Err::<i32, _>("e".to_string())).await,
        Err("e".to_string())
    );
}

// =============================================================================
// Tag Queries
// =============================================================================

#[rstest]
#[tokio::test]
async fn test_is_ok() {
    assert!(ok::<_, String>(1).is_ok().await);
    assert!(!err::<i32, _>("e".to_string()).is_ok().await);
}

#[rstest]
#[tokio::test]
async fn test_is_err() {
    assert!(err::<i32, _>("e".to_string()).is_err().await);
    assert!(!ok::<_, String>(1).is_err().await);
}

// =============================================================================
// Functor Operations
// =============================================================================

#[rstest]
#[tokio::test]
async fn test_map_transforms_ok() {
    assert_eq!(ok::<_, String>(21).map(|x| x * 2).await, Ok(42));
}

#[rstest]
#[tokio::test]
async fn test_map_propagates_err() {
    let result = err::<i32, _>("broken").map(|x| x * 2).await;
    assert_eq!(result, Err("broken"));
}

#[rstest]
#[tokio::test]
async fn test_map_never_invoked_for_err() {
    let called = Arc::new(AtomicBool::new(false));
    let flag = called.clone();

    let result = err::<i32, _>("broken")
        .map(move |x| {
            flag.store(true, Ordering::SeqCst);
            x * 2
        })
        .await;

    assert_eq!(result, Err("broken"));
    assert!(!called.load(Ordering::SeqCst));
}

#[rstest]
#[tokio::test]
async fn test_map_async_transforms_ok() {
    let result = ok::<_, String>(21).map_async(|x| async move { x * 2 }).await;
    assert_eq!(result, Ok(42));
}

#[rstest]
#[tokio::test]
async fn test_map_err_transforms_err() {
    let result = err::<i32, _>(404).map_err(|code| format!("status {code}")).await;
    assert_eq!(result, Err("status 404".to_string()));
}

#[rstest]
#[tokio::test]
async fn test_map_err_propagates_ok() {
    let result = ok::<_, i32>(5).map_err(|code| format!("status {code}")).await;
    assert_eq!(result, Ok(5));
}

#[rstest]
#[tokio::test]
async fn test_map_err_never_invoked_for_ok() {
    let called = Arc::new(AtomicBool::new(false));
    let flag = called.clone();

    let result = ok::<_, i32>(5)
        .map_err(move |code| {
            flag.store(true, Ordering::SeqCst);
            code
        })
        .await;

    assert_eq!(result, Ok(5));
    assert!(!called.load(Ordering::SeqCst));
}

#[rstest]
#[tokio::test]
async fn test_map_err_async_transforms_err() {
    let result = err::<i32, _>(404)
        .map_err_async(|code| async move { format!("status {code}") })
        .await;
    assert_eq!(result, Err("status 404".to_string()));
}

// =============================================================================
// Monad Operations
// =============================================================================

#[rstest]
#[tokio::test]
async fn test_and_then_chains_ok() {
    assert_eq!(ok::<_, String>(10).and_then(|x| ok(x * 2)).await, Ok(20));
}

#[rstest]
#[tokio::test]
async fn test_and_then_adopts_produced_err() {
    let result = ok::<i32, _>(10).and_then(|_| err::<i32, _>("downstream")).await;
    assert_eq!(result, Err("downstream"));
}

#[rstest]
#[tokio::test]
async fn test_and_then_short_circuits_on_err() {
    let called = Arc::new(AtomicBool::new(false));
    let flag = called.clone();

    let result = err::<i32, _>("broken")
        .and_then(move |x| {
            flag.store(true, Ordering::SeqCst);
            ok(x)
        })
        .await;

    assert_eq!(result, Err("broken"));
    assert!(!called.load(Ordering::SeqCst), "binder must never run on Err");
}

// =============================================================================
// Terminal Reducers
// =============================================================================

#[rstest]
#[tokio::test]
async fn test_fold_runs_ok_branch() {
    let described = ok::<_, String>(5)
        .fold(|v| format!("value {v}"), |e| format!("error {e}"))
        .await;
    assert_eq!(described, "value 5");
}

#[rstest]
#[tokio::test]
async fn test_fold_runs_err_branch() {
    let described = err::<i32, _>("broken")
        .fold(|v| format!("value {v}"), |e| format!("error {e}"))
        .await;
    assert_eq!(described, "error broken");
}

#[rstest]
#[tokio::test]
async fn test_fold_async_branches() {
    let on_ok = ok::<_, String>(5)
        .fold_async(|v| async move { v * 2 }, |_| async { -1 })
        .await;
    assert_eq!(on_ok, 10);

    let on_err = err::<i32, _>("broken".to_string())
        .fold_async(|v| async move { v * 2 }, |_| async { -1 })
        .await;
    assert_eq!(on_err, -1);
}

// =============================================================================
// Side Effects: inspect
// =============================================================================

#[rstest]
#[tokio::test]
async fn test_inspect_passes_ok_through() {
    let counter = Arc::new(AtomicUsize::new(0));
    let effect = counter.clone();

    let result = ok::<_, String>(5)
        .inspect(move |_| {
            effect.fetch_add(1, Ordering::SeqCst);
        })
        .await;

    assert_eq!(result, Ok(5));
    assert_eq!(counter.load(Ordering::SeqCst), 1);
}

#[rstest]
#[tokio::test]
async fn test_inspect_skipped_for_err() {
    let counter = Arc::new(AtomicUsize::new(0));
    let effect = counter.clone();

    let result = err::<i32, _>("broken")
        .inspect(move |_| {
            effect.fetch_add(1, Ordering::SeqCst);
        })
        .await;

    assert_eq!(result, Err("broken"));
    assert_eq!(counter.load(Ordering::SeqCst), 0);
}

#[rstest]
#[tokio::test]
async fn test_inspect_async_runs_effect_once() {
    let counter = Arc::new(AtomicUsize::new(0));
    let effect = counter.clone();

    let result = ok::<_, String>(5)
        .inspect_async(move |_| {
            let counter = effect.clone();
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
            }
        })
        .await;

    assert_eq!(result, Ok(5));
    assert_eq!(counter.load(Ordering::SeqCst), 1);
}

// =============================================================================
// Side Effects: exec
// =============================================================================

#[rstest]
#[tokio::test]
async fn test_exec_success_passes_ok_through() {
    let counter = Arc::new(AtomicUsize::new(0));
    let effect = counter.clone();

    let result = ok::<_, String>(5)
        .exec(move |_| {
            let counter = effect.clone();
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
                Ok(())
            }
        })
        .await;

    assert_eq!(result.unwrap(), 5);
    assert_eq!(counter.load(Ordering::SeqCst), 1);
}

#[rstest]
#[tokio::test]
async fn test_exec_effect_error_becomes_err() {
    let result = ok::<_, String>(5)
        .exec(|_| async { Err(SideEffectError::msg("native")) })
        .await;

    assert_eq!(result.unwrap_err().message(), "native");
}

#[rstest]
#[tokio::test]
async fn test_exec_catches_panic_in_future() {
    let result = ok::<_, String>(5)
        .exec(|value| {
            let seen = *value;
            async move {
                if seen == 5 {
                    panic!("boom {seen}");
                }
                Ok(())
            }
        })
        .await;

    assert_eq!(result.unwrap_err().message(), "boom 5");
}

#[rstest]
#[tokio::test]
async fn test_exec_catches_panic_before_future_exists() {
    let result = ok::<_, String>(5)
        .exec(|_| -> std::future::Ready<Result<(), SideEffectError>> {
            panic!("early");
        })
        .await;

    assert_eq!(result.unwrap_err().message(), "early");
}

#[rstest]
#[tokio::test]
async fn test_exec_normalizes_existing_err_via_display() {
    let called = Arc::new(AtomicBool::new(false));
    let flag = called.clone();

    let result = err::<i32, _>(5)
        .exec(move |_| {
            flag.store(true, Ordering::SeqCst);
            async { Ok(()) }
        })
        .await;

    assert_eq!(result.unwrap_err().message(), "5");
    assert!(!called.load(Ordering::SeqCst), "effect must never run on Err");
}

#[rstest]
#[tokio::test]
async fn test_exec_with_custom_mapper() {
    let result = err::<i32, _>(5)
        .exec_with(
            |_| async { Ok(()) },
            |code| SideEffectError::msg(format!("code {code}")),
        )
        .await;

    assert_eq!(result.unwrap_err().message(), "code 5");
}

#[rstest]
#[tokio::test]
async fn test_exec_non_string_panic_payload_normalizes() {
    let result = ok::<_, String>(5)
        .exec(|value| {
            let seen = *value;
            async move {
                if seen == 5 {
                    std::panic::panic_any(42_i32);
                }
                Ok(())
            }
        })
        .await;

    assert_eq!(result.unwrap_err().message(), "side effect panicked");
}

// =============================================================================
// Unwrap Operations
// =============================================================================

#[rstest]
#[tokio::test]
async fn test_try_unwrap_on_ok() {
    assert_eq!(ok::<_, String>(5).try_unwrap().await, Ok(5));
}

#[rstest]
#[tokio::test]
async fn test_try_unwrap_on_err_reports_expectation() {
    let error = err::<i32, _>("broken").try_unwrap().await.unwrap_err();
    assert_eq!(error.message(), "Failed to unwrap");
    assert_eq!(error.monad, MonadKind::Result);
    assert_eq!(error.expectation, UnwrapExpectation::OkGotError);
    assert_eq!(format!("{error}"), "Failed to unwrap: Expected Ok got Error");
}

#[rstest]
#[tokio::test]
async fn test_try_unwrap_err_on_err() {
    assert_eq!(err::<i32, _>("broken").try_unwrap_err().await, Ok("broken"));
}

#[rstest]
#[tokio::test]
async fn test_try_unwrap_err_on_ok_reports_expectation() {
    let error = ok::<_, String>(5).try_unwrap_err().await.unwrap_err();
    assert_eq!(error.expectation, UnwrapExpectation::ErrGotOk);
    assert_eq!(format!("{error}"), "Failed to unwrap: Expected Err got Ok");
}

#[rstest]
#[tokio::test]
async fn test_unwrap_or_returns_default_on_err() {
    assert_eq!(err::<i32, _>("broken").unwrap_or(0).await, 0);
    assert_eq!(ok::<_, String>(5).unwrap_or(0).await, 5);
}

#[rstest]
#[tokio::test]
async fn test_unwrap_or_else_receives_error() {
    let recovered = err::<usize, _>("broken").unwrap_or_else(|e| e.len()).await;
    assert_eq!(recovered, 6);
}

// =============================================================================
// Projections to AsyncOption
// =============================================================================

#[rstest]
#[tokio::test]
async fn test_ok_projection_on_ok() {
    assert_eq!(ok::<_, String>(5).ok().await, Some(5));
}

#[rstest]
#[tokio::test]
async fn test_ok_projection_on_err() {
    assert_eq!(err::<i32, _>("broken").ok().await, None);
}

#[rstest]
#[tokio::test]
async fn test_err_projection_on_err() {
    assert_eq!(err::<i32, _>("broken").err().await, Some("broken"));
}

#[rstest]
#[tokio::test]
async fn test_err_projection_on_ok() {
    assert_eq!(ok::<_, String>(5).err().await, None);
}

// =============================================================================
// Round Trips with AsyncOption
// =============================================================================

#[rstest]
#[tokio::test]
async fn test_ok_projection_then_ok_or_round_trips() {
    let round_tripped = ok::<_, &str>(5).ok().ok_or("lost").await;
    assert_eq!(round_tripped, Ok(5));
}

#[rstest]
#[tokio::test]
async fn test_err_collapses_through_ok_projection() {
    let round_tripped = err::<i32, _>("broken").ok().ok_or("lost").await;
    assert_eq!(round_tripped, Err("lost"));
}
