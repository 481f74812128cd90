//! End-to-end chains across containers, combinators and the resolver.

use std::sync::atomic::{AtomicBool, Ordering};

use opresult::{
    AnyError, ConflictError, DomainError, Error, IntoFailure, InvalidStateError, MatchError,
    NotFoundError, OperationResult, OperationResultFuture,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Order {
    Draft,
    Placed,
    Shipped,
}

/// A caller-defined kind extending the hierarchy.
#[derive(Debug)]
struct PaymentDeclined {
    base: Error,
}

impl PaymentDeclined {
    fn new(reason: &str) -> Self {
        Self {
            base: Error::with_code(format!("payment declined: {}", reason), 402),
        }
    }
}

impl DomainError for PaymentDeclined {
    fn as_error(&self) -> &Error {
        &self.base
    }
}

fn advance(order: Order) -> OperationResult<Order> {
    match order {
        Order::Draft => OperationResult::success(Order::Placed),
        Order::Placed => OperationResult::success(Order::Shipped),
        Order::Shipped => InvalidStateError::create(Order::Shipped, Order::Shipped).into(),
    }
}

fn charge(order: Order, balance: u32) -> OperationResult<Order> {
    match balance {
        0 => PaymentDeclined::new("insufficient funds").into_failure(),
        _ => OperationResult::success(order),
    }
}

fn describe(result: OperationResult<Order>) -> Result<String, MatchError> {
    result.resolve_container_value(|m| {
        m.on_error(|e: &InvalidStateError<Order>| format!("bad transition to {:?}", e.new_state()))?
            .on_error(|e: &PaymentDeclined| format!("{} ({:?})", e.as_error().message(), e.as_error().error_code()))?
            .on_success(|order| format!("order is {:?}", order))
    })
}

#[test]
fn test_successful_chain() {
    init_tracing();

    let result = advance(Order::Draft)
        .bind(|r| r.match_with(|order| charge(order, 10), OperationResult::fail))
        .map(advance)
        .bind(|r| r.match_with(|inner| inner, OperationResult::fail));

    assert_eq!(describe(result).unwrap(), "order is Shipped");
}

#[test]
fn test_third_party_kind_is_dispatched() {
    init_tracing();

    let result = advance(Order::Draft).bind(|r| match r.into_result() {
        Ok(order) => charge(order, 0),
        Err(error) => OperationResult::fail(error),
    });

    assert_eq!(
        describe(result).unwrap(),
        "payment declined: insufficient funds (Some(402))"
    );
}

#[test]
fn test_invalid_transition_is_dispatched() {
    init_tracing();

    let result = advance(Order::Shipped);
    assert_eq!(describe(result).unwrap(), "bad transition to Shipped");
}

#[test]
fn test_panic_in_chain_falls_through_to_base_catch_all() {
    init_tracing();

    let result = advance(Order::Draft).map(|_| -> Order { panic!("warehouse offline") });

    let error = result.error().unwrap();
    assert!(error.is::<Error>());
    assert_eq!(error.message(), "panicked: warehouse offline");

    // No explicit base handler: the default one produces String::default().
    assert_eq!(describe(result).unwrap(), "");
}

#[test]
fn test_unhandled_kind_is_reported() {
    init_tracing();

    let result: OperationResult<Order> = NotFoundError::create(17_u64).into();

    assert!(matches!(
        describe(result),
        Err(MatchError::MissingHandler { .. })
    ));
}

#[test]
fn test_conflict_message_wins_over_success_handler() {
    let failed: OperationResult<i32> = ConflictError::create("dup").into();

    let resolved = failed
        .resolve_container_value(|m| {
            m.on_error(|e: &ConflictError| e.message().to_string())?
                .on_success(|_| "ok".to_string())
        })
        .unwrap();

    assert_eq!(resolved, "dup");
}

#[test]
fn test_error_identity_survives_failed_chain() {
    let original = AnyError::from(ConflictError::create("dup"));
    let failed: OperationResult<i32> = OperationResult::fail(original.clone());

    let result = failed
        .map(|x| x * 2)
        .bind(|r| r.map(|x| x.to_string()))
        .map(|s| s.len());

    assert!(result.error().unwrap().ptr_eq(&original));
}

async fn load(id: u32) -> OperationResult<Order> {
    tokio::task::yield_now().await;
    match id {
        0 => NotFoundError::create(id).into(),
        _ => OperationResult::success(Order::Draft),
    }
}

#[tokio::test]
async fn test_async_chain_on_failure_never_runs_transform() {
    init_tracing();
    let ran = AtomicBool::new(false);
    let flag = &ran;

    let result = load(0)
        .map_async(move |order| async move {
            flag.store(true, Ordering::SeqCst);
            order
        })
        .await;

    assert!(!ran.load(Ordering::SeqCst));
    assert!(result.error().unwrap().is::<NotFoundError<u32>>());
}

#[tokio::test]
async fn test_async_chain_mixes_sync_and_async_stages() {
    init_tracing();

    let result = load(1)
        .bind_sync(|r| match r.result() {
            Some(Order::Shipped) => ConflictError::create("already shipped").into(),
            _ => r,
        })
        .bind_async(|r| async move {
            match r.into_result() {
                Ok(order) => advance(order),
                Err(error) => OperationResult::fail(error),
            }
        })
        .map_sync(|order| format!("{:?}", order))
        .await;

    assert_eq!(result.result().map(String::as_str), Some("Placed"));
}
