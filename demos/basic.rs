//! Basic bulkhead usage example

use bulkhead_machines::{Bulkhead, BulkheadError, CallContext};
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

#[tokio::main]
async fn main() {
    println!("=== Bulkhead Basic Example ===\n");

    // One slot executing, one waiting; everything else is turned away.
    let bulkhead = Arc::new(
        Bulkhead::builder("payment_api")
            .max_parallelization(1)
            .max_queuing_actions(1)
            .on_rejected(|ctx| println!("🔴 Rejected {:?}", ctx.operation_key()))
            .build()
            .expect("valid configuration"),
    );

    println!(
        "Capacity: {} executing + {} queued\n",
        bulkhead.max_parallelization(),
        bulkhead.max_queuing_actions()
    );

    // Launch three slow payments at once.
    println!("--- Three concurrent slow calls ---");
    let mut handles = Vec::new();
    for i in 1..=3 {
        let bulkhead = Arc::clone(&bulkhead);
        handles.push(tokio::spawn(async move {
            let context = CallContext::new(format!("payment-{}", i));
            let cancel = CancellationToken::new();
            let result = bulkhead
                .call(&context, &cancel, move |_cancel| async move {
                    tokio::time::sleep(Duration::from_millis(200)).await;
                    Ok::<_, String>(format!("Payment {} settled", i))
                })
                .await;
            (i, result)
        }));
        // Give each call a moment to claim its slot before the next arrives.
        tokio::time::sleep(Duration::from_millis(20)).await;
    }

    for handle in handles {
        let (i, result) = handle.await.expect("task should not panic");
        match result {
            Ok(message) => println!("✓ payment-{}: {}", i, message),
            Err(BulkheadError::Rejected { policy }) => {
                println!("✗ payment-{}: bulkhead '{}' was full", i, policy);
            }
            Err(e) => println!("✗ payment-{}: {}", i, e),
        }
    }

    // Cancellation while queued: the work never runs.
    println!("\n--- Cancelling a queued call ---");
    let blocker = Arc::clone(&bulkhead);
    let hold = tokio::spawn(async move {
        let context = CallContext::new("long-running");
        blocker
            .call(&context, &CancellationToken::new(), |_cancel| async {
                tokio::time::sleep(Duration::from_millis(300)).await;
                Ok::<_, String>(())
            })
            .await
    });
    tokio::time::sleep(Duration::from_millis(20)).await;

    let cancel = CancellationToken::new();
    let queued = {
        let bulkhead = Arc::clone(&bulkhead);
        let cancel = cancel.clone();
        tokio::spawn(async move {
            let context = CallContext::new("impatient");
            bulkhead
                .call(&context, &cancel, |_cancel| async {
                    Ok::<_, String>("never runs")
                })
                .await
        })
    };
    tokio::time::sleep(Duration::from_millis(20)).await;
    cancel.cancel();

    match queued.await.expect("task should not panic") {
        Err(BulkheadError::Cancelled { policy }) => {
            println!("🟡 queued call left bulkhead '{}' without running", policy);
        }
        other => println!("unexpected outcome: {:?}", other),
    }
    let _ = hold.await;

    println!(
        "\nFinal occupancy: {} execution slot(s), {} queue slot(s) free",
        bulkhead.execution_slots_available(),
        bulkhead.queue_slots_available()
    );
}
