//! Counter with an Asynchronous Reset
//!
//! This example runs both counters side by side.
//!
//! Key concepts:
//! - Pure reducers that declare effects instead of running them
//! - Delayed effects that dispatch back into the store
//! - Guards that refuse input while a reset is in flight
//!
//! Run with: cargo run --example counter
//! More detail: RUST_LOG=effect_reducer=trace cargo run --example counter

use effect_reducer::builder::StoreBuilder;
use effect_reducer::machines::counter::guarded::{
    CounterAction, CounterState, GuardedCounter, GuardedCounterEffects,
};
use effect_reducer::machines::counter::plain::{
    Count, CountAction, PlainCounter, PlainCounterEffects,
};
use effect_reducer::machines::counter::CounterConfig;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("effect_reducer=debug".parse()?))
        .init();

    let config = CounterConfig {
        reset_delay: Duration::from_secs(1),
    };

    println!("=== Plain Counter ===\n");

    let plain = StoreBuilder::new(PlainCounter)
        .initial(Count(0))
        .effects(PlainCounterEffects::new(config))
        .build()?;

    plain.dispatch(CountAction::Increment);
    plain.dispatch(CountAction::IncrementIfOdd);
    plain.dispatch(CountAction::Bump(5));
    plain.flush().await;
    println!("After +1, +1 if odd, +5: {:?}", plain.current_state());

    plain.dispatch(CountAction::ResetAsync);
    plain.flush().await;
    println!("Reset requested, still: {:?}", plain.current_state());

    let mut plain_changes = plain.subscribe();
    println!("Reset landed: {:?}\n", plain_changes.recv().await?);

    println!("=== Guarded Counter ===\n");

    let guarded = StoreBuilder::new(GuardedCounter::new())
        .initial(CounterState::new(3))
        .effects(GuardedCounterEffects::new(config))
        .record_history(true)
        .build()?;

    guarded.dispatch(CounterAction::ResetAsync);
    guarded.dispatch(CounterAction::Increment);
    guarded.flush().await;
    println!("Busy, increment refused: {:?}", guarded.current_state());

    let mut availability = guarded.watch();
    availability.wait_for(CounterState::is_available).await?;
    println!("Available again: {:?}", guarded.current_state());

    if let Some(history) = guarded.history().await {
        println!("\nApplied actions: {:?}", history.actions());
    }

    println!("\n=== Example Complete ===");
    Ok(())
}
