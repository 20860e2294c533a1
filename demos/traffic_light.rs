//! Traffic Light
//!
//! This example drives a cyclic, effect-free machine from a timer.
//!
//! Key concepts:
//! - A total reducer with no effects and no guards
//! - Time supplied from outside the reducer
//! - Following every change through a subscription
//!
//! Run with: cargo run --example traffic_light

use effect_reducer::effects::{NoEffects, Store};
use effect_reducer::machines::traffic_light::{
    spawn_timer, TrafficLight, TrafficLightReducer, TrafficLightTimings,
};
use std::time::Duration;
use tokio::time::Instant;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("effect_reducer=info".parse()?))
        .init();

    println!("=== Traffic Light ===\n");

    let timings = TrafficLightTimings {
        green: Duration::from_millis(500),
        yellow: Duration::from_millis(200),
        red: Duration::from_millis(800),
    };
    let handle = Store::spawn(TrafficLightReducer, NoEffects, TrafficLight::Green);
    let mut changes = handle.subscribe();
    let start = Instant::now();
    let timer = spawn_timer(&handle, timings);

    println!("{:>6}ms  {}", 0, handle.current_state());
    for _ in 0..(TrafficLight::ALL.len() * 2) {
        let color = changes.recv().await?;
        println!("{:>6}ms  {color}", start.elapsed().as_millis());
    }
    timer.abort();

    println!("\nOne cycle takes {:?}", timings.cycle());
    println!("\n=== Example Complete ===");
    Ok(())
}
