//! Registration Form Workflow
//!
//! This example walks a form through validation and two submissions, the
//! first of which is refused.
//!
//! Key concepts:
//! - Accumulated validation messages
//! - A simulated network call as an effect
//! - Stale or out-of-state actions being ignored
//!
//! Run with: cargo run --example registration

use effect_reducer::builder::StoreBuilder;
use effect_reducer::machines::registration::{
    FormState, RegistrationAction, RegistrationConfig, RegistrationData, RegistrationEffects,
    RegistrationReducer, RegistrationState, SubmissionError, SubmissionStrategy,
};
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use tracing_subscriber::EnvFilter;

/// Refuses the first submission, accepts the rest.
#[derive(Default)]
struct SecondTimeLucky {
    tried: AtomicBool,
}

impl SubmissionStrategy for SecondTimeLucky {
    fn submit(&self, data: &RegistrationData) -> Result<(), SubmissionError> {
        if self.tried.swap(true, Ordering::SeqCst) {
            Ok(())
        } else {
            Err(SubmissionError::Refused {
                first_name: data.first_name.clone(),
                last_name: data.last_name.clone(),
            })
        }
    }
}

fn show(label: &str, state: &RegistrationState) {
    println!("{label}: {}", state.form_state);
    for (field, message) in &state.validation_errors {
        println!("  {field}: {message}");
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("effect_reducer=info".parse()?))
        .init();

    println!("=== Registration Workflow ===\n");

    let config = RegistrationConfig {
        submission_delay: Duration::from_millis(500),
    };
    let handle = StoreBuilder::new(RegistrationReducer::new())
        .initial(RegistrationState::default())
        .effects(RegistrationEffects::new(config, SecondTimeLucky::default()))
        .build()?;
    let mut form = handle.watch();

    handle.dispatch(RegistrationAction::Submit);
    handle.flush().await;
    show("Empty submit", &handle.current_state());

    handle.dispatch(RegistrationAction::update_field("firstName", "  Ada "));
    handle.dispatch(RegistrationAction::update_field("lastName", "Lovelace"));
    handle.dispatch(RegistrationAction::update_field("nickname", "Countess"));
    handle.dispatch(RegistrationAction::update_field("acceptedAgreement", true));
    handle.dispatch(RegistrationAction::Validate);
    handle.flush().await;
    show("\nFilled in", &handle.current_state());

    handle.dispatch(RegistrationAction::Submit);
    handle.dispatch(RegistrationAction::Submit);
    handle.flush().await;
    show("\nSubmitted twice", &handle.current_state());

    form.wait_for(|s| s.form_state == FormState::Updating).await?;
    show("\nFirst attempt refused", &handle.current_state());

    handle.dispatch(RegistrationAction::Note("trying again".to_string()));
    handle.dispatch(RegistrationAction::Submit);
    form.wait_for(|s| s.form_state == FormState::Submitted).await?;
    show("\nSecond attempt", &handle.current_state());

    println!("\n=== Example Complete ===");
    Ok(())
}
