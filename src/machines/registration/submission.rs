//! Simulated submission of a registration.

use super::form::RegistrationData;
use super::workflow::{RegistrationAction, RegistrationEffect, RegistrationReducer, RegistrationState};
use crate::effects::{Dispatcher, EffectHandler, EffectTask};
use futures::FutureExt;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_SUBMISSION_DELAY: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationConfig {
    /// Simulated round-trip time of a submission.
    pub submission_delay: Duration,
}

impl Default for RegistrationConfig {
    fn default() -> Self {
        Self {
            submission_delay: DEFAULT_SUBMISSION_DELAY,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmissionError {
    #[error("registration for {first_name} {last_name} was refused")]
    Refused {
        first_name: String,
        last_name: String,
    },
}

impl SubmissionError {
    fn refused(data: &RegistrationData) -> Self {
        Self::Refused {
            first_name: data.first_name.clone(),
            last_name: data.last_name.clone(),
        }
    }
}

/// Decides how a submission turns out.
pub trait SubmissionStrategy: Send + Sync + 'static {
    fn submit(&self, data: &RegistrationData) -> Result<(), SubmissionError>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysSucceed;

impl SubmissionStrategy for AlwaysSucceed {
    fn submit(&self, _data: &RegistrationData) -> Result<(), SubmissionError> {
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysFail;

impl SubmissionStrategy for AlwaysFail {
    fn submit(&self, data: &RegistrationData) -> Result<(), SubmissionError> {
        Err(SubmissionError::refused(data))
    }
}

/// Succeeds, then fails, then succeeds, and so on.
#[derive(Debug, Default)]
pub struct Alternating {
    fail_next: AtomicBool,
}

impl SubmissionStrategy for Alternating {
    fn submit(&self, data: &RegistrationData) -> Result<(), SubmissionError> {
        if self.fail_next.fetch_xor(true, Ordering::SeqCst) {
            Err(SubmissionError::refused(data))
        } else {
            Ok(())
        }
    }
}

/// Runs [`RegistrationEffect::SubmitRegistration`]: waits out the configured
/// delay, asks the strategy, and reports the outcome back to the store.
#[derive(Clone)]
pub struct RegistrationEffects {
    config: RegistrationConfig,
    strategy: Arc<dyn SubmissionStrategy>,
}

impl RegistrationEffects {
    pub fn new(config: RegistrationConfig, strategy: impl SubmissionStrategy) -> Self {
        Self {
            config,
            strategy: Arc::new(strategy),
        }
    }

    pub fn with_strategy(strategy: impl SubmissionStrategy) -> Self {
        Self::new(RegistrationConfig::default(), strategy)
    }
}

impl Default for RegistrationEffects {
    fn default() -> Self {
        Self::with_strategy(Alternating::default())
    }
}

impl std::fmt::Debug for RegistrationEffects {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegistrationEffects")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl EffectHandler<RegistrationReducer> for RegistrationEffects {
    fn invoke(
        &self,
        effect: RegistrationEffect,
        state: &RegistrationState,
        dispatch: Dispatcher<RegistrationReducer>,
    ) -> EffectTask {
        match effect {
            RegistrationEffect::SubmitRegistration => {
                let data = state.registration_data.clone();
                let strategy = Arc::clone(&self.strategy);
                let delay = self.config.submission_delay;
                async move {
                    tokio::time::sleep(delay).await;
                    match strategy.submit(&data) {
                        Ok(()) => {
                            tracing::debug!(email = %data.email, "registration submitted");
                            dispatch.dispatch(RegistrationAction::SubmissionSucceeded);
                        }
                        Err(error) => {
                            tracing::error!(%error, "registration submission failed");
                            dispatch.dispatch(RegistrationAction::SubmissionFailed);
                        }
                    }
                }
                .boxed()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alternating_starts_with_success() {
        let strategy = Alternating::default();
        let data = RegistrationData::default();

        assert!(strategy.submit(&data).is_ok());
        assert!(strategy.submit(&data).is_err());
        assert!(strategy.submit(&data).is_ok());
        assert!(strategy.submit(&data).is_err());
    }

    #[test]
    fn fixed_strategies() {
        let data = RegistrationData {
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            ..RegistrationData::default()
        };

        assert_eq!(AlwaysSucceed.submit(&data), Ok(()));
        assert_eq!(
            AlwaysFail.submit(&data).unwrap_err().to_string(),
            "registration for Ada Lovelace was refused"
        );
    }

    #[test]
    fn default_delay_is_three_seconds() {
        assert_eq!(
            RegistrationConfig::default().submission_delay,
            Duration::from_secs(3)
        );
    }
}
