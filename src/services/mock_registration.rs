use anyhow::{anyhow, Result};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use crate::models::Registration;
use crate::services::registration::RegistrationService;

/// Mock implementation of RegistrationService for testing
///
/// Records every registration it receives and can be configured to fail.
#[derive(Debug, Clone, Default)]
pub struct MockRegistrationService {
    registrations: Arc<Mutex<Vec<Registration>>>,
    fail: Arc<Mutex<bool>>,
}

impl MockRegistrationService {
    /// Create a mock that accepts everything
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock that rejects every registration
    pub fn failing() -> Self {
        let service = Self::new();
        service.set_failing(true);
        service
    }

    pub fn set_failing(&self, fail: bool) {
        *self.fail.lock().unwrap() = fail;
    }

    /// Registrations received so far (including failed attempts)
    pub fn registrations(&self) -> Vec<Registration> {
        self.registrations.lock().unwrap().clone()
    }
}

#[async_trait]
impl RegistrationService for MockRegistrationService {
    async fn register(&self, registration: &Registration) -> Result<()> {
        self.registrations.lock().unwrap().push(registration.clone());

        if *self.fail.lock().unwrap() {
            return Err(anyhow!("mock registration failure"));
        }
        Ok(())
    }
}
