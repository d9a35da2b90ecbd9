use crate::domain::error::{AppError, Result};
use keyring::Entry;

pub struct KeyringManager {
    service: String,
}

impl KeyringManager {
    pub fn new(service: &str) -> Self {
        Self {
            service: service.to_string(),
        }
    }

    pub fn set_secret(&self, key: &str, secret: &str) -> Result<()> {
        let entry = Entry::new(&self.service, key)
            .map_err(|e| AppError::Internal(format!("Failed to create entry: {}", e)))?;

        entry
            .set_password(secret)
            .map_err(|e| AppError::Internal(format!("Failed to set secret: {}", e)))?;

        Ok(())
    }

    pub fn get_secret(&self, key: &str) -> Result<String> {
        let entry = Entry::new(&self.service, key)
            .map_err(|e| AppError::Internal(format!("Failed to create entry: {}", e)))?;

        entry
            .get_password()
            .map_err(|e| AppError::Internal(format!("Failed to get secret: {}", e)))
    }

    pub fn delete_secret(&self, key: &str) -> Result<()> {
        let entry = Entry::new(&self.service, key)
            .map_err(|e| AppError::Internal(format!("Failed to create entry: {}", e)))?;

        entry
            .delete_credential()
            .map_err(|e| AppError::Internal(format!("Failed to delete secret: {}", e)))
    }
}
