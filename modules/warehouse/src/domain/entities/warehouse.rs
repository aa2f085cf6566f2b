// Warehouse entity - physical location holding stock

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::WarehouseError;
use crate::domain::value_objects::WarehouseId;

/// Warehouse entity. Reservations, stock-ins and transfers refuse an
/// inactive warehouse; history stays readable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Warehouse {
    id: WarehouseId,
    code: String,
    name: String,
    address: Option<String>,
    is_active: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Warehouse {
    /// Creates a new active warehouse.
    pub fn create(
        code: impl Into<String>,
        name: impl Into<String>,
        address: Option<String>,
    ) -> Result<Self, WarehouseError> {
        let code = code.into();
        Self::validate_code(&code)?;
        let now = Utc::now();
        Ok(Self {
            id: WarehouseId::new(),
            code,
            name: name.into(),
            address,
            is_active: true,
            created_at: now,
            updated_at: now,
        })
    }

    /// Reconstitutes a Warehouse from persistence
    #[allow(clippy::too_many_arguments)]
    pub fn reconstitute(
        id: WarehouseId,
        code: String,
        name: String,
        address: Option<String>,
        is_active: bool,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            code,
            name,
            address,
            is_active,
            created_at,
            updated_at,
        }
    }

    fn validate_code(code: &str) -> Result<(), WarehouseError> {
        let len_ok = (2..=20).contains(&code.len());
        let chars_ok = code.chars().all(|c| c.is_ascii_alphanumeric() || c == '-');
        if len_ok && chars_ok {
            Ok(())
        } else {
            Err(WarehouseError::InvalidWarehouseCode)
        }
    }

    /// Updates the display attributes.
    pub fn update(&mut self, name: Option<String>, address: Option<String>) {
        if let Some(name) = name {
            self.name = name;
        }
        if let Some(address) = address {
            self.address = Some(address);
        }
        self.updated_at = Utc::now();
    }

    pub fn activate(&mut self) {
        self.is_active = true;
        self.updated_at = Utc::now();
    }

    pub fn deactivate(&mut self) {
        self.is_active = false;
        self.updated_at = Utc::now();
    }

    pub fn id(&self) -> WarehouseId {
        self.id
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_warehouse() {
        let warehouse = Warehouse::create("WH-MAIN", "Main warehouse", None).unwrap();

        assert_eq!(warehouse.code(), "WH-MAIN");
        assert_eq!(warehouse.name(), "Main warehouse");
        assert!(warehouse.is_active());
    }

    #[test]
    fn test_invalid_code() {
        assert!(matches!(
            Warehouse::create("a", "too short", None),
            Err(WarehouseError::InvalidWarehouseCode)
        ));
        assert!(matches!(
            Warehouse::create("has spaces", "bad chars", None),
            Err(WarehouseError::InvalidWarehouseCode)
        ));
    }

    #[test]
    fn test_deactivate_and_activate() {
        let mut warehouse = Warehouse::create("WH-01", "North", None).unwrap();

        warehouse.deactivate();
        assert!(!warehouse.is_active());

        warehouse.activate();
        assert!(warehouse.is_active());
    }

    #[test]
    fn test_update_keeps_missing_fields() {
        let mut warehouse =
            Warehouse::create("WH-01", "North", Some("1 Dock Rd".to_string())).unwrap();

        warehouse.update(Some("North annex".to_string()), None);
        assert_eq!(warehouse.name(), "North annex");
        assert_eq!(warehouse.address(), Some("1 Dock Rd"));
    }
}
