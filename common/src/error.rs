use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InventoryError {
    #[error("host '{name}' not found in network '{network}'")]
    HostNotFound { network: String, name: String },
}
