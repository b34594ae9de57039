use hwtree_common::InventoryError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("check '{check}' failed\n--- expected\n{expected}--- actual\n{actual}")]
    Mismatch {
        check: &'static str,
        expected: String,
        actual: String,
    },

    #[error(transparent)]
    MissingHost(#[from] InventoryError),
}
