//! Command execution helpers
//!
//! Every command goes through [`execute_command`] so timing and outcome
//! logging look the same everywhere.

use std::future::Future;
use std::time::Instant;

use assetdesk_domain::Result as DomainResult;
use tracing::debug;

use crate::utils::logging::{error_label, log_command_execution};

/// Run `command_fn`, then log how long it took and whether it succeeded.
///
/// # Example
///
/// ```rust,ignore
/// pub async fn inventory_years(ctx: &AppContext, kind: InventoryKind) -> Result<Vec<i32>> {
///     execute_command("inventory::years", || ctx.inventory.years(kind)).await
/// }
/// ```
pub async fn execute_command<F, Fut, T>(command_name: &str, command_fn: F) -> DomainResult<T>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = DomainResult<T>>,
{
    let start = Instant::now();

    let result = command_fn().await;

    let elapsed = start.elapsed();
    if let Err(err) = &result {
        debug!(
            command = command_name,
            error_type = error_label(err),
            error = %err,
            "command failed"
        );
    }
    log_command_execution(command_name, elapsed, result.is_ok());

    result
}

#[cfg(test)]
mod tests {
    use assetdesk_domain::AssetDeskError;

    use super::*;

    #[tokio::test]
    async fn passes_result_through() {
        let ok = execute_command("test::ok", || async { Ok::<_, AssetDeskError>(7) })
            .await;
        assert_eq!(ok.unwrap(), 7);

        let err = execute_command("test::err", || async {
            Err::<(), _>(AssetDeskError::InvalidInput("nothing selected".into()))
        })
        .await;
        assert!(matches!(err, Err(AssetDeskError::InvalidInput(_))));
    }
}
