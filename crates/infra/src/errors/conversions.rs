//! Conversions from external infrastructure errors into domain errors.

use std::io::{Error as IoError, ErrorKind};

use assetdesk_domain::AssetDeskError;
use csv::Error as CsvError;
use reqwest::Error as HttpError;
use serde_json::Error as JsonError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub AssetDeskError);

impl From<InfraError> for AssetDeskError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<AssetDeskError> for InfraError {
    fn from(value: AssetDeskError) -> Self {
        InfraError(value)
    }
}

/// Extension trait to make the conversion logic explicit in tests and within
/// this module.
trait IntoAssetDeskError {
    fn into_assetdesk(self) -> AssetDeskError;
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → AssetDeskError */
/* -------------------------------------------------------------------------- */

impl IntoAssetDeskError for HttpError {
    fn into_assetdesk(self) -> AssetDeskError {
        if self.is_timeout() {
            return AssetDeskError::Network("HTTP request timed out".into());
        }

        #[cfg(not(target_arch = "wasm32"))]
        if self.is_connect() {
            return AssetDeskError::Network("HTTP connection failure".into());
        }

        if self.is_decode() {
            return AssetDeskError::Decode(format!("HTTP response body: {self}"));
        }

        if let Some(status) = self.status() {
            let code = status.as_u16();
            let reason = status.canonical_reason().unwrap_or("unknown status");
            let message = format!("HTTP {code} {reason}");

            return match code {
                401 | 403 => AssetDeskError::Auth(message),
                404 => AssetDeskError::NotFound(message),
                429 => AssetDeskError::Network(message),
                400..=499 => AssetDeskError::InvalidInput(message),
                _ => AssetDeskError::Network(message),
            };
        }

        AssetDeskError::Network(self.to_string())
    }
}

impl From<HttpError> for InfraError {
    fn from(value: HttpError) -> Self {
        InfraError(value.into_assetdesk())
    }
}

/* -------------------------------------------------------------------------- */
/* std::io::Error → AssetDeskError */
/* -------------------------------------------------------------------------- */

impl IntoAssetDeskError for IoError {
    fn into_assetdesk(self) -> AssetDeskError {
        match self.kind() {
            ErrorKind::NotFound => AssetDeskError::NotFound(self.to_string()),
            ErrorKind::PermissionDenied => {
                AssetDeskError::Io(format!("permission denied: {self}"))
            }
            _ => AssetDeskError::Io(self.to_string()),
        }
    }
}

impl From<IoError> for InfraError {
    fn from(value: IoError) -> Self {
        InfraError(value.into_assetdesk())
    }
}

/* -------------------------------------------------------------------------- */
/* csv::Error → AssetDeskError */
/* -------------------------------------------------------------------------- */

impl IntoAssetDeskError for CsvError {
    fn into_assetdesk(self) -> AssetDeskError {
        if self.is_io_error() {
            return AssetDeskError::Io(format!("CSV write failed: {self}"));
        }
        AssetDeskError::Internal(format!("CSV encoding failed: {self}"))
    }
}

impl From<CsvError> for InfraError {
    fn from(value: CsvError) -> Self {
        InfraError(value.into_assetdesk())
    }
}

/* -------------------------------------------------------------------------- */
/* serde_json::Error → AssetDeskError */
/* -------------------------------------------------------------------------- */

impl IntoAssetDeskError for JsonError {
    fn into_assetdesk(self) -> AssetDeskError {
        if self.is_io() {
            return AssetDeskError::Io(self.to_string());
        }
        let (line, column) = (self.line(), self.column());
        AssetDeskError::Decode(format!("invalid JSON at line {line} column {column}: {self}"))
    }
}

impl From<JsonError> for InfraError {
    fn from(value: JsonError) -> Self {
        InfraError(value.into_assetdesk())
    }
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */
