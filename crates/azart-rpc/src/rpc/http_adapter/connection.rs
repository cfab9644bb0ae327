use std::path::Path;

use reqwest::Certificate;

use crate::error::ConfigError;

/// Read every certificate from a PEM bundle.
///
/// A bundle that yields no certificate is rejected: with built-in roots
/// disabled it would make every TLS handshake fail.
pub(super) fn load_ca_bundle(path: &Path) -> Result<Vec<Certificate>, ConfigError> {
    let pem = std::fs::read(path).map_err(|e| ConfigError::CaBundle {
        path: path.to_owned(),
        reason: e.to_string(),
    })?;
    let certs = Certificate::from_pem_bundle(&pem).map_err(|e| ConfigError::CaBundle {
        path: path.to_owned(),
        reason: e.to_string(),
    })?;
    if certs.is_empty() {
        return Err(ConfigError::CaBundle {
            path: path.to_owned(),
            reason: "no PEM certificates found".to_owned(),
        });
    }
    Ok(certs)
}
