use std::path::Path;

use thiserror::Error;

// ---------------------------------------------------------------------------
// Dataset acquisition
// ---------------------------------------------------------------------------

/// Remote location of the dataset CSV.
pub const DATASET_URL: &str =
    "https://raw.githubusercontent.com/swarajpande4/pokemon-analysis/main/dataset/pokemon.csv";

/// Local cache file, created next to the executable on first run.
pub const DATASET_FILE: &str = "pokemon.csv";

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("downloading dataset")]
    Http(#[from] reqwest::Error),
    #[error("writing dataset to disk")]
    Io(#[from] std::io::Error),
}

/// Make sure a local copy of the dataset exists.
///
/// If `path` is already present this is a no-op and no network request is
/// made. Otherwise the file is fetched from `url` with a single blocking GET
/// and the response body is written verbatim.
pub fn ensure_dataset(path: &Path, url: &str) -> Result<(), FetchError> {
    if path.exists() {
        log::debug!("{} already present, skipping download", path.display());
        return Ok(());
    }

    log::info!("Downloading dataset from {url}");
    let response = reqwest::blocking::get(url)?.error_for_status()?;
    let bytes = response.bytes()?;
    std::fs::write(path, &bytes)?;
    log::info!("Wrote {} bytes to {}", bytes.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn existing_file_skips_the_network() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pokemon.csv");
        std::fs::write(&path, b"cached").unwrap();

        // The URL is unroutable; touching the network would error out.
        ensure_dataset(&path, "http://invalid.invalid/pokemon.csv").unwrap();

        assert_eq!(std::fs::read(&path).unwrap(), b"cached");
    }

    #[test]
    fn missing_file_with_dead_url_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pokemon.csv");

        let err = ensure_dataset(&path, "http://invalid.invalid/pokemon.csv");
        assert!(matches!(err, Err(FetchError::Http(_))));
        assert!(!path.exists());
    }
}
