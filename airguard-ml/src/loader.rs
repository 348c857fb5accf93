//! JSON artifact loading shared by every on-disk type

use std::{fs::File, io::BufReader, path::Path};

use serde::de::DeserializeOwned;

use crate::{ArtifactError, ArtifactResult};

/// Deserialize a JSON file
pub(crate) fn read_json<T: DeserializeOwned>(path: &Path) -> ArtifactResult<T> {
    let file = File::open(path).map_err(|source| ArtifactError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let value = serde_json::from_reader(BufReader::new(file))?;
    log::debug!("Loaded {}", path.display());
    Ok(value)
}
