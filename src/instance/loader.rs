//! JSON instance loading.
//!
//! Reads the instance generator's file format:
//!
//! ```json
//! {
//!   "configuracao": { "n_jobs": 3, "n_maquinas": 1, "codigo_cenario": "S1" },
//!   "matriz_setup": [[null, 1, 1], [1, null, 1], [1, 1, null]],
//!   "tempos_processamento": [3, 2, 4],
//!   "ready_times": [0, 0, 0]
//! }
//! ```
//!
//! The generator writes `null` on the setup diagonal; null entries load as 0.
//! All structural checks are delegated to [`Instance::new`].

use std::io::Read;

use serde::Deserialize;

use super::Instance;
use crate::error::InstanceError;

#[derive(Debug, Deserialize)]
struct RawInstance {
    #[serde(rename = "configuracao")]
    config: RawConfig,
    #[serde(rename = "matriz_setup")]
    setup_matrix: Vec<Vec<Option<f64>>>,
    #[serde(rename = "tempos_processamento")]
    processing_times: Vec<f64>,
    ready_times: Vec<f64>,
}

#[derive(Debug, Deserialize)]
struct RawConfig {
    n_jobs: usize,
    #[serde(rename = "n_maquinas")]
    n_machines: usize,
    #[serde(rename = "codigo_cenario", default)]
    scenario: Option<String>,
}

impl RawInstance {
    fn into_instance(self) -> Result<Instance, InstanceError> {
        if self.processing_times.len() != self.config.n_jobs {
            return Err(InstanceError::LengthMismatch {
                field: "processing_times",
                expected: self.config.n_jobs,
                found: self.processing_times.len(),
            });
        }

        let setup_matrix = self
            .setup_matrix
            .into_iter()
            .map(|row| row.into_iter().map(|s| s.unwrap_or(0.0)).collect())
            .collect();

        let instance = Instance::new(
            self.config.n_machines,
            self.processing_times,
            self.ready_times,
            setup_matrix,
        )?;

        Ok(match self.config.scenario {
            Some(code) => instance.with_scenario(code),
            None => instance,
        })
    }
}

impl Instance {
    /// Parses an instance from a JSON string.
    ///
    /// # Errors
    ///
    /// [`InstanceError::Json`] for syntax or schema errors, otherwise any
    /// validation error from [`Instance::new`].
    pub fn from_json_str(json: &str) -> Result<Self, InstanceError> {
        let raw: RawInstance = serde_json::from_str(json)?;
        raw.into_instance()
    }

    /// Parses an instance from a reader (e.g. an open file).
    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self, InstanceError> {
        let raw: RawInstance = serde_json::from_reader(reader)?;
        raw.into_instance()
    }
}
