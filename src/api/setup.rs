use serde::{Deserialize, Serialize};

use crate::core::{DecimalPlaces, GraphConfig, StartValues};
use crate::error::{GraphError, GraphResult};

pub const SETUP_JSON_SCHEMA_V1: u32 = 1;

/// One-time widget configuration supplied by the host application.
///
/// The graph list fixes the series count for the session; series are
/// addressed by their position in this list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSetup {
    pub graphs: Vec<GraphConfig>,
    #[serde(default)]
    pub start_values: StartValues,
    #[serde(default)]
    pub decimal_places: DecimalPlaces,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct SetupJsonContractV1 {
    schema_version: u32,
    setup: ChartSetup,
}

impl ChartSetup {
    #[must_use]
    pub fn new(graphs: Vec<GraphConfig>) -> Self {
        Self {
            graphs,
            start_values: StartValues::default(),
            decimal_places: DecimalPlaces::default(),
        }
    }

    #[must_use]
    pub fn with_start_values(mut self, start_values: StartValues) -> Self {
        self.start_values = start_values;
        self
    }

    #[must_use]
    pub fn with_decimal_places(mut self, decimal_places: DecimalPlaces) -> Self {
        self.decimal_places = decimal_places;
        self
    }

    pub fn validate(&self) -> GraphResult<()> {
        if self.graphs.is_empty() {
            return Err(GraphError::InvalidData(
                "setup must declare at least one graph".to_owned(),
            ));
        }
        if !self.start_values.is_finite() {
            return Err(GraphError::InvalidData(
                "start values must be finite".to_owned(),
            ));
        }
        Ok(())
    }

    pub fn to_json_contract_v1_pretty(&self) -> GraphResult<String> {
        let payload = SetupJsonContractV1 {
            schema_version: SETUP_JSON_SCHEMA_V1,
            setup: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            GraphError::InvalidData(format!("failed to serialize setup contract v1: {e}"))
        })
    }

    /// Parses either a bare `ChartSetup` or a versioned contract payload.
    pub fn from_json_compat_str(input: &str) -> GraphResult<Self> {
        if let Ok(setup) = serde_json::from_str::<Self>(input) {
            setup.validate()?;
            return Ok(setup);
        }
        let payload: SetupJsonContractV1 = serde_json::from_str(input)
            .map_err(|e| GraphError::InvalidData(format!("failed to parse setup json: {e}")))?;
        if payload.schema_version != SETUP_JSON_SCHEMA_V1 {
            return Err(GraphError::InvalidData(format!(
                "unsupported setup schema version: {}",
                payload.schema_version
            )));
        }
        payload.setup.validate()?;
        Ok(payload.setup)
    }
}
