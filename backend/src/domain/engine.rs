//! Engine data model and sample records.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Creation timestamp shared by every synthesized sample record.
const SAMPLE_CREATED_AT: i64 = 1_655_476_800;

/// Motor unit exposed by the engines resource.
///
/// The engine store is wired for parity with the user maps but never
/// populated; every engine response is synthesized via [`Engine::sample`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Engine {
    /// Engine identifier.
    pub id: String,
    pub human_id: i64,
    /// Creation time as unix seconds.
    pub created_at: i64,
    pub max_speed_pm: i64,
    pub nominal_voltage: i64,
    pub nominal_current: i64,
    pub weight: i64,
}

impl Engine {
    /// Synthesize the fixed sample record served for `id`.
    pub fn sample(id: impl Into<String>, human_id: i64) -> Self {
        Self {
            id: id.into(),
            human_id,
            created_at: SAMPLE_CREATED_AT,
            max_speed_pm: 100,
            nominal_voltage: 120,
            nominal_current: 10,
            weight: 100,
        }
    }
}
