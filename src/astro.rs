//! Astrology onboarding flow.
//!
//! Submits birth details straight to the gateway and stores the returned
//! insight document under the legacy astro-insights key. This flow never
//! fails on upstream problems: a hardcoded fallback document keeps the
//! insights screen renderable.

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tracing::debug;

use crate::error::Result;
use crate::gateway::Gateway;
use crate::store::SessionStore;

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AstroRequest {
    pub email: String,
    pub dob: String,
    pub tob: String,
    pub birth_place: String,
    pub current_location: String,
}

/// Insight document shown when the astrology upstream is unavailable.
pub fn fallback_insights() -> Value {
    json!({
        "greeting": "Namaste",
        "personaTitle": "Balanced Seeker",
        "characterSummary": "Grounded yet curious",
        "currentState": "Kapha slightly elevated",
        "doshaDistribution": { "vata": 30, "pitta": 35, "kapha": 35 },
        "interpretation": "Spring Kapha context with stable digestion; keep food light and warm.",
        "natureInsights": [
            "Consistent routines bring stability",
            "Warmth and lightness support energy",
            "Humid climate increases Kapha — choose drying spices",
        ],
    })
}

/// Submit onboarding details and persist the resulting insight document.
///
/// Upstream failure or a null response degrades to the fallback document;
/// only a storage error propagates.
pub async fn onboard(
    gateway: &Gateway,
    store: &SessionStore,
    request: &AstroRequest,
) -> Result<Value> {
    let payload = serde_json::to_value(request)?;
    let insights = match gateway.astro_onboarding(&payload).await {
        Ok(Value::Null) => fallback_insights(),
        Ok(document) => document,
        Err(err) => {
            debug!(%err, "astro onboarding degraded to fallback insights");
            fallback_insights()
        }
    };

    store.set_astro_insights(&insights)?;
    Ok(insights)
}
