//! Session bootstrap.
//!
//! Runs once per login: read-or-create the identity, fan out the four
//! upstream calls, settle them all, merge whatever came back over the
//! hardcoded default document, persist. Total upstream unavailability still
//! yields a fully renderable dashboard.

use std::future::Future;

use serde_json::{Value, json};
use tracing::{debug, info};

use crate::error::Result;
use crate::gateway::Gateway;
use crate::model::{self, Identity, default_dashboard};
use crate::store::SessionStore;

/// Build the aggregate view-model for a login and persist it.
///
/// The four upstream calls run concurrently and are joined with an
/// all-settle barrier: a failed or malformed response contributes `{}` and
/// never fails the bootstrap.
pub async fn bootstrap(
    gateway: &Gateway,
    store: &SessionStore,
    email: &str,
    password: &str,
) -> Result<Value> {
    let identity = store.set_identity_if_absent(Identity::provisional(email, password))?;

    let defaults = default_dashboard();
    let report_context = json!({ "user": identity, "context": defaults });

    let (health, report, astro, practitioner) = futures::join!(
        settle(gateway.health()),
        settle(gateway.report(&report_context)),
        settle(gateway.astro_summary()),
        settle(gateway.practitioner()),
    );

    let combined = assemble(&defaults, &health, &report, &astro, &practitioner);
    store.set_view_model(&combined)?;
    info!(email, "session bootstrap complete");
    Ok(combined)
}

/// Convert a settled upstream outcome into its document contribution:
/// success passes through, failure becomes `{}`.
async fn settle(call: impl Future<Output = Result<Value>>) -> Value {
    match call.await {
        Ok(value) => value,
        Err(err) => {
            debug!(%err, "bootstrap call settled as empty");
            json!({})
        }
    }
}

/// Pure merge of the settled partials, in fixed precedence order: defaults,
/// then health, then report (later top-level keys win); astrology and the
/// practitioner directory are attached under their own sub-keys.
pub fn assemble(
    defaults: &Value,
    health: &Value,
    report: &Value,
    astro: &Value,
    practitioner: &Value,
) -> Value {
    let mut combined = model::merge_shallow(&model::merge_shallow(defaults, health), report);
    if let Some(doc) = combined.as_object_mut() {
        doc.insert(
            "astro".to_string(),
            model::unwrap_keyed(astro, "astro", json!({})),
        );
        doc.insert(
            "practitioners".to_string(),
            model::unwrap_keyed(practitioner, "practitioners", json!([])),
        );
    }
    combined
}
