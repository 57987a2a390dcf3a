//! Aggregate view-model documents.
//!
//! The dashboard view-model is a loose JSON document merged from a hardcoded
//! default plus whatever the upstream gateway returned. Every field is
//! optional; consumers go through the typed [`Dashboard`] view, which parses
//! leniently at the boundary instead of assuming shape.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

/// Locally stored user identity. Written once at registration or first
/// login, never overwritten for the lifetime of the store.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Identity {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dob: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub native_place: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
}

impl Default for Identity {
    fn default() -> Self {
        Self {
            name: "Guest".to_string(),
            email: String::new(),
            password: None,
            dob: None,
            native_place: None,
            age: None,
            gender: None,
        }
    }
}

impl Identity {
    /// Provisional identity derived from login credentials: the display name
    /// is the email's local part, or "Guest" when that is empty.
    pub fn provisional(email: &str, password: &str) -> Self {
        let local = email.split('@').next().unwrap_or_default();
        let name = if local.is_empty() { "Guest" } else { local };
        Self {
            name: name.to_string(),
            email: email.to_string(),
            password: Some(password.to_string()),
            ..Self::default()
        }
    }
}

static DEFAULT_DASHBOARD: Lazy<Value> = Lazy::new(|| {
    json!({
        "personalSnapshot": {
            "constitutionOverview": "Balanced with slight Pitta tendency",
            "currentStateSummary": "Mild Pitta aggravation with steady energy",
            "personaTitle": "Focused Explorer",
            "keyTraits": ["Focused", "Driven", "Warm-hearted"],
        },
        "doshaProfile": {
            "primaryAggravatedDosha": "Pitta",
            "secondaryInfluences": ["Vata"],
            "bodyMindImpact": ["Heat, irritability", "Sharp focus"],
            "symptoms": ["Acidity", "Skin warmth"],
        },
        "metabolicDigestive": {
            "agniType": "Tikshna (sharp)",
            "amaLevel": "Low",
            "digestiveStrengthScore": 78,
            "interpretation": "Good digestion with occasional heat; favor cooling foods",
        },
        "extras": {
            "balanceMeter": { "vata": 30, "pitta": 45, "kapha": 25 },
            "climateEffectScore": 62,
            "foodScore": 80,
            "energyCurve": { "morning": 7, "afternoon": 8, "evening": 6 },
            "weeklyTips": [
                "Add coriander to meals",
                "Evening wind-down routine",
                "Hydrate consistently",
            ],
        },
    })
});

/// The hardcoded dashboard document that guarantees the UI always has
/// something renderable, even with every upstream call failed.
pub fn default_dashboard() -> Value {
    DEFAULT_DASHBOARD.clone()
}

/// Shallow merge of `patch` over `base`: top-level keys of `patch` win,
/// nested values are replaced wholesale, never merged. Non-object patches
/// contribute nothing. Pure and total.
pub fn merge_shallow(base: &Value, patch: &Value) -> Value {
    match (base.as_object(), patch.as_object()) {
        (Some(b), Some(p)) => {
            let mut merged = b.clone();
            for (key, value) in p {
                merged.insert(key.clone(), value.clone());
            }
            Value::Object(merged)
        }
        (None, Some(p)) => Value::Object(p.clone()),
        (_, None) => base.clone(),
    }
}

/// Pull a nested attachment out of an upstream envelope: prefer `value[key]`,
/// fall back to the whole value, fall back to `empty` when the value carries
/// nothing at all.
pub fn unwrap_keyed(value: &Value, key: &str, empty: Value) -> Value {
    if let Some(inner) = value.get(key)
        && !inner.is_null()
    {
        return inner.clone();
    }
    if value.is_null() {
        return empty;
    }
    value.clone()
}

// ---------------
// Typed boundary view
// ---------------

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonalSnapshot {
    pub constitution_overview: Option<String>,
    pub current_state_summary: Option<String>,
    pub persona_title: Option<String>,
    pub key_traits: Option<Vec<String>>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DoshaProfile {
    pub primary_aggravated_dosha: Option<String>,
    pub secondary_influences: Option<Vec<String>>,
    pub body_mind_impact: Option<Vec<String>>,
    pub symptoms: Option<Vec<String>>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MetabolicDigestive {
    pub agni_type: Option<String>,
    pub ama_level: Option<String>,
    pub digestive_strength_score: Option<u32>,
    pub interpretation: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DoshaDistribution {
    pub vata: Option<u32>,
    pub pitta: Option<u32>,
    pub kapha: Option<u32>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EnergyCurve {
    pub morning: Option<u32>,
    pub afternoon: Option<u32>,
    pub evening: Option<u32>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Extras {
    pub balance_meter: Option<DoshaDistribution>,
    pub climate_effect_score: Option<u32>,
    pub food_score: Option<u32>,
    pub energy_curve: Option<EnergyCurve>,
    pub weekly_tips: Option<Vec<String>>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Practitioner {
    pub name: Option<String>,
    pub specialty: Option<String>,
    pub location: Option<String>,
    pub contact: Option<String>,
}

/// Typed view over the merged dashboard document. Unknown keys survive a
/// round trip via `rest`, so a typed read never loses upstream data.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Dashboard {
    pub personal_snapshot: Option<PersonalSnapshot>,
    pub dosha_profile: Option<DoshaProfile>,
    pub metabolic_digestive: Option<MetabolicDigestive>,
    pub extras: Option<Extras>,
    pub astro: Option<Value>,
    pub practitioners: Option<Value>,
    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

impl Dashboard {
    /// Lenient boundary parse: anything that does not deserialize as a
    /// dashboard document yields the empty view instead of an error.
    pub fn from_value(value: &Value) -> Dashboard {
        serde_json::from_value(value.clone()).unwrap_or_default()
    }

    /// Practitioner directory as typed records; entries that fail to parse
    /// are skipped, a non-array attachment yields no entries.
    pub fn practitioner_list(&self) -> Vec<Practitioner> {
        let Some(Value::Array(entries)) = &self.practitioners else {
            return Vec::new();
        };
        entries
            .iter()
            .filter_map(|entry| serde_json::from_value(entry.clone()).ok())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_later_key_wins() {
        let default = json!({"a": 1, "b": 1});
        let health = json!({"b": 2});
        let report = json!({"b": 3, "c": 3});

        let merged = merge_shallow(&merge_shallow(&default, &health), &report);
        assert_eq!(merged, json!({"a": 1, "b": 3, "c": 3}));
    }

    #[test]
    fn merge_is_idempotent() {
        let base = json!({"a": 1});
        let patch = json!({"b": {"nested": true}});

        let once = merge_shallow(&base, &patch);
        let twice = merge_shallow(&once, &patch);
        assert_eq!(once, twice);
    }

    #[test]
    fn merge_replaces_nested_values_wholesale() {
        let base = json!({"extras": {"foodScore": 80, "climateEffectScore": 62}});
        let patch = json!({"extras": {"foodScore": 91}});

        let merged = merge_shallow(&base, &patch);
        assert_eq!(merged, json!({"extras": {"foodScore": 91}}));
    }

    #[test]
    fn merge_ignores_non_object_patch() {
        let base = json!({"a": 1});
        assert_eq!(merge_shallow(&base, &json!(null)), base);
        assert_eq!(merge_shallow(&base, &json!("text")), base);
        assert_eq!(merge_shallow(&base, &json!([1, 2])), base);
    }

    #[test]
    fn unwrap_keyed_prefers_inner_key() {
        let envelope = json!({"astro": {"sign": "Leo"}, "meta": 1});
        assert_eq!(
            unwrap_keyed(&envelope, "astro", json!({})),
            json!({"sign": "Leo"})
        );
    }

    #[test]
    fn unwrap_keyed_falls_back_to_whole_value() {
        let bare = json!([{"name": "Dr. Mehta"}]);
        assert_eq!(unwrap_keyed(&bare, "practitioners", json!([])), bare);
    }

    #[test]
    fn unwrap_keyed_empty_on_null() {
        assert_eq!(unwrap_keyed(&Value::Null, "astro", json!({})), json!({}));
    }

    #[test]
    fn default_dashboard_carries_renderable_scores() {
        let doc = default_dashboard();
        assert_eq!(doc["metabolicDigestive"]["digestiveStrengthScore"], 78);
        assert_eq!(doc["extras"]["climateEffectScore"], 62);
        assert_eq!(doc["extras"]["foodScore"], 80);
    }

    #[test]
    fn dashboard_parses_default_document() {
        let view = Dashboard::from_value(&default_dashboard());
        let digestive = view.metabolic_digestive.expect("metabolicDigestive");
        assert_eq!(digestive.digestive_strength_score, Some(78));
        assert_eq!(digestive.agni_type.as_deref(), Some("Tikshna (sharp)"));

        let extras = view.extras.expect("extras");
        assert_eq!(
            extras.balance_meter,
            Some(DoshaDistribution {
                vata: Some(30),
                pitta: Some(45),
                kapha: Some(25),
            })
        );
    }

    #[test]
    fn dashboard_parse_never_fails() {
        assert_eq!(Dashboard::from_value(&json!("garbage")), Dashboard::default());
        assert_eq!(Dashboard::from_value(&json!(null)), Dashboard::default());
        assert_eq!(Dashboard::from_value(&json!([1, 2, 3])), Dashboard::default());
    }

    #[test]
    fn dashboard_round_trips_unknown_keys() {
        let doc = json!({"foodCompatibility": {"notes": "light meals"}, "extras": {}});
        let view = Dashboard::from_value(&doc);
        assert!(view.rest.contains_key("foodCompatibility"));
    }

    #[test]
    fn practitioner_list_tolerates_odd_shapes() {
        let mut view = Dashboard::from_value(&json!({
            "practitioners": [{"name": "Dr. Mehta", "specialty": "Panchakarma"}]
        }));
        assert_eq!(view.practitioner_list().len(), 1);

        view.practitioners = Some(json!({"unexpected": "object"}));
        assert!(view.practitioner_list().is_empty());
    }

    #[test]
    fn provisional_identity_from_email() {
        let identity = Identity::provisional("ana@x.com", "secret");
        assert_eq!(identity.name, "ana");
        assert_eq!(identity.email, "ana@x.com");

        let guest = Identity::provisional("", "secret");
        assert_eq!(guest.name, "Guest");
    }
}
