use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub is_available: bool,
    pub is_active: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_weight: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_per_km: Option<f64>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewVehicle {
    pub name: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub is_available: bool,
    pub is_active: bool,
    pub max_weight: Option<f64>,
    pub price_per_km: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateVehicle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_available: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(
        default,
        deserialize_with = "weight_from_number_or_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub max_weight: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_per_km: Option<f64>,
}

#[derive(Debug, Clone, Default)]
pub struct VehicleFilter {
    pub is_available: Option<bool>,
    pub is_active: Option<bool>,
}

/// Create payload as it arrives over the wire. Legacy clients send
/// `maxWeight` as a string, so it is normalized to a number here, at the
/// boundary, and nowhere else.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateVehicleRequest {
    pub name: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub is_available: Option<bool>,
    pub is_active: Option<bool>,
    #[serde(default, deserialize_with = "weight_from_number_or_string")]
    pub max_weight: Option<f64>,
    pub price_per_km: Option<f64>,
}

fn weight_from_number_or_string<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrString {
        Number(f64),
        Text(String),
    }

    match Option::<NumberOrString>::deserialize(deserializer)? {
        None => Ok(None),
        Some(NumberOrString::Number(n)) => Ok(Some(n)),
        Some(NumberOrString::Text(s)) => s
            .trim()
            .parse::<f64>()
            .map(Some)
            .map_err(|_| serde::de::Error::custom(format!("maxWeight is not numeric: {s:?}"))),
    }
}
