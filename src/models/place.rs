use serde::{Deserialize, Serialize};

/// Localized text as returned by the Places API (`displayName`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalizedText {
    pub text: Option<String>,
    pub language_code: Option<String>,
}

/// One place returned by the places search provider.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceRecord {
    pub id: Option<String>,
    pub display_name: Option<LocalizedText>,
    pub formatted_address: Option<String>,
    pub google_maps_uri: Option<String>,
    pub types: Option<Vec<String>>,
}

impl PlaceRecord {
    pub fn name(&self) -> Option<&str> {
        self.display_name.as_ref()?.text.as_deref()
    }

    /// Provider type tags, empty when the provider sent none.
    pub fn type_tags(&self) -> &[String] {
        self.types.as_deref().unwrap_or_default()
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchTextRequest<'a> {
    pub text_query: &'a str,
}

#[derive(Debug, Default, Deserialize)]
pub struct SearchTextResponse {
    pub places: Option<Vec<PlaceRecord>>,
    pub error: Option<ProviderErrorBody>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ProviderErrorBody {
    pub code: Option<u16>,
    pub message: Option<String>,
    pub status: Option<String>,
}
