use serde::{Deserialize, Deserializer, Serialize};

/// Treat a JSON `null` list as empty; the server encodes a nil slice that way.
fn deserialize_nullable_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

// Session models
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct CurrentUser {
    #[serde(alias = "Email")]
    pub email: String,
    #[serde(default, alias = "ID")]
    pub id: Option<String>,
}

// Invoice models
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct StagedInvoice {
    #[serde(rename = "ID")]
    pub id: String,
    #[serde(rename = "Sender")]
    pub sender: String,
    #[serde(rename = "Subject")]
    pub subject: String,
    /// Unix seconds
    #[serde(rename = "ReceivedAt")]
    pub received_at: i64,
}

impl StagedInvoice {
    /// Calendar date the invoice arrived, `YYYY-MM-DD` in UTC.
    pub fn received_date(&self) -> String {
        crate::utils::text::format_unix_date(self.received_at)
    }
}

/// Wrapper used when the list endpoint answers `null` instead of `[]`.
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct StagedInvoiceList(
    #[serde(deserialize_with = "deserialize_nullable_list")] pub Vec<StagedInvoice>,
);

/// Body returned by approve/reject on success. All fields are optional since
/// the client only needs the status code.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct ActionOutcome {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub filename: Option<String>,
    #[serde(default)]
    pub save_path: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}
