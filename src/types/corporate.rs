#![allow(missing_docs)]
//! Corporate action, announcement, and board-meeting types.

use serde::Deserialize;

/// Market segment selector shared by the corporate-filing endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Segment {
    #[default]
    Equities,
    Sme,
    Debt,
    Mf,
}

impl Segment {
    /// Query-parameter value expected by the API (`index=` segment).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Equities => "equities",
            Self::Sme => "sme",
            Self::Debt => "debt",
            Self::Mf => "mf",
        }
    }
}

/// One corporate action (dividend, split, bonus, ...).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CorporateAction {
    pub symbol: String,
    #[serde(default)]
    pub series: Option<String>,
    /// Action description, e.g. `"Dividend - Rs 10 Per Share"`.
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default)]
    pub ex_date: Option<String>,
    #[serde(default)]
    pub rec_date: Option<String>,
    #[serde(default)]
    pub comp: Option<String>,
    #[serde(default)]
    pub isin: Option<String>,
    #[serde(default)]
    pub face_val: Option<String>,
}

/// One corporate announcement filing.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Announcement {
    pub symbol: String,
    #[serde(default)]
    pub desc: Option<String>,
    /// Filing timestamp.
    #[serde(default)]
    pub an_dt: Option<String>,
    #[serde(default)]
    pub attchmnt_file: Option<String>,
    #[serde(default)]
    pub attchmnt_text: Option<String>,
    #[serde(default)]
    pub sm_name: Option<String>,
}

/// One scheduled board meeting.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardMeeting {
    pub bm_symbol: String,
    #[serde(default)]
    pub bm_purpose: Option<String>,
    #[serde(default)]
    pub bm_desc: Option<String>,
    #[serde(default)]
    pub bm_date: Option<String>,
    #[serde(default)]
    pub sm_name: Option<String>,
}
