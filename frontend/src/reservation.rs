use gloo_net::http::Request;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    #[default]
    Male,
    Female,
}

impl Gender {
    pub fn label(&self) -> &'static str {
        match self {
            Gender::Male => "남자",
            Gender::Female => "여자",
        }
    }
}

#[derive(Debug, Error)]
pub enum ReserveError {
    #[error("birth date is empty")]
    MissingBirthDate,
    #[error("email is empty")]
    MissingEmail,
    #[error("reservation endpoint is not configured")]
    NotConfigured,
    #[error("failed to serialize reservation: {0}")]
    Encode(String),
    #[error("request failed: {0}")]
    Network(#[from] gloo_net::Error),
    #[error("insert rejected with status {status}: {body}")]
    Rejected { status: u16, body: String },
}

impl ReserveError {
    /// Text shown in the blocking alert.
    pub fn user_message(&self) -> &'static str {
        match self {
            ReserveError::MissingBirthDate => "생년월일을 선택해주세요.",
            ReserveError::MissingEmail => "이메일 주소를 입력해주세요.",
            ReserveError::Rejected { .. } => "예약 저장 중 오류가 발생했어요. 잠시 후 다시 시도해주세요.",
            ReserveError::NotConfigured | ReserveError::Encode(_) | ReserveError::Network(_) => {
                "알 수 없는 오류가 발생했어요. 잠시 후 다시 시도해주세요."
            }
        }
    }
}

/// Row inserted into the reservations table.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Reservation {
    pub gender: Gender,
    pub birth_date: String,
    pub email: String,
}

/// What the form currently holds.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ReservationDraft {
    pub gender: Gender,
    pub birth_date: String,
    pub email: String,
}

impl ReservationDraft {
    pub fn validate(&self) -> Result<Reservation, ReserveError> {
        if self.birth_date.trim().is_empty() {
            return Err(ReserveError::MissingBirthDate);
        }
        let email = self.email.trim();
        if email.is_empty() {
            return Err(ReserveError::MissingEmail);
        }
        Ok(Reservation {
            gender: self.gender,
            birth_date: self.birth_date.trim().to_string(),
            email: email.to_string(),
        })
    }
}

/// Insert-only client for a PostgREST-style table.
#[derive(Clone, Debug, PartialEq)]
pub struct ReservationClient {
    base_url: String,
    anon_key: String,
    table: String,
}

impl ReservationClient {
    pub fn new(base_url: &str, anon_key: &str, table: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            anon_key: anon_key.to_string(),
            table: table.to_string(),
        }
    }

    pub fn from_config() -> Self {
        Self::new(
            config::get_supabase_url(),
            config::get_supabase_anon_key(),
            config::RESERVATION_TABLE,
        )
    }

    pub fn is_configured(&self) -> bool {
        !self.base_url.is_empty() && !self.anon_key.is_empty()
    }

    pub fn endpoint(&self) -> String {
        format!("{}/rest/v1/{}", self.base_url, urlencoding::encode(&self.table))
    }

    pub async fn insert(&self, reservation: &Reservation) -> Result<(), ReserveError> {
        if !self.is_configured() {
            return Err(ReserveError::NotConfigured);
        }

        let request = Request::post(&self.endpoint())
            .header("apikey", &self.anon_key)
            .header("Authorization", &format!("Bearer {}", self.anon_key))
            .header("Prefer", "return=minimal")
            .json(&[reservation])
            .map_err(|e| ReserveError::Encode(e.to_string()))?;

        let response = request.send().await?;
        if response.ok() {
            return Ok(());
        }

        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        Err(ReserveError::Rejected { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn draft(birth_date: &str, email: &str) -> ReservationDraft {
        ReservationDraft {
            gender: Gender::Female,
            birth_date: birth_date.to_string(),
            email: email.to_string(),
        }
    }

    #[test]
    fn empty_birth_date_is_rejected_first() {
        let err = draft("", "").validate().unwrap_err();
        assert!(matches!(err, ReserveError::MissingBirthDate));
        assert_eq!(err.user_message(), "생년월일을 선택해주세요.");
    }

    #[test]
    fn blank_email_is_rejected() {
        let err = draft("1990/04/12", "   ").validate().unwrap_err();
        assert!(matches!(err, ReserveError::MissingEmail));
    }

    #[test]
    fn email_is_not_otherwise_validated() {
        let row = draft("1990/04/12", " not-an-email ").validate().unwrap();
        assert_eq!(row.email, "not-an-email");
    }

    #[test]
    fn row_serializes_with_table_column_names() {
        let row = draft("1990/04/12", "dasoni@naver.com").validate().unwrap();
        assert_eq!(
            serde_json::to_value([&row]).unwrap(),
            json!([{ "gender": "female", "birth_date": "1990/04/12", "email": "dasoni@naver.com" }])
        );
    }

    #[test]
    fn default_draft_is_male_and_empty() {
        let draft = ReservationDraft::default();
        assert_eq!(draft.gender, Gender::Male);
        assert!(draft.birth_date.is_empty());
        assert!(draft.email.is_empty());
    }

    #[test]
    fn endpoint_encodes_table_and_trims_slash() {
        let client = ReservationClient::new("https://abc.supabase.co/", "key", "dasoni-reservations");
        assert_eq!(client.endpoint(), "https://abc.supabase.co/rest/v1/dasoni-reservations");

        let client = ReservationClient::new("https://abc.supabase.co", "key", "pre registrations");
        assert_eq!(client.endpoint(), "https://abc.supabase.co/rest/v1/pre%20registrations");
    }

    #[test]
    fn missing_key_means_not_configured() {
        assert!(!ReservationClient::new("https://abc.supabase.co", "", "t").is_configured());
        assert!(!ReservationClient::new("", "key", "t").is_configured());
        assert!(ReservationClient::new("https://abc.supabase.co", "key", "t").is_configured());
    }
}
