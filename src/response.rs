//! Response payloads for the `/validate/{code}` and `/generate/{dob}/{gender}`
//! endpoints, independent of any web framework.

use serde::{Deserialize, Serialize};

use crate::{INVALID_REQUEST, PersonalCode, generate, prelude::*, validate};

/// HTTP status a payload is reported with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Status {
    #[display(fmt = "200 OK")]
    Ok,
    #[display(fmt = "400 Bad Request")]
    BadRequest,
}

impl Status {
    pub const fn code(self) -> u16 {
        match self {
            Self::Ok => 200,
            Self::BadRequest => 400,
        }
    }

    pub const fn is_success(self) -> bool {
        matches!(self, Self::Ok)
    }
}

/// `{"valid": bool}`, reported with 200 whatever the outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidateResponse {
    pub valid: bool,
}

impl ValidateResponse {
    pub const fn status(&self) -> Status {
        Status::Ok
    }
}

/// `{"codes": [...]}` on success, `{"error": "Invalid request"}` otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GenerateResponse {
    Codes { codes: Vec<PersonalCode> },
    Error { error: String },
}

impl GenerateResponse {
    /// Wraps generated codes; an empty set becomes the error payload.
    pub fn from_codes(codes: Vec<PersonalCode>) -> Self {
        if codes.is_empty() {
            Self::Error {
                error: INVALID_REQUEST.to_owned(),
            }
        } else {
            Self::Codes { codes }
        }
    }

    pub const fn status(&self) -> Status {
        match self {
            Self::Codes { .. } => Status::Ok,
            Self::Error { .. } => Status::BadRequest,
        }
    }
}

pub fn validate_response(code: &str) -> ValidateResponse {
    ValidateResponse {
        valid: validate(code),
    }
}

pub fn generate_response(dob: &str, gender: &str) -> GenerateResponse {
    GenerateResponse::from_codes(generate(dob, gender))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_response_is_always_ok() {
        let valid = validate_response("37605030299");
        assert!(valid.valid);
        assert_eq!(valid.status(), Status::Ok);

        let invalid = validate_response("abc");
        assert!(!invalid.valid);
        assert_eq!(invalid.status().code(), 200);
    }

    #[test]
    fn test_validate_response_json() {
        let json = serde_json::to_string(&validate_response("90000000000")).unwrap();
        assert_eq!(json, r#"{"valid":true}"#);
        let json = serde_json::to_string(&validate_response("70001010001")).unwrap();
        assert_eq!(json, r#"{"valid":false}"#);
    }

    #[test]
    fn test_generate_response_success() {
        let response = generate_response("1950-01-01", "1");
        assert_eq!(response.status(), Status::Ok);
        assert!(response.status().is_success());
        match &response {
            GenerateResponse::Codes { codes } => {
                assert_eq!(codes.len(), 1000);
                assert_eq!(codes[0].to_string(), "35001010003");
            }
            GenerateResponse::Error { error } => panic!("unexpected error payload: {error}"),
        }

        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["codes"][0], "35001010003");
        assert_eq!(value["codes"].as_array().map(Vec::len), Some(1000));
    }

    #[test]
    fn test_generate_response_error() {
        let response = generate_response("1799-12-31", "1");
        assert_eq!(response.status(), Status::BadRequest);
        assert_eq!(response.status().code(), 400);
        assert_eq!(response.status().to_string(), "400 Bad Request");

        let json = serde_json::to_string(&response).unwrap();
        assert_eq!(json, r#"{"error":"Invalid request"}"#);
    }

    #[test]
    fn test_generate_response_roundtrip() {
        let json = r#"{"codes":["35001010003","35001010014"]}"#;
        let response: GenerateResponse = serde_json::from_str(json).unwrap();
        assert!(matches!(response, GenerateResponse::Codes { ref codes } if codes.len() == 2));

        let json = r#"{"error":"Invalid request"}"#;
        let response: GenerateResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.status(), Status::BadRequest);
    }
}
