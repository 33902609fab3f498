//! QR scan session state machine
//!
//! One session per scanner open. The session owns the duplicate-decode
//! guard: camera frameworks keep emitting detections after the first hit,
//! so at most one decode is ever accepted per session. All transitions go
//! through [`ScanSession::handle`].

use serde::Deserialize;

use crate::error::{ClientError, ClientResult};

/// Company identity decoded from a QR code
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompanyQr {
    /// Company id, absent for legacy name-only codes
    pub company_id: Option<i64>,
    pub name: String,
}

/// Wire shape of the JSON QR payload
#[derive(Debug, Deserialize)]
struct QrPayload {
    #[serde(alias = "companyId")]
    id: Option<i64>,
    name: Option<String>,
}

impl CompanyQr {
    /// Parse a raw scanned string into a company identity
    ///
    /// Accepts the JSON payload format and, as a fallback, legacy codes
    /// prefixed "empresa-" which carry a name but no id.
    pub fn parse(raw: &str) -> ClientResult<Self> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(ClientError::InvalidQr("empty payload".to_string()));
        }

        match serde_json::from_str::<QrPayload>(raw) {
            Ok(payload) => match (payload.id, payload.name) {
                (id, Some(name)) if !name.is_empty() => Ok(Self {
                    company_id: id,
                    name,
                }),
                _ => Err(ClientError::InvalidQr(
                    "payload missing company name".to_string(),
                )),
            },
            Err(_) => {
                if let Some(name) = raw.strip_prefix("empresa-") {
                    if name.is_empty() {
                        return Err(ClientError::InvalidQr("empty legacy payload".to_string()));
                    }
                    Ok(Self {
                        company_id: None,
                        name: name.to_string(),
                    })
                } else {
                    Err(ClientError::InvalidQr(format!(
                        "unrecognized payload: {}",
                        raw
                    )))
                }
            }
        }
    }
}

/// Session lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScanState {
    /// Scanner is not open
    #[default]
    Idle,
    /// Scanner opened, waiting on camera permission
    AwaitingPermission,
    /// Camera active, watching for codes
    Scanning,
    /// One code accepted; further detections are ignored
    Decoded,
    /// Camera permission denied, session is dead
    Denied,
    /// Session closed
    Closed,
}

/// Events fed into the session
#[derive(Debug, Clone)]
pub enum ScanInput {
    /// User opened the scanner
    Open,
    /// Platform granted camera access
    PermissionGranted,
    /// Platform denied camera access
    PermissionDenied,
    /// Camera detected a code with this raw content
    CodeDetected(String),
    /// User closed the scanner
    Close,
}

/// Result of a transition
#[derive(Debug)]
pub enum ScanOutput {
    /// Ask the platform for camera permission
    PermissionRequested,
    /// Permission granted, camera is now active
    CameraActivated,
    /// First valid code of the session
    CodeAccepted(CompanyQr),
    /// Code detected but unparseable; session keeps scanning
    ScanFailed(ClientError),
    /// Detection after the first accepted code, dropped
    DuplicateIgnored,
    /// Permission denied, session will not scan
    SessionDenied,
    /// Session closed
    Closed,
    /// Input did not apply in the current state
    Ignored,
}

/// One scanner-open worth of state
#[derive(Debug, Default)]
pub struct ScanSession {
    state: ScanState,
}

impl ScanSession {
    /// Create a session in the idle state
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state
    pub fn state(&self) -> ScanState {
        self.state
    }

    /// Whether the camera should be running
    pub fn is_scanning(&self) -> bool {
        self.state == ScanState::Scanning
    }

    /// Apply an input and return what happened
    pub fn handle(&mut self, input: ScanInput) -> ScanOutput {
        let output = match (self.state, input) {
            (ScanState::Idle, ScanInput::Open) => {
                self.state = ScanState::AwaitingPermission;
                ScanOutput::PermissionRequested
            }
            (ScanState::AwaitingPermission, ScanInput::PermissionGranted) => {
                self.state = ScanState::Scanning;
                ScanOutput::CameraActivated
            }
            (ScanState::AwaitingPermission, ScanInput::PermissionDenied) => {
                self.state = ScanState::Denied;
                ScanOutput::SessionDenied
            }
            (ScanState::Scanning, ScanInput::CodeDetected(raw)) => match CompanyQr::parse(&raw) {
                Ok(company) => {
                    self.state = ScanState::Decoded;
                    ScanOutput::CodeAccepted(company)
                }
                // Stay scanning; the next frame may carry a good code
                Err(e) => ScanOutput::ScanFailed(e),
            },
            (ScanState::Decoded, ScanInput::CodeDetected(_)) => ScanOutput::DuplicateIgnored,
            (ScanState::Idle, ScanInput::Close) => ScanOutput::Ignored,
            (_, ScanInput::Close) => {
                self.state = ScanState::Closed;
                ScanOutput::Closed
            }
            (_, _) => ScanOutput::Ignored,
        };

        tracing::debug!(state = ?self.state, "scan transition");
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scanning_session() -> ScanSession {
        let mut session = ScanSession::new();
        session.handle(ScanInput::Open);
        session.handle(ScanInput::PermissionGranted);
        assert_eq!(session.state(), ScanState::Scanning);
        session
    }

    #[test]
    fn test_parse_json_payload() {
        let qr = CompanyQr::parse(r#"{"id": 5, "name": "CafeCo"}"#).unwrap();
        assert_eq!(qr.company_id, Some(5));
        assert_eq!(qr.name, "CafeCo");
    }

    #[test]
    fn test_parse_company_id_alias() {
        let qr = CompanyQr::parse(r#"{"companyId": 9, "name": "Pizzeria"}"#).unwrap();
        assert_eq!(qr.company_id, Some(9));
    }

    #[test]
    fn test_parse_legacy_prefix() {
        let qr = CompanyQr::parse("empresa-CafeCo").unwrap();
        assert_eq!(qr.company_id, None);
        assert_eq!(qr.name, "CafeCo");
    }

    #[test]
    fn test_parse_rejects_empty_and_garbage() {
        assert!(matches!(
            CompanyQr::parse("   "),
            Err(ClientError::InvalidQr(_))
        ));
        assert!(matches!(
            CompanyQr::parse("https://example.com/menu"),
            Err(ClientError::InvalidQr(_))
        ));
        // JSON without a name is incomplete even when it parses
        assert!(matches!(
            CompanyQr::parse(r#"{"id": 5}"#),
            Err(ClientError::InvalidQr(_))
        ));
    }

    #[test]
    fn test_exactly_one_decode_per_session() {
        let mut session = scanning_session();

        let first = session.handle(ScanInput::CodeDetected(
            r#"{"id": 5, "name": "CafeCo"}"#.to_string(),
        ));
        assert!(matches!(first, ScanOutput::CodeAccepted(_)));

        let second = session.handle(ScanInput::CodeDetected(
            r#"{"id": 5, "name": "CafeCo"}"#.to_string(),
        ));
        assert!(matches!(second, ScanOutput::DuplicateIgnored));
        assert_eq!(session.state(), ScanState::Decoded);
    }

    #[test]
    fn test_malformed_then_valid_recovers() {
        let mut session = scanning_session();

        let bad = session.handle(ScanInput::CodeDetected("garbage".to_string()));
        assert!(matches!(bad, ScanOutput::ScanFailed(_)));
        assert_eq!(session.state(), ScanState::Scanning);

        let good = session.handle(ScanInput::CodeDetected(
            r#"{"id": 5, "name": "CafeCo"}"#.to_string(),
        ));
        assert!(matches!(good, ScanOutput::CodeAccepted(_)));
    }

    #[test]
    fn test_denied_is_terminal_for_scanning() {
        let mut session = ScanSession::new();
        session.handle(ScanInput::Open);
        let out = session.handle(ScanInput::PermissionDenied);
        assert!(matches!(out, ScanOutput::SessionDenied));
        assert_eq!(session.state(), ScanState::Denied);

        let out = session.handle(ScanInput::CodeDetected("anything".to_string()));
        assert!(matches!(out, ScanOutput::Ignored));
    }

    #[test]
    fn test_close_from_any_open_state() {
        let mut session = scanning_session();
        let out = session.handle(ScanInput::Close);
        assert!(matches!(out, ScanOutput::Closed));
        assert_eq!(session.state(), ScanState::Closed);

        // Closed sessions accept nothing further
        let out = session.handle(ScanInput::CodeDetected("x".to_string()));
        assert!(matches!(out, ScanOutput::Ignored));
    }
}
