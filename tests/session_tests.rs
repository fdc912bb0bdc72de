use fleetindex::error::ScoringError;
use fleetindex::scoring::{user_message, RunState, ScoringResponse, ScoringSession};

fn response(run_id: &str) -> ScoringResponse {
    ScoringResponse {
        run_id: Some(run_id.to_string()),
        ..Default::default()
    }
}

#[test]
fn test_begin_marks_busy() {
    let session = ScoringSession::new();
    assert!(!session.is_busy());

    let ticket = session.begin();
    assert!(session.is_busy());
    assert_eq!(session.state(), RunState::Sending);

    assert!(session.complete(ticket, Ok(response("a"))));
    assert!(!session.is_busy());
}

#[test]
fn test_stale_response_is_discarded() {
    let session = ScoringSession::new();

    let first = session.begin();
    let second = session.begin();
    assert!(second.generation() > first.generation());

    // Newer call lands first, older one afterwards.
    assert!(session.complete(second, Ok(response("second"))));
    assert!(!session.complete(first, Ok(response("first"))));

    assert_eq!(session.state(), RunState::Succeeded(response("second")));
}

#[test]
fn test_stale_failure_does_not_clobber_busy_state() {
    let session = ScoringSession::new();

    let first = session.begin();
    let _second = session.begin();

    assert!(!session.complete(first, Err(ScoringError::AuthenticationRequired)));
    assert_eq!(session.state(), RunState::Sending);
}

#[test]
fn test_failure_is_flattened_to_message() {
    let session = ScoringSession::new();
    let ticket = session.begin();

    session.complete(
        ticket,
        Err(ScoringError::RequestFailed {
            status: 400,
            message: "bad fleet size".into(),
        }),
    );
    assert_eq!(session.state(), RunState::Failed("bad fleet size".into()));
}

#[test]
fn test_empty_message_falls_back() {
    let err = ScoringError::RequestFailed {
        status: 500,
        message: String::new(),
    };
    assert_eq!(user_message(&err), "Run failed");
}
