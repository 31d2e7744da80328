use studygroup_core::keys;
use studygroup_core::models::intent::Intent;
use studygroup_core::models::message::{Message, MessageMetadata, Speaker, Understanding};
use studygroup_core::models::persona::PersonaKind;
use studygroup_core::models::session::{Session, SessionStatus};
use studygroup_core::models::student::{ExplanationStyle, StudentProfile};

fn ts(s: &str) -> jiff::Timestamp {
    s.parse().unwrap()
}

#[test]
fn persona_tags_round_trip_through_from_str() {
    for kind in PersonaKind::ALL {
        assert_eq!(kind.as_str().parse::<PersonaKind>().unwrap(), kind);
    }
    assert!("Quizmaster".parse::<PersonaKind>().is_err());
}

#[test]
fn persona_serializes_as_snake_case_tag() {
    assert_eq!(
        serde_json::to_string(&PersonaKind::Motivator).unwrap(),
        "\"motivator\""
    );
}

#[test]
fn intent_tags() {
    assert_eq!(Intent::from_tag(" Topic_Change "), Intent::TopicChange);
    assert_eq!(Intent::from_tag("dance"), Intent::Other);
    assert_eq!(Intent::Greeting.preferred_persona(), None);
    assert_eq!(
        Intent::Challenge.preferred_persona(),
        Some(PersonaKind::Advocate)
    );
    assert_eq!(Understanding::from_tag("SURFACE"), Understanding::Surface);
}

#[test]
fn empty_metadata_serializes_compactly() {
    let json = serde_json::to_value(MessageMetadata::default()).unwrap();
    assert_eq!(json, serde_json::json!({ "is_answer": false }));
}

#[test]
fn only_answers_carry_correctness() {
    let at = ts("2026-03-01T10:00:00Z");
    let chat = Message::new(
        Speaker::Student,
        "hi",
        at,
        MessageMetadata {
            is_correct: Some(true),
            ..MessageMetadata::default()
        },
    );
    assert_eq!(chat.scored_correctness(), None);

    let answer = Message::new(
        Speaker::Student,
        "4",
        at,
        MessageMetadata {
            is_answer: true,
            is_correct: Some(true),
            ..MessageMetadata::default()
        },
    );
    assert_eq!(answer.scored_correctness(), Some(true));
    assert_ne!(chat.id, answer.id);
}

#[test]
fn speaker_maps_to_persona() {
    assert_eq!(Speaker::Student.persona(), None);
    for kind in PersonaKind::ALL {
        assert_eq!(Speaker::from(kind).persona(), Some(kind));
    }
}

#[test]
fn new_session_is_empty_and_active() {
    let at = ts("2026-03-01T10:00:00Z");
    let session = Session::new("s1", "alice", None, at);
    assert_eq!(session.status, SessionStatus::Active);
    assert_eq!(session.active_persona, None);
    assert_eq!(session.message_count(), 0);
    assert_eq!(session.handoff_count(), 0);
    assert_eq!(session.started_at, at);

    let summary = session.summary();
    assert_eq!(summary.session_id, "s1");
    assert_eq!(summary.message_count, 0);
}

#[test]
fn elapsed_minutes_truncates_and_never_goes_negative() {
    let session = Session::new("s1", "alice", None, ts("2026-03-01T10:00:00Z"));
    assert_eq!(session.elapsed_minutes(ts("2026-03-01T10:59:59Z")), 59);
    assert_eq!(session.elapsed_minutes(ts("2026-03-01T09:00:00Z")), 0);
}

#[test]
fn session_without_quiz_metrics_deserializes() {
    let json = serde_json::json!({
        "session_id": "s1",
        "student_id": "alice",
        "topic": "graphs",
        "active_persona": "explainer",
        "status": "paused",
        "messages": [],
        "handoffs": [],
        "started_at": "2026-03-01T10:00:00Z",
        "created_at": "2026-03-01T10:00:00Z",
        "updated_at": "2026-03-01T10:05:00Z"
    });
    let session: Session = serde_json::from_value(json).unwrap();
    assert_eq!(session.active_persona, Some(PersonaKind::Explainer));
    assert_eq!(session.status, SessionStatus::Paused);
    assert_eq!(session.quiz_metrics.total_questions, 0);
}

#[test]
fn streak_counts_consecutive_utc_days() {
    let mut profile = StudentProfile::new("alice");
    profile.record_activity(ts("2026-03-01T23:30:00Z"));
    assert_eq!(profile.streak_days, 1);

    profile.record_activity(ts("2026-03-01T23:59:00Z"));
    assert_eq!(profile.streak_days, 1);

    profile.record_activity(ts("2026-03-02T00:10:00Z"));
    assert_eq!(profile.streak_days, 2);

    profile.record_activity(ts("2026-03-04T08:00:00Z"));
    assert_eq!(profile.streak_days, 1);
}

#[test]
fn explanation_style_wire_names() {
    let style: ExplanationStyle = serde_json::from_str("\"step-by-step\"").unwrap();
    assert_eq!(style, ExplanationStyle::StepByStep);
    assert_eq!(ExplanationStyle::default().as_str(), "analogies");
}

#[test]
fn storage_keys() {
    assert_eq!(keys::session("s1"), "sessions/s1.json");
    assert_eq!(keys::student("alice"), "students/alice.json");
    assert_eq!(keys::performance_prefix("alice"), "performance/alice/");
    assert_eq!(
        keys::performance_record("alice", ts("2026-03-01T10:00:00Z")),
        "performance/alice/2026-03-01T10:00:00Z.json"
    );
    assert!(keys::session("s1").starts_with(keys::SESSIONS_PREFIX));
}
