//! End-to-end evaluation pipeline tests against the in-memory adapters.

use std::sync::Arc;

use haven_sentinel::adapters::events::InMemoryEventBus;
use haven_sentinel::adapters::moderation::InMemoryModeratorNotifier;
use haven_sentinel::adapters::registry::InMemoryTrackerRegistry;
use haven_sentinel::application::{EvaluateMessageCommand, EvaluateMessageHandler};
use haven_sentinel::config::DetectionConfig;
use haven_sentinel::domain::escalation::InterventionTier;
use haven_sentinel::domain::foundation::{SessionId, Timestamp, UserId};
use haven_sentinel::domain::resources::crisis_resources;
use haven_sentinel::domain::risk::RiskLevel;
use haven_sentinel::ports::TrackerRegistry;

type Handler =
    EvaluateMessageHandler<InMemoryEventBus, InMemoryModeratorNotifier, InMemoryTrackerRegistry>;

struct Harness {
    handler: Handler,
    bus: Arc<InMemoryEventBus>,
    notifier: Arc<InMemoryModeratorNotifier>,
    registry: Arc<InMemoryTrackerRegistry>,
    user_id: String,
    session_id: SessionId,
}

/// Captures the handler's tracing output in test logs. Safe to call from
/// every test; only the first registration wins.
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "haven_sentinel=debug".into()),
        )
        .with_test_writer()
        .try_init();
}

impl Harness {
    fn new() -> Self {
        init_tracing();
        let bus = Arc::new(InMemoryEventBus::new());
        let notifier = Arc::new(InMemoryModeratorNotifier::new());
        let registry = Arc::new(InMemoryTrackerRegistry::new(DetectionConfig::default()));
        Harness {
            handler: EvaluateMessageHandler::new(
                Arc::clone(&registry),
                Arc::clone(&bus),
                Arc::clone(&notifier),
            ),
            bus,
            notifier,
            registry,
            user_id: "user-42".to_string(),
            session_id: SessionId::new(),
        }
    }

    fn cmd(&self, text: &str, secs: u64) -> EvaluateMessageCommand {
        EvaluateMessageCommand::new(
            self.user_id.clone(),
            self.session_id,
            text,
            Timestamp::from_unix_secs(1_700_000_000 + secs),
        )
    }

    /// Drives the test runtime until spawned delivery tasks have run.
    async fn flush(&self) {
        for _ in 0..8 {
            tokio::task::yield_now().await;
        }
    }
}

#[tokio::test]
async fn high_risk_message_triggers_full_escalation() {
    let h = Harness::new();

    let outcome = h
        .handler
        .handle(h.cmd("I can't take it, I want to die tonight", 0))
        .await
        .unwrap();
    h.flush().await;

    // Verdict for the chat layer.
    assert_eq!(outcome.assessment.level, RiskLevel::High);
    assert!(outcome.assessment.matched_phrases.contains(&"i want to die".to_string()));
    assert_eq!(outcome.directive().tier(), InterventionTier::High);
    assert!(outcome.directive().is_mandatory());
    assert!(outcome.session_paused());

    // Side effects toward moderation.
    assert!(h.bus.has_event("risk.message.high.v1"));
    assert!(h.bus.has_event("crisis.intervention.v1"));
    let alerts = h.notifier.urgent_alerts();
    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].user_id, UserId::new(h.user_id.clone()).unwrap());

    // The event stream is keyed by this session.
    assert_eq!(
        h.bus.events_for_session(&h.session_id.to_string()).len(),
        2
    );
}

#[tokio::test]
async fn escalation_builds_across_a_session() {
    let h = Harness::new();

    // A deteriorating conversation: mild distress, then despair.
    let first = h.handler.handle(h.cmd("I'm feeling really anxious today", 0)).await.unwrap();
    assert_eq!(first.directive().tier(), InterventionTier::Low);
    assert!(first.directive().is_dismissible());

    h.handler.handle(h.cmd("still can't sleep", 30)).await.unwrap();
    h.handler.handle(h.cmd("I feel hopeless", 60)).await.unwrap();
    h.handler.handle(h.cmd("I feel worthless", 90)).await.unwrap();
    let last = h.handler.handle(h.cmd("there's no way out for me", 120)).await.unwrap();
    h.flush().await;

    // Repetition and a rising trend flip the behavioral recommendation;
    // the dismissible Medium now reflects both sources.
    let behavioral = last.behavioral.expect("tracker available");
    assert!(behavioral.signals.repeated_crisis_language);
    assert!(behavioral.signals.emotional_escalation);
    assert!(behavioral.should_escalate());
    assert!(last.directive().tier() >= InterventionTier::Medium);
    assert!(h.bus.has_event("behavior.escalation.v1"));

    // Still no mandatory stop: nothing in the session was High.
    assert!(!last.directive().is_mandatory());
    assert!(!last.session_paused());
}

#[tokio::test]
async fn behavioral_signals_never_weaken_a_high_verdict() {
    let h = Harness::new();

    for i in 0..5u64 {
        h.handler.handle(h.cmd("I feel hopeless", i * 10)).await.unwrap();
    }
    let outcome = h.handler.handle(h.cmd("I want to die", 50)).await.unwrap();
    h.flush().await;

    assert!(outcome.behavioral.unwrap().should_escalate());
    assert_eq!(outcome.directive().tier(), InterventionTier::High);
    assert!(outcome.directive().is_mandatory());
    assert!(!outcome.directive().is_dismissible());
}

#[tokio::test]
async fn clean_traffic_produces_no_noise() {
    let h = Harness::new();

    for (i, text) in ["hey", "how was your day", "pretty good here"].iter().enumerate() {
        let outcome = h.handler.handle(h.cmd(text, i as u64 * 20)).await.unwrap();
        assert_eq!(outcome.directive().tier(), InterventionTier::None);
        assert!(!outcome.directive().requires_ui());
    }
    h.flush().await;

    assert_eq!(h.bus.event_count(), 0);
    assert_eq!(h.notifier.alert_count(), 0);
}

#[tokio::test]
async fn ending_a_session_releases_its_tracker() {
    let h = Harness::new();

    h.handler.handle(h.cmd("hello", 0)).await.unwrap();
    assert_eq!(h.registry.active_sessions(), 1);

    assert!(h.handler.end_session(&h.session_id));
    assert_eq!(h.registry.active_sessions(), 0);

    // Ending twice is harmless.
    assert!(!h.handler.end_session(&h.session_id));
}

#[tokio::test]
async fn out_of_order_clock_does_not_panic_or_escalate() {
    let h = Harness::new();

    h.handler.handle(h.cmd("hello", 100)).await.unwrap();
    // A message stamped before its predecessor (clock skew).
    let outcome = h.handler.handle(h.cmd("hello again", 40)).await.unwrap();

    let behavioral = outcome.behavioral.unwrap();
    assert!(!behavioral.signals.rapid_posting);
    assert!(!behavioral.should_escalate());
}

#[test]
fn directive_payload_can_carry_regional_resources() {
    // The UI attaches hotline resources to any rendered directive.
    let us = crisis_resources("US");
    assert_eq!(us.hotlines[0].phone, "988");
    assert_eq!(crisis_resources("uk").hotlines[0].name, "Samaritans");
    // Unknown regions fall back to the US directory.
    assert_eq!(crisis_resources("ZZ").hotlines[0].phone, "988");
}
