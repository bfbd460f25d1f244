#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::sync::Arc;

use messaging_security::{AuthLevel, Participant, SecurityContext, ServicePrincipal};
use thread_authorizer::Authorizer;
use thread_authorizer_sdk::{AuthorizerError, Thread, ThreadAuthorizer, ThreadMembership};
use uuid::Uuid;

fn participant(name: &str) -> Participant {
    Participant::new(Uuid::new_v4(), name)
}

fn thread_of(members: &[&Participant]) -> ThreadMembership {
    ThreadMembership::new(Uuid::new_v4()).with_participant_ids(members.iter().map(|p| p.id()))
}

fn authorizer_for(level: AuthLevel, who: &Participant) -> Authorizer {
    Authorizer::for_context(
        SecurityContext::builder()
            .auth_level(level)
            .principal(who.clone())
            .build(),
    )
}

/// Thread whose membership answer is fixed, regardless of who asks.
struct FixedThread(bool);

impl Thread for FixedThread {
    fn is_participant(&self, _participant: &Participant) -> bool {
        self.0
    }
}

#[test]
fn unauthenticated_context_sees_nothing() {
    let authorizer = Authorizer::for_context(SecurityContext::anonymous());

    for thread in [FixedThread(true), FixedThread(false)] {
        assert_eq!(authorizer.can_see_thread(&thread), Ok(false));
        assert_eq!(authorizer.can_delete_thread(&thread), Ok(false));
    }
    assert_eq!(authorizer.authenticated_participant(), Ok(None));
}

#[test]
fn visibility_follows_membership() {
    let p = participant("p");
    let q = participant("q");
    let r = participant("r");
    let threads = [
        thread_of(&[]),
        thread_of(&[&p]),
        thread_of(&[&q]),
        thread_of(&[&p, &q]),
        thread_of(&[&q, &r]),
    ];

    for level in [AuthLevel::Remembered, AuthLevel::Fully] {
        let authorizer = authorizer_for(level, &p);
        for thread in &threads {
            assert_eq!(authorizer.can_see_thread(thread), Ok(thread.is_participant(&p)));
        }
    }
}

#[test]
fn delete_matches_see() {
    let p = participant("p");
    let q = participant("q");
    let threads = [thread_of(&[]), thread_of(&[&p]), thread_of(&[&q]), thread_of(&[&p, &q])];
    let authorizers = [
        Authorizer::for_context(SecurityContext::anonymous()),
        authorizer_for(AuthLevel::Anonymous, &p),
        authorizer_for(AuthLevel::Remembered, &p),
        authorizer_for(AuthLevel::Fully, &q),
    ];

    for authorizer in &authorizers {
        for thread in &threads {
            assert_eq!(
                authorizer.can_delete_thread(thread),
                authorizer.can_see_thread(thread)
            );
        }
    }
}

#[test]
fn non_participant_principal_propagates_error() {
    let authorizer = Authorizer::for_context(
        SecurityContext::builder()
            .auth_level(AuthLevel::Remembered)
            .principal(ServicePrincipal::new("cron"))
            .build(),
    );
    let expected = AuthorizerError::NotAParticipant {
        principal: "cron".to_owned(),
    };

    assert_eq!(authorizer.authenticated_participant(), Err(expected.clone()));
    for thread in [FixedThread(true), FixedThread(false)] {
        assert_eq!(authorizer.can_see_thread(&thread), Err(expected.clone()));
        assert_eq!(authorizer.can_delete_thread(&thread), Err(expected.clone()));
    }
}

#[test]
fn scenario_member_of_two_person_thread() {
    let p = participant("p");
    let q = participant("q");
    let thread = thread_of(&[&p, &q]);
    let authorizer = authorizer_for(AuthLevel::Remembered, &p);

    assert_eq!(authorizer.authenticated_participant(), Ok(Some(&p)));
    assert_eq!(authorizer.can_see_thread(&thread), Ok(true));
    assert_eq!(authorizer.can_delete_thread(&thread), Ok(true));
}

#[test]
fn scenario_outsider_of_two_person_thread() {
    let p = participant("p");
    let q = participant("q");
    let r = participant("r");
    let thread = thread_of(&[&p, &q]);
    let authorizer = authorizer_for(AuthLevel::Fully, &r);

    assert_eq!(authorizer.can_see_thread(&thread), Ok(false));
    assert_eq!(authorizer.can_delete_thread(&thread), Ok(false));
}

#[test]
fn shared_authorizer_across_threads() {
    let p = participant("p");
    let authorizer: Arc<dyn ThreadAuthorizer> = Arc::new(authorizer_for(AuthLevel::Fully, &p));
    let thread = Arc::new(thread_of(&[&p]));

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let authorizer = Arc::clone(&authorizer);
            let thread = Arc::clone(&thread);
            std::thread::spawn(move || authorizer.can_see_thread(thread.as_ref()))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), Ok(true));
    }
}
