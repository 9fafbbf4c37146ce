mod common;

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use investtracker_core::domain::Role;
use investtracker_core::services::auth::{LoggingMailSender, MailSender, OpaqueTokenIssuer};
use investtracker_core::{AppConfig, Core, CoreError, Result};
use tempfile::TempDir;

/// Captures reset links instead of delivering anything
#[derive(Default)]
struct CapturingMailSender {
    sent: Mutex<Vec<(String, String)>>,
}

#[async_trait]
impl MailSender for CapturingMailSender {
    async fn send_password_reset(&self, to: &str, reset_url: &str) -> Result<()> {
        self.sent
            .lock()
            .unwrap()
            .push((to.to_string(), reset_url.to_string()));
        Ok(())
    }
}

async fn setup_with_mail() -> (Core, Arc<CapturingMailSender>, TempDir) {
    let dir = TempDir::new().expect("temp dir");
    let mut config = AppConfig::default_with_dir(dir.path().to_path_buf());
    config.frontend_url = "https://app.example".to_string();

    let mail = Arc::new(CapturingMailSender::default());
    let core = Core::with_collaborators(config, Arc::new(OpaqueTokenIssuer), mail.clone())
        .await
        .expect("core init");
    (core, mail, dir)
}

#[tokio::test]
async fn login_returns_tokens_and_user_summary() {
    let (core, _dir) = common::setup().await;
    core.users
        .create_branch_admin(common::new_user("ba", "ba@x.com", Some("North")))
        .await
        .unwrap();

    let response = core
        .auth
        .login("ba@x.com", "s3cret pass", Role::BranchAdmin)
        .await
        .unwrap();
    assert!(!response.access.is_empty());
    assert!(!response.refresh.is_empty());
    assert_ne!(response.access, response.refresh);
    assert_eq!(response.user.email, "ba@x.com");
    assert_eq!(response.user.role, Role::BranchAdmin);
}

#[tokio::test]
async fn unknown_email_and_wrong_password_fail_identically() {
    let (core, _dir) = common::setup().await;
    core.users
        .create_branch_admin(common::new_user("ba", "ba@x.com", Some("North")))
        .await
        .unwrap();

    let unknown = core
        .auth
        .login("nobody@x.com", "s3cret pass", Role::BranchAdmin)
        .await
        .unwrap_err();
    let wrong = core
        .auth
        .login("ba@x.com", "not the password", Role::BranchAdmin)
        .await
        .unwrap_err();

    match (unknown, wrong) {
        (CoreError::Credential(a), CoreError::Credential(b)) => assert_eq!(a, b),
        other => panic!("expected credential errors, got {:?}", other),
    }
}

#[tokio::test]
async fn role_mismatch_gets_its_own_message() {
    let (core, _dir) = common::setup().await;
    core.users
        .create_inspector(common::new_user("i", "i@x.com", Some("North")))
        .await
        .unwrap();

    let err = core
        .auth
        .login("i@x.com", "s3cret pass", Role::Admin)
        .await
        .unwrap_err();
    assert!(matches!(err, CoreError::Credential(ref m) if m == "Role mismatch for this user"));
}

#[tokio::test]
async fn password_reset_flow_end_to_end() {
    let (core, mail, _dir) = setup_with_mail().await;
    let user = core
        .users
        .create_inspector(common::new_user("i", "i@x.com", Some("North")))
        .await
        .unwrap();

    core.auth.request_password_reset("i@x.com").await.unwrap();

    let sent = mail.sent.lock().unwrap().clone();
    assert_eq!(sent.len(), 1);
    let (recipient, url) = &sent[0];
    assert_eq!(recipient, "i@x.com");
    assert!(url.starts_with("https://app.example/reset-password?uid="));

    let uid = user.uuid.to_string();
    let token = url.split("token=").nth(1).unwrap().to_string();

    core.auth
        .confirm_password_reset(&uid, &token, "new pass phrase")
        .await
        .unwrap();

    // Old password dead, new one live
    assert!(core
        .auth
        .login("i@x.com", "s3cret pass", Role::Inspector)
        .await
        .is_err());
    core.auth
        .login("i@x.com", "new pass phrase", Role::Inspector)
        .await
        .unwrap();

    // Token is single-use
    let err = core
        .auth
        .confirm_password_reset(&uid, &token, "another pass")
        .await
        .unwrap_err();
    assert!(matches!(err, CoreError::Credential(ref m) if m == "Invalid or expired token"));
}

#[tokio::test]
async fn reset_request_is_neutral_for_unknown_email() {
    let (core, mail, _dir) = setup_with_mail().await;
    core.auth.request_password_reset("ghost@x.com").await.unwrap();
    assert!(mail.sent.lock().unwrap().is_empty());
}

#[tokio::test]
async fn reset_confirm_rejects_bad_uid_and_bad_token() {
    let (core, mail, _dir) = setup_with_mail().await;
    let user = core
        .users
        .create_inspector(common::new_user("i", "i@x.com", Some("North")))
        .await
        .unwrap();
    core.auth.request_password_reset("i@x.com").await.unwrap();
    let url = mail.sent.lock().unwrap()[0].1.clone();
    let token = url.split("token=").nth(1).unwrap().to_string();

    let err = core
        .auth
        .confirm_password_reset("not-a-uuid", &token, "pass")
        .await
        .unwrap_err();
    assert!(matches!(err, CoreError::Credential(ref m) if m == "Invalid uid"));

    let err = core
        .auth
        .confirm_password_reset(&user.uuid.to_string(), "deadbeef", "pass")
        .await
        .unwrap_err();
    assert!(matches!(err, CoreError::Credential(ref m) if m == "Invalid or expired token"));
}

// The default sender only logs; make sure it stays infallible
#[tokio::test]
async fn logging_mail_sender_is_infallible() {
    LoggingMailSender
        .send_password_reset("i@x.com", "https://app.example/reset")
        .await
        .unwrap();
}
