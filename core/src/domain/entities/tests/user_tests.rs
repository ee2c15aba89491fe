use crate::domain::entities::user::{Role, User};

fn sample_user() -> User {
    User::new(
        "a@x.com".to_string(),
        "A".to_string(),
        "$2b$10$abcdefghijklmnopqrstuv".to_string(),
        Role::User,
    )
}

#[test]
fn new_user_gets_unique_id_and_timestamps() {
    let first = sample_user();
    let second = sample_user();
    assert_ne!(first.id, second.id);
    assert_eq!(first.created_at, first.updated_at);
}

#[test]
fn set_password_hash_touches_updated_at() {
    let mut user = sample_user();
    let created = user.created_at;
    user.set_password_hash("$2b$10$newhashnewhashnewhash".to_string());
    assert_eq!(user.password_hash, "$2b$10$newhashnewhashnewhash");
    assert!(user.updated_at >= created);
}

#[test]
fn role_string_forms() {
    assert_eq!(Role::User.as_str(), "user");
    assert_eq!(Role::Seller.as_str(), "seller");
}

#[test]
fn role_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&Role::Seller).unwrap(), "\"seller\"");
}
