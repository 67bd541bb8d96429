use super::*;
use crate::net::types::Role;

fn partner() -> User {
    User {
        id: "u_40".to_owned(),
        name: "Operiq Fleet".to_owned(),
        email: "fleet@operiq.example".to_owned(),
        role: Role::Company,
        profile_completed: false,
    }
}

#[test]
fn encoded_user_decodes_to_the_same_record() {
    let user = partner();
    let raw = encode_user(&user).expect("user is serializable");
    assert_eq!(decode_user(&raw), Some(user));
}

#[test]
fn corrupt_stored_json_decodes_to_none() {
    assert_eq!(decode_user("{not json"), None);
    assert_eq!(decode_user(""), None);
}

#[test]
fn stored_record_with_wrong_shape_decodes_to_none() {
    // A token accidentally written under the user key.
    assert_eq!(decode_user("\"tok-abc\""), None);
    // An identity missing required fields.
    assert_eq!(decode_user(r#"{"id": "u_1"}"#), None);
}

#[test]
fn stored_record_from_an_older_build_still_decodes() {
    // `profile_completed` was not always persisted; it defaults off.
    let raw = r#"{"id": "u_2", "name": "Old", "email": "old@example.com", "role": "user"}"#;
    let user = decode_user(raw).expect("older record still readable");
    assert!(!user.profile_completed);
}
