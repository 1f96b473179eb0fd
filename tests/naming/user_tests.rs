//! Username and Display Name Tests

use bridge_naming::domain::RemoteUser;
use fake::{Fake, Faker};
use pretty_assertions::assert_eq;

use crate::common::{alice, bob, naming_service};

#[test]
fn test_username_from_go_style_template() {
    assert_eq!(naming_service().format_username("1234567890"), "discord_1234567890");
}

#[test]
fn test_username_contains_any_user_id() {
    let naming = naming_service();

    for _ in 0..32 {
        let id = Faker.fake::<u64>().to_string();
        assert_eq!(naming.format_username(&id), format!("discord_{id}"));
    }
}

#[test]
fn test_displayname_prefers_global_name() {
    let naming = naming_service();

    assert_eq!(naming.format_displayname(&alice()), "Alice");
    assert_eq!(naming.format_displayname(&bob()), "Bob");
}

#[test]
fn test_displayname_marks_bots() {
    let user = RemoteUser::new("333", "helper").as_bot();
    assert_eq!(naming_service().format_displayname(&user), "helper (bot)");
}

#[test]
fn test_formatting_is_idempotent() {
    let naming = naming_service();
    let user = alice();

    assert_eq!(naming.format_displayname(&user), naming.format_displayname(&user));
    assert_eq!(naming.format_username("42"), naming.format_username("42"));
}
