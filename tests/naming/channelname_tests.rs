//! Channel Name Tests

use std::sync::Arc;

use bridge_naming::domain::{RemoteChannel, RemoteLookup};
use bridge_naming::shared::error::{LookupError, NameError};
use pretty_assertions::assert_eq;

use crate::common::{alice, bob, naming_service, populated_lookup, CATEGORY_ID, GUILD_ID};

#[tokio::test]
async fn test_guild_channel_in_category() {
    let channel = RemoteChannel::guild_channel("300", GUILD_ID, "general").with_parent(CATEGORY_ID);

    let name = naming_service()
        .format_channelname(&channel, &populated_lookup())
        .await
        .unwrap();

    assert_eq!(name, "Rust Community / Text Channels / general");
}

#[tokio::test]
async fn test_guild_channel_unknown_category() {
    let channel = RemoteChannel::guild_channel("300", GUILD_ID, "general").with_parent("999");

    let name = naming_service()
        .format_channelname(&channel, &populated_lookup())
        .await
        .unwrap();

    assert_eq!(name, "Rust Community / general");
}

#[tokio::test]
async fn test_guild_channel_unknown_guild() {
    let channel = RemoteChannel::guild_channel("300", "555", "general").with_parent(CATEGORY_ID);

    let err = naming_service()
        .format_channelname(&channel, &populated_lookup())
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        NameError::FindGuild(LookupError::NotFound { kind: "guild", .. })
    ));
    assert_eq!(err.to_string(), "find guild: guild 555 not found");
}

#[tokio::test]
async fn test_unnamed_dm_lists_recipients() {
    let channel = RemoteChannel::direct_message("400", vec![alice(), bob()]);

    let name = naming_service()
        .format_channelname(&channel, &populated_lookup())
        .await
        .unwrap();

    assert_eq!(name, "Alice, Bob");
}

#[tokio::test]
async fn test_named_group_dm_uses_template() {
    let channel = RemoteChannel::group_dm("500", Some("Book club".into()), vec![alice(), bob()]);

    let name = naming_service()
        .format_channelname(&channel, &populated_lookup())
        .await
        .unwrap();

    assert_eq!(name, "Book club");
}

#[tokio::test]
async fn test_unnamed_group_dm_lists_recipients() {
    let channel = RemoteChannel::group_dm("600", None, vec![bob(), alice()]);

    let name = naming_service()
        .format_channelname(&channel, &populated_lookup())
        .await
        .unwrap();

    assert_eq!(name, "Bob, Alice");
}

#[tokio::test]
async fn test_concurrent_formatting_shares_templates() {
    let naming = naming_service();
    let lookup: Arc<dyn RemoteLookup> = Arc::new(populated_lookup());

    let tasks: Vec<_> = (0..8)
        .map(|i| {
            let naming = naming.clone();
            let lookup = Arc::clone(&lookup);
            tokio::spawn(async move {
                let channel = RemoteChannel::guild_channel(i.to_string(), GUILD_ID, format!("room-{i}"))
                    .with_parent(CATEGORY_ID);
                naming.format_channelname(&channel, lookup.as_ref()).await
            })
        })
        .collect();

    for (i, task) in tasks.into_iter().enumerate() {
        let name = task.await.unwrap().unwrap();
        assert_eq!(name, format!("Rust Community / Text Channels / room-{i}"));
    }
}

#[tokio::test]
async fn test_lookup_state_changes_are_picked_up() {
    let naming = naming_service();
    let lookup = populated_lookup();
    let channel = RemoteChannel::guild_channel("300", GUILD_ID, "general").with_parent(CATEGORY_ID);

    assert_eq!(
        naming.format_channelname(&channel, &lookup).await.unwrap(),
        "Rust Community / Text Channels / general"
    );

    lookup.remove_channel(CATEGORY_ID);
    assert_eq!(
        naming.format_channelname(&channel, &lookup).await.unwrap(),
        "Rust Community / general"
    );
}

#[tokio::test]
async fn test_channel_formatting_is_idempotent() {
    let naming = naming_service();
    let lookup = populated_lookup();
    let channels = [
        RemoteChannel::guild_channel("300", GUILD_ID, "general").with_parent(CATEGORY_ID),
        RemoteChannel::guild_channel("301", GUILD_ID, "offtopic").with_parent("999"),
        RemoteChannel::group_dm("500", Some("Book club".into()), vec![alice()]),
        RemoteChannel::direct_message("400", vec![alice(), bob()]),
    ];

    for channel in &channels {
        let before = channel.clone();
        let first = naming.format_channelname(channel, &lookup).await.unwrap();
        let second = naming.format_channelname(channel, &lookup).await.unwrap();

        assert_eq!(first, second);
        assert_eq!(channel, &before);
    }
}
