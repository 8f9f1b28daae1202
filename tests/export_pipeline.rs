//! End-to-end extraction over a captured client log fixture.

use std::path::PathBuf;

use arenalog::cli::Args;
use arenalog::commands::dispatch;
use arenalog_cards::{Card, CardTable, RemoteLookup, Resolution, Resolver};
use arenalog_core::prelude::*;
use arenalog_core::{find_last_block, Keyword};
use arenalog_export::{PlayerLog, WildcardRarity};

fn fixture_log() -> PlayerLog {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("output_log.txt");
    PlayerLog::new(path)
}

struct NoRemote;

impl RemoteLookup for NoRemote {
    fn card_by_arena_id(&self, arena_id: &str) -> Result<Card> {
        Err(Error::remote_lookup(arena_id, "offline"))
    }
}

fn offline_resolver() -> Resolver<'static, NoRemote> {
    let mut resolver = Resolver::new(CardTable::builtin(), NoRemote);
    resolver.set_fallback(false);
    resolver
}

#[test]
fn test_nested_round_trip() {
    let value = fixture_log().last_json_block("TestKey").unwrap();
    assert_eq!(value["test1"]["test11"], "4");
    assert_eq!(value["67688"]["test22"]["x"]["a"], "1");
}

#[test]
fn test_raw_keyword_without_marker() {
    let file = std::fs::File::open(fixture_log().path()).unwrap();
    let keyword = Keyword::new("blah").unwrap();
    let block = find_last_block(std::io::BufReader::new(file), &keyword).unwrap();
    let value = arenalog_core::decode(&block).unwrap();
    assert_eq!(value["foo"], "bar");
}

#[test]
fn test_last_collection_block_wins() {
    let pairs = fixture_log().collection_ids().unwrap();
    let count_of = |id: &str| {
        pairs
            .iter()
            .find(|(arena_id, _)| arena_id == id)
            .map(|(_, count)| *count)
    };

    // Counts come from the second (last) collection block
    assert_eq!(count_of("67682"), Some(3));
    assert_eq!(count_of("123"), Some(4));
    assert_eq!(count_of("67688"), Some(4));
    assert_eq!(count_of("68369"), Some(1));
    assert_eq!(count_of("64037"), Some(2));
    assert_eq!(count_of("123456"), None);
}

#[test]
fn test_absent_keyword_fails_with_parse_error() {
    let err = fixture_log().last_json_block("_NOT_PRESENT_").unwrap_err();
    assert!(matches!(err, Error::LogParsing { .. }));
}

#[test]
fn test_deck_lists_keyword_is_whole_word() {
    // Deck.GetDeckListsV3 appears later in no block; the plain keyword must
    // match only its own block, not the V3 one.
    let decks = fixture_log().deck_lists(&offline_resolver()).unwrap();
    assert_eq!(decks.len(), 1);
    assert_eq!(decks[0].name, "Boros Burn");
    assert_eq!(
        decks[0].box_art.as_ref().unwrap().pretty_name,
        "Firesong and Sunspeaker"
    );
}

#[test]
fn test_inventory_envelope_unwrapped() {
    let inventory = fixture_log().inventory().unwrap();
    assert_eq!(inventory.gems().unwrap(), 1);
    assert_eq!(inventory.draft_tokens().unwrap(), 3);
    assert_eq!(inventory.vault_progress().unwrap(), 5.6);
    assert_eq!(inventory.wildcards(WildcardRarity::Rare).unwrap(), 9);
    assert_eq!(inventory.starter_decks().unwrap(), vec!["starter-w"]);
}

#[test]
fn test_collection_resolution_outcomes() {
    let entries = fixture_log().collection(&offline_resolver()).unwrap();

    // Fallback disabled: the one unknown id yields exactly one outcome
    let unknown: Vec<_> = entries
        .iter()
        .filter(|e| matches!(e.resolution, Resolution::Unknown { .. }))
        .collect();
    assert_eq!(unknown.len(), 1);
    assert_eq!(unknown[0].arena_id, "123");

    let aegis = entries
        .iter()
        .find(|e| e.arena_id == "67682")
        .and_then(|e| e.resolution.card())
        .unwrap();
    assert_eq!(aegis.pretty_name, "Aegis of the Heavens");
}

#[test]
fn test_goldfish_export_over_fixture() {
    let args = Args {
        goldfish: true,
        ..Default::default()
    };
    let out = dispatch(&args, &fixture_log(), &offline_resolver()).unwrap();
    let export = out.export.unwrap();

    assert!(export.starts_with("Card,Set ID,Set Name,Quantity,Foil"));
    assert!(export.contains("\"Aegis of the Heavens\",M19,,3"));
    assert!(export.contains("\"Bomat Courier\",KLD,,2"));
    // Dominaria remapped for goldfish
    assert!(export.contains("\"Firesong and Sunspeaker\",DOM,,1"));
    // Unknown id never reaches an export row
    assert!(!export.contains("123,"));
}

#[test]
fn test_deck_text_export_over_fixture() {
    let args = Args {
        export_deck: Some("Boros Burn".to_string()),
        ..Default::default()
    };
    let out = dispatch(&args, &fixture_log(), &offline_resolver()).unwrap();
    let export = out.export.unwrap();

    let expected = "Deck\n4 Shock (M19) 156\n2 Aegis of the Heavens (M19) 1\n\n\
                    Sideboard\n1 Firesong and Sunspeaker (DAR) 280";
    assert_eq!(export, expected);
}
