use chrono::TimeDelta;

use crate::config::Config;
use crate::registry::Totals;
use crate::tests::helper;

#[test]
fn test_totals_cover_only_active_links() {
    let (mut registry, clock) = helper::registry();

    registry.create("a.com", Some("first")).unwrap();
    registry.resolve("first").unwrap();
    registry.resolve("first").unwrap();

    clock.advance(TimeDelta::minutes(20));

    registry.create("b.com", Some("second")).unwrap();
    registry.resolve("second").unwrap();

    assert_eq!(Totals { links: 2, clicks: 3 }, registry.totals());

    // "first" ages out at 30 minutes, "second" stays
    clock.advance(TimeDelta::minutes(15));

    assert_eq!(Totals { links: 1, clicks: 1 }, registry.totals());
}

#[test]
fn test_totals_on_an_empty_registry() {
    let (registry, _clock) = helper::registry();

    assert_eq!(Totals { links: 0, clicks: 0 }, registry.totals());
}

#[test]
fn test_share_url_joins_base_and_code() {
    let (mut registry, _clock) = helper::registry();

    let link = registry.create("example.com", Some("dog1")).unwrap();

    assert_eq!("https://brief.ly#dog1", registry.share_url(&link));
}

#[test]
fn test_share_url_drops_a_trailing_slash_on_the_base() {
    let config = Config {
        base_url: "https://s.example/".to_string(),
        ..Config::default()
    };

    let (mut registry, _clock) = helper::registry_with(config, &["cat1"]);

    let link = registry.create("example.com", None).unwrap();

    assert_eq!("https://s.example#cat1", registry.share_url(&link));
}
