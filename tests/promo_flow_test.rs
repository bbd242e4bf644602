use coffee_cart::{CartError, EntryKey, Locale, OrderSession, PromoState, TomlConfig};
use rust_decimal::Decimal;

fn add_n_espressos(session: &mut OrderSession, n: u32) -> PromoState {
    let mut state = session.promo_state();
    for _ in 0..n {
        state = session.add_item("espresso").unwrap();
    }
    state
}

#[test]
fn test_no_offer_before_third_item() {
    let mut session = OrderSession::with_defaults();

    assert_eq!(session.promo_state(), PromoState::Idle);
    assert!(session.pending_offer().is_none());

    assert_eq!(add_n_espressos(&mut session, 2), PromoState::Idle);
    assert!(session.pending_offer().is_none());
}

#[test]
fn test_offer_emerges_every_three_basic_items() {
    let mut session = OrderSession::with_defaults();
    let mut offered_at = Vec::new();

    for n in 1..=9 {
        if session.add_item("espresso").unwrap() == PromoState::Offered {
            offered_at.push(n);
        }
    }

    assert_eq!(offered_at, vec![3, 6, 9]);
}

#[test]
fn test_offer_names_the_fixed_bonus() {
    let mut session = OrderSession::with_defaults();
    add_n_espressos(&mut session, 3);

    let bonus = session.pending_offer().unwrap();
    assert_eq!(bonus.display_name(Locale::English), "(Discounted) Mocha");
    assert_eq!(bonus.unit_price, Decimal::new(400, 2));
}

#[test]
fn test_discard_changes_nothing_but_state() {
    let mut session = OrderSession::with_defaults();
    add_n_espressos(&mut session, 3);
    let total_before = session.total();
    let entries_before = session.cart().entry_count();

    session.discard_promo().unwrap();

    assert_eq!(session.promo_state(), PromoState::Idle);
    assert_eq!(session.total(), total_before);
    assert_eq!(session.cart().entry_count(), entries_before);
}

#[test]
fn test_accept_adds_the_discounted_price() {
    let mut session = OrderSession::with_defaults();
    add_n_espressos(&mut session, 3);
    let total_before = session.total();

    session.accept_promo().unwrap();

    assert_eq!(session.total(), total_before + Decimal::new(400, 2));
    assert_eq!(session.promo_state(), PromoState::Idle);
}

#[test]
fn test_accepted_reward_is_first_in_preview() {
    let mut session = OrderSession::with_defaults();
    add_n_espressos(&mut session, 3);
    session.accept_promo().unwrap();

    let preview = session.preview();
    assert_eq!(
        preview[0].display_name(Locale::English),
        "(Discounted) Mocha"
    );
    assert!(preview[0].discounted);

    // The rest of the preview stays alphabetical
    let tail: Vec<&str> = preview[1..]
        .iter()
        .map(|entry| entry.display_name(Locale::English))
        .collect();
    let mut sorted = tail.clone();
    sorted.sort();
    assert_eq!(tail, sorted);
}

#[test]
fn test_reward_can_be_removed_like_any_entry() {
    let mut session = OrderSession::with_defaults();
    add_n_espressos(&mut session, 3);
    session.accept_promo().unwrap();
    let entries_before = session.cart().entry_count();

    session
        .remove(&EntryKey::discounted("discounted-mocha"))
        .unwrap();

    assert_eq!(session.cart().entry_count(), entries_before - 1);
}

#[test]
fn test_removing_reward_does_not_shorten_next_cycle() {
    let mut session = OrderSession::with_defaults();
    add_n_espressos(&mut session, 3);
    session.accept_promo().unwrap();
    session
        .remove(&EntryKey::discounted("discounted-mocha"))
        .unwrap();

    // A full three more basic items before the next offer
    assert_eq!(add_n_espressos(&mut session, 2), PromoState::Idle);
    assert_eq!(add_n_espressos(&mut session, 1), PromoState::Offered);
}

#[test]
fn test_unanswered_offer_is_withdrawn_by_next_add() {
    let mut session = OrderSession::with_defaults();
    add_n_espressos(&mut session, 3);
    assert_eq!(session.promo_state(), PromoState::Offered);

    assert_eq!(session.add_item("mocha").unwrap(), PromoState::Idle);
    assert!(session.pending_offer().is_none());

    let err = session.accept_promo().unwrap_err();
    assert!(matches!(err, CartError::NoPendingOffer));
}

#[test]
fn test_rewards_accumulate_without_limit() {
    let mut session = OrderSession::with_defaults();

    for _ in 0..3 {
        add_n_espressos(&mut session, 3);
        session.accept_promo().unwrap();
    }

    let reward = session
        .cart()
        .get(&EntryKey::discounted("discounted-mocha"))
        .unwrap();
    assert_eq!(reward.quantity, 3);

    // 9 x $10.00 + 3 x $4.00
    assert_eq!(session.total(), Decimal::new(10200, 2));
}

#[test]
fn test_file_configured_threshold_drives_the_cycle() {
    let toml_content = r#"
[promo]
threshold = 4

[[menu.items]]
id = "espresso"
name_en = "Espresso"
name_zh = "特浓咖啡"
price = "10.00"
"#;
    let config = TomlConfig::from_toml_str(toml_content).unwrap();
    let mut session = OrderSession::from_config(&config).unwrap();

    assert_eq!(add_n_espressos(&mut session, 3), PromoState::Idle);
    assert_eq!(add_n_espressos(&mut session, 1), PromoState::Offered);
}
