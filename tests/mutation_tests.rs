use rand::Rng;
use rust_decimal_macros::dec;
use std::collections::BTreeMap;
use trailcart::application::engine::CartEngine;
use trailcart::domain::cart::Cart;
use trailcart::domain::event::{CartEvent, EventType};
use trailcart::domain::item::{ItemId, LineItem, Price, Quantity};
use trailcart::infrastructure::recording::RecordingPresenter;

fn item(id: &str, price: rust_decimal::Decimal, quantity: u32) -> LineItem {
    LineItem {
        id: ItemId::new(id),
        name: format!("Item {id}"),
        color: "Golden Oak".to_string(),
        unit_price: Price::new(price).unwrap(),
        quantity: Quantity::new(quantity).unwrap(),
        image: String::new(),
        link: String::new(),
    }
}

fn engine_with(recorder: &RecordingPresenter, items: Vec<LineItem>) -> CartEngine {
    let cart = Cart::from_items(items).unwrap();
    CartEngine::new(cart, Box::new(recorder.clone()))
}

fn set_quantity(id: &str, quantity: u32) -> CartEvent {
    CartEvent {
        r#type: EventType::SetQuantity,
        item: Some(ItemId::new(id)),
        quantity: Some(quantity),
    }
}

fn remove(id: &str) -> CartEvent {
    CartEvent {
        r#type: EventType::Remove,
        item: Some(ItemId::new(id)),
        quantity: None,
    }
}

#[tokio::test]
async fn test_each_applied_mutation_renders_once() {
    let recorder = RecordingPresenter::new();
    let mut engine = engine_with(
        &recorder,
        vec![item("a", dec!(10.00), 1), item("b", dec!(20.00), 2)],
    );

    engine.apply(set_quantity("a", 5)).await.unwrap();
    engine.apply(remove("b")).await.unwrap();
    engine.apply(remove("b")).await.unwrap(); // idempotent, no render
    engine.apply(set_quantity("b", 3)).await.unwrap(); // gone, no render

    let views = recorder.views().await;
    assert_eq!(views.len(), 2);
    assert_eq!(views[0].badge, Some(7));
    assert_eq!(views[1].badge, Some(5));
}

#[tokio::test]
async fn test_survivors_keep_relative_order() {
    let recorder = RecordingPresenter::new();
    let mut engine = engine_with(
        &recorder,
        vec![
            item("a", dec!(10.00), 1),
            item("b", dec!(20.00), 1),
            item("c", dec!(30.00), 1),
        ],
    );

    engine.apply(remove("b")).await.unwrap();

    let view = recorder.last_view().await.unwrap();
    let ids: Vec<&str> = view.rows.iter().map(|row| row.id.as_str()).collect();
    assert_eq!(ids, vec!["a", "c"]);
}

#[tokio::test]
async fn test_subtotal_non_decreasing_as_quantity_grows() {
    let recorder = RecordingPresenter::new();
    let mut engine = engine_with(
        &recorder,
        vec![item("a", dec!(19.99), 1), item("b", dec!(5.00), 2)],
    );

    let mut last_subtotal = engine.cart().totals().subtotal;
    for quantity in 2..=10 {
        engine.apply(set_quantity("a", quantity)).await.unwrap();
        let subtotal = engine.cart().totals().subtotal;
        assert!(subtotal >= last_subtotal);
        last_subtotal = subtotal;
    }
}

#[tokio::test]
async fn test_random_mutation_sequences_keep_counts_consistent() {
    let recorder = RecordingPresenter::new();
    let mut engine = engine_with(
        &recorder,
        vec![
            item("a", dec!(10.00), 1),
            item("b", dec!(20.00), 1),
            item("c", dec!(30.00), 1),
        ],
    );

    let ids = ["a", "b", "c"];
    let mut expected: BTreeMap<&str, u32> = ids.iter().map(|id| (*id, 1)).collect();
    let mut rng = rand::thread_rng();

    for _ in 0..200 {
        let id = ids[rng.gen_range(0..ids.len())];
        if rng.gen_range(0..10) == 0 {
            engine.apply(remove(id)).await.unwrap();
            expected.remove(id);
        } else {
            let quantity = rng.gen_range(0..15);
            engine.apply(set_quantity(id, quantity)).await.unwrap();
            if let Some(current) = expected.get_mut(id)
                && quantity > 0
            {
                *current = quantity.min(Quantity::MAX);
            }
        }

        let expected_count: u32 = expected.values().sum();
        assert_eq!(engine.cart().item_count(), expected_count);
    }

    // The last rendered view reflects the final state
    if let Some(view) = recorder.last_view().await {
        let count = engine.cart().item_count();
        assert_eq!(view.badge, (count > 0).then_some(count));
        match view.summary {
            Some(summary) => assert_eq!(summary.item_count, count),
            None => assert_eq!(count, 0),
        }
    }
}
