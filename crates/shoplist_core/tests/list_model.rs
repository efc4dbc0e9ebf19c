use shoplist_core::{DecreaseOutcome, ListValidationError, ShoppingList};
use uuid::Uuid;

#[test]
fn new_list_starts_empty_with_matching_timestamps() {
    let list = ShoppingList::new("Market").unwrap();

    assert!(!list.id.is_nil());
    assert_eq!(list.name, "Market");
    assert!(list.items.is_empty());
    assert_eq!(list.created_at, list.updated_at);
    assert_eq!(list.total_units(), 0);
}

#[test]
fn new_list_trims_name_and_rejects_blank() {
    let list = ShoppingList::new("  Market  ").unwrap();
    assert_eq!(list.name, "Market");

    let err = ShoppingList::new("   ").unwrap_err();
    assert_eq!(err, ListValidationError::EmptyListName);
}

#[test]
fn add_item_appends_with_quantity_one() {
    let mut list = ShoppingList::new("Market").unwrap();

    let milk = list.add_item("Milk").unwrap();
    let bread = list.add_item("Bread").unwrap();

    assert_eq!(list.items.len(), 2);
    assert_ne!(milk, bread);
    // Insertion order is append order.
    assert_eq!(list.items[0].name, "Milk");
    assert_eq!(list.items[1].name, "Bread");
    assert!(list.items.iter().all(|item| item.quantity == 1));
}

#[test]
fn add_item_rejects_blank_name() {
    let mut list = ShoppingList::new("Market").unwrap();

    let err = list.add_item("   ").unwrap_err();
    assert_eq!(err, ListValidationError::EmptyItemName);
    assert!(list.items.is_empty());
}

#[test]
fn increase_quantity_increments_and_ignores_absent_ids() {
    let mut list = ShoppingList::new("Market").unwrap();
    let milk = list.add_item("Milk").unwrap();

    assert_eq!(list.increase_quantity(milk), Some(2));
    assert_eq!(list.increase_quantity(milk), Some(3));
    assert_eq!(list.item(milk).unwrap().quantity, 3);

    let before = list.clone();
    assert_eq!(list.increase_quantity(Uuid::new_v4()), None);
    assert_eq!(list, before);
}

#[test]
fn decrease_quantity_on_absent_id_is_a_noop() {
    let mut list = ShoppingList::new("Market").unwrap();
    list.add_item("Milk").unwrap();

    let before = list.clone();
    assert_eq!(
        list.decrease_quantity(Uuid::new_v4()),
        DecreaseOutcome::NotFound
    );
    assert_eq!(list, before);
}

#[test]
fn decrease_quantity_at_one_removes_the_item() {
    let mut list = ShoppingList::new("Market").unwrap();
    let milk = list.add_item("Milk").unwrap();
    let bread = list.add_item("Bread").unwrap();

    assert_eq!(list.decrease_quantity(bread), DecreaseOutcome::Removed);

    assert!(list.item(bread).is_none());
    assert_eq!(list.items.len(), 1);
    assert_eq!(list.items[0].id, milk);
}

#[test]
fn increase_then_decrease_round_trips_quantity() {
    let mut list = ShoppingList::new("Market").unwrap();
    let milk = list.add_item("Milk").unwrap();
    list.increase_quantity(milk).unwrap();
    list.increase_quantity(milk).unwrap();
    let original = list.item(milk).unwrap().quantity;

    list.increase_quantity(milk).unwrap();
    assert_eq!(
        list.decrease_quantity(milk),
        DecreaseOutcome::Decremented(original)
    );
    assert_eq!(list.item(milk).unwrap().quantity, original);
}

#[test]
fn total_units_sums_quantities() {
    let mut list = ShoppingList::new("Market").unwrap();
    let milk = list.add_item("Milk").unwrap();
    list.add_item("Bread").unwrap();
    list.increase_quantity(milk).unwrap();

    assert_eq!(list.total_units(), 3);
}

#[test]
fn validate_rejects_zero_quantity_and_duplicate_ids() {
    let mut list = ShoppingList::new("Market").unwrap();
    let milk = list.add_item("Milk").unwrap();
    list.validate().unwrap();

    list.items[0].quantity = 0;
    assert_eq!(
        list.validate().unwrap_err(),
        ListValidationError::ZeroQuantity { item: milk }
    );

    list.items[0].quantity = 1;
    let duplicate = list.items[0].clone();
    list.items.push(duplicate);
    assert_eq!(
        list.validate().unwrap_err(),
        ListValidationError::DuplicateItemId { item: milk }
    );
}

#[test]
fn validate_for_save_rejects_empty_items() {
    let list = ShoppingList::new("Market").unwrap();

    assert!(list.validate().is_ok());
    assert_eq!(
        list.validate_for_save().unwrap_err(),
        ListValidationError::NoItems
    );
}

#[test]
fn sort_by_recency_orders_descending_and_is_stable() {
    let mut first = ShoppingList::new("First").unwrap();
    let mut second = ShoppingList::new("Second").unwrap();
    let mut third = ShoppingList::new("Third").unwrap();

    first.updated_at = "2026-01-01T10:00:00Z".parse().unwrap();
    second.updated_at = "2026-02-01T10:00:00Z".parse().unwrap();
    // Same instant as `first`: stable sort must keep input order.
    third.updated_at = first.updated_at;

    let mut lists = vec![first.clone(), second.clone(), third.clone()];
    shoplist_core::sort_by_recency(&mut lists);

    assert_eq!(lists[0].id, second.id);
    assert_eq!(lists[1].id, first.id);
    assert_eq!(lists[2].id, third.id);
}

#[test]
fn list_serialization_uses_expected_wire_fields() {
    let list_id = Uuid::parse_str("11111111-2222-4333-8444-555555555555").unwrap();
    let mut list = ShoppingList::with_id(list_id, "Market").unwrap();
    list.created_at = "2026-03-01T08:00:00Z".parse().unwrap();
    list.updated_at = "2026-03-02T09:30:00Z".parse().unwrap();
    let milk = list.add_item("Milk").unwrap();
    list.increase_quantity(milk).unwrap();

    let json = serde_json::to_value(&list).unwrap();
    assert_eq!(json["id"], list_id.to_string());
    assert_eq!(json["name"], "Market");
    assert_eq!(json["createdAt"], "2026-03-01T08:00:00Z");
    assert_eq!(json["updatedAt"], "2026-03-02T09:30:00Z");
    assert_eq!(json["items"][0]["id"], milk.to_string());
    assert_eq!(json["items"][0]["name"], "Milk");
    assert_eq!(json["items"][0]["quantity"], 2);

    let decoded: ShoppingList = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, list);
}
