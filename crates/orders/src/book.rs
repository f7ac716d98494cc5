use std::collections::BTreeMap;

use tally_core::{DomainResult, EntityId, Repository};

use crate::client::Client;
use crate::order::Order;

/// Clients and their orders, with grouped lookup by client.
///
/// The group map is rebuilt from the order repository on demand; it is a
/// derived view, never the source of truth.
#[derive(Debug, Default)]
pub struct OrderBook {
    clients: Repository<Client>,
    orders: Repository<Order>,
}

impl OrderBook {
    pub fn new() -> Self {
        Self {
            clients: Repository::new(),
            orders: Repository::new(),
        }
    }

    pub fn add_client(&mut self, client: Client) -> DomainResult<()> {
        self.clients.add(client)
    }

    pub fn add_order(&mut self, order: Order) -> DomainResult<()> {
        self.orders.add(order)
    }

    pub fn clients(&self) -> Vec<Client> {
        self.clients.all()
    }

    pub fn client(&self, id: EntityId) -> DomainResult<&Client> {
        self.clients.get(id)
    }

    /// Group all orders by their client id.
    pub fn group_by_client(&self) -> BTreeMap<EntityId, Vec<Order>> {
        let mut map: BTreeMap<EntityId, Vec<Order>> = BTreeMap::new();
        for order in self.orders.all() {
            map.entry(order.client_id).or_default().push(order);
        }
        map
    }

    /// Orders for one client; `None` when the client has none on file.
    pub fn orders_for(&self, client_id: EntityId) -> Option<Vec<Order>> {
        let grouped = self.group_by_client();
        grouped.get(&client_id).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use tally_core::Entity;

    fn sample_book() -> OrderBook {
        let mut book = OrderBook::new();
        book.add_client(Client::new(101, "David Owusu", 34, "Male")).unwrap();
        book.add_client(Client::new(102, "Mary Abena", 29, "Female")).unwrap();

        let now = Utc::now();
        book.add_order(Order::new(201, 101, "Azithromycin", now)).unwrap();
        book.add_order(Order::new(202, 101, "Ciprofloxacin", now)).unwrap();
        book.add_order(Order::new(203, 102, "Vitamin C", now)).unwrap();
        book
    }

    #[test]
    fn grouping_collects_orders_under_their_client() {
        let book = sample_book();
        let grouped = book.group_by_client();

        assert_eq!(grouped.len(), 2);
        assert_eq!(grouped[&EntityId::new(101)].len(), 2);
        assert_eq!(grouped[&EntityId::new(102)].len(), 1);
    }

    #[test]
    fn orders_for_unknown_client_is_none() {
        let book = sample_book();
        assert!(book.orders_for(EntityId::new(999)).is_none());
    }

    #[test]
    fn grouped_orders_keep_their_fields() {
        let book = sample_book();
        let orders = book.orders_for(EntityId::new(102)).unwrap();

        assert_eq!(orders.len(), 1);
        assert_eq!(orders[0].item, "Vitamin C");
        assert_eq!(orders[0].id(), EntityId::new(203));
    }

    #[test]
    fn duplicate_client_id_is_rejected() {
        let mut book = sample_book();
        let err = book
            .add_client(Client::new(101, "Someone Else", 40, "Male"))
            .unwrap_err();
        assert_eq!(
            err,
            tally_core::DomainError::DuplicateKey(EntityId::new(101))
        );
    }
}
