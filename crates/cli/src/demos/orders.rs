use chrono::{Duration, Utc};

use tally_core::EntityId;
use tally_orders::{Client, Order, OrderBook};

/// Seed clients and orders, list the clients, then show grouped orders for
/// one known and one unknown client.
pub fn run() {
    println!("=== Orders ===");

    let mut book = OrderBook::new();
    if let Err(err) = seed(&mut book) {
        tracing::warn!(error = %err, "order seed failed");
    }

    println!("--- Client List ---");
    for client in book.clients() {
        println!("{client}");
    }

    for client_id in [EntityId::new(101), EntityId::new(999)] {
        match book.orders_for(client_id) {
            Some(orders) => {
                println!("--- Orders for Client ID {client_id} ---");
                for order in orders {
                    println!("{order}");
                }
            }
            None => println!("No orders found for Client ID {client_id}."),
        }
    }
    println!();
}

fn seed(book: &mut OrderBook) -> tally_core::DomainResult<()> {
    book.add_client(Client::new(101, "David Owusu", 34, "Male"))?;
    book.add_client(Client::new(102, "Mary Abena", 29, "Female"))?;
    book.add_client(Client::new(103, "Kwame Mensah", 52, "Male"))?;

    let now = Utc::now();
    book.add_order(Order::new(201, 101, "Azithromycin", now - Duration::days(4)))?;
    book.add_order(Order::new(202, 101, "Ciprofloxacin", now - Duration::days(1)))?;
    book.add_order(Order::new(203, 102, "Vitamin C", now - Duration::days(6)))?;
    book.add_order(Order::new(204, 103, "Ibuprofen", now - Duration::days(2)))?;
    book.add_order(Order::new(205, 101, "Loratadine", now - Duration::days(3)))?;
    Ok(())
}
