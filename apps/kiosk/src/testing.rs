//! In-memory [`MenuApi`] for tests.

use std::sync::Mutex;
use tabletop_client::{ClientError, ClientResult, MenuApi};
use tabletop_core::{
    Category, CategoryId, Money, Order, OrderId, OrderRequest, OrderStatus, Product,
};

/// Serves a fixed menu and records every call.
#[derive(Debug, Default)]
pub struct FakeMenuApi {
    categories: Vec<Category>,
    products: Vec<Product>,
    fail_status: Mutex<Option<u16>>,
    unreadable_confirmation: Mutex<bool>,
    category_requests: Mutex<usize>,
    product_requests: Mutex<Vec<Option<CategoryId>>>,
    submitted: Mutex<Vec<OrderRequest>>,
}

pub fn category(id: i64, name: &str) -> Category {
    Category {
        id: CategoryId(id),
        name: name.to_string(),
        description: None,
        image: None,
        order: id as i32,
        is_active: true,
        created_at: None,
        updated_at: None,
    }
}

pub fn product(id: i64, category_id: i64, name: &str, price: i64) -> Product {
    Product {
        category_id: CategoryId(category_id),
        ..Product::new(id, name, Money::new(price))
    }
}

impl FakeMenuApi {
    /// Noodles (Ramen 800, Udon 700) and Sides (Gyoza 400).
    pub fn with_menu() -> Self {
        FakeMenuApi {
            categories: vec![category(1, "Noodles"), category(2, "Sides")],
            products: vec![
                product(1, 1, "Ramen", 800),
                product(3, 1, "Udon", 700),
                product(2, 2, "Gyoza", 400),
            ],
            ..Default::default()
        }
    }

    /// Makes every later call fail with the given HTTP status.
    pub fn fail_with_status(&self, status: u16) {
        *self.fail_status.lock().unwrap() = Some(status);
    }

    pub fn recover(&self) {
        *self.fail_status.lock().unwrap() = None;
        *self.unreadable_confirmation.lock().unwrap() = false;
    }

    /// Orders are still recorded, but answered with a 201 whose body
    /// cannot be read.
    pub fn unreadable_confirmation(&self) {
        *self.unreadable_confirmation.lock().unwrap() = true;
    }

    pub fn category_requests(&self) -> usize {
        *self.category_requests.lock().unwrap()
    }

    pub fn product_requests(&self) -> Vec<Option<CategoryId>> {
        self.product_requests.lock().unwrap().clone()
    }

    pub fn submitted_orders(&self) -> Vec<OrderRequest> {
        self.submitted.lock().unwrap().clone()
    }

    fn check(&self) -> ClientResult<()> {
        match *self.fail_status.lock().unwrap() {
            Some(status) => Err(ClientError::Status {
                status,
                body: "unavailable".to_string(),
            }),
            None => Ok(()),
        }
    }
}

impl MenuApi for FakeMenuApi {
    async fn list_categories(&self) -> ClientResult<Vec<Category>> {
        *self.category_requests.lock().unwrap() += 1;
        self.check()?;
        Ok(self.categories.clone())
    }

    async fn list_products(&self, category_id: Option<CategoryId>) -> ClientResult<Vec<Product>> {
        self.product_requests.lock().unwrap().push(category_id);
        self.check()?;
        Ok(self
            .products
            .iter()
            .filter(|p| category_id.map_or(true, |id| p.category_id == id))
            .cloned()
            .collect())
    }

    async fn create_order(&self, order: &OrderRequest) -> ClientResult<Order> {
        self.check()?;
        let mut submitted = self.submitted.lock().unwrap();
        submitted.push(order.clone());

        if *self.unreadable_confirmation.lock().unwrap() {
            return Err(ClientError::OrderUnconfirmed {
                status: 201,
                body: r#"{"id": 1}"#.to_string(),
                reason: "missing field `table_number`".to_string(),
            });
        }

        // Priced from the fake's own menu; unknown products count as free.
        let total_price = order
            .items
            .iter()
            .map(|line| {
                self.products
                    .iter()
                    .find(|p| p.id == line.product_id)
                    .map(|p| p.price.multiply_quantity(line.quantity))
                    .unwrap_or_default()
            })
            .sum();

        Ok(Order {
            id: OrderId(submitted.len() as i64),
            table_number: order.table_number,
            status: OrderStatus::Pending,
            total_price,
            created_at: None,
            updated_at: None,
            items: Vec::new(),
        })
    }
}
