//! In-memory [`CustomerRepository`] used by router tests.
//!
//! Mirrors the PostgreSQL schema: ids come from a monotonically increasing
//! sequence and emails are unique, so a duplicate email is a write failure.

use std::collections::BTreeMap;

use async_trait::async_trait;
use customer_api_models::Customer;
use tokio::sync::RwLock;

use crate::customers::{CustomerRepository, CustomerUpdate, NewCustomer};
use crate::error::RepositoryError;

#[derive(Debug, Default)]
struct Table {
    next_id: i32,
    rows: BTreeMap<i32, Customer>,
}

#[derive(Debug, Default)]
pub struct InMemoryCustomerRepository {
    table: RwLock<Table>,
}

impl InMemoryCustomerRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

fn email_taken(table: &Table, email: &str, except: Option<i32>) -> bool {
    table
        .rows
        .values()
        .any(|c| c.email == email && Some(c.id) != except)
}

#[async_trait]
impl CustomerRepository for InMemoryCustomerRepository {
    async fn list(&self) -> Result<Vec<Customer>, RepositoryError> {
        Ok(self.table.read().await.rows.values().cloned().collect())
    }

    async fn get(&self, id: i32) -> Result<Option<Customer>, RepositoryError> {
        Ok(self.table.read().await.rows.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Customer>, RepositoryError> {
        Ok(self
            .table
            .read()
            .await
            .rows
            .values()
            .find(|c| c.email == email)
            .cloned())
    }

    async fn create(&self, customer: NewCustomer) -> Result<Customer, RepositoryError> {
        let mut table = self.table.write().await;

        if email_taken(&table, &customer.email, None) {
            return Err(RepositoryError::Write(format!(
                "email {} already exists",
                customer.email
            )));
        }

        table.next_id += 1;
        let stored = Customer {
            id: table.next_id,
            name: customer.name,
            phone: customer.phone,
            national_id: customer.national_id,
            email: customer.email,
            password_hash: customer.password_hash,
            role: customer.role,
        };
        table.rows.insert(stored.id, stored.clone());

        Ok(stored)
    }

    async fn update(&self, id: i32, changes: CustomerUpdate) -> Result<Customer, RepositoryError> {
        let mut table = self.table.write().await;

        if !table.rows.contains_key(&id) {
            return Err(RepositoryError::NotFound(id));
        }
        if email_taken(&table, &changes.email, Some(id)) {
            return Err(RepositoryError::Write(format!(
                "email {} already exists",
                changes.email
            )));
        }

        let row = table
            .rows
            .get_mut(&id)
            .ok_or(RepositoryError::NotFound(id))?;
        row.name = changes.name;
        row.phone = changes.phone;
        row.national_id = changes.national_id;
        row.email = changes.email;
        row.password_hash = changes.password_hash;
        if let Some(role) = changes.role {
            row.role = role;
        }

        Ok(row.clone())
    }

    async fn delete(&self, id: i32) -> Result<(), RepositoryError> {
        self.table
            .write()
            .await
            .rows
            .remove(&id)
            .map(|_| ())
            .ok_or(RepositoryError::NotFound(id))
    }
}
