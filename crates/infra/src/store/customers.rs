use stockorder_core::StoreResult;
use stockorder_parties::{Customer, CustomerId, CustomerLookup};

use super::table::InMemoryTable;

/// In-memory customer directory for tests/dev.
#[derive(Debug, Default)]
pub struct InMemoryCustomerStore {
    table: InMemoryTable<CustomerId, Customer>,
}

impl InMemoryCustomerStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register or replace a customer.
    pub fn register(&self, customer: Customer) -> StoreResult<()> {
        tracing::debug!("registering customer {}", customer.id_typed());
        self.table.upsert(customer.id_typed(), customer)
    }

    pub fn list(&self) -> StoreResult<Vec<Customer>> {
        let mut customers = self.table.list()?;
        customers.sort_by_key(Customer::id_typed);
        Ok(customers)
    }
}

impl CustomerLookup for InMemoryCustomerStore {
    fn find_by_id(&self, id: CustomerId) -> StoreResult<Option<Customer>> {
        self.table.get(&id)
    }
}
