use std::sync::Arc;

use serde::{Deserialize, Serialize};

use stockorder_core::{DomainError, DomainResult, Entity, StoreResult, typed_id};

typed_id!(
    /// Customer identifier.
    CustomerId
);

/// Entity: Customer.
///
/// Order creation treats a customer as opaque: only its existence matters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    id: CustomerId,
    name: String,
    email: Option<String>,
}

impl Customer {
    pub fn new(id: CustomerId, name: impl Into<String>) -> DomainResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("customer name must not be empty"));
        }
        Ok(Self {
            id,
            name,
            email: None,
        })
    }

    pub fn with_email(mut self, email: impl Into<String>) -> DomainResult<Self> {
        let email = email.into();
        if !email.contains('@') {
            return Err(DomainError::validation(format!(
                "customer email is not an address: {email}"
            )));
        }
        self.email = Some(email);
        Ok(self)
    }

    pub fn id_typed(&self) -> CustomerId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }
}

impl Entity for Customer {
    type Id = CustomerId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Read port: resolve a customer by identifier.
///
/// A missing customer is `Ok(None)`; `Err` is reserved for store failures.
pub trait CustomerLookup: Send + Sync {
    fn find_by_id(&self, id: CustomerId) -> StoreResult<Option<Customer>>;
}

impl<S> CustomerLookup for Arc<S>
where
    S: CustomerLookup + ?Sized,
{
    fn find_by_id(&self, id: CustomerId) -> StoreResult<Option<Customer>> {
        (**self).find_by_id(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockorder_core::AggregateId;

    fn test_customer_id() -> CustomerId {
        CustomerId::new(AggregateId::new())
    }

    #[test]
    fn new_customer_keeps_identity_and_name() {
        let id = test_customer_id();
        let customer = Customer::new(id, "Ada Lovelace").unwrap();

        assert_eq!(customer.id_typed(), id);
        assert_eq!(customer.name(), "Ada Lovelace");
        assert_eq!(customer.email(), None);
    }

    #[test]
    fn new_customer_rejects_blank_name() {
        let err = Customer::new(test_customer_id(), "   ").unwrap_err();
        match err {
            DomainError::Validation(msg) if msg.contains("name must not be empty") => {}
            _ => panic!("Expected Validation error for blank name"),
        }
    }

    #[test]
    fn with_email_rejects_non_address() {
        let customer = Customer::new(test_customer_id(), "Grace").unwrap();
        assert!(customer.clone().with_email("grace.example.com").is_err());

        let customer = customer.with_email("grace@example.com").unwrap();
        assert_eq!(customer.email(), Some("grace@example.com"));
    }

    #[test]
    fn identity_ignores_attributes() {
        let id = test_customer_id();
        let a = Customer::new(id, "Ada").unwrap();
        let b = Customer::new(id, "Ada L.").unwrap();

        assert_ne!(a, b);
        assert!(a.same_identity_as(&b));
    }

    #[test]
    fn arc_forwards_lookup() {
        struct One(Customer);

        impl CustomerLookup for One {
            fn find_by_id(&self, id: CustomerId) -> StoreResult<Option<Customer>> {
                Ok((self.0.id_typed() == id).then(|| self.0.clone()))
            }
        }

        let customer = Customer::new(test_customer_id(), "Ada").unwrap();
        let lookup: Arc<dyn CustomerLookup> = Arc::new(One(customer.clone()));

        assert_eq!(lookup.find_by_id(customer.id_typed()).unwrap(), Some(customer));
        assert_eq!(lookup.find_by_id(test_customer_id()).unwrap(), None);
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 256,
                ..ProptestConfig::default()
            })]

            /// Property: any name with a visible character is accepted verbatim.
            #[test]
            fn non_blank_names_are_accepted(name in "[A-Za-z][A-Za-z0-9 .'-]{0,60}") {
                let customer = Customer::new(test_customer_id(), name.clone()).unwrap();
                prop_assert_eq!(customer.name(), name.as_str());
            }
        }
    }
}
