use sea_orm::DatabaseConnection;

use crate::infra::db::{
    DbCustomerAccountRepository, DbCustomerRepository, DbOrderRepository, DbProductRepository,
};

/// Shared application state passed to every handler via axum `State`.
///
/// Built once at startup from an open connection pool; the pool is closed
/// after the server stops.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
}

impl AppState {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub fn customer_repo(&self) -> DbCustomerRepository {
        DbCustomerRepository {
            db: self.db.clone(),
        }
    }

    pub fn customer_account_repo(&self) -> DbCustomerAccountRepository {
        DbCustomerAccountRepository {
            db: self.db.clone(),
        }
    }

    pub fn product_repo(&self) -> DbProductRepository {
        DbProductRepository {
            db: self.db.clone(),
        }
    }

    pub fn order_repo(&self) -> DbOrderRepository {
        DbOrderRepository {
            db: self.db.clone(),
        }
    }
}
