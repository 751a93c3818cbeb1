use anyhow::Context as _;
use sea_orm::{
    ActiveValue::{NotSet, Set},
    ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    sea_query::Expr,
};

use storefront_schema::{customer_accounts, customers, orders, products};

use crate::domain::repository::{
    CustomerAccountRepository, CustomerRepository, OrderRepository, ProductRepository,
};
use crate::domain::types::{Customer, CustomerAccount, CustomerInput, Order, Product};
use crate::error::StorefrontError;

// ── Customer repository ──────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbCustomerRepository {
    pub db: DatabaseConnection,
}

impl CustomerRepository for DbCustomerRepository {
    async fn find_by_id(&self, id: i32) -> Result<Option<Customer>, StorefrontError> {
        let model = customers::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find customer by id")?;
        Ok(model.map(customer_from_model))
    }

    async fn create(&self, input: &CustomerInput) -> Result<(), StorefrontError> {
        let model = customers::ActiveModel {
            id: NotSet,
            name: Set(input.name.clone()),
            email: Set(input.email.clone()),
            phone: Set(input.phone.clone()),
        };
        customers::Entity::insert(model)
            .exec_without_returning(&self.db)
            .await
            .context("create customer")?;
        Ok(())
    }

    async fn update(&self, id: i32, input: &CustomerInput) -> Result<bool, StorefrontError> {
        let result = customers::Entity::update_many()
            .col_expr(customers::Column::Name, Expr::value(input.name.clone()))
            .col_expr(customers::Column::Email, Expr::value(input.email.clone()))
            .col_expr(customers::Column::Phone, Expr::value(input.phone.clone()))
            .filter(customers::Column::Id.eq(id))
            .exec(&self.db)
            .await
            .context("update customer")?;
        Ok(result.rows_affected > 0)
    }

    async fn delete(&self, id: i32) -> Result<bool, StorefrontError> {
        let result = customers::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .context("delete customer")?;
        Ok(result.rows_affected > 0)
    }
}

fn customer_from_model(model: customers::Model) -> Customer {
    Customer {
        id: model.id,
        name: model.name,
        email: model.email,
        phone: model.phone,
    }
}

// ── Customer account repository ──────────────────────────────────────────────

#[derive(Clone)]
pub struct DbCustomerAccountRepository {
    pub db: DatabaseConnection,
}

impl CustomerAccountRepository for DbCustomerAccountRepository {
    async fn list(&self) -> Result<Vec<CustomerAccount>, StorefrontError> {
        let models = customer_accounts::Entity::find()
            .order_by_asc(customer_accounts::Column::Id)
            .all(&self.db)
            .await
            .context("list customer accounts")?;
        Ok(models.into_iter().map(customer_account_from_model).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<CustomerAccount>, StorefrontError> {
        let model = customer_accounts::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find customer account by id")?;
        Ok(model.map(customer_account_from_model))
    }

    async fn create(&self, account: &CustomerAccount) -> Result<(), StorefrontError> {
        let model = customer_accounts::ActiveModel {
            id: Set(account.id),
            username: Set(account.username.clone()),
            password: Set(account.password.clone()),
            customer_id: Set(account.customer_id),
        };
        customer_accounts::Entity::insert(model)
            .exec_without_returning(&self.db)
            .await
            .context("create customer account")?;
        Ok(())
    }

    async fn update_username(&self, id: i32, username: &str) -> Result<bool, StorefrontError> {
        let result = customer_accounts::Entity::update_many()
            .col_expr(
                customer_accounts::Column::Username,
                Expr::value(username.to_owned()),
            )
            .filter(customer_accounts::Column::Id.eq(id))
            .exec(&self.db)
            .await
            .context("update customer account username")?;
        Ok(result.rows_affected > 0)
    }

    async fn delete(&self, id: i32) -> Result<bool, StorefrontError> {
        let result = customer_accounts::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .context("delete customer account")?;
        Ok(result.rows_affected > 0)
    }
}

fn customer_account_from_model(model: customer_accounts::Model) -> CustomerAccount {
    CustomerAccount {
        id: model.id,
        username: model.username,
        password: model.password,
        customer_id: model.customer_id,
    }
}

// ── Product repository ───────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbProductRepository {
    pub db: DatabaseConnection,
}

impl ProductRepository for DbProductRepository {
    async fn list(&self) -> Result<Vec<Product>, StorefrontError> {
        let models = products::Entity::find()
            .order_by_asc(products::Column::Id)
            .all(&self.db)
            .await
            .context("list products")?;
        Ok(models.into_iter().map(product_from_model).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Product>, StorefrontError> {
        let model = products::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find product by id")?;
        Ok(model.map(product_from_model))
    }

    async fn create(&self, product: &Product) -> Result<(), StorefrontError> {
        let model = products::ActiveModel {
            id: Set(product.id),
            name: Set(product.name.clone()),
            price: Set(product.price),
        };
        products::Entity::insert(model)
            .exec_without_returning(&self.db)
            .await
            .context("create product")?;
        Ok(())
    }

    async fn update(&self, id: i32, product: &Product) -> Result<bool, StorefrontError> {
        let result = products::Entity::update_many()
            .col_expr(products::Column::Id, Expr::value(product.id))
            .col_expr(products::Column::Name, Expr::value(product.name.clone()))
            .col_expr(products::Column::Price, Expr::value(product.price))
            .filter(products::Column::Id.eq(id))
            .exec(&self.db)
            .await
            .context("update product")?;
        Ok(result.rows_affected > 0)
    }

    async fn delete(&self, id: i32) -> Result<bool, StorefrontError> {
        let result = products::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .context("delete product")?;
        Ok(result.rows_affected > 0)
    }
}

fn product_from_model(model: products::Model) -> Product {
    Product {
        id: model.id,
        name: model.name,
        price: model.price,
    }
}

// ── Order repository ─────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbOrderRepository {
    pub db: DatabaseConnection,
}

impl OrderRepository for DbOrderRepository {
    async fn find_by_id(&self, id: i32) -> Result<Option<Order>, StorefrontError> {
        let model = orders::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find order by id")?;
        Ok(model.map(order_from_model))
    }

    async fn create(&self, order: &Order) -> Result<(), StorefrontError> {
        let model = orders::ActiveModel {
            id: Set(order.id),
            date: Set(order.date.clone()),
            customer_id: Set(order.customer_id),
        };
        orders::Entity::insert(model)
            .exec_without_returning(&self.db)
            .await
            .context("create order")?;
        Ok(())
    }
}

fn order_from_model(model: orders::Model) -> Order {
    Order {
        id: model.id,
        date: model.date,
        customer_id: model.customer_id,
    }
}
