/// A customer record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone: String,
}

/// Customer fields accepted on create and update; the store owns the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerInput {
    pub name: String,
    pub email: String,
    pub phone: String,
}

/// A login account tied to a customer by id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerAccount {
    pub id: i32,
    pub username: String,
    pub password: String,
    pub customer_id: i32,
}

/// Account fields accepted on update; the id comes from the path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerAccountChanges {
    pub username: String,
    pub password: String,
    pub customer_id: i32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub price: f64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    pub id: i32,
    pub date: String,
    pub customer_id: i32,
}
