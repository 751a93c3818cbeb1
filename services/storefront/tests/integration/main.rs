mod customer_account_test;
mod customer_test;
mod order_test;
mod product_test;
mod routing_test;
