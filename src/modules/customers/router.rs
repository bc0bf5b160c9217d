use crate::modules::customers::controller::{
    create_customer, delete_customer, get_customer, list_customers, update_customer,
};
use crate::state::AppState;
use axum::{Router, routing::get};

pub fn init_customers_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_customers).post(create_customer))
        .route(
            "/{id}",
            get(get_customer).put(update_customer).delete(delete_customer),
        )
}
