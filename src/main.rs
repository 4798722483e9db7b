use std::net::SocketAddr;
use std::sync::Arc;

use mongodb::Client;

use delivery_orders::{
    AppState, config, routes,
    services::auth_client::AuthClient,
    stores::{MongoOrderStore, MongoVehicleStore, RedisActiveOrderStore},
};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let settings = config::load();

    // Mongo connection
    let client = Client::with_uri_str(&settings.mongodb_uri)
        .await
        .expect("Failed to connect to MongoDB");
    let db = client.database(&settings.mongodb_db);

    // Redis connection (active orders)
    let redis_client =
        redis::Client::open(settings.redis_url.as_str()).expect("Invalid REDIS_URL");
    let redis_con = redis_client
        .get_multiplexed_async_connection()
        .await
        .expect("Failed to connect to Redis");

    let state = AppState {
        auth: AuthClient::new(settings.auth_service_url.clone()),
        orders: Arc::new(MongoOrderStore::new(&db)),
        vehicles: Arc::new(MongoVehicleStore::new(&db)),
        active_orders: Arc::new(RedisActiveOrderStore::new(redis_con)),
        settings: settings.clone(),
    };

    let app = routes::app(state);

    let addr = SocketAddr::from((
        settings.host.parse::<std::net::IpAddr>().unwrap(),
        settings.port,
    ));
    tracing::info!("order service listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
