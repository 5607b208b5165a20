use deadpool_sqlite::Pool;

mod pool;

#[derive(Debug, Clone)]
pub struct AppState {
    pub pool: Pool,
}
