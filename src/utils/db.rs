use anyhow::Result;
use diesel::PgConnection;
use diesel::r2d2::{self, ConnectionManager, PooledConnection};

pub fn get_conn(
    pool: r2d2::Pool<ConnectionManager<PgConnection>>,
) -> Result<PooledConnection<ConnectionManager<PgConnection>>> {
    let conn = pool.get()?;

    Ok(conn)
}
