use sea_orm::sea_query::TableCreateStatement;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Schema};

use crate::entities::{people, videos};
use crate::error::AppError;

/// Connect to the embedded store. Does not create any tables.
pub async fn connect_db(url: &str) -> Result<DatabaseConnection, AppError> {
    let conn = Database::connect(url).await?;
    Ok(conn)
}

/// Create the `people` and `videos` tables from the entity definitions when
/// they do not exist yet. This stands in for migration tooling on the
/// embedded store; people first, so the videos foreign key has a target.
pub async fn ensure_schema(conn: &DatabaseConnection) -> Result<(), AppError> {
    let builder = conn.get_database_backend();
    let schema = Schema::new(builder);

    let mut people_table: TableCreateStatement = schema.create_table_from_entity(people::Entity);
    people_table.if_not_exists();
    conn.execute(builder.build(&people_table)).await?;

    let mut videos_table: TableCreateStatement = schema.create_table_from_entity(videos::Entity);
    videos_table.if_not_exists();
    conn.execute(builder.build(&videos_table)).await?;

    Ok(())
}
