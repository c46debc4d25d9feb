use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder};

use crate::{
    entity,
    error::ProductResult,
    models::{NewProduct, Product},
    repository::ProductRepository,
};

pub struct PgProductRepository {
    db: DatabaseConnection,
}

impl PgProductRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn save(&self, product: NewProduct) -> ProductResult<Product> {
        let active_model: entity::ActiveModel = product.into();
        let model = active_model.insert(&self.db).await?;
        Ok(model.into())
    }

    async fn find_all(&self) -> ProductResult<Vec<Product>> {
        let models = entity::Entity::find()
            .order_by_asc(entity::Column::Id)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Product::from).collect())
    }

    async fn find_by_id(&self, id: i32) -> ProductResult<Option<Product>> {
        let model = entity::Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(Product::from))
    }

    async fn delete(&self, product: &Product) -> ProductResult<()> {
        let result = entity::Entity::delete_by_id(product.id)
            .exec(&self.db)
            .await?;

        if result.rows_affected == 0 {
            tracing::debug!(product_id = product.id, "Product row was already gone");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProductError;
    use chrono::Utc;
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase, MockExecResult};

    fn model(id: i32, name: &str, image: Option<&str>) -> entity::Model {
        let now = Utc::now().fixed_offset();
        entity::Model {
            id,
            name: name.to_string(),
            brand: "Acme".to_string(),
            category: "Tools".to_string(),
            price: Some(9.99),
            description: Some("A very useful tool".to_string()),
            image_file_name: image.map(str::to_string),
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn test_save_returns_stored_row() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![model(1, "hammer", Some("abc_hammer.png"))]])
            .into_connection();
        let repo = PgProductRepository::new(db);

        let saved = repo
            .save(NewProduct {
                name: "hammer".to_string(),
                brand: "Acme".to_string(),
                category: "Tools".to_string(),
                price: Some(9.99),
                description: Some("A very useful tool".to_string()),
                image_file_name: Some("abc_hammer.png".to_string()),
            })
            .await
            .unwrap();

        assert_eq!(saved.id, 1);
        assert_eq!(saved.image_file_name.as_deref(), Some("abc_hammer.png"));
    }

    #[tokio::test]
    async fn test_find_all_maps_rows() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![model(1, "hammer", None), model(2, "saw", None)]])
            .into_connection();
        let repo = PgProductRepository::new(db);

        let products = repo.find_all().await.unwrap();
        let ids: Vec<i32> = products.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[tokio::test]
    async fn test_find_by_id_missing() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<entity::Model>::new()])
            .into_connection();
        let repo = PgProductRepository::new(db);

        assert_eq!(repo.find_by_id(999).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_delete_executes_statement() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .into_connection();
        let repo = PgProductRepository::new(db);

        let product: Product = model(3, "drill", None).into();
        assert!(repo.delete(&product).await.is_ok());
    }

    #[tokio::test]
    async fn test_database_errors_become_product_errors() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Custom("connection reset".to_string())])
            .into_connection();
        let repo = PgProductRepository::new(db);

        let err = repo.find_all().await.unwrap_err();
        assert!(matches!(err, ProductError::Database(msg) if msg.contains("connection reset")));
    }
}
