use crate::application::cart::store::CartStore;
use crate::domain::cart::model::{CartUpdate, NewLineItemProps};

impl CartStore {
    /// Puts one unit of the product in the cart. A product already present
    /// gets its quantity bumped instead of a second line; its stored name,
    /// price and image are kept as first added.
    pub async fn add_item(&self, props: NewLineItemProps) -> CartUpdate {
        self.logger
            .info(&format!("Adding to cart: {}", props.product_id));

        let mut cart = self.cart.lock().await;
        cart.add(props);
        let persistence = self.persist(&cart).await;
        self.notify(&cart).await;

        self.logger.info(&format!(
            "Cart holds {} lines, {} units",
            cart.len(),
            cart.total_item_count()
        ));
        CartUpdate {
            cart: cart.clone(),
            persistence,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cart::model::{Cart, LineItem, PersistenceStatus};
    use crate::domain::cart::observer::CartObserver;
    use crate::domain::cart::storage::CartStorage;
    use crate::domain::errors::StorageError;
    use crate::domain::logger::Logger;
    use crate::domain::shared::value_objects::ProductId;
    use async_trait::async_trait;
    use mockall::mock;
    use std::sync::Arc;

    mock! {
        pub Storage {}

        #[async_trait]
        impl CartStorage for Storage {
            async fn load(&self) -> Result<Option<Vec<LineItem>>, StorageError>;
            async fn save(&self, items: &[LineItem]) -> Result<(), StorageError>;
            async fn clear(&self) -> Result<(), StorageError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    mock! {
        pub Observer {}

        impl CartObserver for Observer {
            fn cart_changed(&self, cart: &Cart);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn saree_props() -> NewLineItemProps {
        NewLineItemProps {
            product_id: ProductId::new("p1"),
            name: "Banarasi Silk Saree".to_string(),
            unit_price: 15999,
            image: Some("/products/banarasi-silk.jpg".to_string()),
        }
    }

    #[tokio::test]
    async fn should_persist_single_line_when_item_added() {
        let mut mock_storage = MockStorage::new();
        mock_storage
            .expect_save()
            .withf(|items| items.len() == 1 && items[0].quantity == 1)
            .times(1)
            .returning(|_| Ok(()));

        let store = CartStore::new(Arc::new(mock_storage), mock_logger());

        let update = store.add_item(saree_props()).await;

        assert!(update.persistence.is_synced());
        assert_eq!(update.cart.len(), 1);
        assert_eq!(update.cart.total_amount(), 15999);
    }

    #[tokio::test]
    async fn should_increment_quantity_when_item_added_twice() {
        let mut mock_storage = MockStorage::new();
        mock_storage.expect_save().times(2).returning(|_| Ok(()));

        let store = CartStore::new(Arc::new(mock_storage), mock_logger());

        store.add_item(saree_props()).await;
        let update = store.add_item(saree_props()).await;

        assert_eq!(update.cart.len(), 1);
        let line = update.cart.find(&ProductId::new("p1")).unwrap();
        assert_eq!(line.quantity, 2);
        assert_eq!(update.cart.total_amount(), 31998);
    }

    #[tokio::test]
    async fn should_notify_observers_with_new_snapshot() {
        let mut mock_storage = MockStorage::new();
        mock_storage.expect_save().returning(|_| Ok(()));

        let mut observer = MockObserver::new();
        observer
            .expect_cart_changed()
            .withf(|cart: &Cart| cart.total_item_count() == 1)
            .times(1)
            .returning(|_| ());

        let store = CartStore::new(Arc::new(mock_storage), mock_logger());
        store.subscribe(Arc::new(observer)).await;

        store.add_item(saree_props()).await;
    }

    #[tokio::test]
    async fn should_keep_item_and_warn_when_write_fails() {
        let mut mock_storage = MockStorage::new();
        mock_storage
            .expect_save()
            .returning(|_| Err(StorageError::WriteFailed));

        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().times(1).returning(|_| ());

        let store = CartStore::new(Arc::new(mock_storage), Arc::new(logger));

        let update = store.add_item(saree_props()).await;

        assert!(matches!(
            update.persistence,
            PersistenceStatus::Failed(StorageError::WriteFailed)
        ));
        assert_eq!(store.cart().await.len(), 1);
    }

    #[tokio::test]
    async fn should_notify_observers_even_when_write_fails() {
        let mut mock_storage = MockStorage::new();
        mock_storage
            .expect_save()
            .returning(|_| Err(StorageError::WriteFailed));

        let mut observer = MockObserver::new();
        observer.expect_cart_changed().times(1).returning(|_| ());

        let store = CartStore::new(Arc::new(mock_storage), mock_logger());
        store.subscribe(Arc::new(observer)).await;

        store.add_item(saree_props()).await;
    }
}
