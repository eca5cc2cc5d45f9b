#[macro_export]
macro_rules! impl_store_reads {
    ($store_name:ident, $entity:ty, $id:ty, $entity_name_snake:ident) => {
        paste::paste! {
            impl $store_name {
                #[tracing::instrument(skip(self))]
                pub async fn [<get_ $entity_name_snake>](&self, id: $id) -> Result<Option<$entity>, $crate::actor_framework::FrameworkError> {
                    tracing::debug!("Sending request");
                    self.inner.get(id).await
                }

                #[tracing::instrument(skip(self))]
                pub async fn [<list_ $entity_name_snake s>](&self) -> Result<Vec<$entity>, $crate::actor_framework::FrameworkError> {
                    tracing::debug!("Sending request");
                    self.inner.list().await
                }

                #[tracing::instrument(skip(self))]
                pub async fn [<delete_ $entity_name_snake>](&self, id: $id) -> Result<(), $crate::actor_framework::FrameworkError> {
                    tracing::debug!("Sending request");
                    self.inner.delete(id).await
                }
            }
        }
    };
}

#[macro_export]
macro_rules! impl_store_new {
    ($store_name:ident, $entity:ty) => {
        impl $store_name {
            pub fn new(inner: $crate::actor_framework::ResourceClient<$entity>) -> Self {
                Self { inner }
            }
        }
    };
}

#[macro_export]
macro_rules! impl_basic_store {
    ($store_name:ident, $entity:ty, $id:ty, $entity_name_snake:ident) => {
        $crate::impl_store_new!($store_name, $entity);
        $crate::impl_store_reads!($store_name, $entity, $id, $entity_name_snake);
    };
}
