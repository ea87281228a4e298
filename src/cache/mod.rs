pub mod object_cache;
pub mod register;
pub mod traits;

pub use traits::{CacheResult, ObjectCache};

/// Registers a cache backend under a plugin name at program start.
///
/// The wrapped type must expose `fn new() -> Result<Self, String>`. The
/// constructor is stored in the plugin registry and invoked lazily when
/// the configured backend is selected during startup.
#[macro_export]
macro_rules! declare_object_cache_plugin {
    ($name:expr, $cache_type:ty) => {
        #[ctor::ctor]
        fn __register_object_cache_plugin() {
            $crate::cache::register::register_object_cache_plugin(
                $name,
                std::sync::Arc::new(|| {
                    Box::pin(async {
                        let cache = <$cache_type>::new()
                            .map_err($crate::errors::EscolaError::cache_connection)?;
                        Ok(Box::new(cache) as Box<dyn $crate::cache::ObjectCache>)
                    })
                        as $crate::cache::register::BoxedObjectCacheFuture
                }),
            );
        }
    };
}
