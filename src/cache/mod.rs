//! 缓存层
//!
//! `ObjectCache` 是统一的对象缓存接口，后端实现（Moka/Redis）通过
//! `declare_object_cache_plugin!` 在启动前注册到插件注册表，
//! 运行时按配置选择并支持回退。

pub mod object_cache;
pub mod register;

use async_trait::async_trait;

/// 缓存查询结果
#[derive(Debug, Clone, PartialEq)]
pub enum CacheResult<T> {
    Found(T),
    NotFound,
    ExistsButNoValue,
}

#[async_trait]
pub trait ObjectCache: Send + Sync {
    /// 获取原始字符串值
    async fn get_raw(&self, key: &str) -> CacheResult<String>;
    /// 写入原始字符串值，ttl 单位为秒
    async fn insert_raw(&self, key: String, value: String, ttl: u64);
    /// 删除指定键
    async fn remove(&self, key: &str);
    /// 清空全部缓存
    async fn invalidate_all(&self);
}

/// 声明并注册一个对象缓存插件
///
/// 展开为一个 `#[ctor]` 函数，在 main 之前把构造器注册到插件注册表。
#[macro_export]
macro_rules! declare_object_cache_plugin {
    ($name:literal, $cache:ident) => {
        paste::paste! {
            #[ctor::ctor]
            fn [<__register_ $cache:snake _plugin>]() {
                $crate::cache::register::register_object_cache_plugin(
                    $name,
                    ::std::sync::Arc::new(|| {
                        ::std::boxed::Box::pin(async {
                            let cache = $cache::new()
                                .map_err($crate::errors::ClassboardError::cache_connection)?;
                            Ok(::std::boxed::Box::new(cache)
                                as ::std::boxed::Box<dyn $crate::cache::ObjectCache>)
                        })
                            as $crate::cache::register::BoxedObjectCacheFuture
                    }),
                );
            }
        }
    };
}
