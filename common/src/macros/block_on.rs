/// Drives a future to completion from synchronous code running inside a tokio runtime, such as
/// a `Drop` impl.
///
/// Only valid on the multi-threaded runtime: callers that cannot guarantee the flavor should
/// check `Handle::runtime_flavor` first.
#[macro_export]
macro_rules! block_on {
    ($async_expr:expr) => {{
        tokio::task::block_in_place(|| {
            let handle = tokio::runtime::Handle::current();
            handle.block_on($async_expr)
        })
    }};
}
