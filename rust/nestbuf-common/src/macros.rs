/// Unwraps a `Result<T, E>` inside a function returning `Option<Result<T, E>>`.
///
/// `Ok(t)` yields `t`; `Err(e)` makes the enclosing function return
/// `Some(Err(e))`. Used by the `next()` implementations of the buffer-backed
/// record iterators, which surface decode failures as the next item.
#[macro_export]
macro_rules! try_or_ret_some_err {
    ($expr:expr) => {
        match $expr {
            Ok(value) => value,
            Err(err) => {
                return Some(Err(err));
            }
        }
    };
}
