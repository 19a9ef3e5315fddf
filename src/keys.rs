/// Derives the default cache key from a call's arguments.
///
/// When a wrapper is built with [`memoize`](crate::memoize) (no resolver),
/// the cache key is the **first positional argument** of the call: a bare
/// argument keys on itself, a tuple of arguments keys on its first element.
/// Arguments past the first do not participate, so two calls that differ
/// only in a later tuple field resolve to the same key and share one cache
/// entry. Pass a resolver to [`memoize_with`](crate::memoize_with) when
/// every argument should matter.
///
/// Floats have no `Eq`/`Hash` and therefore no implementation here;
/// float-keyed callers must supply a resolver producing a hashable key.
///
/// # Examples
///
/// ```
/// use memolito::FirstArgKey;
///
/// assert_eq!(7u32.first_arg(), 7);
/// assert_eq!((7u32, "ignored").first_arg(), 7);
/// assert_eq!(("a", 1, 2).first_arg(), "a");
/// ```
pub trait FirstArgKey {
    /// The derived key type.
    type Key: Clone;

    /// Returns the default cache key for this argument list.
    fn first_arg(&self) -> Self::Key;
}

macro_rules! impl_self_keyed {
    ($($t:ty),* $(,)?) => {
        $(
            impl FirstArgKey for $t {
                type Key = $t;

                fn first_arg(&self) -> $t {
                    self.clone()
                }
            }
        )*
    };
}

impl_self_keyed!(
    bool, char, u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, String,
);

impl FirstArgKey for &str {
    type Key = String;

    fn first_arg(&self) -> String {
        (*self).to_string()
    }
}

macro_rules! impl_tuple_first {
    ($($rest:ident),*) => {
        impl<K: Clone, $($rest),*> FirstArgKey for (K, $($rest,)*) {
            type Key = K;

            fn first_arg(&self) -> K {
                self.0.clone()
            }
        }
    };
}

impl_tuple_first!();
impl_tuple_first!(A1);
impl_tuple_first!(A1, A2);
impl_tuple_first!(A1, A2, A3);
