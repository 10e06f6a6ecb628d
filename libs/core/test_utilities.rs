#[macro_export]
macro_rules! assert_value_eq_json {
    ($value:expr, $($json:tt)*) => {
        let v: ::serde_json::Value = ::serde_json::json!($($json)*);

        let left = ::serde_json::to_value(&$value).unwrap();

        assert_eq!(left, v, "json are not equals");
    };
}

#[macro_export]
macro_rules! activities_vec {
    ($($json:tt)*) => {{
        let val = ::serde_json::json!($($json)*);
        let data: Vec<$crate::Activity> = ::serde_json::from_value(val).unwrap();
        data
    }};
}

/// Raw JSON stored under `key`, parsed for comparisons
pub fn persisted(
    storage: &actstore_storage::storage::in_memory::InMemoryStorage,
    key: &str,
) -> Option<serde_json::Value> {
    storage
        .peek(key)
        .map(|raw| serde_json::from_str(&raw).unwrap())
}
