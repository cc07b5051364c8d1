/// Configuration macros for zero-repetition config definitions
///
/// Provides the `config_struct!` macro that defines a configuration
/// structure with embedded defaults in a single declaration.

/// Define a configuration struct with embedded defaults
///
/// For each declaration this generates:
/// - The struct with public fields
/// - A `Default` implementation with the specified values
/// - Serde serialization/deserialization with `#[serde(default)]`, so a
///   partially-written or older file still loads
///
/// # Example
/// ```
/// use tokentrack::config_struct;
///
/// config_struct! {
///     pub struct ApiKeys {
///         explorer_key: String = String::new(),
///     }
/// }
/// ```
#[macro_export]
macro_rules! config_struct {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$field_meta:meta])*
                $field_name:ident: $field_type:ty = $default_value:expr
            ),*
            $(,)?
        }
    ) => {
        #[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
        #[serde(default)]
        $(#[$meta])*
        $vis struct $name {
            $(
                $(#[$field_meta])*
                pub $field_name: $field_type,
            )*
        }

        impl Default for $name {
            fn default() -> Self {
                Self {
                    $(
                        $field_name: $default_value,
                    )*
                }
            }
        }
    };
}
