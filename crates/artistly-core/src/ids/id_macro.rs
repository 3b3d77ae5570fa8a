//! Shared impls for string-backed identifiers.

macro_rules! impl_id {
    ($($name:ident),* $(,)?) => {
        $(
            impl $name {
                /// Fresh random id (UUID v4).
                pub fn new() -> Self {
                    Self(uuid::Uuid::new_v4().to_string())
                }

                /// Wrap an id that was issued elsewhere.
                pub fn from_string(s: String) -> Self {
                    Self(s)
                }
            }

            impl Default for $name {
                fn default() -> Self {
                    Self::new()
                }
            }

            impl std::fmt::Display for $name {
                fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    f.write_str(&self.0)
                }
            }
        )*
    };
}

pub(crate) use impl_id;
