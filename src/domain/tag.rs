use serde::Deserialize;

/// An entry of the tag catalog, used to drive the tag picker.
#[derive(Debug, Clone, Deserialize)]
pub struct Tag {
    pub name: String,
}
