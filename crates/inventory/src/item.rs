use serde::{Deserialize, Serialize};

/// A single inventory entry.
///
/// Items carry no identity: two items with the same name and quantity are
/// equal, and the only way to tell duplicates apart is their position in the
/// store. Both fields are opaque text; `quantity` is never parsed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Item {
    name: String,
    quantity: String,
}

impl Item {
    pub fn new(name: impl Into<String>, quantity: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            quantity: quantity.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn quantity(&self) -> &str {
        &self.quantity
    }
}

impl core::fmt::Display for Item {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} - {}", self.name, self.quantity)
    }
}

/// Command: AddItem.
///
/// Fields are optional because callers may omit them; an absent field is
/// stored as the empty string. Values are taken verbatim (no trimming).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddItem {
    pub name: Option<String>,
    pub quantity: Option<String>,
}

impl AddItem {
    pub fn into_item(self) -> Item {
        Item {
            name: self.name.unwrap_or_default(),
            quantity: self.quantity.unwrap_or_default(),
        }
    }
}
