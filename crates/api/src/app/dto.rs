use serde::{Deserialize, Serialize};

use stocklist_inventory::AddItem;

// -------------------------
// Request DTOs
// -------------------------

/// Fields of `POST /add`. Names match the HTML form inputs.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct AddItemForm {
    pub name: Option<String>,
    pub qty: Option<String>,
}

impl AddItemForm {
    /// Collect the form from raw key/value pairs.
    ///
    /// A repeated key keeps its first value; unknown keys are ignored.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut form = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "name" => &mut form.name,
                "qty" => &mut form.qty,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        form
    }
}

impl From<AddItemForm> for AddItem {
    fn from(form: AddItemForm) -> Self {
        AddItem {
            name: form.name,
            quantity: form.qty,
        }
    }
}

/// Body of `POST /api/items`.
#[derive(Debug, Default, Deserialize)]
pub struct AddItemRequest {
    pub name: Option<String>,
    pub quantity: Option<String>,
}

impl From<AddItemRequest> for AddItem {
    fn from(req: AddItemRequest) -> Self {
        AddItem {
            name: req.name,
            quantity: req.quantity,
        }
    }
}

// -------------------------
// Response DTOs
// -------------------------

#[derive(Debug, Serialize)]
pub struct AddItemResponse {
    /// Items in the store once this append landed.
    pub count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
        raw.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn repeated_key_keeps_first_value() {
        let form = AddItemForm::from_pairs(pairs(&[("name", "Bolt"), ("name", "Nut"), ("qty", "7")]));
        assert_eq!(form.name.as_deref(), Some("Bolt"));
        assert_eq!(form.qty.as_deref(), Some("7"));
    }

    #[test]
    fn unknown_keys_are_ignored_and_missing_stay_absent() {
        let form = AddItemForm::from_pairs(pairs(&[("colour", "red"), ("name", "")]));
        assert_eq!(form, AddItemForm { name: Some(String::new()), qty: None });
    }
}
