//! HTML rendering for the inventory page.

use std::fmt::Write;

use stocklist_inventory::Item;

const PAGE_HEAD: &str = concat!(
    "<!DOCTYPE html>",
    r#"<html><head><meta charset="utf-8"><title>Inventory</title></head>"#,
    r#"<body style="font-family:Arial;margin:40px;">"#,
    "<h2>Inventory</h2>",
    r#"<form action="/add" method="post">"#,
    r#"Item Name: <input name="name"><br><br>"#,
    r#"Quantity: <input name="qty" type="number"><br><br>"#,
    "<button>Add Item</button></form><br>",
    "<h3>Items:</h3>",
);

const PAGE_TAIL: &str = "</body></html>";

/// Render the form followed by every item, oldest first.
pub fn inventory_page(items: &[Item]) -> String {
    let mut html = String::with_capacity(PAGE_HEAD.len() + PAGE_TAIL.len() + items.len() * 32);
    html.push_str(PAGE_HEAD);
    html.push_str("<ul>");
    for item in items {
        // Writing into a String cannot fail.
        let _ = write!(
            html,
            "<li>{} - {}</li>",
            escape(item.name()),
            escape(item.quantity())
        );
    }
    html.push_str("</ul>");
    html.push_str(PAGE_TAIL);
    html
}

/// Escape text for use in element content or a quoted attribute.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_inventory_renders_empty_list() {
        let html = inventory_page(&[]);
        assert!(html.contains("<ul></ul>"));
        assert!(html.contains(r#"<input name="qty" type="number">"#));
    }

    #[test]
    fn items_render_as_name_dash_quantity() {
        let html = inventory_page(&[Item::new("Widget", "5"), Item::new("", "")]);
        assert!(html.contains("<ul><li>Widget - 5</li><li> - </li></ul>"));
    }

    #[test]
    fn item_text_is_escaped() {
        let html = inventory_page(&[Item::new("<script>alert('x')</script>", "1 & 2")]);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt; - 1 &amp; 2"));
    }

    #[test]
    fn escape_leaves_plain_text_alone() {
        assert_eq!(escape("Gadget 3"), "Gadget 3");
        assert_eq!(escape(r#"a"b"#), "a&quot;b");
    }
}
