use crate::models::Item;

/// Formats a list of items as the block layout of the stock viewer:
/// one block per item, separated by a dashed line.
pub fn format_item_list(items: &[Item]) -> String {
    let mut output = String::new();

    for item in items {
        output.push_str(&format!(
            "Name: {}\nQuantity: {}\nPrice: ${}\nSize: {}\n",
            item.name, item.quantity, item.price, item.size
        ));
        output.push_str(&"-".repeat(40));
        output.push('\n');
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_item_list_empty() {
        assert_eq!(format_item_list(&[]), "");
    }

    #[test]
    fn test_format_item_list_blocks() {
        let items = vec![
            Item::new("Red Shirt", "M", 20.0, 5),
            Item::new("Blue Jeans", "S", 35.5, 2),
        ];
        let output = format_item_list(&items);

        assert!(output.contains("Name: Red Shirt"));
        assert!(output.contains("Price: $35.5"));
        assert!(output.contains("Size: M"));
        assert_eq!(output.matches(&"-".repeat(40)).count(), 2);
    }
}
