pub mod similar_items;
pub mod suggestions;
