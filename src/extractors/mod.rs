pub mod current_publisher;
