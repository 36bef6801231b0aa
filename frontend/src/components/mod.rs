pub mod image_card;
