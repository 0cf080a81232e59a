pub mod faq;
pub mod landing;
