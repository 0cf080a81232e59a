pub mod contact_form;
pub mod gallery;
pub mod header;
