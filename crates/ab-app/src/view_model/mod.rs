pub mod address_view_model;
pub mod contact_list_state;
pub mod list_view;
