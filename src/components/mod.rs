pub mod composer;
pub mod header_bar;
pub mod information;
pub mod message_list;
pub mod settings_modal;
