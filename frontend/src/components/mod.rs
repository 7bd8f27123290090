pub mod car_card;
pub mod cars_section;
pub mod empty_state;
pub mod guard;
pub mod layout;
pub mod notification;
