pub mod event;
pub mod participant;
pub mod quota;
pub mod random;
pub mod session;
pub mod settings;
pub mod timer;
pub mod transition;
