mod layout;
pub use layout::Layout;

mod home;
pub use home::Home;

mod register;
pub use register::Register;

mod login;
pub use login::Login;

mod schools;
pub use schools::Schools;

mod contact;
pub use contact::Contact;

mod not_found;
pub use not_found::NotFound;
