mod bus;
pub mod channels;
mod errors;
mod message;

pub use self::bus::Bus;
pub use self::message::Message;
