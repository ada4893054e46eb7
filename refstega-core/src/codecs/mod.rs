pub mod capacity;
pub mod channel;
pub mod codec;
pub mod collision;
pub mod frame;
pub mod lsb;
pub mod walker;
