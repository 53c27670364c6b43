pub mod click;
pub mod listener;
pub mod media;
pub mod pointer;

pub use click::wire_click_handlers;
pub use listener::ListenerGuard;
pub use media::wire_media_state;
pub use pointer::wire_pointer_move;
