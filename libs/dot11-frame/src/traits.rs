use crate::frame::components::MacAddress;
use crate::frame::*;
use enum_dispatch::enum_dispatch;

/// Access to the source, destination and bssid addresses of a frame,
/// independent of the concrete frame struct.
#[enum_dispatch]
pub trait Addresses {
    /// The sender of the frame.
    fn src(&self) -> Option<&MacAddress>;

    /// The destination of the frame. Always present.
    fn dest(&self) -> &MacAddress;

    /// The BSSID, if the frame carries one.
    fn bssid(&self) -> Option<&MacAddress>;
}
