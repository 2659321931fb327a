// toypad/src/transport/traits.rs

use crate::Result;

/// Transport trait abstracts the USB endpoint driver away from the
/// protocol engine. Inbound packets are pushed into
/// [`ToyPad::on_receive`](crate::toypad::ToyPad::on_receive) by the driver.
pub trait Transport: Send {
    /// Queue one packet for the host. Must not block.
    fn send(&mut self, data: &[u8]) -> Result<()>;

    /// Whether the host currently has the endpoint open. Default assumes
    /// it does.
    fn is_connected(&self) -> bool {
        true
    }
}

/// Lifecycle signals raised by the transport driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportSignal {
    /// Bus resumed or device woken
    Wake,
    /// Host configured the device
    Connected,
    /// Bus suspended or cable pulled
    Suspended,
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn send(&mut self, data: &[u8]) -> Result<()> {
        (**self).send(data)
    }

    fn is_connected(&self) -> bool {
        (**self).is_connected()
    }
}
