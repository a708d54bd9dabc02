use std::fmt;
use std::net::Ipv6Addr;

use bit_trie::Key;
use ipnet::Ipv6Net;

/// An IPv6 route. The address is kept as given, host bits included.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    octets: [u8; 16],
    mask_len: u8,
    metric: u32,
}

impl Route {
    pub fn new(addr: Ipv6Addr, mask_len: u8, metric: u32) -> Self {
        Self {
            octets: addr.octets(),
            mask_len,
            metric,
        }
    }

    pub fn from_prefix(prefix: Ipv6Net, metric: u32) -> Self {
        Self::new(prefix.addr(), prefix.prefix_len(), metric)
    }

    pub fn addr(&self) -> Ipv6Addr {
        Ipv6Addr::from(self.octets)
    }

    pub fn mask_len(&self) -> u8 {
        self.mask_len
    }

    pub fn metric(&self) -> u32 {
        self.metric
    }

    /// `None` when the mask length is above 128.
    pub fn prefix(&self) -> Option<Ipv6Net> {
        Ipv6Net::new(self.addr(), self.mask_len).ok()
    }

    pub fn key(&self) -> Key<'_> {
        Key::new(&self.octets, self.mask_len as usize)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} -----> {}", self.addr(), self.mask_len, self.metric)
    }
}
