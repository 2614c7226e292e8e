use std::net::IpAddr;

use pnet::datalink::NetworkInterface;
use pnet::util::MacAddr;

pub trait NetworkInterfaceExtension {
    fn ip_addrs(&self) -> Vec<IpAddr>;
    fn has_ip(&self, addr: IpAddr) -> bool;
    fn has_mac(&self, mac: MacAddr) -> bool;
}

impl NetworkInterfaceExtension for NetworkInterface {
    fn ip_addrs(&self) -> Vec<IpAddr> {
        self.ips.iter().map(|net| net.ip()).collect()
    }

    fn has_ip(&self, addr: IpAddr) -> bool {
        self.ips.iter().any(|net| net.ip() == addr)
    }

    fn has_mac(&self, mac: MacAddr) -> bool {
        self.mac.is_some_and(|own| own == mac)
    }
}
