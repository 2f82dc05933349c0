pub mod events;
pub mod factory;

pub mod logs {
    pub mod publisher;
}

pub mod memory {
    pub mod publisher;
}

#[derive(Debug, PartialEq)]
pub enum GatewayPublisherVia {
    Logs,
    Memory,
}
