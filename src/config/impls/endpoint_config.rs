use crate::config::structs::endpoint_config::EndpointConfig;
use std::time::Duration;

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            host: String::from("example-ats.iot.us-east-1.amazonaws.com"),
            port: 8883,
            connect_timeout: 10_000,
        }
    }
}

impl EndpointConfig {
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_millis(self.connect_timeout)
    }

    /// Accepts `host` or `host:port`.
    pub fn set_address(&mut self, address: &str) {
        if let Some((host, port)) = address.rsplit_once(':')
            && let Ok(port) = port.parse::<u16>()
        {
            self.host = host.to_string();
            self.port = port;
        } else {
            self.host = address.to_string();
        }
    }
}
