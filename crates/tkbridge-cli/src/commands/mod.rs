//! Subcommands

pub mod classes;
pub mod demo;

use std::rc::Rc;

use anyhow::Context;
use tkbridge::{Bridge, BridgeConfig};
use tkbridge_host::{HostOptions, Interp};
use tkbridge_toolkit::Toolkit;

/// Interpreter and installed bridge built from the config
pub struct Session {
    pub rt: Rc<Interp>,
    pub bridge: Rc<Bridge>,
}

impl Session {
    pub fn open(config: &BridgeConfig) -> anyhow::Result<Self> {
        let options: HostOptions = toml::Value::Table(config.host.clone())
            .try_into()
            .context("invalid [host] section")?;
        let rt = Interp::new(options);
        let toolkit = Rc::new(Toolkit::new(config.toolkit.clone()));
        let bridge = Bridge::install(&*rt, toolkit, &config.bridge)?;
        Ok(Session { rt, bridge })
    }
}
