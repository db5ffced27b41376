//! `tkbridge classes`: print the mirrored class tree.

use tkbridge::BridgeConfig;

use super::Session;

pub fn execute(config: &BridgeConfig) -> anyhow::Result<()> {
    let session = Session::open(config)?;
    let module = &config.bridge.module;
    for line in tkbridge::tree_lines(module) {
        println!("{}", line);
    }
    println!();
    println!(
        "{} classes under {}",
        session.bridge.module().constant_names().len(),
        module
    );
    Ok(())
}
