//! `tkbridge demo`: a window, a button and a counter, clicked headlessly.

use std::cell::Cell;
use std::rc::Rc;

use anyhow::bail;
use tkbridge::BridgeConfig;
use tkbridge_sdk::Value;
use tkbridge_toolkit::Event;
use tracing::info;

use super::Session;

pub fn execute(config: &BridgeConfig, clicks: u32) -> anyhow::Result<()> {
    let Session { rt, bridge } = Session::open(config)?;
    let module = &config.bridge.module;
    let class = |name: &str| rt.constant(&format!("{}::{}", module, name));

    let window = rt.call(
        &class("Window")?,
        "new",
        &[Value::Int(260), Value::Int(120), Value::str("tkbridge demo")],
    )?;
    let button = rt.call(
        &class("Button")?,
        "new",
        &[
            Value::Int(20),
            Value::Int(40),
            Value::Int(120),
            Value::Int(30),
            Value::str("Click me"),
        ],
    )?;
    let output = rt.call(
        &class("ValueOutput")?,
        "new",
        &[Value::Int(160), Value::Int(40), Value::Int(80), Value::Int(30)],
    )?;
    rt.call(&window, "end", &[])?;
    rt.call(&window, "show", &[])?;

    let count = Rc::new(Cell::new(0i64));
    let counter = count.clone();
    let display = output.clone();
    let block = rt.proc(move |rt, args| {
        counter.set(counter.get() + 1);
        let step = args[1].as_int().unwrap_or(1);
        let shown = counter.get() * step;
        rt.funcall(&display, "value=", &[Value::Int(shown)], None)?;
        let label = rt.new_string(&format!("Clicked {}", counter.get()))?;
        rt.funcall(&args[0], "label=", &[label], None)
    });
    rt.call_with_block(&button, "callback", &[Value::Int(10)], &block)?;

    let tk = bridge.toolkit();
    let button_id = bridge.native_of(&button)?;
    for _ in 0..clicks {
        tk.post(Event::Activate(button_id));
    }
    tk.post(Event::Close(bridge.native_of(&window)?));

    let status = rt.call(&Value::Class(bridge.module().clone()), "run", &[])?;
    if count.get() != i64::from(clicks) {
        bail!("expected {} callbacks, saw {}", clicks, count.get());
    }

    let label = rt.call(&button, "label", &[])?;
    let value = rt.call(&output, "value", &[])?;
    info!(?status, clicks, "demo finished");
    println!("button label: {}", label.as_str().unwrap_or("<none>"));
    println!("output value: {}", value.as_float().unwrap_or_default());
    Ok(())
}
