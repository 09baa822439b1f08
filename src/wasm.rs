//! WASM bindings for Ohmdraw Core.
//!
//! This module provides JavaScript-friendly bindings for solving and drawing
//! circuits in the browser.
//!
//! ## Usage (JavaScript)
//!
//! ```javascript
//! import init, { WasmCircuit } from 'ohmdraw_core';
//!
//! await init();
//!
//! const circuit = new WasmCircuit("Circuit 1:V.12:300.150");
//! pre.textContent = circuit.schematic();
//! console.log(circuit.resistance, circuit.intensity);
//! ```

use wasm_bindgen::prelude::*;

use crate::circuit::Circuit;
use crate::error::OhmdrawError;
use crate::report::{Report, ReportConfig};
use crate::schematic::Schematic;

/// Initialize panic hook for better error messages in browser console.
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

fn to_js(err: OhmdrawError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// WASM-compatible solved circuit.
///
/// This struct wraps the native [`Circuit`] and exposes its totals, report
/// and schematic as plain numbers and strings.
#[wasm_bindgen]
pub struct WasmCircuit {
    circuit: Circuit,
}

#[wasm_bindgen]
impl WasmCircuit {
    /// Parse and solve a circuit.
    ///
    /// # Arguments
    /// * `notation` - The circuit in `Name:Source:Topology` notation
    ///
    /// # Returns
    /// A new `WasmCircuit` instance or an error message if the notation is
    /// malformed or the network cannot be solved.
    #[wasm_bindgen(constructor)]
    pub fn new(notation: &str) -> Result<WasmCircuit, JsValue> {
        let circuit = Circuit::parse(notation).map_err(to_js)?;
        Ok(WasmCircuit { circuit })
    }

    /// Circuit name.
    #[wasm_bindgen(getter)]
    pub fn name(&self) -> String {
        self.circuit.name().to_string()
    }

    /// Total equivalent resistance in ohms.
    #[wasm_bindgen(getter)]
    pub fn resistance(&self) -> f64 {
        self.circuit.resistance()
    }

    /// Supply voltage in volts.
    #[wasm_bindgen(getter)]
    pub fn voltage(&self) -> f64 {
        self.circuit.voltage()
    }

    /// Supply current in amperes.
    #[wasm_bindgen(getter)]
    pub fn intensity(&self) -> f64 {
        self.circuit.intensity()
    }

    /// Total power in watts.
    #[wasm_bindgen(getter)]
    pub fn power(&self) -> f64 {
        self.circuit.power()
    }

    /// Component labels in canonical order.
    #[wasm_bindgen]
    pub fn labels(&self) -> Vec<String> {
        self.circuit
            .components()
            .iter()
            .map(|node| node.id.clone())
            .collect()
    }

    /// Voltage across a labeled component, or `undefined` if unknown.
    #[wasm_bindgen]
    pub fn component_voltage(&self, id: &str) -> Option<f64> {
        self.circuit.find(id).map(|node| node.values.voltage)
    }

    /// Current through a labeled component, or `undefined` if unknown.
    #[wasm_bindgen]
    pub fn component_intensity(&self, id: &str) -> Option<f64> {
        self.circuit.find(id).map(|node| node.values.intensity)
    }

    /// Rendered box-drawing schematic.
    #[wasm_bindgen]
    pub fn schematic(&self) -> String {
        Schematic::new(&self.circuit).render()
    }

    /// Full text report with the given number of decimals.
    #[wasm_bindgen]
    pub fn report(&self, precision: usize) -> String {
        let config = ReportConfig::new().with_precision(precision);
        Report::new(&self.circuit, config).to_string()
    }
}

/// Get the library version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
