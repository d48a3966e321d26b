//! WASM wrapper around the Duffing core: batch runs for the charts.

use crate::series::{resolve_epsilons, sensitivity_series_name, SeriesPayload, PRIMARY_SERIES_NAME};
use anyhow::Context;
use duffing_core::{integrate, run_sensitivity, DuffingParameters, InitialState, SimulationConfig};
use serde_wasm_bindgen::to_value;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct WasmDuffing {
    params: DuffingParameters,
    initial: InitialState,
    config: SimulationConfig,
}

fn js_error(err: anyhow::Error) -> JsValue {
    JsValue::from_str(&format!("{err:#}"))
}

#[wasm_bindgen]
impl WasmDuffing {
    #[wasm_bindgen(constructor)]
    pub fn new(
        delta: f64,
        alpha: f64,
        beta: f64,
        amplitude: f64,
        frequency: f64,
        x0: f64,
        v0: f64,
    ) -> WasmDuffing {
        console_error_panic_hook::set_once();

        WasmDuffing {
            params: DuffingParameters::new(delta, alpha, beta, amplitude, frequency),
            initial: InitialState::new(x0, v0),
            config: SimulationConfig::default(),
        }
    }

    pub fn with_defaults() -> WasmDuffing {
        let params = DuffingParameters::default();
        let initial = InitialState::default();
        WasmDuffing::new(
            params.delta,
            params.alpha,
            params.beta,
            params.amplitude,
            params.frequency,
            initial.x0,
            initial.v0,
        )
    }

    pub fn set_parameters(
        &mut self,
        delta: f64,
        alpha: f64,
        beta: f64,
        amplitude: f64,
        frequency: f64,
    ) {
        self.params = DuffingParameters::new(delta, alpha, beta, amplitude, frequency);
    }

    pub fn set_initial_state(&mut self, x0: f64, v0: f64) {
        self.initial = InitialState::new(x0, v0);
    }

    pub fn set_config(&mut self, dt: f64, t_max: f64) -> Result<(), JsValue> {
        self.config = SimulationConfig::new(dt, t_max)
            .context("Rejected simulation config")
            .map_err(js_error)?;
        Ok(())
    }

    pub fn sample_count(&self) -> usize {
        self.config.sample_count()
    }

    /// Integrates the unperturbed initial state and returns one series.
    pub fn simulate(&self) -> Result<JsValue, JsValue> {
        let trajectory = integrate(&self.params, &self.initial, 0.0, &self.config)
            .context("Simulation failed")
            .map_err(js_error)?;
        let payload = SeriesPayload::from_trajectory(PRIMARY_SERIES_NAME.to_string(), &trajectory);
        to_value(&payload).map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
    }

    /// One series per offset, in the order given. An empty list uses the default offsets.
    pub fn sensitivity(&self, epsilons: Vec<f64>) -> Result<JsValue, JsValue> {
        let epsilons = resolve_epsilons(epsilons).map_err(js_error)?;
        let set = run_sensitivity(&self.params, &self.initial, &epsilons, &self.config)
            .context("Sensitivity run failed")
            .map_err(js_error)?;
        let payload: Vec<SeriesPayload> = set
            .iter()
            .map(|run| SeriesPayload::from_trajectory(sensitivity_series_name(run.epsilon()), run))
            .collect();
        to_value(&payload).map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
    }
}
