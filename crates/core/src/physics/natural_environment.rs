//! Natural environment: the ambient air conditions a model runs in
//!
//! Values are stored in standard scientific units (Kelvin, percent relative
//! humidity, Pascals). Every unit-specific accessor is a conversion wrapper
//! around those canonical fields, so there is a single source of truth.
//!
//! # Change Notification
//! Each field assignment marks the environment as changed and synchronously
//! invokes every registered listener once with the [`EnvironmentField`] that
//! was assigned. There is no before/after comparison: assigning the current
//! value notifies too.
//!
//! # Duplication
//! `NaturalEnvironment` is not `Clone`. Use
//! [`NaturalEnvironment::copy_of`] or
//! [`NaturalEnvironment::set_natural_environment_from`], which copy values
//! only and never touch the source or its listeners.

use crate::core_types::constants::{PRESSURE_REFERENCE_PA, ROOM_TEMPERATURE_K};
use crate::core_types::{
    Atmospheres, Celsius, Fahrenheit, HumidityUnit, Kelvin, Kilopascals, Millibars, Pascals,
    Percent, PressureUnit, TemperatureUnit,
};
use crate::enumerated::EnumeratedUnit;
use crate::error::ToolkitResult;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, trace, warn};

/// Default temperature: room temperature
pub const TEMPERATURE_K_DEFAULT: Kelvin = Kelvin::new(ROOM_TEMPERATURE_K);

/// Default relative humidity
pub const HUMIDITY_RELATIVE_DEFAULT: Percent = Percent::new(50.0);

/// Default pressure: standard sea-level pressure
pub const PRESSURE_PA_DEFAULT: Pascals = Pascals::new(PRESSURE_REFERENCE_PA);

/// Air attenuation is applied unless switched off
pub const AIR_ATTENUATION_APPLIED_DEFAULT: bool = true;

/// Identifies which field an assignment touched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnvironmentField {
    Temperature,
    HumidityRelative,
    Pressure,
    AirAttenuationApplied,
}

/// Plain value snapshot of a [`NaturalEnvironment`]
///
/// Missing fields deserialize to the module defaults, so partial settings
/// files are accepted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnvironmentSettings {
    pub temperature_k: Kelvin,
    pub humidity_relative: Percent,
    pub pressure_pa: Pascals,
    pub air_attenuation_applied: bool,
}

impl Default for EnvironmentSettings {
    fn default() -> Self {
        Self {
            temperature_k: TEMPERATURE_K_DEFAULT,
            humidity_relative: HUMIDITY_RELATIVE_DEFAULT,
            pressure_pa: PRESSURE_PA_DEFAULT,
            air_attenuation_applied: AIR_ATTENUATION_APPLIED_DEFAULT,
        }
    }
}

/// Handle returned by [`NaturalEnvironment::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

/// Callback invoked after each field assignment
pub type ChangeListener = Box<dyn FnMut(EnvironmentField) + Send>;

/// Mutable temperature / humidity / pressure / attenuation record
pub struct NaturalEnvironment {
    temperature_k: Kelvin,
    humidity_relative: Percent,
    pressure_pa: Pascals,
    air_attenuation_applied: bool,

    changed: bool,
    listeners: Vec<(ListenerId, ChangeListener)>,
    next_listener_id: u64,
}

impl Default for NaturalEnvironment {
    fn default() -> Self {
        Self::from_settings(EnvironmentSettings::default())
    }
}

impl fmt::Debug for NaturalEnvironment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NaturalEnvironment")
            .field("temperature_k", &self.temperature_k)
            .field("humidity_relative", &self.humidity_relative)
            .field("pressure_pa", &self.pressure_pa)
            .field("air_attenuation_applied", &self.air_attenuation_applied)
            .field("changed", &self.changed)
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}

impl NaturalEnvironment {
    /// Fully qualified constructor
    pub fn new(
        temperature_k: Kelvin,
        humidity_relative: Percent,
        pressure_pa: Pascals,
        air_attenuation_applied: bool,
    ) -> Self {
        Self {
            temperature_k,
            humidity_relative,
            pressure_pa,
            air_attenuation_applied,
            changed: false,
            listeners: Vec::new(),
            next_listener_id: 0,
        }
    }

    pub fn from_settings(settings: EnvironmentSettings) -> Self {
        Self::new(
            settings.temperature_k,
            settings.humidity_relative,
            settings.pressure_pa,
            settings.air_attenuation_applied,
        )
    }

    /// Copy constructor: a fresh instance holding `other`'s current values
    ///
    /// Listeners and the changed flag are not carried over.
    pub fn copy_of(other: &Self) -> Self {
        Self::from_settings(other.settings())
    }

    // ------------------------------------------------------------------------
    // Change notification
    // ------------------------------------------------------------------------

    /// Register a listener; it runs after every field assignment
    pub fn subscribe<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(EnvironmentField) + Send + 'static,
    {
        let id = ListenerId(self.next_listener_id);
        self.next_listener_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener. Returns `false` if `id` was not registered.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// True once any field has been assigned since construction or the last
    /// [`Self::clear_changed`]
    pub fn is_changed(&self) -> bool {
        self.changed
    }

    pub fn clear_changed(&mut self) {
        self.changed = false;
    }

    fn notify(&mut self, field: EnvironmentField) {
        self.changed = true;
        trace!(?field, listeners = self.listeners.len(), "natural environment changed");
        for (_, listener) in &mut self.listeners {
            listener(field);
        }
    }

    // ------------------------------------------------------------------------
    // Snapshot and bulk assignment
    // ------------------------------------------------------------------------

    pub fn settings(&self) -> EnvironmentSettings {
        EnvironmentSettings {
            temperature_k: self.temperature_k,
            humidity_relative: self.humidity_relative,
            pressure_pa: self.pressure_pa,
            air_attenuation_applied: self.air_attenuation_applied,
        }
    }

    pub fn apply_settings(&mut self, settings: EnvironmentSettings) {
        self.set_natural_environment(
            settings.temperature_k,
            settings.humidity_relative,
            settings.pressure_pa,
            settings.air_attenuation_applied,
        );
    }

    /// Restore every field to the module defaults
    pub fn reset(&mut self) {
        debug!("resetting natural environment to defaults");
        self.apply_settings(EnvironmentSettings::default());
    }

    /// Assign all four fields; each assignment notifies
    pub fn set_natural_environment(
        &mut self,
        temperature_k: Kelvin,
        humidity_relative: Percent,
        pressure_pa: Pascals,
        air_attenuation_applied: bool,
    ) {
        self.set_temperature_k(temperature_k);
        self.set_humidity_relative(humidity_relative);
        self.set_pressure_pa(pressure_pa);
        self.set_air_attenuation_applied(air_attenuation_applied);
    }

    /// One-shot value copy from `other`; no binding is kept
    pub fn set_natural_environment_from(&mut self, other: &Self) {
        self.apply_settings(other.settings());
    }

    // ------------------------------------------------------------------------
    // Temperature
    // ------------------------------------------------------------------------

    pub fn temperature_k(&self) -> Kelvin {
        self.temperature_k
    }

    pub fn temperature_c(&self) -> Celsius {
        self.temperature_k.to_celsius()
    }

    pub fn temperature_f(&self) -> Fahrenheit {
        self.temperature_k.to_fahrenheit()
    }

    pub fn temperature(&self, unit: TemperatureUnit) -> f64 {
        match unit {
            TemperatureUnit::Kelvin => *self.temperature_k(),
            TemperatureUnit::Celsius => *self.temperature_c(),
            TemperatureUnit::Fahrenheit => *self.temperature_f(),
        }
    }

    pub fn set_temperature_k(&mut self, temperature: Kelvin) {
        self.temperature_k = temperature;
        self.notify(EnvironmentField::Temperature);
    }

    pub fn set_temperature_c(&mut self, temperature: Celsius) {
        self.set_temperature_k(temperature.to_kelvin());
    }

    pub fn set_temperature_f(&mut self, temperature: Fahrenheit) {
        self.set_temperature_k(temperature.to_kelvin());
    }

    pub fn set_temperature(&mut self, value: f64, unit: TemperatureUnit) {
        match unit {
            TemperatureUnit::Kelvin => self.set_temperature_k(Kelvin::new(value)),
            TemperatureUnit::Celsius => self.set_temperature_c(Celsius::new(value)),
            TemperatureUnit::Fahrenheit => self.set_temperature_f(Fahrenheit::new(value)),
        }
    }

    /// Temperature in the unit with declaration index `ordinal`
    ///
    /// # Errors
    /// Returns `UnexpectedVariant` when `ordinal` names no [`TemperatureUnit`].
    pub fn temperature_for_ordinal(&self, ordinal: u32) -> ToolkitResult<f64> {
        TemperatureUnit::from_ordinal(ordinal).map(|unit| self.temperature(unit))
    }

    /// Set temperature in the unit with declaration index `ordinal`
    ///
    /// Unlike [`Self::temperature_for_ordinal`], an unknown ordinal is logged
    /// as a warning and the field is left unchanged.
    pub fn set_temperature_for_ordinal(&mut self, value: f64, ordinal: u32) {
        match TemperatureUnit::from_ordinal(ordinal) {
            Ok(unit) => self.set_temperature(value, unit),
            Err(err) => warn!("{err}; temperature left unchanged"),
        }
    }

    // ------------------------------------------------------------------------
    // Humidity
    // ------------------------------------------------------------------------

    pub fn humidity_relative(&self) -> Percent {
        self.humidity_relative
    }

    pub fn set_humidity_relative(&mut self, humidity: Percent) {
        self.humidity_relative = humidity;
        self.notify(EnvironmentField::HumidityRelative);
    }

    /// Set humidity expressed in `unit`
    ///
    /// Molar humidity has no conversion yet, so `HumidityUnit::Molar` leaves
    /// the stored value untouched and does not notify.
    pub fn set_humidity(&mut self, value: f64, unit: HumidityUnit) {
        if unit == HumidityUnit::Relative {
            self.set_humidity_relative(Percent::new(value));
        }
    }

    /// Ordinal form of [`Self::set_humidity`]; unknown ordinals warn
    pub fn set_humidity_for_ordinal(&mut self, value: f64, ordinal: u32) {
        match HumidityUnit::from_ordinal(ordinal) {
            Ok(unit) => self.set_humidity(value, unit),
            Err(err) => warn!("{err}; humidity left unchanged"),
        }
    }

    // ------------------------------------------------------------------------
    // Pressure
    // ------------------------------------------------------------------------

    pub fn pressure_pa(&self) -> Pascals {
        self.pressure_pa
    }

    pub fn pressure_kpa(&self) -> Kilopascals {
        self.pressure_pa.to_kilopascals()
    }

    pub fn pressure_mb(&self) -> Millibars {
        self.pressure_pa.to_millibars()
    }

    pub fn pressure_atm(&self) -> Atmospheres {
        self.pressure_pa.to_atmospheres()
    }

    pub fn pressure(&self, unit: PressureUnit) -> f64 {
        match unit {
            PressureUnit::Kilopascals => *self.pressure_kpa(),
            PressureUnit::Pascals => *self.pressure_pa(),
            PressureUnit::Millibars => *self.pressure_mb(),
            PressureUnit::Atmospheres => *self.pressure_atm(),
        }
    }

    pub fn set_pressure_pa(&mut self, pressure: Pascals) {
        self.pressure_pa = pressure;
        self.notify(EnvironmentField::Pressure);
    }

    pub fn set_pressure_kpa(&mut self, pressure: Kilopascals) {
        self.set_pressure_pa(pressure.to_pascals());
    }

    pub fn set_pressure_mb(&mut self, pressure: Millibars) {
        self.set_pressure_pa(pressure.to_pascals());
    }

    pub fn set_pressure_atm(&mut self, pressure: Atmospheres) {
        self.set_pressure_pa(pressure.to_pascals());
    }

    pub fn set_pressure(&mut self, value: f64, unit: PressureUnit) {
        match unit {
            PressureUnit::Kilopascals => self.set_pressure_kpa(Kilopascals::new(value)),
            PressureUnit::Pascals => self.set_pressure_pa(Pascals::new(value)),
            PressureUnit::Millibars => self.set_pressure_mb(Millibars::new(value)),
            PressureUnit::Atmospheres => self.set_pressure_atm(Atmospheres::new(value)),
        }
    }

    /// Pressure in the unit with declaration index `ordinal`
    ///
    /// # Errors
    /// Returns `UnexpectedVariant` when `ordinal` names no [`PressureUnit`].
    pub fn pressure_for_ordinal(&self, ordinal: u32) -> ToolkitResult<f64> {
        PressureUnit::from_ordinal(ordinal).map(|unit| self.pressure(unit))
    }

    /// Set pressure in the unit with declaration index `ordinal`
    ///
    /// An unknown ordinal is logged as a warning and the field is left
    /// unchanged.
    pub fn set_pressure_for_ordinal(&mut self, value: f64, ordinal: u32) {
        match PressureUnit::from_ordinal(ordinal) {
            Ok(unit) => self.set_pressure(value, unit),
            Err(err) => warn!("{err}; pressure left unchanged"),
        }
    }

    // ------------------------------------------------------------------------
    // Air attenuation
    // ------------------------------------------------------------------------

    pub fn is_air_attenuation_applied(&self) -> bool {
        self.air_attenuation_applied
    }

    pub fn set_air_attenuation_applied(&mut self, applied: bool) {
        self.air_attenuation_applied = applied;
        self.notify(EnvironmentField::AirAttenuationApplied);
    }
}
